// ABOUTME: Main library entry point for the MealTrack nutrition core
// ABOUTME: Recipe macro aggregation, ingredient matching, and day-log state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealTrack

#![deny(unsafe_code)]

//! # MealTrack Nutrition Core
//!
//! The domain core of the MealTrack fitness/nutrition tracker. The app's
//! screens (onboarding, meal and exercise logging, recipe authoring) sit on
//! top of this crate; everything here is UI-free and independently testable.
//!
//! ## Architecture
//!
//! - **Recipes**: unit normalization, macro aggregation, ingredient matching,
//!   and recipe submission - the one subsystem with real invariants
//! - **External**: HTTP clients for the food-search and recipe APIs
//! - **Models**: profile and day-log state shared across the app
//! - **Storage**: key-value persistence port with an in-memory backend
//! - **Config**: environment-based runtime configuration
//!
//! ## Example
//!
//! ```rust
//! use mealtrack::recipes::aggregator::aggregate;
//! use mealtrack::recipes::models::{IngredientUnit, MatchedIngredient};
//!
//! let rice = MatchedIngredient::new("Rice")
//!     .with_serving_size("100g")
//!     .with_macros(130.0, 2.7, 28.0, 0.3)
//!     .with_quantity(200.0, IngredientUnit::Grams);
//!
//! let nutrition = aggregate(&[rice], 2);
//! assert!((nutrition.total.calories - 260.0).abs() < f64::EPSILON);
//! assert!((nutrition.per_serving.calories - 130.0).abs() < f64::EPSILON);
//! ```

/// Environment-based configuration management
pub mod config;

/// Unified error handling with standard error codes
pub mod errors;

/// HTTP clients for the external food-search and recipe APIs
pub mod external;

/// Structured logging setup over `tracing`
pub mod logging;

/// Profile and day-log models shared across the app
pub mod models;

/// Recipe nutrition engine: units, matching, aggregation, submission
pub mod recipes;

/// Key-value persistence port and in-memory backend
pub mod storage;
