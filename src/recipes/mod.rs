// ABOUTME: Recipe nutrition engine: unit normalization, matching, aggregation
// ABOUTME: The one canonical macro calculator used by every recipe screen
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealTrack

//! Recipe nutrition engine
//!
//! The recipe-authoring flow is a 3-step wizard: basic info, ingredient
//! matching, review/save. This module holds everything behind it:
//!
//! - [`models`]: `MatchedIngredient`, `RecipeDraft`, `NutritionTotals`
//! - [`units`]: unit-to-gram normalization against the reference serving
//! - [`matcher`]: free-text ingredient lines resolved via the food-search port
//! - [`aggregator`]: total and per-serving macro computation
//! - [`submit`]: draft validation and hand-off to the recipe API

/// Total and per-serving macro aggregation
pub mod aggregator;

/// Ingredient line matching against the food-search port
pub mod matcher;

/// Recipe data models
pub mod models;

/// Draft validation and submission to the recipe API
pub mod submit;

/// Unit-to-gram normalization
pub mod units;

pub use aggregator::{aggregate, RecipeNutrition};
pub use matcher::{match_lines, rematch_line, FoodCandidate, FoodLookup, LookupError};
pub use models::{IngredientUnit, MatchedIngredient, NutritionTotals, RecipeDraft};
pub use submit::{submit_recipe, validate_draft, CreateRecipeRequest, CreateRecipeResponse, RecipeSink};
pub use units::{parse_serving_size, scale_factor};
