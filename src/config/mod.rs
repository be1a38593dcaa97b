// ABOUTME: Configuration management module for centralized app settings
// ABOUTME: Environment-variable driven; validated at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealTrack

//! Configuration module
//!
//! Centralized configuration for the MealTrack core, loaded from environment
//! variables at startup and handed to the external clients and logging setup.

/// Environment and endpoint configuration
pub mod environment;

pub use environment::{AppConfig, Environment, LogLevel};
