// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses endpoints, timeouts, and log levels from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealTrack

//! Environment-based configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use tracing::info;

use crate::external::{FoodSearchConfig, RecipeApiConfig};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Environment type for logging and diagnostics
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Application configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Base URL of the food-search API
    pub food_api_base_url: String,
    /// Base URL of the recipe API
    pub recipe_api_base_url: String,
    /// Per-lookup timeout in seconds for ingredient matching
    pub lookup_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            log_level: LogLevel::Info,
            food_api_base_url: "https://api.mealtrack.app/v1".to_owned(),
            recipe_api_base_url: "https://api.mealtrack.app/v1".to_owned(),
            lookup_timeout_secs: 10,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults; set-but-invalid numeric
    /// variables are an error rather than a silent fallback.
    ///
    /// # Errors
    ///
    /// Returns an error when a set variable fails to parse or validation
    /// fails.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let environment = env::var("MEALTRACK_ENV")
            .map(|v| Environment::from_str_or_default(&v))
            .unwrap_or_default();

        let log_level = env::var("LOG_LEVEL")
            .map(|v| LogLevel::from_str_or_default(&v))
            .unwrap_or_default();

        let food_api_base_url =
            env::var("FOOD_API_BASE_URL").unwrap_or(defaults.food_api_base_url);
        let recipe_api_base_url =
            env::var("RECIPE_API_BASE_URL").unwrap_or(defaults.recipe_api_base_url);

        let lookup_timeout_secs = match env::var("FOOD_LOOKUP_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("invalid FOOD_LOOKUP_TIMEOUT_SECS: {raw}"))?,
            Err(_) => defaults.lookup_timeout_secs,
        };

        let config = Self {
            environment,
            log_level,
            food_api_base_url,
            recipe_api_base_url,
            lookup_timeout_secs,
        };
        config.validate()?;

        info!(
            environment = %config.environment,
            food_api = %config.food_api_base_url,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when an endpoint is empty or the timeout is zero.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            !self.food_api_base_url.trim().is_empty(),
            "FOOD_API_BASE_URL must not be empty"
        );
        anyhow::ensure!(
            !self.recipe_api_base_url.trim().is_empty(),
            "RECIPE_API_BASE_URL must not be empty"
        );
        anyhow::ensure!(
            self.lookup_timeout_secs > 0,
            "FOOD_LOOKUP_TIMEOUT_SECS must be positive"
        );
        Ok(())
    }

    /// Per-lookup timeout as a `Duration`
    #[must_use]
    pub const fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup_timeout_secs)
    }

    /// Client configuration for the food-search API
    #[must_use]
    pub fn food_search_config(&self) -> FoodSearchConfig {
        FoodSearchConfig {
            base_url: self.food_api_base_url.clone(),
            timeout: self.lookup_timeout(),
        }
    }

    /// Client configuration for the recipe API
    #[must_use]
    pub fn recipe_api_config(&self) -> RecipeApiConfig {
        RecipeApiConfig {
            base_url: self.recipe_api_base_url.clone(),
            ..RecipeApiConfig::default()
        }
    }
}
