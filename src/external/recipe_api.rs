// ABOUTME: HTTP client for the recipe persistence API
// ABOUTME: Implements the RecipeSink port; ships a mock for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealTrack

//! Recipe API client
//!
//! `POST {base_url}/recipes` with the create-recipe payload. One call per
//! submission; retrying is the user's decision, never this client's.

use async_trait::async_trait;
use reqwest::Client;
use std::sync::Mutex;
use std::time::Duration;

use crate::errors::{AppError, AppResult};
use crate::recipes::submit::{CreateRecipeRequest, CreateRecipeResponse, RecipeSink};

/// Recipe API client configuration
#[derive(Debug, Clone)]
pub struct RecipeApiConfig {
    /// Base URL for the recipe API
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for RecipeApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.mealtrack.app/v1".to_owned(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP recipe API client
pub struct RecipeApiClient {
    config: RecipeApiConfig,
    client: Client,
}

impl RecipeApiClient {
    /// Create a new recipe API client
    #[must_use]
    pub fn new(config: RecipeApiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();

        Self { config, client }
    }
}

#[async_trait]
impl RecipeSink for RecipeApiClient {
    async fn create_recipe(
        &self,
        request: &CreateRecipeRequest,
    ) -> AppResult<CreateRecipeResponse> {
        let url = format!("{}/recipes", self.config.base_url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::external_service("recipe API", e.to_string()))?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(AppError::external_service(
                "recipe API",
                format!("HTTP {status}: {text}"),
            ));
        }

        serde_json::from_str(&text)
            .map_err(|e| AppError::external_service("recipe API", format!("JSON parse error: {e}")))
    }
}

/// Mock recipe sink for tests (no network)
///
/// Records every accepted request; can be flipped into a failing or
/// rejecting mode to exercise the retry-by-hand path.
#[derive(Default)]
pub struct MockRecipeSink {
    /// Requests accepted so far
    pub requests: Mutex<Vec<CreateRecipeRequest>>,
    fail_transport: bool,
    reject: bool,
}

impl MockRecipeSink {
    /// Create a mock that accepts every request
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every call at the transport level
    #[must_use]
    pub const fn failing(mut self) -> Self {
        self.fail_transport = true;
        self
    }

    /// Answer every call with `success: false`
    #[must_use]
    pub const fn rejecting(mut self) -> Self {
        self.reject = true;
        self
    }
}

#[async_trait]
impl RecipeSink for MockRecipeSink {
    async fn create_recipe(
        &self,
        request: &CreateRecipeRequest,
    ) -> AppResult<CreateRecipeResponse> {
        if self.fail_transport {
            return Err(AppError::external_service(
                "recipe API",
                "connection refused",
            ));
        }

        if self.reject {
            return Ok(CreateRecipeResponse {
                success: false,
                recipe: None,
            });
        }

        self.requests
            .lock()
            .map_err(|_| AppError::internal("mock sink lock poisoned"))?
            .push(request.clone());

        Ok(CreateRecipeResponse {
            success: true,
            recipe: Some(serde_json::json!({ "name": request.name })),
        })
    }
}
