// ABOUTME: HTTP client for the food-search API used during ingredient matching
// ABOUTME: Implements the FoodLookup port; ships a mock for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealTrack

//! Food-search API client
//!
//! `GET {base_url}/foods/search?q=<text>` returning a JSON array of
//! candidates; an empty array signals no match. Responses are deliberately
//! not cached: the matcher's contract is that repeated identical lines each
//! trigger their own call.

use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;

use crate::recipes::matcher::{FoodCandidate, FoodLookup, LookupError};

/// Food-search client configuration
#[derive(Debug, Clone)]
pub struct FoodSearchConfig {
    /// Base URL for the food API
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for FoodSearchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.mealtrack.app/v1".to_owned(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP food-search client
pub struct FoodSearchClient {
    config: FoodSearchConfig,
    client: Client,
}

impl FoodSearchClient {
    /// Create a new food-search client
    #[must_use]
    pub fn new(config: FoodSearchConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();

        Self { config, client }
    }
}

#[async_trait]
impl FoodLookup for FoodSearchClient {
    async fn search(&self, query: &str) -> Result<Vec<FoodCandidate>, LookupError> {
        let url = format!("{}/foods/search", self.config.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(LookupError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| LookupError::Parse(e.to_string()))
    }
}

/// Mock food lookup for tests (no network)
///
/// Canned candidate lists keyed by exact query; unknown queries return an
/// empty list, and queries registered as failing return a network error.
#[derive(Default)]
pub struct MockFoodLookup {
    foods: HashMap<String, Vec<FoodCandidate>>,
    failing: Vec<String>,
}

impl MockFoodLookup {
    /// Create an empty mock
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register candidates for a query
    #[must_use]
    pub fn with_food(mut self, query: impl Into<String>, candidates: Vec<FoodCandidate>) -> Self {
        self.foods.insert(query.into(), candidates);
        self
    }

    /// Register a query whose lookup fails at the transport level
    #[must_use]
    pub fn with_failure(mut self, query: impl Into<String>) -> Self {
        self.failing.push(query.into());
        self
    }
}

#[async_trait]
impl FoodLookup for MockFoodLookup {
    async fn search(&self, query: &str) -> Result<Vec<FoodCandidate>, LookupError> {
        if self.failing.iter().any(|q| q.as_str() == query) {
            return Err(LookupError::Network("connection refused".to_owned()));
        }

        Ok(self.foods.get(query).cloned().unwrap_or_default())
    }
}
