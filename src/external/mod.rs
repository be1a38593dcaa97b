// ABOUTME: External API client modules (food search, recipe persistence)
// ABOUTME: HTTP implementations of the recipe engine's collaborator ports

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright (c) 2025 MealTrack

//! External API Clients
//!
//! HTTP clients for the two collaborators the recipe engine depends on: the
//! food-search API behind ingredient matching, and the recipe API behind
//! submission. Mock implementations live next to each client for tests.

pub mod food_search;
pub mod recipe_api;

// Re-export commonly used types
pub use food_search::{FoodSearchClient, FoodSearchConfig, MockFoodLookup};
pub use recipe_api::{MockRecipeSink, RecipeApiClient, RecipeApiConfig};
