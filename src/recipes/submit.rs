// ABOUTME: Recipe draft validation and hand-off to the recipe API
// ABOUTME: Builds the create-recipe payload with computed nutrition attached
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealTrack

//! Recipe submission
//!
//! Packages a completed [`RecipeDraft`] plus its computed nutrition and hands
//! it to the recipe API. Validation runs first and blocks the call entirely;
//! nothing incomplete is ever sent. A transport failure is returned to the
//! caller with the draft untouched so the user can retry - there is no
//! automatic retry or backoff here, matching the app it was extracted from.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::aggregator::{aggregate, RecipeNutrition};
use super::models::{IngredientUnit, MatchedIngredient, NutritionTotals, RecipeDraft};
use crate::errors::{AppError, AppResult};

/// One ingredient as sent to the recipe API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientPayload {
    /// Ingredient name
    pub name: String,
    /// Serving descriptor, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<String>,
    /// Consumption unit
    pub unit: IngredientUnit,
    /// Consumed quantity
    pub quantity: f64,
    /// Calories per reference serving
    pub calories: f64,
    /// Protein grams per reference serving
    pub protein: f64,
    /// Carbohydrate grams per reference serving
    pub carbs: f64,
    /// Fat grams per reference serving
    pub fat: f64,
}

impl From<&MatchedIngredient> for IngredientPayload {
    fn from(ingredient: &MatchedIngredient) -> Self {
        Self {
            name: ingredient.name.clone(),
            serving_size: ingredient.serving_size_text.clone(),
            unit: ingredient.unit,
            quantity: ingredient.quantity,
            calories: ingredient.calories_per_serving,
            protein: ingredient.protein_per_serving,
            carbs: ingredient.carbs_per_serving,
            fat: ingredient.fat_per_serving,
        }
    }
}

/// Computed nutrition as sent to the recipe API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionPayload {
    /// Sum across all ingredients
    pub total: NutritionTotals,
    /// Total divided by the serving count
    #[serde(rename = "perServing")]
    pub per_serving: NutritionTotals,
}

impl From<&RecipeNutrition> for NutritionPayload {
    fn from(nutrition: &RecipeNutrition) -> Self {
        Self {
            total: nutrition.total,
            per_serving: nutrition.per_serving,
        }
    }
}

/// Create-recipe request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRecipeRequest {
    /// Recipe name
    pub name: String,
    /// Serving count
    pub servings: u32,
    /// Ingredient rows
    pub ingredients: Vec<IngredientPayload>,
    /// Computed nutrition, both views
    pub nutrition: NutritionPayload,
}

impl CreateRecipeRequest {
    /// Build the wire payload from a validated draft and its nutrition
    #[must_use]
    pub fn from_draft(draft: &RecipeDraft, nutrition: &RecipeNutrition) -> Self {
        Self {
            name: draft.name.clone(),
            servings: draft.servings,
            ingredients: draft.ingredients.iter().map(IngredientPayload::from).collect(),
            nutrition: NutritionPayload::from(nutrition),
        }
    }
}

/// Create-recipe response
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecipeResponse {
    /// Whether the recipe was persisted
    pub success: bool,
    /// The created recipe object, opaque to this crate
    #[serde(default)]
    pub recipe: Option<serde_json::Value>,
}

/// Port to the recipe persistence collaborator
#[async_trait]
pub trait RecipeSink: Send + Sync {
    /// Create a recipe
    async fn create_recipe(&self, request: &CreateRecipeRequest)
        -> AppResult<CreateRecipeResponse>;
}

/// Validate a draft against the submission preconditions
///
/// Name non-empty, servings >= 1, at least one ingredient, no unmatched
/// rows. The first violation found is returned; the submit control stays
/// disabled until all pass.
///
/// # Errors
///
/// Returns `AppError` with a validation code for the first violated
/// precondition.
pub fn validate_draft(draft: &RecipeDraft) -> AppResult<()> {
    if draft.name.trim().is_empty() {
        return Err(AppError::missing_field("recipe name"));
    }

    if draft.servings < 1 {
        return Err(AppError::out_of_range("servings must be at least 1"));
    }

    if draft.ingredients.is_empty() {
        return Err(AppError::invalid_input("recipe has no ingredients"));
    }

    if draft.has_unmatched() {
        return Err(AppError::invalid_input(
            "recipe has unmatched ingredients; resolve or remove them before saving",
        ));
    }

    Ok(())
}

/// Validate, package, and submit a draft to the recipe API
///
/// Nutrition is recomputed from the draft at submission time, never read
/// from a cache. On any failure the caller's draft is left untouched for
/// retry; no duplicate submission is attempted.
///
/// # Errors
///
/// Returns a validation error before any network call, or an external
/// service error when the API call fails or reports `success: false`.
pub async fn submit_recipe(
    sink: &dyn RecipeSink,
    draft: &RecipeDraft,
) -> AppResult<CreateRecipeResponse> {
    validate_draft(draft)?;

    let nutrition = aggregate(&draft.ingredients, draft.servings);
    let request = CreateRecipeRequest::from_draft(draft, &nutrition);

    let response = sink.create_recipe(&request).await?;
    if !response.success {
        return Err(AppError::external_service(
            "recipe API",
            "create was rejected",
        ));
    }

    info!(recipe = %draft.name, servings = draft.servings, "recipe submitted");
    Ok(response)
}
