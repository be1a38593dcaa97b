// ABOUTME: Recipe macro aggregation over matched ingredient rows
// ABOUTME: Folds rows into total and per-serving NutritionTotals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealTrack

//! Recipe macro aggregation
//!
//! One canonical fold replaces the three near-identical calculators that
//! historically lived behind the recipe, review, and day-log screens. Any
//! edit to a row's quantity, unit, or macros - or to the serving count -
//! recomputes from scratch; there are no cached partial sums to fall out of
//! sync, and inputs stay under a hundred rows.

use super::models::{MatchedIngredient, NutritionTotals};
use super::units::scale_factor;

/// Total and per-serving nutrition for a recipe
///
/// `per_serving` is always `total / servings`; there is no second
/// computation path that could desync the two views.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RecipeNutrition {
    /// Sum across all matched rows at their consumed quantities
    pub total: NutritionTotals,
    /// `total` divided by the serving count
    pub per_serving: NutritionTotals,
}

/// Fold ingredient rows into total and per-serving nutrition
///
/// Unmatched rows contribute zero. All arithmetic stays in `f64` with no
/// intermediate rounding, so the same inputs always reproduce the same
/// unrounded totals. A `servings` of zero is clamped to 1.
#[must_use]
pub fn aggregate(ingredients: &[MatchedIngredient], servings: u32) -> RecipeNutrition {
    let mut total = NutritionTotals::default();

    for ingredient in ingredients {
        if ingredient.unmatched {
            continue;
        }

        let factor = scale_factor(
            ingredient.quantity,
            ingredient.unit,
            ingredient.serving_size_text.as_deref(),
        );

        total.calories += ingredient.calories_per_serving * factor;
        total.protein += ingredient.protein_per_serving * factor;
        total.carbs += ingredient.carbs_per_serving * factor;
        total.fat += ingredient.fat_per_serving * factor;
    }

    RecipeNutrition {
        total,
        per_serving: total.per_serving(servings),
    }
}
