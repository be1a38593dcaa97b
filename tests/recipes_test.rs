// ABOUTME: Integration tests for the recipe nutrition engine
// ABOUTME: Covers unit normalization, aggregation invariants, and rounding
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealTrack

//! Tests for the recipes module including:
//! - Serving-size parsing and unit-to-gram normalization
//! - Aggregation determinism and unmatched exclusion
//! - Per-serving scaling and presentation rounding

use mealtrack::recipes::aggregator::aggregate;
use mealtrack::recipes::models::{IngredientUnit, MatchedIngredient, RecipeDraft};
use mealtrack::recipes::units::{parse_serving_size, scale_factor};

fn rice_200g() -> MatchedIngredient {
    MatchedIngredient::new("Rice")
        .with_serving_size("100g")
        .with_macros(130.0, 2.7, 28.0, 0.3)
        .with_quantity(200.0, IngredientUnit::Grams)
}

// ============================================================================
// Unit Normalization Tests
// ============================================================================

#[test]
fn test_gram_equivalents() {
    assert!((IngredientUnit::Grams.gram_equivalent() - 1.0).abs() < f64::EPSILON);
    assert!((IngredientUnit::Milliliters.gram_equivalent() - 1.0).abs() < f64::EPSILON);
    assert!((IngredientUnit::Cups.gram_equivalent() - 240.0).abs() < f64::EPSILON);
    assert!((IngredientUnit::Tablespoons.gram_equivalent() - 15.0).abs() < f64::EPSILON);
    assert!((IngredientUnit::Teaspoons.gram_equivalent() - 5.0).abs() < f64::EPSILON);
    assert!((IngredientUnit::Pieces.gram_equivalent() - 50.0).abs() < f64::EPSILON);
}

#[test]
fn test_parse_serving_size_variants() {
    assert_eq!(
        parse_serving_size("100g"),
        Some((100.0, IngredientUnit::Grams))
    );
    assert_eq!(
        parse_serving_size("1 cup (240ml)"),
        Some((1.0, IngredientUnit::Cups))
    );
    assert_eq!(
        parse_serving_size("2.5 tbsp"),
        Some((2.5, IngredientUnit::Tablespoons))
    );
    assert_eq!(parse_serving_size("one handful"), None);
}

#[test]
fn test_serving_size_fallback_factor() {
    // Absent or unparseable text: reference serving is 100 g/ml, so logging
    // 100g must contribute exactly one serving.
    let factor = scale_factor(100.0, IngredientUnit::Grams, None);
    assert!((factor - 1.0).abs() < f64::EPSILON);

    let factor = scale_factor(100.0, IngredientUnit::Grams, Some("a pinch"));
    assert!((factor - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_unit_equivalence_cup_vs_grams() {
    // 1 cup is 240 in the fixed table, so against a "240g" serving it must
    // contribute the same as 240g logged directly.
    let ingredient = |quantity, unit| {
        MatchedIngredient::new("Oats")
            .with_serving_size("240g")
            .with_macros(389.0, 16.9, 66.3, 6.9)
            .with_quantity(quantity, unit)
    };

    let as_cup = aggregate(&[ingredient(1.0, IngredientUnit::Cups)], 1);
    let as_grams = aggregate(&[ingredient(240.0, IngredientUnit::Grams)], 1);

    assert_eq!(as_cup.total, as_grams.total);
    assert_eq!(as_cup.per_serving, as_grams.per_serving);
}

// ============================================================================
// Aggregation Tests
// ============================================================================

#[test]
fn test_aggregation_is_deterministic() {
    let ingredients = vec![
        rice_200g(),
        MatchedIngredient::new("Olive oil")
            .with_serving_size("1 tbsp")
            .with_macros(119.0, 0.0, 0.0, 13.5)
            .with_quantity(2.0, IngredientUnit::Tablespoons),
    ];

    let first = aggregate(&ingredients, 3);
    let second = aggregate(&ingredients, 3);

    // Bit-identical, not merely close.
    assert_eq!(first.total, second.total);
    assert_eq!(first.per_serving, second.per_serving);
}

#[test]
fn test_unmatched_contributes_zero() {
    let mut mystery = MatchedIngredient::new("mystery sauce").with_macros(500.0, 10.0, 50.0, 20.0);
    mystery.unmatched = true;

    let with_unmatched = aggregate(&[rice_200g(), mystery.clone()], 1);
    let without = aggregate(&[rice_200g()], 1);
    assert_eq!(with_unmatched.total, without.total);

    // Flipping the flag adds exactly that ingredient's contribution.
    mystery.unmatched = false;
    let flipped = aggregate(&[rice_200g(), mystery.clone()], 1);
    let alone = aggregate(&[mystery], 1);
    assert!(
        (flipped.total.calories - (without.total.calories + alone.total.calories)).abs() < 1e-9
    );
}

#[test]
fn test_per_serving_is_total_divided_by_servings() {
    let ingredients = vec![rice_200g(), rice_200g(), rice_200g()];

    for servings in 1..=7_u32 {
        let nutrition = aggregate(&ingredients, servings);
        let divisor = f64::from(servings);
        assert!(
            (nutrition.per_serving.calories - nutrition.total.calories / divisor).abs()
                < f64::EPSILON
        );
        assert!(
            (nutrition.per_serving.protein - nutrition.total.protein / divisor).abs()
                < f64::EPSILON
        );
    }
}

#[test]
fn test_noop_edit_leaves_totals_unchanged() {
    let mut ingredients = vec![rice_200g()];
    let before = aggregate(&ingredients, 2);

    ingredients[0].quantity = 200.0; // same value written back
    let after = aggregate(&ingredients, 2);

    assert_eq!(before.total, after.total);
    assert_eq!(before.per_serving, after.per_serving);
}

#[test]
fn test_end_to_end_rice_scenario() {
    // 200g of rice at 130 kcal per 100g serving, split into 2 servings.
    let nutrition = aggregate(&[rice_200g()], 2);

    assert!((nutrition.total.calories - 260.0).abs() < 1e-9);
    assert!((nutrition.per_serving.calories - 130.0).abs() < 1e-9);
    assert!((nutrition.total.protein - 5.4).abs() < 1e-9);
    assert!((nutrition.total.carbs - 56.0).abs() < 1e-9);
    assert!((nutrition.total.fat - 0.6).abs() < 1e-9);
}

#[test]
fn test_end_to_end_unmatched_calories_excluded() {
    let mut unknown = MatchedIngredient::new("imported cheese").with_macros(500.0, 0.0, 0.0, 0.0);
    unknown.unmatched = true;

    let nutrition = aggregate(&[rice_200g(), unknown], 1);
    assert!((nutrition.total.calories - 260.0).abs() < 1e-9);
}

// ============================================================================
// Rounding and Draft Tests
// ============================================================================

#[test]
fn test_rounding_is_presentation_only() {
    let ingredient = MatchedIngredient::new("Egg")
        .with_serving_size("1 piece")
        .with_macros(77.5, 6.3, 0.6, 5.3)
        .with_quantity(1.0, IngredientUnit::Pieces);

    let nutrition = aggregate(&[ingredient], 1);
    let rounded = nutrition.total.rounded();

    // Half-up on the .5 boundary.
    assert_eq!(rounded.calories, 78);
    // The unrounded truth is untouched.
    assert!((nutrition.total.calories - 77.5).abs() < f64::EPSILON);
}

#[test]
fn test_draft_tracks_unmatched_rows() {
    let draft = RecipeDraft::new("Fried rice", 2).with_ingredient(rice_200g());
    assert!(!draft.has_unmatched());

    let mut unknown = MatchedIngredient::new("?");
    unknown.unmatched = true;
    let draft = draft.with_ingredient(unknown);
    assert!(draft.has_unmatched());
}
