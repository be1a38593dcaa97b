// ABOUTME: Integration tests for ingredient line matching
// ABOUTME: Covers fail-soft batches, ordering, timeouts, and in-place rematch
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealTrack

use std::time::Duration;

use async_trait::async_trait;
use mealtrack::external::MockFoodLookup;
use mealtrack::recipes::matcher::{
    match_lines, rematch_line, FoodCandidate, FoodLookup, LookupError, DEFAULT_LOOKUP_TIMEOUT,
};
use mealtrack::recipes::models::IngredientUnit;

fn candidate(name: &str, serving: &str, calories: f64) -> FoodCandidate {
    FoodCandidate {
        name: name.to_owned(),
        serving_size: Some(serving.to_owned()),
        calories,
        protein: 0.0,
        carbs: 0.0,
        fat: 0.0,
    }
}

#[tokio::test]
async fn test_bulk_match_preserves_order_and_length() {
    // Line 2 has no candidates; the batch must still come back 3 long, in
    // input order, with only line 2 unmatched.
    let lookup = MockFoodLookup::new()
        .with_food("chicken breast", vec![candidate("Chicken breast", "100g", 165.0)])
        .with_food("rice", vec![candidate("Rice", "100g", 130.0)]);

    let lines = ["chicken breast", "dragon fruit jam", "rice"];
    let matched = match_lines(&lookup, lines, DEFAULT_LOOKUP_TIMEOUT).await;

    assert_eq!(matched.len(), 3);
    assert!(!matched[0].unmatched);
    assert!(matched[1].unmatched);
    assert!(!matched[2].unmatched);
    assert_eq!(matched[0].name, "Chicken breast");
    assert_eq!(matched[1].name, "dragon fruit jam");
    assert_eq!(matched[2].name, "Rice");
}

#[tokio::test]
async fn test_transport_failure_degrades_single_line() {
    let lookup = MockFoodLookup::new()
        .with_food("rice", vec![candidate("Rice", "100g", 130.0)])
        .with_failure("oats");

    let matched = match_lines(&lookup, ["rice", "oats"], DEFAULT_LOOKUP_TIMEOUT).await;

    assert!(!matched[0].unmatched);
    assert!(matched[1].unmatched);
    assert_eq!(matched[1].name, "oats");
}

#[tokio::test]
async fn test_first_candidate_wins() {
    let lookup = MockFoodLookup::new().with_food(
        "yogurt",
        vec![
            candidate("Greek yogurt", "1 cup", 220.0),
            candidate("Plain yogurt", "100g", 61.0),
        ],
    );

    let matched = match_lines(&lookup, ["yogurt"], DEFAULT_LOOKUP_TIMEOUT).await;

    assert_eq!(matched[0].name, "Greek yogurt");
    // Default unit derived from the candidate's serving text.
    assert_eq!(matched[0].unit, IngredientUnit::Cups);
    assert!((matched[0].quantity - 1.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_lines_are_trimmed_for_lookup() {
    let lookup =
        MockFoodLookup::new().with_food("rice", vec![candidate("Rice", "100g", 130.0)]);

    let matched = match_lines(&lookup, ["  rice  "], DEFAULT_LOOKUP_TIMEOUT).await;
    assert!(!matched[0].unmatched);
}

#[tokio::test]
async fn test_repeated_lines_each_get_their_own_entry() {
    let lookup =
        MockFoodLookup::new().with_food("egg", vec![candidate("Egg", "1 piece", 78.0)]);

    let matched = match_lines(&lookup, ["egg", "egg"], DEFAULT_LOOKUP_TIMEOUT).await;
    assert_eq!(matched.len(), 2);
    assert_eq!(matched[0], matched[1]);
}

/// Lookup that never resolves, for exercising the timeout path
struct StalledLookup;

#[async_trait]
impl FoodLookup for StalledLookup {
    async fn search(&self, _query: &str) -> Result<Vec<FoodCandidate>, LookupError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(Vec::new())
    }
}

#[tokio::test(start_paused = true)]
async fn test_timeout_surfaces_as_unmatched() {
    let matched = match_lines(&StalledLookup, ["rice"], Duration::from_secs(10)).await;

    assert_eq!(matched.len(), 1);
    assert!(matched[0].unmatched);
    assert_eq!(matched[0].name, "rice");
}

#[tokio::test]
async fn test_rematch_replaces_only_indexed_row() {
    let lookup = MockFoodLookup::new()
        .with_food("rice", vec![candidate("Rice", "100g", 130.0)])
        .with_food("basmati rice", vec![candidate("Basmati rice", "100g", 121.0)]);

    let mut matched = match_lines(&lookup, ["rice", "unknown thing"], DEFAULT_LOOKUP_TIMEOUT).await;
    assert!(matched[1].unmatched);

    let replaced =
        rematch_line(&lookup, &mut matched, 1, "basmati rice", DEFAULT_LOOKUP_TIMEOUT).await;

    assert!(replaced);
    assert!(!matched[1].unmatched);
    assert_eq!(matched[1].name, "Basmati rice");
    // Row 0 untouched.
    assert_eq!(matched[0].name, "Rice");
}

#[tokio::test]
async fn test_rematch_out_of_range_is_a_noop() {
    let lookup = MockFoodLookup::new();
    let mut matched = match_lines(&lookup, ["x"], DEFAULT_LOOKUP_TIMEOUT).await;

    let replaced = rematch_line(&lookup, &mut matched, 5, "y", DEFAULT_LOOKUP_TIMEOUT).await;

    assert!(!replaced);
    assert_eq!(matched.len(), 1);
}
