// ABOUTME: Unit-to-gram normalization against an ingredient's reference serving
// ABOUTME: Turns (quantity, unit, serving text) into a per-serving scale factor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealTrack

//! Unit-to-gram normalization
//!
//! Lookup results express nutrition per one reference serving, described only
//! by free text ("100g", "1 cup (240ml)"). The user logs consumption in
//! whatever unit they chose. This module bridges the two: it turns a
//! `(quantity, unit)` pair plus the serving text into a dimensionless factor
//! such that `contributed = per_serving_value * factor`.
//!
//! Every function here is pure and total. Unparseable serving text degrades
//! to a per-100 g/ml reference instead of erroring; an approximate total is
//! always preferred over blocking the user.

use regex::Regex;
use std::sync::LazyLock;

use super::models::IngredientUnit;

/// Reference serving assumed when the serving text is absent or unparseable
pub const FALLBACK_REFERENCE_GRAMS: f64 = 100.0;

/// Permissive serving-size pattern: a number followed by a known unit token
///
/// Matches the first such pair anywhere in the text, so "1 cup (240ml)"
/// resolves to 1 cup.
static SERVING_SIZE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(g|ml|cups?|tbsps?|tsps?|pieces?)\b")
        .expect("serving-size pattern is valid")
});

/// Parse a serving descriptor into an amount and unit
///
/// Returns `None` when no `number + unit` pair is present.
#[must_use]
pub fn parse_serving_size(text: &str) -> Option<(f64, IngredientUnit)> {
    let captures = SERVING_SIZE_RE.captures(text)?;
    let amount: f64 = captures.get(1)?.as_str().parse().ok()?;
    let unit = IngredientUnit::from_token(captures.get(2)?.as_str())?;
    Some((amount, unit))
}

/// Grams (or milliliters) represented by one reference serving
///
/// Falls back to [`FALLBACK_REFERENCE_GRAMS`] when the text is absent or
/// unparseable, treating the serving as "per 100 g/ml".
#[must_use]
pub fn grams_per_reference_serving(serving_size_text: Option<&str>) -> f64 {
    serving_size_text
        .and_then(parse_serving_size)
        .map_or(FALLBACK_REFERENCE_GRAMS, |(amount, unit)| {
            amount * unit.gram_equivalent()
        })
}

/// Dimensionless scale factor for a consumed `(quantity, unit)` pair
///
/// `contributed_nutrition = per_serving_nutrition * scale_factor(..)`.
/// For gram/milliliter units this collapses to
/// `quantity / grams_per_reference_serving`.
#[must_use]
pub fn scale_factor(quantity: f64, unit: IngredientUnit, serving_size_text: Option<&str>) -> f64 {
    (quantity * unit.gram_equivalent()) / grams_per_reference_serving(serving_size_text)
}

/// Default consumption unit for a freshly matched row
///
/// Derived from the serving text when it parses, grams otherwise.
#[must_use]
pub fn default_unit_for(serving_size_text: Option<&str>) -> IngredientUnit {
    serving_size_text
        .and_then(parse_serving_size)
        .map_or(IngredientUnit::Grams, |(_, unit)| unit)
}
