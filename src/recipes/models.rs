// ABOUTME: Data models for recipe authoring and nutrition computation
// ABOUTME: Defines IngredientUnit, MatchedIngredient, RecipeDraft, NutritionTotals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealTrack

use serde::{Deserialize, Serialize};

use super::matcher::FoodCandidate;
use super::units;

/// Ingredient measurement unit with a fixed gram/milliliter equivalent
///
/// The equivalents are approximations (a level cup, an average piece), not
/// measured values. They are part of the output contract: changing them
/// changes every computed total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IngredientUnit {
    /// Weight in grams (base unit)
    #[default]
    Grams,
    /// Volume in milliliters
    Milliliters,
    /// US cups (240ml)
    Cups,
    /// Tablespoons (15ml)
    Tablespoons,
    /// Teaspoons (5ml)
    Teaspoons,
    /// Count of whole items (eggs, chicken breasts, etc.)
    Pieces,
}

impl IngredientUnit {
    /// Approximate grams (or milliliters) represented by one of this unit
    #[must_use]
    pub const fn gram_equivalent(self) -> f64 {
        match self {
            Self::Grams | Self::Milliliters => 1.0,
            Self::Cups => 240.0,
            Self::Tablespoons => 15.0,
            Self::Teaspoons => 5.0,
            Self::Pieces => 50.0,
        }
    }

    /// Get the abbreviation for display
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Grams => "g",
            Self::Milliliters => "ml",
            Self::Cups => "cup",
            Self::Tablespoons => "tbsp",
            Self::Teaspoons => "tsp",
            Self::Pieces => "piece",
        }
    }

    /// Parse a unit token as it appears in serving-size text
    ///
    /// Case-insensitive, accepts plural forms.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "g" => Some(Self::Grams),
            "ml" => Some(Self::Milliliters),
            "cup" | "cups" => Some(Self::Cups),
            "tbsp" | "tbsps" => Some(Self::Tablespoons),
            "tsp" | "tsps" => Some(Self::Teaspoons),
            "piece" | "pieces" => Some(Self::Pieces),
            _ => None,
        }
    }

    /// Check if this unit is a volume measurement
    #[must_use]
    pub const fn is_volume(self) -> bool {
        matches!(
            self,
            Self::Milliliters | Self::Cups | Self::Tablespoons | Self::Teaspoons
        )
    }
}

/// One ingredient row after matching, as edited by the user
///
/// Every nutrition field defaults to 0.0 rather than being optional; absent
/// values must never reach the aggregation as anything but zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedIngredient {
    /// Display name (lookup candidate name, or the raw line if unmatched)
    pub name: String,
    /// The raw text line this row was matched from
    pub original_text: String,
    /// Free-text serving descriptor from the lookup (e.g. "100g", "1 cup")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving_size_text: Option<String>,
    /// User-selected consumption unit
    pub unit: IngredientUnit,
    /// How many `unit`s the user consumed
    pub quantity: f64,
    /// Calories per one reference serving
    #[serde(default)]
    pub calories_per_serving: f64,
    /// Protein grams per one reference serving
    #[serde(default)]
    pub protein_per_serving: f64,
    /// Carbohydrate grams per one reference serving
    #[serde(default)]
    pub carbs_per_serving: f64,
    /// Fat grams per one reference serving
    #[serde(default)]
    pub fat_per_serving: f64,
    /// True when the lookup found no candidate; contributes zero to totals
    pub unmatched: bool,
}

impl MatchedIngredient {
    /// Create a matched ingredient with zeroed macros and quantity 1
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            original_text: name.clone(),
            name,
            serving_size_text: None,
            unit: IngredientUnit::Grams,
            quantity: 1.0,
            calories_per_serving: 0.0,
            protein_per_serving: 0.0,
            carbs_per_serving: 0.0,
            fat_per_serving: 0.0,
            unmatched: false,
        }
    }

    /// Build a row from the best-ranked lookup candidate for `line`
    ///
    /// Quantity starts at 1 and the unit is derived from the candidate's
    /// serving text (falling back to grams), matching what the user sees
    /// before editing the row.
    #[must_use]
    pub fn from_candidate(line: &str, candidate: &FoodCandidate) -> Self {
        let unit = units::default_unit_for(candidate.serving_size.as_deref());
        Self {
            name: candidate.name.clone(),
            original_text: line.to_owned(),
            serving_size_text: candidate.serving_size.clone(),
            unit,
            quantity: 1.0,
            calories_per_serving: candidate.calories,
            protein_per_serving: candidate.protein,
            carbs_per_serving: candidate.carbs,
            fat_per_serving: candidate.fat,
            unmatched: false,
        }
    }

    /// Build an unmatched row carrying the raw line as its name
    ///
    /// Unmatched rows contribute zero to every total and block submission
    /// until resolved or removed.
    #[must_use]
    pub fn unresolved(line: &str) -> Self {
        Self {
            name: line.to_owned(),
            original_text: line.to_owned(),
            serving_size_text: None,
            unit: IngredientUnit::Grams,
            quantity: 1.0,
            calories_per_serving: 0.0,
            protein_per_serving: 0.0,
            carbs_per_serving: 0.0,
            fat_per_serving: 0.0,
            unmatched: true,
        }
    }

    /// Set the serving-size descriptor
    #[must_use]
    pub fn with_serving_size(mut self, text: impl Into<String>) -> Self {
        self.serving_size_text = Some(text.into());
        self
    }

    /// Set per-serving macros (calories, protein, carbs, fat)
    #[must_use]
    pub const fn with_macros(mut self, calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        self.calories_per_serving = calories;
        self.protein_per_serving = protein;
        self.carbs_per_serving = carbs;
        self.fat_per_serving = fat;
        self
    }

    /// Set the consumed quantity and unit
    #[must_use]
    pub const fn with_quantity(mut self, quantity: f64, unit: IngredientUnit) -> Self {
        self.quantity = quantity;
        self.unit = unit;
        self
    }
}

/// Aggregate nutrition values, all non-negative reals
///
/// Always derived from ingredient rows, never stored as a source of truth;
/// recomputing from the same inputs must reproduce the same values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct NutritionTotals {
    /// Kilocalories
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
}

impl NutritionTotals {
    /// Divide every field by `servings`
    ///
    /// `servings` is clamped to 1 so a malformed draft can never divide by
    /// zero.
    #[must_use]
    pub fn per_serving(&self, servings: u32) -> Self {
        let divisor = f64::from(servings.max(1));
        Self {
            calories: self.calories / divisor,
            protein: self.protein / divisor,
            carbs: self.carbs / divisor,
            fat: self.fat / divisor,
        }
    }

    /// Round every field half-up to the nearest integer, for display only
    ///
    /// Rounded values are never fed back into computation.
    #[must_use]
    pub fn rounded(&self) -> RoundedNutrition {
        RoundedNutrition {
            calories: round_half_up(self.calories),
            protein: round_half_up(self.protein),
            carbs: round_half_up(self.carbs),
            fat: round_half_up(self.fat),
        }
    }
}

/// Integer nutrition values for presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundedNutrition {
    /// Kilocalories
    pub calories: i64,
    /// Protein in grams
    pub protein: i64,
    /// Carbohydrates in grams
    pub carbs: i64,
    /// Fat in grams
    pub fat: i64,
}

/// Round half-up to the nearest integer (2.5 -> 3, 2.4 -> 2)
#[allow(clippy::cast_possible_truncation)]
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// A recipe under construction in the authoring wizard
///
/// Created empty, populated across the wizard steps, submitted once, then
/// discarded from local state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDraft {
    /// Recipe name (required, non-empty at submission)
    pub name: String,
    /// Number of servings this recipe makes (>= 1 at submission)
    pub servings: u32,
    /// Ordered ingredient rows
    pub ingredients: Vec<MatchedIngredient>,
}

impl RecipeDraft {
    /// Create a new draft with basic information and no ingredients
    pub fn new(name: impl Into<String>, servings: u32) -> Self {
        Self {
            name: name.into(),
            servings,
            ingredients: Vec::new(),
        }
    }

    /// Add an ingredient row
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: MatchedIngredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// Check whether any row is still unmatched
    #[must_use]
    pub fn has_unmatched(&self) -> bool {
        self.ingredients.iter().any(|i| i.unmatched)
    }
}
