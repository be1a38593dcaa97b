// ABOUTME: Profile and day-log models shared across the app screens
// ABOUTME: Persisted through the key-value port; daily totals always derived
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealTrack

//! App-level state models
//!
//! The onboarding questionnaire produces a [`UserProfile`]; the logging
//! screens append [`LoggedMeal`] and [`LoggedExercise`] entries to the
//! current [`DayLog`]. Both live behind the [`crate::storage`] port. Daily
//! totals are computed from the entries on every read - they are views,
//! not stored fields.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppResult;
use crate::recipes::models::NutritionTotals;
use crate::storage::{load_json, store_json, KeyValueStore};

/// Storage key for the user profile
pub const PROFILE_KEY: &str = "profile";

/// Storage key for a day log
#[must_use]
pub fn day_log_key(date: NaiveDate) -> String {
    format!("day_log:{}", date.format("%Y-%m-%d"))
}

/// Fitness goal chosen during onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Calorie deficit
    LoseWeight,
    /// Calorie maintenance
    #[default]
    MaintainWeight,
    /// Calorie surplus with protein emphasis
    GainMuscle,
}

/// User profile from the onboarding questionnaire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Stable profile identifier
    pub id: Uuid,
    /// Display name for social screens
    pub display_name: String,
    /// Selected goal
    pub goal: FitnessGoal,
    /// Daily calorie target, when the user set one
    pub daily_calorie_target: Option<f64>,
    /// Body weight in kilograms
    pub weight_kg: Option<f64>,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Create a profile with defaults for the optional metrics
    pub fn new(display_name: impl Into<String>, goal: FitnessGoal) -> Self {
        Self {
            id: Uuid::new_v4(),
            display_name: display_name.into(),
            goal,
            daily_calorie_target: None,
            weight_kg: None,
            height_cm: None,
            created_at: Utc::now(),
        }
    }

    /// Load the stored profile, if one exists
    #[must_use]
    pub fn load(store: &dyn KeyValueStore) -> Option<Self> {
        load_json(store, PROFILE_KEY)
    }

    /// Persist this profile
    ///
    /// # Errors
    ///
    /// Returns a serialization error when the profile cannot be encoded.
    pub fn save(&self, store: &dyn KeyValueStore) -> AppResult<()> {
        store_json(store, PROFILE_KEY, self)
    }
}

/// One meal entry in a day log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedMeal {
    /// Meal or recipe name
    pub name: String,
    /// Nutrition for the logged portion
    pub nutrition: NutritionTotals,
    /// When the meal was logged
    pub logged_at: DateTime<Utc>,
}

/// One exercise entry in a day log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedExercise {
    /// Exercise name
    pub name: String,
    /// Duration in minutes
    pub duration_mins: u32,
    /// Estimated calories burned
    pub calories_burned: f64,
}

/// All entries logged on one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayLog {
    /// Calendar date this log covers
    pub date: NaiveDate,
    /// Meals logged on this day
    pub meals: Vec<LoggedMeal>,
    /// Exercises logged on this day
    pub exercises: Vec<LoggedExercise>,
}

impl DayLog {
    /// Create an empty log for `date`
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            meals: Vec::new(),
            exercises: Vec::new(),
        }
    }

    /// Load the log for `date`, or an empty one when none is stored
    #[must_use]
    pub fn load(store: &dyn KeyValueStore, date: NaiveDate) -> Self {
        load_json(store, &day_log_key(date)).unwrap_or_else(|| Self::new(date))
    }

    /// Persist this log under its date key
    ///
    /// # Errors
    ///
    /// Returns a serialization error when the log cannot be encoded.
    pub fn save(&self, store: &dyn KeyValueStore) -> AppResult<()> {
        store_json(store, &day_log_key(self.date), self)
    }

    /// Append a meal entry
    pub fn add_meal(&mut self, meal: LoggedMeal) {
        self.meals.push(meal);
    }

    /// Append an exercise entry
    pub fn add_exercise(&mut self, exercise: LoggedExercise) {
        self.exercises.push(exercise);
    }

    /// Sum of nutrition across all logged meals
    #[must_use]
    pub fn consumed(&self) -> NutritionTotals {
        let mut totals = NutritionTotals::default();
        for meal in &self.meals {
            totals.calories += meal.nutrition.calories;
            totals.protein += meal.nutrition.protein;
            totals.carbs += meal.nutrition.carbs;
            totals.fat += meal.nutrition.fat;
        }
        totals
    }

    /// Sum of calories burned across all logged exercises
    #[must_use]
    pub fn burned(&self) -> f64 {
        self.exercises.iter().map(|e| e.calories_burned).sum()
    }

    /// Consumed minus burned calories
    #[must_use]
    pub fn net_calories(&self) -> f64 {
        self.consumed().calories - self.burned()
    }
}
