// ABOUTME: Resolves free-text ingredient lines against the food-search port
// ABOUTME: Sequential, fail-soft matching; failures become unmatched rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealTrack

//! Ingredient line matching
//!
//! Bulk-pasted ingredient lines are resolved one at a time against the
//! food-search collaborator. Lookups run sequentially - bulk-matching N
//! lines takes roughly N times the per-call latency - which the progress
//! indicator in the wizard relies on. Lines are matched independently: a
//! miss, transport failure, or timeout on one line degrades that line to an
//! unmatched row and never aborts the batch. Repeated identical lines each
//! trigger their own lookup; nothing is cached or deduplicated.
//!
//! Dropping the returned future between lookups cancels the batch without
//! mutating any caller state; results only exist once the future completes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use super::models::MatchedIngredient;

/// Default per-lookup network timeout
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// One food record returned by the search collaborator
///
/// Nutrition fields are per one reference serving and default to zero when
/// the API omits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodCandidate {
    /// Food name
    pub name: String,
    /// Free-text serving descriptor (e.g. "100g", "1 cup (240ml)")
    #[serde(default)]
    pub serving_size: Option<String>,
    /// Calories per serving
    #[serde(default)]
    pub calories: f64,
    /// Protein grams per serving
    #[serde(default)]
    pub protein: f64,
    /// Carbohydrate grams per serving
    #[serde(default)]
    pub carbs: f64,
    /// Fat grams per serving
    #[serde(default)]
    pub fat: f64,
}

/// Errors from the food-search collaborator
///
/// These never escape the matcher: every variant degrades the affected line
/// to an unmatched row.
#[derive(Debug, Clone, Error)]
pub enum LookupError {
    /// Request could not be sent or the connection failed
    #[error("food search request failed: {0}")]
    Network(String),
    /// The API answered with a non-success status
    #[error("food search returned HTTP {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },
    /// The response body could not be decoded
    #[error("food search response could not be parsed: {0}")]
    Parse(String),
}

/// Port to the food-search collaborator
///
/// Candidates are expected best-ranked first; an empty list signals no
/// match.
#[async_trait]
pub trait FoodLookup: Send + Sync {
    /// Search foods by free-text query
    async fn search(&self, query: &str) -> Result<Vec<FoodCandidate>, LookupError>;
}

/// Resolve one free-text line to an ingredient row
///
/// The line is trimmed and used as the search query. The first candidate
/// wins; zero candidates, a transport error, or a timeout all produce an
/// unmatched row.
pub async fn match_line(
    lookup: &dyn FoodLookup,
    line: &str,
    timeout: Duration,
) -> MatchedIngredient {
    let query = line.trim();

    match tokio::time::timeout(timeout, lookup.search(query)).await {
        Ok(Ok(candidates)) => match candidates.first() {
            Some(candidate) => {
                debug!(query, candidate = %candidate.name, "ingredient matched");
                MatchedIngredient::from_candidate(line, candidate)
            }
            None => {
                debug!(query, "no candidates for ingredient line");
                MatchedIngredient::unresolved(line)
            }
        },
        Ok(Err(err)) => {
            warn!(query, error = %err, "food lookup failed, marking line unmatched");
            MatchedIngredient::unresolved(line)
        }
        Err(_) => {
            warn!(query, timeout_secs = timeout.as_secs(), "food lookup timed out");
            MatchedIngredient::unresolved(line)
        }
    }
}

/// Resolve a batch of lines, one sequential lookup per line
///
/// Output order matches input order; the result always has one entry per
/// line.
pub async fn match_lines<I, S>(
    lookup: &dyn FoodLookup,
    lines: I,
    timeout: Duration,
) -> Vec<MatchedIngredient>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut matched = Vec::new();
    for line in lines {
        matched.push(match_line(lookup, line.as_ref(), timeout).await);
    }
    matched
}

/// Re-search a previously unmatched row and replace it in place
///
/// Follows the same single-line path as bulk matching, touching only the
/// indexed row. Returns false when `index` is out of range.
pub async fn rematch_line(
    lookup: &dyn FoodLookup,
    ingredients: &mut [MatchedIngredient],
    index: usize,
    query: &str,
    timeout: Duration,
) -> bool {
    let Some(slot) = ingredients.get_mut(index) else {
        warn!(index, "rematch index out of range");
        return false;
    };

    *slot = match_line(lookup, query, timeout).await;
    true
}
