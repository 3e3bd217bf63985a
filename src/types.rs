//! Shared types for the betgen service.
//!
//! Wire format matches the upstream platform: camelCase field names,
//! optional fields defaulting to empty containers. These types form the
//! data model used across the scoring and server modules.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// A single chat message supplied with a scoring request.
///
/// Ephemeral: supplied per request, never stored. The timestamp is an
/// opaque string from the caller and is never inspected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// A user in the match being scored.
///
/// Only `id` is required. `profile` and `history` are accepted for forward
/// compatibility and deserialize to empty maps when absent; current scoring
/// never reads their contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub profile: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub history: HashMap<String, serde_json::Value>,
}

/// Payload for `POST /internal/betgen/score`.
///
/// Everything except `matchId` is optional — the platform's market-create
/// path sends only `{matchId, trigger, consent}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub match_id: String,
    #[serde(default)]
    pub user_a: Option<UserProfile>,
    #[serde(default)]
    pub user_b: Option<UserProfile>,
    #[serde(default)]
    pub recent_messages: Vec<Message>,
    #[serde(default)]
    pub consent: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub trigger: Option<String>,
}

impl ScoreRequest {
    /// Helper to build a test request with sensible defaults.
    #[cfg(test)]
    pub fn sample(match_id: &str, texts: &[&str]) -> Self {
        ScoreRequest {
            match_id: match_id.to_string(),
            user_a: None,
            user_b: None,
            recent_messages: texts
                .iter()
                .map(|t| Message {
                    text: t.to_string(),
                    timestamp: None,
                })
                .collect(),
            consent: HashMap::new(),
            trigger: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// The two bet markets betgen knows how to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BetType {
    #[serde(rename = "date_happens")]
    DateHappens,
    #[serde(rename = "drinks_over_2")]
    DrinksOver2,
}

impl fmt::Display for BetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BetType::DateHappens => write!(f, "date_happens"),
            BetType::DrinksOver2 => write!(f, "drinks_over_2"),
        }
    }
}

/// A synthetic prediction record: probability, margin-adjusted odds, and a
/// confidence score, plus the signal tags that produced the probability.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bet {
    pub bet_type: BetType,
    pub description: String,
    /// Outcome probability (0.0–1.0)
    pub probability: f64,
    /// Decimal odds derived from the probability
    pub odds: f64,
    /// How much the heuristic trusts its own probability (0.0–1.0)
    pub confidence: f64,
    pub signals: Vec<String>,
}

/// Response for `POST /internal/betgen/score`.
///
/// `market_id` echoes the request's `matchId`; `bets` always holds exactly
/// two entries in fixed order: `date_happens` then `drinks_over_2`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub market_id: String,
    pub bets: Vec<Bet>,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Domain-specific error type for betgen.
///
/// Validation is the only failure the service can produce at runtime:
/// scoring is total once a request passes the shape check.
#[derive(Debug, thiserror::Error)]
pub enum BetgenError {
    #[error("Invalid request payload: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
