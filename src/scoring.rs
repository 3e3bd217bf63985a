//! Bet generation heuristics.
//!
//! Turns a match context into two fixed bet records using naive keyword
//! matching over the concatenated chat text. Pure and deterministic:
//! no clock, no randomness, no I/O.

use crate::types::{Bet, BetType, ScoreRequest, ScoreResponse};

// ---------------------------------------------------------------------------
// Signal keywords
// ---------------------------------------------------------------------------

/// Substrings that signal an explicit plan to meet.
///
/// "at " keeps its trailing space: the match is a raw substring check,
/// not a word boundary, so e.g. "great vibes" also trips it.
const PLAN_KEYWORDS: [&str; 4] = ["coffee", "meet", "see you", "at "];

/// Substrings that signal drinks are on the table.
const BAR_KEYWORDS: [&str; 2] = ["bar", "drink"];

/// Bookmaker margin applied to fair odds.
const ODDS_MARGIN: f64 = 0.95;

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Score a match: two bets in fixed order, derived from two keyword signals
/// over the lowercased, space-joined message text.
///
/// `userA`, `userB`, `consent`, and `trigger` are deliberately unread —
/// they never affect the output.
pub fn score(req: &ScoreRequest) -> ScoreResponse {
    let text = concat_messages(req);
    let has_bar = contains_any(&text, &BAR_KEYWORDS);
    let has_plan = contains_any(&text, &PLAN_KEYWORDS);

    let date_prob = if has_plan { 0.7 } else { 0.5 };
    let drinks_prob = if has_bar { 0.35 } else { 0.25 };

    let bets = vec![
        Bet {
            bet_type: BetType::DateHappens,
            description: "Will the first date take place within 7 days?".to_string(),
            probability: date_prob,
            odds: odds_for(date_prob),
            confidence: if has_plan { 0.8 } else { 0.6 },
            signals: vec![tag(has_plan, "explicit_plan")],
        },
        Bet {
            bet_type: BetType::DrinksOver2,
            description: "Will they have 2 or more drinks?".to_string(),
            probability: drinks_prob,
            odds: odds_for(drinks_prob),
            confidence: 0.6,
            signals: vec![tag(has_bar, "mention_of_bar")],
        },
    ];

    ScoreResponse {
        market_id: req.match_id.clone(),
        bets,
    }
}

/// Lowercase every message text and join with single spaces, in input order.
/// An empty message list yields the empty string.
fn concat_messages(req: &ScoreRequest) -> String {
    req.recent_messages
        .iter()
        .map(|m| m.text.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// The signal tag for a fired heuristic, or "baseline" when it didn't fire.
fn tag(fired: bool, signal: &str) -> String {
    if fired { signal } else { "baseline" }.to_string()
}

/// Fair odds with bookmaker margin, rounded to 2 decimal places.
fn odds_for(probability: f64) -> f64 {
    (1.0 / probability * ODDS_MARGIN * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
