//! Route handlers and the request validation boundary.
//!
//! Validation happens in the `ValidatedJson` extractor: payloads that do
//! not match the `ScoreRequest` shape are rejected with 422 before the
//! handler runs. The handlers themselves cannot fail.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::debug;

use crate::scoring;
use crate::types::{BetgenError, ScoreRequest, ScoreResponse};

// ---------------------------------------------------------------------------
// Validation boundary
// ---------------------------------------------------------------------------

/// JSON extractor that converts deserialization failures into the
/// structured 422 error body instead of axum's plain-text rejection.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = BetgenError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ValidatedJson(value)),
            // body_text() names the offending field or byte position
            Err(rejection) => Err(BetgenError::Validation(rejection.body_text())),
        }
    }
}

impl IntoResponse for BetgenError {
    fn into_response(self) -> Response {
        match self {
            BetgenError::Validation(detail) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": "validation_error", "detail": detail })),
            )
                .into_response(),
        }
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

/// POST /internal/betgen/score
pub async fn score(ValidatedJson(req): ValidatedJson<ScoreRequest>) -> Json<ScoreResponse> {
    let resp = scoring::score(&req);
    debug!(
        match_id = %req.match_id,
        messages = req.recent_messages.len(),
        signals = ?resp.bets.iter().flat_map(|b| b.signals.iter()).collect::<Vec<_>>(),
        "Match scored"
    );
    Json(resp)
}

/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "ok": true }))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BetType;

    #[tokio::test]
    async fn test_score_handler_baseline() {
        let req = ScoreRequest::sample("m1", &[]);
        let Json(resp) = score(ValidatedJson(req)).await;

        assert_eq!(resp.market_id, "m1");
        assert_eq!(resp.bets.len(), 2);
        assert_eq!(resp.bets[0].bet_type, BetType::DateHappens);
        assert_eq!(resp.bets[0].probability, 0.5);
        assert_eq!(resp.bets[1].bet_type, BetType::DrinksOver2);
        assert_eq!(resp.bets[1].probability, 0.25);
    }

    #[tokio::test]
    async fn test_score_handler_with_plan() {
        let req = ScoreRequest::sample("m2", &["see you at 8"]);
        let Json(resp) = score(ValidatedJson(req)).await;

        assert_eq!(resp.bets[0].probability, 0.7);
        assert_eq!(resp.bets[0].signals, vec!["explicit_plan".to_string()]);
    }

    #[tokio::test]
    async fn test_health_handler_body() {
        let Json(body) = health().await;
        assert_eq!(body, json!({ "ok": true }));
    }

    #[test]
    fn test_validation_error_response_shape() {
        let resp = BetgenError::Validation("missing field `matchId`".into()).into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
