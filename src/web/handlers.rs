//! Route handlers
//!
//! Every handler validates at the boundary and only then calls the
//! calculator. Bodies are read as loosely as possible (form pairs, untyped
//! JSON) so that every malformed input reaches `CalculationInput::parse` and
//! gets the same error state. Invalid form input re-renders the page; it is
//! never an HTTP failure.

use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::{Form, Json};
use serde::Serialize;
use serde_json::Value;

use crate::build_info::BuildInfo;
use crate::error::INVALID_INPUT_MESSAGE;
use crate::models::{CalculationInput, SaltResult, RIB_WEIGHT_FIELD, RUB_SODIUM_FIELD};

use super::render::{render_index, PageView};
use super::AppState;

/// Raw calculator fields; missing fields read as empty text
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CalculateForm {
    pub rib_weight: String,
    pub rub_sodium: String,
}

impl CalculateForm {
    /// Build from url-encoded pairs; the first occurrence of a field wins
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let first = |field: &str| {
            pairs
                .iter()
                .find(|(name, _)| name == field)
                .map(|(_, value)| value.clone())
                .unwrap_or_default()
        };

        Self {
            rib_weight: first(RIB_WEIGHT_FIELD),
            rub_sodium: first(RUB_SODIUM_FIELD),
        }
    }

    /// Build from an untyped JSON body
    ///
    /// Numbers and strings are taken as text; anything else is kept as its
    /// JSON text so validation rejects it.
    pub fn from_json(body: &Value) -> Self {
        let text = |field: &str| match body.get(field) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(other) => other.to_string(),
        };

        Self {
            rib_weight: text(RIB_WEIGHT_FIELD),
            rub_sodium: text(RUB_SODIUM_FIELD),
        }
    }

    pub fn parse(&self) -> Result<CalculationInput, crate::error::InputError> {
        CalculationInput::parse(&self.rib_weight, &self.rub_sodium)
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub build: BuildInfo,
}

/// GET / - empty calculator form
pub async fn index() -> Html<String> {
    Html(render_index(&PageView::default()))
}

/// POST /calculate - form submission
pub async fn calculate(
    State(state): State<AppState>,
    body: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Html<String> {
    let form = match body {
        Ok(Form(pairs)) => CalculateForm::from_pairs(&pairs),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable calculator form body");
            return Html(render_index(&PageView {
                error: Some(INVALID_INPUT_MESSAGE),
                ..PageView::default()
            }));
        }
    };

    match form.parse() {
        Ok(input) => {
            let result = state.calculator.calculate(&input);
            Html(render_index(&PageView {
                rib_weight: &form.rib_weight,
                rub_sodium: &form.rub_sodium,
                result: Some(&result),
                error: None,
            }))
        }
        Err(err) => {
            tracing::debug!(error = %err, "Rejected calculator form input");
            Html(render_index(&PageView {
                rib_weight: &form.rib_weight,
                rub_sodium: &form.rub_sodium,
                result: None,
                error: Some(err.user_message()),
            }))
        }
    }
}

/// POST /api/calculate - JSON calculation
pub async fn api_calculate(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let form = match body {
        Ok(Json(value)) => CalculateForm::from_json(&value),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable calculator API body");
            return invalid_input(INVALID_INPUT_MESSAGE);
        }
    };

    match form.parse() {
        Ok(input) => {
            let result: SaltResult = state.calculator.calculate(&input);
            Json(result).into_response()
        }
        Err(err) => {
            tracing::debug!(error = %err, "Rejected calculator API input");
            invalid_input(err.user_message())
        }
    }
}

fn invalid_input(message: &str) -> Response {
    let body = ErrorResponse {
        error: message.to_string(),
    };
    (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
}

/// GET /health - liveness and build metadata
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: chrono::Utc::now().to_rfc3339(),
        build: BuildInfo::current(),
    })
}
