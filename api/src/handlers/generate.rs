//! Password generation handler

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::domain::entities::GeneratedPassword;
use crate::error::AppError;
use crate::AppState;

/// Request body for password generation
///
/// Missing fields default to empty so they fail validation with a 400.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub word1: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub word2: String,
}

/// Response body for password generation
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub korean_word1: String,
    pub korean_word2: String,
    pub keyboard_word1: String,
    pub keyboard_word2: String,
    pub raw_password: String,
    pub final_password: String,
}

impl From<GeneratedPassword> for GenerateResponse {
    fn from(password: GeneratedPassword) -> Self {
        Self {
            korean_word1: password.korean_word1,
            korean_word2: password.korean_word2,
            keyboard_word1: password.keyboard_word1,
            keyboard_word2: password.keyboard_word2,
            raw_password: password.raw_password,
            final_password: password.final_password,
        }
    }
}

/// POST /generate
///
/// Translate both words to Korean, render them as 2-beolsik keystrokes and
/// join them with the symbol.
pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let Json(request) = payload?;

    let password = state
        .password_service
        .generate(&request.word1, &request.symbol, &request.word2)
        .await?;

    Ok(Json(password.into()))
}
