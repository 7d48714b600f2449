use crate::extract::MatchPayload;
use crate::models::SaveMatchResponse;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
        StatusCode,
    },
    response::IntoResponse,
    Json,
};

/// CORS preflight for `/saveMatch`. Never touches the store.
pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
            (ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
}

pub async fn save_match(
    State(state): State<AppState>,
    MatchPayload(record): MatchPayload,
) -> Json<SaveMatchResponse> {
    let pretty = serde_json::to_string_pretty(&record).unwrap_or_else(|_| record.to_string());

    let count = state.store.append(record.clone());
    tracing::info!(count, "Received match data:\n{}", pretty);

    Json(SaveMatchResponse {
        ok: true,
        stored: record,
        count,
    })
}
