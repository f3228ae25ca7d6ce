use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::answer_response::ErrorResponse;
use crate::question_payload::QuestionPayload;
use crate::AppState;

pub async fn ask(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<QuestionPayload>,
) -> Response {
    log::info!("Received question: {}", payload.question);

    if payload.question.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Invalid question".to_string(),
                details: "Field \"question\" must be a non-empty string".to_string(),
            }),
        )
            .into_response();
    }

    match state.qa_client.ask(&payload).await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => {
            log::error!("Failed to relay question: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Answer service error".to_string(),
                    details: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

pub async fn status() -> &'static str {
    "Relay API is running..."
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
            details: "No route matches the requested path".to_string(),
        }),
    )
}
