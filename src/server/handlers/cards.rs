//! Upload, retrieval, and listing handlers.

use std::time::Instant;

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use crate::ocr::ExtractionError;
use crate::server::AppState;
use crate::services::ServiceError;

use super::types::{CardResponse, ErrorResponse, ListQuery, OcrResponse};

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

fn round_seconds(elapsed: std::time::Duration) -> f64 {
    (elapsed.as_secs_f64() * 100.0).round() / 100.0
}

/// POST /api/v1/identity-cards/upload
///
/// Accepts a multipart form with a `file` part containing a PDF. Runs the
/// full pipeline and returns the stored card. OCR-level failures come back
/// as a `success: false` envelope; invalid uploads get 4xx statuses.
pub async fn upload_card(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let started = Instant::now();

    let mut filename: Option<String> = None;
    let mut content: Option<Vec<u8>> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            // status() reports 413 when the body limit cut the stream
            Err(e) => {
                return error_response(e.status(), format!("malformed multipart body: {}", e))
            }
        };

        if field.name() == Some("file") {
            filename = field.file_name().map(|s| s.to_string());
            match field.bytes().await {
                Ok(bytes) => content = Some(bytes.to_vec()),
                Err(e) => {
                    return error_response(e.status(), format!("failed to read file part: {}", e))
                }
            }
        }
    }

    let (Some(filename), Some(content)) = (filename, content) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "missing 'file' field in multipart form",
        );
    };

    match state.service.process_upload(&filename, &content).await {
        Ok(card) => {
            let response = OcrResponse {
                success: true,
                message: "Identity card processed successfully".to_string(),
                data: Some(CardResponse::from(card)),
                processing_time: round_seconds(started.elapsed()),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(ServiceError::Validation(e)) => {
            let status =
                StatusCode::from_u16(e.status()).unwrap_or(StatusCode::BAD_REQUEST);
            error_response(status, e.to_string())
        }
        Err(ServiceError::Extraction(e)) => match e {
            // The document was readable but yielded nothing useful; this is
            // an expected outcome for bad scans, not a server fault.
            ExtractionError::NoText
            | ExtractionError::ExtractionFailed(_)
            | ExtractionError::UnsupportedFileType(_) => {
                let response = OcrResponse {
                    success: false,
                    message: format!("Text extraction failed: {}", e),
                    data: None,
                    processing_time: round_seconds(started.elapsed()),
                };
                (StatusCode::OK, Json(response)).into_response()
            }
            ExtractionError::ToolNotFound(_) | ExtractionError::Io(_) => {
                error!(error = %e, "extraction tooling failure");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        },
        Err(e) => {
            error!(error = %e, "upload processing failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error while processing upload",
            )
        }
    }
}

/// GET /api/v1/identity-cards/:card_id
pub async fn get_card(
    State(state): State<AppState>,
    Path(card_id): Path<String>,
) -> Response {
    match state.service.get(&card_id).await {
        Ok(Some(card)) => Json(CardResponse::from(card)).into_response(),
        Ok(None) => error_response(
            StatusCode::NOT_FOUND,
            format!("identity card '{}' not found", card_id),
        ),
        Err(e) => {
            error!(error = %e, card_id, "card lookup failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "database error")
        }
    }
}

/// GET /api/v1/identity-cards?skip=0&limit=100
pub async fn list_cards(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Response {
    match state.service.list(query.skip, query.limit).await {
        Ok(cards) => {
            let cards: Vec<CardResponse> = cards.into_iter().map(CardResponse::from).collect();
            Json(cards).into_response()
        }
        Err(e) => {
            error!(error = %e, "card listing failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "database error")
        }
    }
}
