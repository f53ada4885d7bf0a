//! Email classification routes.

use std::sync::Arc;

use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, State};
use axum::routing::post;
use axum::{Json, Router};
use mailsort_classify::{analyze, ClassificationOutcome};
use mailsort_core::Error;
use serde::Deserialize;
use tracing::{debug, Instrument};

use crate::routes::ApiError;
use crate::state::AppState;

pub const NO_INPUT: &str = "Nenhum texto ou arquivo de email fornecido";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/classify", post(classify_form))
        .route("/classify/json", post(classify_json))
}

/// Uploaded file as received in the form.
struct UploadedFile {
    filename: String,
    data: Vec<u8>,
}

#[derive(Debug, Deserialize)]
pub struct ClassifyJsonRequest {
    #[serde(default)]
    pub email_text: Option<String>,
}

/// POST /classify — multipart form with `email_text` and/or `email_file`.
async fn classify_form(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ClassificationOutcome>, ApiError> {
    let mut multipart = multipart?;
    let mut email_text: Option<String> = None;
    let mut email_file: Option<UploadedFile> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "email_text" => {
                email_text = Some(field.text().await?);
            }
            "email_file" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let data = field.bytes().await?;
                email_file = Some(UploadedFile {
                    filename,
                    data: data.to_vec(),
                });
            }
            other => debug!("Ignoring form field {:?}", other),
        }
    }

    let raw = resolve_input(email_text, email_file).await?;
    run(&state, &raw).await
}

/// POST /classify/json — `{"email_text": "..."}`.
async fn classify_json(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ClassifyJsonRequest>, JsonRejection>,
) -> Result<Json<ClassificationOutcome>, ApiError> {
    let Json(req) = payload?;
    let raw = req
        .email_text
        .ok_or_else(|| Error::Input(NO_INPUT.into()))?;
    run(&state, &raw).await
}

async fn run(state: &AppState, raw: &str) -> Result<Json<ClassificationOutcome>, ApiError> {
    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("classify", %request_id);

    let outcome = analyze(
        state.classifier.as_ref(),
        raw,
        state.config.min_message_chars,
    )
    .instrument(span)
    .await?;

    Ok(Json(outcome))
}

/// Pick the message text: a non-blank text field wins over an uploaded file.
async fn resolve_input(
    email_text: Option<String>,
    email_file: Option<UploadedFile>,
) -> mailsort_core::Result<String> {
    if let Some(text) = email_text.filter(|t| !t.trim().is_empty()) {
        return Ok(text);
    }

    let Some(file) = email_file else {
        return Err(Error::Input(NO_INPUT.into()));
    };

    debug!("Extracting {} ({} bytes)", file.filename, file.data.len());
    tokio::task::spawn_blocking(move || mailsort_extract::extract_text(&file.filename, &file.data))
        .await
        .map_err(|e| Error::Internal(format!("Extraction task failed: {}", e)))?
}
