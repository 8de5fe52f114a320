use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::negotiation::models::CandidateProfile;
use crate::resume::extract::extract_text;
use crate::resume::parser::ParsedResume;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ParseResumeResponse {
    /// Ready to pass as `user_profile` when creating a negotiation.
    pub user_profile: CandidateProfile,
    pub parsed: ParsedResume,
}

/// POST /api/v1/resumes/parse
///
/// Accepts a multipart upload with a `file` field and returns the
/// extracted candidate profile.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParseResumeResponse>, AppError> {
    let mut upload: Option<(String, bytes::Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field
            .file_name()
            .ok_or_else(|| AppError::Validation("file field needs a filename".to_string()))?
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        upload = Some((filename, data));
        break;
    }

    let (filename, data) =
        upload.ok_or_else(|| AppError::Validation("Missing 'file' field".to_string()))?;

    if data.len() > state.config.max_resume_bytes {
        return Err(AppError::Validation(format!(
            "Resume exceeds the {} byte upload limit",
            state.config.max_resume_bytes
        )));
    }

    let text = extract_text(&filename, &data)?;
    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "No text could be extracted from the resume".to_string(),
        ));
    }

    info!(
        "Parsing resume '{}' ({} bytes, {} chars of text)",
        filename,
        data.len(),
        text.len()
    );

    let parsed = state.resume_parser.parse(&text).await;
    let user_profile = parsed.to_profile();

    Ok(Json(ParseResumeResponse {
        user_profile,
        parsed,
    }))
}
