//! Raw text extraction from uploaded resume files.
//!
//! PDF and plain text are supported in-process; anything else is rejected
//! with the extension named so the caller can convert and retry.

use std::path::Path;

use crate::errors::AppError;

pub fn extract_text(filename: &str, bytes: &[u8]) -> Result<String, AppError> {
    let extension = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| AppError::Validation(format!("Could not read PDF: {e}"))),
        "txt" | "text" | "md" => Ok(String::from_utf8_lossy(bytes).into_owned()),
        "" => Err(AppError::Validation(
            "Resume filename has no extension (expected .pdf or .txt)".to_string(),
        )),
        other => Err(AppError::Validation(format!(
            "Unsupported resume format '.{other}' (expected .pdf or .txt)"
        ))),
    }
}
