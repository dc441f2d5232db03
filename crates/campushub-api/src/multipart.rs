//! Multipart form collection.

use std::collections::HashMap;

use axum::extract::Multipart;
use bytes::Bytes;

use campushub_core::error::AppError;
use campushub_core::result::AppResult;

/// A file received in a multipart upload.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Original filename as sent by the client.
    pub filename: String,
    /// Declared MIME type, if any.
    pub content_type: Option<String>,
    /// File contents.
    pub data: Bytes,
}

/// A fully-read multipart form: text fields plus uploaded files keyed by
/// field name.
#[derive(Debug, Default)]
pub struct MultipartForm {
    texts: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl MultipartForm {
    /// A text field's value, if present and non-empty.
    pub fn text(&self, name: &str) -> Option<String> {
        self.texts
            .get(name)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    /// Remove and return an uploaded file by field name.
    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name)
    }
}

/// Drain a multipart request into memory.
///
/// Fields carrying a filename are collected as files; everything else is
/// read as text. The router's body limit bounds total size.
pub async fn collect(mut multipart: Multipart) -> AppResult<MultipartForm> {
    let mut form = MultipartForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();

        if let Some(filename) = field.file_name().map(String::from) {
            let content_type = field.content_type().map(String::from);
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::validation(format!("Multipart read error: {e}")))?;
            form.files
                .insert(name, UploadedFile { filename, content_type, data });
        } else {
            let text = field
                .text()
                .await
                .map_err(|e| AppError::validation(format!("Multipart read error: {e}")))?;
            form.texts.insert(name, text);
        }
    }

    Ok(form)
}
