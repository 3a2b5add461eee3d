//! Multipart form collection.
//!
//! Signup and profile update arrive as `multipart/form-data` with text
//! fields plus at most one picture. This buffers the parts so handlers
//! can validate before anything is persisted.

use std::collections::HashMap;

use actix_multipart::Multipart;
use futures::{StreamExt, TryStreamExt};

use crate::middleware::error::AppError;

/// One uploaded file part.
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// A fully read multipart form.
pub struct MultipartForm {
    fields: HashMap<String, String>,
    pub file: Option<UploadedFile>,
}

impl MultipartForm {
    /// A non-empty text field, if present.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }
}

/// Read every part of the multipart payload into memory.
pub async fn collect(mut payload: Multipart) -> Result<MultipartForm, AppError> {
    let mut fields = HashMap::new();
    let mut file = None;

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart payload: {e}")))?
    {
        let name = field.name().to_string();
        let filename = field
            .content_disposition()
            .get_filename()
            .map(|s| s.to_string());

        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk =
                chunk.map_err(|e| AppError::BadRequest(format!("Failed to read upload: {e}")))?;
            data.extend_from_slice(&chunk);
        }

        match filename {
            // A file part without content counts as "no picture supplied"
            Some(filename) if !data.is_empty() => {
                file = Some(UploadedFile {
                    filename,
                    bytes: data,
                });
            }
            Some(_) => {}
            None => {
                let value = String::from_utf8(data).map_err(|_| {
                    AppError::BadRequest(format!("Form field '{name}' must be UTF-8 text"))
                })?;
                fields.insert(name, value);
            }
        }
    }

    Ok(MultipartForm { fields, file })
}
