use axum::http::{HeaderMap, header::CONTENT_TYPE};
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::form_urlencoded;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("invalid json body: {0}")]
    Json(#[source] serde_json::Error),

    #[error("invalid form body: {0}")]
    Form(#[source] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadFormat {
    Json,
    Form,
}

impl PayloadFormat {
    /// Form-encoded when the content type says so, JSON otherwise.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let is_form = headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| {
                value
                    .trim_start()
                    .to_ascii_lowercase()
                    .starts_with("application/x-www-form-urlencoded")
            })
            .unwrap_or(false);
        if is_form {
            PayloadFormat::Form
        } else {
            PayloadFormat::Json
        }
    }
}

/// Decodes a request body as JSON, or as a form when the headers ask for it.
/// Form fields arrive as strings; a repeated field keeps its last value.
pub fn decode_payload<T: DeserializeOwned>(
    headers: &HeaderMap,
    body: &[u8],
) -> Result<T, PayloadError> {
    match PayloadFormat::from_headers(headers) {
        PayloadFormat::Json => serde_json::from_slice(body).map_err(PayloadError::Json),
        PayloadFormat::Form => {
            let fields: serde_json::Map<String, serde_json::Value> = form_urlencoded::parse(body)
                .map(|(k, v)| (k.into_owned(), serde_json::Value::String(v.into_owned())))
                .collect();
            serde_json::from_value(serde_json::Value::Object(fields)).map_err(PayloadError::Form)
        }
    }
}
