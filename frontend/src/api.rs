use std::fmt;

use gloo_file::File;
use gloo_net::http::Request;
use shared::{ChatReply, ChatRequest, DiagnosisResult, Questionnaire};

use crate::config;

/// Transport-level failure on either endpoint. The UI collapses all variants
/// into one generic message; the detail only goes to the console log.
#[derive(Debug)]
pub enum ApiError {
    Status(u16),
    Network(String),
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Status(code) => write!(f, "server returned status {code}"),
            ApiError::Network(detail) => write!(f, "network error: {detail}"),
            ApiError::Decode(detail) => write!(f, "failed to parse response: {detail}"),
        }
    }
}

/// Issues the single multipart POST for a screening submission: the image
/// blob plus every questionnaire field, defaulted ones included.
pub async fn predict(file: &File, form: &Questionnaire) -> Result<DiagnosisResult, ApiError> {
    let form_data =
        web_sys::FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
    form_data
        .append_with_blob("image", file.as_ref())
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    for (key, value) in form.fields() {
        form_data
            .append_with_str(key, &value)
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    }

    let response = Request::post(&config::endpoint("/predict"))
        .body(form_data)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json::<DiagnosisResult>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn chat(message: &str) -> Result<ChatReply, ApiError> {
    let response = Request::post(&config::endpoint("/api/groq-chat"))
        .json(&ChatRequest {
            message: message.to_string(),
        })
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json::<ChatReply>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
