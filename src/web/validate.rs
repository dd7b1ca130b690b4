use std::collections::BTreeMap;

use actix_web::{error::JsonPayloadError, http::StatusCode, HttpResponse, ResponseError};
use serde_json::{json, Value};
use thiserror::Error;

use crate::web::models::ErrorBody;

pub const MAX_BODY_BYTES: usize = 64 * 1024;

// Rejected chat body, reported as `formErrors` (whole body) and `fieldErrors` (per field)
#[derive(Debug, Default, Error)]
#[error("invalid chat request: {} form error(s), {} field(s) with errors", .form_errors.len(), .field_errors.len())]
pub struct ValidationError {
    pub form_errors: Vec<String>,
    pub field_errors: BTreeMap<String, Vec<String>>,
}

impl ValidationError {
    pub fn form(message: impl Into<String>) -> Self {
        Self {
            form_errors: vec![message.into()],
            ..Self::default()
        }
    }

    pub fn details(&self) -> Value {
        json!({
            "formErrors": self.form_errors,
            "fieldErrors": self.field_errors,
        })
    }

    // Read failures are not validation problems
    pub fn from_json_error(err: &JsonPayloadError) -> Option<Self> {
        let message = match err {
            JsonPayloadError::Payload(_) => return None,
            JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                "Request body too large".to_string()
            }
            JsonPayloadError::ContentType => "Expected an application/json body".to_string(),
            JsonPayloadError::Deserialize(e) if e.is_data() => e.to_string(),
            _ => "Malformed JSON body".to_string(),
        };
        Some(Self::form(message))
    }
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut out = Self::default();
        for (field, issues) in errors.field_errors() {
            let messages = out.field_errors.entry(field.to_string()).or_default();
            for issue in issues.iter() {
                messages.push(
                    issue
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| issue.code.to_string()),
                );
            }
        }
        out
    }
}

impl ResponseError for ValidationError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::BadRequest().json(ErrorBody {
            error: "Invalid request".to_string(),
            details: Some(self.details()),
        })
    }
}
