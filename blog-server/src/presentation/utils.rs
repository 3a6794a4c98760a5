use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{Error, HttpMessage, HttpRequest};
use tracing::debug;

use crate::domain::error::DomainError;
use crate::presentation::middleware::RequestId;

/// Malformed or incomplete JSON bodies are validation failures (422).
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    match err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            err.into()
        }
        other => {
            debug!(request_id = %request_id(req), error = %other, "rejected request body");
            DomainError::Validation(other.to_string()).into()
        }
    }
}

pub fn path_error_handler(err: PathError, req: &HttpRequest) -> Error {
    debug!(request_id = %request_id(req), path = %req.path(), error = %err, "rejected path");
    DomainError::Validation(err.to_string()).into()
}

pub fn request_id(req: &HttpRequest) -> String {
    req.extensions()
        .get::<RequestId>()
        .map(|rid| rid.0.clone())
        .unwrap_or_else(|| "unknown".into())
}
