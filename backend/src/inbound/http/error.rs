//! HTTP adapter mapping for domain errors.
//!
//! The domain error stays HTTP-agnostic; this module picks the status code
//! and renders the `{"message": ...}` body clients receive. Extractor
//! failures (bad JSON, wrong content type, unparsable path ids) are routed
//! through the same type so every error shares one shape.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message returned in place of internal failure details.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Body of every error response.
///
/// # Examples
/// ```
/// use boardgames::inbound::http::error::ErrorMessage;
///
/// let body = serde_json::to_string(&ErrorMessage::new("No such record")).expect("serialises");
/// assert_eq!(body, r#"{"message":"No such record"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorMessage {
    /// Why the request failed.
    #[schema(example = "No such record")]
    pub message: String,
}

impl ErrorMessage {
    /// Wrap a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn body_for(error: &Error) -> ErrorMessage {
    if matches!(error.code(), ErrorCode::InternalError) {
        ErrorMessage::new(INTERNAL_ERROR_MESSAGE)
    } else {
        ErrorMessage::new(error.message())
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(body_for(self))
    }
}

/// Error handler for `web::JsonConfig`.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected request body");
    let mapped = match err {
        JsonPayloadError::ContentType => {
            Error::unsupported_media_type("Content type must be application/json")
        }
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            Error::invalid_request("Request body is too large")
        }
        JsonPayloadError::Deserialize(inner) => Error::invalid_request(inner.to_string()),
        other => {
            error!(error = %other, "failed to read request body");
            Error::invalid_request("Malformed request body")
        }
    };
    mapped.into()
}

/// Error handler for `web::PathConfig` that reports unparsable ids as
/// missing records.
pub fn path_not_found_handler(
    message: &'static str,
) -> impl Fn(PathError, &HttpRequest) -> actix_web::Error + Clone + Send + Sync + 'static {
    move |err, req| {
        debug!(error = %err, path = %req.path(), "rejected path parameters");
        Error::not_found(message).into()
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Error::internal(INTERNAL_ERROR_MESSAGE)
    }
}
