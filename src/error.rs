use actix_web::{HttpResponse, http::StatusCode};
use derive_more::Display;
use serde_json::json;

/// Errors raised by the directory and ledger operations. Every variant
/// renders as a `{ "success": false, "message": ... }` body.
#[derive(Debug, Display)]
pub enum LedgerError {
    /// Missing or empty required field.
    #[display(fmt = "{}", _0)]
    Validation(String),

    /// Unknown employee, or no record to act on.
    #[display(fmt = "{}", _0)]
    NotFound(String),

    /// Duplicate check-in or check-out for the same day.
    #[display(fmt = "{}", _0)]
    Conflict(String),

    /// Backing store failed to persist.
    #[display(fmt = "Storage error: {}", _0)]
    Storage(anyhow::Error),
}

impl From<anyhow::Error> for LedgerError {
    fn from(e: anyhow::Error) -> Self {
        LedgerError::Storage(e)
    }
}

impl actix_web::ResponseError for LedgerError {
    fn status_code(&self) -> StatusCode {
        match self {
            LedgerError::Validation(_) | LedgerError::Conflict(_) => StatusCode::BAD_REQUEST,
            LedgerError::NotFound(_) => StatusCode::NOT_FOUND,
            LedgerError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let LedgerError::Storage(e) = self {
            tracing::error!(error = %e, "Storage failure");
        }
        HttpResponse::build(self.status_code()).json(json!({
            "success": false,
            "message": self.to_string(),
        }))
    }
}
