// crates/shared-kernel/src/errors/app_error.rs

use crate::errors::{DomainError, ErrorCode};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Serialize, Clone)]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<DomainError> for AppError {
    fn from(error: DomainError) -> Self {
        match error {
            // 1. Cas : Ressource introuvable (404)
            DomainError::NotFound { entity, id } => Self::new(
                ErrorCode::NotFound,
                format!("{entity} with id '{id}' not found"),
            ),

            // 2. Cas : Validation (400) - le détail est affiché inline dans le formulaire
            DomainError::Validation { field, reason } => Self {
                code: ErrorCode::ValidationFailed,
                message: format!("Validation failed for {field}"),
                details: Some(serde_json::json!({ "field": field, "reason": reason })),
            },

            // 3. Cas : Session absente (401)
            DomainError::Unauthorized { reason } => Self::new(ErrorCode::Unauthorized, reason),

            // 4. Cas : Backend ou proxy indisponible (503)
            DomainError::Infrastructure(reason) => {
                Self::new(ErrorCode::InfrastructureFailure, reason)
            }

            // 5. Cas : Erreur interne (500), détail masqué
            DomainError::Internal(_) => Self::new(
                ErrorCode::InternalError,
                "An unexpected error occurred. Please try again later.",
            ),
        }
    }
}

// Pour transformer les erreurs HTTP (reqwest) en AppError
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("HTTP infrastructure error: {:?}", err);

        if err.is_timeout() || err.is_connect() {
            return Self::new(ErrorCode::ServiceUnavailable, format!("Upstream unavailable: {err}"));
        }
        Self::new(ErrorCode::InfrastructureFailure, format!("HTTP request failed: {err}"))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}
