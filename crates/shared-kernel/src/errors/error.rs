// crates/shared-kernel/src/errors/error.rs

use thiserror::Error;
use crate::errors::AppError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation failed for field '{field}': {reason}")]
    Validation {
        field: &'static str,
        reason: String
    },

    #[error("{entity} not found with id '{id}'")]
    NotFound {
        entity: &'static str,
        id: String
    },

    /// Session absente ou expirée (ex: upload sans utilisateur connecté)
    #[error("Unauthorized access: {reason}")]
    Unauthorized {
        reason: String
    },

    /// Erreur liée à l'infrastructure (proxy oEmbed, stockage, backend)
    #[error("Infrastructure failure: {0}")]
    Infrastructure(String),

    #[error("Internal domain error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<AppError> for DomainError {
    fn from(err: AppError) -> Self {
        match err.code {
            crate::errors::ErrorCode::NotFound => DomainError::NotFound {
                entity: "Resource",
                id: "unknown".into()
            },
            crate::errors::ErrorCode::InfrastructureFailure
            | crate::errors::ErrorCode::ServiceUnavailable => DomainError::Infrastructure(err.message),
            _ => DomainError::Internal(err.message),
        }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Internal(format!("JSON serialization failed: {err}"))
    }
}
