use crate::errors::{AppError, DomainError};

/// RESULT DU DOMAINE (Interne)
/// Utilisé par : Normalisation, Sélecteurs, Use Cases, Ports (Repositories, Fetchers).
pub type Result<T> = std::result::Result<T, DomainError>;

/// RESULT D'APPLICATION (Exécutable)
/// Utilisé par : binaires et adaptateurs qui exposent une erreur sérialisable.
pub type AppResult<T> = std::result::Result<T, AppError>;

