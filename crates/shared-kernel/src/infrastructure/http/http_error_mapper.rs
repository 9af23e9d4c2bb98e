// crates/shared-kernel/src/infrastructure/http/http_error_mapper.rs

use crate::errors::DomainError;

pub trait ReqwestErrorExt<T> {
    fn map_domain_infra(self, context: &'static str) -> Result<T, DomainError>;
}

impl<T> ReqwestErrorExt<T> for std::result::Result<T, reqwest::Error> {
    fn map_domain_infra(self, context: &'static str) -> Result<T, DomainError> {
        self.map_err(|e| {
            let kind = if e.is_timeout() {
                "timeout"
            } else if e.is_connect() {
                "connection refused"
            } else if e.is_decode() {
                "invalid response body"
            } else {
                "request failed"
            };
            DomainError::Infrastructure(format!("{} ({}): {}", context, kind, e))
        })
    }
}
