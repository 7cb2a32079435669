//! Enumerates errors related to issue storage.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IssueRepositoryError {
    #[error("Storage unavailable: `{0}`")]
    Unavailable(String),
    #[error("Mapping error: `{0}`")]
    MappingError(String),
}
