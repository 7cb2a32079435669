//! Enumerates errors related to URL building.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UrlBuilderError {
    #[error("Invalid site root `{0}`")]
    InvalidSiteRoot(String),
    #[error("Sharing is disabled")]
    SharingDisabled,
    #[error("URL parse error: `{0}`")]
    ParseError(#[from] url::ParseError),
}
