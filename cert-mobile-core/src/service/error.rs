use cert_providers::{
    common_models::user::UserId, issue_repository::error::IssueRepositoryError,
    template_renderer::error::TemplateRendererError, url_builder::error::UrlBuilderError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShareLinkError {
    #[error("Timestamp out of range: `{0}`")]
    InvalidTimestamp(#[from] time::error::ComponentRange),
    #[error("Url builder error: `{0}`")]
    UrlBuilderError(#[from] UrlBuilderError),
}

#[derive(Debug, Error)]
pub enum ListingError {
    #[error("Share link error: `{0}`")]
    ShareLinkError(#[from] ShareLinkError),
    #[error("Url builder error: `{0}`")]
    UrlBuilderError(#[from] UrlBuilderError),
}

#[derive(Debug, Error)]
pub enum MobileServiceError {
    #[error("Not allowed to view the certificates of user `{0}`")]
    Forbidden(UserId),
    #[error("Listing error: `{0}`")]
    ListingError(#[from] ListingError),
    #[error("Issue repository error: `{0}`")]
    IssueRepositoryError(#[from] IssueRepositoryError),
    #[error("Template renderer error: `{0}`")]
    TemplateRendererError(#[from] TemplateRendererError),
    #[error("JSON error: `{0}`")]
    JsonError(#[from] serde_json::Error),
}
