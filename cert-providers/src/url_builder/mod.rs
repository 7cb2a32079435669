//! Fully-qualified site URLs related to certificate issues.

use url::Url;

use crate::common_models::{issue::IssueCode, user::UserId};
use crate::url_builder::error::UrlBuilderError;

pub mod error;
pub mod imp;
pub mod model;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait UrlBuilder: Send + Sync {
    /// Public page verifying the issue identified by `code`.
    fn verification_url(&self, code: &IssueCode) -> Result<Url, UrlBuilderError>;

    /// Download/view URL of the issued certificate file.
    fn file_url(&self, code: &IssueCode) -> Result<Url, UrlBuilderError>;

    /// The URL published as the credential URL on a profile share.
    fn certificate_url_for_share(&self, code: &IssueCode) -> Result<Url, UrlBuilderError>;

    /// Full web listing of the certificates of `user_id`.
    fn listing_page_url(&self, user_id: UserId) -> Result<Url, UrlBuilderError>;
}
