//! Read access to the certificates issued to a user.
//!
//! Implementations are expected to return only issues the caller may see and
//! to honour the requested ordering; the adapter keeps whatever order it is
//! given.

use crate::common_models::{issue::OpenIssue, user::UserId};
use crate::issue_repository::{error::IssueRepositoryError, model::IssueOrder};

pub mod error;
pub mod imp;
pub mod model;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait IssueRepository: Send + Sync {
    /// Returns at most `limit` issues of `user_id`, skipping the first `offset`.
    async fn fetch_page(
        &self,
        user_id: UserId,
        offset: usize,
        limit: usize,
        order: IssueOrder,
    ) -> Result<Vec<OpenIssue>, IssueRepositoryError>;

    /// Total number of issues held by `user_id`.
    async fn count_all(&self, user_id: UserId) -> Result<usize, IssueRepositoryError>;
}
