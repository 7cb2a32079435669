use std::sync::RwLock;

use crate::common_models::{issue::OpenIssue, user::UserId};
use crate::issue_repository::{
    error::IssueRepositoryError, model::IssueOrder, IssueRepository,
};

/// Keeps issues in process memory. Useful for demos and tests.
#[derive(Default)]
pub struct InMemoryIssueRepository {
    issues: RwLock<Vec<OpenIssue>>,
}

impl InMemoryIssueRepository {
    pub fn new(issues: Vec<OpenIssue>) -> Self {
        Self {
            issues: RwLock::new(issues),
        }
    }

    pub fn insert(&self, issue: OpenIssue) -> Result<(), IssueRepositoryError> {
        self.issues
            .write()
            .map_err(|e| IssueRepositoryError::Unavailable(e.to_string()))?
            .push(issue);
        Ok(())
    }
}

#[async_trait::async_trait]
impl IssueRepository for InMemoryIssueRepository {
    async fn fetch_page(
        &self,
        user_id: UserId,
        offset: usize,
        limit: usize,
        order: IssueOrder,
    ) -> Result<Vec<OpenIssue>, IssueRepositoryError> {
        let issues = self
            .issues
            .read()
            .map_err(|e| IssueRepositoryError::Unavailable(e.to_string()))?;

        let mut owned: Vec<OpenIssue> = issues
            .iter()
            .filter(|issue| issue.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| order.compare(a, b));

        Ok(owned.into_iter().skip(offset).take(limit).collect())
    }

    async fn count_all(&self, user_id: UserId) -> Result<usize, IssueRepositoryError> {
        let issues = self
            .issues
            .read()
            .map_err(|e| IssueRepositoryError::Unavailable(e.to_string()))?;

        Ok(issues.iter().filter(|issue| issue.user_id == user_id).count())
    }
}
