use std::cmp::Ordering;

use strum::Display;

use crate::common_models::issue::OpenIssue;

/// Sort order of a fetched page of issues.
#[derive(Debug, Clone, Copy, Default, Display, PartialEq, Eq)]
pub enum IssueOrder {
    /// Most recent first, ties broken by the highest id.
    #[default]
    #[strum(serialize = "timecreated DESC, id DESC")]
    NewestFirst,
}

impl IssueOrder {
    pub fn compare(&self, a: &OpenIssue, b: &OpenIssue) -> Ordering {
        match self {
            IssueOrder::NewestFirst => b
                .time_created
                .cmp(&a.time_created)
                .then_with(|| b.id.cmp(&a.id)),
        }
    }
}
