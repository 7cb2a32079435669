use serde::{Deserialize, Serialize};

use super::{macros::impl_newtype, user::UserId};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueId(i64);
impl_newtype!(IssueId; i64);

/// Identifier of the context (site, category, course) an issue belongs to.
/// Localization of names is keyed by it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextId(i64);
impl_newtype!(ContextId; i64);

/// Opaque public verification code of an issue.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueCode(String);
impl_newtype!(IssueCode; String);

impl IssueCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IssueCode {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// A certificate issued to a user, as read from storage.
///
/// `time_created` and `expires` are epoch seconds; `expires == 0` means the
/// issue never expires.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct OpenIssue {
    pub id: IssueId,
    pub name: String,
    pub course_name: Option<String>,
    pub context_id: ContextId,
    pub time_created: i64,
    pub expires: i64,
    pub code: IssueCode,
    pub user_id: UserId,
}

impl OpenIssue {
    pub fn never_expires(&self) -> bool {
        self.expires == 0
    }

    /// An issue is expired once its expiry moment has been reached.
    pub fn is_expired_at(&self, now: i64) -> bool {
        !self.never_expires() && self.expires <= now
    }
}
