//! Capability checks of the viewing user.

use crate::common_models::user::UserId;

pub mod imp;

/// Answers capability questions for the user the current request acts as.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait PermissionChecker: Send + Sync {
    /// Whether the viewer may use the public verification page.
    fn can_verify(&self) -> bool;

    /// Whether the viewer may list the certificates of `user_id`.
    fn can_view_listing(&self, user_id: UserId) -> bool;
}
