use std::collections::HashSet;

use crate::common_models::user::UserId;
use crate::permission::PermissionChecker;

/// Fixed capability set for a single viewer.
///
/// A viewer may always list their own certificates; listing someone else
/// requires either `view_all` or an explicit grant for that user.
pub struct StaticPermissionChecker {
    pub viewer: UserId,
    pub can_verify: bool,
    pub view_all: bool,
    pub granted_users: HashSet<UserId>,
}

impl StaticPermissionChecker {
    pub fn for_viewer(viewer: UserId) -> Self {
        Self {
            viewer,
            can_verify: true,
            view_all: false,
            granted_users: HashSet::new(),
        }
    }
}

impl PermissionChecker for StaticPermissionChecker {
    fn can_verify(&self) -> bool {
        self.can_verify
    }

    fn can_view_listing(&self, user_id: UserId) -> bool {
        user_id == self.viewer || self.view_all || self.granted_users.contains(&user_id)
    }
}

#[cfg(test)]
mod test {
    use maplit::hashset;

    use super::*;

    #[test]
    fn test_viewer_can_list_own_certificates_only_by_default() {
        let checker = StaticPermissionChecker::for_viewer(5.into());

        assert!(checker.can_view_listing(5.into()));
        assert!(!checker.can_view_listing(6.into()));
        assert!(checker.can_verify());
    }

    #[test]
    fn test_granted_users_and_view_all() {
        let checker = StaticPermissionChecker {
            granted_users: hashset! { UserId::from(6) },
            ..StaticPermissionChecker::for_viewer(5.into())
        };
        assert!(checker.can_view_listing(6.into()));
        assert!(!checker.can_view_listing(7.into()));

        let admin = StaticPermissionChecker {
            view_all: true,
            ..StaticPermissionChecker::for_viewer(1.into())
        };
        assert!(admin.can_view_listing(7.into()));
    }
}
