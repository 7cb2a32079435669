//! Recognises links to the web listing of certificates so they can be
//! opened in the app page instead.

use url::Url;

use cert_providers::common_models::user::UserId;

use crate::model::MyCertificatesArgs;

const LISTING_PATH_SUFFIX: &str = "/admin/tool/certificate/my.php";

#[derive(Debug, Default, Clone)]
pub struct MyCertificatesLinkHandler;

impl MyCertificatesLinkHandler {
    pub fn matches(&self, url: &Url) -> bool {
        url.path().ends_with(LISTING_PATH_SUFFIX)
    }

    /// View arguments for a matching link. A missing, zero or non-numeric
    /// `userid` resolves to `current_user`.
    pub fn view_args(&self, url: &Url, current_user: UserId) -> Option<MyCertificatesArgs> {
        if !self.matches(url) {
            return None;
        }

        let user_id = url
            .query_pairs()
            .find(|(key, _)| key == "userid")
            .and_then(|(_, value)| value.parse::<i64>().ok())
            .filter(|user_id| *user_id != 0)
            .map(UserId::from)
            .unwrap_or(current_user);

        Some(MyCertificatesArgs {
            user_id: Some(user_id),
        })
    }
}
