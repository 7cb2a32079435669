use chrono::{Local, Offset, TimeZone};
use serde::Serialize;
use strum_macros::Display;
use time::{error::ComponentRange, OffsetDateTime, UtcOffset};
use url::Url;

use cert_providers::common_models::{
    issue::{IssueCode, IssueId},
    user::UserId,
};
use cert_providers::url_builder::model::ShareTarget;

/// The `show_shareonlinkedin` setting.
#[derive(Debug, Copy, Clone, Default, Display, PartialEq, Eq)]
pub enum ShareOnLinkedin {
    #[default]
    #[strum(serialize = "DISABLED")]
    Disabled,
    #[strum(serialize = "VERIFICATION_PAGE")]
    VerificationPage,
    #[strum(serialize = "CERTIFICATE_FILE")]
    CertificateFile,
}

impl ShareOnLinkedin {
    pub fn is_enabled(&self) -> bool {
        self.share_target().is_some()
    }

    pub fn share_target(&self) -> Option<ShareTarget> {
        match self {
            ShareOnLinkedin::Disabled => None,
            ShareOnLinkedin::VerificationPage => Some(ShareTarget::VerificationPage),
            ShareOnLinkedin::CertificateFile => Some(ShareTarget::CertificateFile),
        }
    }

    /// Maps the stored setting value; unknown values yield `None`.
    pub fn from_setting(value: i64) -> Option<Self> {
        match value {
            0 => Some(ShareOnLinkedin::Disabled),
            1 => Some(ShareOnLinkedin::VerificationPage),
            2 => Some(ShareOnLinkedin::CertificateFile),
            _ => None,
        }
    }
}

/// Zone in which issue and expiry dates are split into year and month.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum ShareTimeZone {
    /// The server's local zone, resolved per timestamp so daylight saving
    /// changes are followed.
    #[default]
    ServerLocal,
    Fixed(UtcOffset),
}

impl ShareTimeZone {
    /// Offset in effect at `timestamp`. A local time that cannot be resolved
    /// falls back to UTC.
    pub fn offset_at(&self, timestamp: i64) -> Result<UtcOffset, ComponentRange> {
        match self {
            ShareTimeZone::Fixed(offset) => Ok(*offset),
            ShareTimeZone::ServerLocal => match Local.timestamp_opt(timestamp, 0).earliest() {
                Some(local) => UtcOffset::from_whole_seconds(local.offset().fix().local_minus_utc()),
                None => Ok(UtcOffset::UTC),
            },
        }
    }
}

/// Configuration snapshot used to build profile-share links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinkConfig {
    pub enabled: bool,
    pub organization_id: Option<String>,
    pub base_url: Url,
    pub time_zone: ShareTimeZone,
}

impl ShareLinkConfig {
    /// The organization id to publish; an empty id counts as unset.
    pub fn organization_id(&self) -> Option<&str> {
        self.organization_id
            .as_deref()
            .filter(|organization_id| !organization_id.is_empty())
    }
}

/// Who is asking and when. Passed explicitly into every listing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerContext {
    pub user_id: UserId,
    pub now: OffsetDateTime,
}

impl ViewerContext {
    pub fn new(user_id: UserId, now: OffsetDateTime) -> Self {
        Self { user_id, now }
    }

    pub fn now_utc(user_id: UserId) -> Self {
        Self::new(user_id, OffsetDateTime::now_utc())
    }
}

/// A single certificate as shown by the mobile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    pub id: IssueId,
    pub name: String,
    #[serde(rename = "coursename")]
    pub course_name: Option<String>,
    #[serde(rename = "timecreated")]
    pub time_created: i64,
    pub expires: i64,
    #[serde(rename = "isexpired")]
    pub is_expired: bool,
    pub code: IssueCode,
    #[serde(rename = "verifyurl")]
    pub verify_url: Url,
    #[serde(rename = "fileurl")]
    pub file_url: Url,
    #[serde(rename = "shareurl")]
    pub share_url: Option<Url>,
}

/// Everything the "my certificates" template needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingResult {
    pub certificates: Vec<DisplayRecord>,
    #[serde(rename = "hascertificates")]
    pub has_certificates: bool,
    #[serde(rename = "canverify")]
    pub can_verify: bool,
    #[serde(rename = "showshareonlinkedin")]
    pub show_share_on_linkedin: bool,
    #[serde(rename = "viewmore")]
    pub view_more_url: Option<Url>,
}

/// Arguments the app sends when opening the page. A zero or missing user id
/// means the viewer's own listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize, Serialize)]
pub struct MyCertificatesArgs {
    #[serde(rename = "userid", default)]
    pub user_id: Option<UserId>,
}

impl MyCertificatesArgs {
    pub fn resolve_user(&self, viewer: &ViewerContext) -> UserId {
        match self.user_id {
            Some(user_id) if i64::from(user_id) != 0 => user_id,
            _ => viewer.user_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MobileTemplate {
    pub id: String,
    pub html: String,
}

/// Response of the page content call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MobileContent {
    pub templates: Vec<MobileTemplate>,
    pub javascript: String,
    #[serde(rename = "otherdata")]
    pub other_data: String,
    pub files: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Restriction {
    pub courses: Vec<i64>,
}

/// Response of the init call, run once when the app loads the add-on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MobileInit {
    pub templates: Vec<MobileTemplate>,
    pub javascript: String,
    pub restrict: Restriction,
}
