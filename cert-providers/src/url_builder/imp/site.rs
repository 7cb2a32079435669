use url::Url;

use crate::common_models::{issue::IssueCode, user::UserId};
use crate::url_builder::{error::UrlBuilderError, model::ShareTarget, UrlBuilder};

const VERIFICATION_PATH: &str = "admin/tool/certificate/index.php";
const FILE_PATH: &str = "admin/tool/certificate/view.php";
const LISTING_PATH: &str = "admin/tool/certificate/my.php";

pub struct Params {
    /// Web root of the site, e.g. `https://www.example.com/moodle`.
    pub site_root: String,
    pub share_target: Option<ShareTarget>,
}

/// Builds plugin URLs below the site's web root.
pub struct SiteUrlBuilder {
    site_root: Url,
    share_target: Option<ShareTarget>,
}

impl SiteUrlBuilder {
    pub fn new(params: Params) -> Result<Self, UrlBuilderError> {
        // `Url::join` drops the last path segment unless it ends with a slash
        let root = format!("{}/", params.site_root.trim_end_matches('/'));
        let site_root = Url::parse(&root)?;
        if site_root.cannot_be_a_base() {
            return Err(UrlBuilderError::InvalidSiteRoot(params.site_root));
        }

        Ok(Self {
            site_root,
            share_target: params.share_target,
        })
    }

    fn page_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, UrlBuilderError> {
        let mut url = self.site_root.join(path)?;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        Ok(url)
    }
}

impl UrlBuilder for SiteUrlBuilder {
    fn verification_url(&self, code: &IssueCode) -> Result<Url, UrlBuilderError> {
        self.page_url(VERIFICATION_PATH, &[("code", code.as_str())])
    }

    fn file_url(&self, code: &IssueCode) -> Result<Url, UrlBuilderError> {
        self.page_url(FILE_PATH, &[("code", code.as_str())])
    }

    fn certificate_url_for_share(&self, code: &IssueCode) -> Result<Url, UrlBuilderError> {
        match self.share_target {
            Some(ShareTarget::VerificationPage) => self.verification_url(code),
            Some(ShareTarget::CertificateFile) => self.file_url(code),
            None => Err(UrlBuilderError::SharingDisabled),
        }
    }

    fn listing_page_url(&self, user_id: UserId) -> Result<Url, UrlBuilderError> {
        let user_id = user_id.to_string();
        self.page_url(LISTING_PATH, &[("userid", user_id.as_str())])
    }
}
