//! Mobile app support for a certificate plugin.
//!
//! The crate prepares a user's issued certificates for the "My certificates"
//! page of a mobile client: every issue becomes a display record carrying its
//! verification and download URLs and, for the owner, a LinkedIn
//! "Add to Profile" link. Only one page is shown; when the user holds more
//! issues a link to the web listing is added.
//!
//! Storage, permissions, localization and templating belong to the host and
//! are reached through the traits of `cert_providers`.
//!
//! ## Getting started
//!
//! ```ignore rust
//! let core = CertMobileCore::new(None, issue_repository, permission_checker)?;
//! let content = core
//!     .mobile_service
//!     .my_certificates_view(&ViewerContext::now_utc(user_id), MyCertificatesArgs::default())
//!     .await?;
//! ```

use std::sync::Arc;

use thiserror::Error;
use url::Url;

use cert_providers::{
    issue_repository::IssueRepository,
    localizer::imp::plain_text::PlainTextLocalizer,
    permission::PermissionChecker,
    template_renderer::imp::JsonTemplateRenderer,
    url_builder::{
        error::UrlBuilderError,
        imp::site::{Params as SiteUrlParams, SiteUrlBuilder},
    },
};

use config::MobileCoreConfig;
use model::ShareLinkConfig;
use service::{
    addon::{mobile_addon, MobileAddon},
    link_handler::MyCertificatesLinkHandler,
    listing_service::{ListingService, Params as ListingParams},
    mobile_service::{MobileService, Params as MobileParams, MY_CERTIFICATES_TEMPLATE},
    share_link_service::ShareLinkService,
};

pub mod config;
pub mod model;
pub mod service;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Url builder error: `{0}`")]
    UrlBuilderError(#[from] UrlBuilderError),
    #[error("Invalid share endpoint: `{0}`")]
    InvalidShareEndpoint(#[from] url::ParseError),
}

pub struct CertMobileCore {
    pub mobile_service: MobileService,
    pub link_handler: MyCertificatesLinkHandler,
    pub addon: MobileAddon,
}

impl CertMobileCore {
    /// Wires the services with the bundled URL builder, localizer and renderer.
    /// `None` uses [`MobileCoreConfig::default`].
    pub fn new(
        config: Option<MobileCoreConfig>,
        issue_repository: Arc<dyn IssueRepository>,
        permission_checker: Arc<dyn PermissionChecker>,
    ) -> Result<Self, CoreError> {
        let config = config.unwrap_or_default();
        tracing::debug!(
            share_mode = %config.share.mode,
            time_zone = ?config.share.time_zone,
            page_size = config.listing.issues_per_page,
            "building mobile core"
        );

        let url_builder = Arc::new(SiteUrlBuilder::new(SiteUrlParams {
            site_root: config.site.www_root.clone(),
            share_target: config.share.mode.share_target(),
        })?);

        let share_link_config = ShareLinkConfig {
            enabled: config.share.mode.is_enabled(),
            organization_id: Some(config.share.organization_id.clone()),
            base_url: Url::parse(&config.share.add_to_profile_url)?,
            time_zone: config.share.time_zone,
        };

        let listing_service = ListingService::new(
            Arc::new(PlainTextLocalizer),
            url_builder.clone(),
            permission_checker.clone(),
            ShareLinkService::new(url_builder),
            ListingParams {
                page_size: config.listing.issues_per_page,
                share: share_link_config,
            },
        );

        let mobile_service = MobileService::new(
            issue_repository,
            permission_checker,
            Arc::new(JsonTemplateRenderer::restricted_to([MY_CERTIFICATES_TEMPLATE])),
            listing_service,
            MobileParams {
                site_id: config.site.site_id,
                init_javascript: config.init_javascript,
            },
        );

        Ok(Self {
            mobile_service,
            link_handler: MyCertificatesLinkHandler,
            addon: mobile_addon(&config.site.www_root),
        })
    }
}
