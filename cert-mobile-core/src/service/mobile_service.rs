//! Entry points called by the mobile app to show the "My certificates" page.
//!
//! The app cannot paginate, so only the first page of issues is fetched and
//! a link to the web listing is offered when more exist.

use std::sync::Arc;

use cert_providers::{
    common_models::user::UserId,
    issue_repository::{model::IssueOrder, IssueRepository},
    permission::PermissionChecker,
    template_renderer::TemplateRenderer,
};

use crate::{
    model::{
        ListingResult, MobileContent, MobileInit, MobileTemplate, MyCertificatesArgs,
        Restriction, ViewerContext,
    },
    service::{error::MobileServiceError, listing_service::ListingService},
};

pub const MY_CERTIFICATES_TEMPLATE: &str = "tool_certificate/mobile_my_certificates_page";

pub struct Params {
    /// Course id of the site front page; the add-on is restricted to it.
    pub site_id: i64,
    pub init_javascript: String,
}

pub struct MobileService {
    issue_repository: Arc<dyn IssueRepository>,
    permission_checker: Arc<dyn PermissionChecker>,
    template_renderer: Arc<dyn TemplateRenderer>,
    listing_service: ListingService,
    params: Params,
}

impl MobileService {
    pub fn new(
        issue_repository: Arc<dyn IssueRepository>,
        permission_checker: Arc<dyn PermissionChecker>,
        template_renderer: Arc<dyn TemplateRenderer>,
        listing_service: ListingService,
        params: Params,
    ) -> Self {
        Self {
            issue_repository,
            permission_checker,
            template_renderer,
            listing_service,
            params,
        }
    }

    /// Data for the listing of `user_id`. Does not check whether the viewer
    /// may see it; see [`MobileService::my_certificates_view`].
    pub async fn my_certificates_data(
        &self,
        viewer: &ViewerContext,
        user_id: UserId,
    ) -> Result<ListingResult, MobileServiceError> {
        let page_size = self.listing_service.page_size();
        let order = IssueOrder::NewestFirst;
        tracing::debug!(%user_id, page_size, %order, "fetching certificates");
        let page = self
            .issue_repository
            .fetch_page(user_id, 0, page_size, order)
            .await?;

        // a short page already holds every issue
        let total_count = if page.len() < page_size {
            page.len()
        } else {
            self.issue_repository.count_all(user_id).await?
        };

        tracing::debug!(%user_id, fetched = page.len(), total_count, "summarizing certificates");
        Ok(self
            .listing_service
            .summarize(&page, total_count, user_id, viewer)?)
    }

    pub async fn my_certificates_view(
        &self,
        viewer: &ViewerContext,
        args: MyCertificatesArgs,
    ) -> Result<MobileContent, MobileServiceError> {
        let user_id = args.resolve_user(viewer);
        if !self.permission_checker.can_view_listing(user_id) {
            tracing::warn!(viewer = %viewer.user_id, %user_id, "certificate listing denied");
            return Err(MobileServiceError::Forbidden(user_id));
        }

        let data = self.my_certificates_data(viewer, user_id).await?;
        let html = self
            .template_renderer
            .render(MY_CERTIFICATES_TEMPLATE, &serde_json::to_value(&data)?)?;

        Ok(MobileContent {
            templates: vec![MobileTemplate {
                id: "main".to_owned(),
                html,
            }],
            javascript: String::new(),
            other_data: String::new(),
            files: String::new(),
        })
    }

    pub fn my_certificates_init(&self) -> MobileInit {
        MobileInit {
            templates: vec![],
            javascript: self.params.init_javascript.clone(),
            restrict: Restriction {
                courses: vec![self.params.site_id],
            },
        }
    }
}
