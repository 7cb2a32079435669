//! Turns a fetched page of issues into what the mobile page displays.

use std::sync::Arc;

use url::Url;

use cert_providers::{
    common_models::{issue::OpenIssue, user::UserId},
    localizer::Localizer,
    permission::PermissionChecker,
    url_builder::UrlBuilder,
};

use crate::{
    model::{DisplayRecord, ListingResult, ShareLinkConfig, ViewerContext},
    service::{error::ListingError, share_link_service::ShareLinkService},
};

pub struct Params {
    pub page_size: usize,
    pub share: ShareLinkConfig,
}

pub struct ListingService {
    localizer: Arc<dyn Localizer>,
    url_builder: Arc<dyn UrlBuilder>,
    permission_checker: Arc<dyn PermissionChecker>,
    share_link_service: ShareLinkService,
    params: Params,
}

impl ListingService {
    pub fn new(
        localizer: Arc<dyn Localizer>,
        url_builder: Arc<dyn UrlBuilder>,
        permission_checker: Arc<dyn PermissionChecker>,
        share_link_service: ShareLinkService,
        params: Params,
    ) -> Self {
        Self {
            localizer,
            url_builder,
            permission_checker,
            share_link_service,
            params,
        }
    }

    pub fn page_size(&self) -> usize {
        self.params.page_size
    }

    /// Builds the listing of `user_id` from an already fetched `page`.
    ///
    /// Records keep the order of `page`. `total_count` is the number of issues
    /// the user holds overall and only matters when `page` is full. The page
    /// size is not an argument: it is [`Params::page_size`], fixed when the
    /// service is built.
    pub fn summarize(
        &self,
        page: &[OpenIssue],
        total_count: usize,
        user_id: UserId,
        viewer: &ViewerContext,
    ) -> Result<ListingResult, ListingError> {
        let show_share_on_linkedin = self.show_share_on_linkedin(user_id, viewer);

        let certificates = page
            .iter()
            .map(|issue| self.display_record(issue, show_share_on_linkedin, viewer))
            .collect::<Result<Vec<_>, _>>()?;

        let view_more_url = self.decide_view_more(page.len(), total_count, user_id)?;

        Ok(ListingResult {
            has_certificates: !certificates.is_empty(),
            certificates,
            can_verify: self.permission_checker.can_verify(),
            show_share_on_linkedin,
            view_more_url,
        })
    }

    /// Share buttons are only offered to users looking at their own certificates.
    pub fn show_share_on_linkedin(&self, user_id: UserId, viewer: &ViewerContext) -> bool {
        viewer.user_id == user_id && self.params.share.enabled
    }

    /// The app shows a single page. When the user holds more issues than fit
    /// on it, this returns the web listing where the rest can be seen.
    pub fn decide_view_more(
        &self,
        page_len: usize,
        total_count: usize,
        user_id: UserId,
    ) -> Result<Option<Url>, ListingError> {
        if !has_more_pages(page_len, total_count, self.params.page_size) {
            return Ok(None);
        }

        tracing::debug!(
            %user_id,
            total_count,
            page_size = self.params.page_size,
            "listing exceeds one page, linking to web listing"
        );
        Ok(Some(self.url_builder.listing_page_url(user_id)?))
    }

    fn display_record(
        &self,
        issue: &OpenIssue,
        with_share_url: bool,
        viewer: &ViewerContext,
    ) -> Result<DisplayRecord, ListingError> {
        let share_url = if with_share_url {
            Some(self.share_link_service.build(issue, &self.params.share)?)
        } else {
            None
        };

        Ok(DisplayRecord {
            id: issue.id,
            name: self
                .localizer
                .format_display_string(&issue.name, issue.context_id),
            course_name: issue
                .course_name
                .as_deref()
                .map(|course_name| {
                    self.localizer
                        .format_display_string(course_name, issue.context_id)
                }),
            time_created: issue.time_created,
            expires: issue.expires,
            is_expired: issue.is_expired_at(viewer.now.unix_timestamp()),
            code: issue.code.clone(),
            verify_url: self.url_builder.verification_url(&issue.code)?,
            file_url: self.url_builder.file_url(&issue.code)?,
            share_url,
        })
    }
}

/// A short page is always the last one; a full page only hides more issues
/// when the total exceeds the page size.
pub fn has_more_pages(page_len: usize, total_count: usize, page_size: usize) -> bool {
    page_len >= page_size && total_count > page_size
}
