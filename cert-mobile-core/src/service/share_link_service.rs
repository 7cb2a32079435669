//! Builds "Add to Profile" links that let a user publish an issued
//! certificate on their LinkedIn profile.
//!
//! The link carries the certificate name, the month it was issued (and the
//! month it expires, when it does), its code and a public URL pointing back to
//! the site. Parameters are appended in a fixed order so equal inputs always
//! produce the same link.

use std::sync::Arc;

use time::OffsetDateTime;
use url::Url;

use cert_providers::{common_models::issue::OpenIssue, url_builder::UrlBuilder};

use crate::{
    model::{ShareLinkConfig, ShareTimeZone},
    service::error::ShareLinkError,
};

pub struct ShareLinkService {
    pub url_builder: Arc<dyn UrlBuilder>,
}

impl ShareLinkService {
    pub fn new(url_builder: Arc<dyn UrlBuilder>) -> Self {
        Self { url_builder }
    }

    pub fn build(
        &self,
        issue: &OpenIssue,
        config: &ShareLinkConfig,
    ) -> Result<Url, ShareLinkError> {
        let (issue_year, issue_month) = year_and_month(issue.time_created, config.time_zone)?;
        let expiration = if issue.expires > 0 {
            Some(year_and_month(issue.expires, config.time_zone)?)
        } else {
            None
        };
        let cert_url = self.url_builder.certificate_url_for_share(&issue.code)?;

        let mut url = config.base_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("name", &issue.name)
                .append_pair("issueYear", &issue_year)
                .append_pair("issueMonth", &issue_month)
                .append_pair("certId", issue.code.as_str())
                .append_pair("certUrl", cert_url.as_str());

            if let Some((expiration_year, expiration_month)) = &expiration {
                query
                    .append_pair("expirationYear", expiration_year)
                    .append_pair("expirationMonth", expiration_month);
            }

            if let Some(organization_id) = config.organization_id() {
                query.append_pair("organizationId", organization_id);
            }
        }

        Ok(url)
    }
}

/// Four-digit year and zero-padded month of `timestamp` seen from `time_zone`.
fn year_and_month(
    timestamp: i64,
    time_zone: ShareTimeZone,
) -> Result<(String, String), ShareLinkError> {
    let date = OffsetDateTime::from_unix_timestamp(timestamp)?
        .to_offset(time_zone.offset_at(timestamp)?)
        .date();

    Ok((
        format!("{:04}", date.year()),
        format!("{:02}", u8::from(date.month())),
    ))
}

#[cfg(test)]
mod test {
    use cert_providers::{
        common_models::issue::{IssueCode, OpenIssue},
        url_builder::MockUrlBuilder,
    };
    use chrono::{Local, TimeZone};
    use mockall::predicate::eq;
    use time::{macros::offset, UtcOffset};

    use super::*;

    const CERT_URL: &str = "https://www.example.com/moodle/admin/tool/certificate/index.php?code=0123456789SS";
    const ENCODED_CERT_URL: &str = "https%3A%2F%2Fwww.example.com%2Fmoodle%2Fadmin%2Ftool%2Fcertificate%2Findex.php%3Fcode%3D0123456789SS";

    fn demo_issue(expires: i64) -> OpenIssue {
        OpenIssue {
            id: 1.into(),
            name: "Certificate demo template".to_owned(),
            course_name: None,
            context_id: 1.into(),
            time_created: 1634376554,
            expires,
            code: "0123456789SS".into(),
            user_id: 2.into(),
        }
    }

    fn config(organization_id: Option<&str>) -> ShareLinkConfig {
        ShareLinkConfig {
            enabled: true,
            organization_id: organization_id.map(ToOwned::to_owned),
            base_url: Url::parse("https://www.linkedin.com/profile/add").unwrap(),
            time_zone: ShareTimeZone::Fixed(UtcOffset::UTC),
        }
    }

    fn service() -> ShareLinkService {
        let mut url_builder = MockUrlBuilder::default();
        url_builder
            .expect_certificate_url_for_share()
            .with(eq(IssueCode::from("0123456789SS")))
            .returning(|_| Ok(Url::parse(CERT_URL).unwrap()));

        ShareLinkService::new(Arc::new(url_builder))
    }

    #[test]
    fn test_build_without_expiry_or_organization() {
        let url = service().build(&demo_issue(0), &config(None)).unwrap();

        assert_eq!(
            url.as_str(),
            format!(
                "https://www.linkedin.com/profile/add?name=Certificate+demo+template&issueYear=2021&issueMonth=10&certId=0123456789SS&certUrl={ENCODED_CERT_URL}"
            )
        );
    }

    #[test]
    fn test_build_with_expiry_and_organization() {
        let url = service()
            .build(&demo_issue(123), &config(Some("123")))
            .unwrap();

        assert_eq!(
            url.query(),
            Some(
                format!(
                    "name=Certificate+demo+template&issueYear=2021&issueMonth=10&certId=0123456789SS&certUrl={ENCODED_CERT_URL}&expirationYear=1970&expirationMonth=01&organizationId=123"
                )
                .as_str()
            )
        );
    }

    #[test]
    fn test_empty_organization_is_omitted() {
        let url = service().build(&demo_issue(0), &config(Some(""))).unwrap();

        assert!(url.query_pairs().all(|(key, _)| key != "organizationId"));
    }

    #[test]
    fn test_dates_follow_configured_time_zone() {
        let issue = OpenIssue {
            time_created: 1704067199,
            expires: 1704067199,
            ..demo_issue(0)
        };
        let config = ShareLinkConfig {
            time_zone: ShareTimeZone::Fixed(offset!(+1)),
            ..config(None)
        };

        let url = service().build(&issue, &config).unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

        assert!(pairs.contains(&("issueYear".to_owned(), "2024".to_owned())));
        assert!(pairs.contains(&("issueMonth".to_owned(), "01".to_owned())));
        assert!(pairs.contains(&("expirationYear".to_owned(), "2024".to_owned())));
        assert!(pairs.contains(&("expirationMonth".to_owned(), "01".to_owned())));
    }

    #[test]
    fn test_dates_default_to_server_local_time() {
        let issue = OpenIssue {
            time_created: 1704067199,
            ..demo_issue(0)
        };
        let config = ShareLinkConfig {
            time_zone: ShareTimeZone::default(),
            ..config(None)
        };
        let local = Local.timestamp_opt(1704067199, 0).unwrap();

        let url = service().build(&issue, &config).unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

        assert!(pairs.contains(&("issueYear".to_owned(), local.format("%Y").to_string())));
        assert!(pairs.contains(&("issueMonth".to_owned(), local.format("%m").to_string())));
    }

    #[test]
    fn test_certificate_url_failure_propagates() {
        let mut url_builder = MockUrlBuilder::default();
        url_builder
            .expect_certificate_url_for_share()
            .returning(|_| Err(cert_providers::url_builder::error::UrlBuilderError::SharingDisabled));

        let result = ShareLinkService::new(Arc::new(url_builder)).build(&demo_issue(0), &config(None));

        assert!(matches!(result, Err(ShareLinkError::UrlBuilderError(_))));
    }
}
