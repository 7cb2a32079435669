use std::error::Error;
use std::sync::Arc;

use cert_mobile_core::config::MobileCoreConfig;
use cert_mobile_core::model::{MyCertificatesArgs, ViewerContext};
use cert_mobile_core::CertMobileCore;
use cert_providers::common_models::issue::OpenIssue;
use cert_providers::issue_repository::imp::in_memory::InMemoryIssueRepository;
use cert_providers::permission::imp::StaticPermissionChecker;
use cert_providers::plugin_config::imp::MapPluginConfig;
use time::OffsetDateTime;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("cert_mobile_core=debug".parse()?))
        .init();

    let plugin_config = MapPluginConfig::from_json(
        r#"{"show_shareonlinkedin": "1", "linkedinorganizationid": "123"}"#,
    )?;
    let config = MobileCoreConfig::default().with_plugin_config(&plugin_config)?;

    let now = OffsetDateTime::now_utc();
    let user_id = 2.into();

    let issues = (1..=22)
        .map(|id| OpenIssue {
            id: id.into(),
            name: format!("Certificate demo template {id}"),
            course_name: Some("Demo course".to_owned()),
            context_id: 1.into(),
            time_created: now.unix_timestamp() - id * 86_400,
            // every third certificate expired yesterday
            expires: if id % 3 == 0 { now.unix_timestamp() - 86_400 } else { 0 },
            code: format!("DEMO{id:08}").into(),
            user_id,
        })
        .collect();

    let core = CertMobileCore::new(
        Some(config),
        Arc::new(InMemoryIssueRepository::new(issues)),
        Arc::new(StaticPermissionChecker::for_viewer(user_id)),
    )?;

    let viewer = ViewerContext::new(user_id, now);
    let data = core
        .mobile_service
        .my_certificates_data(&viewer, user_id)
        .await?;
    tracing::info!(
        shown = data.certificates.len(),
        view_more = ?data.view_more_url.as_ref().map(|url| url.as_str()),
        "listing prepared"
    );

    let content = core
        .mobile_service
        .my_certificates_view(&viewer, MyCertificatesArgs::default())
        .await?;
    println!("{}", serde_json::to_string_pretty(&content)?);

    Ok(())
}
