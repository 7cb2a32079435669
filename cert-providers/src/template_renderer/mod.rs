//! Rendering of named templates with a JSON context.

use crate::template_renderer::error::TemplateRendererError;

pub mod error;
pub mod imp;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    fn render(
        &self,
        template_name: &str,
        context: &serde_json::Value,
    ) -> Result<String, TemplateRendererError>;
}
