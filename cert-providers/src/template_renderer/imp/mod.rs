use std::collections::HashSet;

use crate::template_renderer::{error::TemplateRendererError, TemplateRenderer};

/// Emits the template context as a JSON document instead of markup.
///
/// Stands in for the host's templating engine where only the data handed to
/// a template matters, e.g. headless clients and tests.
#[derive(Debug, Default)]
pub struct JsonTemplateRenderer {
    known_templates: Option<HashSet<String>>,
}

impl JsonTemplateRenderer {
    /// Only `templates` may be rendered; other names fail with `UnknownTemplate`.
    pub fn restricted_to<I, S>(templates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known_templates: Some(templates.into_iter().map(Into::into).collect()),
        }
    }
}

impl TemplateRenderer for JsonTemplateRenderer {
    fn render(
        &self,
        template_name: &str,
        context: &serde_json::Value,
    ) -> Result<String, TemplateRendererError> {
        if let Some(known) = &self.known_templates {
            if !known.contains(template_name) {
                return Err(TemplateRendererError::UnknownTemplate(
                    template_name.to_owned(),
                ));
            }
        }

        Ok(serde_json::to_string(context)?)
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_render_serializes_context() {
        let html = JsonTemplateRenderer::default()
            .render("any/template", &json!({"hascertificates": false}))
            .unwrap();

        assert_eq!(html, r#"{"hascertificates":false}"#);
    }

    #[test]
    fn test_restricted_renderer_rejects_unknown_template() {
        let renderer = JsonTemplateRenderer::restricted_to(["known/template"]);

        assert!(renderer.render("known/template", &json!({})).is_ok());
        assert!(matches!(
            renderer.render("other/template", &json!({})),
            Err(TemplateRendererError::UnknownTemplate(name)) if name == "other/template"
        ));
    }
}
