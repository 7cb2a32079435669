use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateRendererError {
    #[error("Unknown template `{0}`")]
    UnknownTemplate(String),
    #[error("Render failed: `{0}`")]
    Failed(String),
    #[error("JSON error: `{0}`")]
    JsonError(#[from] serde_json::Error),
}
