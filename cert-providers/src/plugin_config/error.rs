use thiserror::Error;

#[derive(Debug, Error)]
pub enum PluginConfigError {
    #[error("Setting `{key}` is not a valid {expected}")]
    UnexpectedType { key: String, expected: &'static str },
    #[error("JSON error: `{0}`")]
    JsonError(#[from] serde_json::Error),
}
