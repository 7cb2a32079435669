//! Localization and escaping of user-supplied display strings.

use crate::common_models::issue::ContextId;

pub mod imp;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait Localizer: Send + Sync {
    /// Turns a raw stored string into text safe to show in `context_id`.
    fn format_display_string(&self, raw: &str, context_id: ContextId) -> String;
}
