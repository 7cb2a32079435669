use serde::{Deserialize, Serialize};

use super::macros::impl_newtype;

/// Numeric identifier of a site user.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);
impl_newtype!(UserId; i64);
