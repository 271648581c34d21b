// SPDX-License-Identifier: MPL-2.0
//! Authenticated user context.
//!
//! Authentication itself is handled outside this crate; components that talk
//! to the backend only need the identifier the auth layer hands out.

use std::fmt;

/// Identifier of the signed-in user, as issued by the authentication layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
