// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` record and `Category` enum used
//! throughout the notification system. The serde shape matches the backend's
//! wire format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Visual category of a notification, determining icon and color in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// A single notification record.
///
/// Created server-side; the only mutation this layer ever applies is the
/// `read` flag flipping from `false` to `true`. The creation timestamp is
/// used for sort and display only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Identifier, unique within the store.
    pub id: String,
    pub title: String,
    pub message: String,
    pub category: Category,
    pub read: bool,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,
}

impl Notification {
    /// Creates an unread notification with no avatar or action.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
        category: Category,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            message: message.into(),
            category,
            read: false,
            created_at,
            avatar_url: None,
            action_url: None,
        }
    }

    #[must_use]
    pub fn with_avatar_url(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_action_url(mut self, url: impl Into<String>) -> Self {
        self.action_url = Some(url.into());
        self
    }

    /// Sets the read flag, for seeding already-read records.
    #[must_use]
    pub fn with_read(mut self, read: bool) -> Self {
        self.read = read;
        self
    }
}
