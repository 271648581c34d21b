// SPDX-License-Identifier: MPL-2.0
//! Paginated notification state with optimistic read-state updates.

use super::notification::Notification;
use super::service::NotificationService;
use crate::session::UserId;
use std::sync::Arc;

/// State behind the notification dropdown.
///
/// The store accumulates pages fetched from the service in descending
/// creation-time order and exposes the counters the UI renders. Unread count
/// and the has-more flag always come from the fetch response; they are never
/// recomputed locally during a fetch.
///
/// Without an authenticated user every server-touching operation clears the
/// local state and returns, so signed-out surfaces render a quiet empty
/// state instead of an error.
///
/// The `loading` flag is a best-effort latch against duplicate in-flight
/// fetches from `load_more`, not a lock; an overlapping `refresh` is
/// unguarded, and at worst the next full reload recovers the list.
pub struct NotificationStore {
    service: Arc<dyn NotificationService>,
    user: Option<UserId>,
    notifications: Vec<Notification>,
    unread_count: usize,
    loading: bool,
    has_more: bool,
    current_page: u32,
}

impl NotificationStore {
    pub fn new(service: Arc<dyn NotificationService>, user: Option<UserId>) -> Self {
        Self {
            service,
            user,
            notifications: Vec::new(),
            unread_count: 0,
            loading: false,
            has_more: false,
            current_page: 1,
        }
    }

    /// Accumulated records, newest first.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.unread_count
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Replaces the user context. Local state is cleared either way; the
    /// next `refresh` repopulates it for the new user.
    pub fn set_user(&mut self, user: Option<UserId>) {
        self.user = user;
        self.clear_local();
    }

    /// Fetches one page. With `reset` the page replaces the list, otherwise
    /// it is appended, skipping ids already present.
    ///
    /// Fetch failures never propagate: the store falls back to the empty
    /// baseline and logs a warning.
    pub async fn load(&mut self, page: u32, reset: bool) {
        let Some(user) = self.user.clone() else {
            self.clear_local();
            return;
        };

        self.loading = true;
        let result = self.service.fetch_page(&user, page).await;
        self.loading = false;

        match result {
            Ok(fetched) => {
                if reset {
                    self.notifications = fetched.notifications;
                } else {
                    for notification in fetched.notifications {
                        if self.notifications.iter().all(|n| n.id != notification.id) {
                            self.notifications.push(notification);
                        }
                    }
                }
                self.unread_count = fetched.unread;
                self.has_more = fetched.has_more;
                self.current_page = page;
            }
            Err(err) => {
                tracing::warn!(error = %err, page, "failed to load notifications");
                self.clear_local();
            }
        }
    }

    /// Fetches the next sequential page and appends it.
    ///
    /// No-op while a fetch is in flight or when the server reported no
    /// further pages.
    pub async fn load_more(&mut self) {
        if self.loading || !self.has_more {
            return;
        }
        self.load(self.current_page + 1, false).await;
    }

    /// Reloads from the first page, replacing the list.
    pub async fn refresh(&mut self) {
        self.load(1, true).await;
    }

    /// Marks one notification read, optimistically.
    ///
    /// The local record flips and the unread count drops (floored at zero)
    /// before the server call resolves. On failure the store reloads page 1
    /// to resynchronize; on success the optimistic state is trusted as
    /// final, so a server-side view that already diverged (say, a concurrent
    /// session) is only picked up by the next refresh.
    pub async fn mark_as_read(&mut self, id: &str) {
        let Some(user) = self.user.clone() else {
            self.clear_local();
            return;
        };

        let mut was_unread = false;
        if let Some(notification) = self.notifications.iter_mut().find(|n| n.id == id) {
            if !notification.read {
                notification.read = true;
                was_unread = true;
            }
        }
        if was_unread {
            self.unread_count = self.unread_count.saturating_sub(1);
        }

        if let Err(err) = self.service.mark_read(&user, id).await {
            tracing::warn!(error = %err, id, "mark-as-read failed, reloading");
            self.load(1, true).await;
        }
    }

    /// Marks every accumulated notification read, optimistically, with the
    /// same reconcile-on-failure policy as [`mark_as_read`](Self::mark_as_read).
    pub async fn mark_all_as_read(&mut self) {
        let Some(user) = self.user.clone() else {
            self.clear_local();
            return;
        };

        for notification in &mut self.notifications {
            notification.read = true;
        }
        self.unread_count = 0;

        if let Err(err) = self.service.mark_all_read(&user).await {
            tracing::warn!(error = %err, "mark-all-as-read failed, reloading");
            self.load(1, true).await;
        }
    }

    fn clear_local(&mut self) {
        self.notifications.clear();
        self.unread_count = 0;
        self.loading = false;
        self.has_more = false;
        self.current_page = 1;
    }
}
