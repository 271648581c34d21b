// SPDX-License-Identifier: MPL-2.0
//! Backend contract for the notification inbox.
//!
//! A real deployment talks to the platform API; [`SeedService`] stands in
//! for it with a fixed in-memory list while preserving the same response
//! shape and pagination semantics.

use super::notification::{Category, Notification};
use crate::error::{Error, Result};
use crate::session::UserId;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Number of notifications returned per page.
pub const PAGE_SIZE: usize = 5;

/// One fetched page of notifications plus the server-truth counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationPage {
    /// Records for this page, newest first.
    pub notifications: Vec<Notification>,
    /// Total number of records for the user.
    pub total: usize,
    /// Number of unread records for the user, across all pages.
    pub unread: usize,
    /// Whether pages beyond this one exist.
    pub has_more: bool,
}

/// Source of notification pages and sink for read-state changes.
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Fetches one page of notifications ordered by descending creation
    /// time. Page numbers start at 1.
    async fn fetch_page(&self, user: &UserId, page: u32) -> Result<NotificationPage>;

    /// Marks a single notification read. Success carries no payload.
    async fn mark_read(&self, user: &UserId, id: &str) -> Result<()>;

    /// Marks every notification for the user read.
    async fn mark_all_read(&self, user: &UserId) -> Result<()>;
}

/// In-memory notification backend seeded with fixed records.
///
/// Read-state mutations persist across calls, so a reload after a failed
/// optimistic update observes the same server truth a real backend would
/// report.
pub struct SeedService {
    records: Mutex<Vec<Notification>>,
}

impl SeedService {
    /// Creates the service with the default seed list: ten records, four of
    /// them unread, newest first.
    #[must_use]
    pub fn new() -> Self {
        Self::with_records(seed_records())
    }

    /// Creates the service from caller-provided records, sorted newest
    /// first.
    #[must_use]
    pub fn with_records(mut records: Vec<Notification>) -> Self {
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Self {
            records: Mutex::new(records),
        }
    }
}

impl Default for SeedService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationService for SeedService {
    async fn fetch_page(&self, _user: &UserId, page: u32) -> Result<NotificationPage> {
        if page == 0 {
            return Err(Error::Service("page numbers start at 1".to_string()));
        }

        let records = self.records.lock().expect("notification seed lock poisoned");
        let total = records.len();
        let unread = records.iter().filter(|n| !n.read).count();
        let start = (page as usize - 1) * PAGE_SIZE;
        let notifications: Vec<Notification> =
            records.iter().skip(start).take(PAGE_SIZE).cloned().collect();
        let has_more = start + notifications.len() < total;

        Ok(NotificationPage {
            notifications,
            total,
            unread,
            has_more,
        })
    }

    async fn mark_read(&self, _user: &UserId, id: &str) -> Result<()> {
        let mut records = self.records.lock().expect("notification seed lock poisoned");
        if let Some(record) = records.iter_mut().find(|n| n.id == id) {
            record.read = true;
        }
        // Unknown ids are treated as already handled, matching the
        // fire-and-forget contract.
        Ok(())
    }

    async fn mark_all_read(&self, _user: &UserId) -> Result<()> {
        let mut records = self.records.lock().expect("notification seed lock poisoned");
        for record in records.iter_mut() {
            record.read = true;
        }
        Ok(())
    }
}

fn seed_records() -> Vec<Notification> {
    let base = Utc::now();
    let at = |hours: i64| base - Duration::hours(hours);

    vec![
        Notification::new(
            "n-01",
            "New lesson in Rust Fundamentals",
            "Lesson 14, \"Lifetimes in practice\", is now available.",
            Category::Info,
            at(1),
        )
        .with_action_url("/courses/rust-fundamentals/lessons/14"),
        Notification::new(
            "n-02",
            "Your review got a reply",
            "Mika responded to your review of Web Security Basics.",
            Category::Info,
            at(3),
        )
        .with_avatar_url("https://cdn.coursehub.example/avatars/mika.png")
        .with_action_url("/courses/web-security-basics/reviews"),
        Notification::new(
            "n-03",
            "Assignment graded",
            "Your Async Programming assignment was graded: 94/100.",
            Category::Success,
            at(7),
        )
        .with_action_url("/courses/async-programming/assignments/3"),
        Notification::new(
            "n-04",
            "Course update: Web Security Basics",
            "Two lessons were rewritten; your progress is unaffected.",
            Category::Warning,
            at(12),
        ),
        Notification::new(
            "n-05",
            "Certificate ready",
            "Your Intro to Git certificate is ready to download.",
            Category::Success,
            at(26),
        )
        .with_action_url("/certificates/intro-to-git")
        .with_read(true),
        Notification::new(
            "n-06",
            "Enrollment confirmed",
            "You are enrolled in Rust Fundamentals.",
            Category::Success,
            at(50),
        )
        .with_read(true),
        Notification::new(
            "n-07",
            "Payment method expiring",
            "The card ending in 4242 expires at the end of the month.",
            Category::Error,
            at(73),
        )
        .with_action_url("/account/billing")
        .with_read(true),
        Notification::new(
            "n-08",
            "Instructor announcement",
            "Databases 101 now includes a weekly live Q&A session.",
            Category::Info,
            at(98),
        )
        .with_avatar_url("https://cdn.coursehub.example/avatars/jonas.png")
        .with_read(true),
        Notification::new(
            "n-09",
            "Scheduled maintenance",
            "CourseHub will be unavailable Sunday 02:00-03:00 UTC.",
            Category::Warning,
            at(120),
        )
        .with_read(true),
        Notification::new(
            "n-10",
            "Welcome to CourseHub",
            "Browse the catalog and enroll in your first course.",
            Category::Success,
            at(160),
        )
        .with_action_url("/courses")
        .with_read(true),
    ]
}
