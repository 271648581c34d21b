// SPDX-License-Identifier: MPL-2.0
//! `coursehub-core` is the non-visual state layer of the CourseHub learning
//! platform front end.
//!
//! Rendering, routing, and authentication live in the view layer; this crate
//! provides the pieces those surfaces share: translation resolution with
//! language fallback, persisted locale preferences with a typed change
//! broadcast, and a paginated notification inbox with optimistic read-state
//! updates.

pub mod config;
pub mod error;
pub mod i18n;
pub mod notifications;
pub mod session;
