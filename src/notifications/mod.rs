// SPDX-License-Identifier: MPL-2.0
//! The notification inbox: records, the backend contract, and the store.
//!
//! The [`store::NotificationStore`] owns what the notification dropdown
//! renders; it loads pages through a [`service::NotificationService`] and
//! applies read-state changes optimistically, reconciling with the server
//! only when a call fails.

pub mod notification;
pub mod service;
pub mod store;
