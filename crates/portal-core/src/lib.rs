//! # portal-core - Core Domain Types
//!
//! Foundation crate for the warranty portal page scripts. Provides the
//! notification model, tag classification, panel rendering, wire payloads,
//! configuration and error handling.
//!
//! This crate has **no browser dependencies**; everything here runs and is
//! tested natively.
//!
//! ## Public API
//!
//! ### Notifications (`notification`, `classify`)
//! - [`Notification`] - A notification ready for display
//! - [`NotificationStatus`] - Unread/read state
//! - [`NotificationTag`] - Expired / Expiring / Notice, from [`classify()`]
//! - [`TagPolicy`] - Swappable classification policy
//!
//! ### Rendering (`render`)
//! - [`render_notifications()`] - Panel body for a successful fetch
//! - [`render_load_error()`] - Panel body for a failed fetch
//!
//! ### Profile (`profile`)
//! - [`NameUpdateRequest`], [`NameUpdateResponse`] - `/profile/name` payloads
//!
//! ### Configuration (`config`)
//! - [`PortalConfig`] - Endpoints, selectors and banner timings
//!
//! ### Error Handling (`error`)
//! - [`Error`], [`Result`]

pub mod classify;
pub mod config;
pub mod error;
pub mod notification;
pub mod profile;
pub mod render;

/// Prelude for common imports used throughout the portal crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use classify::{classify, NotificationTag, TagPolicy, WordingPolicy};
pub use config::{Endpoints, FlashTiming, PortalConfig, ResolvedEndpoints, Selectors};
pub use error::{Error, Result};
pub use notification::{
    display_date, parse_notifications, Notification, NotificationRecord, NotificationStatus,
};
pub use profile::{NameUpdateRequest, NameUpdateResponse};
pub use render::{html_escape, render_load_error, render_notifications};
