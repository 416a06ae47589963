//! Notification domain types and their wire representation

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::classify::{classify, NotificationTag};

/// Read state of a notification as reported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationStatus {
    Unread,
    #[default]
    Read,
}

impl NotificationStatus {
    /// Parse the server's status string.
    ///
    /// Only "unread" (any case) is unread; every other value counts as read.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("unread") {
            NotificationStatus::Unread
        } else {
            NotificationStatus::Read
        }
    }

    pub fn is_unread(self) -> bool {
        self == NotificationStatus::Unread
    }
}

/// One entry of the `/get_notifications` response, exactly as sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRecord {
    #[serde(rename = "NOTIFICATION_ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "MESSAGE", default)]
    pub message: Option<String>,
    #[serde(rename = "STATUS", default)]
    pub status: String,
    #[serde(rename = "CREATED_AT", default)]
    pub created_at: String,
}

/// A notification ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Option<i64>,
    pub message: String,
    pub status: NotificationStatus,
    pub created_at: String,
}

impl Notification {
    pub fn new(
        message: impl Into<String>,
        status: NotificationStatus,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            message: message.into(),
            status,
            created_at: created_at.into(),
        }
    }

    pub fn is_unread(&self) -> bool {
        self.status.is_unread()
    }

    /// Tag derived from the message wording
    pub fn tag(&self) -> NotificationTag {
        classify(&self.message)
    }

    /// "Month Day" rendering of `created_at`, e.g. "May 3"
    pub fn display_date(&self) -> String {
        display_date(&self.created_at)
    }
}

impl From<NotificationRecord> for Notification {
    fn from(record: NotificationRecord) -> Self {
        Self {
            id: record.id,
            message: record.message.unwrap_or_default(),
            status: NotificationStatus::parse(&record.status),
            created_at: record.created_at,
        }
    }
}

/// Decode a `/get_notifications` body into display-ready notifications
pub fn parse_notifications(body: &str) -> crate::Result<Vec<Notification>> {
    let records: Vec<NotificationRecord> = serde_json::from_str(body)?;
    Ok(records.into_iter().map(Notification::from).collect())
}

/// Format a server timestamp as "Month Day".
///
/// Accepts plain dates, RFC 3339, "YYYY-MM-DD HH:MM:SS" and RFC 2822. The
/// calendar date is taken as written, with no timezone shift. Anything else is
/// returned unchanged.
pub fn display_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%B %-d").to_string(),
        None => raw.to_string(),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    DateTime::parse_from_rfc2822(raw).ok().map(|dt| dt.date_naive())
}
