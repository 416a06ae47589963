//! HTML for the notification panel body
//!
//! The panel is filled with `innerHTML`, so every server-provided string goes
//! through [`html_escape`].

use std::fmt::Write;

use crate::classify::TagPolicy;
use crate::notification::Notification;

pub const PANEL_HEADER: &str = "Notifications";
pub const EMPTY_MESSAGE: &str = "You have no new notifications.";
pub const LOAD_ERROR_MESSAGE: &str = "Could not load notifications.";

/// Render the panel body for a successful fetch
pub fn render_notifications(notifications: &[Notification], policy: &dyn TagPolicy) -> String {
    let mut html = format!(r#"<div class="notification-panel-header">{PANEL_HEADER}</div>"#);

    if notifications.is_empty() {
        let _ = write!(html, r#"<div class="notification-empty">{EMPTY_MESSAGE}</div>"#);
        return html;
    }

    html.push_str(r#"<ul class="notification-list">"#);
    for notification in notifications {
        render_item(&mut html, notification, policy);
    }
    html.push_str("</ul>");
    html
}

/// Render the placeholder shown when the fetch fails
pub fn render_load_error() -> String {
    format!(r#"<div class="notification-empty">{LOAD_ERROR_MESSAGE}</div>"#)
}

fn render_item(html: &mut String, notification: &Notification, policy: &dyn TagPolicy) {
    let item_class = if notification.is_unread() {
        "notification-item unread"
    } else {
        "notification-item"
    };
    let tag = policy.classify(&notification.message);

    let _ = write!(
        html,
        r#"<li class="{item_class}"><div class="notif-title">{message}</div><div><span class="notif-tag {tag_class}">{tag_label}</span> <small class="notif-date">{date}</small></div></li>"#,
        message = html_escape(&notification.message),
        tag_class = tag.css_class(),
        tag_label = tag.label(),
        date = html_escape(&notification.display_date()),
    );
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{NotificationTag, WordingPolicy};
    use crate::notification::NotificationStatus;

    #[test]
    fn test_empty_list_renders_empty_state() {
        let html = render_notifications(&[], &WordingPolicy);

        insta::assert_snapshot!(html, @r#"<div class="notification-panel-header">Notifications</div><div class="notification-empty">You have no new notifications.</div>"#);
        assert!(!html.contains("<ul"));
    }

    #[test]
    fn test_items_render_in_order_with_tags() {
        let notifications = vec![
            Notification::new(
                "Warranty for Laptop has expired",
                NotificationStatus::Unread,
                "2024-05-03",
            ),
            Notification::new("Claim approved", NotificationStatus::Read, "2024-04-30"),
        ];

        let html = render_notifications(&notifications, &WordingPolicy);

        insta::assert_snapshot!(html, @r#"<div class="notification-panel-header">Notifications</div><ul class="notification-list"><li class="notification-item unread"><div class="notif-title">Warranty for Laptop has expired</div><div><span class="notif-tag notif-expired">Expired</span> <small class="notif-date">May 3</small></div></li><li class="notification-item"><div class="notif-title">Claim approved</div><div><span class="notif-tag notif-generic">Notice</span> <small class="notif-date">April 30</small></div></li></ul>"#);
    }

    #[test]
    fn test_messages_are_escaped() {
        let notifications = vec![Notification::new(
            "<img src=x onerror=alert(1)>",
            NotificationStatus::Read,
            "2024-05-03",
        )];

        let html = render_notifications(&notifications, &WordingPolicy);

        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_custom_policy_is_used() {
        let notifications = vec![Notification::new(
            "has expired",
            NotificationStatus::Read,
            "2024-05-03",
        )];
        let policy = |_: &str| NotificationTag::Expiring;

        let html = render_notifications(&notifications, &policy);

        assert!(html.contains("notif-expiring"));
        assert!(!html.contains("notif-expired"));
    }

    #[test]
    fn test_load_error_is_single_placeholder() {
        let html = render_load_error();
        assert_eq!(
            html,
            r#"<div class="notification-empty">Could not load notifications.</div>"#
        );
        assert!(!html.contains(PANEL_HEADER));
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape(r#"a&b "c" 'd'"#), "a&amp;b &quot;c&quot; &#39;d&#39;");
    }
}
