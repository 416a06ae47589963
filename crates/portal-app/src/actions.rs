//! Background task execution
//!
//! Every request error is caught here and turned into a result message; none
//! propagate past this point and none are retried.

use portal_core::{Error, NameUpdateRequest};
use tracing::{debug, warn};

use crate::handler::Task;
use crate::message::Message;
use crate::services::LocalPortalApi;

/// Run a task against the backend and return the message carrying its outcome
pub async fn execute_task<A: LocalPortalApi>(task: Task, api: &A) -> Message {
    match task {
        Task::FetchNotifications { token } => {
            debug!("Fetching notifications {}", token);
            let result = api
                .fetch_notifications()
                .await
                .map_err(describe_failure);
            Message::NotificationsLoaded { token, result }
        }

        Task::MarkNotificationsRead => {
            let result = api
                .mark_notifications_read()
                .await
                .map_err(describe_failure);
            Message::NotificationsMarkedRead { result }
        }

        Task::SaveName { full_name } => {
            let request = NameUpdateRequest::new(full_name.clone());
            let result = api
                .update_name(request)
                .await
                .and_then(|response| response.into_confirmed(&full_name))
                .map_err(describe_failure);
            Message::NameSaved { result }
        }
    }
}

/// Request failures degrade the page; anything else points at a broken page
fn describe_failure(err: Error) -> String {
    if err.is_recoverable() {
        debug!("Request failed: {}", err);
    } else {
        warn!("Request could not be sent: {}", err);
    }
    err.to_string()
}
