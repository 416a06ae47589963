//! Backend service trait
//!
//! The browser runtime implements [`LocalPortalApi`] over `fetch`; tests use an
//! in-memory fake. Handlers never call the backend directly, they return a
//! [`Task`](crate::Task) that [`execute_task`](crate::actions::execute_task)
//! runs against an implementation of this trait.

use portal_core::prelude::*;
use portal_core::{NameUpdateRequest, NameUpdateResponse, Notification};

/// Calls to the portal backend
///
/// Errors distinguish transport failures ([`Error::Transport`]), non-success
/// statuses ([`Error::HttpStatus`]) and undecodable bodies ([`Error::Json`]).
/// Application-level failure flags are returned in the response and checked by
/// the caller.
#[trait_variant::make(PortalApi: Send)]
pub trait LocalPortalApi {
    /// `GET /get_notifications`
    async fn fetch_notifications(&self) -> Result<Vec<Notification>>;

    /// `POST /mark_notifications_read`; the response body is ignored
    async fn mark_notifications_read(&self) -> Result<()>;

    /// `POST /profile/name`
    async fn update_name(&self, request: NameUpdateRequest) -> Result<NameUpdateResponse>;
}
