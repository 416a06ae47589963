//! In-memory backend for tests

use std::sync::Mutex;

use portal_core::prelude::*;
use portal_core::{NameUpdateRequest, NameUpdateResponse, Notification};

use crate::services::LocalPortalApi;

/// Fake backend returning canned responses.
///
/// Each canned response is returned once; later calls get an empty success.
#[derive(Default)]
pub struct FakeApi {
    notifications: Mutex<Option<Result<Vec<Notification>>>>,
    mark_read: Mutex<Option<Result<()>>>,
    name_response: Mutex<Option<Result<NameUpdateResponse>>>,
    calls: Mutex<Vec<&'static str>>,
    names: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notifications(self, result: Result<Vec<Notification>>) -> Self {
        *self.notifications.lock().unwrap() = Some(result);
        self
    }

    pub fn with_mark_read(self, result: Result<()>) -> Self {
        *self.mark_read.lock().unwrap() = Some(result);
        self
    }

    pub fn with_name_response(self, result: Result<NameUpdateResponse>) -> Self {
        *self.name_response.lock().unwrap() = Some(result);
        self
    }

    /// Names of the API methods called, in order
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    /// Every `full_name` submitted to `update_name`
    pub fn submitted_names(&self) -> Vec<String> {
        self.names.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

impl LocalPortalApi for FakeApi {
    async fn fetch_notifications(&self) -> Result<Vec<Notification>> {
        self.record("fetch_notifications");
        self.notifications
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn mark_notifications_read(&self) -> Result<()> {
        self.record("mark_notifications_read");
        self.mark_read.lock().unwrap().take().unwrap_or(Ok(()))
    }

    async fn update_name(&self, request: NameUpdateRequest) -> Result<NameUpdateResponse> {
        self.record("update_name");
        self.names.lock().unwrap().push(request.full_name.clone());
        self.name_response
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| {
                Ok(NameUpdateResponse {
                    success: true,
                    full_name: Some(request.full_name),
                    error: None,
                })
            })
    }
}
