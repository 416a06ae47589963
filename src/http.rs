//! Backend calls over the browser's `fetch`

use portal_app::LocalPortalApi;
use portal_core::prelude::*;
use portal_core::{
    parse_notifications, NameUpdateRequest, NameUpdateResponse, Notification, ResolvedEndpoints,
};
use url::Url;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, RequestInit, Response};

use crate::dom::describe_js;

/// [`LocalPortalApi`] implementation for the page's own origin.
///
/// Requests are same-origin, so the session cookie goes along by default.
#[derive(Debug, Clone)]
pub struct FetchApi {
    endpoints: ResolvedEndpoints,
}

impl FetchApi {
    pub fn new(endpoints: ResolvedEndpoints) -> Self {
        Self { endpoints }
    }

    /// Send a request; non-2xx statuses are errors
    async fn send(&self, url: &Url, method: &str, json_body: Option<String>) -> Result<Response> {
        let endpoint = url.path();
        let window = web_sys::window().ok_or_else(|| Error::dom("no window available"))?;

        let opts = RequestInit::new();
        opts.set_method(method);
        if let Some(body) = json_body {
            let headers = Headers::new().map_err(|e| Error::transport(endpoint, describe_js(&e)))?;
            headers
                .set("Content-Type", "application/json")
                .map_err(|e| Error::transport(endpoint, describe_js(&e)))?;
            opts.set_headers(headers.as_ref());
            opts.set_body(&JsValue::from_str(&body));
        }

        let resp = JsFuture::from(window.fetch_with_str_and_init(url.as_str(), &opts))
            .await
            .map_err(|e| Error::transport(endpoint, describe_js(&e)))?;
        let resp: Response = resp
            .dyn_into()
            .map_err(|_| Error::transport(endpoint, "fetch did not return a Response"))?;

        if !resp.ok() {
            return Err(Error::http_status(endpoint, resp.status()));
        }
        Ok(resp)
    }

    async fn body_text(url: &Url, resp: &Response) -> Result<String> {
        let endpoint = url.path();
        let promise = resp
            .text()
            .map_err(|e| Error::transport(endpoint, describe_js(&e)))?;
        let text = JsFuture::from(promise)
            .await
            .map_err(|e| Error::transport(endpoint, describe_js(&e)))?;
        Ok(text.as_string().unwrap_or_default())
    }
}

impl LocalPortalApi for FetchApi {
    async fn fetch_notifications(&self) -> Result<Vec<Notification>> {
        let url = &self.endpoints.notifications;
        let resp = self.send(url, "GET", None).await?;
        let body = Self::body_text(url, &resp).await?;
        parse_notifications(&body)
    }

    async fn mark_notifications_read(&self) -> Result<()> {
        self.send(&self.endpoints.mark_read, "POST", None).await?;
        Ok(())
    }

    async fn update_name(&self, request: NameUpdateRequest) -> Result<NameUpdateResponse> {
        let url = &self.endpoints.profile_name;
        let body = serde_json::to_string(&request)?;
        let resp = self.send(url, "POST", Some(body)).await?;
        let text = Self::body_text(url, &resp).await?;
        Ok(serde_json::from_str(&text)?)
    }
}
