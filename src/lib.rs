//! # warranty-portal - Page scripts for the warranty portal
//!
//! Compiled to WebAssembly and loaded on every server-rendered page. Wires:
//! - password visibility toggles
//! - the notification bell and its dropdown panel
//! - the inline profile name editor
//! - auto-dismissing success banners
//! - the change-password form toggle
//!
//! State and behavior live in `portal-app`; this crate only discovers
//! elements, forwards DOM events as messages, applies state to the DOM and
//! performs side effects (fetch, timers, alerts, focus).
//!
//! Configuration is read from an optional
//! `<script type="application/json" id="portal-config">` element; see
//! [`PortalConfig`] for the keys.

pub mod dom;
pub mod http;
pub mod listeners;
pub mod logging;
pub mod runtime;
pub mod timer;
pub mod view;

use std::rc::Rc;

use portal_app::{Message, PageState};
use portal_core::prelude::*;
use portal_core::PortalConfig;
use url::Url;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::dom::{js_error, PageElements};
use crate::http::FetchApi;
use crate::runtime::Runtime;

/// Id of the optional JSON configuration element
pub const CONFIG_ELEMENT_ID: &str = "portal-config";

/// Handle to the scripts running on one page
pub struct PortalPage {
    runtime: Rc<Runtime>,
}

impl PortalPage {
    /// Copy of the current page state
    pub fn state(&self) -> PageState {
        self.runtime.state()
    }

    /// Feed a message as if it came from the page
    pub fn dispatch(&self, message: Message) {
        self.runtime.dispatch(message);
    }
}

/// Wire the page scripts to `document`.
///
/// Call once per document: every call installs its own listeners.
pub fn init(document: &Document, config: PortalConfig) -> Result<PortalPage> {
    config.validate()?;

    let page_url = document.url().map_err(js_error)?;
    let base = Url::parse(&page_url)
        .map_err(|e| Error::config(format!("page URL '{page_url}' is invalid: {e}")))?;
    let api = FetchApi::new(config.endpoints.resolve(&base)?);

    let elements = PageElements::discover(document, &config.selectors)?;
    let state = PageState::new(elements.snapshot(), config.flash);
    let runtime = Runtime::new(state, elements, api);

    listeners::install(&runtime)?;
    runtime.dispatch(Message::PageLoaded);

    info!("Page scripts ready");
    Ok(PortalPage { runtime })
}

/// Read the page's configuration element; defaults when there is none
pub fn config_from_page(document: &Document) -> Result<PortalConfig> {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(PortalConfig::default());
    };
    let json = element.text_content().unwrap_or_default();
    PortalConfig::from_json(&json)
}

/// WebAssembly entry point
#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window available"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document available"))?;

    let config = config_from_page(&document);
    logging::init(config.as_ref().ok().and_then(|c| c.log_filter.as_deref()));
    let config = config.unwrap_or_else(|e| {
        warn!("Ignoring invalid #{}: {}", CONFIG_ELEMENT_ID, e);
        PortalConfig::default()
    });

    if document.ready_state() == "loading" {
        let doc = document.clone();
        let mut config = Some(config);
        listeners::listen(&document, "DOMContentLoaded", move |_| {
            if let Some(config) = config.take() {
                boot(&doc, config);
            }
        })
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    } else {
        boot(&document, config);
    }
    Ok(())
}

fn boot(document: &Document, config: PortalConfig) {
    if let Err(e) = init(document, config) {
        error!("Page scripts failed to start: {}", e);
    }
}
