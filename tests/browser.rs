//! DOM wiring tests, run in a headless browser with `wasm-pack test`

#![cfg(target_arch = "wasm32")]

use portal_app::{FlashPhase, Message, RequestToken, NAME_SAVE_FAILED};
use portal_core::{
    render_load_error, render_notifications, Notification, NotificationStatus, PortalConfig,
    WordingPolicy,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement};

use warranty_portal::{init, PortalPage};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount(html: &str) -> PortalPage {
    let doc = document();
    doc.body().unwrap().set_inner_html(html);
    init(&doc, PortalConfig::default()).unwrap()
}

fn html_element(selector: &str) -> HtmlElement {
    document()
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

fn display(selector: &str) -> String {
    html_element(selector)
        .style()
        .get_property_value("display")
        .unwrap()
}

/// Replace `window.alert` with a recorder so failures do not block the runner
fn capture_alerts() {
    let window = web_sys::window().unwrap();
    let recorder = js_sys::Function::new_with_args("message", "window.lastAlert = message;");
    js_sys::Reflect::set(&window, &JsValue::from_str("alert"), &recorder).unwrap();
    js_sys::Reflect::set(&window, &JsValue::from_str("lastAlert"), &JsValue::NULL).unwrap();
}

fn last_alert() -> Option<String> {
    let window = web_sys::window().unwrap();
    js_sys::Reflect::get(&window, &JsValue::from_str("lastAlert"))
        .unwrap()
        .as_string()
}

const PANEL_MARKUP: &str = r##"
    <a id="notification-icon" href="#">Bell <span class="notification-badge">2</span></a>
    <div id="notification-panel"></div>
    <p id="elsewhere">Dashboard</p>"##;

#[wasm_bindgen_test]
fn load_leaves_server_markup_untouched() {
    let _page = mount(
        r##"<div class="password-wrapper">
             <input type="password" id="pw">
             <span class="toggle-password" id="eye"></span>
           </div>
           <a id="notification-icon" href="#">Bell</a>
           <div id="notification-panel"></div>
           <button id="change-password-toggle">Change password</button>
           <form id="change-password-form"></form>"##,
    );

    let eye = html_element("#eye");
    assert_eq!(eye.get_attribute("aria-label"), None);
    assert_eq!(eye.class_name(), "toggle-password");
    assert_eq!(display("#notification-panel"), "");
    assert_eq!(display("#change-password-form"), "");
}

#[wasm_bindgen_test]
fn password_toggle_reveals_and_hides_input() {
    let _page = mount(
        r#"<div class="password-wrapper">
             <input type="password" id="pw">
             <span class="toggle-password fa fa-eye"></span>
           </div>"#,
    );
    let input = html_element("#pw");
    let toggle = html_element(".toggle-password");

    toggle.click();
    assert_eq!(input.get_attribute("type").as_deref(), Some("text"));
    assert!(toggle.class_list().contains("fa-eye-slash"));
    assert!(!toggle.class_list().contains("fa-eye"));
    assert_eq!(toggle.get_attribute("aria-label").as_deref(), Some("Hide password"));

    toggle.click();
    assert_eq!(input.get_attribute("type").as_deref(), Some("password"));
    assert!(toggle.class_list().contains("fa-eye"));
}

#[wasm_bindgen_test]
fn password_toggle_respects_type_changed_by_other_code() {
    let _page = mount(
        r#"<div class="password-wrapper">
             <input type="password" id="pw">
             <span class="toggle-password fa fa-eye"></span>
           </div>"#,
    );
    let input = html_element("#pw");
    let toggle = html_element(".toggle-password");

    toggle.click();
    input.set_attribute("type", "password").unwrap();
    toggle.click();

    assert_eq!(input.get_attribute("type").as_deref(), Some("text"));
    assert_eq!(toggle.get_attribute("title").as_deref(), Some("Hide password"));
}

#[wasm_bindgen_test]
fn toggles_in_separate_wrappers_are_independent() {
    let _page = mount(
        r#"<div class="password-wrapper"><input type="password" id="a"><span class="toggle-password" id="ta"></span></div>
           <div class="password-wrapper"><input type="password" id="b"><span class="toggle-password" id="tb"></span></div>"#,
    );

    html_element("#tb").click();
    assert_eq!(html_element("#a").get_attribute("type").as_deref(), Some("password"));
    assert_eq!(html_element("#b").get_attribute("type").as_deref(), Some("text"));
}

#[wasm_bindgen_test]
fn change_password_form_toggles_between_block_and_none() {
    let _page = mount(
        r#"<button id="change-password-toggle">Change password</button>
           <form id="change-password-form" style="display: none"></form>"#,
    );

    html_element("#change-password-toggle").click();
    assert_eq!(display("#change-password-form"), "block");

    html_element("#change-password-toggle").click();
    assert_eq!(display("#change-password-form"), "none");
}

#[wasm_bindgen_test]
fn change_password_toggle_respects_display_changed_by_other_code() {
    let _page = mount(
        r#"<button id="change-password-toggle">Change password</button>
           <form id="change-password-form" style="display: none"></form>"#,
    );

    html_element("#change-password-toggle").click();
    html_element("#change-password-form")
        .style()
        .set_property("display", "none")
        .unwrap();
    html_element("#change-password-toggle").click();

    assert_eq!(display("#change-password-form"), "block");
}

#[wasm_bindgen_test]
fn loaded_notifications_fill_panel_and_mark_read_hides_badge() {
    let page = mount(PANEL_MARKUP);

    html_element("#notification-icon").click();
    assert_eq!(display("#notification-panel"), "block");

    let notifications = vec![
        Notification::new("Your warranty has expired", NotificationStatus::Unread, "2024-05-03"),
        Notification::new("Welcome aboard", NotificationStatus::Read, "2024-01-15"),
    ];
    page.dispatch(Message::NotificationsLoaded {
        token: RequestToken(1),
        result: Ok(notifications.clone()),
    });

    let panel = html_element("#notification-panel");
    assert_eq!(
        panel.inner_html(),
        render_notifications(&notifications, &WordingPolicy)
    );
    assert!(panel.inner_html().contains("notification-item unread"));
    assert_eq!(display(".notification-badge"), "");

    page.dispatch(Message::NotificationsMarkedRead { result: Ok(()) });
    assert_eq!(display(".notification-badge"), "none");
}

#[wasm_bindgen_test]
fn failed_fetch_shows_placeholder_and_keeps_badge() {
    let page = mount(PANEL_MARKUP);

    html_element("#notification-icon").click();
    page.dispatch(Message::NotificationsLoaded {
        token: RequestToken(1),
        result: Err("Request to /get_notifications returned HTTP 500".to_string()),
    });

    assert_eq!(
        html_element("#notification-panel").inner_html(),
        render_load_error()
    );
    assert_eq!(display(".notification-badge"), "");
}

#[wasm_bindgen_test]
fn click_outside_closes_panel_and_inside_keeps_it_open() {
    let _page = mount(PANEL_MARKUP);

    html_element("#notification-icon").click();
    html_element("#notification-panel").click();
    assert_eq!(display("#notification-panel"), "block");

    html_element("#elsewhere").click();
    assert_eq!(display("#notification-panel"), "none");
}

#[wasm_bindgen_test]
fn failed_save_restores_name_and_alerts() {
    capture_alerts();
    let page = mount(
        r#"<span id="editable-name">Ada Lovelace</span>
           <button id="edit-name-btn">Edit</button>
           <button id="save-name-btn" style="display: none">Save</button>"#,
    );
    let field = html_element("#editable-name");
    field.set_text_content(Some("Ada King"));

    page.dispatch(Message::NameSaved {
        result: Err("Server rejected the request: Name too long".to_string()),
    });

    assert_eq!(field.text_content().as_deref(), Some("Ada Lovelace"));
    assert_eq!(last_alert().as_deref(), Some(NAME_SAVE_FAILED));
}

#[wasm_bindgen_test]
fn edit_button_makes_name_editable() {
    let _page = mount(
        r#"<span id="editable-name">Jane Doe</span>
           <button id="edit-name-btn">Edit</button>
           <button id="save-name-btn" style="display: none">Save</button>"#,
    );

    html_element("#edit-name-btn").click();
    let field = html_element("#editable-name");
    assert_eq!(field.get_attribute("contenteditable").as_deref(), Some("true"));
    assert_eq!(display("#edit-name-btn"), "none");
    assert_eq!(display("#save-name-btn"), "");
}

#[wasm_bindgen_test]
fn blank_name_is_not_submitted() {
    let page = mount(
        r#"<span id="editable-name">Jane Doe</span>
           <button id="edit-name-btn">Edit</button>
           <button id="save-name-btn">Save</button>"#,
    );

    page.dispatch(Message::EditNameClicked);
    page.dispatch(Message::NameBlurred {
        text: "   ".to_string(),
    });

    let editor = page.state().name_editor.unwrap();
    assert!(!editor.editing);
    assert_eq!(editor.baseline, "Jane Doe");
    assert_eq!(
        html_element("#editable-name")
            .get_attribute("contenteditable")
            .as_deref(),
        Some("false")
    );
}

#[wasm_bindgen_test]
fn page_without_features_still_starts() {
    let page = mount("<p>Nothing to wire here</p>");
    let state = page.state();
    assert!(state.passwords.is_empty());
    assert!(state.panel.is_none());
    assert!(state.name_editor.is_none());
    assert!(state.change_password.is_none());
}

#[wasm_bindgen_test]
fn flash_banner_gets_hide_class_when_visible_period_ends() {
    let page = mount(r#"<div class="flash success" id="f">Saved</div>"#);
    assert_eq!(page.state().flashes.phase, FlashPhase::Visible);

    page.dispatch(Message::FlashVisibleElapsed);
    assert!(html_element("#f").class_list().contains("hide"));

    page.dispatch(Message::FlashFadeElapsed);
    assert!(document().get_element_by_id("f").is_none());
}

#[wasm_bindgen_test]
fn page_config_errors_are_returned_to_the_caller() {
    let doc = document();
    doc.body().unwrap().set_inner_html(
        r#"<script type="application/json" id="portal-config">{"flash": {"visible_ms": "soon"}}</script>"#,
    );
    assert!(warranty_portal::config_from_page(&doc).is_err());

    doc.body().unwrap().set_inner_html("<p>No config here</p>");
    let config = warranty_portal::config_from_page(&doc).unwrap();
    assert_eq!(config.flash.visible_ms, 1000);
}
