//! Element discovery
//!
//! Resolves the configured selectors once at startup. A feature whose
//! elements are missing is simply not wired.

use portal_app::{NameSnapshot, PageSnapshot, PanelSnapshot};
use portal_core::prelude::*;
use portal_core::Selectors;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

/// Inputs a password toggle can control
const PASSWORD_INPUTS: &str = r#"input[type="password"], input[type="text"]"#;

/// A `.toggle-password` control and the input it reveals
#[derive(Debug, Clone)]
pub struct PasswordPair {
    pub toggle: Element,
    pub input: Element,
}

#[derive(Debug, Clone)]
pub struct PanelElements {
    pub icon: Element,
    pub panel: HtmlElement,
    pub badge: Option<HtmlElement>,
}

#[derive(Debug, Clone)]
pub struct NameElements {
    pub field: HtmlElement,
    pub edit_button: Option<HtmlElement>,
    pub save_button: Option<HtmlElement>,
}

impl NameElements {
    pub fn has_buttons(&self) -> bool {
        self.edit_button.is_some() && self.save_button.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct ChangePasswordElements {
    pub toggle: Element,
    pub form: HtmlElement,
}

/// Every element the page scripts touch
#[derive(Debug, Clone)]
pub struct PageElements {
    pub document: Document,
    pub passwords: Vec<PasswordPair>,
    pub notifications: Option<PanelElements>,
    pub name: Option<NameElements>,
    pub flashes: Vec<Element>,
    pub change_password: Option<ChangePasswordElements>,
}

impl PageElements {
    pub fn discover(document: &Document, selectors: &Selectors) -> Result<Self> {
        let passwords = query_all(document, &selectors.password_toggle)?
            .into_iter()
            .filter_map(|toggle| match pair_password(&toggle, selectors) {
                Ok(pair) => Some(pair),
                Err(e) => {
                    warn!("Skipping password toggle: {}", e);
                    None
                }
            })
            .collect();

        let notifications = match (
            query(document, &selectors.notification_icon)?,
            query_html(document, &selectors.notification_panel)?,
        ) {
            (Some(icon), Some(panel)) => Some(PanelElements {
                icon,
                panel,
                badge: query_html(document, &selectors.notification_badge)?,
            }),
            _ => None,
        };

        let name = match query_html(document, &selectors.editable_name)? {
            Some(field) => Some(NameElements {
                field,
                edit_button: query_html(document, &selectors.edit_name_button)?,
                save_button: query_html(document, &selectors.save_name_button)?,
            }),
            None => None,
        };

        let change_password = match (
            query(document, &selectors.change_password_toggle)?,
            query_html(document, &selectors.change_password_form)?,
        ) {
            (Some(toggle), Some(form)) => Some(ChangePasswordElements { toggle, form }),
            _ => None,
        };

        let elements = Self {
            document: document.clone(),
            passwords,
            notifications,
            name,
            flashes: query_all(document, &selectors.success_flash)?,
            change_password,
        };
        debug!(
            "Discovered {} password toggles, {} success banners, panel={}, name={}, change_password={}",
            elements.passwords.len(),
            elements.flashes.len(),
            elements.notifications.is_some(),
            elements.name.is_some(),
            elements.change_password.is_some(),
        );
        Ok(elements)
    }

    /// Read the initial page state
    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            password_fields: self
                .passwords
                .iter()
                .map(|pair| pair.input.get_attribute("type").as_deref() == Some("text"))
                .collect(),
            notifications: self.notifications.as_ref().map(|n| PanelSnapshot {
                visible: display_of(&n.panel) == "block",
                badge: n.badge.is_some(),
            }),
            profile_name: self.name.as_ref().map(|n| NameSnapshot {
                text: n.field.text_content().unwrap_or_default(),
                has_buttons: n.has_buttons(),
            }),
            success_flashes: self.flashes.len(),
            change_password_form: self
                .change_password
                .as_ref()
                .map(|c| display_of(&c.form) == "block"),
        }
    }
}

fn pair_password(toggle: &Element, selectors: &Selectors) -> Result<PasswordPair> {
    let wrapper = toggle
        .closest(&selectors.password_wrapper)
        .map_err(js_error)?
        .ok_or_else(|| Error::element_missing(selectors.password_wrapper.as_str()))?;
    let input = wrapper
        .query_selector(PASSWORD_INPUTS)
        .map_err(js_error)?
        .ok_or_else(|| Error::element_missing(PASSWORD_INPUTS))?;
    Ok(PasswordPair {
        toggle: toggle.clone(),
        input,
    })
}

fn query(document: &Document, selector: &str) -> Result<Option<Element>> {
    document.query_selector(selector).map_err(js_error)
}

fn query_html(document: &Document, selector: &str) -> Result<Option<HtmlElement>> {
    Ok(query(document, selector)?.and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let list = document.query_selector_all(selector).map_err(js_error)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Inline `display` style of an element
pub fn display_of(element: &HtmlElement) -> String {
    element
        .style()
        .get_property_value("display")
        .unwrap_or_default()
}

/// Convert a thrown JS value into a DOM error
pub fn js_error(value: JsValue) -> Error {
    Error::dom(describe_js(&value))
}

/// Best-effort message for a thrown JS value
pub fn describe_js(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
