//! DOM event wiring
//!
//! Listeners live as long as the page; each closure holds its own handle to
//! the runtime. Toggles read what the page shows at click time and send it
//! along, so changes made by other scripts are respected.

use std::rc::Rc;

use portal_app::Message;
use portal_core::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, KeyboardEvent, Node};

use crate::dom::{display_of, js_error};
use crate::runtime::Runtime;

/// Install every listener for the discovered elements
pub fn install(runtime: &Rc<Runtime>) -> Result<()> {
    let elements = runtime.elements();

    for (index, pair) in elements.passwords.iter().enumerate() {
        let rt = Rc::clone(runtime);
        let input = pair.input.clone();
        listen(&pair.toggle, "click", move |event| {
            event.prevent_default();
            let revealed = input.get_attribute("type").as_deref() == Some("text");
            rt.dispatch(Message::PasswordToggleClicked { index, revealed });
        })?;
    }

    if let Some(panel) = elements.notifications.as_ref() {
        let rt = Rc::clone(runtime);
        let panel_el = panel.panel.clone();
        listen(&panel.icon, "click", move |event| {
            event.prevent_default();
            let visible = display_of(&panel_el) == "block";
            rt.dispatch(Message::NotificationIconClicked { visible });
        })?;

        let rt = Rc::clone(runtime);
        let panel_el = panel.panel.clone();
        let icon: Node = panel.icon.clone().into();
        let body: Node = panel.panel.clone().into();
        listen(&elements.document, "click", move |event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside = icon.contains(target.as_ref()) || body.contains(target.as_ref());
            let visible = display_of(&panel_el) == "block";
            rt.dispatch(Message::DocumentClicked { inside, visible });
        })?;
    }

    if let Some(name) = elements.name.as_ref() {
        let rt = Rc::clone(runtime);
        let field = name.field.clone();
        listen(&name.field, "blur", move |_| {
            let text = field.text_content().unwrap_or_default();
            rt.dispatch(Message::NameBlurred { text });
        })?;

        let rt = Rc::clone(runtime);
        listen(&name.field, "keydown", move |event| {
            let is_enter = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|key| key.key() == "Enter");
            if is_enter {
                event.prevent_default();
                rt.dispatch(Message::NameEnterPressed);
            }
        })?;

        if let (Some(edit), Some(save)) = (name.edit_button.as_ref(), name.save_button.as_ref()) {
            let rt = Rc::clone(runtime);
            listen(edit, "click", move |_| rt.dispatch(Message::EditNameClicked))?;

            let rt = Rc::clone(runtime);
            listen(save, "click", move |_| rt.dispatch(Message::SaveNameClicked))?;
        }
    }

    if let Some(change_password) = elements.change_password.as_ref() {
        let rt = Rc::clone(runtime);
        let form = change_password.form.clone();
        listen(&change_password.toggle, "click", move |_| {
            let visible = display_of(&form) == "block";
            rt.dispatch(Message::ChangePasswordToggleClicked { visible })
        })?;
    }

    Ok(())
}

/// Attach a listener for the lifetime of the page
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<()> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    closure.forget();
    Ok(())
}
