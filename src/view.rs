//! Applies [`PageState`] to the DOM
//!
//! Every widget carries revision counters that move only when a message changes
//! it, and the view writes only when a counter moved since the last sync. The
//! first sync after load therefore leaves the server-rendered markup alone.
//! Attributes and styles are also skipped when the page already shows them.

use portal_app::{Badge, FlashPhase, PageState, PanelContent};
use portal_core::prelude::*;
use portal_core::{render_load_error, render_notifications, WordingPolicy};
use web_sys::{Element, HtmlElement};

use crate::dom::{display_of, js_error, PageElements};

/// What the view last wrote, for change detection
#[derive(Debug, Default)]
pub struct ViewCache {
    passwords: Vec<u64>,
    panel_visibility: u64,
    panel_revision: u64,
    name_mode: u64,
    name_revision: u64,
    flash_phase: FlashPhase,
    change_password: u64,
}

pub fn sync(state: &PageState, elements: &PageElements, cache: &mut ViewCache) -> Result<()> {
    sync_passwords(state, elements, cache)?;
    sync_panel(state, elements, cache)?;
    sync_name(state, elements, cache)?;
    sync_flashes(state, elements, cache)?;

    if let (Some(form), Some(c)) = (state.change_password, elements.change_password.as_ref()) {
        if form.revision != cache.change_password {
            set_display(&c.form, form.display())?;
            cache.change_password = form.revision;
        }
    }
    Ok(())
}

fn sync_passwords(state: &PageState, elements: &PageElements, cache: &mut ViewCache) -> Result<()> {
    cache.passwords.resize(state.passwords.len(), 0);
    let fields = state.passwords.iter().zip(&elements.passwords);
    for ((field, pair), written) in fields.zip(cache.passwords.iter_mut()) {
        if field.revision == *written {
            continue;
        }
        set_attribute(&pair.input, "type", field.input_type())?;

        let classes = pair.toggle.class_list();
        classes
            .toggle_with_force(field.icon_class(), true)
            .map_err(js_error)?;
        classes
            .toggle_with_force(field.hidden_icon_class(), false)
            .map_err(js_error)?;

        set_attribute(&pair.toggle, "aria-label", field.label())?;
        set_attribute(&pair.toggle, "title", field.label())?;
        *written = field.revision;
    }
    Ok(())
}

fn sync_panel(state: &PageState, elements: &PageElements, cache: &mut ViewCache) -> Result<()> {
    let (Some(panel), Some(els)) = (state.panel.as_ref(), elements.notifications.as_ref()) else {
        return Ok(());
    };

    if panel.visibility_revision != cache.panel_visibility {
        set_display(&els.panel, if panel.visible { "block" } else { "none" })?;
        cache.panel_visibility = panel.visibility_revision;
    }

    if panel.content_revision != cache.panel_revision {
        let html = match &panel.content {
            PanelContent::Loaded(notifications) => {
                Some(render_notifications(notifications, &WordingPolicy))
            }
            PanelContent::Failed => Some(render_load_error()),
            PanelContent::Initial => None,
        };
        if let Some(html) = html {
            els.panel.set_inner_html(&html);
        }
        cache.panel_revision = panel.content_revision;
    }

    if let (Some(Badge::Hidden), Some(badge)) = (panel.badge, els.badge.as_ref()) {
        set_display(badge, "none")?;
    }
    Ok(())
}

fn sync_name(state: &PageState, elements: &PageElements, cache: &mut ViewCache) -> Result<()> {
    let (Some(editor), Some(els)) = (state.name_editor.as_ref(), elements.name.as_ref()) else {
        return Ok(());
    };

    if editor.mode_revision != cache.name_mode {
        let editable = if editor.editing { "true" } else { "false" };
        set_attribute(&els.field, "contenteditable", editable)?;

        if let (Some(edit), Some(save)) = (els.edit_button.as_ref(), els.save_button.as_ref()) {
            if editor.editing {
                set_display(edit, "none")?;
                set_display(save, "")?;
            } else {
                set_display(edit, "")?;
                set_display(save, "none")?;
            }
        }
        cache.name_mode = editor.mode_revision;
    }

    if editor.text_revision != cache.name_revision {
        els.field.set_text_content(Some(editor.text.as_str()));
        cache.name_revision = editor.text_revision;
    }
    Ok(())
}

fn sync_flashes(state: &PageState, elements: &PageElements, cache: &mut ViewCache) -> Result<()> {
    if state.flashes.phase == cache.flash_phase {
        return Ok(());
    }
    for flash in &elements.flashes {
        match state.flashes.phase {
            FlashPhase::Visible => {}
            FlashPhase::Fading => flash.class_list().add_1("hide").map_err(js_error)?,
            FlashPhase::Removed => flash.remove(),
        }
    }
    cache.flash_phase = state.flashes.phase;
    Ok(())
}

fn set_attribute(element: &Element, name: &str, value: &str) -> Result<()> {
    if element.get_attribute(name).as_deref() == Some(value) {
        return Ok(());
    }
    element.set_attribute(name, value).map_err(js_error)
}

/// Set the inline `display` style; an empty value clears it
fn set_display(element: &HtmlElement, value: &str) -> Result<()> {
    if display_of(element) == value {
        return Ok(());
    }
    let style = element.style();
    if value.is_empty() {
        style.remove_property("display").map_err(js_error)?;
        Ok(())
    } else {
        style.set_property("display", value).map_err(js_error)
    }
}
