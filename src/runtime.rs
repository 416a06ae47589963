//! Browser event loop glue
//!
//! Messages are queued and drained one at a time: process through `update`,
//! sync the view, then perform the returned action. Actions that raise DOM
//! events synchronously (blurring the name field) re-enter [`Runtime::dispatch`];
//! those messages are queued behind the current one instead of nesting.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use portal_app::actions::execute_task;
use portal_app::{process_message, Message, PageState, UpdateAction};
use portal_core::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::dom::{js_error, PageElements};
use crate::http::FetchApi;
use crate::timer;
use crate::view::{self, ViewCache};

pub struct Runtime {
    state: RefCell<PageState>,
    elements: PageElements,
    api: FetchApi,
    cache: RefCell<ViewCache>,
    queue: RefCell<VecDeque<Message>>,
    draining: Cell<bool>,
}

impl Runtime {
    pub fn new(state: PageState, elements: PageElements, api: FetchApi) -> Rc<Self> {
        Rc::new(Self {
            state: RefCell::new(state),
            elements,
            api,
            cache: RefCell::new(ViewCache::default()),
            queue: RefCell::new(VecDeque::new()),
            draining: Cell::new(false),
        })
    }

    pub fn elements(&self) -> &PageElements {
        &self.elements
    }

    /// Copy of the current page state
    pub fn state(&self) -> PageState {
        self.state.borrow().clone()
    }

    /// Queue a message and drain the queue unless a drain is already running
    pub fn dispatch(self: &Rc<Self>, message: Message) {
        self.queue.borrow_mut().push_back(message);
        if self.draining.replace(true) {
            return;
        }

        loop {
            let next = self.queue.borrow_mut().pop_front();
            let Some(message) = next else {
                break;
            };
            let action = process_message(&mut self.state.borrow_mut(), message);
            if let Err(e) = self.render() {
                error!("Failed to update page: {}", e);
            }
            if let Some(action) = action {
                self.perform(action);
            }
        }

        self.draining.set(false);
    }

    /// Sync the DOM with the current state
    pub fn render(&self) -> Result<()> {
        view::sync(
            &self.state.borrow(),
            &self.elements,
            &mut self.cache.borrow_mut(),
        )
    }

    fn perform(self: &Rc<Self>, action: UpdateAction) {
        match action {
            UpdateAction::SpawnTask(task) => {
                let runtime = Rc::clone(self);
                spawn_local(async move {
                    let message = execute_task(task, &runtime.api).await;
                    runtime.dispatch(message);
                });
            }

            UpdateAction::StartTimer { delay_ms, message } => {
                let runtime = Rc::clone(self);
                if let Err(e) = timer::set_timeout(delay_ms, move || runtime.dispatch(*message)) {
                    error!("Failed to start timer: {}", e);
                }
            }

            UpdateAction::Alert { message } => {
                if let Some(window) = web_sys::window() {
                    if let Err(e) = window.alert_with_message(&message) {
                        warn!("Alert failed: {}", js_error(e));
                    }
                }
            }

            UpdateAction::FocusNameAtEnd => {
                if let Err(e) = self.focus_name_at_end() {
                    warn!("Could not place caret in name field: {}", e);
                }
            }

            UpdateAction::BlurName => {
                if let Some(name) = self.elements.name.as_ref() {
                    if let Err(e) = name.field.blur() {
                        warn!("Could not blur name field: {}", js_error(e));
                    }
                }
            }
        }
    }

    fn focus_name_at_end(&self) -> Result<()> {
        let Some(name) = self.elements.name.as_ref() else {
            return Ok(());
        };
        let range = self.elements.document.create_range().map_err(js_error)?;
        range.select_node_contents(&name.field).map_err(js_error)?;
        range.collapse_with_to_start(false);

        let window = web_sys::window().ok_or_else(|| Error::dom("no window available"))?;
        if let Some(selection) = window.get_selection().map_err(js_error)? {
            selection.remove_all_ranges().map_err(js_error)?;
            selection.add_range(&range).map_err(js_error)?;
        }
        name.field.focus().map_err(js_error)
    }
}
