// ============================================================================
// APP - Root element, state, and the render loop
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use gloo_timers::callback::Timeout;
use crate::dom::{append_child, clear_children, get_element_by_id};
use crate::state::{AppState, UpdateType};
use crate::utils::{chart_ffi, APP_ROOT_ID};
use crate::views::{apply_auth_state, render_app};

pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id(APP_ROOT_ID)
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();

        // Deferred so that handlers finish before the tree under them is replaced
        state.subscribe_to_changes(move |update_type| {
            Timeout::new(0, move || crate::rerender_app_with_type(update_type)).forget();
        });

        Ok(Self { state, root })
    }

    /// Full render: clear #app and draw the current screen
    pub fn render(&mut self) -> Result<(), JsValue> {
        log::debug!("🎬 [APP] render() on {:?}", self.state.router.screen());

        chart_ffi::destroy_chart();
        clear_children(&self.root);
        let view = render_app(&self.state)?;
        append_child(&self.root, &view)
    }

    pub fn update(&mut self, update_type: UpdateType) -> Result<(), JsValue> {
        match update_type {
            UpdateType::FullRender => self.render(),
            UpdateType::AuthTabs if !self.state.router.is_dashboard() => apply_auth_state(&self.state.router),
            UpdateType::AuthTabs => Ok(()),
        }
    }
}
