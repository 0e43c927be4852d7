// ============================================================================
// SIDEBAR VIEW - Avatar, role, panel navigation, logout
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{text_element, ElementBuilder};
use crate::services::{AuthService, ToastService};
use crate::state::{AppState, UpdateType};
use crate::utils::constants::ACTIVE_CLASS;
use crate::viewmodels::{AuthViewModel, NavItem, SidebarModel};

pub fn render_sidebar(state: &AppState, model: &SidebarModel) -> Result<Element, JsValue> {
    let profile = ElementBuilder::new("div")?
        .class("sidebar-profile")
        .child(text_element("div", "avatar", &model.initial)?)?
        .child(text_element("div", "profile-name", &model.name)?)?
        .child(text_element("div", "profile-role", model.role_label)?)?
        .build();

    let nav_items = model
        .nav
        .iter()
        .map(|item| render_nav_item(state, item))
        .collect::<Result<Vec<_>, _>>()?;
    let nav = ElementBuilder::new("nav")?
        .class("sidebar-nav")
        .children(nav_items)?
        .build();

    let logout = {
        let state = state.clone();
        ElementBuilder::new("button")?
            .class("btn-logout")
            .text("Logout")
            .on_click(move |_| {
                AuthViewModel::new(AuthService::new(), ToastService::new()).logout(&state);
            })?
            .build()
    };

    Ok(ElementBuilder::new("aside")?
        .class("sidebar")
        .child(text_element("div", "sidebar-brand", "NoProxy")?)?
        .child(profile)?
        .child(nav)?
        .child(logout)?
        .build())
}

fn render_nav_item(state: &AppState, item: &NavItem) -> Result<Element, JsValue> {
    let state = state.clone();
    let panel = item.panel;
    Ok(ElementBuilder::new("button")?
        .class("nav-item")
        .class_if(ACTIVE_CLASS, item.active)?
        .text(item.label)
        .on_click(move |_| {
            if state.router.show_panel(panel) {
                state.notify_subscribers(UpdateType::FullRender);
            }
        })?
        .build())
}
