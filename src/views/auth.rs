// ============================================================================
// AUTH VIEW - Sign in / sign up with student & faculty role tabs
// ============================================================================
// Both forms are rendered once; tab, role and password toggles only flip
// classes (apply_auth_state) so typed values survive.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{
    input_value, on_submit, selected_file, set_input_type, set_input_value, text_element,
    toggle_class_by_id, ElementBuilder,
};
use crate::models::auth::{Credentials, RegistrationProfile, Role};
use crate::services::{AuthService, ToastService};
use crate::state::{AppState, AuthTab, RouterState, UpdateType};
use crate::utils::constants as ids;
use crate::viewmodels::AuthViewModel;

pub fn render_auth(state: &AppState) -> Result<Element, JsValue> {
    log::debug!("🎬 [AUTH] render_auth()");

    let header = ElementBuilder::new("div")?
        .class("auth-header")
        .child(text_element("h1", "auth-title", "NoProxy")?)?
        .child(text_element("p", "auth-subtitle", &CONFIG.ui_config.institute_name)?)?
        .build();

    let container = ElementBuilder::new("div")?
        .class("auth-container")
        .child(header)?
        .child(render_role_tabs(state)?)?
        .child(render_auth_tabs(state)?)?
        .child(render_login_form(state)?)?
        .child(render_register_form(state)?)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("auth-screen")
        .child(container)?
        .build())
}

/// Sync classes and input types with the router after a tab/role/toggle change
pub fn apply_auth_state(router: &RouterState) -> Result<(), JsValue> {
    let sign_in = router.auth_tab() == AuthTab::SignIn;
    toggle_class_by_id(ids::SIGN_IN_TAB, ids::ACTIVE_CLASS, sign_in)?;
    toggle_class_by_id(ids::SIGN_UP_TAB, ids::ACTIVE_CLASS, !sign_in)?;
    toggle_class_by_id(ids::LOGIN_FORM, ids::HIDDEN_CLASS, !sign_in)?;
    toggle_class_by_id(ids::REGISTER_FORM, ids::HIDDEN_CLASS, sign_in)?;

    let student = router.role_tab() == Role::Student;
    toggle_class_by_id(ids::ROLE_TAB_STUDENT, ids::ACTIVE_CLASS, student)?;
    toggle_class_by_id(ids::ROLE_TAB_FACULTY, ids::ACTIVE_CLASS, !student)?;
    toggle_class_by_id(ids::REGISTER_PHOTO_FIELD, ids::HIDDEN_CLASS, !router.photo_field_visible())?;

    set_input_type(ids::LOGIN_PASSWORD, password_type(*router.show_login_password.borrow()));
    set_input_type(ids::REGISTER_PASSWORD, password_type(*router.show_register_password.borrow()));
    Ok(())
}

fn password_type(visible: bool) -> &'static str {
    if visible {
        "text"
    } else {
        "password"
    }
}

fn render_role_tabs(state: &AppState) -> Result<Element, JsValue> {
    let current = state.router.role_tab();
    let tab = |id: &str, label: &str, role: Role| -> Result<Element, JsValue> {
        let state = state.clone();
        Ok(ElementBuilder::new("button")?
            .id(id)?
            .attr("type", "button")?
            .class("role-tab")
            .class_if(ids::ACTIVE_CLASS, current == role)?
            .text(label)
            .on_click(move |_| {
                state.router.select_role(role);
                state.notify_subscribers(UpdateType::AuthTabs);
            })?
            .build())
    };

    ElementBuilder::new("div")?
        .class("role-tabs")
        .child(tab(ids::ROLE_TAB_STUDENT, "Student", Role::Student)?)?
        .child(tab(ids::ROLE_TAB_FACULTY, "Faculty", Role::Faculty)?)
        .map(ElementBuilder::build)
}

fn render_auth_tabs(state: &AppState) -> Result<Element, JsValue> {
    let sign_in = state.router.auth_tab() == AuthTab::SignIn;

    let sign_in_tab = {
        let state = state.clone();
        ElementBuilder::new("button")?
            .id(ids::SIGN_IN_TAB)?
            .attr("type", "button")?
            .class("auth-tab")
            .class_if(ids::ACTIVE_CLASS, sign_in)?
            .text("Sign In")
            .on_click(move |_| {
                state.router.show_sign_in();
                state.notify_subscribers(UpdateType::AuthTabs);
            })?
            .build()
    };

    let sign_up_tab = {
        let state = state.clone();
        ElementBuilder::new("button")?
            .id(ids::SIGN_UP_TAB)?
            .attr("type", "button")?
            .class("auth-tab")
            .class_if(ids::ACTIVE_CLASS, !sign_in)?
            .text("Sign Up")
            .on_click(move |_| {
                state.router.show_sign_up();
                state.notify_subscribers(UpdateType::AuthTabs);
            })?
            .build()
    };

    Ok(ElementBuilder::new("div")?
        .class("auth-tabs")
        .child(sign_in_tab)?
        .child(sign_up_tab)?
        .build())
}

fn render_login_form(state: &AppState) -> Result<Element, JsValue> {
    let form = ElementBuilder::new("form")?
        .id(ids::LOGIN_FORM)?
        .class("auth-form")
        .class_if(ids::HIDDEN_CLASS, state.router.auth_tab() != AuthTab::SignIn)?
        .child(form_group("Email", text_input(ids::LOGIN_EMAIL, "email", "you@college.edu")?)?)?
        .child(form_group(
            "Password",
            password_input(state, ids::LOGIN_PASSWORD, ids::LOGIN_PASSWORD_TOGGLE, true)?,
        )?)?
        .child(
            ElementBuilder::new("button")?
                .attr("type", "submit")?
                .class("btn-primary")
                .text("Sign In")
                .build(),
        )?
        .build();

    let state = state.clone();
    on_submit(&form, move || {
        let credentials = Credentials::new(&input_value(ids::LOGIN_EMAIL), &input_value(ids::LOGIN_PASSWORD));
        let state = state.clone();
        spawn_local(async move {
            let vm = AuthViewModel::new(AuthService::new(), ToastService::new());
            vm.login(&state, credentials).await;
        });
    })?;

    Ok(form)
}

fn render_register_form(state: &AppState) -> Result<Element, JsValue> {
    let photo_field = ElementBuilder::new("div")?
        .id(ids::REGISTER_PHOTO_FIELD)?
        .class("form-group")
        .class_if(ids::HIDDEN_CLASS, !state.router.photo_field_visible())?
        .child(text_element("label", "form-label", "Face photo")?)?
        .child(
            ElementBuilder::new("input")?
                .id(ids::REGISTER_PHOTO)?
                .attr("type", "file")?
                .attr("accept", "image/*")?
                .class("form-input")
                .build(),
        )?
        .build();

    let back_to_sign_in = {
        let state = state.clone();
        ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("btn-link")
            .text("Back to sign in")
            .on_click(move |_| {
                state.router.show_sign_in();
                state.notify_subscribers(UpdateType::AuthTabs);
            })?
            .build()
    };

    let form = ElementBuilder::new("form")?
        .id(ids::REGISTER_FORM)?
        .class("auth-form")
        .class_if(ids::HIDDEN_CLASS, state.router.auth_tab() != AuthTab::SignUp)?
        .child(form_group("ID", text_input(ids::REGISTER_ID, "text", "College ID")?)?)?
        .child(form_group("Full name", text_input(ids::REGISTER_NAME, "text", "Your name")?)?)?
        .child(form_group("Email", text_input(ids::REGISTER_EMAIL, "email", "you@college.edu")?)?)?
        .child(form_group(
            "Password",
            password_input(state, ids::REGISTER_PASSWORD, ids::REGISTER_PASSWORD_TOGGLE, false)?,
        )?)?
        .child(photo_field)?
        .child(
            ElementBuilder::new("button")?
                .attr("type", "submit")?
                .class("btn-primary")
                .text("Sign Up")
                .build(),
        )?
        .child(back_to_sign_in)?
        .build();

    let state = state.clone();
    on_submit(&form, move || {
        let profile = RegistrationProfile {
            id: input_value(ids::REGISTER_ID).trim().to_string(),
            name: input_value(ids::REGISTER_NAME).trim().to_string(),
        };
        let credentials = Credentials::new(&input_value(ids::REGISTER_EMAIL), &input_value(ids::REGISTER_PASSWORD));
        let photo = selected_file(ids::REGISTER_PHOTO);
        let state = state.clone();
        spawn_local(async move {
            let vm = AuthViewModel::new(AuthService::new(), ToastService::new());
            if vm.register(&state, profile, credentials, photo).await {
                for id in [ids::REGISTER_ID, ids::REGISTER_NAME, ids::REGISTER_EMAIL, ids::REGISTER_PASSWORD, ids::REGISTER_PHOTO] {
                    set_input_value(id, "");
                }
            }
        });
    })?;

    Ok(form)
}

fn form_group(label: &str, input: Element) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("form-group")
        .child(text_element("label", "form-label", label)?)?
        .child(input)?
        .build())
}

fn text_input(id: &str, input_type: &str, placeholder: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("input")?
        .id(id)?
        .attr("type", input_type)?
        .attr("placeholder", placeholder)?
        .class("form-input")
        .build())
}

/// Password input plus its Show/Hide toggle
fn password_input(state: &AppState, input_id: &str, toggle_id: &str, login: bool) -> Result<Element, JsValue> {
    let flag = if login {
        state.router.show_login_password.clone()
    } else {
        state.router.show_register_password.clone()
    };
    let visible = *flag.borrow();

    let input = ElementBuilder::new("input")?
        .id(input_id)?
        .attr("type", password_type(visible))?
        .attr("placeholder", "••••••••")?
        .class("form-input")
        .build();

    let toggle = {
        let state = state.clone();
        ElementBuilder::new("button")?
            .id(toggle_id)?
            .attr("type", "button")?
            .class("password-toggle")
            .text("👁")
            .on_click(move |_| {
                RouterState::toggle_password(&flag);
                state.notify_subscribers(UpdateType::AuthTabs);
            })?
            .build()
    };

    Ok(ElementBuilder::new("div")?
        .class("password-wrapper")
        .child(input)?
        .child(toggle)?
        .build())
}
