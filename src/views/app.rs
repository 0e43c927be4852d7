// ============================================================================
// APP VIEW - Screen dispatch
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{text_element, ElementBuilder};
use crate::state::{AppState, DashboardPanel, Screen};
use crate::viewmodels::SidebarModel;
use crate::views::{render_auth, render_process_panel, render_sidebar, render_student_panel, render_students_panel};

pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    match (state.router.screen(), state.session.get()) {
        (Screen::Dashboard { panel, .. }, Some(session)) => {
            let content = match panel {
                DashboardPanel::FacultyProcess => render_process_panel(&session)?,
                DashboardPanel::FacultyStudents => render_students_panel(&session)?,
                DashboardPanel::StudentOverview => render_student_panel(&session)?,
            };

            let main = ElementBuilder::new("main")?
                .class("dashboard-content")
                .child(content)?
                .child(text_element("footer", "footer", &CONFIG.ui_config.footer_text)?)?
                .build();

            Ok(ElementBuilder::new("div")?
                .class("dashboard")
                .child(render_sidebar(state, &SidebarModel::new(&session, panel))?)?
                .child(main)?
                .build())
        }
        (Screen::Dashboard { .. }, None) => {
            log::warn!("⚠️ [APP] Dashboard without a session, showing sign in");
            state.router.leave_dashboard();
            render_auth(state)
        }
        (Screen::Auth, _) => render_auth(state),
    }
}
