// ============================================================================
// FACULTY VIEWS - Process attendance panel, registered students panel
// ============================================================================
// Async results land in placeholders by id; if the user already left the
// panel the placeholder is gone and the result is dropped.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{
    append_child, clear_children, get_element_by_id, input_value, selected_file, text_element,
    toggle_class, ElementBuilder,
};
use crate::models::attendance::DailySummary;
use crate::services::{AuthService, RecognitionService, ToastService};
use crate::state::SessionContext;
use crate::utils::constants as ids;
use crate::viewmodels::{FacultyResult, FacultyViewModel, RosterRow, RosterTable};

type BrowserFacultyViewModel = FacultyViewModel<AuthService, RecognitionService, ToastService>;

fn faculty_viewmodel(session: &SessionContext) -> BrowserFacultyViewModel {
    FacultyViewModel::new(
        AuthService::for_session(Some(session)),
        RecognitionService::for_session(Some(session)),
        ToastService::new(),
    )
}

pub fn render_process_panel(session: &SessionContext) -> Result<Element, JsValue> {
    let summary_card = ElementBuilder::new("div")?
        .id(ids::SUMMARY_CARD)?
        .class("card summary-card hidden")
        .build();

    let faculty_id = ElementBuilder::new("input")?
        .id(ids::FACULTY_ID)?
        .attr("type", "text")?
        .attr("value", &session.user().id)?
        .attr("readonly", "true")?
        .class("form-input")
        .build();

    let process_button = {
        let session = session.clone();
        ElementBuilder::new("button")?
            .class("btn-primary")
            .text("Process Attendance")
            .on_click(move |_| {
                let photo = selected_file(ids::CLASS_PHOTO);
                let label = input_value(ids::SESSION_LABEL);
                let session = session.clone();
                spawn_local(async move {
                    let vm = faculty_viewmodel(&session);
                    if let Some(result) = vm.process_attendance(photo, &label, &session.user().id).await {
                        if let Err(e) = show_result(&result) {
                            log::error!("❌ [FACULTY] Result render failed: {:?}", e);
                        }
                    }
                });
            })?
            .build()
    };

    let form = ElementBuilder::new("div")?
        .class("card process-card")
        .child(text_element("h3", "card-title", "Process Attendance")?)?
        .child(labeled("Lecture name", ElementBuilder::new("input")?
            .id(ids::SESSION_LABEL)?
            .attr("type", "text")?
            .attr("placeholder", &CONFIG.ui_config.default_lecture_name)?
            .class("form-input")
            .build())?)?
        .child(labeled("Faculty ID", faculty_id)?)?
        .child(labeled("Classroom photo", ElementBuilder::new("input")?
            .id(ids::CLASS_PHOTO)?
            .attr("type", "file")?
            .attr("accept", "image/*")?
            .class("form-input")
            .build())?)?
        .child(text_element("p", "form-hint", &CONFIG.ui_config.photo_hint)?)?
        .child(process_button)?
        .build();

    let result_card = ElementBuilder::new("div")?
        .id(ids::RESULT_CARD)?
        .class("card result-card hidden")
        .build();

    {
        let session = session.clone();
        spawn_local(async move {
            if let Some(summary) = faculty_viewmodel(&session).daily_summary().await {
                if let Err(e) = show_summary(&summary) {
                    log::warn!("⚠️ [FACULTY] Summary render failed: {:?}", e);
                }
            }
        });
    }

    Ok(ElementBuilder::new("section")?
        .class("panel")
        .child(text_element("h2", "panel-title", "Process Attendance")?)?
        .child(summary_card)?
        .child(form)?
        .child(result_card)?
        .build())
}

pub fn render_students_panel(session: &SessionContext) -> Result<Element, JsValue> {
    let header_row = ElementBuilder::new("tr")?
        .children(
            RosterTable::HEADERS
                .iter()
                .map(|h| text_element("th", "", h))
                .collect::<Result<Vec<_>, _>>()?,
        )?
        .build();

    let table = ElementBuilder::new("table")?
        .class("data-table")
        .child(ElementBuilder::new("thead")?.child(header_row)?.build())?
        .child(ElementBuilder::new("tbody")?.id(ids::STUDENTS_BODY)?.build())?
        .build();

    {
        let session = session.clone();
        spawn_local(async move {
            if let Some(roster) = faculty_viewmodel(&session).load_roster().await {
                if let Err(e) = fill_roster(&roster) {
                    log::error!("❌ [FACULTY] Roster render failed: {:?}", e);
                }
            }
        });
    }

    Ok(ElementBuilder::new("section")?
        .class("panel")
        .child(text_element("h2", "panel-title", "Registered Students")?)?
        .child(ElementBuilder::new("div")?.class("card").child(table)?.build())?
        .build())
}

fn labeled(label: &str, input: Element) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("form-group")
        .child(text_element("label", "form-label", label)?)?
        .child(input)?
        .build())
}

fn show_summary(summary: &DailySummary) -> Result<(), JsValue> {
    let Some(card) = get_element_by_id(ids::SUMMARY_CARD) else {
        return Ok(());
    };
    clear_children(&card);
    let date = if summary.date.is_empty() {
        chrono::Local::now().format("%Y-%m-%d").to_string()
    } else {
        summary.date.clone()
    };
    let title = format!("Today ({})", date);
    append_child(&card, &text_element("h3", "card-title", &title)?)?;
    append_child(&card, &text_element("p", "stat present", &format!("Present: {}", summary.present))?)?;
    append_child(&card, &text_element("p", "stat absent", &format!("Absent: {}", summary.absent))?)?;
    append_child(&card, &text_element("p", "stat total", &format!("Total: {}", summary.total))?)?;
    toggle_class(&card, ids::HIDDEN_CLASS, false)
}

fn show_result(result: &FacultyResult) -> Result<(), JsValue> {
    let Some(card) = get_element_by_id(ids::RESULT_CARD) else {
        return Ok(());
    };
    clear_children(&card);
    append_child(&card, &text_element("h3", "card-title", &result.session_label)?)?;
    append_child(&card, &text_element("p", "stat present", &result.present_line())?)?;
    append_child(&card, &text_element("p", "stat absent", &result.absent_line())?)?;
    for line in [result.names_line(), result.unknown_line()].into_iter().flatten() {
        append_child(&card, &text_element("p", "stat-detail", &line)?)?;
    }
    toggle_class(&card, ids::HIDDEN_CLASS, false)
}

fn fill_roster(roster: &RosterTable) -> Result<(), JsValue> {
    let Some(body) = get_element_by_id(ids::STUDENTS_BODY) else {
        return Ok(());
    };
    clear_children(&body);
    for row in &roster.rows {
        append_child(&body, &render_roster_row(row)?)?;
    }
    Ok(())
}

fn render_roster_row(row: &RosterRow) -> Result<Element, JsValue> {
    let cells = match row {
        RosterRow::Student { number, name, email, student_id } => vec![
            text_element("td", "", &number.to_string())?,
            text_element("td", "", name)?,
            text_element("td", "", email)?,
            text_element("td", "", student_id)?,
        ],
        RosterRow::Placeholder(text) => vec![ElementBuilder::new("td")?
            .attr("colspan", "4")?
            .class("empty-row")
            .text(text)
            .build()],
    };
    Ok(ElementBuilder::new("tr")?.children(cells)?.build())
}
