// ============================================================================
// STUDENT VIEW - Percentage, donut chart, attendance history
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{append_child, clear_children, get_element_by_id, text_element, ElementBuilder};
use crate::services::RecognitionService;
use crate::state::SessionContext;
use crate::utils::chart_ffi;
use crate::utils::constants as ids;
use crate::viewmodels::student_viewmodel::PERCENT_PLACEHOLDER;
use crate::viewmodels::{AttendanceOverview, AttendanceRow, StudentViewModel};

pub fn render_student_panel(session: &SessionContext) -> Result<Element, JsValue> {
    let user = session.user();

    let percent_card = ElementBuilder::new("div")?
        .class("card percent-card")
        .child(text_element("h3", "card-title", "Overall Attendance")?)?
        .child(ElementBuilder::new("div")?
            .id(ids::ATTENDANCE_PERCENT)?
            .class("percent-value")
            .text(PERCENT_PLACEHOLDER)
            .build())?
        .build();

    let chart_card = ElementBuilder::new("div")?
        .class("card chart-card")
        .child(ElementBuilder::new("canvas")?.id(ids::ATTENDANCE_CHART)?.build())?
        .build();

    let header_row = ElementBuilder::new("tr")?
        .child(text_element("th", "", "Date")?)?
        .child(text_element("th", "", "Subject")?)?
        .child(text_element("th", "", "Status")?)?
        .build();
    let table = ElementBuilder::new("table")?
        .class("data-table")
        .child(ElementBuilder::new("thead")?.child(header_row)?.build())?
        .child(ElementBuilder::new("tbody")?.id(ids::ATTENDANCE_BODY)?.build())?
        .build();

    {
        let session = session.clone();
        spawn_local(async move {
            let vm = StudentViewModel::new(RecognitionService::for_session(Some(&session)));
            let overview = vm.load_attendance(&session.user().id).await;
            if let Err(e) = show_overview(&overview) {
                log::error!("❌ [STUDENT] Overview render failed: {:?}", e);
            }
        });
    }

    Ok(ElementBuilder::new("section")?
        .class("panel")
        .child(text_element("h2", "panel-title", &format!("Welcome, {}", user.name))?)?
        .child(ElementBuilder::new("div")?
            .class("stats-row")
            .child(percent_card)?
            .child(chart_card)?
            .build())?
        .child(ElementBuilder::new("div")?.class("card").child(table)?.build())?
        .build())
}

fn show_overview(overview: &AttendanceOverview) -> Result<(), JsValue> {
    let Some(body) = get_element_by_id(ids::ATTENDANCE_BODY) else {
        return Ok(());
    };

    if let Some(percent) = get_element_by_id(ids::ATTENDANCE_PERCENT) {
        percent.set_text_content(Some(&overview.percent_text()));
    }
    if let Some(donut) = overview.donut() {
        chart_ffi::draw_donut(ids::ATTENDANCE_CHART, &donut);
    }

    clear_children(&body);
    if let Some(text) = overview.empty_text() {
        let cell = ElementBuilder::new("td")?
            .attr("colspan", "3")?
            .class("empty-row")
            .text(text)
            .build();
        append_child(&body, &ElementBuilder::new("tr")?.child(cell)?.build())?;
        return Ok(());
    }

    for row in overview.rows() {
        append_child(&body, &render_attendance_row(row)?)?;
    }
    Ok(())
}

fn render_attendance_row(row: &AttendanceRow) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("tr")?
        .child(text_element("td", "", &row.date)?)?
        .child(text_element("td", "", &row.subject)?)?
        .child(ElementBuilder::new("td")?
            .child(text_element("span", row.status_class(), &row.status)?)?
            .build())?
        .build())
}
