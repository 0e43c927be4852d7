// ============================================================================
// CHART FFI - Chart.js glue defined in index.html
// ============================================================================
// Wrappers only. The JS side keeps the single live chart instance.
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::viewmodels::DonutData;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = renderAttendanceChart)]
    fn render_attendance_chart(canvas_id: &str, chart_json: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_name = destroyAttendanceChart)]
    fn destroy_attendance_chart() -> Result<(), JsValue>;
}

/// JSON payload read by `renderAttendanceChart`
pub fn donut_json(data: &DonutData) -> String {
    serde_json::json!({
        "labels": data.labels,
        "values": data.values,
        "colors": data.colors,
    })
    .to_string()
}

/// Replace whatever chart was drawn before with this donut
pub fn draw_donut(canvas_id: &str, data: &DonutData) {
    destroy_chart();
    if let Err(e) = render_attendance_chart(canvas_id, &donut_json(data)) {
        log::warn!("⚠️ [CHART] Could not draw attendance chart: {:?}", e);
    }
}

pub fn destroy_chart() {
    if let Err(e) = destroy_attendance_chart() {
        log::debug!("[CHART] Nothing to destroy: {:?}", e);
    }
}
