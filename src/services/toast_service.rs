// ============================================================================
// TOAST SERVICE - Transient notifications
// ============================================================================
// Toasts live in #toastContainer, outside the #app root, so a full re-render
// never wipes a toast that is still fading out.
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use crate::config::CONFIG;
use crate::dom::{append_child, create_element, document, get_element_by_id, set_attribute};

const TOAST_CONTAINER_ID: &str = "toastContainer";
const FADE_OUT_LEAD_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn color(&self) -> &'static str {
        match self {
            ToastKind::Error => "#ef4444",
            ToastKind::Success => "#22c55e",
            ToastKind::Info => "#3b82f6",
        }
    }
}

/// Seam between viewmodels and the toast DOM
pub trait Notifier {
    fn notify(&self, message: &str, kind: ToastKind);

    fn info(&self, message: &str) {
        self.notify(message, ToastKind::Info);
    }

    fn success(&self, message: &str) {
        self.notify(message, ToastKind::Success);
    }

    fn error(&self, message: &str) {
        self.notify(message, ToastKind::Error);
    }
}

#[derive(Clone)]
pub struct ToastService {
    duration_ms: u32,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            duration_ms: CONFIG.toast_duration_ms,
        }
    }

    fn show(&self, message: &str, kind: ToastKind) -> Result<(), JsValue> {
        let container = toast_container()?;

        let toast = create_element("div")?;
        toast.set_class_name("toast");
        set_attribute(&toast, "style", &format!("background: {}", kind.color()))?;
        toast.set_text_content(Some(message));
        append_child(&container, &toast)?;

        let fading = toast.clone();
        Timeout::new(self.duration_ms.saturating_sub(FADE_OUT_LEAD_MS), move || {
            let _ = set_attribute(
                &fading,
                "style",
                &format!("background: {}; opacity: 0", kind.color()),
            );
        })
        .forget();

        Timeout::new(self.duration_ms, move || toast.remove()).forget();
        Ok(())
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastService {
    fn notify(&self, message: &str, kind: ToastKind) {
        if let Err(e) = self.show(message, kind) {
            log::warn!("⚠️ [TOAST] Could not show '{}': {:?}", message, e);
        }
    }
}

fn toast_container() -> Result<web_sys::Element, JsValue> {
    if let Some(container) = get_element_by_id(TOAST_CONTAINER_ID) {
        return Ok(container);
    }

    let body = document()
        .and_then(|d| d.body())
        .ok_or_else(|| JsValue::from_str("No document body"))?;
    let container = create_element("div")?;
    set_attribute(&container, "id", TOAST_CONTAINER_ID)?;
    container.set_class_name("toast-container");
    body.append_child(&container)?;
    Ok(container)
}
