// ============================================================================
// NOPROXY ATTENDANCE - BROWSER CLIENT (MVVM, PURE RUST)
// ============================================================================
// - Views: render functions, view-model structs in, DOM out
// - ViewModels: user action -> service call -> outcome
// - Services: HTTP to the auth and recognition services, toasts
// - State: session context + view router in Rc<RefCell>
// - Models: wire types shared with both backends
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod viewmodels;
pub mod state;
pub mod dom;
pub mod views;
pub mod utils;
pub mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use crate::app::App;
use crate::config::CONFIG;
use crate::services::{AuthApi, AuthService, RecognitionApi, RecognitionService};
use crate::state::UpdateType;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("🚀 NoProxy attendance client");
    log::info!(
        "🔧 [CONFIG] auth={} recognition={}",
        CONFIG.auth_service_url,
        CONFIG.recognition_service_url
    );

    let mut app = App::new()?;
    app.render()?;
    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    check_backends();
    Ok(())
}

/// Log whether both services answer; never blocks the UI
fn check_backends() {
    spawn_local(async {
        match AuthService::new().ping().await {
            Ok(ping) => log::info!("✅ [PING] Auth service: {}", ping.status.unwrap_or_else(|| "ok".into())),
            Err(e) => log::warn!("⚠️ [PING] Auth service unreachable: {}", e),
        }
    });
    spawn_local(async {
        match RecognitionService::new().ping().await {
            Ok(ping) => log::info!("✅ [PING] Recognition service: {}", ping.status.unwrap_or_else(|| "ok".into())),
            Err(e) => log::warn!("⚠️ [PING] Recognition service unreachable: {}", e),
        }
    });
}

pub fn rerender_app() {
    rerender_app_with_type(UpdateType::FullRender);
}

pub fn rerender_app_with_type(update_type: UpdateType) {
    APP.with(|cell| match cell.borrow_mut().as_mut() {
        Some(app) => {
            if let Err(e) = app.update(update_type) {
                log::error!("❌ [RERENDER] {:?} failed: {:?}", update_type, e);
            }
        }
        None => log::warn!("⚠️ [RERENDER] App not initialized"),
    });
}

/// Callable from JavaScript
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}
