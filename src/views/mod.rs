// ============================================================================
// VIEWS - Render functions: view-model structs in, DOM out
// ============================================================================

pub mod app;
pub mod auth;
pub mod sidebar;
pub mod faculty;
pub mod student;

pub use app::render_app;
pub use auth::{apply_auth_state, render_auth};
pub use sidebar::render_sidebar;
pub use faculty::{render_process_panel, render_students_panel};
pub use student::render_student_panel;
