// ============================================================================
// STATE MODULE - Rc<RefCell> state + change notifications
// ============================================================================

pub mod session_state;
pub mod router_state;
pub mod app_state;

pub use session_state::*;
pub use router_state::*;
pub use app_state::*;
