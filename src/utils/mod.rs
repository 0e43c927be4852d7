// Shared utilities

pub mod constants;
pub mod chart_ffi;

pub use constants::*;
