pub mod auth;
pub mod attendance;
pub mod student;

pub use auth::{Credentials, LoginRequest, LoginResponse, RegisterRequest, RegistrationProfile, Role, UserProfile};
pub use attendance::{AttendanceRecord, AttendanceStatus, DailySummary, RecognitionOutcome};
pub use student::StudentRosterEntry;
