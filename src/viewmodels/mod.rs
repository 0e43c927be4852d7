pub mod auth_viewmodel;
pub mod faculty_viewmodel;
pub mod student_viewmodel;
pub mod sidebar_viewmodel;

#[cfg(test)]
pub mod test_support;

pub use auth_viewmodel::AuthViewModel;
pub use faculty_viewmodel::{FacultyResult, FacultyViewModel, RosterRow, RosterTable};
pub use student_viewmodel::{AttendanceOverview, AttendanceRow, DonutData, StudentViewModel};
pub use sidebar_viewmodel::{NavItem, SidebarModel};
