use crate::models::auth::Role;
use crate::state::{DashboardPanel, SessionContext};

#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub panel: DashboardPanel,
    pub active: bool,
}

/// Avatar, greeting and navigation of the dashboard sidebar
#[derive(Clone, Debug, PartialEq)]
pub struct SidebarModel {
    pub initial: String,
    pub name: String,
    pub role_label: &'static str,
    pub nav: Vec<NavItem>,
}

impl SidebarModel {
    pub fn new(session: &SessionContext, active: DashboardPanel) -> Self {
        let user = session.user();
        let nav = match user.role {
            Role::Faculty => vec![
                NavItem { label: "Process Attendance", panel: DashboardPanel::FacultyProcess, active: false },
                NavItem { label: "Registered Students", panel: DashboardPanel::FacultyStudents, active: false },
            ],
            Role::Student => vec![
                NavItem { label: "My Attendance", panel: DashboardPanel::StudentOverview, active: false },
            ],
        }
        .into_iter()
        .map(|item| NavItem { active: item.panel == active, ..item })
        .collect();

        Self {
            initial: user.initial(),
            name: user.name.clone(),
            role_label: match user.role {
                Role::Faculty => "Faculty",
                Role::Student => "Student",
            },
            nav,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::UserProfile;

    fn session(name: &str, role: Role) -> SessionContext {
        SessionContext::new(None, UserProfile { id: "1".into(), name: name.into(), role })
    }

    #[test]
    fn faculty_gets_two_panels() {
        let model = SidebarModel::new(&session("prof. rao", Role::Faculty), DashboardPanel::FacultyStudents);
        assert_eq!(model.initial, "P");
        assert_eq!(model.role_label, "Faculty");
        let active: Vec<_> = model.nav.iter().map(|n| n.active).collect();
        assert_eq!(active, vec![false, true]);
    }

    #[test]
    fn student_gets_overview_only() {
        let model = SidebarModel::new(&session("Asha", Role::Student), DashboardPanel::StudentOverview);
        assert_eq!(model.nav.len(), 1);
        assert!(model.nav[0].active);
    }
}
