// ============================================================================
// ROUTER STATE - Auth screen <-> dashboard, and the panel inside the dashboard
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::auth::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthTab {
    SignIn,
    SignUp,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardPanel {
    FacultyProcess,
    FacultyStudents,
    StudentOverview,
}

impl DashboardPanel {
    /// Panel shown when the dashboard is entered
    pub fn default_for(role: Role) -> Self {
        match role {
            Role::Faculty => DashboardPanel::FacultyProcess,
            Role::Student => DashboardPanel::StudentOverview,
        }
    }

    pub fn allowed_for(&self, role: Role) -> bool {
        match self {
            DashboardPanel::FacultyProcess | DashboardPanel::FacultyStudents => role == Role::Faculty,
            DashboardPanel::StudentOverview => role == Role::Student,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Auth,
    Dashboard { role: Role, panel: DashboardPanel },
}

/// Navigation state
#[derive(Clone)]
pub struct RouterState {
    screen: Rc<RefCell<Screen>>,
    auth_tab: Rc<RefCell<AuthTab>>,
    role_tab: Rc<RefCell<Role>>,
    pub show_login_password: Rc<RefCell<bool>>,
    pub show_register_password: Rc<RefCell<bool>>,
}

impl RouterState {
    pub fn new() -> Self {
        Self {
            screen: Rc::new(RefCell::new(Screen::Auth)),
            auth_tab: Rc::new(RefCell::new(AuthTab::SignIn)),
            role_tab: Rc::new(RefCell::new(Role::Student)),
            show_login_password: Rc::new(RefCell::new(false)),
            show_register_password: Rc::new(RefCell::new(false)),
        }
    }

    pub fn screen(&self) -> Screen {
        *self.screen.borrow()
    }

    pub fn auth_tab(&self) -> AuthTab {
        *self.auth_tab.borrow()
    }

    pub fn role_tab(&self) -> Role {
        *self.role_tab.borrow()
    }

    pub fn is_dashboard(&self) -> bool {
        matches!(self.screen(), Screen::Dashboard { .. })
    }

    pub fn show_sign_in(&self) {
        *self.auth_tab.borrow_mut() = AuthTab::SignIn;
    }

    pub fn show_sign_up(&self) {
        *self.auth_tab.borrow_mut() = AuthTab::SignUp;
    }

    pub fn select_role(&self, role: Role) {
        *self.role_tab.borrow_mut() = role;
    }

    /// Only students enroll a face photo at sign up
    pub fn photo_field_visible(&self) -> bool {
        self.role_tab() == Role::Student
    }

    /// Flip a password field between hidden and plain text; returns the new visibility
    pub fn toggle_password(flag: &Rc<RefCell<bool>>) -> bool {
        let mut visible = flag.borrow_mut();
        *visible = !*visible;
        *visible
    }

    /// auth -> dashboard. The panel is chosen once, from the session role.
    pub fn enter_dashboard(&self, role: Role) {
        *self.screen.borrow_mut() = Screen::Dashboard {
            role,
            panel: DashboardPanel::default_for(role),
        };
    }

    /// Switch panel inside the dashboard; ignored for panels of the other role
    pub fn show_panel(&self, panel: DashboardPanel) -> bool {
        let mut screen = self.screen.borrow_mut();
        match *screen {
            Screen::Dashboard { role, .. } if panel.allowed_for(role) => {
                *screen = Screen::Dashboard { role, panel };
                true
            }
            _ => {
                log::warn!("⚠️ [ROUTER] Panel {:?} not available on {:?}", panel, *screen);
                false
            }
        }
    }

    /// dashboard -> auth, back on the sign-in tab
    pub fn leave_dashboard(&self) {
        *self.screen.borrow_mut() = Screen::Auth;
        *self.auth_tab.borrow_mut() = AuthTab::SignIn;
        *self.show_login_password.borrow_mut() = false;
        *self.show_register_password.borrow_mut() = false;
    }
}

impl Default for RouterState {
    fn default() -> Self {
        Self::new()
    }
}
