// ============================================================================
// SESSION STATE - Explicit session context (created at login, dropped at logout)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::auth::{LoginResponse, Role, UserProfile};

/// Who is logged in for the lifetime of the page. Never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionContext {
    token: Option<String>,
    user: UserProfile,
}

impl SessionContext {
    pub fn new(token: Option<String>, user: UserProfile) -> Self {
        Self { token, user }
    }

    pub fn from_login(response: &LoginResponse, email: &str, selected_role: Role) -> Self {
        Self {
            token: response.token.clone().filter(|t| !t.is_empty()),
            user: UserProfile::from_login(response, email, selected_role),
        }
    }

    pub fn user(&self) -> &UserProfile {
        &self.user
    }

    pub fn role(&self) -> Role {
        self.user.role
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Token to send as `Authorization: Bearer`, only when attaching is enabled
    pub fn bearer_token(&self, attach: bool) -> Option<&str> {
        if attach {
            self.token()
        } else {
            None
        }
    }
}

/// Shared holder of the current session
#[derive(Clone, Default)]
pub struct SessionState {
    context: Rc<RefCell<Option<SessionContext>>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self, context: SessionContext) {
        log::info!("✅ [SESSION] Session started for {} ({})", context.user.name, context.user.role);
        *self.context.borrow_mut() = Some(context);
    }

    pub fn clear(&self) {
        if self.context.borrow_mut().take().is_some() {
            log::info!("🗑️ [SESSION] Session cleared");
        }
    }

    pub fn get(&self) -> Option<SessionContext> {
        self.context.borrow().clone()
    }

    pub fn is_active(&self) -> bool {
        self.context.borrow().is_some()
    }
}
