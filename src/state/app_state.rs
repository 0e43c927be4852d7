// ============================================================================
// APP STATE - Application-wide state
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::state::{RouterState, SessionContext, SessionState};

/// What a state change asks the app to redraw
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateType {
    /// Screen or panel changed: rebuild everything under #app
    FullRender,
    /// Only classes on the auth screen changed (tabs, photo field)
    AuthTabs,
}

#[derive(Clone)]
pub struct AppState {
    pub session: SessionState,
    pub router: RouterState,

    change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn(UpdateType)>>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: SessionState::new(),
            router: RouterState::new(),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Login succeeded: keep the session and enter the dashboard of its role
    pub fn start_session(&self, context: SessionContext) {
        let role = context.role();
        self.session.start(context);
        self.router.enter_dashboard(role);
        self.notify_subscribers(UpdateType::FullRender);
    }

    /// Logout: drop the session and go back to the sign-in tab
    pub fn end_session(&self) {
        self.session.clear();
        self.router.leave_dashboard();
        self.notify_subscribers(UpdateType::FullRender);
    }

    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn(UpdateType) + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn notify_subscribers(&self, update_type: UpdateType) {
        // Clone out first: a subscriber may re-render and subscribe again
        let subscribers: Vec<_> = self.change_subscribers.borrow().iter().cloned().collect();
        for callback in subscribers {
            callback(update_type);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
