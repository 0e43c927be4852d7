// ============================================================================
// AUTH VIEWMODEL - Register / login / logout
// ============================================================================
// Every failure collapses into one generic toast; the detail only goes to
// the log. No retries and no in-flight guard: a double click sends twice.
// ============================================================================

use crate::config::CONFIG;
use crate::models::auth::{Credentials, LoginRequest, RegisterRequest, RegistrationProfile, Role};
use crate::services::{AuthApi, Notifier};
use crate::state::{AppState, SessionContext};

pub struct AuthViewModel<A, N> {
    api: A,
    notifier: N,
}

impl<A: AuthApi, N: Notifier> AuthViewModel<A, N> {
    pub fn new(api: A, notifier: N) -> Self {
        Self { api, notifier }
    }

    /// Create the account; a student who picked a photo gets it enrolled too.
    /// The role comes from the role tab selected on the auth screen.
    ///
    /// The photo upload is checked like any other call: a non-2xx answer from
    /// the enrollment endpoint counts as a failed registration, even though the
    /// account itself was created.
    pub async fn register(
        &self,
        state: &AppState,
        profile: RegistrationProfile,
        credentials: Credentials,
        photo: Option<A::Photo>,
    ) -> bool {
        if !credentials.is_complete() {
            self.notifier.error("Email & Password required");
            return false;
        }

        let role = state.router.role_tab();
        let request = RegisterRequest::new(&profile, &credentials, role);

        if let Err(e) = self.api.register(&request).await {
            log::warn!("❌ [REGISTER] {} failed: {}", credentials.email, e);
            self.notifier.error("❌ Registration failed");
            return false;
        }
        self.notifier.success("✅ Registered successfully");

        if role == Role::Student {
            if let Some(photo) = photo.as_ref() {
                if let Err(e) = self.api.upload_photo(photo, &credentials.email).await {
                    log::warn!("❌ [REGISTER] Photo upload for {} failed: {}", credentials.email, e);
                    self.notifier.error("❌ Registration failed");
                    return false;
                }
                self.notifier.success("📸 Face registered successfully");
            }
        }

        state.router.show_sign_in();
        state.notify_subscribers(crate::state::UpdateType::AuthTabs);
        true
    }

    /// Sign in; on success the session starts and the dashboard opens
    pub async fn login(&self, state: &AppState, credentials: Credentials) -> bool {
        if !credentials.is_complete() {
            self.notifier.error("Enter credentials");
            return false;
        }

        let role = state.router.role_tab();
        let request = LoginRequest {
            email: credentials.email.clone(),
            password: credentials.password.clone(),
            role,
        };

        match self.api.login(&request).await {
            Ok(response) => {
                let context = SessionContext::from_login(&response, &credentials.email, role);
                if context.token().is_some() && !CONFIG.attach_session_token {
                    log::warn!("⚠️ [LOGIN] Session token captured but not sent on later requests (ATTACH_SESSION_TOKEN=false)");
                }
                state.start_session(context);
                self.notifier.success("✅ Login successful");
                true
            }
            Err(e) => {
                log::warn!("❌ [LOGIN] {} failed: {}", credentials.email, e);
                self.notifier.error("❌ Login failed");
                false
            }
        }
    }

    pub fn logout(&self, state: &AppState) {
        state.end_session();
        self.notifier.info("Logged out successfully");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewmodels::test_support::{FakeAuth, RecordingNotifier};
    use crate::services::ToastKind;
    use crate::state::{AuthTab, DashboardPanel, Screen};

    fn profile() -> RegistrationProfile {
        RegistrationProfile { id: "16010122".into(), name: "Asha Patil".into() }
    }

    fn creds() -> Credentials {
        Credentials::new("asha@kjsit.edu", "pw")
    }

    #[tokio::test]
    async fn student_without_photo_skips_upload() {
        let state = AppState::new();
        let api = FakeAuth::default();
        let notifier = RecordingNotifier::default();
        let vm = AuthViewModel::new(api.clone(), notifier.clone());

        assert!(vm.register(&state, profile(), creds(), None).await);
        assert_eq!(api.calls(), vec!["register"]);
        assert_eq!(notifier.messages(), vec!["✅ Registered successfully"]);
    }

    #[tokio::test]
    async fn student_with_photo_uploads_it() {
        let state = AppState::new();
        state.router.show_sign_up();
        let api = FakeAuth::default();
        let notifier = RecordingNotifier::default();
        let vm = AuthViewModel::new(api.clone(), notifier.clone());

        assert!(vm.register(&state, profile(), creds(), Some("face.jpg".into())).await);
        assert_eq!(api.calls(), vec!["register", "upload_photo:face.jpg:asha@kjsit.edu"]);
        assert_eq!(
            notifier.messages(),
            vec!["✅ Registered successfully", "📸 Face registered successfully"]
        );
        assert_eq!(state.router.auth_tab(), AuthTab::SignIn);
    }

    #[tokio::test]
    async fn rejected_photo_fails_registration() {
        let state = AppState::new();
        state.router.show_sign_up();
        let api = FakeAuth::rejecting_upload(400);
        let notifier = RecordingNotifier::default();
        let vm = AuthViewModel::new(api.clone(), notifier.clone());

        assert!(!vm.register(&state, profile(), creds(), Some("face.jpg".into())).await);
        assert_eq!(api.calls(), vec!["register", "upload_photo:face.jpg:asha@kjsit.edu"]);
        assert_eq!(
            notifier.messages(),
            vec!["✅ Registered successfully", "❌ Registration failed"]
        );
        assert_eq!(state.router.auth_tab(), AuthTab::SignUp);
    }

    #[tokio::test]
    async fn faculty_never_uploads_photo() {
        let state = AppState::new();
        state.router.select_role(Role::Faculty);
        let api = FakeAuth::default();
        let vm = AuthViewModel::new(api.clone(), RecordingNotifier::default());

        assert!(vm.register(&state, profile(), creds(), Some("face.jpg".into())).await);
        assert_eq!(api.calls(), vec!["register"]);
        assert_eq!(api.last_register_role(), Some(Role::Faculty));
    }

    #[tokio::test]
    async fn register_failure_is_generic_and_skips_upload() {
        let state = AppState::new();
        state.router.show_sign_up();
        let api = FakeAuth::failing();
        let notifier = RecordingNotifier::default();
        let vm = AuthViewModel::new(api.clone(), notifier.clone());

        assert!(!vm.register(&state, profile(), creds(), Some("face.jpg".into())).await);
        assert_eq!(api.calls(), vec!["register"]);
        assert_eq!(notifier.last(), Some(("❌ Registration failed".to_string(), ToastKind::Error)));
        assert_eq!(state.router.auth_tab(), AuthTab::SignUp);
    }

    #[tokio::test]
    async fn register_requires_email_and_password() {
        let state = AppState::new();
        let api = FakeAuth::default();
        let notifier = RecordingNotifier::default();
        let vm = AuthViewModel::new(api.clone(), notifier.clone());

        assert!(!vm.register(&state, profile(), Credentials::new("  ", "pw"), None).await);
        assert!(api.calls().is_empty());
        assert_eq!(notifier.messages(), vec!["Email & Password required"]);
    }

    #[tokio::test]
    async fn login_failure_leaves_session_unset() {
        let state = AppState::new();
        let api = FakeAuth::failing();
        let notifier = RecordingNotifier::default();
        let vm = AuthViewModel::new(api, notifier.clone());

        assert!(!vm.login(&state, creds()).await);
        assert!(!state.session.is_active());
        assert_eq!(state.router.screen(), Screen::Auth);
        assert_eq!(notifier.last(), Some(("❌ Login failed".to_string(), ToastKind::Error)));
    }

    #[tokio::test]
    async fn login_success_opens_role_dashboard() {
        let state = AppState::new();
        let api = FakeAuth::with_login(r#"{"token":"jwt","id":9,"name":"Prof. Rao","role":"FACULTY"}"#);
        let vm = AuthViewModel::new(api, RecordingNotifier::default());

        assert!(vm.login(&state, creds()).await);
        let session = state.session.get().unwrap();
        assert_eq!(session.user().id, "9");
        assert_eq!(session.token(), Some("jwt"));
        assert_eq!(
            state.router.screen(),
            Screen::Dashboard { role: Role::Faculty, panel: DashboardPanel::FacultyProcess }
        );
    }

    #[tokio::test]
    async fn login_without_role_uses_selected_tab() {
        let state = AppState::new();
        state.router.select_role(Role::Faculty);
        let api = FakeAuth::with_login(r#"{"token":"jwt"}"#);
        let vm = AuthViewModel::new(api.clone(), RecordingNotifier::default());

        assert!(vm.login(&state, creds()).await);
        let session = state.session.get().unwrap();
        assert_eq!(session.user().name, "User");
        assert_eq!(session.user().id, "asha@kjsit.edu");
        assert_eq!(session.role(), Role::Faculty);
        assert_eq!(api.last_login_role(), Some(Role::Faculty));
    }

    #[tokio::test]
    async fn login_requires_credentials() {
        let state = AppState::new();
        let api = FakeAuth::default();
        let notifier = RecordingNotifier::default();
        let vm = AuthViewModel::new(api.clone(), notifier.clone());

        assert!(!vm.login(&state, Credentials::new("asha@kjsit.edu", "")).await);
        assert!(api.calls().is_empty());
        assert_eq!(notifier.messages(), vec!["Enter credentials"]);
    }

    #[tokio::test]
    async fn logout_clears_session_and_shows_sign_in() {
        let state = AppState::new();
        let api = FakeAuth::with_login(r#"{"token":"jwt","id":"S-1","name":"Asha","role":"STUDENT"}"#);
        let notifier = RecordingNotifier::default();
        let vm = AuthViewModel::new(api, notifier.clone());
        assert!(vm.login(&state, creds()).await);

        vm.logout(&state);
        assert!(!state.session.is_active());
        assert_eq!(state.router.screen(), Screen::Auth);
        assert_eq!(state.router.auth_tab(), AuthTab::SignIn);
        assert_eq!(notifier.last(), Some(("Logged out successfully".to_string(), ToastKind::Info)));
    }
}
