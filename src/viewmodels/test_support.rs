// In-memory backends and a recording notifier for viewmodel tests.

use std::cell::RefCell;
use std::rc::Rc;
use async_trait::async_trait;
use crate::models::attendance::{AttendanceRecord, DailySummary, RecognitionOutcome};
use crate::models::auth::{LoginRequest, LoginResponse, PingResponse, RegisterRequest, Role};
use crate::models::student::{RosterBody, StudentRosterEntry};
use crate::services::{ApiError, AuthApi, Notifier, RecognitionApi, ToastKind};

fn unauthorized() -> ApiError {
    ApiError::Http { status: 401, message: "Invalid email or password.".into() }
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    toasts: Rc<RefCell<Vec<(String, ToastKind)>>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.toasts.borrow().iter().map(|(m, _)| m.clone()).collect()
    }

    pub fn last(&self) -> Option<(String, ToastKind)> {
        self.toasts.borrow().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, kind: ToastKind) {
        self.toasts.borrow_mut().push((message.to_string(), kind));
    }
}

#[derive(Clone, Default)]
pub struct FakeAuth {
    calls: Rc<RefCell<Vec<String>>>,
    fail: bool,
    reject_upload: Option<u16>,
    login_body: Option<String>,
    roster_body: Option<String>,
    register_role: Rc<RefCell<Option<Role>>>,
    login_role: Rc<RefCell<Option<Role>>>,
}

impl FakeAuth {
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    /// Account creation succeeds; the enrollment endpoint answers `status`
    pub fn rejecting_upload(status: u16) -> Self {
        Self { reject_upload: Some(status), ..Self::default() }
    }

    pub fn with_login(json: &str) -> Self {
        Self { login_body: Some(json.to_string()), ..Self::default() }
    }

    pub fn with_roster(json: &str) -> Self {
        Self { roster_body: Some(json.to_string()), ..Self::default() }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn last_register_role(&self) -> Option<Role> {
        *self.register_role.borrow()
    }

    pub fn last_login_role(&self) -> Option<Role> {
        *self.login_role.borrow()
    }

    fn record(&self, call: String) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        if self.fail {
            Err(unauthorized())
        } else {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeAuth {
    type Photo = String;

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        *self.register_role.borrow_mut() = Some(request.role);
        self.record("register".to_string())
    }

    async fn upload_photo(&self, photo: &String, email: &str) -> Result<(), ApiError> {
        self.record(format!("upload_photo:{}:{}", photo, email))?;
        match self.reject_upload {
            Some(status) => Err(ApiError::Http { status, message: "No face detected".into() }),
            None => Ok(()),
        }
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        *self.login_role.borrow_mut() = Some(request.role);
        self.record("login".to_string())?;
        match &self.login_body {
            Some(json) => serde_json::from_str(json).map_err(|e| ApiError::Parse(e.to_string())),
            None => Ok(LoginResponse::default()),
        }
    }

    async fn all_students(&self) -> Result<Vec<StudentRosterEntry>, ApiError> {
        self.record("all_students".to_string())?;
        let json = self.roster_body.as_deref().unwrap_or("[]");
        let body: RosterBody = serde_json::from_str(json).map_err(|e| ApiError::Parse(e.to_string()))?;
        Ok(body.into_students())
    }

    async fn ping(&self) -> Result<PingResponse, ApiError> {
        self.record("ping".to_string())?;
        Ok(PingResponse::default())
    }
}

#[derive(Clone)]
pub struct FakeRecognition {
    calls: Rc<RefCell<Vec<String>>>,
    recognize: Result<RecognitionOutcome, ApiError>,
    attendance: Result<Vec<AttendanceRecord>, ApiError>,
    summary: Result<DailySummary, ApiError>,
}

impl Default for FakeRecognition {
    fn default() -> Self {
        Self {
            calls: Rc::new(RefCell::new(Vec::new())),
            recognize: Ok(RecognitionOutcome::default()),
            attendance: Ok(Vec::new()),
            summary: Ok(DailySummary::default()),
        }
    }
}

impl FakeRecognition {
    pub fn recognizing(outcome: Result<RecognitionOutcome, ApiError>) -> Self {
        Self { recognize: outcome, ..Self::default() }
    }

    pub fn with_attendance(json: &str) -> Self {
        let records = serde_json::from_str::<crate::models::attendance::AttendanceResponse>(json)
            .map(|r| r.attendance)
            .map_err(|e| ApiError::Parse(e.to_string()));
        Self { attendance: records, ..Self::default() }
    }

    pub fn attendance_failing(err: ApiError) -> Self {
        Self { attendance: Err(err), ..Self::default() }
    }

    pub fn with_summary(summary: Result<DailySummary, ApiError>) -> Self {
        Self { summary, ..Self::default() }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl RecognitionApi for FakeRecognition {
    type Photo = String;

    async fn recognize(
        &self,
        photo: &String,
        session_label: &str,
        marked_by: &str,
    ) -> Result<RecognitionOutcome, ApiError> {
        self.calls
            .borrow_mut()
            .push(format!("recognize:{}:{}:{}", photo, session_label, marked_by));
        self.recognize.clone()
    }

    async fn attendance(&self, student_id: &str) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.calls.borrow_mut().push(format!("attendance:{}", student_id));
        self.attendance.clone()
    }

    async fn summary(&self) -> Result<DailySummary, ApiError> {
        self.calls.borrow_mut().push("summary".to_string());
        self.summary.clone()
    }

    async fn ping(&self) -> Result<PingResponse, ApiError> {
        Ok(PingResponse::default())
    }
}
