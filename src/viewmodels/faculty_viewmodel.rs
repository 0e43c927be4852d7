// ============================================================================
// FACULTY VIEWMODEL - Classroom photo processing, roster, daily summary
// ============================================================================
// Operations return plain view-model structs; the faculty views only draw them.
// ============================================================================

use crate::config::CONFIG;
use crate::models::attendance::{DailySummary, RecognitionOutcome};
use crate::models::student::StudentRosterEntry;
use crate::services::{AuthApi, Notifier, RecognitionApi};

pub const EMPTY_ROSTER_TEXT: &str = "No registered students yet";

/// One row of the students table
#[derive(Clone, Debug, PartialEq)]
pub enum RosterRow {
    Student {
        number: usize,
        name: String,
        email: String,
        student_id: String,
    },
    Placeholder(String),
}

/// `# | Name | Email | Student ID`
#[derive(Clone, Debug, PartialEq)]
pub struct RosterTable {
    pub rows: Vec<RosterRow>,
}

impl RosterTable {
    pub const HEADERS: [&'static str; 4] = ["#", "Name", "Email", "Student ID"];

    pub fn from_students(students: &[StudentRosterEntry]) -> Self {
        if students.is_empty() {
            return Self {
                rows: vec![RosterRow::Placeholder(EMPTY_ROSTER_TEXT.to_string())],
            };
        }

        let rows = students
            .iter()
            .enumerate()
            .map(|(i, s)| RosterRow::Student {
                number: i + 1,
                name: s.name.clone(),
                email: s.email.clone(),
                student_id: s.id.clone().unwrap_or_else(|| "-".to_string()),
            })
            .collect();
        Self { rows }
    }
}

/// What the result card shows after a photo was processed
#[derive(Clone, Debug, PartialEq)]
pub struct FacultyResult {
    pub session_label: String,
    pub present: u32,
    pub absent: u32,
    pub present_names: Vec<String>,
    pub unknown_faces: usize,
    pub faces_detected: Option<u32>,
}

impl FacultyResult {
    pub fn from_outcome(session_label: &str, outcome: RecognitionOutcome) -> Self {
        Self {
            session_label: session_label.to_string(),
            present: outcome.count_present,
            absent: outcome.count_absent,
            present_names: outcome.present,
            unknown_faces: outcome.unknown.len(),
            faces_detected: outcome.total_faces_detected,
        }
    }

    pub fn present_line(&self) -> String {
        format!("Present: {}", self.present)
    }

    pub fn absent_line(&self) -> String {
        format!("Absent: {}", self.absent)
    }

    /// Recognized names, if the service listed any
    pub fn names_line(&self) -> Option<String> {
        if self.present_names.is_empty() {
            None
        } else {
            Some(format!("Recognized: {}", self.present_names.join(", ")))
        }
    }

    pub fn unknown_line(&self) -> Option<String> {
        match (self.unknown_faces, self.faces_detected) {
            (0, None) => None,
            (unknown, Some(total)) => Some(format!("Unknown faces: {} of {} detected", unknown, total)),
            (unknown, None) => Some(format!("Unknown faces: {}", unknown)),
        }
    }
}

/// Empty label falls back to the configured default lecture name
pub fn session_label_or_default(label: &str) -> String {
    let label = label.trim();
    if label.is_empty() {
        CONFIG.ui_config.default_lecture_name.clone()
    } else {
        label.to_string()
    }
}

pub struct FacultyViewModel<A, R, N> {
    auth: A,
    recognition: R,
    notifier: N,
}

impl<A: AuthApi, R: RecognitionApi, N: Notifier> FacultyViewModel<A, R, N> {
    pub fn new(auth: A, recognition: R, notifier: N) -> Self {
        Self { auth, recognition, notifier }
    }

    pub async fn process_attendance(
        &self,
        photo: Option<R::Photo>,
        session_label: &str,
        faculty_id: &str,
    ) -> Option<FacultyResult> {
        let Some(photo) = photo else {
            self.notifier.error("Please select an image first");
            return None;
        };

        let label = session_label_or_default(session_label);
        match self.recognition.recognize(&photo, &label, faculty_id).await {
            Ok(outcome) => {
                self.notifier.success("✅ Attendance processed successfully");
                Some(FacultyResult::from_outcome(&label, outcome))
            }
            Err(e) => {
                log::error!("❌ [FACULTY] Processing '{}' failed: {}", label, e);
                self.notifier.error("Error processing attendance");
                None
            }
        }
    }

    pub async fn load_roster(&self) -> Option<RosterTable> {
        match self.auth.all_students().await {
            Ok(students) => Some(RosterTable::from_students(&students)),
            Err(e) => {
                log::error!("❌ [FACULTY] Roster fetch failed: {}", e);
                self.notifier.error("Error fetching students");
                None
            }
        }
    }

    /// Today's totals; a failure only hides the card
    pub async fn daily_summary(&self) -> Option<DailySummary> {
        match self.recognition.summary().await {
            Ok(summary) => Some(summary),
            Err(e) => {
                log::debug!("📊 [FACULTY] No daily summary: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{ApiError, ToastKind};
    use crate::viewmodels::test_support::{FakeAuth, FakeRecognition, RecordingNotifier};

    fn entry(name: &str, id: Option<&str>) -> StudentRosterEntry {
        StudentRosterEntry {
            name: name.into(),
            email: format!("{}@kjsit.edu", name.to_lowercase()),
            id: id.map(String::from),
        }
    }

    #[test]
    fn empty_roster_has_one_placeholder_row() {
        let table = RosterTable::from_students(&[]);
        assert_eq!(table.rows, vec![RosterRow::Placeholder(EMPTY_ROSTER_TEXT.to_string())]);
    }

    #[test]
    fn roster_rows_are_numbered_from_one() {
        let table = RosterTable::from_students(&[entry("Asha", Some("16010122")), entry("Ravi", None)]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(
            table.rows[1],
            RosterRow::Student {
                number: 2,
                name: "Ravi".into(),
                email: "ravi@kjsit.edu".into(),
                student_id: "-".into(),
            }
        );
    }

    #[test]
    fn result_lines() {
        let outcome = RecognitionOutcome {
            count_present: 2,
            count_absent: 1,
            present: vec!["Asha".into(), "Ravi".into()],
            unknown: vec!["Unknown".into()],
            total_faces_detected: Some(3),
            ..RecognitionOutcome::default()
        };
        let result = FacultyResult::from_outcome("CS101", outcome);
        assert_eq!(result.present_line(), "Present: 2");
        assert_eq!(result.absent_line(), "Absent: 1");
        assert_eq!(result.names_line().as_deref(), Some("Recognized: Asha, Ravi"));
        assert_eq!(result.unknown_line().as_deref(), Some("Unknown faces: 1 of 3 detected"));
    }

    #[test]
    fn bare_result_has_no_optional_lines() {
        let result = FacultyResult::from_outcome("CS101", RecognitionOutcome::default());
        assert_eq!(result.present_line(), "Present: 0");
        assert!(result.names_line().is_none());
        assert!(result.unknown_line().is_none());
    }

    #[tokio::test]
    async fn no_photo_sends_nothing() {
        let recognition = FakeRecognition::default();
        let notifier = RecordingNotifier::default();
        let vm = FacultyViewModel::new(FakeAuth::default(), recognition.clone(), notifier.clone());

        assert!(vm.process_attendance(None, "CS101", "F-9").await.is_none());
        assert!(recognition.calls().is_empty());
        assert_eq!(notifier.messages(), vec!["Please select an image first"]);
    }

    #[tokio::test]
    async fn empty_label_becomes_default_lecture() {
        let recognition = FakeRecognition::default();
        let vm = FacultyViewModel::new(FakeAuth::default(), recognition.clone(), RecordingNotifier::default());

        let result = vm.process_attendance(Some("class.jpg".into()), "  ", "F-9").await;
        assert_eq!(result.map(|r| r.session_label).as_deref(), Some("Default Lecture"));
        assert_eq!(recognition.calls(), vec!["recognize:class.jpg:Default Lecture:F-9"]);
    }

    #[tokio::test]
    async fn processing_success_reports_counts() {
        let recognition = FakeRecognition::recognizing(Ok(RecognitionOutcome {
            count_present: 18,
            count_absent: 4,
            ..RecognitionOutcome::default()
        }));
        let notifier = RecordingNotifier::default();
        let vm = FacultyViewModel::new(FakeAuth::default(), recognition, notifier.clone());

        let result = vm.process_attendance(Some("class.jpg".into()), "CS101", "F-9").await;
        let result = result.unwrap();
        assert_eq!((result.present, result.absent), (18, 4));
        assert_eq!(
            notifier.last(),
            Some(("✅ Attendance processed successfully".to_string(), ToastKind::Success))
        );
    }

    #[tokio::test]
    async fn backend_error_is_a_generic_toast() {
        let recognition = FakeRecognition::recognizing(Err(ApiError::Backend("No file selected".into())));
        let notifier = RecordingNotifier::default();
        let vm = FacultyViewModel::new(FakeAuth::default(), recognition, notifier.clone());

        assert!(vm.process_attendance(Some("class.jpg".into()), "CS101", "F-9").await.is_none());
        assert_eq!(
            notifier.last(),
            Some(("Error processing attendance".to_string(), ToastKind::Error))
        );
    }

    #[tokio::test]
    async fn message_body_roster_is_empty_table() {
        let auth = FakeAuth::with_roster(r#"{"message":"No students found"}"#);
        let vm = FacultyViewModel::new(auth, FakeRecognition::default(), RecordingNotifier::default());

        let table = vm.load_roster().await.unwrap();
        assert_eq!(table.rows.len(), 1);
        assert!(matches!(table.rows[0], RosterRow::Placeholder(_)));
    }

    #[tokio::test]
    async fn sparse_roster_rows_are_kept() {
        let auth = FakeAuth::with_roster(
            r#"[{"id":1,"name":"Asha","email":"a@x.io"},
                {"id":2,"name":null,"email":"b@x.io"}]"#,
        );
        let vm = FacultyViewModel::new(auth, FakeRecognition::default(), RecordingNotifier::default());

        let table = vm.load_roster().await.unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(
            table.rows[1],
            RosterRow::Student {
                number: 2,
                name: String::new(),
                email: "b@x.io".into(),
                student_id: "2".into(),
            }
        );
    }

    #[tokio::test]
    async fn roster_failure_toasts() {
        let notifier = RecordingNotifier::default();
        let vm = FacultyViewModel::new(FakeAuth::failing(), FakeRecognition::default(), notifier.clone());

        assert!(vm.load_roster().await.is_none());
        assert_eq!(notifier.messages(), vec!["Error fetching students"]);
    }

    #[tokio::test]
    async fn summary_failure_is_silent() {
        let recognition = FakeRecognition::with_summary(Err(ApiError::Network("offline".into())));
        let notifier = RecordingNotifier::default();
        let vm = FacultyViewModel::new(FakeAuth::default(), recognition, notifier.clone());

        assert!(vm.daily_summary().await.is_none());
        assert!(notifier.messages().is_empty());
    }
}
