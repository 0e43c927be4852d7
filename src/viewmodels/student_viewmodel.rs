// ============================================================================
// STUDENT VIEWMODEL - Attendance history, percentage and donut data
// ============================================================================

use crate::models::attendance::{AttendanceRecord, AttendanceStatus};
use crate::services::RecognitionApi;

pub const NO_ATTENDANCE_TEXT: &str = "No attendance found";
pub const NO_RECORDS_TEXT: &str = "No records yet";
pub const PERCENT_PLACEHOLDER: &str = "--%";

pub const PRESENT_COLOR: &str = "#16a34a";
pub const ABSENT_COLOR: &str = "#dc2626";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttendanceCounts {
    pub present: u32,
    pub absent: u32,
}

impl AttendanceCounts {
    /// Statuses other than PRESENT/ABSENT count toward neither side
    pub fn from_records(records: &[AttendanceRecord]) -> Self {
        records.iter().fold(Self::default(), |mut counts, record| {
            match record.status {
                AttendanceStatus::Present => counts.present += 1,
                AttendanceStatus::Absent => counts.absent += 1,
                AttendanceStatus::Other(_) => {}
            }
            counts
        })
    }

    /// round(P / max(P+A, 1) * 100); no records gives 0
    pub fn percent(&self) -> u32 {
        let total = (self.present + self.absent).max(1) as f64;
        (self.present as f64 / total * 100.0).round() as u32
    }
}

/// Data handed to the chart glue
#[derive(Clone, Debug, PartialEq)]
pub struct DonutData {
    pub labels: [&'static str; 2],
    pub values: [u32; 2],
    pub colors: [&'static str; 2],
}

impl From<AttendanceCounts> for DonutData {
    fn from(counts: AttendanceCounts) -> Self {
        Self {
            labels: ["Present", "Absent"],
            values: [counts.present, counts.absent],
            colors: [PRESENT_COLOR, ABSENT_COLOR],
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AttendanceRow {
    pub date: String,
    pub subject: String,
    pub status: String,
    pub present: bool,
}

impl AttendanceRow {
    pub fn status_class(&self) -> &'static str {
        if self.present {
            "status-present"
        } else {
            "status-absent"
        }
    }
}

impl From<&AttendanceRecord> for AttendanceRow {
    fn from(record: &AttendanceRecord) -> Self {
        Self {
            date: record.date.clone(),
            subject: record.lecture_name.clone(),
            status: record.status.label().to_string(),
            present: record.status == AttendanceStatus::Present,
        }
    }
}

/// Everything the student panel draws
#[derive(Clone, Debug, PartialEq)]
pub enum AttendanceOverview {
    Loaded {
        counts: AttendanceCounts,
        rows: Vec<AttendanceRow>,
    },
    Unavailable,
}

impl AttendanceOverview {
    pub fn from_records(records: &[AttendanceRecord]) -> Self {
        AttendanceOverview::Loaded {
            counts: AttendanceCounts::from_records(records),
            rows: records.iter().map(AttendanceRow::from).collect(),
        }
    }

    pub fn percent_text(&self) -> String {
        match self {
            AttendanceOverview::Loaded { counts, .. } => format!("{}%", counts.percent()),
            AttendanceOverview::Unavailable => PERCENT_PLACEHOLDER.to_string(),
        }
    }

    /// `None` when there is nothing to chart
    pub fn donut(&self) -> Option<DonutData> {
        match self {
            AttendanceOverview::Loaded { counts, .. } => Some(DonutData::from(*counts)),
            AttendanceOverview::Unavailable => None,
        }
    }

    /// Table placeholder: a failed fetch and an empty history read differently
    pub fn empty_text(&self) -> Option<&'static str> {
        match self {
            AttendanceOverview::Unavailable => Some(NO_ATTENDANCE_TEXT),
            AttendanceOverview::Loaded { rows, .. } if rows.is_empty() => Some(NO_RECORDS_TEXT),
            AttendanceOverview::Loaded { .. } => None,
        }
    }

    pub fn rows(&self) -> &[AttendanceRow] {
        match self {
            AttendanceOverview::Loaded { rows, .. } => rows,
            AttendanceOverview::Unavailable => &[],
        }
    }
}

pub struct StudentViewModel<R> {
    recognition: R,
}

impl<R: RecognitionApi> StudentViewModel<R> {
    pub fn new(recognition: R) -> Self {
        Self { recognition }
    }

    /// Failures never toast here: the panel itself says "No attendance found"
    pub async fn load_attendance(&self, student_id: &str) -> AttendanceOverview {
        match self.recognition.attendance(student_id).await {
            Ok(records) => AttendanceOverview::from_records(&records),
            Err(e) => {
                log::error!("❌ [STUDENT] Attendance for {} failed: {}", student_id, e);
                AttendanceOverview::Unavailable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ApiError;
    use crate::viewmodels::test_support::FakeRecognition;

    fn record(status: &str) -> AttendanceRecord {
        AttendanceRecord {
            date: "2025-03-02".into(),
            lecture_name: "CS101".into(),
            status: AttendanceStatus::from(status.to_string()),
        }
    }

    #[test]
    fn seven_of_ten_is_seventy_percent() {
        let mut records: Vec<_> = (0..7).map(|_| record("PRESENT")).collect();
        records.extend((0..3).map(|_| record("ABSENT")));

        let overview = AttendanceOverview::from_records(&records);
        assert_eq!(overview.percent_text(), "70%");
        assert_eq!(overview.donut().map(|d| d.values), Some([7, 3]));
    }

    #[test]
    fn no_records_is_zero_percent_without_rows() {
        let overview = AttendanceOverview::from_records(&[]);
        assert_eq!(overview.percent_text(), "0%");
        assert!(overview.rows().is_empty());
        assert_eq!(overview.empty_text(), Some(NO_RECORDS_TEXT));
    }

    #[test]
    fn percent_rounds_half_up() {
        let counts = AttendanceCounts { present: 2, absent: 1 };
        assert_eq!(counts.percent(), 67);
        let counts = AttendanceCounts { present: 1, absent: 7 };
        assert_eq!(counts.percent(), 13);
    }

    #[test]
    fn other_statuses_count_toward_neither_side() {
        let counts = AttendanceCounts::from_records(&[record("PRESENT"), record("LATE")]);
        assert_eq!(counts, AttendanceCounts { present: 1, absent: 0 });

        let row = AttendanceRow::from(&record("LATE"));
        assert_eq!(row.status, "LATE");
        assert_eq!(row.status_class(), "status-absent");
    }

    #[test]
    fn dates_are_shown_as_sent() {
        let row = AttendanceRow::from(&record("PRESENT"));
        assert_eq!(row.date, "2025-03-02");
    }

    #[test]
    fn empty_history_reads_differently_from_failure() {
        assert_eq!(AttendanceOverview::from_records(&[]).empty_text(), Some("No records yet"));
        assert_eq!(AttendanceOverview::Unavailable.empty_text(), Some("No attendance found"));
        assert_eq!(AttendanceOverview::from_records(&[record("ABSENT")]).empty_text(), None);
    }

    #[test]
    fn donut_colors_and_labels() {
        let donut = DonutData::from(AttendanceCounts { present: 1, absent: 1 });
        assert_eq!(donut.labels, ["Present", "Absent"]);
        assert_eq!(donut.colors, ["#16a34a", "#dc2626"]);
    }

    #[tokio::test]
    async fn rows_keep_server_order() {
        let recognition = FakeRecognition::with_attendance(
            r#"{"attendance":[
                {"date":"2025-03-03","lecture_name":"DBMS","status":"ABSENT"},
                {"date":"2025-03-02","lecture_name":"CS101","status":"PRESENT"}]}"#,
        );
        let vm = StudentViewModel::new(recognition.clone());

        let overview = vm.load_attendance("16010122").await;
        let subjects: Vec<_> = overview.rows().iter().map(|r| r.subject.as_str()).collect();
        assert_eq!(subjects, vec!["DBMS", "CS101"]);
        assert_eq!(overview.percent_text(), "50%");
        assert_eq!(recognition.calls(), vec!["attendance:16010122"]);
    }

    #[tokio::test]
    async fn failure_keeps_placeholder() {
        let vm = StudentViewModel::new(FakeRecognition::attendance_failing(ApiError::Network(
            "offline".into(),
        )));

        let overview = vm.load_attendance("16010122").await;
        assert_eq!(overview, AttendanceOverview::Unavailable);
        assert_eq!(overview.percent_text(), "--%");
        assert!(overview.donut().is_none());
        assert!(overview.rows().is_empty());
        assert_eq!(overview.empty_text(), Some(NO_ATTENDANCE_TEXT));
    }
}
