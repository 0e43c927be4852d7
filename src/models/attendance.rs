use serde::{Deserialize, Deserializer, Serialize};
use crate::models::auth::deserialize_null_as_empty;

/// Attendance status. Unknown values are kept verbatim.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(from = "String", into = "String")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Other(String),
}

impl From<String> for AttendanceStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PRESENT" => AttendanceStatus::Present,
            "ABSENT" => AttendanceStatus::Absent,
            _ => AttendanceStatus::Other(value),
        }
    }
}

impl From<AttendanceStatus> for String {
    fn from(status: AttendanceStatus) -> Self {
        status.label().to_string()
    }
}

/// A missing or `null` status is kept as an empty unknown status
impl Default for AttendanceStatus {
    fn default() -> Self {
        AttendanceStatus::Other(String::new())
    }
}

fn deserialize_status<'de, D>(deserializer: D) -> Result<AttendanceStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .map(AttendanceStatus::from)
        .unwrap_or_default())
}

impl AttendanceStatus {
    pub fn label(&self) -> &str {
        match self {
            AttendanceStatus::Present => "PRESENT",
            AttendanceStatus::Absent => "ABSENT",
            AttendanceStatus::Other(raw) => raw,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AttendanceRecord {
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub date: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub lecture_name: String,
    #[serde(default, deserialize_with = "deserialize_status")]
    pub status: AttendanceStatus,
}

/// `GET /attendance/{id}`
#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
pub struct AttendanceResponse {
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
    #[serde(default)]
    pub error: Option<String>,
}

/// `POST /recognize`. Every field is optional on the wire.
#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
pub struct RecognitionResponse {
    #[serde(default)]
    pub count_present: Option<u32>,
    #[serde(default)]
    pub count_absent: Option<u32>,
    #[serde(default)]
    pub present: Vec<String>,
    #[serde(default)]
    pub absent: Vec<String>,
    #[serde(default)]
    pub unknown: Vec<String>,
    #[serde(default)]
    pub total_faces_detected: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Outcome of processing one classroom photo
#[derive(Clone, PartialEq, Debug, Default)]
pub struct RecognitionOutcome {
    pub count_present: u32,
    pub count_absent: u32,
    pub present: Vec<String>,
    pub absent: Vec<String>,
    pub unknown: Vec<String>,
    pub total_faces_detected: Option<u32>,
    pub message: Option<String>,
}

impl From<RecognitionResponse> for RecognitionOutcome {
    fn from(response: RecognitionResponse) -> Self {
        Self {
            count_present: response.count_present.unwrap_or(0),
            count_absent: response.count_absent.unwrap_or(0),
            present: response.present,
            absent: response.absent,
            unknown: response.unknown,
            total_faces_detected: response.total_faces_detected,
            message: response.message,
        }
    }
}

/// `GET /summary`: today's totals across all lectures
#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
pub struct SummaryResponse {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub present: Option<u32>,
    #[serde(default)]
    pub absent: Option<u32>,
    #[serde(default)]
    pub total: Option<u32>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct DailySummary {
    pub date: String,
    pub present: u32,
    pub absent: u32,
    pub total: u32,
}

impl From<SummaryResponse> for DailySummary {
    fn from(response: SummaryResponse) -> Self {
        let present = response.present.unwrap_or(0);
        let absent = response.absent.unwrap_or(0);
        Self {
            date: response.date.unwrap_or_default(),
            present,
            absent,
            total: response.total.unwrap_or(present + absent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_status_is_kept_verbatim() {
        let record: AttendanceRecord = serde_json::from_str(
            r#"{"date":"2025-03-02","lecture_name":"CS101","status":"LATE"}"#,
        )
        .unwrap();
        assert_eq!(record.status, AttendanceStatus::Other("LATE".to_string()));
        assert_eq!(record.status.label(), "LATE");
    }

    #[test]
    fn null_fields_keep_the_record() {
        let response: AttendanceResponse = serde_json::from_str(
            r#"{"attendance":[
                {"date":"2025-03-02","lecture_name":"CS101","status":"PRESENT"},
                {"date":"2025-03-03","lecture_name":null,"status":"ABSENT"},
                {"date":null,"lecture_name":"DBMS","status":null},
                {"date":"2025-03-05","lecture_name":"OS"}]}"#,
        )
        .unwrap();
        let records = response.attendance;
        assert_eq!(records.len(), 4);
        assert_eq!(records[1].lecture_name, "");
        assert_eq!(records[1].status, AttendanceStatus::Absent);
        assert_eq!(records[2].date, "");
        assert_eq!(records[2].status, AttendanceStatus::Other(String::new()));
        assert_eq!(records[3].status.label(), "");
    }

    #[test]
    fn attendance_response_without_list_is_empty() {
        let response: AttendanceResponse = serde_json::from_str(r#"{"user_id":3}"#).unwrap();
        assert!(response.attendance.is_empty());
        assert!(response.error.is_none());
    }

    #[test]
    fn recognition_counts_default_to_zero() {
        let response: RecognitionResponse =
            serde_json::from_str(r#"{"message":"ok","present":["asha"]}"#).unwrap();
        let outcome = RecognitionOutcome::from(response);
        assert_eq!(outcome.count_present, 0);
        assert_eq!(outcome.count_absent, 0);
        assert_eq!(outcome.present, vec!["asha".to_string()]);
    }

    #[test]
    fn summary_total_falls_back_to_sum() {
        let response: SummaryResponse =
            serde_json::from_str(r#"{"date":"2025-03-02","present":12,"absent":4}"#).unwrap();
        let summary = DailySummary::from(response);
        assert_eq!(summary.total, 16);
    }
}
