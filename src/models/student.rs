use serde::{Deserialize, Serialize};
use crate::models::auth::{deserialize_null_as_empty, deserialize_optional_id};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct StudentRosterEntry {
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<String>,
}

/// `GET /all-students` answers an array, or `{ "message": "No students found" }`
/// when nobody is registered yet. An array that does not decode is an error,
/// never an empty roster.
#[derive(Clone, PartialEq, Deserialize, Debug)]
#[serde(untagged)]
pub enum RosterBody {
    Students(Vec<StudentRosterEntry>),
    Message {
        #[serde(default)]
        message: Option<String>,
    },
}

impl RosterBody {
    pub fn into_students(self) -> Vec<StudentRosterEntry> {
        match self {
            RosterBody::Students(students) => students,
            RosterBody::Message { message } => {
                log::info!("📋 [ROSTER] No student list: {}", message.unwrap_or_default());
                Vec::new()
            }
        }
    }
}
