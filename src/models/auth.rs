use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// User role, as picked by the login role tabs
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Faculty,
}

impl Role {
    /// Case-insensitive: the auth service answers `STUDENT` / `FACULTY`
    pub fn parse(value: &str) -> Option<Role> {
        match value.trim().to_ascii_lowercase().as_str() {
            "student" => Some(Role::Student),
            "faculty" => Some(Role::Faculty),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Faculty => "faculty",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_string(),
            password: password.to_string(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

/// Sign-up form fields other than the credentials
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct RegistrationProfile {
    pub id: String,
    pub name: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl RegisterRequest {
    pub fn new(profile: &RegistrationProfile, credentials: &Credentials, role: Role) -> Self {
        Self {
            id: profile.id.clone(),
            name: profile.name.clone(),
            email: credentials.email.clone(),
            password: credentials.password.clone(),
            role,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Error body of the auth service (`{ "message": "..." }`)
#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
pub struct PingResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Minimal profile of the logged-in user
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub role: Role,
}

impl UserProfile {
    /// Build the profile from a login answer, filling the gaps the server leaves:
    /// id falls back to the email, name to "User", role to the selected tab.
    pub fn from_login(response: &LoginResponse, email: &str, selected_role: Role) -> Self {
        let id = response
            .id
            .clone()
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| email.to_string());
        let name = response
            .name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| "User".to_string());
        let role = response
            .role
            .as_deref()
            .and_then(Role::parse)
            .unwrap_or(selected_role);

        Self { id, name, role }
    }

    /// Avatar letter of the sidebar
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "U".to_string())
    }
}

/// Ids come back as JSON numbers from the auth service (`Long`) and as
/// strings from older builds; both end up as `String`.
pub fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Missing or `null` string fields read as empty
pub fn deserialize_null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
