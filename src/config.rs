use serde::{Deserialize, Serialize};

pub const DEFAULT_AUTH_SERVICE_URL: &str = "http://localhost:5501/api/auth";
pub const DEFAULT_RECOGNITION_SERVICE_URL: &str = "http://localhost:5500";
pub const DEFAULT_INSTITUTE_NAME: &str = "KJ Somaiya Institute of Technology";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub auth_service_url: String,
    pub recognition_service_url: String,
    pub enable_logging: bool,
    pub toast_duration_ms: u32,
    /// Send `Authorization: Bearer <token>` on requests made after login.
    /// Off by default: the backends never asked for it.
    pub attach_session_token: bool,
    pub ui_config: UIConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auth_service_url: DEFAULT_AUTH_SERVICE_URL.to_string(),
            recognition_service_url: DEFAULT_RECOGNITION_SERVICE_URL.to_string(),
            enable_logging: true,
            toast_duration_ms: 3000,
            attach_session_token: false,
            ui_config: UIConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIConfig {
    pub institute_name: String,
    pub footer_text: String,
    pub default_lecture_name: String,
    pub photo_hint: String,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            institute_name: DEFAULT_INSTITUTE_NAME.to_string(),
            footer_text: "NoProxy © 2025".to_string(),
            default_lecture_name: "Default Lecture".to_string(),
            photo_hint: "Upload a classroom photo (JPG, PNG, max 10MB)".to_string(),
        }
    }
}

impl AppConfig {
    /// Load the configuration from compile-time environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            auth_service_url: option_env!("AUTH_SERVICE_URL")
                .unwrap_or(DEFAULT_AUTH_SERVICE_URL).to_string(),
            recognition_service_url: option_env!("RECOGNITION_SERVICE_URL")
                .unwrap_or(DEFAULT_RECOGNITION_SERVICE_URL).to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            toast_duration_ms: option_env!("TOAST_DURATION_MS")
                .unwrap_or("3000").parse().unwrap_or(3000),
            attach_session_token: option_env!("ATTACH_SESSION_TOKEN")
                .unwrap_or("false").parse().unwrap_or(false),
            ui_config: UIConfig {
                institute_name: option_env!("INSTITUTE_NAME")
                    .unwrap_or(DEFAULT_INSTITUTE_NAME).to_string(),
                ..defaults.ui_config
            },
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

/// `base` + `/` + `path`, whatever slashes either side carries
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

// Global static configuration
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
