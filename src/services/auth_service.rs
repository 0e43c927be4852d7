use async_trait::async_trait;
use web_sys::{File, FormData};
use crate::config::CONFIG;
use crate::models::auth::{LoginRequest, LoginResponse, PingResponse, RegisterRequest};
use crate::models::student::{RosterBody, StudentRosterEntry};
use crate::services::api_client::{decode, ensure_ok, ApiClient};
use crate::services::api_error::ApiError;
use crate::state::session_state::SessionContext;

/// Auth service (user registry): register, login, roster, face enrollment
#[async_trait(?Send)]
pub trait AuthApi {
    /// Whatever the file input hands us (`web_sys::File` in the browser)
    type Photo;

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError>;
    async fn upload_photo(&self, photo: &Self::Photo, email: &str) -> Result<(), ApiError>;
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;
    async fn all_students(&self) -> Result<Vec<StudentRosterEntry>, ApiError>;
    async fn ping(&self) -> Result<PingResponse, ApiError>;
}

#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new() -> Self {
        Self {
            client: ApiClient::new(&CONFIG.auth_service_url),
        }
    }

    pub fn for_session(session: Option<&SessionContext>) -> Self {
        Self {
            client: ApiClient::new(&CONFIG.auth_service_url).with_session(session),
        }
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl AuthApi for AuthService {
    type Photo = File;

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        log::info!("📝 [AUTH] Registering {} ({})", request.email, request.role);
        self.client.post_json("/register", request).await?;
        Ok(())
    }

    async fn upload_photo(&self, photo: &File, email: &str) -> Result<(), ApiError> {
        log::info!("📸 [AUTH] Uploading face photo for {} ({} bytes)", email, photo.size());

        let form = FormData::new().map_err(|e| ApiError::Request(format!("{:?}", e)))?;
        form.append_with_blob("file", photo)
            .map_err(|e| ApiError::Request(format!("{:?}", e)))?;
        form.append_with_str("email", email)
            .map_err(|e| ApiError::Request(format!("{:?}", e)))?;

        let response = self.client.post_form("/upload-photo", form).await?;
        ensure_ok(response).await?;
        Ok(())
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        log::info!("🔐 [AUTH] Login for {} as {}", request.email, request.role);
        let response = self.client.post_json("/login", request).await?;
        decode::<LoginResponse>(response).await
    }

    async fn all_students(&self) -> Result<Vec<StudentRosterEntry>, ApiError> {
        let body = self.client.get_json::<RosterBody>("/all-students").await?;
        let students = body.into_students();
        log::info!("👥 [AUTH] {} registered students", students.len());
        Ok(students)
    }

    async fn ping(&self) -> Result<PingResponse, ApiError> {
        self.client.get_json::<PingResponse>("/ping").await
    }
}
