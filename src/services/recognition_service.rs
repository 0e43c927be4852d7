use async_trait::async_trait;
use web_sys::{File, FormData};
use crate::config::CONFIG;
use crate::models::attendance::{
    AttendanceRecord, AttendanceResponse, DailySummary, RecognitionOutcome, RecognitionResponse,
    SummaryResponse,
};
use crate::models::auth::PingResponse;
use crate::services::api_client::{decode, ApiClient};
use crate::services::api_error::ApiError;
use crate::state::session_state::SessionContext;

/// Recognition service: classroom photo -> attendance, per-student history
#[async_trait(?Send)]
pub trait RecognitionApi {
    type Photo;

    async fn recognize(
        &self,
        photo: &Self::Photo,
        session_label: &str,
        marked_by: &str,
    ) -> Result<RecognitionOutcome, ApiError>;
    async fn attendance(&self, student_id: &str) -> Result<Vec<AttendanceRecord>, ApiError>;
    async fn summary(&self) -> Result<DailySummary, ApiError>;
    async fn ping(&self) -> Result<PingResponse, ApiError>;
}

#[derive(Clone)]
pub struct RecognitionService {
    client: ApiClient,
}

impl RecognitionService {
    pub fn new() -> Self {
        Self {
            client: ApiClient::new(&CONFIG.recognition_service_url),
        }
    }

    pub fn for_session(session: Option<&SessionContext>) -> Self {
        Self {
            client: ApiClient::new(&CONFIG.recognition_service_url).with_session(session),
        }
    }
}

impl Default for RecognitionService {
    fn default() -> Self {
        Self::new()
    }
}

/// The recognition service answers `{error}` with 400/500 and sometimes with 200;
/// the body decides, the status only matters when the body says nothing.
pub fn interpret_recognition(
    ok: bool,
    status: u16,
    body: RecognitionResponse,
) -> Result<RecognitionOutcome, ApiError> {
    if let Some(error) = body.error {
        return Err(ApiError::Backend(error));
    }
    if !ok {
        return Err(ApiError::Http {
            status,
            message: body.message.unwrap_or_default(),
        });
    }
    Ok(RecognitionOutcome::from(body))
}

#[async_trait(?Send)]
impl RecognitionApi for RecognitionService {
    type Photo = File;

    async fn recognize(
        &self,
        photo: &File,
        session_label: &str,
        marked_by: &str,
    ) -> Result<RecognitionOutcome, ApiError> {
        log::info!("🧠 [RECOGNITION] Processing '{}' ({}) marked by {}", session_label, photo.name(), marked_by);

        let form = FormData::new().map_err(|e| ApiError::Request(format!("{:?}", e)))?;
        form.append_with_blob("file", photo)
            .map_err(|e| ApiError::Request(format!("{:?}", e)))?;
        form.append_with_str("session", session_label)
            .map_err(|e| ApiError::Request(format!("{:?}", e)))?;
        form.append_with_str("marked_by", marked_by)
            .map_err(|e| ApiError::Request(format!("{:?}", e)))?;

        let response = self.client.post_form("/recognize", form).await?;
        let ok = response.ok();
        let status = response.status();
        let body = decode::<RecognitionResponse>(response).await?;

        let outcome = interpret_recognition(ok, status, body)?;
        log::info!(
            "✅ [RECOGNITION] Present: {}, Absent: {}, Unknown faces: {}",
            outcome.count_present,
            outcome.count_absent,
            outcome.unknown.len()
        );
        Ok(outcome)
    }

    async fn attendance(&self, student_id: &str) -> Result<Vec<AttendanceRecord>, ApiError> {
        let path = format!("/attendance/{}", student_id);
        let response = self.client.get_json::<AttendanceResponse>(&path).await?;
        if let Some(error) = response.error {
            return Err(ApiError::Backend(error));
        }
        log::info!("📊 [RECOGNITION] {} attendance records for {}", response.attendance.len(), student_id);
        Ok(response.attendance)
    }

    async fn summary(&self) -> Result<DailySummary, ApiError> {
        let response = self.client.get_json::<SummaryResponse>("/summary").await?;
        if let Some(error) = response.error {
            return Err(ApiError::Backend(error));
        }
        Ok(DailySummary::from(response))
    }

    async fn ping(&self) -> Result<PingResponse, ApiError> {
        self.client.get_json::<PingResponse>("/ping").await
    }
}
