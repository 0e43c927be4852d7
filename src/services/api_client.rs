// ============================================================================
// API CLIENT - HTTP ONLY (stateless)
// ============================================================================
// No business logic here: build the request, send it, check the status,
// decode the body. Both backends go through the same client.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::FormData;
use crate::config::{join_url, CONFIG};
use crate::models::auth::MessageResponse;
use crate::services::api_error::ApiError;
use crate::state::session_state::SessionContext;

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    bearer_token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            bearer_token: None,
        }
    }

    /// Attach the session token when `ATTACH_SESSION_TOKEN` is on
    pub fn with_session(mut self, session: Option<&SessionContext>) -> Self {
        self.bearer_token = session
            .and_then(|s| s.bearer_token(CONFIG.attach_session_token))
            .map(|t| t.to_string());
        self
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.bearer_token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// GET + status check + JSON decode
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("🌐 [API] GET {}", url);

        let response = self
            .authorize(Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = ensure_ok(response).await?;
        decode(response).await
    }

    /// POST JSON body + status check. The caller decides whether to read the body.
    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Response, ApiError> {
        let url = self.url(path);
        log::debug!("🌐 [API] POST {}", url);

        let response = self
            .authorize(Request::post(&url))
            .json(body)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        ensure_ok(response).await
    }

    /// POST multipart form. The status is NOT checked: the recognition service
    /// reports failures in the body, so callers inspect it themselves.
    pub async fn post_form(&self, path: &str, form: FormData) -> Result<Response, ApiError> {
        let url = self.url(path);
        log::debug!("🌐 [API] POST (multipart) {}", url);

        self.authorize(Request::post(&url))
            .body(form)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
}

/// Non-2xx becomes `ApiError::Http`, using the `{message}` body when there is one
pub async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<MessageResponse>(&body)
        .ok()
        .and_then(|m| m.message)
        .unwrap_or(if body.is_empty() { status_text } else { body });

    Err(ApiError::Http { status, message })
}

pub async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let client = ApiClient::new("http://localhost:5501/api/auth/");
        assert_eq!(client.url("/login"), "http://localhost:5501/api/auth/login");
        assert_eq!(client.url("all-students"), "http://localhost:5501/api/auth/all-students");
    }
}
