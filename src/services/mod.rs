pub mod api_error;
pub mod api_client;
pub mod auth_service;
pub mod recognition_service;
pub mod toast_service;

pub use api_error::ApiError;
pub use api_client::ApiClient;
pub use auth_service::{AuthApi, AuthService};
pub use recognition_service::{RecognitionApi, RecognitionService};
pub use toast_service::{Notifier, ToastKind, ToastService};
