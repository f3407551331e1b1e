// Services - SOLO comunicación con el backend

pub mod api_client;
pub mod auth_service;
pub mod error;
pub mod health_service;
pub mod whatsapp_service;

pub use api_client::ApiClient;
pub use auth_service::{perform_login, who_am_i};
pub use error::ApiError;
pub use health_service::{check_backend_health, CancelHandle};
pub use whatsapp_service::QrPoller;
