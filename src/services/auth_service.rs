use crate::models::{LoginRequest, LoginResponse, WhoAmIResponse};
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;

/// Login con teléfono y contraseña
pub async fn perform_login(
    api: &ApiClient,
    phone: &str,
    password: &str,
) -> Result<LoginResponse, ApiError> {
    log::info!("🔐 Iniciando sesión para: {}", phone);
    let request = LoginRequest {
        phone: phone.to_string(),
        password: password.to_string(),
    };
    api.post("/auth/login", &request).await
}

/// Refrescar el perfil del usuario validando el token persistido contra el
/// servidor. Un fallo aquí significa que la sesión guardada ya no vale.
pub async fn who_am_i(api: &ApiClient) -> Result<WhoAmIResponse, ApiError> {
    log::info!("👤 Validando sesión persistida (who-am-i)...");
    api.get("/auth/me", &[]).await
}
