// ============================================================================
// SESSION VIEWMODEL - LÓGICA DE SESIÓN
// ============================================================================
// Orquesta login/logout sobre el slice de sesión. Es la única dispatch con
// efecto extra (persistencia), por eso no pasa por state::slice::run.
// ============================================================================

use crate::services::api_client::ApiClient;
use crate::services::auth_service::perform_login;
use crate::state::session_state::SessionState;

pub struct SessionViewModel {
    api: ApiClient,
    session: SessionState,
}

impl SessionViewModel {
    pub fn new(api: ApiClient, session: SessionState) -> Self {
        Self { api, session }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Dispatch de login: pending → una llamada → fulfill (con persistencia)
    /// o reject con el mensaje normalizado
    pub async fn login(&self, phone: &str, password: &str) {
        self.session.pending();
        match perform_login(&self.api, phone, password).await {
            Ok(response) => {
                if response.is_success {
                    log::info!("✅ Login exitoso: {}", phone);
                } else {
                    log::warn!("⚠️ Login rechazado: {:?}", response.message);
                }
                self.session.fulfill_login(response);
            }
            Err(e) => {
                log::error!("❌ Error en login: {}", e);
                self.session.reject_login(e.user_message());
            }
        }
    }

    /// Logout: slice de sesión al estado inicial y storage limpio
    pub fn logout(&self) {
        self.session.clear();
    }
}
