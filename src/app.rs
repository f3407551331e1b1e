// ============================================================================
// APP - Cableado de config → cliente API → estado global
// ============================================================================

use wasm_bindgen_futures::spawn_local;

use crate::config::CONFIG;
use crate::guards::bootstrap_session;
use crate::services::ApiClient;
use crate::state::AppState;

pub struct App {
    pub state: AppState,
    pub api: ApiClient,
}

impl App {
    pub fn new() -> Self {
        let state = AppState::new();
        let api = ApiClient::new(CONFIG.backend_url(), state.session.clone());
        Self { state, api }
    }

    /// Sembrar el estado desde localStorage y, si había sesión persistida,
    /// validarla contra el servidor en segundo plano (who-am-i)
    pub fn bootstrap(&self) {
        let had_session = self.state.init();
        if !had_session {
            return;
        }

        // El flag tiene que subir ANTES del spawn: un guard evaluado en este
        // mismo stack debe ver Loading, no Authorized con un token sin validar
        self.state.session.set_validating(true);

        let session = self.state.session.clone();
        let api = self.api.clone();
        spawn_local(async move {
            bootstrap_session(&session, &api).await;
        });
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
