// ============================================================================
// SESSION STATE - Sesión autenticada (token + perfil) con persistencia
// ============================================================================
// Es un slice normal cuyo payload es la LoginResponse completa, con un único
// efecto extra: en login exitoso el payload se espeja tal cual en
// localStorage, y en logout (o sesión inválida) se elimina de ahí.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{LoginResponse, Role, UserSummary};
use crate::state::slice::ResourceSlice;
use crate::utils::constants::STORAGE_KEY_SESSION;
use crate::utils::storage::{load_from_storage, remove_from_storage, save_to_storage};

#[derive(Clone)]
pub struct SessionState {
    slice: ResourceSlice<LoginResponse>,
    /// true mientras el who-am-i del bootstrap está en vuelo
    validating: Rc<RefCell<bool>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            slice: ResourceSlice::new(),
            validating: Rc::new(RefCell::new(false)),
        }
    }

    pub fn slice(&self) -> &ResourceSlice<LoginResponse> {
        &self.slice
    }

    pub fn token(&self) -> Option<String> {
        self.slice.data().token
    }

    pub fn user(&self) -> Option<UserSummary> {
        self.slice.data().user
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }

    pub fn is_logged_in(&self) -> bool {
        let data = self.slice.data();
        data.is_success && data.token.is_some()
    }

    pub fn loading(&self) -> bool {
        self.slice.loading()
    }

    pub fn error(&self) -> String {
        self.slice.error()
    }

    pub fn is_validating(&self) -> bool {
        *self.validating.borrow()
    }

    pub fn set_validating(&self, validating: bool) {
        *self.validating.borrow_mut() = validating;
    }

    /// Request de login en vuelo
    pub fn pending(&self) {
        self.slice.pending();
    }

    /// Login settled OK: el payload pasa a ser el estado y, si trae token,
    /// se persiste byte a byte bajo la clave fija
    pub fn fulfill_login(&self, response: LoginResponse) {
        if response.is_success && response.token.is_some() {
            if let Err(e) = save_to_storage(STORAGE_KEY_SESSION, &response) {
                log::error!("❌ Error guardando sesión en storage: {}", e);
            } else {
                log::info!("💾 Sesión persistida en localStorage");
            }
        }
        self.slice.fulfill(response);
    }

    pub fn reject_login(&self, message: impl Into<String>) {
        self.slice.reject(message);
    }

    /// Rehidratar desde localStorage al arrancar; true si había sesión
    pub fn hydrate(&self) -> bool {
        match load_from_storage::<LoginResponse>(STORAGE_KEY_SESSION) {
            Some(saved) if saved.token.is_some() => {
                log::info!(
                    "✅ Sesión encontrada en storage: {}",
                    saved
                        .user
                        .as_ref()
                        .map(|u| u.name.as_str())
                        .unwrap_or("(sin perfil)")
                );
                self.slice.fulfill(saved);
                true
            }
            _ => {
                log::info!("ℹ️ No hay sesión persistida");
                false
            }
        }
    }

    /// who-am-i exitoso: refrescar el perfil cacheado y re-persistir
    pub fn apply_profile(&self, user: UserSummary) {
        let mut data = self.slice.data();
        data.user = Some(user);
        if let Err(e) = save_to_storage(STORAGE_KEY_SESSION, &data) {
            log::error!("❌ Error actualizando sesión en storage: {}", e);
        }
        self.slice.fulfill(data);
    }

    /// Logout explícito o sesión reportada inválida por el servidor:
    /// slice al estado inicial y storage limpio
    pub fn clear(&self) {
        log::info!("👋 Limpiando sesión");
        self.slice.reset();
        if let Err(e) = remove_from_storage(STORAGE_KEY_SESSION) {
            log::warn!("⚠️ Error eliminando sesión de storage: {}", e);
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn admin_login() -> LoginResponse {
        LoginResponse {
            is_success: true,
            token: Some("abc".to_string()),
            user: Some(UserSummary {
                id: "1".to_string(),
                name: "A".to_string(),
                role: Role::Admin,
            }),
            message: None,
        }
    }

    #[test]
    fn fresh_session_is_logged_out() {
        let session = SessionState::new();
        assert!(!session.is_logged_in());
        assert_eq!(session.token(), None);
        assert!(!session.is_validating());
    }

    #[test]
    fn fulfilled_login_exposes_token_and_role() {
        let session = SessionState::new();
        // fulfill directo sobre el slice: sin storage en tests nativos
        session.slice().fulfill(admin_login());
        assert!(session.is_logged_in());
        assert_eq!(session.token().as_deref(), Some("abc"));
        assert_eq!(session.role(), Some(Role::Admin));
    }

    #[test]
    fn reset_slice_drops_the_session() {
        let session = SessionState::new();
        session.slice().fulfill(admin_login());
        session.slice().reset();
        assert!(!session.is_logged_in());
        assert_eq!(session.user(), None);
    }
}
