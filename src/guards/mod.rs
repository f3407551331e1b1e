// ============================================================================
// GUARDS - Protección de pantallas por sesión y rol
// ============================================================================
// Contrato del arranque: si hay sesión persistida se valida con who-am-i;
// mientras settlea, las pantallas protegidas muestran loading; si falla o no
// hay sesión, se redirige al login; si el rol no está en el set permitido de
// la pantalla, acceso denegado.
// ============================================================================

use crate::models::Role;
use crate::services::api_client::ApiClient;
use crate::services::auth_service::who_am_i;
use crate::state::session_state::SessionState;

/// Resultado de evaluar una pantalla protegida
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// El who-am-i del bootstrap sigue en vuelo: placeholder de carga
    Loading,
    Authorized,
    /// Sin sesión válida: redirigir al login
    RedirectToLogin,
    /// Sesión válida pero rol fuera del set permitido
    Forbidden,
}

/// Guard de una ruta con su set de roles permitidos
#[derive(Clone, Copy, Debug)]
pub struct RouteGuard {
    allowed_roles: &'static [Role],
}

/// Pantallas de administración pura (usuarios, logs, vehículos)
pub const ADMIN_ONLY: RouteGuard = RouteGuard::new(&[Role::Admin]);
/// Pantallas de gestión diaria (reservas, trayectos, hoteles)
pub const STAFF: RouteGuard = RouteGuard::new(&[Role::Admin, Role::Manager]);
/// Cualquier usuario autenticado
pub const ANY_ROLE: RouteGuard = RouteGuard::new(&[Role::Admin, Role::Manager, Role::Employee]);

impl RouteGuard {
    pub const fn new(allowed_roles: &'static [Role]) -> Self {
        Self { allowed_roles }
    }

    pub fn evaluate(&self, session: &SessionState) -> GuardOutcome {
        if session.is_validating() || session.loading() {
            return GuardOutcome::Loading;
        }
        if !session.is_logged_in() {
            return GuardOutcome::RedirectToLogin;
        }
        match session.role() {
            Some(role) if self.allowed_roles.contains(&role) => GuardOutcome::Authorized,
            _ => GuardOutcome::Forbidden,
        }
    }
}

/// Bootstrap de sesión al arrancar la app: con una sesión rehidratada,
/// validar el token contra el servidor y refrescar el perfil cacheado.
/// Si el servidor la rechaza, la sesión persistida se destruye.
pub async fn bootstrap_session(session: &SessionState, api: &ApiClient) {
    if !session.is_logged_in() {
        session.set_validating(false);
        return;
    }

    session.set_validating(true);
    match who_am_i(api).await {
        Ok(response) => match response.user {
            Some(user) if response.is_success => {
                log::info!("✅ Sesión válida, perfil refrescado: {}", user.name);
                session.apply_profile(user);
            }
            _ => {
                log::warn!("⚠️ El servidor no reconoce la sesión guardada");
                session.clear();
            }
        },
        Err(e) => {
            log::warn!("⚠️ who-am-i falló: {}", e);
            session.clear();
        }
    }
    session.set_validating(false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LoginResponse, UserSummary};

    fn session_with_role(role: Role) -> SessionState {
        let session = SessionState::new();
        session.slice().fulfill(LoginResponse {
            is_success: true,
            token: Some("abc".to_string()),
            user: Some(UserSummary {
                id: "1".to_string(),
                name: "A".to_string(),
                role,
            }),
            message: None,
        });
        session
    }

    #[test]
    fn no_session_redirects_to_login() {
        let session = SessionState::new();
        assert_eq!(ADMIN_ONLY.evaluate(&session), GuardOutcome::RedirectToLogin);
    }

    #[test]
    fn in_flight_validation_shows_loading() {
        let session = session_with_role(Role::Admin);
        session.set_validating(true);
        assert_eq!(ADMIN_ONLY.evaluate(&session), GuardOutcome::Loading);
        session.set_validating(false);
        assert_eq!(ADMIN_ONLY.evaluate(&session), GuardOutcome::Authorized);
    }

    #[test]
    fn hydrated_session_stays_loading_until_whoami_settles() {
        // Secuencia del arranque: rehidratar deja el slice lleno y el flag
        // de validación sube en el mismo stack, antes de despachar who-am-i.
        // Un guard evaluado en esa ventana no puede autorizar todavía.
        let session = session_with_role(Role::Admin);
        session.set_validating(true);
        assert_eq!(ADMIN_ONLY.evaluate(&session), GuardOutcome::Loading);
        assert_eq!(ANY_ROLE.evaluate(&session), GuardOutcome::Loading);

        // who-am-i settled OK
        session.set_validating(false);
        assert_eq!(ADMIN_ONLY.evaluate(&session), GuardOutcome::Authorized);

        // who-am-i rechazado: sesión destruida → login
        session.set_validating(true);
        session.slice().reset();
        session.set_validating(false);
        assert_eq!(ADMIN_ONLY.evaluate(&session), GuardOutcome::RedirectToLogin);
    }

    #[test]
    fn role_outside_the_allowed_set_is_forbidden() {
        let session = session_with_role(Role::Employee);
        assert_eq!(ADMIN_ONLY.evaluate(&session), GuardOutcome::Forbidden);
        assert_eq!(STAFF.evaluate(&session), GuardOutcome::Forbidden);
        assert_eq!(ANY_ROLE.evaluate(&session), GuardOutcome::Authorized);
    }

    #[test]
    fn manager_reaches_staff_screens_but_not_admin_ones() {
        let session = session_with_role(Role::Manager);
        assert_eq!(STAFF.evaluate(&session), GuardOutcome::Authorized);
        assert_eq!(ADMIN_ONLY.evaluate(&session), GuardOutcome::Forbidden);
    }
}
