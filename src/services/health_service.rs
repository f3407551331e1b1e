// ============================================================================
// HEALTH SERVICE - Chequeo de disponibilidad del backend
// ============================================================================
// Usado por la pantalla de registro. Es la única llamada con cancelación:
// el handle va atado a la vida del componente y una respuesta que llega
// después de cancelar se descarta sin tocar el estado.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::models::HealthResponse;
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;

/// Handle de cancelación atado a la vida del componente que lo creó
#[derive(Clone, Default)]
pub struct CancelHandle {
    cancelled: Rc<Cell<bool>>,
}

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// GET /health; devuelve None si el handle fue cancelado antes de que la
/// respuesta llegara (el caller no debe escribir estado en ese caso)
pub async fn check_backend_health(
    api: &ApiClient,
    cancel: &CancelHandle,
) -> Option<Result<HealthResponse, ApiError>> {
    let result = api.get::<HealthResponse>("/health", &[]).await;
    if cancel.is_cancelled() {
        log::info!("ℹ️ Health check cancelado, respuesta descartada");
        return None;
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_handle_starts_live_and_sticks_once_cancelled() {
        let handle = CancelHandle::new();
        assert!(!handle.is_cancelled());

        let shared = handle.clone();
        shared.cancel();
        assert!(handle.is_cancelled());
    }
}
