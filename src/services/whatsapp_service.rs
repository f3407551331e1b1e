// ============================================================================
// WHATSAPP SERVICE - Polling del handshake QR del gateway de mensajería
// ============================================================================
// Única pantalla con polling: mientras el gateway no esté conectado se
// consulta el estado del QR en un intervalo fijo. El Interval se cancela
// al soltarlo (stop o drop del poller con la pantalla).
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;

use crate::config::CONFIG;
use crate::models::QrStatusResponse;
use crate::services::api_client::ApiClient;
use crate::state::slice::ResourceSlice;

const QR_STATUS_PATH: &str = "/message/qr-status";

pub struct QrPoller {
    api: ApiClient,
    status: ResourceSlice<QrStatusResponse>,
    interval: Rc<RefCell<Option<Interval>>>,
}

impl QrPoller {
    pub fn new(api: ApiClient, status: ResourceSlice<QrStatusResponse>) -> Self {
        Self {
            api,
            status,
            interval: Rc::new(RefCell::new(None)),
        }
    }

    pub fn status(&self) -> &ResourceSlice<QrStatusResponse> {
        &self.status
    }

    /// Arrancar el polling. Ignora llamadas repetidas mientras ya corre
    /// (mismo guard que el monitor de red del original).
    pub fn start(&self) {
        if self.interval.borrow().is_some() {
            log::warn!("⚠️ QrPoller: start llamado con polling ya activo, ignorando");
            return;
        }

        log::info!(
            "📱 Iniciando polling del QR cada {} ms",
            CONFIG.qr_poll_interval_ms
        );

        let api = self.api.clone();
        let status = self.status.clone();
        let interval_handle = self.interval.clone();

        let interval = Interval::new(CONFIG.qr_poll_interval_ms, move || {
            let api = api.clone();
            let status = status.clone();
            let interval_handle = interval_handle.clone();
            spawn_local(async move {
                // Sin pending() por tick: cada respuesta pisa la anterior
                match api.get::<QrStatusResponse>(QR_STATUS_PATH, &[]).await {
                    Ok(response) => {
                        let connected = response.connected;
                        status.fulfill(response);
                        if connected {
                            log::info!("✅ Gateway de WhatsApp conectado, polling detenido");
                            interval_handle.borrow_mut().take();
                        }
                    }
                    Err(e) => status.reject(e.user_message()),
                }
            });
        });

        *self.interval.borrow_mut() = Some(interval);
    }

    /// Detener el polling (también ocurre al dropear el poller)
    pub fn stop(&self) {
        if self.interval.borrow_mut().take().is_some() {
            log::info!("🛑 Polling del QR detenido");
        }
    }

    pub fn is_polling(&self) -> bool {
        self.interval.borrow().is_some()
    }
}
