// ============================================================================
// BOOKING ADMIN - Núcleo de estado y datos del dashboard administrativo
// ============================================================================
// - Models: estructuras compartidas con el backend
// - Services: SOLO comunicación API (bearer token, normalización de errores)
// - State: slices genéricos { data, loading, error } con Rc<RefCell>
// - Guards: bootstrap de sesión y protección de pantallas por rol
// - ViewModels: estado de pantalla derivado de los slices (sin DOM)
// ============================================================================

pub mod app;
pub mod config;
pub mod guards;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;

// Instancia global de App (un solo hilo de UI)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🚀 Booking Admin - entorno: {}", CONFIG.environment);

    let app = App::new();
    app.bootstrap();

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Acceder a la App global desde los callbacks de UI
pub fn with_app<R>(f: impl FnOnce(&App) -> R) -> Option<R> {
    APP.with(|app_cell| app_cell.borrow().as_ref().map(f))
}
