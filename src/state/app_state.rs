// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================
// Un objeto explícito inyectado por referencia a cada consumidor: la sesión,
// los slices CRUD de los ~10 recursos del dashboard y las preferencias de UI
// persistidas. init() lo siembra desde localStorage, teardown() lo limpia.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{
    ActivityLog, Address, Booking, Employee, Hotel, Message, QrStatusResponse, Ride,
    TransportRoute, User, Vehicle,
};
use crate::state::resources::ResourceSlices;
use crate::state::session_state::SessionState;
use crate::state::slice::ResourceSlice;
use crate::utils::constants::STORAGE_KEY_DARK_MODE;
use crate::utils::storage::{load_bool_pref, save_bool_pref};

#[derive(Clone)]
pub struct AppState {
    pub session: SessionState,

    pub routes: ResourceSlices<TransportRoute>,
    pub addresses: ResourceSlices<Address>,
    pub hotels: ResourceSlices<Hotel>,
    pub rides: ResourceSlices<Ride>,
    pub bookings: ResourceSlices<Booking>,
    pub employees: ResourceSlices<Employee>,
    pub vehicles: ResourceSlices<Vehicle>,
    pub messages: ResourceSlices<Message>,
    pub logs: ResourceSlices<ActivityLog>,
    pub users: ResourceSlices<User>,

    /// Estado del handshake QR del gateway de mensajería
    pub qr_status: ResourceSlice<QrStatusResponse>,

    // UI prefs
    pub dark_mode: Rc<RefCell<bool>>,
}

impl AppState {
    /// Crear el estado vacío (sin tocar storage; eso lo hace init)
    pub fn new() -> Self {
        Self {
            session: SessionState::new(),
            routes: ResourceSlices::new("/route"),
            addresses: ResourceSlices::new("/address"),
            hotels: ResourceSlices::new("/hotel"),
            rides: ResourceSlices::new("/ride"),
            bookings: ResourceSlices::new("/booking"),
            employees: ResourceSlices::new("/employee"),
            vehicles: ResourceSlices::new("/vehicle"),
            messages: ResourceSlices::new("/message"),
            logs: ResourceSlices::new("/log"),
            users: ResourceSlices::new("/user"),
            qr_status: ResourceSlice::new(),
            dark_mode: Rc::new(RefCell::new(false)),
        }
    }

    /// Sembrar desde localStorage: preferencias de UI y sesión persistida.
    /// Devuelve true si había una sesión que validar contra el servidor.
    pub fn init(&self) -> bool {
        *self.dark_mode.borrow_mut() = load_bool_pref(STORAGE_KEY_DARK_MODE, false);
        self.session.hydrate()
    }

    /// Establecer dark_mode y persistirlo bajo su propia clave
    pub fn set_dark_mode(&self, enabled: bool) {
        *self.dark_mode.borrow_mut() = enabled;
        save_bool_pref(STORAGE_KEY_DARK_MODE, enabled);
    }

    pub fn dark_mode(&self) -> bool {
        *self.dark_mode.borrow()
    }

    /// Volver todos los slices a su estado inicial y limpiar la sesión
    /// persistida. Las preferencias de UI se conservan.
    pub fn teardown(&self) {
        self.session.clear();
        self.routes.reset_all();
        self.addresses.reset_all();
        self.hotels.reset_all();
        self.rides.reset_all();
        self.bookings.reset_all();
        self.employees.reset_all();
        self.vehicles.reset_all();
        self.messages.reset_all();
        self.logs.reset_all();
        self.users.reset_all();
        self.qr_status.reset();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
