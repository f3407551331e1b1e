/// Clave de localStorage para la sesión autenticada
pub const STORAGE_KEY_SESSION: &str = "bookingAdmin_session";

/// Clave de localStorage para el flag de dark mode
pub const STORAGE_KEY_DARK_MODE: &str = "bookingAdmin_darkMode";

/// Mensaje fijo cuando el servidor no envía un error legible
/// (fallo de red, body no parseable, error de serialización)
pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";
