// ============================================================================
// STORAGE - Helpers de localStorage (JSON via serde)
// ============================================================================

use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Guardar un valor serializable bajo una clave fija
pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    let json = serde_json::to_string(value)
        .map_err(|e| format!("Error serializando datos: {}", e))?;
    storage
        .set_item(key, &json)
        .map_err(|_| "Error guardando en localStorage".to_string())?;
    Ok(())
}

/// Cargar un valor previamente guardado; None si no existe o no parsea
pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = get_local_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

pub fn remove_from_storage(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .remove_item(key)
        .map_err(|_| "Error eliminando de localStorage".to_string())?;
    Ok(())
}

/// Cargar preferencia booleana desde localStorage (valor plano, no JSON)
pub fn load_bool_pref(key: &str, default: bool) -> bool {
    if let Some(storage) = get_local_storage() {
        if let Ok(Some(value)) = storage.get_item(key) {
            return value == "true";
        }
    }
    default
}

/// Guardar preferencia booleana en localStorage
pub fn save_bool_pref(key: &str, value: bool) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(key, &value.to_string());
    }
}
