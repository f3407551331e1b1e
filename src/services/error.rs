// ============================================================================
// API ERROR - Taxonomía de fallos de una llamada HTTP
// ============================================================================

use thiserror::Error;

use crate::utils::constants::DEFAULT_ERROR_MESSAGE;

/// Fallo de una llamada al backend. Solo el caso `Http` con mensaje del
/// servidor llega al usuario tal cual; el resto colapsa en el mensaje fijo.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// Non-2xx; `message` viene del body de error si fue parseable
    #[error("HTTP {status}")]
    Http { status: u16, message: Option<String> },

    /// Fallo de transporte (sin respuesta del servidor)
    #[error("network error: {0}")]
    Network(String),

    /// Respuesta 2xx cuyo body no decodificó al tipo esperado
    #[error("parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// Mensaje que ve el usuario: el del servidor si existe, el fijo si no.
    /// No se distingue 4xx de 5xx a este nivel.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http {
                message: Some(msg), ..
            } if !msg.is_empty() => msg.clone(),
            _ => DEFAULT_ERROR_MESSAGE.to_string(),
        }
    }
}
