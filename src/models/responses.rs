use serde::{Deserialize, Serialize};

/// Página de entidades devuelta por los endpoints de listado
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    #[serde(default)]
    pub is_success: bool,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// Total de registros en el servidor (no solo los de esta página)
    #[serde(default)]
    pub total: Option<u64>,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            is_success: false,
            data: Vec::new(),
            total: None,
        }
    }
}

/// Entidad única devuelta por get-by-id
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DetailResponse<T> {
    #[serde(default)]
    pub is_success: bool,
    #[serde(default = "default_none")]
    pub data: Option<T>,
}

fn default_none<T>() -> Option<T> {
    None
}

impl<T> Default for DetailResponse<T> {
    fn default() -> Self {
        Self {
            is_success: false,
            data: None,
        }
    }
}

/// Resultado de create/update/delete
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct MutationResponse {
    #[serde(default)]
    pub is_success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body de error que puede devolver el servidor en un non-2xx
#[derive(Clone, PartialEq, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Mensaje legible si el servidor envió alguno. Un `message` presente
    /// pero vacío no tapa un `error` usable.
    pub fn into_message(self) -> Option<String> {
        fn non_empty(m: String) -> Option<String> {
            if m.is_empty() {
                None
            } else {
                Some(m)
            }
        }
        self.message
            .and_then(non_empty)
            .or_else(|| self.error.and_then(non_empty))
    }
}

/// Respuesta del health check del backend (pantalla de registro)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    #[serde(default)]
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_prefers_message_over_error() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"message":"Phone already taken","error":"E11000"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Phone already taken"));
    }

    #[test]
    fn error_body_falls_back_to_error_field() {
        let body: ErrorBody = serde_json::from_str(r#"{"error":"forbidden"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("forbidden"));
    }

    #[test]
    fn empty_message_does_not_mask_the_error_field() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"message":"","error":"forbidden"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("forbidden"));
    }

    #[test]
    fn empty_error_body_yields_no_message() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.into_message(), None);
    }

    #[test]
    fn default_list_response_is_the_empty_object() {
        let empty: ListResponse<String> = ListResponse::default();
        assert!(!empty.is_success);
        assert!(empty.data.is_empty());
        assert_eq!(empty.total, None);
    }
}
