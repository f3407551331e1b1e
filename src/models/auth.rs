use serde::{Deserialize, Serialize};

/// Rol del usuario autenticado (valores en mayúsculas en el wire)
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Manager,
    Employee,
}

/// Resumen del usuario devuelto por login y who-am-i
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub role: Role,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub phone: String,
    pub password: String,
}

/// Respuesta completa del login. Es también el payload del slice de sesión
/// y el objeto persistido tal cual en localStorage.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub is_success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserSummary>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Respuesta del endpoint who-am-i (refresh del perfil cacheado)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct WhoAmIResponse {
    #[serde(default)]
    pub is_success: bool,
    #[serde(default)]
    pub user: Option<UserSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_parses_wire_shape() {
        let json = r#"{"isSuccess":true,"token":"abc","user":{"id":"1","name":"A","role":"ADMIN"}}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert!(response.is_success);
        assert_eq!(response.token.as_deref(), Some("abc"));
        let user = response.user.unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(user.role, Role::Admin);
    }

    #[test]
    fn role_round_trips_in_uppercase() {
        assert_eq!(serde_json::to_string(&Role::Manager).unwrap(), "\"MANAGER\"");
        let role: Role = serde_json::from_str("\"EMPLOYEE\"").unwrap();
        assert_eq!(role, Role::Employee);
    }

    #[test]
    fn empty_login_response_is_the_empty_object() {
        let empty = LoginResponse::default();
        assert!(!empty.is_success);
        assert!(empty.token.is_none());
        assert!(empty.user.is_none());
    }
}
