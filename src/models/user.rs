use serde::{Deserialize, Serialize};

use crate::models::auth::Role;

/// Usuario completo (pantalla de gestión de cuentas)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub phone: String,
    pub role: Role,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    pub name: String,
    pub phone: String,
    pub role: Role,
    pub password: Option<String>,
}
