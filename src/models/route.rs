use serde::{Deserialize, Serialize};

/// Ruta comercial (origen → destino) sobre la que se programan trayectos
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TransportRoute {
    #[serde(rename = "_id")]
    pub id: String,
    pub origin: String,
    pub destination: String,
    pub distance_km: Option<f64>,
    pub duration_minutes: Option<u32>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TransportRouteInput {
    pub origin: String,
    pub destination: String,
    pub distance_km: Option<f64>,
    pub duration_minutes: Option<u32>,
}
