use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RideStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

/// Trayecto programado sobre una ruta, con vehículo y chofer asignados
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Ride {
    #[serde(rename = "_id")]
    pub id: String,
    /// FK → TransportRoute
    pub route_id: String,
    /// FK → Vehicle
    pub vehicle_id: Option<String>,
    /// FK → Employee (chofer)
    pub driver_id: Option<String>,
    pub departure_time: String,
    pub arrival_time: Option<String>,
    pub price: f64,
    pub seats_available: u32,
    pub status: RideStatus,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RideInput {
    pub route_id: String,
    pub vehicle_id: Option<String>,
    pub driver_id: Option<String>,
    pub departure_time: String,
    pub price: f64,
    pub seats_available: u32,
}
