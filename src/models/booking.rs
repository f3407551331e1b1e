use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

/// Reserva de asientos de un cliente en un trayecto
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id")]
    pub id: String,
    /// FK → Ride (que a su vez referencia la TransportRoute)
    pub ride_id: String,
    /// FK → User (cliente)
    pub customer_id: String,
    pub seats: u32,
    pub total_price: f64,
    pub status: BookingStatus,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BookingInput {
    pub ride_id: String,
    pub customer_id: String,
    pub seats: u32,
}
