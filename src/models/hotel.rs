use serde::{Deserialize, Serialize};

/// Hotel asociado a una dirección y a un empleado que lo reservó
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// FK → Address
    pub address_id: String,
    /// FK → Employee que hizo la reserva
    pub booker_id: Option<String>,
    pub phone: Option<String>,
    pub stars: Option<u8>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct HotelInput {
    pub name: String,
    pub address_id: String,
    pub booker_id: Option<String>,
    pub phone: Option<String>,
    pub stars: Option<u8>,
}
