use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    #[serde(rename = "_id")]
    pub id: String,
    pub plate_number: String,
    pub model: Option<String>,
    pub capacity: u32,
    /// FK → Employee (chofer asignado)
    pub driver_id: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct VehicleInput {
    pub plate_number: String,
    pub model: Option<String>,
    pub capacity: u32,
    pub driver_id: Option<String>,
}
