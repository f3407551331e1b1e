use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageStatus {
    Queued,
    Sent,
    Failed,
}

/// Mensaje saliente hacia un cliente (gateway de WhatsApp)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(rename = "_id")]
    pub id: String,
    pub recipient_phone: String,
    pub body: String,
    pub status: MessageStatus,
    pub sent_at: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MessageInput {
    pub recipient_phone: String,
    pub body: String,
}

/// Estado del handshake QR del gateway de mensajería.
/// `qr` trae el código a renderizar mientras `connected` sea false.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct QrStatusResponse {
    #[serde(default)]
    pub is_success: bool,
    #[serde(default)]
    pub connected: bool,
    #[serde(default)]
    pub qr: Option<String>,
}
