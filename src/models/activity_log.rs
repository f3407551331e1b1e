use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Entrada del log de actividad (solo lectura, el backend la genera)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    #[serde(rename = "_id")]
    pub id: String,
    /// FK → User que ejecutó la acción
    pub user_id: Option<String>,
    pub action: String,
    pub entity: Option<String>,
    pub entity_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_entry_parses_rfc3339_timestamp() {
        let json = r#"{"_id":"l1","userId":"u1","action":"DELETE","entity":"booking","entityId":"b9","createdAt":"2026-02-01T10:30:00Z"}"#;
        let entry: ActivityLog = serde_json::from_str(json).unwrap();
        assert_eq!(entry.action, "DELETE");
        assert_eq!(entry.created_at.timestamp(), 1769941800);
    }
}
