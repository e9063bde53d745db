//! Student Models
//!
//! Data structures matching the backend's JSON (camelCase field names).

use serde::{Deserialize, Deserializer, Serialize};

/// Backend-assigned record identifier
pub type StudentId = i64;

/// A student record confirmed by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: StudentId,
    pub name: String,
    pub room_number: String,
    /// Older rows may carry a number or null here
    #[serde(default, deserialize_with = "mobile_number_from_json")]
    pub mobile_number: String,
    pub fee_amount: f64,
    pub fee_paid: bool,
}

/// Record values before the backend has assigned an id.
///
/// This is the request body for both create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDraft {
    pub name: String,
    pub room_number: String,
    pub mobile_number: String,
    pub fee_amount: f64,
    pub fee_paid: bool,
}

impl StudentDraft {
    /// Attach a backend-assigned id
    pub fn into_record(self, id: StudentId) -> StudentRecord {
        StudentRecord {
            id,
            name: self.name,
            room_number: self.room_number,
            mobile_number: self.mobile_number,
            fee_amount: self.fee_amount,
            fee_paid: self.fee_paid,
        }
    }
}

fn mobile_number_from_json<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}
