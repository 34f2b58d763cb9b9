//! Verified event payloads

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A webhook body whose signature has been verified.
///
/// The body is kept exactly as decoded; nothing here checks it against the
/// Seam event schema. Callers that want a concrete type use
/// [`SeamEvent::deserialize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeamEvent(Value);

impl SeamEvent {
    /// e.g. `"lock.unlocked"`
    pub fn event_type(&self) -> Option<&str> {
        self.str_field("event_type")
    }

    pub fn event_id(&self) -> Option<&str> {
        self.str_field("event_id")
    }

    pub fn workspace_id(&self) -> Option<&str> {
        self.str_field("workspace_id")
    }

    /// When the underlying action happened, if present and well-formed
    pub fn occurred_at(&self) -> Option<DateTime<Utc>> {
        self.str_field("occurred_at")
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Decode into a caller-defined event type
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.0)
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

impl From<Value> for SeamEvent {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl PartialEq<Value> for SeamEvent {
    fn eq(&self, other: &Value) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn lock_unlocked() -> SeamEvent {
        SeamEvent::from(json!({
            "event_id": "9f7a2c4e-1d3b-4b8e-9a55-0c1e2f3a4b5c",
            "event_type": "lock.unlocked",
            "workspace_id": "ws_123",
            "device_id": "dev_456",
            "occurred_at": "2026-03-01T12:30:00.000Z",
        }))
    }

    #[test]
    fn test_accessors() {
        let event = lock_unlocked();
        assert_eq!(event.event_type(), Some("lock.unlocked"));
        assert_eq!(event.event_id(), Some("9f7a2c4e-1d3b-4b8e-9a55-0c1e2f3a4b5c"));
        assert_eq!(event.workspace_id(), Some("ws_123"));
        assert_eq!(
            event.occurred_at(),
            Some(Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_accessors_on_foreign_shape() {
        let event = SeamEvent::from(json!(["not", "an", "object"]));
        assert_eq!(event.event_type(), None);
        assert_eq!(event.occurred_at(), None);
    }

    #[test]
    fn test_deserialize_into_caller_type() {
        #[derive(Deserialize)]
        struct DeviceEvent {
            event_type: String,
            device_id: String,
        }

        let typed: DeviceEvent = lock_unlocked().deserialize().unwrap();
        assert_eq!(typed.event_type, "lock.unlocked");
        assert_eq!(typed.device_id, "dev_456");
    }

    #[test]
    fn test_serializes_transparently() {
        let body = json!({"type": "door.opened"});
        let event = SeamEvent::from(body.clone());
        assert_eq!(serde_json::to_value(&event).unwrap(), body);
    }
}
