use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{FeedId, SlaId};

const FEED_ID_FIELD: &str = "feedId";
const SLA_ID_FIELD: &str = "id";

/// Service level agreement attached to a feed.
///
/// The payload is kept as the raw JSON the server exchanges; only the owning
/// feed (`feedId`) and, once persisted, the identifier (`id`) are ever looked
/// at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceLevelAgreement(Value);

impl ServiceLevelAgreement {
    pub fn new(payload: Value) -> Self { Self(payload) }

    /// Raw `feedId` field, if it is a string.
    pub fn raw_feed_id(&self) -> Option<&str> {
        self.0.get(FEED_ID_FIELD).and_then(Value::as_str)
    }

    pub fn feed_id(&self) -> Option<FeedId> {
        self.raw_feed_id().and_then(|id| id.parse().ok())
    }

    pub fn sla_id(&self) -> Option<SlaId> {
        self.0
            .get(SLA_ID_FIELD)
            .and_then(Value::as_str)
            .and_then(|id| id.parse().ok())
    }

    pub fn payload(&self) -> &Value { &self.0 }
}

impl From<Value> for ServiceLevelAgreement {
    fn from(payload: Value) -> Self { Self(payload) }
}

/// A metric the server can monitor for an SLA, as listed by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricOption(pub Value);

/// An action (responder) the server can trigger when an SLA is violated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionOption(pub Value);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identifiers_are_read_from_payload() {
        let sla = ServiceLevelAgreement::new(json!({
            "id": "sla-1",
            "feedId": "f1",
            "name": "daily",
            "rules": [{"name": "on time"}]
        }));
        assert_eq!(sla.feed_id().unwrap().as_str(), "f1");
        assert_eq!(sla.sla_id().unwrap().as_str(), "sla-1");
    }

    #[test]
    fn test_missing_or_malformed_identifiers() {
        let sla = ServiceLevelAgreement::new(json!({"feedId": 3}));
        assert!(sla.feed_id().is_none());
        assert!(sla.raw_feed_id().is_none());
        assert!(sla.sla_id().is_none());

        let sla = ServiceLevelAgreement::new(json!({"feedId": ""}));
        assert_eq!(sla.raw_feed_id(), Some(""));
        assert!(sla.feed_id().is_none());
    }

    #[test]
    fn test_payload_is_serialized_untouched() {
        let payload = json!({"feedId": "f1", "nested": {"a": [1, 2, null]}});
        let sla = ServiceLevelAgreement::new(payload.clone());
        assert_eq!(serde_json::to_value(&sla).unwrap(), payload);
    }
}
