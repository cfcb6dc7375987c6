use mongodb::bson::{oid::ObjectId, Bson, Document};
use serde::{Deserialize, Serialize};

use crate::field::FieldValue;

/// A room offering in the `services` collection. Read-only from the API.
///
/// Records are written out-of-band with no fixed schema. Only `availability`
/// is read here, as the sort key; every other field rides along in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Service {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<FieldValue>,
    #[serde(flatten)]
    pub extra: Document,
}

/// Wire shape: `_id` as hex, every other field as relaxed extended JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceView {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl From<Service> for ServiceView {
    fn from(s: Service) -> Self {
        let mut doc = s.extra;
        if let Some(availability) = s.availability {
            doc.insert("availability", Bson::from(availability));
        }
        let fields = match Bson::Document(doc).into_relaxed_extjson() {
            serde_json::Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };
        Self { id: s.id.map(|oid| oid.to_hex()), fields }
    }
}
