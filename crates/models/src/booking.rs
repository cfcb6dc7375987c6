use mongodb::bson::{oid::ObjectId, Bson, Document};
use serde::{Deserialize, Serialize};

/// A reservation in the `bookings` collection.
///
/// `email` is the list filter and `date` is what `PUT` rewrites. `date` keeps
/// whatever BSON type it was stored with; anything else the caller submits is
/// kept verbatim in `details`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Booking {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Bson>,
    #[serde(flatten)]
    pub details: Document,
}

/// Body of `PUT /bookings/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateBookingDate {
    pub date: String,
}

/// Wire shape: `_id` as hex, details as relaxed extended JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingView {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<serde_json::Value>,
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

impl From<Booking> for BookingView {
    fn from(b: Booking) -> Self {
        let details = match Bson::Document(b.details).into_relaxed_extjson() {
            serde_json::Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };
        Self {
            id: b.id.map(|oid| oid.to_hex()),
            email: b.email,
            date: b.date.map(Bson::into_relaxed_extjson),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};
    use serde_json::json;

    #[test]
    fn caller_document_keeps_extra_fields() -> anyhow::Result<()> {
        let b: Booking = serde_json::from_value(json!({
            "email": "a@x.com",
            "date": "2024-01-01",
            "service_id": "abc",
            "guests": 2
        }))?;
        assert_eq!(b.id, None);
        assert_eq!(b.email.as_deref(), Some("a@x.com"));
        assert_eq!(b.details.get_str("service_id").ok(), Some("abc"));
        assert!(b.details.contains_key("guests"));
        assert!(!b.details.contains_key("email"));
        Ok(())
    }

    #[test]
    fn store_round_trip_through_bson() -> anyhow::Result<()> {
        let oid = ObjectId::new();
        let raw = doc! { "_id": oid, "date": "2024-02-02", "room": "Deluxe" };
        let b: Booking = bson::from_document(raw)?;
        assert_eq!(b.id, Some(oid));
        assert_eq!(b.email, None);
        assert_eq!(b.details, doc! { "room": "Deluxe" });
        Ok(())
    }

    #[test]
    fn non_string_dates_are_kept() -> anyhow::Result<()> {
        let b: Booking = serde_json::from_str(r#"{"email":"a@x.com","date":20240101}"#)?;
        assert_eq!(b.date, Some(Bson::Int32(20240101)));
        let view = serde_json::to_value(BookingView::from(b))?;
        assert_eq!(view["date"], 20240101);

        let when = bson::DateTime::from_millis(1_704_067_200_000);
        let stored: Booking = bson::from_document(doc! { "email": "a@x.com", "date": when })?;
        assert_eq!(stored.date, Some(Bson::DateTime(when)));
        assert_eq!(stored.email.as_deref(), Some("a@x.com"));
        let view = serde_json::to_value(BookingView::from(stored))?;
        assert!(view["date"]["$date"].is_string());
        Ok(())
    }

    #[test]
    fn view_flattens_details() -> anyhow::Result<()> {
        let oid = ObjectId::new();
        let b = Booking {
            id: Some(oid),
            email: Some("a@x.com".into()),
            date: None,
            details: doc! { "guests": 2_i64 },
        };
        let json = serde_json::to_value(BookingView::from(b))?;
        assert_eq!(json, json!({ "_id": oid.to_hex(), "email": "a@x.com", "guests": 2 }));
        Ok(())
    }
}
