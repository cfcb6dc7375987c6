use std::cmp::Ordering;

use mongodb::bson::Bson;
use serde::{Deserialize, Serialize};

/// A column that holds numbers in some documents and text or flags in others.
/// Anything else the store holds is carried as raw BSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Other(Bson),
}

impl FieldValue {
    /// Type bracket in the store's cross-type sort order.
    fn bracket(&self) -> u8 {
        match self {
            FieldValue::Integer(_) | FieldValue::Float(_) => 2,
            FieldValue::Text(_) => 3,
            FieldValue::Flag(_) => 8,
            FieldValue::Other(b) => match b {
                Bson::MinKey => 0,
                Bson::Null | Bson::Undefined => 1,
                Bson::Int32(_) | Bson::Int64(_) | Bson::Double(_) | Bson::Decimal128(_) => 2,
                Bson::String(_) | Bson::Symbol(_) => 3,
                Bson::Document(_) => 4,
                Bson::Array(_) => 5,
                Bson::Binary(_) => 6,
                Bson::ObjectId(_) => 7,
                Bson::Boolean(_) => 8,
                Bson::DateTime(_) => 9,
                Bson::Timestamp(_) => 10,
                Bson::RegularExpression(_) => 11,
                Bson::MaxKey => 13,
                _ => 12,
            },
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            FieldValue::Other(Bson::Int32(i)) => Some(f64::from(*i)),
            FieldValue::Other(Bson::Int64(i)) => Some(*i as f64),
            FieldValue::Other(Bson::Double(f)) => Some(*f),
            _ => None,
        }
    }
}

impl From<FieldValue> for Bson {
    fn from(v: FieldValue) -> Self {
        match v {
            FieldValue::Flag(b) => Bson::Boolean(b),
            FieldValue::Integer(i) => Bson::Int64(i),
            FieldValue::Float(f) => Bson::Double(f),
            FieldValue::Text(s) => Bson::String(s),
            FieldValue::Other(b) => b,
        }
    }
}

/// Compare two optional values the way the document store orders a sort key.
/// A missing field sorts with null.
pub fn cmp_store_order(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
    let by_bracket = a.map_or(1, FieldValue::bracket).cmp(&b.map_or(1, FieldValue::bracket));
    if by_bracket != Ordering::Equal {
        return by_bracket;
    }
    let (Some(x), Some(y)) = (a, b) else {
        return Ordering::Equal;
    };
    match (x, y) {
        (FieldValue::Integer(i), FieldValue::Integer(j)) => i.cmp(j),
        (FieldValue::Text(s), FieldValue::Text(t)) => s.as_bytes().cmp(t.as_bytes()),
        (FieldValue::Flag(p), FieldValue::Flag(q)) => p.cmp(q),
        (FieldValue::Other(Bson::DateTime(p)), FieldValue::Other(Bson::DateTime(q))) => p.cmp(q),
        _ => match (x.as_f64(), y.as_f64()) {
            (Some(f), Some(g)) => f.partial_cmp(&g).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        },
    }
}
