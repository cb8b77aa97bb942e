//! Bridge between `serde_json::Value` and the canonical `Value` tree.

use crate::mapping::Mapping;
use crate::record::{Record, ToValue};
use crate::value::Value;

// ═══════════════════════════════════════════════════════════════
//  JSON → Value
// ═══════════════════════════════════════════════════════════════

impl ToValue for serde_json::Value {
    fn to_value(&self) -> Value {
        match self {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => number_to_value(n),
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(items) => {
                Value::Array(items.iter().map(ToValue::to_value).collect())
            }
            serde_json::Value::Object(map) => Value::Map(Record::flatten(map)),
        }
    }
}

/// A JSON object is a record whose fields are its keys.
impl Record for serde_json::Map<String, serde_json::Value> {
    fn flatten(&self) -> Mapping {
        self.iter().map(|(k, v)| (k.clone(), v.to_value())).collect()
    }
}

fn number_to_value(n: &serde_json::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Int64(i)
    } else if let Some(u) = n.as_u64() {
        Value::UInt64(u)
    } else if let Some(f) = n.as_f64() {
        Value::Float64(f)
    } else {
        Value::Null
    }
}

// ═══════════════════════════════════════════════════════════════
//  Value → JSON
// ═══════════════════════════════════════════════════════════════

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int64(i) => serde_json::json!(i),
            Value::UInt64(u) => serde_json::json!(u),
            // NaN and infinities have no JSON form.
            Value::Float64(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Bytes(b) => {
                serde_json::Value::Array(b.iter().map(|byte| serde_json::json!(byte)).collect())
            }
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            Value::Map(map) => serde_json::Value::from(map),
        }
    }
}

impl From<&Mapping> for serde_json::Value {
    fn from(map: &Mapping) -> Self {
        serde_json::Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), serde_json::Value::from(v)))
                .collect(),
        )
    }
}
