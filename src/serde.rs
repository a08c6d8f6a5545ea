//! JSON-deserializable packing inputs.
//!
//! These types describe pack inputs as plain JSON data (for example a
//! message template shipped with your application) and convert into the core
//! [Value] model before matching.
//!
//! Map keys address layout fields by their first character, exactly as
//! string keys do in a hand-built [Value::Map].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::{MapKey, Value};

/// A packing input as it appears in JSON: a bool, an unsigned or signed
/// integer, or a string-keyed map.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(untagged)]
pub enum ValueDef {
    /// Boolean input, packed as 1 or 0.
    Bool(bool),
    /// Non-negative integer input.
    UInt(u64),
    /// Signed integer input.
    Int(i64),
    /// Map input addressing fields by name.
    Map(BTreeMap<String, ValueDef>),
}

impl From<ValueDef> for Value {
    fn from(value: ValueDef) -> Self {
        match value {
            ValueDef::Bool(v) => Value::Bool(v),
            ValueDef::UInt(v) => Value::UInt(v),
            ValueDef::Int(v) => Value::Int(v),
            ValueDef::Map(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (MapKey::Str(key), value.into()))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::ValueMatcher;

    #[test]
    fn test_scalar_defs_from_json() {
        let defs: Vec<ValueDef> = serde_json::from_str("[true, 3, 15]").unwrap();
        let inputs: Vec<Value> = defs.into_iter().map(Into::into).collect();
        let matcher = ValueMatcher::new("1ABBCCCC").unwrap();
        assert_eq!(matcher.pack(&inputs).unwrap(), 255);
    }

    #[test]
    fn test_map_def_from_json() {
        let def: ValueDef = serde_json::from_str(r#"{"a": 1, "b": 0, "c": 1}"#).unwrap();
        let matcher = ValueMatcher::new("ABC").unwrap();
        assert_eq!(matcher.pack(&[def.into()]).unwrap(), 0b101);
    }

    #[test]
    fn test_negative_integer_def() {
        let def: ValueDef = serde_json::from_str("-1").unwrap();
        assert_eq!(Value::from(def), Value::Int(-1));
    }
}
