use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Value exchanged with callers. Strings, numbers, booleans and arrays are supported.
pub type Value = serde_json::Value;

/// Outcome of a best-effort decode of a stored string.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    Parsed(Value),
    Raw(String),
}

impl Decoded {
    pub fn into_value(self) -> Value {
        match self {
            Decoded::Parsed(value) => value,
            Decoded::Raw(raw) => Value::String(raw),
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, Decoded::Parsed(_))
    }
}

/// Construction options. No keys are recognized yet; anything present is kept and ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EngineOptions {
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl EngineOptions {
    pub fn ignored_keys(&self) -> Vec<&str> {
        self.extra.keys().map(String::as_str).collect()
    }
}
