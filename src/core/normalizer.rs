use crate::domain::model::{Decoded, Value};
use crate::utils::error::{Result, StoreError};

/// Deepest array/object nesting accepted on write; stays below the decoder's recursion limit.
pub const MAX_NESTING_DEPTH: usize = 100;

/// Decodes a stored string as a JSON literal, falling back to the raw string.
///
/// Strings that happen to be literals (`"42"`, `"true"`, `"null"`) come back decoded,
/// so a stored `"true"` cannot be told apart from a stored `true`.
pub fn decode_on_read(raw: &str) -> Decoded {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => Decoded::Parsed(value),
        Err(_) => Decoded::Raw(raw.to_string()),
    }
}

/// Turns a caller value into the string form handed to the host store.
///
/// Arrays are JSON-encoded, strings pass through, and scalars take the text a
/// host coerces them to. Objects, and arrays too deep to decode again, are rejected.
pub fn encode_on_write(value: &Value) -> Result<String> {
    match value {
        Value::Array(_) => {
            let depth = nesting_depth(value);
            if depth > MAX_NESTING_DEPTH {
                return Err(StoreError::UnsupportedValue {
                    kind: format!(
                        "array nested {} levels deep (max {})",
                        depth, MAX_NESTING_DEPTH
                    ),
                });
            }
            Ok(serde_json::to_string(value)?)
        }
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok("null".to_string()),
        Value::Object(_) => Err(StoreError::UnsupportedValue {
            kind: "object".to_string(),
        }),
    }
}

fn nesting_depth(value: &Value) -> usize {
    let mut max = 0;
    let mut stack = vec![(value, 1)];
    while let Some((value, depth)) = stack.pop() {
        match value {
            Value::Array(items) => stack.extend(items.iter().map(|child| (child, depth + 1))),
            Value::Object(map) => stack.extend(map.values().map(|child| (child, depth + 1))),
            _ => continue,
        }
        max = max.max(depth);
    }
    max
}
