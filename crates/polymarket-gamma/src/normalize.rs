//! Stringified-array normalization
//!
//! Gamma serializes a few market fields as JSON text instead of arrays,
//! e.g. `"outcomes": "[\"Yes\", \"No\"]"`, and spells them in both snake_case
//! and camelCase depending on the endpoint. [`normalize`] walks any decoded
//! payload and parses those fields in place.
//!
//! Only the keys in [`STRINGIFIED_ARRAY_FIELDS`] are touched. Unrelated strings
//! that happen to start with `[` (questions, descriptions) are left alone.

use serde_json::Value;

/// Keys whose string values may hold a JSON-encoded array
pub const STRINGIFIED_ARRAY_FIELDS: &[&str] = &[
    "outcomes",
    "outcome_prices",
    "outcomePrices",
    "clob_token_ids",
    "clobTokenIds",
    "uma_resolution_statuses",
    "umaResolutionStatuses",
];

pub fn is_stringified_array_field(key: &str) -> bool {
    STRINGIFIED_ARRAY_FIELDS.contains(&key)
}

/// Normalize an owned payload. Never fails.
pub fn normalize(mut value: Value) -> Value {
    normalize_in_place(&mut value);
    value
}

/// Normalize a payload in place. Never fails.
pub fn normalize_in_place(value: &mut Value) {
    match value {
        Value::Array(items) => items.iter_mut().for_each(normalize_in_place),
        Value::Object(map) => {
            for (key, field) in map.iter_mut() {
                if is_stringified_array_field(key) {
                    decode_field(field);
                } else {
                    normalize_in_place(field);
                }
            }
        }
        _ => {}
    }
}

/// Replace a `"[...]"` string with its parsed form; keep the string if it
/// does not parse.
fn decode_field(field: &mut Value) {
    let Value::String(raw) = field else {
        return;
    };
    if !raw.starts_with('[') {
        return;
    }
    if let Ok(parsed) = serde_json::from_str::<Value>(raw) {
        *field = parsed;
    }
}
