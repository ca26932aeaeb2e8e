//! Query-string construction
//!
//! Parameter sets are plain `Serialize` structs. They are flattened into
//! `(key, value)` pairs:
//! - `None` / `null` / empty strings are dropped entirely
//! - sequences become one pair per element, same key, original order
//! - everything else renders as its JSON scalar spelling

use serde::Serialize;
use serde_json::Value;

use crate::error::{GammaError, Result};

/// Ordered query pairs, repeated keys allowed
pub type QueryPairs = Vec<(String, String)>;

/// Flatten a parameter set into query pairs.
///
/// Accepts any struct or map that serializes to a JSON object; `()` and
/// `None` produce no pairs.
pub fn to_query_pairs<P: Serialize + ?Sized>(params: &P) -> Result<QueryPairs> {
    let value = serde_json::to_value(params).map_err(GammaError::Encode)?;
    Ok(value_to_pairs(&value))
}

fn value_to_pairs(value: &Value) -> QueryPairs {
    let mut pairs = QueryPairs::new();

    let Value::Object(map) = value else {
        return pairs;
    };

    for (key, value) in map {
        match value {
            Value::Array(items) => {
                for item in items {
                    if let Some(rendered) = render_scalar(item) {
                        pairs.push((key.clone(), rendered));
                    }
                }
            }
            other => {
                if let Some(rendered) = render_scalar(other) {
                    pairs.push((key.clone(), rendered));
                }
            }
        }
    }

    pairs
}

fn render_scalar(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        // Nested structures have no query-string form; send them as JSON text
        nested => Some(nested.to_string()),
    }
}
