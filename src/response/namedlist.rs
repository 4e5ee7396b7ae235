//! Decoding for Solr's `NamedList` wire representation.
//!
//! Depending on the `json.nl` request parameter, Solr writes an ordered
//! key/value list as one of three shapes:
//!
//! - `flat`: `["key1", v1, "key2", v2, ...]`, alternating positions
//! - `map` (default): `{"key1": v1, "key2": v2}`, which loses ordering
//! - `arrarr`: `[["key1", v1], ["key2", v2]]`
//!
//! Parsers in this crate always go through [`named_list_pairs`] so that any
//! of the three shapes decodes to the same ordered pair list.

use serde_json::Value;

/// Decode a NamedList in any of its wire shapes into ordered pairs.
///
/// Unrecognized shapes (scalars, odd trailing entries in a flat list, array
/// entries that are not two-element pairs) are skipped rather than treated as
/// errors; Solr responses are loosely typed and a tolerant read is the
/// contract here.
pub fn named_list_pairs(value: &Value) -> Vec<(String, Value)> {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
        Value::Array(items) => {
            if items.iter().all(is_pair_entry) && !items.is_empty() {
                // arrarr form
                items
                    .iter()
                    .filter_map(|entry| {
                        let pair = entry.as_array()?;
                        let key = pair.first()?.as_str()?;
                        Some((key.to_string(), pair.get(1).cloned().unwrap_or(Value::Null)))
                    })
                    .collect()
            } else {
                // flat form: alternating key/value
                items
                    .chunks_exact(2)
                    .filter_map(|pair| {
                        let key = pair[0].as_str()?;
                        Some((key.to_string(), pair[1].clone()))
                    })
                    .collect()
            }
        }
        _ => Vec::new(),
    }
}

fn is_pair_entry(value: &Value) -> bool {
    value.as_array().map(|a| a.len() == 2).unwrap_or(false)
}

/// Read a float, accepting Solr's `"NaN"` / `"Infinity"` / `"-Infinity"`
/// string sentinels used by the stats component.
pub fn lenient_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => match s.as_str() {
            "NaN" => Some(f64::NAN),
            "Infinity" => Some(f64::INFINITY),
            "-Infinity" => Some(f64::NEG_INFINITY),
            other => other.parse().ok(),
        },
        _ => None,
    }
}

/// Read an unsigned count, tolerating string-encoded numbers.
pub fn lenient_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}
