//! Case-insensitive substring search over object keys and primitive values.
use indexmap::IndexSet;
use serde_json::{Number, Value};

use crate::path::Path;

/// Paths whose key or primitive value contains `query`, ignoring case.
///
/// Array indices are never matched and `null` values are not searchable.
/// Each path is reported once, in depth-first order of first match.
pub fn search(root: &Value, query: &str) -> Vec<Path> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    let hits = search_below(root, &Path::root(), &needle);
    log::trace!("search for {query:?} matched {} path(s)", hits.len());
    hits.into_iter().collect()
}

fn search_below(value: &Value, at: &Path, needle: &str) -> IndexSet<Path> {
    match value {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .fold(IndexSet::new(), |mut acc, (index, item)| {
                let path = at.index(index);
                if item.is_array() || item.is_object() {
                    acc.extend(search_below(item, &path, needle));
                } else if primitive_matches(item, needle) {
                    acc.insert(path);
                }
                acc
            }),
        Value::Object(map) => map.iter().fold(IndexSet::new(), |mut acc, (key, item)| {
            let path = at.key(key.as_str());
            if key.to_lowercase().contains(needle) {
                acc.insert(path.clone());
            }
            if item.is_array() || item.is_object() {
                acc.extend(search_below(item, &path, needle));
            } else if primitive_matches(item, needle) {
                acc.insert(path);
            }
            acc
        }),
        _ => IndexSet::new(),
    }
}

fn primitive_matches(value: &Value, needle: &str) -> bool {
    let text = match value {
        Value::String(s) => s.to_lowercase(),
        Value::Number(n) => number_text(n),
        Value::Bool(b) => b.to_string(),
        _ => return false,
    };
    text.contains(needle)
}

/// Integral floats below 1e21 drop the fraction (`1.0` is `1`, `-0.0` is
/// `0`); everything else keeps serde_json's text (`1e+21`).
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f == 0.0 => "0".to_owned(),
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        _ => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(json!(null) ; "null root")]
    #[test_case(json!({}) ; "empty object")]
    #[test_case(json!([]) ; "empty array")]
    #[test_case(json!("test") ; "primitive root")]
    fn nothing_to_find(root: Value) {
        assert!(search(&root, "test").is_empty());
    }

    #[test]
    fn empty_query_matches_nothing() {
        assert!(search(&json!({"name": "John Doe", "age": 30}), "").is_empty());
    }

    #[test]
    fn root_level_key() {
        assert_eq!(search(&json!({"name": "John", "age": 30}), "name"), [path!["name"]]);
    }

    #[test]
    fn nested_keys() {
        let data = json!({"user": {"name": "Jane Doe", "id": "123"}});
        assert_eq!(search(&data, "name"), [path!["user", "name"]]);
    }

    #[test]
    fn keys_inside_arrays_of_objects() {
        let data = json!({"users": [{"name": "First"}, {"name": "Second"}]});
        assert_eq!(
            search(&data, "name"),
            [path!["users", 0usize, "name"], path!["users", 1usize, "name"]]
        );
    }

    #[test]
    fn array_indices_are_not_searched() {
        let data = json!(["first", "second", "0"]);
        assert_eq!(search(&data, "0"), [path![2usize]]);
        assert!(search(&json!(["a", "b"]), "1").is_empty());
    }

    #[test_case(json!({"city": "New York"}), "New York", path!["city"] ; "string value")]
    #[test_case(json!({"quantity": 100}), "100", path!["quantity"] ; "number value")]
    #[test_case(json!({"isActive": true}), "true", path!["isActive"] ; "boolean value")]
    #[test_case(json!({"UserName": "user123"}), "username", path!["UserName"] ; "key ignores case")]
    #[test_case(json!({"status": "Completed"}), "completed", path!["status"] ; "value ignores case")]
    #[test_case(json!({"employeeId": "emp001"}), "Id", path!["employeeId"] ; "partial key")]
    #[test_case(json!({"description": "This is a sample text."}), "sample", path!["description"] ; "partial value")]
    fn single_match(data: Value, query: &str, expected: Path) {
        assert_eq!(search(&data, query), [expected]);
    }

    #[test]
    fn integral_floats_search_without_fraction() {
        let data = json!({"v": 1.0, "w": 1e21, "z": 100, "n": -0.0, "big": 1e20});
        assert_eq!(search(&data, "0"), [path!["z"], path!["n"], path!["big"]]);
        assert!(search(&data, "1.0").is_empty());
        assert!(search(&data, "-0").is_empty());
        assert_eq!(search(&data, "e+21"), [path!["w"]]);
        assert_eq!(search(&json!({"v": 1.0}), "1"), [path!["v"]]);
    }

    #[test]
    fn no_match() {
        assert!(search(&json!({"a": 1, "b": "text"}), "nonexistent").is_empty());
    }

    #[test]
    fn key_and_value_match_once() {
        assert_eq!(search(&json!({"name": "name"}), "name"), [path!["name"]]);
    }

    #[test]
    fn null_values_are_skipped() {
        assert!(search(&json!({"a": null, "b": [null]}), "null").is_empty());
    }

    #[test]
    fn container_key_match_and_children() {
        let data = json!({"items": {"item_a": 1, "other": "item"}});
        assert_eq!(
            search(&data, "item"),
            [path!["items"], path!["items", "item_a"], path!["items", "other"]]
        );
    }

    #[test]
    fn fractional_and_negative_numbers() {
        assert_eq!(search(&json!({"v": 2.5}), "2.5"), [path!["v"]]);
        assert_eq!(search(&json!({"v": -7}), "-7"), [path!["v"]]);
    }
}
