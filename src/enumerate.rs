use serde_json::Value;

use crate::path::{Path, PathSet};

/// Every addressable path below `root`: containers and primitives reached
/// through at least one segment. The root path itself is never a member,
/// so a primitive or empty container at the root yields an empty set.
pub fn enumerate_paths(root: &Value) -> PathSet {
    paths_below(root, &Path::root())
}

fn paths_below(value: &Value, at: &Path) -> PathSet {
    let children: Vec<(Path, &Value)> = match value {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| (at.index(index), item))
            .collect(),
        Value::Object(map) => map
            .iter()
            .map(|(key, item)| (at.key(key.as_str()), item))
            .collect(),
        _ => return PathSet::new(),
    };
    children.into_iter().fold(PathSet::new(), |mut acc, (path, item)| {
        let below = paths_below(item, &path);
        acc.insert(path);
        acc.extend(below);
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;
    use serde_json::json;

    fn set(paths: impl IntoIterator<Item = Path>) -> PathSet {
        paths.into_iter().collect()
    }

    #[test]
    fn empty_containers_and_primitives_yield_nothing() {
        for v in [json!({}), json!([]), json!(123), json!("hello"), json!(null), json!(true)] {
            assert!(enumerate_paths(&v).is_empty(), "{v}");
        }
    }

    #[test]
    fn flat_object_and_array() {
        assert_eq!(enumerate_paths(&json!({"a": 1, "b": "text"})), set([path!["a"], path!["b"]]));
        assert_eq!(enumerate_paths(&json!([1, "text"])), set([path![0usize], path![1usize]]));
    }

    #[test]
    fn nested_containers_include_their_own_path() {
        let data = json!({"a": [1, {"b": 2}], "c": {}});
        let expected = set([
            path!["a"],
            path!["a", 0usize],
            path!["a", 1usize],
            path!["a", 1usize, "b"],
            path!["c"],
        ]);
        assert_eq!(enumerate_paths(&data), expected);
    }

    #[test]
    fn construction_order_is_depth_first() {
        let data = json!({"x": {"y": 1}, "z": 2});
        let order: Vec<String> = enumerate_paths(&data).iter().map(Path::to_string).collect();
        assert_eq!(order, ["/x", "/x/y", "/z"]);
    }

    #[test]
    fn dotted_keys_stay_distinct() {
        let data = json!({"a": {"b": 1}, "a.b": 2});
        assert_eq!(enumerate_paths(&data).len(), 3);
    }

    #[test]
    fn deterministic() {
        let data = json!({"k": [[1, 2], {"m": null}]});
        assert_eq!(enumerate_paths(&data), enumerate_paths(&data.clone()));
    }
}
