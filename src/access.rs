use serde_json::Value;

use crate::path::{Path, Segment};

/// Resolve `path` against `root`.
///
/// `None` means the path does not exist, which callers must keep apart
/// from `Some(&Value::Null)`. The root path always resolves to `root`.
pub fn resolve<'a>(root: &'a Value, path: &Path) -> Option<&'a Value> {
    path.segments()
        .iter()
        .try_fold(root, |current, segment| step(current, segment))
}

/// Same as [`resolve`] but tolerates an absent root.
pub fn resolve_in<'a>(root: Option<&'a Value>, path: &Path) -> Option<&'a Value> {
    root.and_then(|root| resolve(root, path))
}

fn step<'a>(current: &'a Value, segment: &Segment) -> Option<&'a Value> {
    match (current, segment) {
        (Value::Object(map), Segment::Key(key)) => map.get(key),
        (Value::Array(items), Segment::Index(index)) => items.get(*index),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;
    use serde_json::json;

    fn fixture() -> Value {
        json!({
            "a": 1,
            "b": { "c": 2, "d": [3, 4, { "e": 5 }] },
            "f": null,
        })
    }

    #[test]
    fn resolves_primitives_and_containers() {
        let data = fixture();
        assert_eq!(resolve(&data, &path!["a"]), Some(&json!(1)));
        assert_eq!(resolve(&data, &path!["b", "d", 2usize, "e"]), Some(&json!(5)));
        assert_eq!(resolve(&data, &path!["b", "d"]), Some(&json!([3, 4, { "e": 5 }])));
    }

    #[test]
    fn missing_is_not_null() {
        let data = fixture();
        assert_eq!(resolve(&data, &path!["f"]), Some(&Value::Null));
        assert_eq!(resolve(&data, &path!["x"]), None);
        assert_eq!(resolve(&data, &path!["a", "x"]), None);
        assert_eq!(resolve(&data, &path!["b", "d", 5usize]), None);
        assert_eq!(resolve(&Value::Null, &path!["a"]), None);
        assert_eq!(resolve(&json!({}), &path!["a"]), None);
    }

    #[test]
    fn segment_kind_must_match_container() {
        let object = json!({ "0": "zero" });
        let array = json!(["zero"]);
        assert_eq!(resolve(&object, &path![0usize]), None);
        assert_eq!(resolve(&array, &path!["0"]), None);
        assert_eq!(resolve(&object, &path!["0"]), Some(&json!("zero")));
    }

    #[test]
    fn root_path_returns_root() {
        let data = fixture();
        assert_eq!(resolve(&data, &Path::root()), Some(&data));
        assert_eq!(resolve(&json!(123), &Path::root()), Some(&json!(123)));
        assert_eq!(resolve_in(None, &Path::root()), None);
    }
}
