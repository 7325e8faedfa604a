//! Deep structural equality over JSON values.
//!
//! Object key order is ignored, array order is not. Numbers compare by
//! numeric value (`1 == 1.0`), never against their string form.
use serde_json::{Map, Number, Value};

pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| deep_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => objects_equal(xs, ys),
        _ => false,
    }
}

/// Equality over possibly-absent values. Absent only equals absent.
pub fn resolved_equal(a: Option<&Value>, b: Option<&Value>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => deep_equal(a, b),
        _ => false,
    }
}

fn objects_equal(xs: &Map<String, Value>, ys: &Map<String, Value>) -> bool {
    // same size + every key of xs present in ys => same key set
    xs.len() == ys.len()
        && xs.iter().all(|(key, x)| ys.get(key).is_some_and(|y| deep_equal(x, y)))
}

fn numbers_equal(x: &Number, y: &Number) -> bool {
    if let (Some(a), Some(b)) = (x.as_i64(), y.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (x.as_u64(), y.as_u64()) {
        return a == b;
    }
    match (x.as_f64(), y.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(json!(1), json!(1), true ; "same int")]
    #[test_case(json!(1), json!(2), false ; "different int")]
    #[test_case(json!(1), json!(1.0), true ; "int and float")]
    #[test_case(json!("a"), json!("a"), true ; "same string")]
    #[test_case(json!("a"), json!("b"), false ; "different string")]
    #[test_case(json!(true), json!(true), true ; "same bool")]
    #[test_case(json!(true), json!(false), false ; "different bool")]
    #[test_case(json!(null), json!(null), true ; "nulls")]
    #[test_case(json!(1), json!("1"), false ; "number vs its string")]
    #[test_case(json!(0), json!(false), false ; "zero vs false")]
    #[test_case(json!(null), json!({}), false ; "null vs object")]
    #[test_case(json!({}), json!([]), false ; "object vs array")]
    fn primitives_and_kinds(a: Value, b: Value, expected: bool) {
        assert_eq!(deep_equal(&a, &b), expected);
        assert_eq!(deep_equal(&b, &a), expected);
    }

    #[test]
    fn object_key_order_is_ignored() {
        assert!(deep_equal(&json!({"a": 1, "b": 2}), &json!({"b": 2, "a": 1})));
        assert!(!deep_equal(&json!({"a": 1}), &json!({"a": 1, "b": 2})));
        assert!(!deep_equal(&json!({"a": 1, "c": 2}), &json!({"a": 1, "b": 2})));
    }

    #[test]
    fn array_order_matters() {
        assert!(deep_equal(&json!([1, 2]), &json!([1, 2])));
        assert!(!deep_equal(&json!([1, 2]), &json!([2, 1])));
        assert!(!deep_equal(&json!([1]), &json!([1, 2])));
    }

    #[test]
    fn nested_structures() {
        let a = json!({"a": 1, "b": {"c": [3, 4]}});
        let b = json!({"b": {"c": [3, 4]}, "a": 1});
        let c = json!({"a": 1, "b": {"c": [3, 5]}});
        assert!(deep_equal(&a, &b));
        assert!(!deep_equal(&a, &c));
    }

    #[test]
    fn absent_values() {
        assert!(resolved_equal(None, None));
        assert!(!resolved_equal(None, Some(&Value::Null)));
        assert!(!resolved_equal(Some(&json!({})), None));
    }

    #[test]
    fn large_unsigned_integers() {
        assert!(deep_equal(&json!(u64::MAX), &json!(u64::MAX)));
        assert!(!deep_equal(&json!(u64::MAX), &json!(-1)));
    }
}
