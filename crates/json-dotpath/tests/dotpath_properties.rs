use json_dotpath::{find, get_long, get_string, parent_path, set_value};
use proptest::prelude::*;
use serde_json::{json, Value};

fn key() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

fn segment() -> impl Strategy<Value = String> {
    (key(), prop::option::of(0usize..6)).prop_map(|(k, idx)| match idx {
        Some(i) => format!("{k}[{i}]"),
        None => k,
    })
}

/// Paths whose last segment is a plain field name.
fn path() -> impl Strategy<Value = String> {
    (prop::collection::vec(segment(), 0..4), key()).prop_map(|(mut segs, last)| {
        segs.push(last);
        segs.join(".")
    })
}

fn primitive() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::from),
        Just(Value::Null),
    ]
}

/// Keys disjoint from `key()`, so seeded fields never collide with the path
/// under test.
fn sibling_key() -> impl Strategy<Value = String> {
    "[A-Z]{1,4}"
}

/// A tree that already holds structure: an unrelated top-level field, and a
/// sibling next to the leaf of `p`, which creates every container `p` will
/// walk through.
fn seeded(p: &str, unrelated: &str, sibling: &str, seed: Value) -> Value {
    let mut doc = json!({});
    set_value(&mut doc, unrelated, seed.clone()).unwrap();
    let parent = parent_path(p);
    let sibling_path = if parent.is_empty() {
        sibling.to_string()
    } else {
        format!("{parent}.{sibling}")
    };
    set_value(&mut doc, &sibling_path, seed).unwrap();
    doc
}

proptest! {
    #[test]
    fn missing_path_yields_default(p in path(), default in any::<i64>()) {
        let doc = json!({});
        prop_assert_eq!(find(&doc, &p).unwrap(), None);
        prop_assert_eq!(get_long(&doc, &p, default).unwrap(), default);
        prop_assert_eq!(get_string(&doc, &p, "none").unwrap(), "none");
    }

    #[test]
    fn set_then_find_round_trips(
        p in path(),
        v in primitive(),
        unrelated in sibling_key(),
        sibling in sibling_key(),
        seed in primitive()
    ) {
        let mut doc = seeded(&p, &unrelated, &sibling, seed.clone());
        set_value(&mut doc, &p, v.clone()).unwrap();
        prop_assert_eq!(find(&doc, &p).unwrap(), Some(&v));
        prop_assert_eq!(find(&doc, &unrelated).unwrap(), Some(&seed));
    }

    #[test]
    fn set_is_idempotent(
        p in path(),
        v in primitive(),
        unrelated in sibling_key(),
        sibling in sibling_key(),
        seed in primitive()
    ) {
        let mut once = seeded(&p, &unrelated, &sibling, seed);
        set_value(&mut once, &p, v.clone()).unwrap();
        let mut twice = once.clone();
        set_value(&mut twice, &p, v).unwrap();
        prop_assert_eq!(once, twice);
    }
}
