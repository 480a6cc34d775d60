use crate::error::ErrorKind;
use crate::{Compound, Tag, Value};

fn sample() -> Compound {
    Compound::new()
        .insert("a", 1)
        .insert("x", "first")
        .insert("b", 2)
        .insert("x", "second")
}

#[test]
fn get_by_name() {
    let c = Compound::new().insert("x", 5).insert("y", 6);
    assert_eq!(c.get("x").unwrap().value, Value::Int(5));
    assert_eq!(c.get("y").unwrap().value, Value::Int(6));
}

#[test]
fn missing_key() {
    let c = Compound::new().insert("x", 5);
    let err = c.get("nope").unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::MissingKey("nope".to_owned()));
    assert!(!c.contains("nope"));
}

#[test]
fn empty_name_is_a_real_name() {
    let c = Compound::new().insert("", 1);
    assert_eq!(c.get("").unwrap().value, Value::Int(1));
    assert!(Compound::new().get("").is_err());
}

#[test]
fn duplicate_names_resolve_to_first() {
    let c = sample();
    assert_eq!(c.get("x").unwrap().value, Value::String("first".into()));
    // A second lookup goes through the index and must agree.
    assert_eq!(c.get("x").unwrap().value, Value::String("first".into()));
}

#[test]
fn lookup_fills_index() {
    let c = sample();
    assert_eq!(c.index_len(), 0);
    c.get("a").unwrap();
    c.get("b").unwrap();
    c.get("a").unwrap();
    assert_eq!(c.index_len(), 2);

    // Misses are not cached.
    assert!(c.get("zzz").is_err());
    assert_eq!(c.index_len(), 2);
}

#[test]
fn lookup_after_remove_misses() {
    let mut c = Compound::new().insert("x", 1).insert("y", 2);
    assert!(c.get("x").is_ok());

    let removed = c.remove("x").unwrap();
    assert_eq!(removed, Tag::new("x", 1));

    let err = c.get("x").unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::MissingKey("x".to_owned()));
    assert_eq!(c.get("y").unwrap().value, Value::Int(2));
}

#[test]
fn remove_first_of_duplicates_exposes_second() {
    let mut c = sample();
    c.get("x").unwrap();
    c.remove("x").unwrap();
    assert_eq!(c.get("x").unwrap().value, Value::String("second".into()));
}

#[test]
fn remove_before_cached_duplicate() {
    let mut c = Compound::new().insert("a", 0).insert("x", 1).insert("x", 2);
    assert_eq!(c.get("x").unwrap().value, Value::Int(1));

    c.remove_index(0).unwrap();
    assert_eq!(c.get("x").unwrap().value, Value::Int(1));
    assert_eq!(c.get_index(0).unwrap().value, Value::Int(1));
}

#[test]
fn rename_through_get_mut() {
    let mut c = Compound::new().insert("x", 1).insert("y", 2);
    c.get("x").unwrap();

    c.get_mut("x").unwrap().name = "z".to_owned();
    assert!(c.get("x").is_err());
    assert_eq!(c.get("z").unwrap().value, Value::Int(1));

    c.get_index_mut(1).unwrap().name = "x".to_owned();
    assert_eq!(c.get("x").unwrap().value, Value::Int(2));
}

#[test]
fn index_access() {
    let c = sample();
    assert_eq!(c.get_index(2).unwrap().name, "b");

    let err = c.get_index(4).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::IndexOutOfRange { index: 4, len: 4 });

    let mut c = c;
    assert!(c.remove_index(10).is_err());
    assert_eq!(c.len(), 4);
}

#[test]
fn order_is_insertion_order() {
    let mut c = Compound::new();
    c.push(Tag::new("c", 1));
    c.push(Tag::new("a", 2));
    c.push(Tag::new("b", 3));

    let names: Vec<_> = c.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["c", "a", "b"]);
}

#[test]
fn equality_ignores_index() {
    let a = sample();
    let b = sample();
    a.get("b").unwrap();
    assert_eq!(a, b);

    let cloned = a.clone();
    assert_eq!(cloned.index_len(), 0);
    assert_eq!(cloned, a);
}

#[test]
fn shared_lookups_across_threads() {
    let c = std::sync::Arc::new(sample());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let c = c.clone();
            std::thread::spawn(move || {
                for _ in 0..100 {
                    assert_eq!(c.get("b").unwrap().value, Value::Int(2));
                    assert_eq!(c.get("x").unwrap().value, Value::String("first".into()));
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}
