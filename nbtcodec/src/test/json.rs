use serde_json::json;

use crate::{Compound, List, Tag, TagType};

#[test]
fn tree_to_json() {
    let tag = Tag::new(
        "root",
        Compound::new()
            .insert("health", 20)
            .insert("name", "Steve")
            .insert("pos", List::from_values(TagType::Double, [1.5, -2.0]).unwrap())
            .insert("bytes", vec![1_i8, -1])
            .insert("inner", Compound::new().insert("flag", true)),
    );

    let value = serde_json::to_value(&tag).unwrap();
    assert_eq!(
        value,
        json!({
            "root": {
                "health": 20,
                "name": "Steve",
                "pos": [1.5, -2.0],
                "bytes": [1, -1],
                "inner": { "flag": 1 },
            }
        })
    );
}

#[test]
fn json_keeps_child_order() {
    let tag = Tag::new("", Compound::new().insert("b", 1).insert("a", 2));
    let s = serde_json::to_string(&tag).unwrap();
    assert_eq!(s, r#"{"":{"b":1,"a":2}}"#);
}
