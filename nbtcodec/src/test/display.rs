use crate::{from_bytes, to_bytes, to_display_string, Compound, List, Tag, TagType};

#[test]
fn scalar_with_and_without_name() {
    assert_eq!(Tag::new("health", 20).to_string(), "TAG_Int(\"health\"): 20");
    assert_eq!(Tag::new("", 5_i8).to_string(), "TAG_Byte: 5");
    assert_eq!(Tag::new("n", "Steve").to_string(), "TAG_String(\"n\"): Steve");
    assert_eq!(
        Tag::new("data", vec![1_i8, 2, 3]).to_string(),
        "TAG_Byte_Array(\"data\"): [3 bytes]"
    );
}

#[test]
fn simple_compound() {
    let tag = Tag::new(
        "root",
        Compound::new().insert("health", 20).insert("name", "Steve"),
    );

    assert_eq!(
        to_display_string(&tag),
        "TAG_Compound(\"root\"): 2 entries\n\
         {\n\
         \tTAG_Int(\"health\"): 20\n\
         \tTAG_String(\"name\"): Steve\n\
         }"
    );
}

#[test]
fn nested_indentation() {
    let list = List::from_values(TagType::Short, [1_i16, 2]).unwrap();
    let tag = Tag::new(
        "",
        Compound::new()
            .insert("inner", Compound::new().insert("x", 1_i64))
            .insert("list", list)
            .insert("empty", Compound::new()),
    );

    assert_eq!(
        to_display_string(&tag),
        "TAG_Compound: 3 entries\n\
         {\n\
         \tTAG_Compound(\"inner\"): 1 entries\n\
         \t{\n\
         \t\tTAG_Long(\"x\"): 1\n\
         \t}\n\
         \tTAG_List(\"list\"): 2 entries\n\
         \t{\n\
         \t\tTAG_Short: 1\n\
         \t\tTAG_Short: 2\n\
         \t}\n\
         \tTAG_Compound(\"empty\"): 0 entries\n\
         \t{\n\
         \t}\n\
         }"
    );
}

#[test]
fn deterministic() {
    let tag = Tag::new(
        "root",
        Compound::new()
            .insert("b", 1.5_f32)
            .insert("a", 2.25_f64)
            .insert("c", Compound::new().insert("z", true)),
    );

    let first = to_display_string(&tag);
    assert_eq!(first, to_display_string(&tag));

    let decoded = from_bytes(&to_bytes(&tag).unwrap()).unwrap();
    assert_eq!(first, to_display_string(&decoded));
}

#[test]
fn names_are_escaped() {
    let tag = Tag::new("say \"hi\"\nnow", 1_i8);
    assert_eq!(tag.to_string(), "TAG_Byte(\"say \\\"hi\\\"\\nnow\"): 1");

    let tag = Tag::new("", Compound::new().insert("a\nb", 2_i8));
    assert_eq!(
        to_display_string(&tag),
        "TAG_Compound: 1 entries\n{\n\tTAG_Byte(\"a\\nb\"): 2\n}"
    );
}
