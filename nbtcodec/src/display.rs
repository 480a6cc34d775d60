use std::fmt::{self, Display, Write};

use crate::{Compound, List, Tag, Value};

/// Render a tag and everything below it in a readable, indented form.
///
/// The output depends only on the tree, so it is stable across calls and
/// useful for comparing trees in tests.
///
/// ```
/// # use nbtcodec::{Compound, Tag};
/// let tag = Tag::new("root", Compound::new().insert("health", 20));
/// assert_eq!(
///     nbtcodec::to_display_string(&tag),
///     "TAG_Compound(\"root\"): 1 entries\n{\n\tTAG_Int(\"health\"): 20\n}"
/// );
/// ```
pub fn to_display_string(tag: &Tag) -> String {
    tag.to_string()
}

impl Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, &self.name, &self.value)
    }
}

fn write_node<W: Write>(w: &mut W, name: &str, value: &Value) -> fmt::Result {
    w.write_str(value.tag_type().name())?;
    if !name.is_empty() {
        write!(w, "({:?})", name)?;
    }

    match value {
        Value::Byte(v) => write!(w, ": {}", v),
        Value::Short(v) => write!(w, ": {}", v),
        Value::Int(v) => write!(w, ": {}", v),
        Value::Long(v) => write!(w, ": {}", v),
        Value::Float(v) => write!(w, ": {}", v),
        Value::Double(v) => write!(w, ": {}", v),
        Value::ByteArray(bs) => write!(w, ": [{} bytes]", bs.len()),
        Value::String(s) => write!(w, ": {}", s),
        Value::List(l) => write_list(w, l),
        Value::Compound(c) => write_compound(w, c),
    }
}

fn write_list<W: Write>(w: &mut W, list: &List) -> fmt::Result {
    write!(w, ": {} entries\n{{\n", list.len())?;
    for v in list {
        let mut child = String::new();
        write_node(&mut child, "", v)?;
        write_indented(w, &child)?;
    }
    w.write_char('}')
}

fn write_compound<W: Write>(w: &mut W, compound: &Compound) -> fmt::Result {
    write!(w, ": {} entries\n{{\n", compound.len())?;
    for tag in compound {
        let mut child = String::new();
        write_node(&mut child, &tag.name, &tag.value)?;
        write_indented(w, &child)?;
    }
    w.write_char('}')
}

/// Write `child` as one block, every line indented by a tab.
fn write_indented<W: Write>(w: &mut W, child: &str) -> fmt::Result {
    for line in child.split('\n') {
        writeln!(w, "\t{}", line)?;
    }
    Ok(())
}
