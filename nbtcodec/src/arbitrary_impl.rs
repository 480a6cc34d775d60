use arbitrary::{Arbitrary, Result, Unstructured};

use crate::{Compound, List, Tag, TagType, Value};

fn arb_value_of(u: &mut Unstructured<'_>, tag: TagType) -> Result<Value> {
    Ok(match tag {
        TagType::End => return Err(arbitrary::Error::IncorrectFormat),
        TagType::Byte => Value::Byte(u.arbitrary()?),
        TagType::Short => Value::Short(u.arbitrary()?),
        TagType::Int => Value::Int(u.arbitrary()?),
        TagType::Long => Value::Long(u.arbitrary()?),
        TagType::Float => Value::Float(u.arbitrary()?),
        TagType::Double => Value::Double(u.arbitrary()?),
        TagType::ByteArray => Value::ByteArray(u.arbitrary()?),
        TagType::String => Value::String(u.arbitrary()?),
        TagType::List => Value::List(u.arbitrary()?),
        TagType::Compound => Value::Compound(u.arbitrary()?),
    })
}

impl<'a> Arbitrary<'a> for Value {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let tag = u.arbitrary::<TagType>()?;
        arb_value_of(u, tag)
    }
}

impl<'a> Arbitrary<'a> for List {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        // Lists need to all be the same type.
        let element_type = u.arbitrary::<TagType>()?;
        let mut list = List::new(element_type);
        if element_type == TagType::End {
            return Ok(list);
        }

        let len = u.arbitrary_len::<u8>()?;
        for _ in 0..len {
            list.push_unchecked(arb_value_of(u, element_type)?);
        }
        Ok(list)
    }
}

impl<'a> Arbitrary<'a> for Tag {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        Ok(Tag {
            name: u.arbitrary()?,
            value: u.arbitrary()?,
        })
    }
}

impl<'a> Arbitrary<'a> for Compound {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        u.arbitrary_iter::<Tag>()?.collect()
    }
}
