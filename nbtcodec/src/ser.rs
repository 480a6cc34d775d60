//! Encoding of a [`Tag`] tree into binary NBT.
use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};
use log::debug;

use crate::error::{Error, Result};
use crate::{Compound, List, Naming, Tag, TagType, Value, MAX_DEPTH};

/// Encode a tag with its name into a new buffer.
pub fn to_bytes(tag: &Tag) -> Result<Vec<u8>> {
    let mut result = vec![];
    to_writer(tag, &mut result, Naming::Named)?;
    Ok(result)
}

/// Encode a tag into the writer: the type byte, the name if `naming` is
/// [`Naming::Named`], then the payload.
///
/// Trees nested deeper than [`MAX_DEPTH`] are refused with
/// [`ErrorKind::DepthLimit`](crate::error::ErrorKind::DepthLimit), since the
/// decoder would refuse them too.
///
/// Data may have been written to the writer when an error is returned.
pub fn to_writer<W: Write>(tag: &Tag, mut writer: W, naming: Naming) -> Result<()> {
    debug!("encoding root {} {:?}", tag.tag_type().name(), tag.name);
    writer.write_tag(tag.tag_type())?;
    if naming == Naming::Named {
        writer.write_size_prefixed_str(&tag.name)?;
    }
    writer.write_payload(&tag.value, 0)
}

pub(crate) trait WriteNbt: Write {
    fn write_tag(&mut self, tag: TagType) -> Result<()> {
        self.write_u8(tag.into())?;
        Ok(())
    }

    fn write_size_prefixed_str(&mut self, key: &str) -> Result<()> {
        let len: u16 = key.len().try_into().map_err(|_| {
            Error::bespoke(format!(
                "string of length {} exceeds maximum of u16::MAX",
                key.len()
            ))
        })?;
        self.write_u16::<BigEndian>(len)?;
        self.write_all(key.as_bytes())?;
        Ok(())
    }

    fn write_len(&mut self, len: usize) -> Result<()> {
        self.write_i32::<BigEndian>(
            len.try_into()
                .map_err(|_| Error::bespoke(format!("len too large: {}", len)))?,
        )?;

        Ok(())
    }

    /// `depth` is the number of compounds and lists enclosing `value`.
    fn write_payload(&mut self, value: &Value, depth: usize) -> Result<()> {
        match value {
            Value::Byte(v) => self.write_i8(*v)?,
            Value::Short(v) => self.write_i16::<BigEndian>(*v)?,
            Value::Int(v) => self.write_i32::<BigEndian>(*v)?,
            Value::Long(v) => self.write_i64::<BigEndian>(*v)?,
            Value::Float(v) => self.write_f32::<BigEndian>(*v)?,
            Value::Double(v) => self.write_f64::<BigEndian>(*v)?,
            Value::ByteArray(bs) => {
                self.write_len(bs.len())?;
                self.write_all(i8_slice_as_u8_slice(bs))?;
            }
            Value::String(s) => self.write_size_prefixed_str(s)?,
            Value::List(l) => {
                check_depth(depth)?;
                self.write_list(l, depth + 1)?
            }
            Value::Compound(c) => {
                check_depth(depth)?;
                self.write_compound(c, depth + 1)?
            }
        }
        Ok(())
    }

    fn write_list(&mut self, list: &List, depth: usize) -> Result<()> {
        self.write_tag(list.element_type())?;
        self.write_len(list.len())?;
        for v in list {
            self.write_payload(v, depth)?;
        }
        Ok(())
    }

    fn write_compound(&mut self, compound: &Compound, depth: usize) -> Result<()> {
        for tag in compound {
            self.write_tag(tag.tag_type())?;
            self.write_size_prefixed_str(&tag.name)?;
            self.write_payload(&tag.value, depth)?;
        }
        self.write_tag(TagType::End)
    }
}

impl<T> WriteNbt for T where T: Write {}

fn check_depth(depth: usize) -> Result<()> {
    if depth >= MAX_DEPTH {
        return Err(Error::depth_limit(MAX_DEPTH));
    }
    Ok(())
}

fn i8_slice_as_u8_slice(s: &[i8]) -> &[u8] {
    // SAFETY: i8 and u8 have the same size and alignment.
    unsafe { std::slice::from_raw_parts(s.as_ptr() as *const u8, s.len()) }
}
