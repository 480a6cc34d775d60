//! Decoding of binary NBT into a [`Tag`] tree.
//!
//! The decoder reads from any [`Read`] and builds the whole tree before
//! returning. It stops at the first problem with the input and returns an
//! error; no partially decoded tree is ever handed back.
//!
//! ```
//! use nbtcodec::{from_reader_with_opts, DeOpts, Naming};
//!
//! let bytes = [10, 0, 0, 3, 0, 3, 105, 110, 116, 0, 0, 222, 173, 0];
//! let opts = DeOpts::new().max_depth(16);
//!
//! let tag = from_reader_with_opts(&bytes[..], Naming::Named, opts).unwrap();
//! let int = tag.value.as_compound().unwrap().get("int").unwrap();
//! assert_eq!(int.value.as_i64(), Some(0xdead));
//! ```
use std::io::Read;

use byteorder::{BigEndian, ReadBytesExt};
use log::{debug, trace};

use crate::error::{Error, Result};
use crate::{Compound, List, Naming, Tag, TagType, Value, MAX_DEPTH};

/// Options for customizing decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeOpts {
    max_seq_len: usize,
    max_depth: usize,
}

impl DeOpts {
    /// Create new options. This object follows a builder pattern.
    pub fn new() -> Self {
        Default::default()
    }

    /// Set the maximum length any byte array, string or list can be. The
    /// length prefix is checked before anything is allocated for it, which
    /// protects against hostile input claiming huge lengths.
    ///
    /// Tag names are strings on the wire and are held to the same limit, so a
    /// limit shorter than a name in the input rejects that name with
    /// [`ErrorKind::InvalidLength`](crate::error::ErrorKind::InvalidLength).
    pub fn max_seq_len(mut self, value: usize) -> Self {
        self.max_seq_len = value;
        self
    }

    /// Set the maximum nesting of compounds and lists. The root counts as
    /// depth one. Defaults to [`MAX_DEPTH`](crate::MAX_DEPTH).
    pub fn max_depth(mut self, value: usize) -> Self {
        self.max_depth = value;
        self
    }
}

impl Default for DeOpts {
    fn default() -> Self {
        Self {
            max_seq_len: i32::MAX as usize,
            max_depth: MAX_DEPTH,
        }
    }
}

/// Decode a tag with a named root from a byte slice. The slice may contain
/// trailing data after the tag.
pub fn from_bytes(input: &[u8]) -> Result<Tag> {
    from_reader(input, Naming::Named)
}

/// Decode a single tag from the reader with default options.
pub fn from_reader<R: Read>(reader: R, naming: Naming) -> Result<Tag> {
    from_reader_with_opts(reader, naming, DeOpts::default())
}

/// Decode a single tag from the reader.
///
/// The root may be any tag type, though it is conventionally a compound. A
/// root `End` byte is an error since it carries no tag.
pub fn from_reader_with_opts<R: Read>(reader: R, naming: Naming, opts: DeOpts) -> Result<Tag> {
    let mut de = Decoder {
        reader,
        opts,
        depth: 0,
    };

    let tag = de.read_tag()?;
    if tag == TagType::End {
        return Err(Error::bespoke("invalid nbt: root tag is End"));
    }

    let name = match naming {
        Naming::Named => de.read_string()?,
        Naming::Anon => String::new(),
    };

    debug!("decoding root {} {:?}", tag.name(), name);
    let value = de.read_payload(tag)?;
    Ok(Tag { name, value })
}

struct Decoder<R> {
    reader: R,
    opts: DeOpts,
    depth: usize,
}

impl<R: Read> Decoder<R> {
    fn read_tag(&mut self) -> Result<TagType> {
        let tag = self.reader.read_u8()?;
        TagType::try_from(tag).map_err(|_| Error::invalid_tag(tag))
    }

    fn read_len(&mut self, len: i64) -> Result<usize> {
        let len = usize::try_from(len).map_err(|_| Error::invalid_length(len))?;
        if len > self.opts.max_seq_len {
            return Err(Error::invalid_length(len as i64));
        }
        Ok(len)
    }

    fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        // take() lets a truncated stream fail without first allocating the
        // full claimed length.
        (&mut self.reader).take(len as u64).read_to_end(&mut buf)?;
        if buf.len() != len {
            return Err(std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into());
        }
        Ok(buf)
    }

    fn read_string(&mut self) -> Result<String> {
        let len = self.reader.read_u16::<BigEndian>()?;
        let len = self.read_len(len as i64)?;
        let buf = self.read_bytes(len)?;
        String::from_utf8(buf).map_err(|e| Error::nonunicode(e.into_bytes()))
    }

    fn read_payload(&mut self, tag: TagType) -> Result<Value> {
        Ok(match tag {
            TagType::End => return Err(Error::bespoke("invalid nbt: End tag has no payload")),
            TagType::Byte => Value::Byte(self.reader.read_i8()?),
            TagType::Short => Value::Short(self.reader.read_i16::<BigEndian>()?),
            TagType::Int => Value::Int(self.reader.read_i32::<BigEndian>()?),
            TagType::Long => Value::Long(self.reader.read_i64::<BigEndian>()?),
            TagType::Float => Value::Float(self.reader.read_f32::<BigEndian>()?),
            TagType::Double => Value::Double(self.reader.read_f64::<BigEndian>()?),
            TagType::ByteArray => {
                let len = self.reader.read_i32::<BigEndian>()?;
                let len = self.read_len(len as i64)?;
                let buf = self.read_bytes(len)?;
                Value::ByteArray(buf.into_iter().map(|b| b as i8).collect())
            }
            TagType::String => Value::String(self.read_string()?),
            TagType::List => Value::List(self.nested(Self::read_list)?),
            TagType::Compound => Value::Compound(self.nested(Self::read_compound)?),
        })
    }

    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= self.opts.max_depth {
            return Err(Error::depth_limit(self.opts.max_depth));
        }
        self.depth += 1;
        let res = f(self);
        self.depth -= 1;
        res
    }

    fn read_list(&mut self) -> Result<List> {
        let element_type = self.read_tag()?;
        let size = self.reader.read_i32::<BigEndian>()?;
        let size = self.read_len(size as i64)?;

        if element_type == TagType::End && size > 0 {
            return Err(Error::bespoke(format!(
                "invalid nbt: list of {} End elements",
                size
            )));
        }

        // Cap the preallocation, the elements may still turn out to be missing.
        let mut list = List::with_capacity(element_type, size.min(1024));
        for _ in 0..size {
            let value = self.read_payload(element_type)?;
            list.push_unchecked(value);
        }
        Ok(list)
    }

    fn read_compound(&mut self) -> Result<Compound> {
        let mut tags = Vec::new();
        loop {
            let tag = self.read_tag()?;
            if tag == TagType::End {
                break;
            }
            let name = self.read_string()?;
            trace!("decoding {} {:?}", tag.name(), name);
            let value = self.read_payload(tag)?;
            tags.push(Tag { name, value });
        }
        Ok(Compound::with_tags(tags))
    }
}
