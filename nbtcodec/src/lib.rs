//! nbtcodec reads and writes the Named Binary Tag (NBT) format as an owned
//! tree of tags.
//!
//! Every tag on the wire is a type byte, a name, and a payload. Compounds hold
//! named children and are terminated by an `End` byte, lists hold anonymous
//! children that all share one declared type.
//!
//! * For the tree types see [`Tag`], [`Value`], [`List`] and [`Compound`].
//! * For decoding see [`from_bytes`], [`from_reader`] and [`DeOpts`].
//! * For encoding see [`to_bytes`] and [`to_writer`].
//! * For a printable form of a tree see [`to_display_string`].
//!
//! ```toml
//! [dependencies]
//! nbtcodec = "0.1"
//! ```
//!
//! # Quick example
//!
//! ```
//! use nbtcodec::{Compound, Tag};
//!
//! # fn main() -> nbtcodec::error::Result<()> {
//! let root = Tag::new(
//!     "root",
//!     Compound::new().insert("health", 20).insert("name", "Steve"),
//! );
//!
//! let bytes = nbtcodec::to_bytes(&root)?;
//! assert_eq!(bytes[0], 0x0A);
//!
//! let decoded = nbtcodec::from_bytes(&bytes)?;
//! assert_eq!(decoded, root);
//!
//! let health = decoded.value.as_compound().unwrap().get("health")?;
//! assert_eq!(health.value.as_i64(), Some(20));
//! # Ok(())
//! # }
//! ```
//!
//! # Compression
//!
//! NBT files are usually gzip or zlib compressed. This crate does no
//! decompression; wrap the reader in a decoder such as
//! `flate2::read::GzDecoder` before handing it to [`from_reader`].

pub mod error;

mod compound;
mod de;
mod display;
mod list;
mod ser;
mod value;

#[cfg(feature = "serde")]
mod serde_impl;

#[cfg(feature = "arbitrary1")]
mod arbitrary_impl;

pub use compound::Compound;
pub use de::{from_bytes, from_reader, from_reader_with_opts, DeOpts};
pub use display::to_display_string;
pub use list::{ElementMut, List};
pub use ser::{to_bytes, to_writer};
pub use value::{Tag, Value};

#[cfg(test)]
mod test;

/// The deepest nesting of compounds and lists that is encoded, and decoded
/// unless [`DeOpts::max_depth`] says otherwise. The root counts as depth one.
///
/// Encoding refuses deeper trees so that everything [`to_writer`] produces
/// decodes again with default options.
pub const MAX_DEPTH: usize = 512;

/// The type of an NBT tag. This does not carry the value or the name of the
/// data.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum TagType {
    /// Represents the end of a Compound object.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents as array of Byte (i8).
    ByteArray = 7,
    /// Represents a Unicode string.
    String = 8,
    /// Represents a list of anonymous values sharing one type.
    List = 9,
    /// Represents a struct-like structure of named tags.
    Compound = 10,
}

impl TagType {
    /// The conventional name of this tag type, as used by the tree printer.
    pub const fn name(self) -> &'static str {
        match self {
            TagType::End => "TAG_End",
            TagType::Byte => "TAG_Byte",
            TagType::Short => "TAG_Short",
            TagType::Int => "TAG_Int",
            TagType::Long => "TAG_Long",
            TagType::Float => "TAG_Float",
            TagType::Double => "TAG_Double",
            TagType::ByteArray => "TAG_Byte_Array",
            TagType::String => "TAG_String",
            TagType::List => "TAG_List",
            TagType::Compound => "TAG_Compound",
        }
    }
}

// The tags rarely change, so the conversions are written out by hand.
impl TryFrom<u8> for TagType {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        Ok(match value {
            0 => TagType::End,
            1 => TagType::Byte,
            2 => TagType::Short,
            3 => TagType::Int,
            4 => TagType::Long,
            5 => TagType::Float,
            6 => TagType::Double,
            7 => TagType::ByteArray,
            8 => TagType::String,
            9 => TagType::List,
            10 => TagType::Compound,
            11..=u8::MAX => return Err(()),
        })
    }
}

impl From<TagType> for u8 {
    fn from(tag: TagType) -> Self {
        tag as u8
    }
}

/// Whether a tag is read or written together with its name.
///
/// Children of a compound always carry names. The root tag conventionally does
/// too, but some protocols send it anonymously, so the choice is left to the
/// caller at the boundary.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Naming {
    /// Type byte, then name, then payload.
    #[default]
    Named,
    /// Type byte, then payload. The tag's name is empty when decoded and
    /// ignored when encoded.
    Anon,
}
