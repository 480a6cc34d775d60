//! Contains the Error and Result type used by the codec and the tree types.
use crate::TagType;

/// An error from decoding, encoding or accessing an NBT tree.
///
/// The message is meant for humans. Match on [`Error::kind`] to handle
/// specific failures.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Any other errors. Users should not match on this variant and should
    /// instead use a wildcard `_`. Errors in this category may be moved to new
    /// variants.
    Other,

    /// The input ended part way through a tag.
    UnexpectedEof,

    /// A type byte that does not name any tag.
    InvalidTag(u8),

    /// A value of the wrong type was given to a list.
    TypeMismatch { expected: TagType, found: TagType },

    /// No child in the compound has the requested name.
    MissingKey(String),

    /// Positional access past the end of a compound or list.
    IndexOutOfRange { index: usize, len: usize },

    /// A length prefix that was negative or beyond the configured maximum.
    InvalidLength(i64),

    /// Expected unicode data but was not valid. Contained bytes are the
    /// invalid data.
    Nonunicode(Vec<u8>),

    /// Nesting went deeper than the configured maximum depth.
    DepthLimit(usize),
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, ErrorKind::UnexpectedEof)
    }

    pub(crate) fn bespoke(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            kind: ErrorKind::Other,
        }
    }

    pub(crate) fn invalid_tag(t: u8) -> Self {
        Self {
            msg: format!("invalid nbt tag value: {}", t),
            kind: ErrorKind::InvalidTag(t),
        }
    }

    pub(crate) fn type_mismatch(expected: TagType, found: TagType) -> Self {
        Self {
            msg: format!(
                "type mismatch: list holds {}, given {}",
                expected.name(),
                found.name()
            ),
            kind: ErrorKind::TypeMismatch { expected, found },
        }
    }

    pub(crate) fn missing_key(key: &str) -> Self {
        Self {
            msg: format!("no tag named {:?} in compound", key),
            kind: ErrorKind::MissingKey(key.to_owned()),
        }
    }

    pub(crate) fn index_out_of_range(index: usize, len: usize) -> Self {
        Self {
            msg: format!("index {} out of range for {} children", index, len),
            kind: ErrorKind::IndexOutOfRange { index, len },
        }
    }

    pub(crate) fn invalid_length(len: i64) -> Self {
        Self {
            msg: format!("invalid length prefix: {}", len),
            kind: ErrorKind::InvalidLength(len),
        }
    }

    pub(crate) fn nonunicode(d: Vec<u8>) -> Self {
        Self {
            msg: format!(
                "invalid nbt string: nonunicode: {}",
                String::from_utf8_lossy(&d)
            ),
            kind: ErrorKind::Nonunicode(d),
        }
    }

    pub(crate) fn depth_limit(max: usize) -> Self {
        Self {
            msg: format!("nbt nested deeper than {} levels", max),
            kind: ErrorKind::DepthLimit(max),
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Self {
                msg: "eof: unexpectedly ran out of input".to_owned(),
                kind: ErrorKind::UnexpectedEof,
            },
            // Probably want to include the IO error in future.
            _ => Self {
                msg: format!("io error: {}", e),
                kind: ErrorKind::Other,
            },
        }
    }
}
