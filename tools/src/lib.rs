use std::io::{self, Read};

use flate2::read::{GzDecoder, ZlibDecoder};
use log::debug;

/// How a file of NBT data is wrapped.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Compression {
    Gzip,
    Zlib,
    None,
}

impl Compression {
    /// Guess the compression from the first bytes of the data. Uncompressed
    /// NBT starts with a tag type byte, which never collides with the gzip or
    /// zlib magic.
    pub fn detect(data: &[u8]) -> Self {
        match data {
            [0x1f, 0x8b, ..] => Compression::Gzip,
            [0x78, 0x01 | 0x5e | 0x9c | 0xda, ..] => Compression::Zlib,
            _ => Compression::None,
        }
    }
}

/// Undo any gzip or zlib compression on the data.
pub fn decompress(data: Vec<u8>) -> io::Result<Vec<u8>> {
    let compression = Compression::detect(&data);
    debug!("input compression: {:?}", compression);

    let mut out = vec![];
    match compression {
        Compression::Gzip => {
            GzDecoder::new(data.as_slice()).read_to_end(&mut out)?;
        }
        Compression::Zlib => {
            ZlibDecoder::new(data.as_slice()).read_to_end(&mut out)?;
        }
        Compression::None => return Ok(data),
    }
    Ok(out)
}
