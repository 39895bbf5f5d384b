//! compression/stream.rs
//! Reader-based entry points for callers holding a file or socket rather
//! than an in-memory buffer.
use std::io::Read;

use crate::compression::facade::Compression;
use crate::compression::registry::resolve_codec;
use crate::compression::types::CompressionError;

impl Compression {
    /// Compress everything readable from `reader`.
    /// A failing reader surfaces as `CompressionFailure`.
    pub fn compress_reader<R: Read>(&self, mut reader: R, identifier: &str) -> Result<Vec<u8>, CompressionError> {
        let codec = resolve_codec(identifier, self.config())?;
        codec.compress_from(&mut reader)
    }

    /// Decompress an artifact read incrementally from `reader`, under the same
    /// size guard as `decompress_data`.
    pub fn decompress_reader<R: Read>(&self, mut reader: R, identifier: &str) -> Result<Vec<u8>, CompressionError> {
        let codec = resolve_codec(identifier, self.config())?;
        codec.decompress_from(&mut reader, self.config().size_limit())
    }
}
