//! src/compression/codecs/zstd.rs
//!
//! Zstd streaming compressor/decompressor.
//!
//! Design notes:
//! - Compression feeds the source through `zstd::stream::Encoder` into a Vec,
//!   with the frame content checksum enabled.
//! - Decompression never trusts the frame's content-size field; output is pulled
//!   through the bounded reader instead of `zstd::bulk::decompress`.
//! - The decoder window is capped at `ZSTD_WINDOW_LOG_MAX`, so a frame header
//!   cannot demand a larger allocation than our own encoder ever produces.

use std::io::{self, Read};

use crate::compression::constants::{MAX_LEVEL_ZSTD, ZSTD_WINDOW_LOG_MAX};
use crate::compression::guard::read_bounded;
use crate::compression::types::{Algorithm, Codec, CompressionError, SizeLimit};

/// Zstd codec bound to one compression level.
pub struct ZstdCodec {
    level: i32,
}

impl ZstdCodec {
    /// Create a Zstd codec. Level 0 selects zstd's own default; ultra levels
    /// are clamped to `MAX_LEVEL_ZSTD`.
    pub fn new(level: i32) -> Self {
        Self { level: level.min(MAX_LEVEL_ZSTD) }
    }
}

impl Codec for ZstdCodec {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Zstd
    }

    fn compress_from(&self, src: &mut dyn Read) -> Result<Vec<u8>, CompressionError> {
        let mut encoder = zstd::stream::Encoder::new(Vec::new(), self.level)
            .map_err(|e| CompressionError::compress(Algorithm::Zstd, e))?;
        encoder.include_checksum(true)
            .map_err(|e| CompressionError::compress(Algorithm::Zstd, e))?;
        io::copy(src, &mut encoder).map_err(|e| CompressionError::compress(Algorithm::Zstd, e))?;
        encoder.finish().map_err(|e| CompressionError::compress(Algorithm::Zstd, e))
    }

    fn decompress_from(&self, src: &mut dyn Read, limit: SizeLimit) -> Result<Vec<u8>, CompressionError> {
        let mut decoder = zstd::stream::Decoder::new(src)
            .map_err(|e| CompressionError::decompress(Algorithm::Zstd, e))?;
        decoder.window_log_max(ZSTD_WINDOW_LOG_MAX)
            .map_err(|e| CompressionError::decompress(Algorithm::Zstd, e))?;
        read_bounded(decoder, limit, Algorithm::Zstd)
    }
}
