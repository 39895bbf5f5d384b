//! codecs/lz4.rs
//! LZ4 frame-format compressor/decompressor.
use std::io::{self, Read};

use lz4_flex::frame::{FrameDecoder, FrameEncoder, FrameInfo};

use crate::compression::guard::read_bounded;
use crate::compression::types::{Algorithm, Codec, CompressionError, SizeLimit};

/// LZ4 codec using the standard frame format (not raw blocks). Frames are
/// written with block and content checksums, which the decoder verifies.
/// lz4_flex exposes no levels for frames.
pub struct Lz4Codec;

impl Lz4Codec {
    pub fn new() -> Self {
        Self
    }

    fn frame_info() -> FrameInfo {
        FrameInfo::new().block_checksums(true).content_checksum(true)
    }
}

impl Default for Lz4Codec {
    fn default() -> Self {
        Self::new()
    }
}

impl Codec for Lz4Codec {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Lz4
    }

    fn compress_from(&self, src: &mut dyn Read) -> Result<Vec<u8>, CompressionError> {
        let mut enc = FrameEncoder::with_frame_info(Self::frame_info(), Vec::new());
        io::copy(src, &mut enc).map_err(|e| CompressionError::compress(Algorithm::Lz4, e))?;
        enc.finish()
            .map_err(|e| CompressionError::compress(Algorithm::Lz4, io::Error::other(e)))
    }

    fn decompress_from(&self, src: &mut dyn Read, limit: SizeLimit) -> Result<Vec<u8>, CompressionError> {
        read_bounded(FrameDecoder::new(src), limit, Algorithm::Lz4)
    }
}
