//! codecs/none.rs
//! Pass-through codec.

use std::io::Read;

use crate::compression::guard::read_bounded;
use crate::compression::types::{Algorithm, Codec, CompressionError, SizeLimit};

/// Identity transform. Decompression still goes through the size guard.
pub struct NoneCodec;

impl NoneCodec {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoneCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Codec for NoneCodec {
    fn algorithm(&self) -> Algorithm {
        Algorithm::None
    }

    fn compress_from(&self, src: &mut dyn Read) -> Result<Vec<u8>, CompressionError> {
        let mut out = Vec::new();
        src.read_to_end(&mut out)
            .map_err(|e| CompressionError::compress(Algorithm::None, e))?;
        Ok(out)
    }

    fn decompress_from(&self, src: &mut dyn Read, limit: SizeLimit) -> Result<Vec<u8>, CompressionError> {
        read_bounded(src, limit, Algorithm::None)
    }

    fn compress(&self, payload: &[u8]) -> Result<Vec<u8>, CompressionError> {
        Ok(payload.to_vec())
    }
}
