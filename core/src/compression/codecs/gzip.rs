//! Gzip via flate2 with streaming enc/dec.

use std::io::{self, Read};

use flate2::{read::MultiGzDecoder, write::GzEncoder, Compression};

use crate::compression::guard::read_bounded;
use crate::compression::types::{Algorithm, Codec, CompressionError, SizeLimit};

pub struct GzipCodec {
    level: Compression,
}

impl GzipCodec {
    /// Levels above 9 fall back to the library default.
    pub fn new(level: u32) -> Self {
        let level = match level {
            0..=9 => Compression::new(level),
            _ => Compression::default(),
        };
        Self { level }
    }
}

impl Codec for GzipCodec {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Gzip
    }

    fn compress_from(&self, src: &mut dyn Read) -> Result<Vec<u8>, CompressionError> {
        let mut enc = GzEncoder::new(Vec::new(), self.level);
        io::copy(src, &mut enc).map_err(|e| CompressionError::compress(Algorithm::Gzip, e))?;
        enc.finish().map_err(|e| CompressionError::compress(Algorithm::Gzip, e))
    }

    fn decompress_from(&self, src: &mut dyn Read, limit: SizeLimit) -> Result<Vec<u8>, CompressionError> {
        // Concatenated gzip members decode as one payload.
        read_bounded(MultiGzDecoder::new(src), limit, Algorithm::Gzip)
    }
}
