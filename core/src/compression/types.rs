//! compression/types.rs
//! Algorithm identifiers, size limits, errors and the codec trait.
use std::fmt;
use std::io::{self, Read};
use std::str::FromStr;

use thiserror::Error;

use crate::compression::constants::codec_names;

/// Closed set of supported codecs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Gzip,
    Zstd,
    Lz4,
    None,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Gzip,
        Algorithm::Zstd,
        Algorithm::Lz4,
        Algorithm::None,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Gzip => codec_names::GZIP,
            Algorithm::Zstd => codec_names::ZSTD,
            Algorithm::Lz4  => codec_names::LZ4,
            Algorithm::None => codec_names::NONE,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = CompressionError;

    /// Exact match only: no trimming, no case folding, no fallback.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            codec_names::GZIP => Ok(Algorithm::Gzip),
            codec_names::ZSTD => Ok(Algorithm::Zstd),
            codec_names::LZ4  => Ok(Algorithm::Lz4),
            codec_names::NONE => Ok(Algorithm::None),
            other => Err(CompressionError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

/// Inclusive upper bound on decompressed output, in bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct SizeLimit(usize);

impl SizeLimit {
    pub const fn new(bytes: usize) -> Self {
        Self(bytes)
    }

    pub const fn bytes(&self) -> usize {
        self.0
    }
}

impl fmt::Display for SizeLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("unsupported compression algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("{algorithm} compression failed: {source}")]
    CompressionFailure {
        algorithm: Algorithm,
        #[source]
        source: io::Error,
    },

    #[error("{algorithm} decompression failed: {source}")]
    DecompressionFailure {
        algorithm: Algorithm,
        #[source]
        source: io::Error,
    },

    #[error("decompressed data exceeds maximum size limit ({limit} bytes) - potential decompression bomb")]
    SizeLimitExceeded { limit: usize },
}

impl CompressionError {
    pub(crate) fn compress(algorithm: Algorithm, source: io::Error) -> Self {
        CompressionError::CompressionFailure { algorithm, source }
    }

    pub(crate) fn decompress(algorithm: Algorithm, source: io::Error) -> Self {
        CompressionError::DecompressionFailure { algorithm, source }
    }
}

/// A paired compress/decompress transform over one algorithm's native format.
///
/// Native encoder/decoder handles are created inside each call and dropped
/// before it returns, on every exit path.
pub trait Codec: Send + Sync {
    fn algorithm(&self) -> Algorithm;

    /// Compress everything readable from `src` into a fresh artifact.
    fn compress_from(&self, src: &mut dyn Read) -> Result<Vec<u8>, CompressionError>;

    /// Decompress the artifact readable from `src`, never yielding more than `limit` bytes.
    fn decompress_from(&self, src: &mut dyn Read, limit: SizeLimit) -> Result<Vec<u8>, CompressionError>;

    fn compress(&self, payload: &[u8]) -> Result<Vec<u8>, CompressionError> {
        let mut src = payload;
        self.compress_from(&mut src)
    }

    fn decompress(&self, artifact: &[u8], limit: SizeLimit) -> Result<Vec<u8>, CompressionError> {
        let mut src = artifact;
        self.decompress_from(&mut src, limit)
    }
}
