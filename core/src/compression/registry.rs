//! compression/registry.rs
//! Codec registry and factory functions.

use crate::compression::codecs::{GzipCodec, Lz4Codec, NoneCodec, ZstdCodec};
use crate::compression::constants::{codec_names, DEFAULT_LEVEL_GZIP, DEFAULT_LEVEL_ZSTD};
use crate::compression::types::{Algorithm, Codec, CompressionError};
use crate::config::CompressionConfig;

pub struct CodecInfo {
    pub name: &'static str,
    pub has_levels: bool,
    pub default_level: i32,
}

/// Identifiers accepted by [`resolve`], in registry order.
pub fn supported_algorithms() -> &'static [&'static str] {
    &[codec_names::GZIP, codec_names::ZSTD, codec_names::LZ4, codec_names::NONE]
}

/// Map an identifier to its algorithm. Pure lookup, nothing is allocated
/// for codec state. The error carries the identifier verbatim.
pub fn resolve(identifier: &str) -> Result<Algorithm, CompressionError> {
    identifier.parse()
}

pub fn codec_info(algorithm: Algorithm) -> CodecInfo {
    match algorithm {
        Algorithm::Gzip =>
            CodecInfo { name: codec_names::GZIP, has_levels: true, default_level: DEFAULT_LEVEL_GZIP as i32 },
        Algorithm::Zstd =>
            CodecInfo { name: codec_names::ZSTD, has_levels: true, default_level: DEFAULT_LEVEL_ZSTD },
        Algorithm::Lz4 =>
            CodecInfo { name: codec_names::LZ4, has_levels: false, default_level: 0 },
        Algorithm::None =>
            CodecInfo { name: codec_names::NONE, has_levels: false, default_level: 0 },
    }
}

pub fn create_codec(algorithm: Algorithm, config: &CompressionConfig) -> Box<dyn Codec> {
    match algorithm {
        Algorithm::Gzip => Box::new(GzipCodec::new(config.gzip_level)),
        Algorithm::Zstd => Box::new(ZstdCodec::new(config.zstd_level)),
        Algorithm::Lz4  => Box::new(Lz4Codec::new()),
        Algorithm::None => Box::new(NoneCodec::new()),
    }
}

/// `resolve` then `create_codec`; unsupported identifiers short-circuit
/// before any codec is built.
pub fn resolve_codec(identifier: &str, config: &CompressionConfig) -> Result<Box<dyn Codec>, CompressionError> {
    let algorithm = resolve(identifier)?;
    log::trace!("resolved compression codec {}", algorithm);
    Ok(create_codec(algorithm, config))
}
