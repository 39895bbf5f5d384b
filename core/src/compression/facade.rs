//! compression/facade.rs
//! Public entry points: resolve, transform, bound.

use crate::compression::registry::resolve_codec;
use crate::compression::types::CompressionError;
use crate::config::CompressionConfig;

/// Stateless compression front end. Holds only read-only configuration, so
/// one value can serve concurrent callers.
#[derive(Clone, Debug, Default)]
pub struct Compression {
    config: CompressionConfig,
}

impl Compression {
    pub fn new(config: CompressionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompressionConfig {
        &self.config
    }

    /// Compress `payload` with the codec named by `identifier`.
    pub fn compress_data(&self, payload: &[u8], identifier: &str) -> Result<Vec<u8>, CompressionError> {
        let codec = resolve_codec(identifier, &self.config)?;
        let artifact = codec.compress(payload)?;
        log::trace!("{} compressed {} -> {} bytes", identifier, payload.len(), artifact.len());
        Ok(artifact)
    }

    /// Decompress `artifact`, which must have been produced by the same
    /// algorithm. Output is bounded by the configured size limit.
    pub fn decompress_data(&self, artifact: &[u8], identifier: &str) -> Result<Vec<u8>, CompressionError> {
        let codec = resolve_codec(identifier, &self.config)?;
        let payload = codec.decompress(artifact, self.config.size_limit())?;
        log::trace!("{} decompressed {} -> {} bytes", identifier, artifact.len(), payload.len());
        Ok(payload)
    }
}

/// [`Compression::compress_data`] with the default configuration.
pub fn compress_data(payload: &[u8], identifier: &str) -> Result<Vec<u8>, CompressionError> {
    Compression::default().compress_data(payload, identifier)
}

/// [`Compression::decompress_data`] bounded by `DEFAULT_MAX_DECOMPRESSION_SIZE`.
pub fn decompress_data(artifact: &[u8], identifier: &str) -> Result<Vec<u8>, CompressionError> {
    Compression::default().decompress_data(artifact, identifier)
}
