//! config.rs
//! Compression configuration supplied by the surrounding system.
//!
//! The values are read-only once a `Compression` front end is built from them.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::compression::constants::{
    DEFAULT_LEVEL_GZIP, DEFAULT_LEVEL_ZSTD, DEFAULT_MAX_DECOMPRESSION_SIZE, MAX_LEVEL_GZIP,
    MAX_LEVEL_ZSTD,
};
use crate::compression::types::SizeLimit;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid compression config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid compression config: {field} {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompressionConfig {
    /// Inclusive bound on decompressed output, in bytes.
    pub max_decompressed_size: usize,
    pub gzip_level: u32,
    pub zstd_level: i32,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            max_decompressed_size: DEFAULT_MAX_DECOMPRESSION_SIZE,
            gzip_level: DEFAULT_LEVEL_GZIP,
            zstd_level: DEFAULT_LEVEL_ZSTD,
        }
    }
}

impl CompressionConfig {
    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let cfg: CompressionConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_decompressed_size == 0 {
            return Err(ConfigError::Invalid {
                field: "max_decompressed_size",
                reason: "must be greater than zero".into(),
            });
        }
        if self.gzip_level > MAX_LEVEL_GZIP {
            return Err(ConfigError::Invalid {
                field: "gzip_level",
                reason: format!("{} not in 0..={}", self.gzip_level, MAX_LEVEL_GZIP),
            });
        }
        // Ultra levels need windows the decoder refuses.
        let zstd_range = *zstd::compression_level_range().start()..=MAX_LEVEL_ZSTD;
        if !zstd_range.contains(&self.zstd_level) {
            return Err(ConfigError::Invalid {
                field: "zstd_level",
                reason: format!(
                    "{} not in {}..={}",
                    self.zstd_level,
                    zstd_range.start(),
                    zstd_range.end()
                ),
            });
        }
        Ok(())
    }

    pub fn with_max_decompressed_size(mut self, bytes: usize) -> Self {
        self.max_decompressed_size = bytes;
        self
    }

    pub fn with_gzip_level(mut self, level: u32) -> Self {
        self.gzip_level = level;
        self
    }

    pub fn with_zstd_level(mut self, level: i32) -> Self {
        self.zstd_level = level;
        self
    }

    pub fn size_limit(&self) -> SizeLimit {
        SizeLimit::new(self.max_decompressed_size)
    }
}
