//! compression-core
//!
//! Pluggable compression codec layer for a storage system.
//! Synchronous, stateless, no logging of errors: failures are returned.

#![forbid(unsafe_code)]

// Shared and top level
pub mod config;

// Codecs, registry, guard and facade
pub mod compression;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::{
        compress_data, decompress_data, resolve, supported_algorithms, Algorithm, Codec,
        Compression, CompressionError, SizeLimit,
    };
    pub use crate::config::{CompressionConfig, ConfigError};
}

pub use compression::{compress_data, decompress_data, Compression, CompressionError};
pub use config::CompressionConfig;
