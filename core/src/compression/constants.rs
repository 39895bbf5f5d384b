//! compression/constants.rs
//! Stable codec identifiers and defaults.

/// Wire identifiers accepted by the registry. Exact, case-sensitive.
pub mod codec_names {
    pub const GZIP: &str = "gzip";
    pub const ZSTD: &str = "zstd";
    pub const LZ4: &str  = "lz4";
    pub const NONE: &str = "none";
}

/// Default compression levels (balanced).
pub const DEFAULT_LEVEL_GZIP: u32 = 6;
pub const DEFAULT_LEVEL_ZSTD: i32 = 3;

/// Gzip accepts levels 0 (store) through 9 (best).
pub const MAX_LEVEL_GZIP: u32 = 9;

/// Highest non-ultra zstd level. Levels up to here never use a window
/// above `ZSTD_WINDOW_LOG_MAX`.
pub const MAX_LEVEL_ZSTD: i32 = 19;

/// Largest zstd window accepted when decoding (2^23 = 8 MiB).
pub const ZSTD_WINDOW_LOG_MAX: u32 = 23;

/// Default upper bound on decompressed output (100 MiB).
pub const DEFAULT_MAX_DECOMPRESSION_SIZE: usize = 100 * 1024 * 1024;

/// Increment used by the bounded reader when pulling decompressed bytes.
pub const READ_CHUNK_SIZE: usize = 32 * 1024;
