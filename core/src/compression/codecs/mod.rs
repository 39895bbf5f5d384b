//! compression/codecs/mod.rs
//! Per-algorithm codec adapters.
//!
//! Each adapter only wires its library's streaming encoder/decoder;
//! size enforcement lives in `guard::read_bounded`.

pub mod gzip;
pub mod lz4;
pub mod none;
pub mod zstd;

pub use gzip::*;
pub use lz4::*;
pub use none::*;
pub use zstd::*;
