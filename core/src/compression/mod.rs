//! compression/mod.rs
//! Pluggable compression codecs with bounded decompression.
//!
//! Notes:
//! - Identifiers are resolved by the registry before any codec work begins.
//! - Every decompression path funnels through `guard::read_bounded`.
//! - Artifacts are not self-describing; callers record which algorithm produced them.

pub mod constants;
pub mod types;
pub mod registry;
pub mod guard;
pub mod codecs;
pub mod facade;
pub mod stream;

pub use constants::*;
pub use types::*;
pub use registry::*;
pub use guard::*;
pub use facade::*;
