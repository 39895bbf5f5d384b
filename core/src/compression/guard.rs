//! compression/guard.rs
//! Bounded decompression guard shared by every codec.
//!
//! - Pulls decompressed bytes in `READ_CHUNK_SIZE` increments.
//! - Never buffers more than `limit + 1` bytes.
//! - Exactly `limit` bytes is accepted; `limit + 1` is the minimal overflow.
use std::io::{ErrorKind, Read};

use crate::compression::constants::READ_CHUNK_SIZE;
use crate::compression::types::{Algorithm, CompressionError, SizeLimit};

/// Drain `src` to EOF, aborting with `SizeLimitExceeded` as soon as the running
/// total passes `limit`.
///
/// `src` is consumed; the decoder it wraps is dropped on every exit path and no
/// partial output is ever returned. Read failures surface as
/// `DecompressionFailure` tagged with `algorithm`.
pub fn read_bounded<R: Read>(
    src: R,
    limit: SizeLimit,
    algorithm: Algorithm,
) -> Result<Vec<u8>, CompressionError> {
    let max = limit.bytes();
    // One byte past the limit is enough to detect an overflow.
    let mut src = src.take((max as u64).saturating_add(1));

    let mut out = Vec::with_capacity(max.saturating_add(1).min(READ_CHUNK_SIZE));
    let mut buf = vec![0u8; READ_CHUNK_SIZE];

    loop {
        let n = match src.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(CompressionError::decompress(algorithm, e)),
        };

        if out.len() + n > max {
            return Err(CompressionError::SizeLimitExceeded { limit: max });
        }
        out.extend_from_slice(&buf[..n]);
    }

    Ok(out)
}
