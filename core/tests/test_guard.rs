// Decompression bomb protection, applied uniformly to every codec.

#[cfg(test)]
mod tests {
    use std::io::{self, Read};

    use compression_core::prelude::*;

    const LIMIT: usize = 64 * 1024;

    fn bounded(limit: usize) -> Compression {
        Compression::new(CompressionConfig::default().with_max_decompressed_size(limit))
    }

    fn bomb_message(limit: usize) -> String {
        format!(
            "decompressed data exceeds maximum size limit ({} bytes) - potential decompression bomb",
            limit
        )
    }

// # ✅ 1. Exactly the limit is accepted

    #[test]
    fn payload_at_limit_is_accepted() {
        let c = bounded(LIMIT);
        let raw = vec![b'a'; LIMIT];
        for name in supported_algorithms() {
            let compressed = c.compress_data(&raw, name).unwrap();
            let decompressed = c.decompress_data(&compressed, name).unwrap();
            assert_eq!(decompressed.len(), LIMIT, "{}", name);
            assert_eq!(decompressed, raw);
        }
    }

// # ❌ 2. One byte past the limit is a bomb, for every algorithm

    #[test]
    fn payload_one_past_limit_is_rejected() {
        let c = bounded(LIMIT);
        let raw = vec![b'a'; LIMIT + 1];
        for name in supported_algorithms() {
            let compressed = c.compress_data(&raw, name).unwrap();
            let err = c.decompress_data(&compressed, name).unwrap_err();
            assert!(matches!(err, CompressionError::SizeLimitExceeded { limit: LIMIT }), "{}", name);
            assert_eq!(err.to_string(), bomb_message(LIMIT));
        }
    }

    #[test]
    fn rejection_is_deterministic() {
        let c = bounded(LIMIT);
        let raw = vec![b'a'; LIMIT + 1];
        for name in supported_algorithms() {
            let compressed = c.compress_data(&raw, name).unwrap();
            for _ in 0..5 {
                assert!(matches!(
                    c.decompress_data(&compressed, name),
                    Err(CompressionError::SizeLimitExceeded { .. })
                ));
            }
        }
    }

    #[test]
    fn odd_limits_behave_the_same() {
        // Limits that do not line up with any internal buffer size.
        for limit in [1usize, 7, 4095, 32 * 1024 + 1, 100_003] {
            let c = bounded(limit);
            for name in supported_algorithms() {
                let ok = c.compress_data(&vec![b'z'; limit], name).unwrap();
                assert_eq!(c.decompress_data(&ok, name).unwrap().len(), limit);

                let over = c.compress_data(&vec![b'z'; limit + 1], name).unwrap();
                assert_eq!(c.decompress_data(&over, name).unwrap_err().to_string(), bomb_message(limit));
            }
        }
    }

// # ❌ 3. Small artifact, huge output

    #[test]
    fn highly_compressible_bomb_is_stopped() {
        let _ = env_logger::builder().is_test(true).try_init();
        // 8 MiB of zeros compresses to a few KiB at most.
        let raw = vec![0u8; 8 * 1024 * 1024];
        let c = bounded(LIMIT);
        for name in ["gzip", "zstd", "lz4"] {
            let compressed = Compression::default().compress_data(&raw, name).unwrap();
            assert!(compressed.len() < raw.len() / 100);
            let err = c.decompress_data(&compressed, name).unwrap_err();
            assert_eq!(err.to_string(), bomb_message(LIMIT));
        }
    }

    #[test]
    fn default_limit_is_reported_in_message() {
        let limit = CompressionConfig::default().max_decompressed_size;
        let raw = vec![b'a'; limit + 1];
        let compressed = compress_data(&raw, "zstd").unwrap();
        let err = decompress_data(&compressed, "zstd").unwrap_err();
        assert_eq!(err.to_string(), bomb_message(limit));
    }

// # ✅ 4. The guard stops pulling once the limit is passed

    /// Counts how many artifact bytes the decoder pulled.
    struct Counting<R> {
        inner: R,
        pulled: usize,
    }

    impl<R: Read> Read for Counting<R> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.inner.read(buf)?;
            self.pulled += n;
            Ok(n)
        }
    }

    #[test]
    fn infinite_passthrough_source_terminates() {
        let c = bounded(LIMIT);
        let mut src = Counting { inner: io::repeat(b'a'), pulled: 0 };
        let err = c.decompress_reader(&mut src, "none").unwrap_err();
        assert_eq!(err.to_string(), bomb_message(LIMIT));
        assert!(src.pulled <= LIMIT + 1);
    }

// # ❌ 5. Unsupported identifiers never reach a decoder

    #[test]
    fn unsupported_algorithm_reads_nothing() {
        let c = bounded(LIMIT);
        let mut src = Counting { inner: io::repeat(0), pulled: 0 };
        let err = c.decompress_reader(&mut src, "bzip2").unwrap_err();
        assert_eq!(err.to_string(), "unsupported compression algorithm: bzip2");
        assert_eq!(src.pulled, 0);

        let err = c.compress_reader(&mut src, "LZ4").unwrap_err();
        assert!(matches!(err, CompressionError::UnsupportedAlgorithm(ref id) if id == "LZ4"));
        assert_eq!(src.pulled, 0);
    }
}
