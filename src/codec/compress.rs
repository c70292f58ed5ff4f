//! Raw DEFLATE compression of serialized card sets
//!
//! Tokens carry a bare DEFLATE stream (no zlib or gzip framing) compressed at
//! the maximum level.

use std::io::Write;

use flate2::write::DeflateEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};

use super::errors::{CodecError, CodecResult};

/// Smallest output buffer allocated while inflating
const MIN_INFLATE_BUFFER: usize = 256;

/// Compress bytes with DEFLATE at level 9
pub fn deflate(data: &[u8]) -> CodecResult<Vec<u8>> {
    let mut encoder = DeflateEncoder::new(Vec::with_capacity(data.len() / 2 + 16), Compression::best());
    encoder
        .write_all(data)
        .map_err(|e| CodecError::EncodeFailure(format!("compression failed: {}", e)))?;
    encoder
        .finish()
        .map_err(|e| CodecError::EncodeFailure(format!("compression failed: {}", e)))
}

/// Inflate a raw DEFLATE stream.
///
/// The stream must reach its final block; data that stops early is rejected
/// rather than returned partially. Output larger than `max_output` bytes is
/// rejected as well.
///
/// Inflation runs in streaming mode so the output buffer can grow between
/// calls. A call that consumes nothing and produces nothing while space is
/// left means the input ended before the stream did.
pub fn inflate(data: &[u8], max_output: usize) -> CodecResult<Vec<u8>> {
    let mut inflater = Decompress::new(false);
    let initial = data
        .len()
        .saturating_mul(4)
        .clamp(MIN_INFLATE_BUFFER, max_output.saturating_add(1).max(MIN_INFLATE_BUFFER));
    let mut output = Vec::with_capacity(initial);

    loop {
        if output.len() == output.capacity() {
            let grow = output.capacity().max(MIN_INFLATE_BUFFER);
            output.reserve(grow);
        }

        let consumed = inflater.total_in() as usize;
        let produced = inflater.total_out();
        let remaining = data.get(consumed..).unwrap_or(&[]);

        let status = inflater
            .decompress_vec(remaining, &mut output, FlushDecompress::None)
            .map_err(|e| CodecError::DecompressionFailure(e.to_string()))?;

        if output.len() > max_output {
            return Err(CodecError::DecompressionFailure(format!(
                "inflated data exceeds {} bytes",
                max_output
            )));
        }

        match status {
            Status::StreamEnd => break,
            Status::Ok | Status::BufError => {
                let stalled = inflater.total_in() as usize == consumed && inflater.total_out() == produced;
                if stalled && output.len() < output.capacity() {
                    return Err(CodecError::DecompressionFailure(
                        "compressed data is truncated".to_string(),
                    ));
                }
            }
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::errors::ErrorKind;

    const LIMIT: usize = 1024 * 1024;

    #[test]
    fn test_empty_input_round_trips() {
        let compressed = deflate(&[]).unwrap();
        assert!(!compressed.is_empty());
        assert_eq!(inflate(&compressed, LIMIT).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_arbitrary_bytes_round_trip() {
        let data: Vec<u8> = (0..5000u32).map(|i| (i * 31 % 251) as u8).collect();
        let compressed = deflate(&data).unwrap();
        assert_eq!(inflate(&compressed, LIMIT).unwrap(), data);
    }

    #[test]
    fn test_highly_compressible_data_grows_buffer() {
        let data = "France Paris ".repeat(200);
        let compressed = deflate(data.as_bytes()).unwrap();
        assert!(data.len() > compressed.len() * 4 * 5);
        assert_eq!(inflate(&compressed, LIMIT).unwrap(), data.as_bytes());

        let zeros = vec![0u8; 500_000];
        let compressed = deflate(&zeros).unwrap();
        assert_eq!(inflate(&compressed, LIMIT).unwrap(), zeros);
    }

    #[test]
    fn test_repetitive_data_shrinks() {
        let data = "France Paris ".repeat(200);
        let compressed = deflate(data.as_bytes()).unwrap();
        assert!(compressed.len() < data.len() / 10);
    }

    #[test]
    fn test_truncated_stream_fails() {
        let data = "The quick brown fox jumps over the lazy dog. ".repeat(40);
        let compressed = deflate(data.as_bytes()).unwrap();
        for cut in [1, compressed.len() / 2, compressed.len() - 1] {
            let err = inflate(&compressed[..cut], LIMIT).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DecompressionFailure, "cut at {}", cut);
        }
    }

    #[test]
    fn test_empty_stream_fails() {
        let err = inflate(&[], LIMIT).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DecompressionFailure);
    }

    #[test]
    fn test_garbage_fails() {
        // Block type 0b11 is reserved in DEFLATE
        let err = inflate(&[0xff, 0xff, 0xff, 0xff], LIMIT).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DecompressionFailure);
    }

    #[test]
    fn test_output_cap_is_enforced() {
        let data = vec![0u8; 100_000];
        let compressed = deflate(&data).unwrap();
        let err = inflate(&compressed, 10_000).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DecompressionFailure);
        assert_eq!(inflate(&compressed, 100_000).unwrap().len(), 100_000);
    }
}
