//! Size limits applied by the codec

use serde::{Deserialize, Serialize};

/// Longest token `encode` will produce. Most browsers and link-sharing
/// services handle URLs of a few thousand characters.
pub const DEFAULT_MAX_TOKEN_LENGTH: usize = 3000;

/// Decode input may be this many times the maximum token length (percent
/// escaping inflates `+`, `/` and `=` threefold)
pub const DEFAULT_DECODE_INPUT_FACTOR: usize = 4;

/// Upper bound on inflated JSON
pub const DEFAULT_MAX_INFLATED_BYTES: usize = 1024 * 1024;

/// Limits enforced by [`Codec`](super::Codec)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodecLimits {
    #[serde(default = "default_max_token_length")]
    pub max_token_length: usize,
    #[serde(default = "default_decode_input_factor")]
    pub decode_input_factor: usize,
    #[serde(default = "default_max_inflated_bytes")]
    pub max_inflated_bytes: usize,
}

fn default_max_token_length() -> usize {
    DEFAULT_MAX_TOKEN_LENGTH
}

fn default_decode_input_factor() -> usize {
    DEFAULT_DECODE_INPUT_FACTOR
}

fn default_max_inflated_bytes() -> usize {
    DEFAULT_MAX_INFLATED_BYTES
}

impl Default for CodecLimits {
    fn default() -> Self {
        Self {
            max_token_length: DEFAULT_MAX_TOKEN_LENGTH,
            decode_input_factor: DEFAULT_DECODE_INPUT_FACTOR,
            max_inflated_bytes: DEFAULT_MAX_INFLATED_BYTES,
        }
    }
}

impl CodecLimits {
    /// Longest input accepted by the decode path, before any unescaping
    pub fn max_decode_input(&self) -> usize {
        self.max_token_length.saturating_mul(self.decode_input_factor.max(1))
    }
}
