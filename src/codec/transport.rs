//! Base64 transport encoding for compressed tokens

use std::sync::OnceLock;

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD as BASE64};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use regex::Regex;

use super::errors::{CodecError, CodecResult};

/// Standard alphabet with up to two padding characters at the end
const BASE64_PATTERN: &str = r"^[A-Za-z0-9+/]*={0,2}$";

/// Decoder that, like a browser `atob`, tolerates missing padding and
/// non-zero trailing bits
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

fn base64_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(BASE64_PATTERN).expect("valid base64 pattern"))
}

/// Encode bytes as padded standard base64
pub fn to_base64(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Check that `text` only uses the base64 alphabet and trailing padding
pub fn is_base64_text(text: &str) -> bool {
    base64_pattern().is_match(text)
}

/// Decode base64 text after trimming whitespace and validating the alphabet.
///
/// Input outside the alphabet never reaches the decoder.
pub fn from_base64(text: &str) -> CodecResult<Vec<u8>> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CodecError::InvalidTokenFormat("token is empty".to_string()));
    }
    if !is_base64_text(text) {
        return Err(CodecError::InvalidTokenFormat(
            "token contains characters outside the base64 alphabet".to_string(),
        ));
    }

    LENIENT
        .decode(text)
        .map_err(|e| CodecError::InvalidTokenFormat(format!("base64 decode error: {}", e)))
}
