//! Card set <-> share token conversion
//!
//! Encoding pipeline: compact shape -> JSON -> DEFLATE -> base64 -> size guard.
//! Decoding runs the inverse, validating at every step.

use super::compress::{deflate, inflate};
use super::errors::{CodecError, CodecResult};
use super::limits::CodecLimits;
use super::serializer::{from_json_bytes, to_json_bytes};
use super::transport::{from_base64, to_base64};
use crate::flashcards::CardSet;

/// Stateless token codec parameterised by its size limits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Codec {
    limits: CodecLimits,
}

impl Codec {
    pub fn new(limits: CodecLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &CodecLimits {
        &self.limits
    }

    /// Encode a card set into a base64 token.
    ///
    /// The token is not yet safe inside a URL fragment; see
    /// [`escape_token`](super::escape_token).
    pub fn encode(&self, set: &CardSet) -> CodecResult<String> {
        let json = to_json_bytes(set)?;
        let compressed = deflate(&json)?;
        let token = to_base64(&compressed);

        log::debug!(
            "Encoded set {} ({} cards): {} JSON bytes, {} compressed, {} token chars",
            set.id,
            set.cards.len(),
            json.len(),
            compressed.len(),
            token.len()
        );

        if token.len() > self.limits.max_token_length {
            return Err(CodecError::PayloadTooLarge {
                length: token.len(),
                limit: self.limits.max_token_length,
            });
        }

        Ok(token)
    }

    /// Decode a base64 token back into a card set.
    ///
    /// Never panics on untrusted input. On success the set id is non-empty.
    pub fn decode(&self, token: &str) -> CodecResult<CardSet> {
        self.decode_inner(token).map_err(|e| {
            log::warn!("Error decoding flashcard token: {}", e);
            e
        })
    }

    fn decode_inner(&self, token: &str) -> CodecResult<CardSet> {
        let max_input = self.limits.max_decode_input();
        if token.len() > max_input {
            return Err(CodecError::InvalidTokenFormat(format!(
                "token is {} characters, at most {} are accepted",
                token.len(),
                max_input
            )));
        }

        let compressed = from_base64(token)?;
        let json = inflate(&compressed, self.limits.max_inflated_bytes)?;
        from_json_bytes(&json)
    }
}

/// Encode with the default limits
pub fn encode(set: &CardSet) -> CodecResult<String> {
    Codec::default().encode(set)
}

/// Decode with the default limits
pub fn decode(token: &str) -> CodecResult<CardSet> {
    Codec::default().decode(token)
}
