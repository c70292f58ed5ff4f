//! URL state codec for card sets
//!
//! This module provides:
//! - Compact short-keyed mapping of card sets and schema validation on the way back
//! - JSON serialization, raw DEFLATE compression and base64 transport encoding
//! - A size guard on produced tokens and a cap on decode input
//! - Fragment helpers for building and reading share links
//!
//! Every operation is a pure function of its input.

pub mod compact;
pub mod compress;
pub mod errors;
pub mod fragment;
pub mod limits;
pub mod serializer;
pub mod token;
pub mod transport;

// Re-export commonly used types
pub use errors::{CodecError, CodecResult, ErrorKind};
pub use fragment::{escape_token, share_url, token_from_url, SharePage};
pub use limits::{CodecLimits, DEFAULT_MAX_TOKEN_LENGTH};
pub use token::{decode, encode, Codec};
