//! JSON text serialization of the compact shape

use serde_json::Value;

use super::compact::{expand, CompactCardSet};
use super::errors::{CodecError, CodecResult};
use crate::flashcards::CardSet;

/// Serialize a card set to compact JSON bytes
pub fn to_json_bytes(set: &CardSet) -> CodecResult<Vec<u8>> {
    serde_json::to_vec(&CompactCardSet::from(set)).map_err(|e| CodecError::EncodeFailure(e.to_string()))
}

/// Parse compact JSON bytes and validate them into a card set.
///
/// Syntax errors (including invalid UTF-8 and truncation) are reported as
/// [`CodecError::ParseFailure`]; well-formed JSON of the wrong shape as
/// [`CodecError::StructuralInvalid`].
pub fn from_json_bytes(bytes: &[u8]) -> CodecResult<CardSet> {
    let value: Value = serde_json::from_slice(bytes).map_err(|e| CodecError::ParseFailure(e.to_string()))?;
    expand(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::errors::ErrorKind;
    use crate::flashcards::Card;

    #[test]
    fn test_unicode_survives_serialization() {
        let set = CardSet::new(
            "ü-1",
            "日本語 🎌",
            vec![Card::new("c1", "\u{1F600} grin", "quote \" and \\ backslash\n")],
        );
        let bytes = to_json_bytes(&set).unwrap();
        assert_eq!(from_json_bytes(&bytes).unwrap(), set);
    }

    #[test]
    fn test_truncated_json_is_parse_failure() {
        let bytes = to_json_bytes(&CardSet::new("abc", "t", vec![])).unwrap();
        let err = from_json_bytes(&bytes[..bytes.len() - 3]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseFailure);
    }

    #[test]
    fn test_invalid_utf8_is_parse_failure() {
        let err = from_json_bytes(b"{\"i\":\"\xff\xfe\",\"c\":[]}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseFailure);
    }

    #[test]
    fn test_wrong_shape_is_structural() {
        let err = from_json_bytes(br#"{"i":"abc","c":{}}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StructuralInvalid);
    }
}
