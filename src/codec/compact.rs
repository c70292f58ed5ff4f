//! Short-keyed representation of a card set
//!
//! Every byte of the token ends up in the shared URL, so field names are
//! reduced to single characters before serialization:
//!
//! ```text
//! { "i": id, "t": title, "c": [ { "i": id, "f": front, "b": back }, ... ] }
//! ```

use serde::Serialize;
use serde_json::{Map, Value};

use super::errors::{CodecError, CodecResult};
use crate::flashcards::{Card, CardSet};

/// Borrowed compact view of a [`CardSet`], ready to serialize
#[derive(Debug, Serialize)]
pub struct CompactCardSet<'a> {
    #[serde(rename = "i")]
    pub id: &'a str,
    #[serde(rename = "t")]
    pub title: &'a str,
    #[serde(rename = "c")]
    pub cards: Vec<CompactCard<'a>>,
}

#[derive(Debug, Serialize)]
pub struct CompactCard<'a> {
    #[serde(rename = "i")]
    pub id: &'a str,
    #[serde(rename = "f")]
    pub front: &'a str,
    #[serde(rename = "b")]
    pub back: &'a str,
}

impl<'a> From<&'a CardSet> for CompactCardSet<'a> {
    fn from(set: &'a CardSet) -> Self {
        Self {
            id: &set.id,
            title: &set.title,
            cards: set
                .cards
                .iter()
                .map(|card| CompactCard {
                    id: &card.id,
                    front: &card.front,
                    back: &card.back,
                })
                .collect(),
        }
    }
}

/// Rebuild a [`CardSet`] from an untrusted parsed value.
///
/// Requires a non-empty string `i` and an array `c` whose entries are objects
/// with string `i`, `f` and `b`. A missing or null `t` becomes an empty title.
/// Unknown keys are ignored.
pub fn expand(value: Value) -> CodecResult<CardSet> {
    let mut root = match value {
        Value::Object(map) => map,
        other => {
            return Err(CodecError::StructuralInvalid(format!(
                "expected an object at the top level, found {}",
                type_name(&other)
            )))
        }
    };

    let id = match root.remove("i") {
        Some(Value::String(id)) if !id.is_empty() => id,
        Some(Value::String(_)) => {
            return Err(CodecError::StructuralInvalid("set id is empty".to_string()))
        }
        Some(other) => {
            return Err(CodecError::StructuralInvalid(format!(
                "set id must be a string, found {}",
                type_name(&other)
            )))
        }
        None => return Err(CodecError::StructuralInvalid("set id is missing".to_string())),
    };

    // Sets can be shared before they are named
    let title = match root.remove("t") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(title)) => title,
        Some(other) => {
            return Err(CodecError::StructuralInvalid(format!(
                "title must be a string, found {}",
                type_name(&other)
            )))
        }
    };

    let entries = match root.remove("c") {
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            return Err(CodecError::StructuralInvalid(format!(
                "cards must be an array, found {}",
                type_name(&other)
            )))
        }
        None => return Err(CodecError::StructuralInvalid("cards are missing".to_string())),
    };

    let cards = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| expand_card(index, entry))
        .collect::<CodecResult<Vec<_>>>()?;

    Ok(CardSet { id, title, cards })
}

fn expand_card(index: usize, entry: Value) -> CodecResult<Card> {
    let mut fields = match entry {
        Value::Object(map) => map,
        other => {
            return Err(CodecError::StructuralInvalid(format!(
                "card {} must be an object, found {}",
                index,
                type_name(&other)
            )))
        }
    };

    Ok(Card {
        id: take_string(&mut fields, "i", index)?,
        front: take_string(&mut fields, "f", index)?,
        back: take_string(&mut fields, "b", index)?,
    })
}

fn take_string(fields: &mut Map<String, Value>, key: &str, index: usize) -> CodecResult<String> {
    match fields.remove(key) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(CodecError::StructuralInvalid(format!(
            "card {} field '{}' must be a string, found {}",
            index,
            key,
            type_name(&other)
        ))),
        None => Err(CodecError::StructuralInvalid(format!(
            "card {} is missing field '{}'",
            index, key
        ))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::errors::ErrorKind;
    use serde_json::json;

    fn capitals() -> CardSet {
        CardSet::new("abc123", "Capitals", vec![Card::new("c1", "France", "Paris")])
    }

    #[test]
    fn test_compact_uses_short_keys_in_order() {
        let set = capitals();
        let json = serde_json::to_string(&CompactCardSet::from(&set)).unwrap();
        assert_eq!(
            json,
            r#"{"i":"abc123","t":"Capitals","c":[{"i":"c1","f":"France","b":"Paris"}]}"#
        );
    }

    #[test]
    fn test_expand_restores_full_names() {
        let value = serde_json::to_value(CompactCardSet::from(&capitals())).unwrap();
        assert_eq!(expand(value).unwrap(), capitals());
    }

    #[test]
    fn test_expand_defaults_missing_or_null_title() {
        let set = expand(json!({"i": "abc", "c": []})).unwrap();
        assert_eq!(set.title, "");

        let set = expand(json!({"i": "abc", "t": null, "c": []})).unwrap();
        assert_eq!(set.title, "");
    }

    #[test]
    fn test_expand_requires_non_empty_id() {
        let missing = expand(json!({"t": "x", "c": []})).unwrap_err();
        assert_eq!(missing.kind(), ErrorKind::StructuralInvalid);

        let empty = expand(json!({"i": "", "c": []})).unwrap_err();
        assert_eq!(empty.kind(), ErrorKind::StructuralInvalid);

        let numeric = expand(json!({"i": 7, "c": []})).unwrap_err();
        assert_eq!(numeric.kind(), ErrorKind::StructuralInvalid);
    }

    #[test]
    fn test_expand_requires_card_array() {
        for cards in [json!("nope"), json!({"i": "c1"}), json!(null)] {
            let err = expand(json!({"i": "abc", "c": cards})).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::StructuralInvalid);
        }
        let err = expand(json!({"i": "abc"})).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StructuralInvalid);
    }

    #[test]
    fn test_expand_rejects_malformed_cards() {
        let err = expand(json!({"i": "abc", "c": [{"i": "c1", "f": "front"}]})).unwrap_err();
        assert!(err.to_string().contains("'b'"));

        let err = expand(json!({"i": "abc", "c": [{"i": "c1", "f": 1, "b": "x"}]})).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StructuralInvalid);

        let err = expand(json!({"i": "abc", "c": ["card"]})).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StructuralInvalid);
    }

    #[test]
    fn test_expand_rejects_non_object_root() {
        let err = expand(json!([1, 2, 3])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StructuralInvalid);
    }

    #[test]
    fn test_expand_ignores_unknown_keys() {
        let set = expand(json!({"i": "abc", "t": "T", "c": [], "v": 2})).unwrap();
        assert_eq!(set.id, "abc");
    }
}
