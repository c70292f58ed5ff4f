//! Placing tokens in URL fragments and reading them back

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::{CodecError, CodecResult};
use super::token::Codec;
use crate::flashcards::CardSet;

/// Page a share link opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SharePage {
    /// Study the set
    #[default]
    View,
    /// Continue editing the set
    Create,
}

impl SharePage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Create => "create",
        }
    }
}

impl fmt::Display for SharePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SharePage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "view" => Ok(Self::View),
            "create" => Ok(Self::Create),
            other => Err(format!("Unknown page '{}', expected 'view' or 'create'", other)),
        }
    }
}

/// Percent-escape a token for use as a URL fragment
pub fn escape_token(token: &str) -> String {
    urlencoding::encode(token).into_owned()
}

/// Build `{base_url}/{page}#{escaped token}` for a card set.
///
/// An empty base yields a root-relative link.
pub fn share_url(codec: &Codec, base_url: &str, page: SharePage, set: &CardSet) -> CodecResult<String> {
    let token = codec.encode(set)?;
    Ok(format!(
        "{}/{}#{}",
        base_url.trim_end_matches('/'),
        page,
        escape_token(&token)
    ))
}

/// Extract the unescaped token from a full URL, a `#fragment`, or a bare
/// (possibly escaped) token
pub fn token_from_url(text: &str) -> CodecResult<String> {
    let text = text.trim();
    let fragment = match text.split_once('#') {
        Some((_, fragment)) => fragment,
        None => text,
    };

    if fragment.is_empty() {
        return Err(CodecError::InvalidTokenFormat("URL has no fragment".to_string()));
    }

    urlencoding::decode(fragment)
        .map(|token| token.into_owned())
        .map_err(|e| CodecError::InvalidTokenFormat(format!("invalid percent-escape: {}", e)))
}

impl Codec {
    /// Decode a card set from a share URL or fragment.
    ///
    /// The input length cap applies before unescaping.
    pub fn decode_fragment(&self, text: &str) -> CodecResult<CardSet> {
        let max_input = self.limits().max_decode_input();
        if text.len() > max_input {
            return Err(CodecError::InvalidTokenFormat(format!(
                "fragment is {} characters, at most {} are accepted",
                text.len(),
                max_input
            )));
        }
        self.decode(&token_from_url(text)?)
    }
}
