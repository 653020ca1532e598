use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token carried by spacing buttons. Decodes to a no-op so a stray press
/// never triggers a catalog call.
pub(super) const SEPARATOR_TOKEN: &str = "separator";

// Telegram rejects callback payloads above 64 bytes.
const PAYLOAD_LIMIT_BYTES: usize = 64;

/// A navigation action encoded into a button payload. Tokens are scoped to a
/// single render: the constants baked into the grid layout are shared by the
/// encode and decode paths, so changing them only invalidates in-flight
/// buttons, never stored state (there is none).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t")]
pub(super) enum NavigationIntent {
    #[serde(rename = "playlist")]
    SelectPlaylist { id: String },
    #[serde(rename = "page")]
    SelectPage { id: String, pg: usize },
    #[serde(rename = "video")]
    SelectVideo { id: String, pg: usize },
    #[serde(rename = "separator")]
    Separator,
}

#[derive(Debug, Error)]
pub(super) enum DecodeError {
    #[error("empty callback payload")]
    Empty,
    #[error("malformed callback payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub(super) fn encode(intent: &NavigationIntent) -> String {
    if matches!(intent, NavigationIntent::Separator) {
        return SEPARATOR_TOKEN.to_string();
    }
    // Serializing a derived enum of strings and integers cannot fail.
    let token = serde_json::to_string(intent).unwrap_or_default();
    debug_assert!(token.len() <= PAYLOAD_LIMIT_BYTES, "oversized token {}", token);
    token
}

pub(super) fn decode(token: &str) -> Result<NavigationIntent, DecodeError> {
    if token == SEPARATOR_TOKEN {
        return Ok(NavigationIntent::Separator);
    }
    if token.trim().is_empty() {
        return Err(DecodeError::Empty);
    }
    Ok(serde_json::from_str(token)?)
}
