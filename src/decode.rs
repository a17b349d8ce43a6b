use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::DecodeError;
use crate::models::{ContentEnvelope, RawPayload};

/// Pulls the base64 `content` field out of a contents-API response body.
pub fn decode_envelope(raw: &[u8]) -> Result<String, DecodeError> {
    if raw.is_empty() {
        return Err(DecodeError::EmptyResponse);
    }

    let envelope: ContentEnvelope =
        serde_json::from_slice(raw).map_err(|e| DecodeError::MalformedJson(e.to_string()))?;
    Ok(envelope.content)
}

/// Decodes the base64 content field into template bytes.
///
/// GitHub wraps the encoded content at 60 columns, so whitespace is dropped first.
pub fn decode_content_field(encoded: &str) -> Result<RawPayload, DecodeError> {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    if compact.is_empty() {
        return Err(DecodeError::LanguageNotFound);
    }

    STANDARD
        .decode(compact)
        .map_err(|e| DecodeError::InvalidBase64(e.to_string()))
}

/// Full decode step for a fetched body: envelope, then content field.
pub fn decode_payload(raw: &[u8]) -> Result<RawPayload, DecodeError> {
    let encoded = decode_envelope(raw)?;
    decode_content_field(&encoded)
}
