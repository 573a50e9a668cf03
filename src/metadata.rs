use serde::Deserialize;

pub const DATA_URI_PREFIX: &str = "data:application/json;base64,";

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TokenMetadata {
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Token URIs are self-contained `data:` documents. Metadata is always
/// optional: anything that does not decode cleanly maps to `None` and the
/// caller renders a placeholder.
pub fn decode_token_uri(uri: &str) -> Option<TokenMetadata> {
    let payload = uri.strip_prefix(DATA_URI_PREFIX)?;
    let bytes = base64::decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}
