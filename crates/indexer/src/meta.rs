use serde_yaml::Value;
use std::str::FromStr;

use crate::error::Result;
use crate::guid::Guid;

/// Sidecar filename extension (`<asset>.meta`), matched case-insensitively.
pub const META_EXTENSION: &str = "meta";

/// Fields extracted from one parsed sidecar document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaDocument {
    /// The declared asset GUID, if present and well-formed.
    pub guid: Option<Guid>,

    /// Whether the sidecar describes a directory rather than a file asset.
    pub folder_asset: bool,
}

/// Parse the content of a `.meta` sidecar.
///
/// Fails only on YAML that does not parse at all; missing or malformed
/// fields degrade to `None`/`false` so callers can decide what to skip.
pub fn parse_meta(content: &str) -> Result<MetaDocument> {
    let doc: Value = serde_yaml::from_str(content)?;

    let guid = doc
        .get("guid")
        .and_then(Value::as_str)
        .and_then(|raw| Guid::from_str(raw).ok());

    let folder_asset = doc.get("folderAsset").map(is_truthy).unwrap_or(false);

    Ok(MetaDocument { guid, folder_asset })
}

// Unity writes YAML 1.1 booleans (`folderAsset: yes`); serde_yaml speaks
// YAML 1.2, where those spellings stay strings.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => {
            s.eq_ignore_ascii_case("yes")
                || s.eq_ignore_ascii_case("on")
                || s.eq_ignore_ascii_case("true")
        }
        _ => false,
    }
}
