//! Typed token-list documents.
//!
//! These types mirror the published token-list schema field for field. They
//! are only ever constructed from documents that already passed the
//! [`crate::validator`] gate, and carry no mutating API: a list is replaced
//! wholesale, never edited in place.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Metadata for a single tradable asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    /// Chain ID of the network where this token is deployed.
    pub chain_id: u64,
    /// Contract address of the token on `chain_id`.
    pub address: String,
    /// Ticker symbol, e.g. `UNI`.
    pub symbol: String,
    /// Display name.
    pub name: String,
    /// Decimal precision of the token balance.
    pub decimals: u8,
    /// Logo asset URI.
    #[serde(rename = "logoURI", skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
    /// Identifiers of tags defined at the list level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Arbitrary vendor-specific metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Map<String, Value>>,
}

/// Semantic version of a token list, used in change detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Name and description of a tag referenced by [`TokenInfo::tags`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDefinition {
    pub name: String,
    pub description: String,
}

/// A named, versioned collection of [`TokenInfo`] entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenList {
    /// Name of the list.
    pub name: String,
    /// Timestamp of this list version.
    pub timestamp: DateTime<Utc>,
    /// Version of this list.
    pub version: Version,
    /// The tokens included in the list.
    pub tokens: Vec<TokenInfo>,
    /// Keywords associated with the contents of the list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    /// Tag identifiers mapped to their definitions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, TagDefinition>>,
    /// Logo URI for the list itself.
    #[serde(rename = "logoURI", skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn version_display_and_ordering() {
        let a = Version { major: 1, minor: 2, patch: 3 };
        let b = Version { major: 1, minor: 10, patch: 0 };
        assert_eq!(a.to_string(), "1.2.3");
        assert!(a < b);
    }

    #[test]
    fn token_info_wire_names_are_camel_case() {
        let token = TokenInfo {
            chain_id: 1,
            address: "0x1f9840a85d5aF5bf1D1762F925BDADdC4201F984".to_string(),
            symbol: "UNI".to_string(),
            name: "Uniswap".to_string(),
            decimals: 18,
            logo_uri: Some("https://example.com/uni.png".to_string()),
            tags: None,
            extensions: None,
        };
        let v = serde_json::to_value(&token).unwrap();
        assert_eq!(v["chainId"], json!(1));
        assert_eq!(v["logoURI"], json!("https://example.com/uni.png"));
        assert!(v.get("tags").is_none());
    }
}
