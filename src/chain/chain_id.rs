use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::str::FromStr;

use crate::networks::{self, SOLANA_NAMESPACE};

/// A CAIP-2 compliant blockchain identifier.
///
/// Chain IDs uniquely identify blockchain networks across different
/// ecosystems. The format is `namespace:reference` where:
///
/// - `namespace` identifies the blockchain family (e.g., `solana`, `eip155`)
/// - `reference` identifies the specific chain within that family
///
/// Equality is structural: two chain IDs are the same chain exactly when both
/// components match. Whether two *different* chain IDs name the same Solana
/// network is the business of [`crate::resolve`], not of this type.
///
/// # Serialization
///
/// Serializes to/from a colon-separated string: `"solana:EtWTRABZaYq6iMfeYKouRu166VU2xqa1"`
///
/// # Example
///
/// ```
/// use solana_chains::chain::ChainId;
///
/// let devnet = ChainId::solana("EtWTRABZaYq6iMfeYKouRu166VU2xqa1");
/// assert_eq!(devnet.to_string(), "solana:EtWTRABZaYq6iMfeYKouRu166VU2xqa1");
///
/// let parsed: ChainId = "solana:EtWTRABZaYq6iMfeYKouRu166VU2xqa1".parse().unwrap();
/// assert_eq!(parsed, devnet);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChainId {
    /// The blockchain namespace (e.g., `solana`).
    pub namespace: String,
    /// The chain-specific reference (e.g., `5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp`).
    pub reference: String,
}

impl ChainId {
    /// Creates a new chain ID from namespace and reference components.
    pub fn new<N: Into<String>, R: Into<String>>(namespace: N, reference: R) -> Self {
        Self {
            namespace: namespace.into(),
            reference: reference.into(),
        }
    }

    /// Creates a chain ID in the Solana namespace.
    ///
    /// # Example
    ///
    /// ```
    /// use solana_chains::chain::ChainId;
    ///
    /// let mainnet = ChainId::solana("5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp");
    /// assert_eq!(mainnet.namespace, "solana");
    /// ```
    pub fn solana<R: Into<String>>(reference: R) -> Self {
        Self::new(SOLANA_NAMESPACE, reference)
    }

    /// Returns the namespace component of the chain ID.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the reference component of the chain ID.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Whether this chain ID belongs to the Solana namespace.
    pub fn is_solana(&self) -> bool {
        self.namespace == SOLANA_NAMESPACE
    }

    /// Creates a chain ID from a well-known network name.
    ///
    /// Looks the name up in the registry of recognized Solana networks
    /// (see [`crate::networks`]) and returns the canonical chain ID.
    ///
    /// # Example
    ///
    /// ```
    /// use solana_chains::chain::ChainId;
    ///
    /// let mainnet = ChainId::from_network_name("solana").unwrap();
    /// assert_eq!(mainnet.to_string(), "solana:5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp");
    ///
    /// assert!(ChainId::from_network_name("unknown").is_none());
    /// ```
    pub fn from_network_name(network_name: &str) -> Option<Self> {
        networks::chain_id_by_network_name(network_name).cloned()
    }

    /// Returns the well-known network name for this chain ID, if any.
    ///
    /// Both the canonical and the deprecated identifier of a network resolve
    /// to the same name. This is the reverse of [`ChainId::from_network_name`].
    pub fn as_network_name(&self) -> Option<&'static str> {
        networks::network_name_by_chain_id(self)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.reference)
    }
}

impl From<ChainId> for String {
    fn from(value: ChainId) -> Self {
        value.to_string()
    }
}

/// Error returned when parsing an invalid chain ID string.
///
/// A valid chain ID must be in the format `namespace:reference` where the
/// namespace is non-empty.
#[derive(Debug, thiserror::Error)]
#[error("Invalid chain id format {0}")]
pub struct ChainIdFormatError(String);

impl FromStr for ChainId {
    type Err = ChainIdFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (namespace, reference) = s.split_once(':').ok_or(ChainIdFormatError(s.into()))?;
        if namespace.is_empty() || reference.is_empty() {
            return Err(ChainIdFormatError(s.into()));
        }
        Ok(ChainId {
            namespace: namespace.into(),
            reference: reference.into(),
        })
    }
}

impl Serialize for ChainId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ChainId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ChainId::from_str(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_id_serialize() {
        let chain_id = ChainId::solana("5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp");
        let serialized = serde_json::to_string(&chain_id).unwrap();
        assert_eq!(serialized, "\"solana:5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp\"");
    }

    #[test]
    fn test_chain_id_deserialize() {
        let chain_id: ChainId =
            serde_json::from_str("\"solana:5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp\"").unwrap();
        assert_eq!(chain_id.namespace, "solana");
        assert_eq!(chain_id.reference, "5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp");
    }

    #[test]
    fn test_chain_id_roundtrip() {
        let original = ChainId::solana("EtWTRABZaYq6iMfeYKouRu166VU2xqa1");
        let serialized = serde_json::to_string(&original).unwrap();
        let deserialized: ChainId = serde_json::from_str(&serialized).unwrap();
        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_chain_id_deserialize_invalid_format() {
        let result: Result<ChainId, _> = serde_json::from_str("\"invalid\"");
        assert!(result.is_err());

        let result: Result<ChainId, _> = serde_json::from_str("\":reference\"");
        assert!(result.is_err());

        let result: Result<ChainId, _> = serde_json::from_str("\"solana:\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_chain_id_deserialize_unknown_namespace() {
        // Parsing is permissive: any well-formed namespace is accepted.
        let result: Result<ChainId, _> = serde_json::from_str("\"unknown:1\"");
        assert!(result.is_ok());
    }

    #[test]
    fn test_chain_id_is_solana() {
        assert!(ChainId::solana("4uhcVJyU9pJkvQyS88uRDiswHXSCkY3z").is_solana());
        assert!(!ChainId::new("eip155", "8453").is_solana());
    }

    #[test]
    fn test_chain_id_from_network_name() {
        let devnet = ChainId::from_network_name("solana-devnet").unwrap();
        assert_eq!(devnet.namespace, "solana");
        assert_eq!(devnet.reference, "EtWTRABZaYq6iMfeYKouRu166VU2xqa1");

        assert!(ChainId::from_network_name("unknown").is_none());
    }

    #[test]
    fn test_chain_id_as_network_name() {
        let mainnet = ChainId::solana("5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp");
        assert_eq!(mainnet.as_network_name(), Some("solana"));

        // The deprecated identifier names the same network.
        let legacy_mainnet = ChainId::solana("4sGjMW1sUnHzSxGspuhpqLDx6wiyjNtZ");
        assert_eq!(legacy_mainnet.as_network_name(), Some("solana"));

        let unknown = ChainId::solana("11111111111111111111111111111111");
        assert!(unknown.as_network_name().is_none());
    }
}
