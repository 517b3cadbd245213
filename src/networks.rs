//! Registry of the recognized Solana networks.
//!
//! The Solana namespace went through an identifier-scheme change: mainnet and
//! devnet were originally addressed by legacy references, later superseded by
//! the first 32 characters of the base58-encoded genesis block hash (per the
//! [CAIP-2 Solana namespace](https://github.com/ChainAgnostic/namespaces/blob/main/solana/caip2.md)).
//! Testnet only ever existed under the canonical scheme.
//!
//! The enumeration here is closed and namespace-scoped: these are the only
//! identifiers this crate recognizes. Anything else is treated by the
//! resolver as an already-canonical singleton and passed through untouched.
//!
//! # Example
//!
//! ```
//! use solana_chains::networks::{SolanaNetwork, network_by_chain_id};
//! use solana_chains::chain::ChainId;
//!
//! let mainnet = SolanaNetwork::Mainnet.chain_id();
//! assert_eq!(mainnet.to_string(), "solana:5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp");
//!
//! // Deprecated identifiers resolve to the same network.
//! let legacy = ChainId::solana("4sGjMW1sUnHzSxGspuhpqLDx6wiyjNtZ");
//! assert_eq!(network_by_chain_id(&legacy), Some(SolanaNetwork::Mainnet));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::sync::LazyLock;

use crate::chain::ChainId;

/// The CAIP-2 namespace for Solana chains.
pub const SOLANA_NAMESPACE: &str = "solana";

/// The recognized Solana networks.
///
/// Each variant carries its canonical chain reference and, for the networks
/// that predate the genesis-hash scheme, the deprecated legacy reference.
#[derive(Debug, Hash, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolanaNetwork {
    /// Solana Mainnet - live production environment.
    #[serde(rename = "solana")]
    Mainnet,
    /// Solana Devnet - publicly accessible developer environment.
    #[serde(rename = "solana-devnet")]
    Devnet,
    /// Solana Testnet - validator and release testing environment.
    #[serde(rename = "solana-testnet")]
    Testnet,
}

impl SolanaNetwork {
    /// Return all recognized [`SolanaNetwork`] variants.
    pub fn variants() -> &'static [SolanaNetwork] {
        &[
            SolanaNetwork::Mainnet,
            SolanaNetwork::Devnet,
            SolanaNetwork::Testnet,
        ]
    }

    /// The human-readable network name (e.g., `"solana-devnet"`).
    pub const fn name(self) -> &'static str {
        match self {
            SolanaNetwork::Mainnet => "solana",
            SolanaNetwork::Devnet => "solana-devnet",
            SolanaNetwork::Testnet => "solana-testnet",
        }
    }

    /// The canonical chain reference: the first 32 characters of the
    /// base58-encoded genesis block hash.
    pub const fn reference(self) -> &'static str {
        match self {
            SolanaNetwork::Mainnet => "5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp",
            SolanaNetwork::Devnet => "EtWTRABZaYq6iMfeYKouRu166VU2xqa1",
            SolanaNetwork::Testnet => "4uhcVJyU9pJkvQyS88uRDiswHXSCkY3z",
        }
    }

    /// The deprecated legacy chain reference, for networks that have one.
    ///
    /// Testnet never had a legacy identifier.
    pub const fn deprecated_reference(self) -> Option<&'static str> {
        match self {
            SolanaNetwork::Mainnet => Some("4sGjMW1sUnHzSxGspuhpqLDx6wiyjNtZ"),
            SolanaNetwork::Devnet => Some("8E9rvCKLFQia2Y35HXjjpWzj8weVo44K"),
            SolanaNetwork::Testnet => None,
        }
    }

    /// The canonical CAIP-2 chain ID for this network.
    pub fn chain_id(self) -> ChainId {
        ChainId::solana(self.reference())
    }

    /// The deprecated CAIP-2 chain ID for this network, if one exists.
    pub fn deprecated_chain_id(self) -> Option<ChainId> {
        self.deprecated_reference().map(ChainId::solana)
    }

    /// Whether the given chain ID is this network's deprecated form.
    pub fn is_deprecated_form(self, chain_id: &ChainId) -> bool {
        self.deprecated_chain_id()
            .is_some_and(|legacy| legacy == *chain_id)
    }
}

impl Display for SolanaNetwork {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<SolanaNetwork> for ChainId {
    fn from(value: SolanaNetwork) -> Self {
        value.chain_id()
    }
}

/// Lazy-initialized map from network name to canonical chain ID.
static NAME_TO_CHAIN_ID: LazyLock<HashMap<&'static str, ChainId>> = LazyLock::new(|| {
    SolanaNetwork::variants()
        .iter()
        .map(|network| (network.name(), network.chain_id()))
        .collect()
});

/// Lazy-initialized map from chain ID to network.
///
/// Both the canonical and the deprecated identifier of a network are keys, so
/// a lookup answers "which network is this?" regardless of the scheme the
/// identifier comes from.
static CHAIN_ID_TO_NETWORK: LazyLock<HashMap<ChainId, SolanaNetwork>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for network in SolanaNetwork::variants() {
        map.insert(network.chain_id(), *network);
        if let Some(legacy) = network.deprecated_chain_id() {
            map.insert(legacy, *network);
        }
    }
    map
});

/// Retrieves the canonical chain ID for a network name.
///
/// The lookup is case-sensitive. Returns `None` for names outside the
/// recognized enumeration.
///
/// # Example
///
/// ```
/// use solana_chains::networks::chain_id_by_network_name;
///
/// let testnet = chain_id_by_network_name("solana-testnet").unwrap();
/// assert_eq!(testnet.reference, "4uhcVJyU9pJkvQyS88uRDiswHXSCkY3z");
///
/// assert!(chain_id_by_network_name("solana-localnet").is_none());
/// ```
pub fn chain_id_by_network_name(name: &str) -> Option<&ChainId> {
    NAME_TO_CHAIN_ID.get(name)
}

/// Retrieves the network a chain ID belongs to, matching both the canonical
/// and the deprecated form.
pub fn network_by_chain_id(chain_id: &ChainId) -> Option<SolanaNetwork> {
    CHAIN_ID_TO_NETWORK.get(chain_id).copied()
}

/// Retrieves the network name for a chain ID, matching both the canonical and
/// the deprecated form.
pub fn network_name_by_chain_id(chain_id: &ChainId) -> Option<&'static str> {
    network_by_chain_id(chain_id).map(SolanaNetwork::name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_id_by_network_name() {
        let mainnet = chain_id_by_network_name("solana").unwrap();
        assert_eq!(mainnet.namespace, "solana");
        assert_eq!(mainnet.reference, "5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp");

        let devnet = chain_id_by_network_name("solana-devnet").unwrap();
        assert_eq!(devnet.reference, "EtWTRABZaYq6iMfeYKouRu166VU2xqa1");

        assert!(chain_id_by_network_name("unknown").is_none());
    }

    #[test]
    fn test_network_by_chain_id_canonical() {
        for network in SolanaNetwork::variants() {
            let chain_id = ChainId::from(*network);
            assert_eq!(network_by_chain_id(&chain_id), Some(*network));
        }
    }

    #[test]
    fn test_network_by_chain_id_deprecated() {
        let legacy_mainnet = ChainId::solana("4sGjMW1sUnHzSxGspuhpqLDx6wiyjNtZ");
        assert_eq!(
            network_by_chain_id(&legacy_mainnet),
            Some(SolanaNetwork::Mainnet)
        );

        let legacy_devnet = ChainId::solana("8E9rvCKLFQia2Y35HXjjpWzj8weVo44K");
        assert_eq!(
            network_by_chain_id(&legacy_devnet),
            Some(SolanaNetwork::Devnet)
        );
    }

    #[test]
    fn test_network_by_chain_id_unknown() {
        assert!(network_by_chain_id(&ChainId::solana("unknown-ref")).is_none());
        // The reference alone is not enough, the namespace has to match too.
        let wrong_namespace = ChainId::new("eip155", "5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp");
        assert!(network_by_chain_id(&wrong_namespace).is_none());
    }

    #[test]
    fn test_network_name_by_chain_id() {
        let legacy_devnet = ChainId::solana("8E9rvCKLFQia2Y35HXjjpWzj8weVo44K");
        assert_eq!(network_name_by_chain_id(&legacy_devnet), Some("solana-devnet"));
    }

    #[test]
    fn test_is_deprecated_form() {
        let legacy_mainnet = ChainId::solana("4sGjMW1sUnHzSxGspuhpqLDx6wiyjNtZ");
        assert!(SolanaNetwork::Mainnet.is_deprecated_form(&legacy_mainnet));
        assert!(!SolanaNetwork::Mainnet.is_deprecated_form(&SolanaNetwork::Mainnet.chain_id()));
        assert!(!SolanaNetwork::Testnet.is_deprecated_form(&SolanaNetwork::Testnet.chain_id()));
    }

    #[test]
    fn test_serde_names_match_display() {
        for network in SolanaNetwork::variants() {
            let json = serde_json::to_string(network).unwrap();
            assert_eq!(json, format!("\"{network}\""));
        }
    }
}
