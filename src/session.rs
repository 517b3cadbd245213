//! Negotiated wallet-session capability records.
//!
//! A [`Session`] is the record a wallet and a dapp agree on during session
//! negotiation: per namespace, the accounts the wallet exposes along with the
//! RPC methods and events it supports. This crate only reads sessions; it
//! never validates the negotiation layer beyond degrading gracefully when a
//! namespace entry is absent or malformed.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::chain::ChainId;

/// A negotiated session's capabilities, keyed by namespace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Capabilities per namespace (e.g., `"solana"`).
    pub namespaces: HashMap<String, SessionNamespace>,
}

/// The capabilities a session advertises for one namespace.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionNamespace {
    /// Accounts in `"<namespace>:<reference>:<address>"` form.
    #[serde(default)]
    pub accounts: Vec<String>,
    /// RPC methods the wallet supports for this namespace.
    #[serde(default)]
    pub methods: Vec<String>,
    /// Events the wallet emits for this namespace.
    #[serde(default)]
    pub events: Vec<String>,
}

impl Session {
    /// The set of chain IDs the peer supports for `namespace`, derived from
    /// the `"<namespace>:<reference>"` prefix of each account string.
    ///
    /// An absent namespace entry yields the empty set: a peer that advertises
    /// nothing supports nothing.
    pub fn chains(&self, namespace: &str) -> HashSet<ChainId> {
        self.namespaces
            .get(namespace)
            .map(SessionNamespace::chains)
            .unwrap_or_default()
    }
}

impl SessionNamespace {
    /// The set of chain IDs covered by this namespace's accounts.
    ///
    /// Duplicates collapse (several accounts on one chain are common) and
    /// account strings without all three segments are skipped.
    pub fn chains(&self) -> HashSet<ChainId> {
        self.accounts
            .iter()
            .filter_map(|account| {
                let mut parts = account.splitn(3, ':');
                let namespace = parts.next()?;
                let reference = parts.next()?;
                parts.next()?;
                Some(ChainId::new(namespace, reference))
            })
            .collect()
    }
}
