//! Chain-identity reconciliation across the Solana identifier-scheme change.
//!
//! Wallets and dapps migrated to the genesis-hash identifier scheme at
//! different times, so a session has to treat the canonical and the
//! deprecated identifier of a network as the same chain. The
//! [`ChainResolver`] encodes that backward-compatibility policy:
//!
//! - [`equivalent_chain_ids`](ChainResolver::equivalent_chain_ids) expands an
//!   identifier into the ordered, canonical-first set to match against a
//!   peer's advertised capabilities. It never fails; unrecognized
//!   identifiers pass through as singletons.
//! - [`default_chain_from_session`](ChainResolver::default_chain_from_session)
//!   picks the single identifier to use when talking to a connected wallet.
//!   It prefers the canonical form, degrades to the deprecated one when the
//!   peer is on the legacy scheme, and fails only when the requested
//!   identifier is outside the recognized enumeration.
//!
//! Every fallback is audible through the [`WarningSink`], never through the
//! return value, so legacy peers stay usable while migration progress stays
//! visible in telemetry.
//!
//! Both operations are pure, synchronous, and reentrant: no shared mutable
//! state, safe to call from any number of threads without coordination.

use crate::chain::ChainId;
use crate::diagnostics::{TracingSink, WarningKind, WarningSink};
use crate::networks::{self, SOLANA_NAMESPACE, SolanaNetwork};
use crate::session::Session;

/// Error resolving a default chain from a negotiated session.
#[derive(Debug, thiserror::Error)]
pub enum ResolutionError {
    /// The requested identifier is outside the recognized Solana enumeration.
    #[error(
        "unable to resolve a default chain from the session: {0} is not a recognized Solana chain"
    )]
    UnsupportedChain(ChainId),
}

/// Resolves chain identities for the Solana namespace.
///
/// The resolver is stateless apart from the warning sink it reports through.
/// [`ChainResolver::new`] wires in the tracing-backed [`TracingSink`]; tests
/// inject a recording fake via [`ChainResolver::with_sink`].
///
/// # Example
///
/// ```
/// use solana_chains::networks::SolanaNetwork;
/// use solana_chains::resolve::ChainResolver;
///
/// let resolver = ChainResolver::new();
/// let equivalents = resolver.equivalent_chain_ids(&SolanaNetwork::Mainnet.chain_id());
/// assert_eq!(equivalents.len(), 2);
/// assert_eq!(equivalents[0], SolanaNetwork::Mainnet.chain_id());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChainResolver<S = TracingSink> {
    sink: S,
}

impl ChainResolver<TracingSink> {
    /// A resolver reporting warnings through [`tracing`].
    pub fn new() -> Self {
        Self { sink: TracingSink }
    }
}

impl<S: WarningSink> ChainResolver<S> {
    /// A resolver reporting warnings through the given sink.
    pub fn with_sink(sink: S) -> Self {
        Self { sink }
    }

    /// All identifiers equivalent to `chain_id` for capability matching,
    /// canonical form first.
    ///
    /// Mainnet and devnet identifiers, deprecated or canonical, expand to the
    /// `[canonical, deprecated]` pair. Everything else, testnet and
    /// unrecognized identifiers alike, passes through as a singleton. The
    /// output always contains the input.
    pub fn equivalent_chain_ids(&self, chain_id: &ChainId) -> Vec<ChainId> {
        let network = networks::network_by_chain_id(chain_id);
        match network.map(|network| (network, network.deprecated_chain_id())) {
            Some((SolanaNetwork::Mainnet, Some(legacy))) => {
                if *chain_id == legacy {
                    self.emit(WarningKind::DeprecatedMainnet);
                }
                vec![SolanaNetwork::Mainnet.chain_id(), legacy]
            }
            Some((SolanaNetwork::Devnet, Some(legacy))) => {
                // TODO: this warns even when the input is already the
                // canonical devnet identifier. Tighten it to the deprecated
                // form once downstream consumers stop keying off the
                // unconditional message.
                self.emit(WarningKind::DeprecatedDevnet);
                vec![SolanaNetwork::Devnet.chain_id(), legacy]
            }
            _ => vec![chain_id.clone()],
        }
    }

    /// The identifier to use for `requested` when talking to the peer behind
    /// `session`.
    ///
    /// Prefers the canonical identifier when the peer's advertised accounts
    /// include it. A peer still on the legacy scheme gets the deprecated
    /// identifier instead, with a [`WarningKind::LegacyWallet`] warning, so
    /// legacy wallets remain usable. Testnet has no deprecated form and is
    /// returned unconditionally.
    ///
    /// Fails with [`ResolutionError::UnsupportedChain`] when `requested` is
    /// not the canonical identifier of a recognized network. The caller must
    /// not open a connection on an unresolved chain identifier.
    pub fn default_chain_from_session(
        &self,
        session: &Session,
        requested: &ChainId,
    ) -> Result<ChainId, ResolutionError> {
        let supported = session.chains(SOLANA_NAMESPACE);
        match networks::network_by_chain_id(requested) {
            Some(network) if *requested == network.chain_id() => {
                match network.deprecated_chain_id() {
                    Some(legacy) if !supported.contains(requested) => {
                        self.emit(WarningKind::LegacyWallet);
                        Ok(legacy)
                    }
                    _ => Ok(network.chain_id()),
                }
            }
            _ => Err(ResolutionError::UnsupportedChain(requested.clone())),
        }
    }

    fn emit(&self, kind: WarningKind) {
        self.sink.warn(kind, kind.message());
    }
}
