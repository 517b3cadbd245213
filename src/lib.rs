#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Chain identity for the Solana namespace.
//!
//! This crate reconciles Solana [CAIP-2](https://standards.chainagnostic.org/CAIPs/caip-2)
//! chain identifiers across the identifier-scheme change in the Solana
//! namespace. Each network used to be addressed by a legacy reference that was
//! later superseded by the first 32 characters of the base58-encoded genesis
//! block hash. Wallets and dapps migrated at different times, so session
//! negotiation still has to treat both forms as the same network.
//!
//! Two operations cover that policy:
//!
//! - [`resolve::ChainResolver::equivalent_chain_ids`] - the ordered set of
//!   identifiers to match against a peer's advertised capabilities
//! - [`resolve::ChainResolver::default_chain_from_session`] - the single best
//!   identifier to use when talking to a connected wallet
//!
//! Both prefer the canonical identifier, degrade gracefully to the deprecated
//! one when the peer is on the legacy scheme, and surface a warning whenever
//! they do, so migration progress stays visible in telemetry.
//!
//! # Modules
//!
//! - [`chain`] - CAIP-2 chain identifier value type
//! - [`diagnostics`] - Warning kinds, message table, and the warning sink
//! - [`networks`] - Registry of the recognized Solana networks
//! - [`resolve`] - Equivalence expansion and default-chain selection
//! - [`session`] - Negotiated wallet-session capability records

pub mod chain;
pub mod diagnostics;
pub mod networks;
pub mod resolve;
pub mod session;
