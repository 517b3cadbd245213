//! Chain identifier types for wallet-session negotiation.
//!
//! The session layer addresses blockchains with
//! [CAIP-2](https://standards.chainagnostic.org/CAIPs/caip-2) chain IDs. A
//! chain ID consists of two parts separated by a colon:
//!
//! - **Namespace**: The blockchain ecosystem (e.g., `solana`, `eip155`)
//! - **Reference**: The chain-specific identifier (e.g., the truncated
//!   genesis hash `5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp` for Solana mainnet)

mod chain_id;

pub use chain_id::*;
