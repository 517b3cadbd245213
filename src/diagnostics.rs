//! Diagnostic warnings for deprecated chain identifiers.
//!
//! Warnings are fire-and-forget: they never affect control flow or return
//! values. The resolver depends only on the [`WarningSink`] capability, so
//! callers can swap the tracing-backed default for a recording fake in tests.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, LazyLock};

use crate::networks::SolanaNetwork;

/// The kinds of diagnostic warning the resolver emits.
#[derive(Debug, Hash, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// A caller passed the deprecated mainnet identifier.
    DeprecatedMainnet,
    /// The devnet compatibility path was taken.
    DeprecatedDevnet,
    /// The connected wallet only advertises a deprecated identifier.
    LegacyWallet,
}

/// Warning message per kind, built once for the lifetime of the process.
static WARNING_MESSAGES: LazyLock<HashMap<WarningKind, String>> = LazyLock::new(|| {
    HashMap::from([
        (
            WarningKind::DeprecatedMainnet,
            format!(
                "You are using a deprecated chain ID for Solana Mainnet, please use {} instead.",
                SolanaNetwork::Mainnet.chain_id()
            ),
        ),
        (
            WarningKind::DeprecatedDevnet,
            format!(
                "You are using a deprecated chain ID for Solana Devnet, please use {} instead.",
                SolanaNetwork::Devnet.chain_id()
            ),
        ),
        (
            WarningKind::LegacyWallet,
            String::from(
                "The connected wallet is using a deprecated chain ID for Solana. \
                 Please contact them to upgrade. You can learn more at \
                 https://github.com/ChainAgnostic/namespaces/blob/main/solana/caip10.md#chain-ids",
            ),
        ),
    ])
});

impl WarningKind {
    /// The human-readable message for this warning.
    pub fn message(self) -> &'static str {
        // The table above is total over WarningKind.
        WARNING_MESSAGES[&self].as_str()
    }
}

impl Display for WarningKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            WarningKind::DeprecatedMainnet => "deprecated-mainnet",
            WarningKind::DeprecatedDevnet => "deprecated-devnet",
            WarningKind::LegacyWallet => "legacy-wallet",
        };
        f.write_str(name)
    }
}

/// A sink for diagnostic warnings.
///
/// Implementations must be non-blocking; the resolver calls [`warn`] on its
/// synchronous path and ignores the outcome.
///
/// [`warn`]: WarningSink::warn
pub trait WarningSink {
    fn warn(&self, kind: WarningKind, message: &str);
}

impl<S: WarningSink + ?Sized> WarningSink for &S {
    fn warn(&self, kind: WarningKind, message: &str) {
        (**self).warn(kind, message);
    }
}

impl<S: WarningSink + ?Sized> WarningSink for Arc<S> {
    fn warn(&self, kind: WarningKind, message: &str) {
        (**self).warn(kind, message);
    }
}

/// The default sink, emitting through [`tracing`] at warn level with the
/// warning kind as a structured field.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn warn(&self, kind: WarningKind, message: &str) {
        tracing::warn!(kind = %kind, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_canonical_replacement() {
        assert!(
            WarningKind::DeprecatedMainnet
                .message()
                .contains("solana:5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp")
        );
        assert!(
            WarningKind::DeprecatedDevnet
                .message()
                .contains("solana:EtWTRABZaYq6iMfeYKouRu166VU2xqa1")
        );
    }

    #[test]
    fn test_legacy_wallet_message_points_at_migration_doc() {
        assert!(WarningKind::LegacyWallet.message().contains("caip10.md"));
    }

    #[test]
    fn test_message_table_is_total() {
        for kind in [
            WarningKind::DeprecatedMainnet,
            WarningKind::DeprecatedDevnet,
            WarningKind::LegacyWallet,
        ] {
            assert!(!kind.message().is_empty());
        }
    }
}
