//! # Client Configuration
//!
//! One struct aggregating every subsystem's configuration, applied at
//! construction; nothing reads configuration from hidden global state.

use fl_02_chain_reconciler::ReconcilerConfig;
use fl_03_tx_observer::ObserverConfig;
use serde::{Deserialize, Serialize};
use shared_rpc::RetryConfig;

/// Full client configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Node API endpoint (without the network segment).
    pub endpoint: String,

    /// Network name appended to the endpoint (`testnet`, `mainnet`, ...).
    pub network: String,

    /// HTTP retry discipline.
    pub retry: RetryConfig,

    /// Freeze-list reconciliation.
    pub reconciler: ReconcilerConfig,

    /// Transaction polling.
    pub observer: ObserverConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:3030".to_string(),
            network: "testnet".to_string(),
            retry: RetryConfig::default(),
            reconciler: ReconcilerConfig::default(),
            observer: ObserverConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Create a config for testing (tiny budgets everywhere).
    pub fn for_testing() -> Self {
        Self {
            retry: RetryConfig::for_testing(),
            reconciler: ReconcilerConfig::for_testing(),
            observer: ObserverConfig::for_testing(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.network, "testnet");
        assert_eq!(config.retry.max_retries, 3);
    }
}
