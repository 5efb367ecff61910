//! # Frost Client
//!
//! The embedder-facing service composing reconciler, registry, and observer.

use std::sync::Arc;

use fl_01_merkle_registry::{non_inclusion_witness, verify_path, NonInclusionWitness};
use fl_02_chain_reconciler::{FreezeListSnapshot, ReconcilerService};
use fl_03_tx_observer::{Clock, TokioClock, TransactionObserver, TransactionStatus};
use serde::{Deserialize, Serialize};
use shared_rpc::{HttpNodeClient, NodeClient};
use shared_types::{Address, FieldElement};
use tracing::info;

use crate::config::ClientConfig;
use crate::errors::ClientError;

/// A complete, self-checked non-inclusion proof ready for submission.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProvenNonInclusion {
    /// The address proven absent from the freeze list.
    pub address: Address,
    /// The bracketing authentication paths.
    pub witness: NonInclusionWitness,
    /// The left bracketing leaf value.
    pub left_leaf: FieldElement,
    /// The right bracketing leaf value.
    pub right_leaf: FieldElement,
    /// The root this witness verifies against (the chain's current root at
    /// snapshot time).
    pub root: FieldElement,
    /// The pre-rotation root, still accepted inside the staleness window.
    pub previous_root: Option<FieldElement>,
}

/// Frostline client - the full off-chain proving flow behind two calls.
pub struct FrostClient<C: NodeClient, K: Clock = TokioClock> {
    reconciler: ReconcilerService<C>,
    observer: TransactionObserver<C, K>,
}

impl FrostClient<HttpNodeClient, TokioClock> {
    /// Connect to a node over HTTP.
    pub fn connect(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = Arc::new(HttpNodeClient::new(
            &config.endpoint,
            &config.network,
            config.retry.clone(),
        )?);
        Ok(Self::with_client(client, config))
    }
}

impl<C: NodeClient> FrostClient<C, TokioClock> {
    /// Build over an existing client (any [`NodeClient`] implementation).
    pub fn with_client(client: Arc<C>, config: &ClientConfig) -> Self {
        Self {
            reconciler: ReconcilerService::new(Arc::clone(&client), config.reconciler.clone()),
            observer: TransactionObserver::new(client, config.observer.clone()),
        }
    }
}

impl<C: NodeClient, K: Clock> FrostClient<C, K> {
    /// Build over an existing client and an injected clock.
    pub fn with_client_and_clock(client: Arc<C>, config: &ClientConfig, clock: K) -> Self {
        Self {
            reconciler: ReconcilerService::new(Arc::clone(&client), config.reconciler.clone()),
            observer: TransactionObserver::with_clock(client, config.observer.clone(), clock),
        }
    }

    /// One consistent freeze-list snapshot (slot order, roots included).
    pub async fn snapshot(&self) -> Result<FreezeListSnapshot, ClientError> {
        Ok(self.reconciler.fetch_freeze_list().await?)
    }

    /// Prove that `address` is absent from the on-chain freeze list.
    ///
    /// Runs the full pipeline: verified snapshot, local tree rebuild,
    /// bracket location, path derivation, and a self-check of both paths
    /// against the verified root. The returned proof plus root is what the
    /// on-chain call consumes; the program re-verifies independently.
    pub async fn prove_not_frozen(
        &self,
        address: &Address,
    ) -> Result<ProvenNonInclusion, ClientError> {
        let verified = self.reconciler.verified_snapshot().await?;
        let tree = &verified.tree;
        let value = address.to_field();

        if tree.leaves().contains(&value) && !value.is_zero() {
            return Err(ClientError::AddressFrozen {
                address: address.to_string(),
            });
        }

        let witness = non_inclusion_witness(tree, address)?;
        let root = tree.root();
        let left_leaf = tree.leaves()[witness.left.leaf_index as usize];
        let right_leaf = tree.leaves()[witness.right.leaf_index as usize];

        let height = tree.height();
        if !verify_path(&witness.left, &left_leaf, &root, height)
            || !verify_path(&witness.right, &right_leaf, &root, height)
        {
            return Err(ClientError::WitnessSelfCheck { root });
        }

        info!(
            "[runtime] non-inclusion witness ready for {} against root {}",
            address, root
        );

        Ok(ProvenNonInclusion {
            address: address.clone(),
            witness,
            left_leaf,
            right_leaf,
            root,
            previous_root: verified.snapshot.previous_root,
        })
    }

    /// Track a submitted transaction to its terminal outcome.
    pub async fn watch_transaction(&self, tx_id: &str) -> Result<TransactionStatus, ClientError> {
        Ok(self.observer.wait_for_transaction(tx_id).await?)
    }
}
