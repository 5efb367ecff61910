//! # Reconciler Service
//!
//! Orchestrates the paginated freeze-list walk, root reads, and the local
//! rebuild-and-compare that guards against racing a concurrent on-chain
//! update.

use std::sync::Arc;

use fl_01_merkle_registry::{build_tree, gen_leaves, MerkleTree};
use shared_rpc::NodeClient;
use shared_types::{Address, FieldElement};
use tracing::{debug, warn};

use crate::config::ReconcilerConfig;
use crate::domain::{FreezeListSnapshot, ReconcilerError};

/// A snapshot whose locally rebuilt tree matches the on-chain root.
#[derive(Clone, Debug)]
pub struct VerifiedSnapshot {
    /// The reconciled freeze list.
    pub snapshot: FreezeListSnapshot,
    /// The tree rebuilt from it; its root equals `snapshot.current_root`.
    pub tree: MerkleTree,
}

/// Reconciler service - reads the authoritative freeze list off chain.
pub struct ReconcilerService<C: NodeClient> {
    client: Arc<C>,
    config: ReconcilerConfig,
}

impl<C: NodeClient> ReconcilerService<C> {
    /// Create a service over a node client.
    pub fn new(client: Arc<C>, config: ReconcilerConfig) -> Self {
        Self { client, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ReconcilerConfig {
        &self.config
    }

    /// Fetch one snapshot of the freeze list.
    ///
    /// Walks mapping slots `0, 1, 2, ...` until the first absent slot; a
    /// slot the node rejects outright (non-retryable status) also ends the
    /// walk with whatever was collected, since slots past it cannot be
    /// trusted to exist. Transient exhaustion, by contrast, fails the whole
    /// call - the list would be silently truncated otherwise.
    pub async fn fetch_freeze_list(&self) -> Result<FreezeListSnapshot, ReconcilerError> {
        let config = &self.config;
        let mut addresses: Vec<Address> = Vec::new();
        let mut slot: u64 = 0;

        while slot < config.max_slots {
            let key = config.slot_key(slot);
            match self
                .client
                .mapping_value(&config.program_id, &config.freeze_list_mapping, &key)
                .await
            {
                Ok(Some(raw)) => {
                    let address: Address = raw.parse()?;
                    if !address.is_sentinel() {
                        addresses.push(address);
                    }
                    slot += 1;
                }
                Ok(None) => break,
                Err(e) if e.is_non_retryable() => {
                    warn!(
                        "[fl-02] slot {} rejected by node ({}), ending walk with {} entries",
                        slot,
                        e,
                        addresses.len()
                    );
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }
        if slot == config.max_slots {
            warn!(
                "[fl-02] pagination stopped at the safety bound of {} slots",
                config.max_slots
            );
        }

        let declared_last_index = self.fetch_declared_last_index().await?;
        let (current_root, previous_root) = self.fetch_roots().await?;

        debug!(
            "[fl-02] snapshot: {} addresses over {} slots, root {}",
            addresses.len(),
            slot,
            current_root
        );

        Ok(FreezeListSnapshot {
            addresses,
            last_index: slot,
            declared_last_index,
            current_root,
            previous_root,
        })
    }

    /// Fetch the current and previous committed roots.
    pub async fn fetch_roots(
        &self,
    ) -> Result<(FieldElement, Option<FieldElement>), ReconcilerError> {
        let config = &self.config;
        let current = self
            .client
            .mapping_value(
                &config.program_id,
                &config.root_mapping,
                config.current_root_key(),
            )
            .await?
            .ok_or_else(|| ReconcilerError::MissingRoot {
                mapping: config.root_mapping.clone(),
            })?
            .parse::<FieldElement>()?;

        let previous = match self
            .client
            .mapping_value(
                &config.program_id,
                &config.root_mapping,
                config.previous_root_key(),
            )
            .await?
        {
            Some(raw) => Some(raw.parse::<FieldElement>()?),
            None => None,
        };

        Ok((current, previous))
    }

    /// Read the program's own slot counter, if it publishes one.
    async fn fetch_declared_last_index(&self) -> Result<Option<u64>, ReconcilerError> {
        let config = &self.config;
        let raw = self
            .client
            .mapping_value(
                &config.program_id,
                &config.last_index_mapping,
                config.last_index_key(),
            )
            .await?;
        Ok(raw.and_then(|value| {
            let digits: String = value.chars().take_while(char::is_ascii_digit).collect();
            match digits.parse::<u64>() {
                Ok(index) => Some(index),
                Err(_) => {
                    warn!(
                        "[fl-02] unparseable slot counter {:?} in {}, ignoring",
                        value, config.last_index_mapping
                    );
                    None
                }
            }
        }))
    }

    /// Fetch a snapshot and prove it consistent: rebuild the tree locally
    /// and insist the root matches the one the chain published. A mismatch
    /// triggers a bounded re-fetch; persistent disagreement surfaces as
    /// [`ReconcilerError::RootMismatch`].
    pub async fn verified_snapshot(&self) -> Result<VerifiedSnapshot, ReconcilerError> {
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            let snapshot = self.fetch_freeze_list().await?;
            let leaves = gen_leaves(&snapshot.addresses, self.config.tree_depth)?;
            let tree = build_tree(&leaves)?;

            if tree.root() == snapshot.current_root {
                return Ok(VerifiedSnapshot { snapshot, tree });
            }

            warn!(
                "[fl-02] rebuilt root {} disagrees with on-chain root {} (attempt {}), re-fetching",
                tree.root(),
                snapshot.current_root,
                attempt
            );
            if attempt >= self.config.max_root_retries {
                return Err(ReconcilerError::RootMismatch {
                    local: tree.root(),
                    onchain: snapshot.current_root,
                    attempts: attempt,
                });
            }
        }
    }
}
