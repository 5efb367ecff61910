//! # Proving Flow Integration
//!
//! End-to-end choreography of reconciler, registry, and runtime against a
//! scripted node: the chain state is laid out in mock mapping slots, the
//! client walks it, rebuilds the tree, and derives witnesses that verify
//! against the on-chain root.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use client_runtime::{ClientConfig, ClientError, FrostClient};
    use fl_01_merkle_registry::{build_tree, gen_leaves, verify_path};
    use fl_02_chain_reconciler::{ReconcilerConfig, ReconcilerError, ReconcilerService};
    use shared_rpc::{mapping_path, MockNodeClient, MockReply};
    use shared_types::{Address, FieldElement};

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    fn addr(value: u64) -> Address {
        Address::from_field(&FieldElement::from_u64(value)).unwrap()
    }

    /// Lay out a freeze list in mock mapping slots and publish the root the
    /// on-chain program would have committed for it.
    fn script_chain_state(mock: &MockNodeClient, config: &ReconcilerConfig, frozen: &[Address]) {
        for (slot, address) in frozen.iter().enumerate() {
            mock.set_mapping(
                &config.program_id,
                &config.freeze_list_mapping,
                &config.slot_key(slot as u64),
                address.as_str(),
            );
        }
        mock.set_mapping(
            &config.program_id,
            &config.last_index_mapping,
            config.last_index_key(),
            &format!("{}u32", frozen.len()),
        );
        let root = committed_root(config, frozen);
        mock.set_mapping(
            &config.program_id,
            &config.root_mapping,
            config.current_root_key(),
            &root.to_string(),
        );
    }

    fn committed_root(config: &ReconcilerConfig, frozen: &[Address]) -> FieldElement {
        let leaves = gen_leaves(frozen, config.tree_depth).unwrap();
        build_tree(&leaves).unwrap().root()
    }

    // =========================================================================
    // INTEGRATION TESTS: RECONCILE → REBUILD → WITNESS
    // =========================================================================

    #[tokio::test]
    async fn test_full_proving_pipeline() {
        let mock = Arc::new(MockNodeClient::new());
        let config = ClientConfig::for_testing();
        let frozen = [addr(50), addr(10), addr(30)];
        script_chain_state(&mock, &config.reconciler, &frozen);

        let client = FrostClient::with_client(Arc::clone(&mock), &config);
        let proof = client.prove_not_frozen(&addr(20)).await.unwrap();

        // The proof brackets the candidate between real frozen entries.
        assert_eq!(proof.left_leaf, FieldElement::from_u64(10));
        assert_eq!(proof.right_leaf, FieldElement::from_u64(30));
        assert_eq!(
            proof.root,
            committed_root(&config.reconciler, &frozen),
            "proof must target the same root the chain committed"
        );

        // Both paths re-hash to the published root.
        let leaves = gen_leaves(&frozen, config.reconciler.tree_depth).unwrap();
        let tree = build_tree(&leaves).unwrap();
        assert!(verify_path(
            &proof.witness.left,
            &proof.left_leaf,
            &proof.root,
            tree.height()
        ));
        assert!(verify_path(
            &proof.witness.right,
            &proof.right_leaf,
            &proof.root,
            tree.height()
        ));
    }

    #[tokio::test]
    async fn test_candidate_outside_range_gets_boundary_witness() {
        let mock = Arc::new(MockNodeClient::new());
        let config = ClientConfig::for_testing();
        script_chain_state(&mock, &config.reconciler, &[addr(10), addr(30)]);

        let client = FrostClient::with_client(Arc::clone(&mock), &config);
        let proof = client.prove_not_frozen(&addr(99)).await.unwrap();

        // Larger than every leaf: both paths authenticate the last leaf.
        assert_eq!(proof.witness.left, proof.witness.right);
        assert_eq!(proof.left_leaf, FieldElement::from_u64(30));
    }

    #[tokio::test]
    async fn test_snapshot_preserves_slot_order_and_filters_sentinel() {
        let mock = Arc::new(MockNodeClient::new());
        let config = ReconcilerConfig::for_testing();
        // Slot order deliberately unsorted, sentinel in the middle.
        let listed = [addr(30), addr(10)];
        mock.set_mapping(&config.program_id, &config.freeze_list_mapping, "0u32", addr(30).as_str());
        mock.set_mapping(
            &config.program_id,
            &config.freeze_list_mapping,
            "1u32",
            Address::sentinel().as_str(),
        );
        mock.set_mapping(&config.program_id, &config.freeze_list_mapping, "2u32", addr(10).as_str());
        let root = committed_root(&config, &listed);
        mock.set_mapping(
            &config.program_id,
            &config.root_mapping,
            config.current_root_key(),
            &root.to_string(),
        );

        let service = ReconcilerService::new(Arc::clone(&mock), config);
        let verified = service.verified_snapshot().await.unwrap();

        // Slot order in the snapshot, sorted order in the tree.
        assert_eq!(verified.snapshot.addresses, vec![addr(30), addr(10)]);
        assert_eq!(verified.snapshot.last_index, 3);
        assert!(verified.tree.leaves().windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(verified.tree.root(), root);
    }

    #[tokio::test]
    async fn test_race_with_onchain_update_recovers_on_refetch() {
        let mock = Arc::new(MockNodeClient::new());
        let config = ReconcilerConfig::for_testing();
        let frozen = [addr(10), addr(20)];
        script_chain_state_base(&mock, &config, &frozen);

        // First root read returns a stale value (as if the walk raced a
        // rotation); the sticky reply underneath is consistent again.
        let root_path = mapping_path(
            &config.program_id,
            &config.root_mapping,
            config.current_root_key(),
        );
        mock.enqueue(&root_path, MockReply::Body("\"4242field\"".to_string()));

        let service = ReconcilerService::new(Arc::clone(&mock), config);
        let verified = service.verified_snapshot().await.unwrap();
        assert_eq!(verified.tree.root(), verified.snapshot.current_root);
        assert_eq!(mock.call_count(&root_path), 2, "one stale read, one clean");
    }

    #[tokio::test]
    async fn test_persistent_mismatch_surfaces_root_mismatch() {
        let mock = Arc::new(MockNodeClient::new());
        let config = ReconcilerConfig::for_testing();
        mock.set_mapping(&config.program_id, &config.freeze_list_mapping, "0u32", addr(10).as_str());
        mock.set_mapping(
            &config.program_id,
            &config.root_mapping,
            config.current_root_key(),
            "4242field",
        );

        let service = ReconcilerService::new(Arc::clone(&mock), config);
        let err = service.verified_snapshot().await.unwrap_err();
        assert!(matches!(err, ReconcilerError::RootMismatch { .. }));
    }

    #[tokio::test]
    async fn test_empty_freeze_list_still_proves() {
        let mock = Arc::new(MockNodeClient::new());
        let config = ClientConfig::for_testing();
        script_chain_state(&mock, &config.reconciler, &[]);

        let client = FrostClient::with_client(Arc::clone(&mock), &config);
        let proof = client.prove_not_frozen(&addr(7)).await.unwrap();

        // Empty list pads to [ZERO, ZERO]; everything brackets at the top.
        assert_eq!(proof.left_leaf, FieldElement::ZERO);
        assert_eq!(proof.right_leaf, FieldElement::ZERO);
    }

    #[tokio::test]
    async fn test_frozen_address_cannot_be_proven() {
        let mock = Arc::new(MockNodeClient::new());
        let config = ClientConfig::for_testing();
        script_chain_state(&mock, &config.reconciler, &[addr(10), addr(30)]);

        let client = FrostClient::with_client(Arc::clone(&mock), &config);
        let err = client.prove_not_frozen(&addr(10)).await.unwrap_err();
        assert!(matches!(err, ClientError::AddressFrozen { .. }));
    }

    /// Like `script_chain_state` but with the matching root only as the
    /// sticky reply, so tests can prepend one-shot stale reads.
    fn script_chain_state_base(
        mock: &MockNodeClient,
        config: &ReconcilerConfig,
        frozen: &[Address],
    ) {
        for (slot, address) in frozen.iter().enumerate() {
            mock.set_mapping(
                &config.program_id,
                &config.freeze_list_mapping,
                &config.slot_key(slot as u64),
                address.as_str(),
            );
        }
        let root = committed_root(config, frozen);
        mock.set_mapping(
            &config.program_id,
            &config.root_mapping,
            config.current_root_key(),
            &root.to_string(),
        );
    }
}
