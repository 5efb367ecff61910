//! # Observer Flow Integration
//!
//! Submit-then-watch choreography: a proof-carrying transaction goes out
//! (simulated), and the observer tracks it through 404s, rate limits, and
//! confirmation against the scripted node.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use client_runtime::{ClientConfig, FrostClient};
    use fl_03_tx_observer::{
        ManualClock, ObserverConfig, ObserverError, TransactionObserver, TransactionStatus,
    };
    use shared_rpc::{
        block_path, confirmed_path, find_block_hash_path, unconfirmed_path, MockNodeClient,
        MockReply,
    };

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    const TX: &str = "at1submitted";

    fn confirmed_body(tx_type: &str) -> MockReply {
        MockReply::Body(format!(r#"{{"transaction": {{"type": "{tx_type}"}}}}"#))
    }

    fn script_block_lookup(mock: &MockNodeClient, tx_id: &str, hash: &str, height: u64) {
        mock.set(
            &find_block_hash_path(tx_id),
            MockReply::Body(format!("\"{hash}\"")),
        );
        mock.set(
            &block_path(hash),
            MockReply::Body(format!(
                r#"{{"header": {{"metadata": {{"height": {height}}}}}}}"#
            )),
        );
    }

    fn observer(
        mock: &Arc<MockNodeClient>,
        config: ObserverConfig,
    ) -> TransactionObserver<MockNodeClient, ManualClock> {
        TransactionObserver::with_clock(Arc::clone(mock), config, ManualClock::new())
    }

    // =========================================================================
    // INTEGRATION TESTS: SUBMISSION → TERMINAL STATUS
    // =========================================================================

    #[tokio::test]
    async fn test_execution_confirms_after_pending_window() {
        let mock = Arc::new(MockNodeClient::new());
        let path = confirmed_path(TX);
        mock.enqueue(&path, MockReply::NotFound);
        mock.enqueue(&path, MockReply::NotFound);
        mock.enqueue(&path, confirmed_body("execute"));
        script_block_lookup(&mock, TX, "ab1deadbeef", 31_415);

        let obs = observer(&mock, ObserverConfig::for_testing());
        let status = obs.wait_for_transaction(TX).await.unwrap();

        assert_eq!(
            status,
            TransactionStatus::Accepted {
                tx_type: "execute".to_string(),
                confirmed_id: TX.to_string(),
                block_height: Some(31_415),
            }
        );
        assert_eq!(mock.call_count(&path), 3);
    }

    #[tokio::test]
    async fn test_rejected_execution_reports_original_id_and_height() {
        let mock = Arc::new(MockNodeClient::new());
        mock.enqueue(&confirmed_path(TX), confirmed_body("fee"));
        mock.set(
            &unconfirmed_path(TX),
            MockReply::Body(r#"{"transaction": {"id": "at1beforefee"}}"#.to_string()),
        );
        script_block_lookup(&mock, TX, "ab1cafe", 9);

        let obs = observer(&mock, ObserverConfig::for_testing());
        let status = obs.wait_for_transaction(TX).await.unwrap();

        match status {
            TransactionStatus::Rejected {
                confirmed_id,
                unconfirmed_id,
                block_height,
                error,
            } => {
                assert_eq!(confirmed_id, TX);
                assert_eq!(unconfirmed_id.as_deref(), Some("at1beforefee"));
                assert_eq!(block_height, Some(9));
                assert!(!error.is_empty());
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_observation_budget_leaves_outcome_unknown() {
        let mock = Arc::new(MockNodeClient::new());
        // The node never confirms inside the budget...
        let config = ObserverConfig {
            poll_interval_ms: 1,
            timeout_ms: 60_000,
            max_attempts: 3,
        };
        let obs = observer(&mock, config);
        let err = obs.wait_for_transaction(TX).await.unwrap_err();
        assert!(matches!(err, ObserverError::PollExhausted { .. }));

        // ...but a later one-shot check can still settle it.
        mock.enqueue(&confirmed_path(TX), confirmed_body("execute"));
        let status = obs.check_once(TX).await.unwrap();
        assert!(status.is_accepted());
    }

    #[tokio::test]
    async fn test_prove_then_watch_choreography() {
        let mock = Arc::new(MockNodeClient::new());
        let config = ClientConfig::for_testing();

        // Chain state: one frozen address and its committed root.
        let frozen = shared_types::Address::from_field(&shared_types::FieldElement::from_u64(10))
            .unwrap();
        let rc = &config.reconciler;
        mock.set_mapping(&rc.program_id, &rc.freeze_list_mapping, "0u32", frozen.as_str());
        let leaves = fl_01_merkle_registry::gen_leaves(&[frozen], rc.tree_depth).unwrap();
        let root = fl_01_merkle_registry::build_tree(&leaves).unwrap().root();
        mock.set_mapping(&rc.program_id, &rc.root_mapping, rc.current_root_key(), &root.to_string());

        // The submission confirms on the second poll.
        mock.enqueue(&confirmed_path(TX), MockReply::NotFound);
        mock.enqueue(&confirmed_path(TX), confirmed_body("execute"));

        let client = FrostClient::with_client_and_clock(
            Arc::clone(&mock),
            &config,
            ManualClock::new(),
        );
        let candidate =
            shared_types::Address::from_field(&shared_types::FieldElement::from_u64(20)).unwrap();
        let proof = client.prove_not_frozen(&candidate).await.unwrap();
        assert_eq!(proof.root, root);

        let status = client.watch_transaction(TX).await.unwrap();
        assert!(status.is_accepted());
    }
}
