//! # Transaction Observer
//!
//! Async driver for the polling state machine: issues status checks on the
//! configured interval, feeds the outcomes through
//! [`PollState::next`](crate::PollState::next), and enforces both budgets
//! before every new attempt.

use std::sync::Arc;

use shared_rpc::{ConfirmedTransaction, NodeClient};
use tracing::{debug, warn};

use crate::clock::{Clock, TokioClock};
use crate::config::ObserverConfig;
use crate::domain::{classify_confirmed, ObserverError, PollEvent, PollState, TransactionStatus};

/// Transaction observer - tracks one transaction id to a terminal outcome.
pub struct TransactionObserver<C: NodeClient, K: Clock = TokioClock> {
    client: Arc<C>,
    clock: K,
    config: ObserverConfig,
}

impl<C: NodeClient> TransactionObserver<C, TokioClock> {
    /// Create an observer on real time.
    pub fn new(client: Arc<C>, config: ObserverConfig) -> Self {
        Self::with_clock(client, config, TokioClock)
    }
}

impl<C: NodeClient, K: Clock> TransactionObserver<C, K> {
    /// Create an observer on an injected clock (virtual time in tests).
    pub fn with_clock(client: Arc<C>, config: ObserverConfig, clock: K) -> Self {
        Self {
            client,
            clock,
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &ObserverConfig {
        &self.config
    }

    /// One status check without polling: `Pending` while the network has
    /// not confirmed the transaction.
    pub async fn check_once(&self, tx_id: &str) -> Result<TransactionStatus, ObserverError> {
        match self.client.confirmed_transaction(tx_id).await? {
            None => Ok(TransactionStatus::Pending),
            Some(tx) => match classify_confirmed(&tx.tx_type) {
                PollEvent::ConfirmedExecution | PollEvent::ConfirmedFeeOnly => {
                    Ok(self.settle(tx_id, tx).await)
                }
                _ => Ok(TransactionStatus::Pending),
            },
        }
    }

    /// Poll until the transaction settles or a budget runs out.
    ///
    /// Unexpected poll errors do not change state; they are retried like a
    /// 404 as long as both budgets hold. The budgets are independent and
    /// whichever is stricter ends the observation.
    pub async fn wait_for_transaction(
        &self,
        tx_id: &str,
    ) -> Result<TransactionStatus, ObserverError> {
        let started = self.clock.now();
        let mut state = PollState::Submitted;
        let mut attempts: u32 = 0;
        let mut last_error: Option<String> = None;

        loop {
            let elapsed = self.clock.now().saturating_duration_since(started);
            if elapsed >= self.config.timeout() {
                return Err(ObserverError::PollTimeout {
                    tx_id: tx_id.to_string(),
                    attempts,
                    elapsed_ms: elapsed.as_millis() as u64,
                    last_error,
                });
            }
            if attempts >= self.config.max_attempts {
                return Err(ObserverError::PollExhausted {
                    tx_id: tx_id.to_string(),
                    attempts,
                    elapsed_ms: elapsed.as_millis() as u64,
                    last_error,
                });
            }

            state = state.next(PollEvent::CheckStarted);
            attempts += 1;

            let event = match self.client.confirmed_transaction(tx_id).await {
                Ok(Some(tx)) => {
                    let event = classify_confirmed(&tx.tx_type);
                    state = state.next(event);
                    if state.is_terminal() {
                        debug!(
                            "[fl-03] {} settled as {:?} after {} attempts",
                            tx_id, state, attempts
                        );
                        return Ok(self.settle(tx_id, tx).await);
                    }
                    warn!(
                        "[fl-03] unexpected transaction type {:?} for {}, re-polling",
                        tx.tx_type, tx_id
                    );
                    last_error = Some(format!("unexpected transaction type {:?}", tx.tx_type));
                    PollEvent::TransientError
                }
                Ok(None) => PollEvent::NotYetConfirmed,
                Err(e) => {
                    warn!("[fl-03] poll for {} failed ({}), re-polling", tx_id, e);
                    last_error = Some(e.to_string());
                    PollEvent::TransientError
                }
            };
            state = state.next(event);

            self.clock.sleep(self.config.poll_interval()).await;
        }
    }

    /// Turn a confirmed transaction into its terminal status, with
    /// best-effort enrichment that never changes the outcome.
    async fn settle(&self, tx_id: &str, tx: ConfirmedTransaction) -> TransactionStatus {
        match classify_confirmed(&tx.tx_type) {
            PollEvent::ConfirmedFeeOnly => {
                let unconfirmed_id = match self.client.unconfirmed_transaction(tx_id).await {
                    Ok(Some(original)) => Some(original.id),
                    Ok(None) => None,
                    Err(e) => {
                        debug!("[fl-03] unconfirmed-id lookup for {} failed: {}", tx_id, e);
                        None
                    }
                };
                TransactionStatus::Rejected {
                    confirmed_id: tx_id.to_string(),
                    unconfirmed_id,
                    block_height: self.block_height_of(tx_id).await,
                    error: "execution rejected, fee consumed".to_string(),
                }
            }
            _ => TransactionStatus::Accepted {
                tx_type: tx.tx_type,
                confirmed_id: tx_id.to_string(),
                block_height: self.block_height_of(tx_id).await,
            },
        }
    }

    async fn block_height_of(&self, tx_id: &str) -> Option<u64> {
        let hash = match self.client.block_hash_of_transaction(tx_id).await {
            Ok(Some(hash)) => hash,
            Ok(None) => return None,
            Err(e) => {
                debug!("[fl-03] block-hash lookup for {} failed: {}", tx_id, e);
                return None;
            }
        };
        match self.client.block_height(&hash).await {
            Ok(height) => height,
            Err(e) => {
                debug!("[fl-03] block lookup for {} failed: {}", hash, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use shared_rpc::{confirmed_path, MockNodeClient, MockReply, RpcError};

    const TX: &str = "at1watched";

    fn confirmed_body(tx_type: &str) -> MockReply {
        MockReply::Body(format!(r#"{{"transaction": {{"type": "{tx_type}"}}}}"#))
    }

    fn observer(
        mock: &Arc<MockNodeClient>,
        config: ObserverConfig,
    ) -> TransactionObserver<MockNodeClient, ManualClock> {
        TransactionObserver::with_clock(Arc::clone(mock), config, ManualClock::new())
    }

    #[tokio::test]
    async fn test_two_404s_then_accept() {
        let mock = Arc::new(MockNodeClient::new());
        let path = confirmed_path(TX);
        mock.enqueue(&path, MockReply::NotFound);
        mock.enqueue(&path, MockReply::NotFound);
        mock.enqueue(&path, confirmed_body("execute"));

        let config = ObserverConfig::for_testing();
        let interval = config.poll_interval();
        let obs = observer(&mock, config);
        let status = obs.wait_for_transaction(TX).await.unwrap();

        match status {
            TransactionStatus::Accepted {
                tx_type,
                confirmed_id,
                ..
            } => {
                assert_eq!(tx_type, "execute");
                assert_eq!(confirmed_id, TX);
            }
            other => panic!("expected Accepted, got {other:?}"),
        }
        // Exactly three status checks, each 404 followed by one interval.
        assert_eq!(mock.call_count(&path), 3);
        assert_eq!(obs.clock.elapsed(), interval * 2);
    }

    #[tokio::test]
    async fn test_accept_enriches_with_block_height() {
        let mock = Arc::new(MockNodeClient::new());
        mock.enqueue(&confirmed_path(TX), confirmed_body("deploy"));
        mock.set(
            &shared_rpc::find_block_hash_path(TX),
            MockReply::Body("\"ab1blockhash\"".to_string()),
        );
        mock.set(
            &shared_rpc::block_path("ab1blockhash"),
            MockReply::Body(r#"{"header": {"metadata": {"height": 777}}}"#.to_string()),
        );

        let obs = observer(&mock, ObserverConfig::for_testing());
        let status = obs.wait_for_transaction(TX).await.unwrap();
        assert_eq!(
            status,
            TransactionStatus::Accepted {
                tx_type: "deploy".to_string(),
                confirmed_id: TX.to_string(),
                block_height: Some(777),
            }
        );
    }

    #[tokio::test]
    async fn test_enrichment_failure_keeps_acceptance() {
        let mock = Arc::new(MockNodeClient::new());
        mock.enqueue(&confirmed_path(TX), confirmed_body("execute"));
        mock.set(
            &shared_rpc::find_block_hash_path(TX),
            MockReply::Fail(RpcError::Exhausted {
                url: "u".to_string(),
                attempts: 3,
                elapsed_ms: 9,
                last_error: "boom".to_string(),
            }),
        );

        let obs = observer(&mock, ObserverConfig::for_testing());
        let status = obs.wait_for_transaction(TX).await.unwrap();
        match status {
            TransactionStatus::Accepted { block_height, .. } => assert_eq!(block_height, None),
            other => panic!("expected Accepted, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fee_only_is_rejected_with_original_id() {
        let mock = Arc::new(MockNodeClient::new());
        mock.enqueue(&confirmed_path(TX), confirmed_body("fee"));
        mock.set(
            &shared_rpc::unconfirmed_path(TX),
            MockReply::Body(r#"{"transaction": {"id": "at1original"}}"#.to_string()),
        );

        let obs = observer(&mock, ObserverConfig::for_testing());
        let status = obs.wait_for_transaction(TX).await.unwrap();
        match status {
            TransactionStatus::Rejected {
                confirmed_id,
                unconfirmed_id,
                error,
                ..
            } => {
                assert_eq!(confirmed_id, TX);
                assert_eq!(unconfirmed_id.as_deref(), Some("at1original"));
                assert!(error.contains("fee"));
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_attempt_budget_exhausts() {
        let mock = Arc::new(MockNodeClient::new());
        // Unscripted: every check is a 404.
        let config = ObserverConfig {
            poll_interval_ms: 1,
            timeout_ms: 60_000,
            max_attempts: 4,
        };
        let obs = observer(&mock, config);
        let err = obs.wait_for_transaction(TX).await.unwrap_err();
        match err {
            ObserverError::PollExhausted { attempts, .. } => assert_eq!(attempts, 4),
            other => panic!("expected PollExhausted, got {other}"),
        }
        assert_eq!(mock.call_count(&confirmed_path(TX)), 4);
    }

    #[tokio::test]
    async fn test_wall_clock_budget_times_out_first() {
        let mock = Arc::new(MockNodeClient::new());
        let config = ObserverConfig {
            poll_interval_ms: 4,
            timeout_ms: 10,
            max_attempts: 1_000,
        };
        let obs = observer(&mock, config);
        let err = obs.wait_for_transaction(TX).await.unwrap_err();
        match err {
            ObserverError::PollTimeout {
                attempts,
                elapsed_ms,
                ..
            } => {
                // 3 checks advance virtual time to 12ms, past the 10ms budget.
                assert_eq!(attempts, 3);
                assert_eq!(elapsed_ms, 12);
            }
            other => panic!("expected PollTimeout, got {other}"),
        }
    }

    #[tokio::test]
    async fn test_poll_errors_are_retried_and_reported_in_budget_error() {
        let mock = Arc::new(MockNodeClient::new());
        let path = confirmed_path(TX);
        mock.set(
            &path,
            MockReply::Fail(RpcError::Exhausted {
                url: path.clone(),
                attempts: 3,
                elapsed_ms: 5,
                last_error: "server error 503".to_string(),
            }),
        );
        let config = ObserverConfig {
            poll_interval_ms: 1,
            timeout_ms: 60_000,
            max_attempts: 3,
        };
        let obs = observer(&mock, config);
        let err = obs.wait_for_transaction(TX).await.unwrap_err();
        match err {
            ObserverError::PollExhausted {
                attempts,
                last_error,
                ..
            } => {
                assert_eq!(attempts, 3);
                assert!(last_error.unwrap().contains("503"));
            }
            other => panic!("expected PollExhausted, got {other}"),
        }
    }

    #[tokio::test]
    async fn test_check_once_is_pending_on_404() {
        let mock = Arc::new(MockNodeClient::new());
        let obs = observer(&mock, ObserverConfig::for_testing());
        let status = obs.check_once(TX).await.unwrap();
        assert_eq!(status, TransactionStatus::Pending);
    }
}
