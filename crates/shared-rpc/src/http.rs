//! # HTTP Node Adapter
//!
//! `reqwest`-backed implementation of the [`NodeClient`] port with the full
//! retry discipline: exponential backoff with jitter, `Retry-After`
//! compliance on 429, per-request timeouts, and immediate failure on
//! non-retryable 4xx.

use std::time::Instant;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::RETRY_AFTER;
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::backoff::{backoff_delay, parse_retry_after};
use crate::client::{
    block_path, confirmed_path, find_block_hash_path, mapping_path, unconfirmed_path, NodeClient,
};
use crate::config::RetryConfig;
use crate::error::RpcError;
use crate::types::{
    normalize_body, parse_block_height, parse_confirmed, parse_unconfirmed, ConfirmedTransaction,
    UnconfirmedTransaction,
};

/// HTTP client for a node endpoint of the form `{endpoint}/{network}`.
pub struct HttpNodeClient {
    base_url: String,
    http: reqwest::Client,
    config: RetryConfig,
}

impl HttpNodeClient {
    /// Create a client against `{endpoint}/{network}`.
    pub fn new(endpoint: &str, network: &str, config: RetryConfig) -> Result<Self, RpcError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| RpcError::ClientBuild {
                reason: e.to_string(),
            })?;
        Ok(Self {
            base_url: format!("{}/{}", endpoint.trim_end_matches('/'), network),
            http,
            config,
        })
    }

    /// The resolved base URL (endpoint + network).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One retrying GET. `Ok(None)` is a 404; transient failures and 429s
    /// are retried inside the configured budget.
    async fn fetch_text(&self, path: &str) -> Result<Option<String>, RpcError> {
        let url = format!("{}/{}", self.base_url, path);
        let started = Instant::now();
        let mut attempt: u32 = 0;
        let mut last_error;

        loop {
            match self.http.get(&url).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let body =
                            response
                                .text()
                                .await
                                .map_err(|e| RpcError::InvalidResponse {
                                    url: url.clone(),
                                    reason: format!("body read failed: {e}"),
                                })?;
                        return Ok(Some(body));
                    }
                    if status == StatusCode::NOT_FOUND {
                        return Ok(None);
                    }
                    if status == StatusCode::TOO_MANY_REQUESTS {
                        last_error = format!("rate limited (429) by {url}");
                        if attempt >= self.config.max_retries {
                            break;
                        }
                        let header_delay = response
                            .headers()
                            .get(RETRY_AFTER)
                            .and_then(|v| v.to_str().ok())
                            .and_then(|v| parse_retry_after(v, Utc::now()));
                        let delay = match header_delay {
                            Some(d) => d,
                            None => backoff_delay(attempt, &self.config, &mut rand::thread_rng()),
                        };
                        debug!(
                            "[shared-rpc] 429 from {}, waiting {:?} before attempt {}",
                            url,
                            delay,
                            attempt + 2
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }
                    if status.is_client_error() {
                        return Err(RpcError::NonRetryable {
                            status: status.as_u16(),
                            url,
                        });
                    }
                    last_error = format!("server error {status}");
                }
                Err(e) => {
                    last_error = e.to_string();
                }
            }

            if attempt >= self.config.max_retries {
                break;
            }
            let delay = backoff_delay(attempt, &self.config, &mut rand::thread_rng());
            warn!(
                "[shared-rpc] attempt {} against {} failed ({}), retrying in {:?}",
                attempt + 1,
                url,
                last_error,
                delay
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }

        Err(RpcError::Exhausted {
            url,
            attempts: attempt + 1,
            elapsed_ms: started.elapsed().as_millis() as u64,
            last_error,
        })
    }
}

#[async_trait]
impl NodeClient for HttpNodeClient {
    async fn mapping_value(
        &self,
        program_id: &str,
        mapping: &str,
        key: &str,
    ) -> Result<Option<String>, RpcError> {
        let path = mapping_path(program_id, mapping, key);
        Ok(self
            .fetch_text(&path)
            .await?
            .and_then(|body| normalize_body(&body)))
    }

    async fn confirmed_transaction(
        &self,
        tx_id: &str,
    ) -> Result<Option<ConfirmedTransaction>, RpcError> {
        let path = confirmed_path(tx_id);
        match self.fetch_text(&path).await? {
            None => Ok(None),
            Some(body) => parse_confirmed(&path, &body).map(Some),
        }
    }

    async fn unconfirmed_transaction(
        &self,
        tx_id: &str,
    ) -> Result<Option<UnconfirmedTransaction>, RpcError> {
        let path = unconfirmed_path(tx_id);
        match self.fetch_text(&path).await? {
            None => Ok(None),
            Some(body) => parse_unconfirmed(&path, &body).map(Some),
        }
    }

    async fn block_hash_of_transaction(&self, tx_id: &str) -> Result<Option<String>, RpcError> {
        let path = find_block_hash_path(tx_id);
        Ok(self
            .fetch_text(&path)
            .await?
            .and_then(|body| normalize_body(&body)))
    }

    async fn block_height(&self, block_hash: &str) -> Result<Option<u64>, RpcError> {
        let path = block_path(block_hash);
        match self.fetch_text(&path).await? {
            None => Ok(None),
            Some(body) => parse_block_height(&path, &body).map(Some),
        }
    }
}
