//! # Mock Node Client
//!
//! Scripted in-memory implementation of the [`NodeClient`] port. Responses
//! are raw bodies exactly as the node would send them, so normalization and
//! JSON parsing take the same code path as the HTTP adapter; a call log
//! records every request for choreography assertions.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::client::{
    block_path, confirmed_path, find_block_hash_path, mapping_path, unconfirmed_path, NodeClient,
};
use crate::error::RpcError;
use crate::types::{
    normalize_body, parse_block_height, parse_confirmed, parse_unconfirmed, ConfirmedTransaction,
    UnconfirmedTransaction,
};

/// One scripted reply.
#[derive(Clone, Debug)]
pub enum MockReply {
    /// A raw response body, exactly as the node would send it
    /// (quote-wrapped strings, JSON envelopes, ...).
    Body(String),
    /// HTTP 404.
    NotFound,
    /// A fetch-level failure.
    Fail(RpcError),
}

/// Scripted node client for tests.
#[derive(Default)]
pub struct MockNodeClient {
    queued: Mutex<HashMap<String, VecDeque<MockReply>>>,
    sticky: Mutex<HashMap<String, MockReply>>,
    calls: Mutex<Vec<String>>,
}

impl MockNodeClient {
    /// Create an empty mock; every path answers 404 until scripted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a one-shot reply for a request path (FIFO per path).
    pub fn enqueue(&self, path: &str, reply: MockReply) {
        self.queued
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(path.to_string())
            .or_default()
            .push_back(reply);
    }

    /// Set a sticky reply: returned whenever the path's queue is empty.
    pub fn set(&self, path: &str, reply: MockReply) {
        self.sticky
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.to_string(), reply);
    }

    /// Convenience: sticky quote-wrapped raw value, like a mapping read.
    pub fn set_mapping(&self, program_id: &str, mapping: &str, key: &str, value: &str) {
        self.set(
            &mapping_path(program_id, mapping, key),
            MockReply::Body(format!("\"{value}\"")),
        );
    }

    /// Every request path issued so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// How many times a path was requested.
    pub fn call_count(&self, path: &str) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|p| p.as_str() == path)
            .count()
    }

    fn take(&self, path: &str) -> MockReply {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_string());
        if let Some(reply) = self
            .queued
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get_mut(path)
            .and_then(VecDeque::pop_front)
        {
            return reply;
        }
        self.sticky
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
            .cloned()
            .unwrap_or(MockReply::NotFound)
    }

    fn fetch(&self, path: &str) -> Result<Option<String>, RpcError> {
        match self.take(path) {
            MockReply::Body(body) => Ok(Some(body)),
            MockReply::NotFound => Ok(None),
            MockReply::Fail(err) => Err(err),
        }
    }
}

#[async_trait]
impl NodeClient for MockNodeClient {
    async fn mapping_value(
        &self,
        program_id: &str,
        mapping: &str,
        key: &str,
    ) -> Result<Option<String>, RpcError> {
        let path = mapping_path(program_id, mapping, key);
        Ok(self.fetch(&path)?.and_then(|body| normalize_body(&body)))
    }

    async fn confirmed_transaction(
        &self,
        tx_id: &str,
    ) -> Result<Option<ConfirmedTransaction>, RpcError> {
        let path = confirmed_path(tx_id);
        match self.fetch(&path)? {
            None => Ok(None),
            Some(body) => parse_confirmed(&path, &body).map(Some),
        }
    }

    async fn unconfirmed_transaction(
        &self,
        tx_id: &str,
    ) -> Result<Option<UnconfirmedTransaction>, RpcError> {
        let path = unconfirmed_path(tx_id);
        match self.fetch(&path)? {
            None => Ok(None),
            Some(body) => parse_unconfirmed(&path, &body).map(Some),
        }
    }

    async fn block_hash_of_transaction(&self, tx_id: &str) -> Result<Option<String>, RpcError> {
        let path = find_block_hash_path(tx_id);
        Ok(self.fetch(&path)?.and_then(|body| normalize_body(&body)))
    }

    async fn block_height(&self, block_hash: &str) -> Result<Option<u64>, RpcError> {
        let path = block_path(block_hash);
        match self.fetch(&path)? {
            None => Ok(None),
            Some(body) => parse_block_height(&path, &body).map(Some),
        }
    }
}
