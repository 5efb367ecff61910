//! # Wire Types
//!
//! DTOs for the node's JSON responses and the quirks of its raw-string
//! endpoints. Parsing lives here so the HTTP adapter and the mock client
//! interpret bodies identically.

use serde::Deserialize;

use crate::error::RpcError;

/// Normalize a raw-string response body.
///
/// Mapping and `find/` endpoints return values as possibly quote-wrapped
/// strings. Exactly one layer of surrounding double quotes is stripped; an
/// empty body or the literal string `null` (quoted or not) is an absent
/// value, distinct from any real one.
pub fn normalize_body(body: &str) -> Option<String> {
    let trimmed = body.trim();
    let unquoted = match trimmed.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
        Some(inner) => inner,
        None => trimmed,
    };
    if unquoted.is_empty() || unquoted == "null" {
        None
    } else {
        Some(unquoted.to_string())
    }
}

/// A confirmed transaction, as reported by `transaction/confirmed/{id}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmedTransaction {
    /// The reported transaction type (`execute`, `deploy`, `fee`, ...).
    pub tx_type: String,
}

/// An unconfirmed transaction, as reported by `transaction/unconfirmed/{id}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnconfirmedTransaction {
    /// The original (pre-confirmation) transaction id.
    pub id: String,
}

#[derive(Deserialize)]
struct TransactionEnvelope {
    transaction: TransactionBody,
}

#[derive(Deserialize)]
struct TransactionBody {
    #[serde(rename = "type")]
    tx_type: Option<String>,
    id: Option<String>,
}

#[derive(Deserialize)]
struct BlockEnvelope {
    header: BlockHeader,
}

#[derive(Deserialize)]
struct BlockHeader {
    metadata: BlockMetadata,
}

#[derive(Deserialize)]
struct BlockMetadata {
    height: u64,
}

fn invalid(url: &str, reason: String) -> RpcError {
    RpcError::InvalidResponse {
        url: url.to_string(),
        reason,
    }
}

/// Parse a confirmed-transaction body.
pub fn parse_confirmed(url: &str, body: &str) -> Result<ConfirmedTransaction, RpcError> {
    let envelope: TransactionEnvelope =
        serde_json::from_str(body).map_err(|e| invalid(url, e.to_string()))?;
    let tx_type = envelope
        .transaction
        .tx_type
        .ok_or_else(|| invalid(url, "confirmed transaction missing type".to_string()))?;
    Ok(ConfirmedTransaction { tx_type })
}

/// Parse an unconfirmed-transaction body.
pub fn parse_unconfirmed(url: &str, body: &str) -> Result<UnconfirmedTransaction, RpcError> {
    let envelope: TransactionEnvelope =
        serde_json::from_str(body).map_err(|e| invalid(url, e.to_string()))?;
    let id = envelope
        .transaction
        .id
        .ok_or_else(|| invalid(url, "unconfirmed transaction missing id".to_string()))?;
    Ok(UnconfirmedTransaction { id })
}

/// Parse a block body down to its height.
pub fn parse_block_height(url: &str, body: &str) -> Result<u64, RpcError> {
    let envelope: BlockEnvelope =
        serde_json::from_str(body).map_err(|e| invalid(url, e.to_string()))?;
    Ok(envelope.header.metadata.height)
}
