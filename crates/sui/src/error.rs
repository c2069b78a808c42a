// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SuiError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Malformed RPC response for {method}: {reason}")]
    MalformedResponse { method: String, reason: String },

    #[error("Transaction {digest} failed: {error}")]
    ExecutionFailed { digest: String, error: String },

    #[error("Invalid transaction bytes: {0}")]
    InvalidTxBytes(#[from] base64::DecodeError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SuiError {
    pub(crate) fn malformed(method: &str, reason: impl Into<String>) -> Self {
        SuiError::MalformedResponse {
            method: method.to_string(),
            reason: reason.into(),
        }
    }
}
