// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::error::SuiError;
use crate::rpc::SuiRpc;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays canned responses in order and records every call
pub struct MockRpc {
    responses: Mutex<VecDeque<Result<Value, SuiError>>>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl MockRpc {
    pub fn new(responses: Vec<Result<Value, SuiError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(vec![]),
        }
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }

    /// A `sui_executeTransactionBlock` result
    pub fn execution(digest: &str, status: &str, error: Option<&str>) -> Value {
        let mut status = json!({ "status": status });
        if let Some(error) = error {
            status["error"] = json!(error);
        }
        json!({
            "digest": digest,
            "effects": { "status": status, "transactionDigest": digest },
            "events": []
        })
    }
}

#[async_trait]
impl SuiRpc for MockRpc {
    async fn call(&self, method: &str, params: Value) -> Result<Value, SuiError> {
        self.calls
            .lock()
            .unwrap()
            .push((method.to_string(), params));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(SuiError::malformed(method, "no canned response")))
    }
}
