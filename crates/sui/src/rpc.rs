// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::error::SuiError;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::Url;
use sealgate_config::{RpcAuth, RPC};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, trace};

/// A JSON-RPC transport to a Sui fullnode
#[async_trait]
pub trait SuiRpc: Send + Sync {
    /// Call `method` with positional `params` and return the `result` member
    async fn call(&self, method: &str, params: Value) -> Result<Value, SuiError>;
}

pub trait AuthConversions {
    fn to_header_value(&self) -> Option<HeaderValue>;
}

impl AuthConversions for RpcAuth {
    fn to_header_value(&self) -> Option<HeaderValue> {
        match self {
            RpcAuth::None => None,
            RpcAuth::Basic { username, password } => {
                let credentials = STANDARD.encode(format!("{}:{}", username, password));
                HeaderValue::from_str(&format!("Basic {}", credentials)).ok()
            }
            RpcAuth::Bearer(token) => HeaderValue::from_str(&format!("Bearer {}", token)).ok(),
        }
    }
}

#[derive(Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

#[derive(Deserialize)]
struct RpcEnvelope {
    result: Option<Value>,
    error: Option<RpcErrorObject>,
}

/// JSON-RPC 2.0 over HTTP
pub struct HttpSuiRpc {
    client: reqwest::Client,
    url: Url,
    auth: Option<HeaderValue>,
    next_id: AtomicU64,
}

impl HttpSuiRpc {
    pub fn new(rpc: &RPC, auth: &RpcAuth) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: rpc.url().clone(),
            auth: auth.to_header_value(),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

pub(crate) fn request_body(id: u64, method: &str, params: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": method,
        "params": params,
    })
}

pub(crate) fn unwrap_envelope(method: &str, body: Value) -> Result<Value, SuiError> {
    let envelope: RpcEnvelope = serde_json::from_value(body)?;
    if let Some(err) = envelope.error {
        return Err(SuiError::Rpc {
            code: err.code,
            message: err.message,
        });
    }
    envelope
        .result
        .ok_or_else(|| SuiError::malformed(method, "missing result"))
}

#[async_trait]
impl SuiRpc for HttpSuiRpc {
    async fn call(&self, method: &str, params: Value) -> Result<Value, SuiError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = request_body(id, method, params);
        trace!("-> {}", body);

        let mut request = self.client.post(self.url.clone()).json(&body);
        if let Some(auth) = &self.auth {
            request = request.header(AUTHORIZATION, auth.clone());
        }

        let response: Value = request.send().await?.error_for_status()?.json().await?;
        debug!("{} responded", method);
        trace!("<- {}", response);
        unwrap_envelope(method, response)
    }
}
