// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::error::SuiError;
use crate::rpc::SuiRpc;
use sealgate_keys::SuiAddress;
use serde::Deserialize;
use serde_json::{json, Value};
use std::fmt;
use tracing::instrument;

pub const METHOD_MOVE_CALL: &str = "unsafe_moveCall";
pub const METHOD_EXECUTE: &str = "sui_executeTransactionBlock";
pub const METHOD_DRY_RUN: &str = "sui_dryRunTransactionBlock";

/// Block until the node has applied the effects locally
pub const WAIT_FOR_LOCAL_EXECUTION: &str = "WaitForLocalExecution";

/// A single Move entry function call
#[derive(Debug, Clone, PartialEq)]
pub struct MoveCall {
    pub package: SuiAddress,
    pub module: String,
    pub function: String,
    pub type_arguments: Vec<String>,
    /// Pure arguments in their JSON-RPC form. Addresses are `0x` strings.
    pub arguments: Vec<Value>,
}

impl MoveCall {
    pub fn new(package: SuiAddress, module: impl Into<String>, function: impl Into<String>) -> Self {
        Self {
            package,
            module: module.into(),
            function: function.into(),
            type_arguments: vec![],
            arguments: vec![],
        }
    }

    pub fn with_argument(mut self, argument: impl Into<Value>) -> Self {
        self.arguments.push(argument.into());
        self
    }

    pub fn target(&self) -> String {
        format!("{}::{}::{}", self.package, self.module, self.function)
    }
}

impl fmt::Display for MoveCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.target())?;
        for (i, arg) in self.arguments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match arg {
                Value::String(s) => f.write_str(s)?,
                other => write!(f, "{other}")?,
            }
        }
        f.write_str(")")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExecutionStatus {
    pub status: String,
    #[serde(default)]
    pub error: Option<String>,
}

impl ExecutionStatus {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionEffects {
    pub status: ExecutionStatus,
    #[serde(default)]
    pub transaction_digest: Option<String>,
}

/// Response of an executed or dry-run transaction block
#[derive(Debug, Clone)]
pub struct TransactionResponse {
    pub digest: String,
    pub effects: Option<TransactionEffects>,
    /// The full node response
    pub raw: Value,
}

impl TransactionResponse {
    fn from_value(method: &str, raw: Value) -> Result<Self, SuiError> {
        let effects = match raw.get("effects") {
            Some(effects) if !effects.is_null() => Some(
                serde_json::from_value::<TransactionEffects>(effects.clone())
                    .map_err(|e| SuiError::malformed(method, format!("effects: {e}")))?,
            ),
            _ => None,
        };

        let digest = raw
            .get("digest")
            .and_then(Value::as_str)
            .map(str::to_string)
            .or_else(|| effects.as_ref().and_then(|e| e.transaction_digest.clone()))
            .ok_or_else(|| SuiError::malformed(method, "missing transaction digest"))?;

        Ok(Self {
            digest,
            effects,
            raw,
        })
    }

    /// Fails with [`SuiError::ExecutionFailed`] unless the effects report success
    pub fn ensure_success(self) -> Result<Self, SuiError> {
        let failure = match &self.effects {
            Some(effects) if effects.status.is_success() => None,
            Some(effects) => Some(
                effects
                    .status
                    .error
                    .clone()
                    .unwrap_or_else(|| effects.status.status.clone()),
            ),
            None => Some("no effects in response".to_string()),
        };
        match failure {
            None => Ok(self),
            Some(error) => Err(SuiError::ExecutionFailed {
                digest: self.digest,
                error,
            }),
        }
    }
}

/// Typed calls against a Sui fullnode
pub struct SuiClient<R> {
    rpc: R,
}

impl<R: SuiRpc> SuiClient<R> {
    pub fn new(rpc: R) -> Self {
        Self { rpc }
    }

    pub fn rpc(&self) -> &R {
        &self.rpc
    }

    /// Have the node build the transaction bytes for `call`. The node selects the gas coin
    /// owned by `sender`. Returns base64 BCS `TransactionData`.
    #[instrument(name = "build_move_call", skip_all, fields(target = %call.target()))]
    pub async fn build_move_call(
        &self,
        sender: SuiAddress,
        call: &MoveCall,
        gas_budget: u64,
    ) -> Result<String, SuiError> {
        let params = json!([
            sender.to_string(),
            call.package.to_string(),
            call.module,
            call.function,
            call.type_arguments,
            call.arguments,
            Value::Null,
            gas_budget.to_string(),
        ]);
        let result = self.rpc.call(METHOD_MOVE_CALL, params).await?;
        result
            .get("txBytes")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| SuiError::malformed(METHOD_MOVE_CALL, "missing txBytes"))
    }

    #[instrument(name = "execute", skip_all)]
    pub async fn execute(
        &self,
        tx_bytes: &str,
        signatures: &[String],
    ) -> Result<TransactionResponse, SuiError> {
        let params = json!([
            tx_bytes,
            signatures,
            { "showEffects": true, "showEvents": true },
            WAIT_FOR_LOCAL_EXECUTION,
        ]);
        let result = self.rpc.call(METHOD_EXECUTE, params).await?;
        TransactionResponse::from_value(METHOD_EXECUTE, result)
    }

    #[instrument(name = "dry_run", skip_all)]
    pub async fn dry_run(&self, tx_bytes: &str) -> Result<TransactionResponse, SuiError> {
        let result = self.rpc.call(METHOD_DRY_RUN, json!([tx_bytes])).await?;
        TransactionResponse::from_value(METHOD_DRY_RUN, result)
    }
}
