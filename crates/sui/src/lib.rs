// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

mod allowlist;
mod client;
mod error;
mod rpc;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use allowlist::{add_to_allowlist, allowlist_call, AllowlistOutcome};
pub use client::{
    ExecutionStatus, MoveCall, SuiClient, TransactionEffects, TransactionResponse,
    METHOD_DRY_RUN, METHOD_EXECUTE, METHOD_MOVE_CALL,
};
pub use error::SuiError;
pub use rpc::{AuthConversions, HttpSuiRpc, SuiRpc};
