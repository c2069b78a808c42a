// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::client::{MoveCall, SuiClient, TransactionResponse};
use crate::error::SuiError;
use crate::rpc::SuiRpc;
use base64::{engine::general_purpose::STANDARD, Engine};
use sealgate_config::AllowlistConfig;
use sealgate_keys::{SuiAddress, SuiKeypair};
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct AllowlistOutcome {
    pub call: MoveCall,
    /// The admin address that signed and paid for the call
    pub sender: SuiAddress,
    pub dry_run: bool,
    pub response: TransactionResponse,
}

/// `package::module::function(user)`
pub fn allowlist_call(allowlist: &AllowlistConfig, user: SuiAddress) -> MoveCall {
    MoveCall::new(
        allowlist.package_id,
        allowlist.module.clone(),
        allowlist.function.clone(),
    )
    .with_argument(user.to_string())
}

/// Grant `user` access on the allowlist, signing as `admin`.
///
/// The transaction is submitted once. A `failure` execution status is returned as
/// [`SuiError::ExecutionFailed`] after the response has been logged.
#[instrument(name = "add_to_allowlist", skip_all, fields(user = %user, dry_run = dry_run))]
pub async fn add_to_allowlist<R: SuiRpc>(
    client: &SuiClient<R>,
    admin: &SuiKeypair,
    allowlist: &AllowlistConfig,
    user: SuiAddress,
    gas_budget: u64,
    dry_run: bool,
) -> Result<AllowlistOutcome, SuiError> {
    let call = allowlist_call(allowlist, user);
    let sender = admin.address();
    info!("Calling {} as {}", call, sender);

    let tx_bytes = client.build_move_call(sender, &call, gas_budget).await?;

    let response = if dry_run {
        client.dry_run(&tx_bytes).await?
    } else {
        let raw = STANDARD.decode(&tx_bytes)?;
        let signature = admin.sign_transaction(&raw);
        client.execute(&tx_bytes, &[signature]).await?
    };

    info!(digest = %response.digest, "Allowlist transaction response: {}", response.raw);
    let response = response.ensure_success()?;

    Ok(AllowlistOutcome {
        call,
        sender,
        dry_run,
        response,
    })
}
