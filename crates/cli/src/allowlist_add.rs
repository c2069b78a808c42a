// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use sealgate_config::AppConfig;
use sealgate_keys::SuiKeypair;
use sealgate_sui::{add_to_allowlist, AllowlistOutcome, HttpSuiRpc, SuiClient, SuiRpc};

/// JSON-RPC client for the configured fullnode
pub fn http_client(config: &AppConfig) -> Result<SuiClient<HttpSuiRpc>> {
    let rpc = HttpSuiRpc::new(&config.rpc()?, config.rpc_auth());
    Ok(SuiClient::new(rpc))
}

/// Sign and submit the allowlist move call described by the config
pub async fn add_user<R: SuiRpc>(
    config: &AppConfig,
    client: &SuiClient<R>,
    dry_run: bool,
) -> Result<AllowlistOutcome> {
    let admin = SuiKeypair::from_secret_key(config.require_admin_secret_key()?.expose())
        .context("Invalid admin secret key")?;
    let user = config.require_user_address()?;

    let outcome = add_to_allowlist(
        client,
        &admin,
        config.allowlist(),
        user,
        config.gas_budget(),
        dry_run,
    )
    .await
    .with_context(|| format!("Could not add {} to the allowlist", user))?;

    let verb = if outcome.dry_run { "Simulated" } else { "Executed" };
    println!("{} {} ({})", verb, outcome.call, outcome.response.digest);
    Ok(outcome)
}

pub async fn execute(config: &AppConfig, dry_run: bool) -> Result<()> {
    let client = http_client(config)?;
    add_user(config, &client, dry_run).await?;
    Ok(())
}
