// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use sealgate_config::AppConfig;
use sealgate_sui::{SuiClient, SuiRpc};
use tracing::instrument;

use crate::{allowlist_add, encrypt};

pub async fn execute(config: &AppConfig, dry_run: bool) -> Result<()> {
    let client = allowlist_add::http_client(config)?;
    run_with(config, &client, dry_run).await
}

/// Allowlist the user then encrypt the input file. Nothing is rolled back if encryption
/// fails after the transaction landed.
#[instrument(skip_all)]
pub async fn run_with<R: SuiRpc>(
    config: &AppConfig,
    client: &SuiClient<R>,
    dry_run: bool,
) -> Result<()> {
    allowlist_add::add_user(config, client, dry_run).await?;
    encrypt::execute(config).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sealgate_config::{load_config, CliOverrides, SecretString};
    use sealgate_fhe::{decrypt_file, BfvPreset};
    use sealgate_sui::test_helpers::MockRpc;
    use sealgate_sui::{METHOD_EXECUTE, METHOD_MOVE_CALL};
    use serde_json::json;
    use tempfile::{tempdir, TempDir};

    const ADMIN_KEY: &str = "BwcHBwcHBwcHBwcHBwcHBwcHBwcHBwcHBwcHBwcHBwc=";

    fn config_in(dir: &TempDir) -> AppConfig {
        let config_file = dir.path().join("sealgate.config.yaml");
        std::fs::write(&config_file, "gas_budget: 1000\n").unwrap();
        std::fs::write(dir.path().join("input.txt"), "hello allowlist").unwrap();

        let overrides = CliOverrides {
            admin_secret_key: Some(SecretString::new(ADMIN_KEY)),
            user_address: Some("0xabc".parse().unwrap()),
            fhe_preset: Some(BfvPreset::InsecureBfv512),
            input_file: Some(dir.path().join("input.txt")),
            output_file: Some(dir.path().join("output.txt")),
            secret_key_file: Some(dir.path().join("bfv.key")),
            ..Default::default()
        };
        load_config(Some(config_file.to_string_lossy().into_owned()), overrides).unwrap()
    }

    fn mock(status: &str, error: Option<&str>) -> SuiClient<MockRpc> {
        SuiClient::new(MockRpc::new(vec![
            Ok(json!({ "txBytes": "dHJhbnNhY3Rpb24=" })),
            Ok(MockRpc::execution("D1", status, error)),
        ]))
    }

    fn methods(client: &SuiClient<MockRpc>) -> Vec<String> {
        client.rpc().calls().into_iter().map(|(m, _)| m).collect()
    }

    #[tokio::test]
    async fn allowlists_then_encrypts() {
        let dir = tempdir().unwrap();
        let config = config_in(&dir);
        let client = mock("success", None);

        run_with(&config, &client, false).await.unwrap();

        assert_eq!(methods(&client), vec![METHOD_MOVE_CALL, METHOD_EXECUTE]);
        let params = BfvPreset::InsecureBfv512.build_arc().unwrap();
        let text = decrypt_file(
            params,
            &dir.path().join("output.txt"),
            &dir.path().join("bfv.key"),
        )
        .await
        .unwrap();
        assert_eq!(text, "hello allowlist");
    }

    #[tokio::test]
    async fn failed_transaction_skips_encryption() {
        let dir = tempdir().unwrap();
        let config = config_in(&dir);
        let client = mock("failure", Some("MoveAbort(1)"));

        let err = run_with(&config, &client, false).await.unwrap_err();
        assert!(format!("{err:#}").contains("MoveAbort(1)"));

        assert_eq!(methods(&client), vec![METHOD_MOVE_CALL, METHOD_EXECUTE]);
        assert!(!dir.path().join("output.txt").exists());
        assert!(!dir.path().join("bfv.key").exists());
    }

    #[tokio::test]
    async fn missing_user_fails_before_any_rpc_call() {
        let dir = tempdir().unwrap();
        let config_file = dir.path().join("sealgate.config.yaml");
        std::fs::write(&config_file, "gas_budget: 1000\n").unwrap();
        let overrides = CliOverrides {
            admin_secret_key: Some(SecretString::new(ADMIN_KEY)),
            output_file: Some(dir.path().join("output.txt")),
            ..Default::default()
        };
        let config =
            load_config(Some(config_file.to_string_lossy().into_owned()), overrides).unwrap();
        let client = mock("success", None);

        assert!(run_with(&config, &client, false).await.is_err());
        assert!(client.rpc().calls().is_empty());
        assert!(!dir.path().join("output.txt").exists());
    }
}
