// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::allowlist::{AllowlistConfig, DEFAULT_GAS_BUDGET};
use crate::load_config::{find_in_parent, resolve_config_path, DEFAULT_CONFIG_NAME};
use crate::rpc::{RpcAuth, DEFAULT_RPC_URL, RPC};
use crate::secret::SecretString;
use crate::yaml::load_yaml_with_env;
use anyhow::{anyhow, bail, Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use sealgate_fhe_params::BfvPreset;
use sealgate_keys::SuiAddress;
use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf};
use tracing::debug;

/// Environment variables prefixed with this override the configuration file. Nested keys
/// are separated by `__` eg. `SEALGATE_ALLOWLIST__MODULE`.
pub const ENV_PREFIX: &str = "SEALGATE_";

/// The config actually used throughout the app
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Sui fullnode JSON-RPC endpoint
    rpc_url: String,
    /// Optional credentials for the RPC endpoint
    rpc_auth: RpcAuth,
    /// The allowlist move call
    allowlist: AllowlistConfig,
    /// Gas budget in MIST for the allowlist transaction
    gas_budget: u64,
    /// Admin key that signs and pays for the transaction. Either `suiprivkey1...` or base64 of
    /// a 32 byte seed or 64 byte keypair. Prefer setting this with `SEALGATE_ADMIN_SECRET_KEY`.
    admin_secret_key: Option<SecretString>,
    /// Address granted access on the allowlist
    user_address: Option<SuiAddress>,
    /// BFV parameter preset used for encryption
    fhe_preset: BfvPreset,
    /// Text file to encrypt
    input_file: PathBuf,
    /// Where the base64 ciphertext is written
    output_file: PathBuf,
    /// Where to persist the BFV secret key. It is discarded when unset.
    secret_key_file: Option<PathBuf>,
    /// Set the Open Telemetry collector grpc endpoint. Eg. 127.0.0.1:4317
    otel: Option<String>,
    /// The config file as found. This is informational and you should not use this in your
    /// configurations
    found_config_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            rpc_auth: RpcAuth::None,
            allowlist: AllowlistConfig::default(),
            gas_budget: DEFAULT_GAS_BUDGET,
            admin_secret_key: None,
            user_address: None,
            fhe_preset: BfvPreset::default(),
            input_file: PathBuf::from("input.txt"),
            output_file: PathBuf::from("output.txt"),
            secret_key_file: None,
            otel: None,
            found_config_file: None,
        }
    }
}

impl AppConfig {
    /// Get the validated RPC endpoint
    pub fn rpc(&self) -> Result<RPC> {
        RPC::from_url(&self.rpc_url)
            .map_err(|e| anyhow!("Failed to parse RPC URL '{}': {}", self.rpc_url, e))
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    pub fn rpc_auth(&self) -> &RpcAuth {
        &self.rpc_auth
    }

    pub fn allowlist(&self) -> &AllowlistConfig {
        &self.allowlist
    }

    pub fn gas_budget(&self) -> u64 {
        self.gas_budget
    }

    pub fn admin_secret_key(&self) -> Option<&SecretString> {
        self.admin_secret_key.as_ref()
    }

    /// Get the admin key or fail with a hint on how to provide one
    pub fn require_admin_secret_key(&self) -> Result<&SecretString> {
        self.admin_secret_key.as_ref().ok_or_else(|| {
            anyhow!("No admin secret key configured. Set {ENV_PREFIX}ADMIN_SECRET_KEY or pass --admin-key")
        })
    }

    pub fn user_address(&self) -> Option<SuiAddress> {
        self.user_address
    }

    /// Get the user address or fail with a hint on how to provide one
    pub fn require_user_address(&self) -> Result<SuiAddress> {
        self.user_address.ok_or_else(|| {
            anyhow!("No user address configured. Set `user_address` in the config or pass --user")
        })
    }

    pub fn fhe_preset(&self) -> BfvPreset {
        self.fhe_preset
    }

    pub fn input_file(&self) -> &PathBuf {
        &self.input_file
    }

    pub fn output_file(&self) -> &PathBuf {
        &self.output_file
    }

    pub fn secret_key_file(&self) -> Option<&PathBuf> {
        self.secret_key_file.as_ref()
    }

    /// Get the open telemetry collector url
    pub fn otel(&self) -> Option<String> {
        self.otel.clone()
    }

    /// Get the config file path if one was loaded
    pub fn config_file(&self) -> Option<&PathBuf> {
        self.found_config_file.as_ref()
    }
}

/// Value struct for passing configuration from the cli to the configuration
#[derive(Default, Serialize, Deserialize, Clone, Debug)]
pub struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpc_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_secret_key: Option<SecretString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_address: Option<SuiAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_budget: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fhe_preset: Option<BfvPreset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_key_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otel: Option<String>,
}

#[derive(Serialize)]
struct FoundConfigFile {
    found_config_file: PathBuf,
}

/// Load the config at the config_file or the default location if not provided.
///
/// Precedence from lowest to highest: defaults, yaml file, `SEALGATE_*` environment, cli.
/// A missing config file is only an error when it was given explicitly.
pub fn load_config(config_file: Option<String>, overrides: CliOverrides) -> Result<AppConfig> {
    let resolved = resolve_config_path(
        find_in_parent,
        env::current_dir()?,
        OsDirs::config_dir(),
        DEFAULT_CONFIG_NAME,
        config_file.map(PathBuf::from),
    );

    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

    if resolved.path.exists() {
        let loaded_yaml = load_yaml_with_env(&resolved.path).context(format!(
            "Could not read configuration file {}",
            resolved.path.display()
        ))?;
        debug!("Loading configuration from {}", resolved.path.display());
        figment = figment
            .merge(Yaml::string(&loaded_yaml))
            .merge(Serialized::defaults(FoundConfigFile {
                found_config_file: resolved.path.clone(),
            }));
    } else if resolved.explicit {
        bail!("Configuration file not found: {}", resolved.path.display());
    }

    let config: AppConfig = figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .merge(Serialized::defaults(overrides))
        .extract()
        .context("Could not parse configuration")?;

    Ok(config)
}

pub struct OsDirs;
impl OsDirs {
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sealgate")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    const SEED_B64: &str = "BwcHBwcHBwcHBwcHBwcHBwcHBwcHBwcHBwcHBwcHBwc=";

    fn isolate(jail: &mut Jail) {
        let home = format!("{}", jail.directory().to_string_lossy());
        jail.set_env("HOME", &home);
        jail.set_env("XDG_CONFIG_HOME", &format!("{}/.config", home));
    }

    #[test]
    fn test_defaults_without_file() {
        Jail::expect_with(|jail| {
            isolate(jail);
            let config =
                load_config(None, CliOverrides::default()).map_err(|err| err.to_string())?;

            assert_eq!(config.rpc_url(), DEFAULT_RPC_URL);
            assert_eq!(config.rpc_auth(), &RpcAuth::None);
            assert_eq!(config.gas_budget(), DEFAULT_GAS_BUDGET);
            assert_eq!(config.allowlist(), &AllowlistConfig::default());
            assert_eq!(config.input_file(), &PathBuf::from("input.txt"));
            assert_eq!(config.output_file(), &PathBuf::from("output.txt"));
            assert_eq!(config.fhe_preset(), BfvPreset::SealBfv2048);
            assert!(config.admin_secret_key().is_none());
            assert!(config.user_address().is_none());
            assert!(config.config_file().is_none());
            assert!(config.require_admin_secret_key().is_err());
            assert!(config.require_user_address().is_err());
            Ok(())
        });
    }

    #[test]
    fn test_yaml_file_in_cwd() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file(
                DEFAULT_CONFIG_NAME,
                r#"
rpc_url: "http://127.0.0.1:9000"
rpc_auth:
  type: "Bearer"
  credentials: "testToken"
allowlist:
  package_id: "0x2"
  module: "gate"
  function: "grant"
gas_budget: 5000000
user_address: "0xabc"
fhe_preset: "INSECURE_BFV_512"
input_file: "./plain.txt"
secret_key_file: "./bfv.key"
"#,
            )?;

            let config =
                load_config(None, CliOverrides::default()).map_err(|err| err.to_string())?;

            assert_eq!(config.rpc_url(), "http://127.0.0.1:9000");
            assert!(config.rpc().map_err(|e| e.to_string())?.is_local());
            assert_eq!(config.rpc_auth(), &RpcAuth::Bearer("testToken".to_string()));
            assert_eq!(
                config.allowlist().target(),
                "0x0000000000000000000000000000000000000000000000000000000000000002::gate::grant"
            );
            assert_eq!(config.gas_budget(), 5_000_000);
            assert_eq!(config.user_address(), Some("0xabc".parse().unwrap()));
            assert_eq!(config.fhe_preset(), BfvPreset::InsecureBfv512);
            assert_eq!(config.input_file(), &PathBuf::from("./plain.txt"));
            assert_eq!(config.output_file(), &PathBuf::from("output.txt"));
            assert_eq!(config.secret_key_file(), Some(&PathBuf::from("./bfv.key")));
            assert_eq!(
                config.config_file(),
                Some(&jail.directory().join(DEFAULT_CONFIG_NAME))
            );
            Ok(())
        });
    }

    #[test]
    fn test_partial_allowlist_keeps_defaults() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file(DEFAULT_CONFIG_NAME, "allowlist:\n  function: \"grant\"\n")?;

            let config =
                load_config(None, CliOverrides::default()).map_err(|err| err.to_string())?;
            let defaults = AllowlistConfig::default();
            assert_eq!(config.allowlist().package_id, defaults.package_id);
            assert_eq!(config.allowlist().module, defaults.module);
            assert_eq!(config.allowlist().function, "grant");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file_and_cli_overrides_env() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.set_env("TEST_PORT", "9123");
            jail.create_file(
                DEFAULT_CONFIG_NAME,
                r#"
rpc_url: "http://localhost:${TEST_PORT}"
output_file: "from-file.txt"
"#,
            )?;
            jail.set_env("SEALGATE_ADMIN_SECRET_KEY", SEED_B64);
            jail.set_env("SEALGATE_OUTPUT_FILE", "from-env.txt");
            jail.set_env("SEALGATE_ALLOWLIST__MODULE", "env_module");

            let config =
                load_config(None, CliOverrides::default()).map_err(|err| err.to_string())?;
            assert_eq!(config.rpc_url(), "http://localhost:9123");
            assert_eq!(config.output_file(), &PathBuf::from("from-env.txt"));
            assert_eq!(config.allowlist().module, "env_module");
            assert_eq!(
                config.admin_secret_key().map(|k| k.expose()),
                Some(SEED_B64)
            );

            let overrides = CliOverrides {
                output_file: Some(PathBuf::from("from-cli.txt")),
                user_address: Some("0x5".parse().unwrap()),
                ..Default::default()
            };
            let config = load_config(None, overrides).map_err(|err| err.to_string())?;
            assert_eq!(config.output_file(), &PathBuf::from("from-cli.txt"));
            assert_eq!(config.user_address(), Some("0x5".parse().unwrap()));
            // untouched by the overrides
            assert_eq!(config.allowlist().module, "env_module");
            Ok(())
        });
    }

    #[test]
    fn test_explicit_missing_file_fails() {
        Jail::expect_with(|jail| {
            isolate(jail);
            let result = load_config(Some("nope.yaml".to_string()), CliOverrides::default());
            assert!(result.is_err());

            jail.create_file("custom.yaml", "gas_budget: 42\n")?;
            let config = load_config(Some("custom.yaml".to_string()), CliOverrides::default())
                .map_err(|err| err.to_string())?;
            assert_eq!(config.gas_budget(), 42);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file(DEFAULT_CONFIG_NAME, "user_address: \"<USER_WALLET_ADDRESS>\"\n")?;
            assert!(load_config(None, CliOverrides::default()).is_err());

            jail.create_file(DEFAULT_CONFIG_NAME, "unknown_key: true\n")?;
            assert!(load_config(None, CliOverrides::default()).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_secret_not_in_debug_output() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.set_env("SEALGATE_ADMIN_SECRET_KEY", SEED_B64);
            let config =
                load_config(None, CliOverrides::default()).map_err(|err| err.to_string())?;
            assert!(!format!("{config:?}").contains(SEED_B64));
            Ok(())
        });
    }
}
