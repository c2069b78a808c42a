// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::PathBuf;

use crate::allowlist::{self, AllowlistCommands};
use crate::helpers::parse_secret_key;
use crate::helpers::telemetry::{setup_tracing, shutdown_tracing};
use crate::keys::{self, KeysCommands};
use crate::{decrypt, encrypt, run};
use anyhow::Result;
use clap::{command, ArgAction, Args, Parser, Subcommand};
use sealgate_config::validation::ValidUrl;
use sealgate_config::{load_config, AppConfig, CliOverrides, SecretString};
use sealgate_fhe::BfvPreset;
use sealgate_keys::SuiAddress;
use tracing::{info, instrument, Level};

#[derive(Parser, Debug)]
#[command(name = "sealgate")]
#[command(about = "Grant a Sui address access on an allowlist contract and BFV-encrypt a file", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,

    /// Indicate error levels by adding additional `-v` arguments. Eg. `sealgate -vvv` will give
    /// you trace level output
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true
    )]
    pub verbose: u8,

    /// Silence all output. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose",
        global = true
    )]
    quiet: bool,

    /// Sui fullnode JSON-RPC endpoint
    #[arg(long = "rpc-url", global = true)]
    rpc_url: Option<String>,

    /// Set the Open Telemetry collector grpc endpoint. Eg. http://localhost:4317
    #[arg(long = "otel", global = true)]
    pub otel: Option<ValidUrl>,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::WARN,  //
                1 => Level::INFO,  // -v
                2 => Level::DEBUG, // -vv
                _ => Level::TRACE, // -vvv
            }
        }
    }

    pub async fn execute(self) -> Result<()> {
        let config = self.load_config()?;

        let provider = setup_tracing(&config, self.log_level())?;
        info!("Config loaded from: {:?}", config.config_file());

        let result = self.command.execute(&config).await;
        shutdown_tracing(provider);
        result
    }

    pub fn load_config(&self) -> Result<AppConfig> {
        let config = load_config(self.config.clone(), self.overrides())?;
        Ok(config)
    }

    /// Collect every flag that maps onto a configuration key
    pub fn overrides(&self) -> CliOverrides {
        let mut overrides = CliOverrides {
            rpc_url: self.rpc_url.clone(),
            otel: self.otel.clone().map(Into::into),
            ..Default::default()
        };

        match &self.command {
            Commands::Run { tx, file } => {
                tx.apply(&mut overrides);
                file.apply(&mut overrides);
            }
            Commands::Allowlist {
                command: AllowlistCommands::Add { tx },
            } => tx.apply(&mut overrides),
            Commands::Encrypt { file } => file.apply(&mut overrides),
            Commands::Decrypt { preset, .. } => overrides.fhe_preset = *preset,
            Commands::Keys {
                command: KeysCommands::Address { admin_key },
            } => overrides.admin_secret_key = admin_key.clone(),
            Commands::Keys {
                command: KeysCommands::Generate,
            } => {}
        }

        overrides
    }
}

/// Flags for the allowlist transaction
#[derive(Args, Debug, Clone)]
pub struct TxArgs {
    /// Admin secret key, `suiprivkey1...` or base64. Prefer `SEALGATE_ADMIN_SECRET_KEY`.
    #[arg(long = "admin-key", value_parser = parse_secret_key)]
    pub admin_key: Option<SecretString>,

    /// Address to add to the allowlist
    #[arg(long = "user", short = 'u')]
    pub user: Option<SuiAddress>,

    /// Gas budget in MIST
    #[arg(long = "gas-budget")]
    pub gas_budget: Option<u64>,

    /// Simulate the transaction instead of executing it
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl TxArgs {
    fn apply(&self, overrides: &mut CliOverrides) {
        overrides.admin_secret_key = self.admin_key.clone();
        overrides.user_address = self.user;
        overrides.gas_budget = self.gas_budget;
    }
}

/// Flags for file encryption
#[derive(Args, Debug, Clone)]
pub struct FileArgs {
    /// Text file to encrypt
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Where the base64 ciphertext is written
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Persist the BFV secret key here so the ciphertext can be decrypted later
    #[arg(long = "secret-key-out")]
    pub secret_key_out: Option<PathBuf>,

    /// BFV parameter preset
    #[arg(long, value_enum)]
    pub preset: Option<BfvPreset>,
}

impl FileArgs {
    fn apply(&self, overrides: &mut CliOverrides) {
        overrides.input_file = self.input.clone();
        overrides.output_file = self.output.clone();
        overrides.secret_key_file = self.secret_key_out.clone();
        overrides.fhe_preset = self.preset;
    }
}

impl Commands {
    #[instrument(skip_all)]
    async fn execute(self, config: &AppConfig) -> Result<()> {
        match self {
            Commands::Run { tx, .. } => run::execute(config, tx.dry_run).await?,
            Commands::Allowlist { command } => allowlist::execute(command, config).await?,
            Commands::Encrypt { .. } => encrypt::execute(config).await?,
            Commands::Decrypt {
                ciphertext,
                secret_key,
                output,
                ..
            } => decrypt::execute(config, ciphertext, secret_key, output).await?,
            Commands::Keys { command } => keys::execute(command, config)?,
        }

        Ok(())
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add the user to the allowlist and then encrypt the input file
    Run {
        #[command(flatten)]
        tx: TxArgs,

        #[command(flatten)]
        file: FileArgs,
    },

    /// Allowlist contract commands
    Allowlist {
        #[command(subcommand)]
        command: AllowlistCommands,
    },

    /// Encrypt the input file under a fresh BFV key pair
    Encrypt {
        #[command(flatten)]
        file: FileArgs,
    },

    /// Decrypt a ciphertext written by `encrypt` with its persisted secret key
    Decrypt {
        /// Base64 ciphertext file. Defaults to the configured output file.
        #[arg(long)]
        ciphertext: Option<PathBuf>,

        /// Base64 BFV secret key file. Defaults to the configured secret key file.
        #[arg(long = "secret-key")]
        secret_key: Option<PathBuf>,

        /// Write the plaintext here instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// BFV parameter preset the ciphertext was created with
        #[arg(long, value_enum)]
        preset: Option<BfvPreset>,
    },

    /// Sui key commands
    Keys {
        #[command(subcommand)]
        command: KeysCommands,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn log_levels() {
        let cli = Cli::parse_from(["sealgate", "keys", "generate"]);
        assert_eq!(cli.log_level(), Level::WARN);
        let cli = Cli::parse_from(["sealgate", "-vv", "keys", "generate"]);
        assert_eq!(cli.log_level(), Level::DEBUG);
        let cli = Cli::parse_from(["sealgate", "keys", "generate", "-q"]);
        assert_eq!(cli.log_level(), Level::ERROR);
        assert!(Cli::try_parse_from(["sealgate", "-v", "-q", "keys", "generate"]).is_err());
    }

    #[test]
    fn run_flags_become_overrides() {
        let cli = Cli::parse_from([
            "sealgate",
            "--rpc-url",
            "http://127.0.0.1:9000",
            "run",
            "--user",
            "0xabc",
            "--gas-budget",
            "42",
            "--input",
            "in.txt",
            "--output",
            "out.txt",
            "--preset",
            "INSECURE_BFV_512",
            "--dry-run",
        ]);
        let overrides = cli.overrides();
        assert_eq!(overrides.rpc_url.as_deref(), Some("http://127.0.0.1:9000"));
        assert_eq!(overrides.user_address, Some("0xabc".parse().unwrap()));
        assert_eq!(overrides.gas_budget, Some(42));
        assert_eq!(overrides.input_file, Some(PathBuf::from("in.txt")));
        assert_eq!(overrides.output_file, Some(PathBuf::from("out.txt")));
        assert_eq!(overrides.fhe_preset, Some(BfvPreset::InsecureBfv512));
        assert!(overrides.admin_secret_key.is_none());
        assert!(matches!(&cli.command, Commands::Run { tx, .. } if tx.dry_run));
    }

    #[test]
    fn invalid_values_are_rejected_by_the_parser() {
        assert!(Cli::try_parse_from(["sealgate", "allowlist", "add", "--user", "abc"]).is_err());
        assert!(
            Cli::try_parse_from(["sealgate", "keys", "address", "--admin-key", "AAAA"]).is_err()
        );
        assert!(Cli::try_parse_from(["sealgate", "encrypt", "--preset", "BFV_8192"]).is_err());
    }
}
