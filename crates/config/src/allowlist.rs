// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use sealgate_keys::SuiAddress;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ALLOWLIST_PACKAGE_ID: &str =
    "0xb5c84864a69cb0b495caf548fa2bf0d23f6b69b131fa987d6f896d069de64429";
pub const DEFAULT_ALLOWLIST_MODULE: &str = "allowlist";
pub const DEFAULT_ALLOWLIST_FUNCTION: &str = "add_user";
/// Gas budget in MIST
pub const DEFAULT_GAS_BUDGET: u64 = 10_000_000;

/// The Move function that appends an address to the allowlist
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct AllowlistConfig {
    /// Package the allowlist module is published in
    pub package_id: SuiAddress,
    pub module: String,
    /// Entry function taking the user address as its only argument
    pub function: String,
}

impl AllowlistConfig {
    /// `package::module::function`
    pub fn target(&self) -> String {
        format!("{}::{}::{}", self.package_id, self.module, self.function)
    }
}

impl Default for AllowlistConfig {
    fn default() -> Self {
        Self {
            // Safe: constant is covered by the default_target test
            package_id: DEFAULT_ALLOWLIST_PACKAGE_ID
                .parse()
                .expect("default allowlist package id is a valid address"),
            module: DEFAULT_ALLOWLIST_MODULE.to_string(),
            function: DEFAULT_ALLOWLIST_FUNCTION.to_string(),
        }
    }
}
