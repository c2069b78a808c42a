mod allowlist;
mod app_config;
pub mod load_config;
pub mod rpc;
mod secret;
pub mod validation;
mod yaml;

pub use allowlist::*;
pub use app_config::*;
pub use rpc::*;
pub use secret::SecretString;
