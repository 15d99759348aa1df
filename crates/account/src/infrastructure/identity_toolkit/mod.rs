// crates/account/src/infrastructure/identity_toolkit/mod.rs

mod identity_toolkit_config;
mod identity_toolkit_error_mapper;
mod identity_toolkit_payloads;
mod identity_toolkit_provider;

pub use identity_toolkit_config::{IdentityToolkitConfig, DEFAULT_IDENTITY_TOOLKIT_URL};
pub use identity_toolkit_error_mapper::map_provider_error;
pub use identity_toolkit_provider::IdentityToolkitProvider;
