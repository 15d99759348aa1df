mod identity_provider;

pub use identity_provider::IdentityProvider;

#[cfg(test)]
mod identity_provider_stub;
#[cfg(test)]
pub use identity_provider_stub::IdentityProviderStub;
