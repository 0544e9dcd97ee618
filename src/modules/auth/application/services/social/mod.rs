mod provider_registry;

pub use provider_registry::SocialProviderRegistry;
