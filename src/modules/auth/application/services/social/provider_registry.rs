use std::collections::HashMap;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::social_auth_provider::SocialAuthProvider;

/// Providers keyed by the name clients send in the `provider` field.
#[derive(Clone, Default)]
pub struct SocialProviderRegistry {
    providers: HashMap<String, Arc<dyn SocialAuthProvider>>,
}

impl SocialProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers under `provider.name()`, replacing any previous entry.
    pub fn register(mut self, provider: Arc<dyn SocialAuthProvider>) -> Self {
        self.providers.insert(provider.name().to_string(), provider);
        self
    }

    pub fn load(&self, name: &str) -> Option<Arc<dyn SocialAuthProvider>> {
        self.providers.get(name).cloned()
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(not(tarpaulin_include))]
impl std::fmt::Debug for SocialProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SocialProviderRegistry")
            .field("providers", &self.names())
            .finish()
    }
}
