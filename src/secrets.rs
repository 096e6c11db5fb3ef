//! Weather API key lookup
//!
//! The key is looked up once at start-up by asking a list of providers in
//! order; the first one that yields a non-empty value wins.

use crate::config::SecretsConfig;
use crate::{Result, SkillError};
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// A place the API key may be stored
pub trait SecretProvider: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// The secret, or `None` when this provider does not have it
    fn resolve(&self) -> Option<String>;
}

/// Platform secret store (Secret Service, Keychain or Credential Manager)
pub struct KeyringProvider {
    service: String,
    user: String,
}

impl KeyringProvider {
    pub fn new(service: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            user: user.into(),
        }
    }
}

impl SecretProvider for KeyringProvider {
    fn name(&self) -> &str {
        "keyring"
    }

    fn resolve(&self) -> Option<String> {
        let entry = keyring::Entry::new(&self.service, &self.user);
        match entry.and_then(|entry| entry.get_password()) {
            Ok(secret) => Some(secret),
            Err(e) => {
                debug!("Keyring lookup for {}/{} failed: {}", self.service, self.user, e);
                None
            }
        }
    }
}

/// Environment variable
pub struct EnvProvider {
    var: String,
}

impl EnvProvider {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl SecretProvider for EnvProvider {
    fn name(&self) -> &str {
        "environment"
    }

    fn resolve(&self) -> Option<String> {
        env::var(&self.var).ok()
    }
}

/// Local file holding the secret on its first line
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SecretProvider for FileProvider {
    fn name(&self) -> &str {
        "file"
    }

    fn resolve(&self) -> Option<String> {
        let contents = fs::read_to_string(&self.path)
            .map_err(|e| debug!("Cannot read secret file {}: {}", self.path.display(), e))
            .ok()?;
        contents.lines().next().map(|line| line.trim_end().to_string())
    }
}

/// Ordered list of secret providers
#[derive(Default)]
pub struct SecretChain {
    providers: Vec<Box<dyn SecretProvider>>,
}

impl SecretChain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a provider; it is asked after all providers added before it
    #[must_use]
    pub fn with(mut self, provider: impl SecretProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Secret store first, then the environment, then the local file
    #[must_use]
    pub fn from_config(config: &SecretsConfig) -> Self {
        Self::new()
            .with(KeyringProvider::new(&config.keyring_service, &config.keyring_user))
            .with(EnvProvider::new(&config.env_var))
            .with(FileProvider::new(&config.fallback_file))
    }

    /// First non-empty secret, in provider order
    pub fn resolve(&self) -> Result<String> {
        for provider in &self.providers {
            if let Some(secret) = provider.resolve().filter(|s| !s.trim().is_empty()) {
                info!("Weather API key found in {}", provider.name());
                return Ok(secret);
            }
            debug!("No weather API key in {}", provider.name());
        }

        let tried: Vec<&str> = self.providers.iter().map(|p| p.name()).collect();
        Err(SkillError::secret(format!(
            "No weather API key found (tried: {})",
            tried.join(", ")
        )))
    }
}
