//! Configuration: API credential and endpoint override.

use std::fmt;
use std::sync::{Arc, OnceLock, RwLock};

/// Global default config (lazy-initialized from env).
static DEFAULT_CONFIG: OnceLock<MealgenConfig> = OnceLock::new();

/// Configuration for mealgen.
///
/// Holds the Gemini API key and an optional base-URL override. Built once at
/// program start (usually via [`MealgenConfig::from_env`]) and shared by
/// reference; read-only after initialization, so safe for concurrent use.
#[derive(Clone, Default)]
pub struct MealgenConfig {
    api_key: Arc<RwLock<Option<String>>>,
    base_url: Arc<RwLock<Option<String>>>,
}

impl fmt::Debug for MealgenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MealgenConfig")
            .field("api_key", &self.api_key.read().ok().map(|k| k.as_ref().map(|_| "..")))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl MealgenConfig {
    /// Create an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from environment variables.
    ///
    /// Checks `GEMINI_API_KEY`, `GOOGLE_API_KEY`, and `API_KEY` in that order
    /// (first match wins), plus `GEMINI_BASE_URL` for an endpoint override.
    /// Presence is not validated here; a missing key surfaces as an
    /// authentication error when the client is constructed.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        let config = Self::new();

        for env_var in ["GEMINI_API_KEY", "GOOGLE_API_KEY", "API_KEY"] {
            if let Ok(key) = std::env::var(env_var) {
                config.set_api_key(key);
                break;
            }
        }

        if let Ok(url) = std::env::var("GEMINI_BASE_URL") {
            config.set_base_url(url);
        }

        config
    }

    /// Get (or create) the global default config.
    pub fn global() -> &'static MealgenConfig {
        DEFAULT_CONFIG.get_or_init(Self::from_env)
    }

    pub fn set_api_key(&self, key: String) {
        *self.api_key.write().unwrap() = Some(key);
    }

    pub fn get_api_key(&self) -> Option<String> {
        self.api_key.read().unwrap().clone()
    }

    pub fn set_base_url(&self, url: String) {
        *self.base_url.write().unwrap() = Some(url);
    }

    pub fn get_base_url(&self) -> Option<String> {
        self.base_url.read().unwrap().clone()
    }

    /// Check if a credential is configured.
    pub fn has_credentials(&self) -> bool {
        self.get_api_key().is_some()
    }
}
