//! Remote classifier configuration and provider selection.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::providers::RemoteProvider;

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-5-haiku-20241022";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_INPUT_CHARS: usize = 1000;
pub const DEFAULT_MAX_TOKENS: usize = 10;
pub const DEFAULT_TEMPERATURE: f64 = 0.1;

/// Stored remote configuration (optional JSON file plus env fallbacks).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// `auto`, `openai`, `groq`, `anthropic` or `off`.
    #[serde(default = "default_preferred")]
    pub preferred_provider: String,
    #[serde(default)]
    pub openai_api_key: Option<String>,
    #[serde(default)]
    pub groq_api_key: Option<String>,
    #[serde(default)]
    pub anthropic_api_key: Option<String>,
    #[serde(default = "default_openai_model")]
    pub openai_model: String,
    #[serde(default = "default_groq_model")]
    pub groq_model: String,
    #[serde(default = "default_anthropic_model")]
    pub anthropic_model: String,
    /// Replaces the provider's API base URL (proxies, gateways, tests).
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

fn default_preferred() -> String {
    "auto".into()
}
fn default_openai_model() -> String {
    DEFAULT_OPENAI_MODEL.into()
}
fn default_groq_model() -> String {
    DEFAULT_GROQ_MODEL.into()
}
fn default_anthropic_model() -> String {
    DEFAULT_ANTHROPIC_MODEL.into()
}
fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
fn default_max_input_chars() -> usize {
    DEFAULT_MAX_INPUT_CHARS
}
fn default_max_tokens() -> usize {
    DEFAULT_MAX_TOKENS
}
fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            preferred_provider: default_preferred(),
            openai_api_key: None,
            groq_api_key: None,
            anthropic_api_key: None,
            openai_model: default_openai_model(),
            groq_model: default_groq_model(),
            anthropic_model: default_anthropic_model(),
            base_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// A provider that can actually be called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProvider {
    pub provider: RemoteProvider,
    pub model: String,
    pub api_key: String,
    /// Full URL of the completion endpoint.
    pub endpoint: String,
}

/// Public view of the configuration (no API keys exposed).
#[derive(Debug, Clone, Serialize)]
pub struct RemoteStatus {
    pub preferred_provider: String,
    pub openai_configured: bool,
    pub groq_configured: bool,
    pub anthropic_configured: bool,
    pub active_provider: Option<String>,
    pub active_model: Option<String>,
    pub timeout_secs: u64,
}

impl RemoteConfig {
    /// Load config from file, falling back to env vars and defaults.
    pub fn load(config_path: &Path) -> Self {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// Load config from file, taking fallbacks from `lookup` instead of the
    /// process environment.
    pub fn load_with(config_path: &Path, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config: RemoteConfig = match std::fs::read_to_string(config_path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(c) => {
                    info!("Loaded remote config from {}", config_path.display());
                    c
                }
                Err(e) => {
                    warn!("Ignoring invalid remote config {}: {}", config_path.display(), e);
                    RemoteConfig::default()
                }
            },
            Err(_) => RemoteConfig::default(),
        };

        // Env vars as fallback for API keys
        if config.openai_api_key.is_none() {
            config.openai_api_key = non_blank(lookup("OPENAI_API_KEY"));
        }
        if config.groq_api_key.is_none() {
            config.groq_api_key = non_blank(lookup("GROQ_API_KEY"));
        }
        if config.anthropic_api_key.is_none() {
            config.anthropic_api_key = non_blank(lookup("ANTHROPIC_API_KEY"));
        }

        // Env overrides for the rest
        if let Some(p) = non_blank(lookup("MAILSORT_REMOTE_PROVIDER")) {
            config.preferred_provider = p.to_lowercase();
        }
        if let Some(url) = non_blank(lookup("MAILSORT_REMOTE_BASE_URL")) {
            config.base_url = Some(url);
        }
        if let Some(secs) = lookup("MAILSORT_REMOTE_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
            config.timeout_secs = secs;
        }

        config
    }

    /// Resolve which provider, model and key to use.
    pub fn resolve_provider(&self) -> Option<ResolvedProvider> {
        let pick = |provider: RemoteProvider| -> Option<ResolvedProvider> {
            let (key, model) = match provider {
                RemoteProvider::OpenAI => (&self.openai_api_key, &self.openai_model),
                RemoteProvider::Groq => (&self.groq_api_key, &self.groq_model),
                RemoteProvider::Anthropic => (&self.anthropic_api_key, &self.anthropic_model),
            };
            key.as_ref().map(|k| ResolvedProvider {
                provider,
                model: model.clone(),
                api_key: k.clone(),
                endpoint: provider.endpoint(self.base_url.as_deref()),
            })
        };

        // Explicit preference
        match self.preferred_provider.to_lowercase().as_str() {
            "auto" => {}
            "off" | "none" => return None,
            other => return other.parse().ok().and_then(pick),
        }

        // Auto mode: Anthropic > Groq > OpenAI
        pick(RemoteProvider::Anthropic)
            .or_else(|| pick(RemoteProvider::Groq))
            .or_else(|| pick(RemoteProvider::OpenAI))
    }

    /// Build the public status (no API keys exposed).
    pub fn to_status(&self) -> RemoteStatus {
        let resolved = self.resolve_provider();
        RemoteStatus {
            preferred_provider: self.preferred_provider.clone(),
            openai_configured: self.openai_api_key.is_some(),
            groq_configured: self.groq_api_key.is_some(),
            anthropic_configured: self.anthropic_api_key.is_some(),
            active_provider: resolved.as_ref().map(|r| r.provider.to_string()),
            active_model: resolved.map(|r| r.model),
            timeout_secs: self.timeout_secs,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
