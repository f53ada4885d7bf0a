//! Single-shot chat completions against external LLM providers.
//!
//! OpenAI and Groq share the chat-completions format. Anthropic uses the
//! Messages API.

use mailsort_core::{Error, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::config::ResolvedProvider;

/// Remote provider identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteProvider {
    OpenAI,
    Groq,
    Anthropic,
}

impl RemoteProvider {
    pub fn default_base_url(&self) -> &'static str {
        match self {
            RemoteProvider::OpenAI => "https://api.openai.com/v1",
            RemoteProvider::Groq => "https://api.groq.com/openai/v1",
            RemoteProvider::Anthropic => "https://api.anthropic.com/v1",
        }
    }

    /// Completion endpoint, optionally under a replacement base URL.
    pub fn endpoint(&self, base_url: Option<&str>) -> String {
        let base = base_url.unwrap_or(self.default_base_url()).trim_end_matches('/');
        match self {
            RemoteProvider::OpenAI | RemoteProvider::Groq => format!("{}/chat/completions", base),
            RemoteProvider::Anthropic => format!("{}/messages", base),
        }
    }
}

impl std::fmt::Display for RemoteProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoteProvider::OpenAI => write!(f, "openai"),
            RemoteProvider::Groq => write!(f, "groq"),
            RemoteProvider::Anthropic => write!(f, "anthropic"),
        }
    }
}

impl std::str::FromStr for RemoteProvider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(RemoteProvider::OpenAI),
            "groq" => Ok(RemoteProvider::Groq),
            "anthropic" => Ok(RemoteProvider::Anthropic),
            other => Err(Error::Config(format!("Unknown provider: {}", other))),
        }
    }
}

/// Sampling parameters for a completion.
#[derive(Debug, Clone, Copy)]
pub struct CompletionParams {
    pub temperature: f64,
    pub max_tokens: usize,
}

/// Send one system + user exchange and return the reply text.
pub async fn complete(
    client: &Client,
    target: &ResolvedProvider,
    system: &str,
    user: &str,
    params: CompletionParams,
) -> Result<String> {
    debug!("Completing with {} model {}", target.provider, target.model);

    match target.provider {
        RemoteProvider::OpenAI | RemoteProvider::Groq => {
            complete_openai_compat(client, target, system, user, params).await
        }
        RemoteProvider::Anthropic => complete_anthropic(client, target, system, user, params).await,
    }
}

async fn complete_openai_compat(
    client: &Client,
    target: &ResolvedProvider,
    system: &str,
    user: &str,
    params: CompletionParams,
) -> Result<String> {
    let body = json!({
        "model": target.model,
        "messages": [
            {"role": "system", "content": system},
            {"role": "user", "content": user},
        ],
        "temperature": params.temperature,
        "max_tokens": params.max_tokens,
    });

    let response = client
        .post(&target.endpoint)
        .header("Authorization", format!("Bearer {}", target.api_key))
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .await
        .map_err(|e| Error::Remote(format!("Request failed: {}", e)))?;

    let parsed = read_json(response).await?;
    parsed["choices"][0]["message"]["content"]
        .as_str()
        .map(|s| s.trim().to_string())
        .ok_or_else(|| Error::Remote("Reply has no message content".into()))
}

async fn complete_anthropic(
    client: &Client,
    target: &ResolvedProvider,
    system: &str,
    user: &str,
    params: CompletionParams,
) -> Result<String> {
    let body = json!({
        "model": target.model,
        "system": system,
        "messages": [{"role": "user", "content": user}],
        "temperature": params.temperature,
        "max_tokens": params.max_tokens,
    });

    let response = client
        .post(&target.endpoint)
        .header("x-api-key", &target.api_key)
        .header("anthropic-version", "2023-06-01")
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .await
        .map_err(|e| Error::Remote(format!("Request failed: {}", e)))?;

    let parsed = read_json(response).await?;
    parsed["content"]
        .as_array()
        .and_then(|blocks| {
            blocks
                .iter()
                .find(|b| b["type"].as_str() == Some("text"))
                .and_then(|b| b["text"].as_str())
        })
        .map(|s| s.trim().to_string())
        .ok_or_else(|| Error::Remote("Reply has no text block".into()))
}

async fn read_json(response: reqwest::Response) -> Result<serde_json::Value> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Remote(format!("API error {}: {}", status, body)));
    }

    response
        .json::<serde_json::Value>()
        .await
        .map_err(|e| Error::Remote(format!("Invalid reply body: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        assert_eq!(
            RemoteProvider::Groq.endpoint(None),
            "https://api.groq.com/openai/v1/chat/completions"
        );
        assert_eq!(
            RemoteProvider::Anthropic.endpoint(None),
            "https://api.anthropic.com/v1/messages"
        );
    }

    #[test]
    fn test_parse_provider() {
        assert_eq!("OpenAI".parse::<RemoteProvider>().unwrap(), RemoteProvider::OpenAI);
        assert!("ollama".parse::<RemoteProvider>().is_err());
    }
}
