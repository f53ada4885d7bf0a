//! Remote classifier decorator with keyword-scoring fallback.

use std::time::Duration;

use async_trait::async_trait;
use mailsort_classify::{Category, Classifier, Message, ScoringClassifier, Source, Verdict};
use mailsort_core::{Error, Result};
use reqwest::Client;
use tracing::{debug, warn};

use crate::config::{RemoteConfig, ResolvedProvider};
use crate::providers::{self, CompletionParams};

/// Instruction restricting the model to one of the two labels.
pub const SYSTEM_PROMPT: &str = "Você classifica emails recebidos por uma empresa. \
Responda com exatamente uma palavra: 'Produtivo' se o email exige uma ação ou resposta \
(suporte técnico, solicitações, atualização de casos, dúvidas sobre o sistema) ou \
'Improdutivo' se for uma mensagem social ou de cortesia (felicitações, agradecimentos). \
Não escreva mais nada.";

/// Asks a remote model for the category and falls back to keyword scoring
/// on any failure.
pub struct RemoteClassifier {
    client: Client,
    target: ResolvedProvider,
    params: CompletionParams,
    timeout: Duration,
    max_input_chars: usize,
    fallback: ScoringClassifier,
}

impl RemoteClassifier {
    pub fn new(
        target: ResolvedProvider,
        config: &RemoteConfig,
        fallback: ScoringClassifier,
    ) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_secs.max(1));
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            target,
            params: CompletionParams {
                temperature: config.temperature,
                max_tokens: config.max_tokens,
            },
            timeout,
            max_input_chars: config.max_input_chars,
            fallback,
        })
    }

    pub fn target(&self) -> &ResolvedProvider {
        &self.target
    }

    /// One remote attempt. Every failure maps to [`Error::Remote`].
    pub async fn classify_remote(&self, raw: &str) -> Result<Category> {
        let excerpt: String = raw.chars().take(self.max_input_chars).collect();

        let call = providers::complete(&self.client, &self.target, SYSTEM_PROMPT, &excerpt, self.params);
        let reply = tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| Error::Remote(format!("timed out after {:?}", self.timeout)))??;

        debug!("Remote reply: {:?}", reply);

        Category::from_reply(&reply)
            .ok_or_else(|| Error::Remote(format!("unexpected reply: {:?}", reply)))
    }
}

#[async_trait]
impl Classifier for RemoteClassifier {
    async fn classify(&self, message: &Message<'_>) -> Verdict {
        let score = self.fallback.score(message.normalized);

        match self.classify_remote(message.raw).await {
            Ok(category) => Verdict {
                category,
                score,
                source: Source::Remote,
            },
            Err(e) => {
                warn!("{}. Falling back to keyword scoring.", e);
                Verdict {
                    category: score.category,
                    score,
                    source: Source::Fallback,
                }
            }
        }
    }

    fn is_remote(&self) -> bool {
        true
    }

    fn provider(&self) -> Option<String> {
        Some(self.target.provider.to_string())
    }
}
