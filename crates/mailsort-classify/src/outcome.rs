//! End-to-end classification of one message into a serializable outcome.

use mailsort_core::{Error, Result};
use serde::Serialize;
use tracing::info;

use crate::classifier::{Classifier, Message};
use crate::normalize::normalize;
use crate::respond::respond;
use crate::types::{Category, Source};

/// Maximum number of characters of normalized text echoed back.
pub const PREVIEW_CHARS: usize = 200;

/// Keyword statistics reported with each outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutcomeStats {
    pub productive_keywords: usize,
    pub unproductive_keywords: usize,
    /// Whitespace-separated words in the message as received.
    pub word_count: usize,
}

/// Result of classifying one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationOutcome {
    pub category: Category,
    pub response: String,
    pub processed_text: String,
    pub stats: OutcomeStats,
    pub ai_used: bool,
    #[serde(skip)]
    pub source: Source,
}

/// Reject missing or too-short messages before any classification work.
pub fn validate_message(raw: &str, min_chars: usize) -> Result<()> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::Input("Por favor, insira um texto de email".into()));
    }
    if trimmed.chars().count() < min_chars {
        return Err(Error::Input(format!(
            "O texto do email deve ter pelo menos {} caracteres",
            min_chars
        )));
    }
    Ok(())
}

/// Validate, normalize, classify and build the reply for one message.
pub async fn analyze(
    classifier: &dyn Classifier,
    raw: &str,
    min_chars: usize,
) -> Result<ClassificationOutcome> {
    validate_message(raw, min_chars)?;

    let normalized = normalize(raw);
    let verdict = classifier.classify(&Message::new(raw, &normalized)).await;
    let response = respond(verdict.category, raw, &verdict.score);

    let outcome = ClassificationOutcome {
        category: verdict.category,
        response: response.to_string(),
        processed_text: preview(&normalized, PREVIEW_CHARS),
        stats: OutcomeStats {
            productive_keywords: verdict.score.productive_hits,
            unproductive_keywords: verdict.score.unproductive_hits,
            word_count: raw.split_whitespace().count(),
        },
        ai_used: verdict.source == Source::Remote,
        source: verdict.source,
    };

    info!(
        category = outcome.category.label(),
        source = ?outcome.source,
        words = outcome.stats.word_count,
        "Classified email"
    );

    Ok(outcome)
}

/// First `max_chars` characters of `text`, with `...` appended when cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
