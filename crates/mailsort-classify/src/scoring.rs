//! Deterministic keyword scoring with a word-count tie-break.

use async_trait::async_trait;
use mailsort_core::config::DEFAULT_TIE_BREAK_WORDS;
use tracing::debug;

use crate::classifier::{Classifier, Message, Verdict};
use crate::lexicon::LexiconSet;
use crate::types::{Category, ScoreResult, Source};

/// Keyword classifier over two lexicons.
///
/// The side with more hits wins. On a tie the text is productive only if it
/// has more than `tie_break_words` whitespace-separated words.
#[derive(Debug, Clone)]
pub struct ScoringClassifier {
    productive: LexiconSet,
    unproductive: LexiconSet,
    tie_break_words: usize,
}

impl Default for ScoringClassifier {
    fn default() -> Self {
        Self::new(
            LexiconSet::productive(),
            LexiconSet::unproductive(),
            DEFAULT_TIE_BREAK_WORDS,
        )
    }
}

impl ScoringClassifier {
    pub fn new(productive: LexiconSet, unproductive: LexiconSet, tie_break_words: usize) -> Self {
        Self {
            productive,
            unproductive,
            tie_break_words,
        }
    }

    /// Default lexicons with a custom tie-break threshold.
    pub fn with_tie_break_words(tie_break_words: usize) -> Self {
        Self {
            tie_break_words,
            ..Self::default()
        }
    }

    /// Score a text. Total over all inputs, including the empty string.
    pub fn score(&self, text: &str) -> ScoreResult {
        let text_lower = text.to_lowercase();
        let productive_hits = self.productive.hits(&text_lower);
        let unproductive_hits = self.unproductive.hits(&text_lower);

        let category = if productive_hits > unproductive_hits {
            Category::Productive
        } else if unproductive_hits > productive_hits {
            Category::Unproductive
        } else {
            self.break_tie(&text_lower)
        };

        debug!(
            productive_hits,
            unproductive_hits,
            productive_terms = ?self.productive.matches(&text_lower).collect::<Vec<_>>(),
            unproductive_terms = ?self.unproductive.matches(&text_lower).collect::<Vec<_>>(),
            category = category.label(),
            "Scored message"
        );

        ScoreResult {
            category,
            productive_hits,
            unproductive_hits,
        }
    }

    fn break_tie(&self, text: &str) -> Category {
        if text.split_whitespace().count() > self.tie_break_words {
            Category::Productive
        } else {
            Category::Unproductive
        }
    }
}

#[async_trait]
impl Classifier for ScoringClassifier {
    async fn classify(&self, message: &Message<'_>) -> Verdict {
        let score = self.score(message.normalized);
        Verdict {
            category: score.category,
            score,
            source: Source::Fallback,
        }
    }
}
