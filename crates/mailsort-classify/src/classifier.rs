//! Classifier capability shared by the scoring and remote strategies.

use async_trait::async_trait;

use crate::types::{Category, ScoreResult, Source};

/// A message ready for classification.
#[derive(Debug, Clone, Copy)]
pub struct Message<'a> {
    /// Text as received, before normalization.
    pub raw: &'a str,
    /// Output of [`crate::normalize`] for `raw`.
    pub normalized: &'a str,
}

impl<'a> Message<'a> {
    pub fn new(raw: &'a str, normalized: &'a str) -> Self {
        Self { raw, normalized }
    }
}

/// Result of one classification.
///
/// `score` is always the keyword score of the message, so callers get hit
/// counts even when the remote model picked the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub category: Category,
    pub score: ScoreResult,
    pub source: Source,
}

/// Trait for classification strategies.
///
/// Implementations never fail: anything that can go wrong is recovered by
/// falling back to keyword scoring.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, message: &Message<'_>) -> Verdict;

    /// Whether a remote model is consulted.
    fn is_remote(&self) -> bool {
        false
    }

    /// Name of the remote provider, if any.
    fn provider(&self) -> Option<String> {
        None
    }
}
