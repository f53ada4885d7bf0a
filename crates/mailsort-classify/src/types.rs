//! Category and score types shared by every classifier.

use serde::{Deserialize, Serialize};

/// Triage category. Serialized with the Portuguese labels the web client
/// and the remote model both use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Produtivo")]
    Productive,
    #[serde(rename = "Improdutivo")]
    Unproductive,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Productive => "Produtivo",
            Category::Unproductive => "Improdutivo",
        }
    }

    /// Find a category label in free text, case-insensitively.
    ///
    /// `improdutivo` is checked first because it contains `produtivo`.
    pub fn from_reply(reply: &str) -> Option<Self> {
        let reply = reply.to_lowercase();
        if reply.contains("improdutivo") {
            Some(Category::Unproductive)
        } else if reply.contains("produtivo") {
            Some(Category::Productive)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Which path produced the final category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// The remote language model answered with a valid label.
    Remote,
    /// Keyword scoring decided, either by configuration or after a failed
    /// remote call.
    Fallback,
}

/// Keyword scoring result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub category: Category,
    pub productive_hits: usize,
    pub unproductive_hits: usize,
}
