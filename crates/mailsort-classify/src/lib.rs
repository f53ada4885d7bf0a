//! MailSort Classify — the email triage decision engine.
//!
//! Text is normalized, scored against two keyword lexicons and resolved to
//! `Produtivo` or `Improdutivo`. The `Classifier` trait lets a remote
//! language-model decorator sit in front of the scoring classifier; the
//! pipeline in `outcome` turns a verdict into the serializable result.

pub mod classifier;
pub mod lexicon;
pub mod normalize;
pub mod outcome;
pub mod respond;
pub mod scoring;
pub mod types;

pub use classifier::{Classifier, Message, Verdict};
pub use lexicon::LexiconSet;
pub use normalize::normalize;
pub use outcome::{analyze, ClassificationOutcome, OutcomeStats};
pub use respond::respond;
pub use scoring::ScoringClassifier;
pub use types::{Category, ScoreResult, Source};
