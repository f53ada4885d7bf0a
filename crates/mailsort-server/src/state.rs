//! Shared application state.

use std::sync::Arc;

use mailsort_classify::{Classifier, ScoringClassifier};
use mailsort_core::MailSortConfig;
use mailsort_remote::{create_classifier, RemoteConfig};

/// Shared application state accessible from all route handlers.
///
/// Built once at startup and never mutated; handlers share it through `Arc`.
pub struct AppState {
    pub config: MailSortConfig,
    pub remote: RemoteConfig,
    pub classifier: Arc<dyn Classifier>,
}

impl AppState {
    pub fn new(config: MailSortConfig, remote: RemoteConfig) -> Self {
        let scorer = ScoringClassifier::with_tie_break_words(config.tie_break_words);
        let classifier = create_classifier(&remote, scorer);
        Self::with_classifier(config, remote, classifier)
    }

    pub fn with_classifier(
        config: MailSortConfig,
        remote: RemoteConfig,
        classifier: Arc<dyn Classifier>,
    ) -> Self {
        Self {
            config,
            remote,
            classifier,
        }
    }

    /// Whether classification consults a remote model.
    pub fn remote_active(&self) -> bool {
        self.classifier.is_remote()
    }
}
