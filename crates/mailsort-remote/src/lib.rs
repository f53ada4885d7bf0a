//! Remote classification through an external chat-completion API.
//!
//! The remote model only picks the category. Keyword scoring still runs for
//! statistics and takes over whenever the remote call fails. Without
//! credentials no remote classifier is built at all.

pub mod classifier;
pub mod config;
pub mod providers;

pub use classifier::RemoteClassifier;
pub use config::{RemoteConfig, RemoteStatus, ResolvedProvider};
pub use providers::RemoteProvider;

use std::sync::Arc;

use mailsort_classify::{Classifier, ScoringClassifier};

/// Create the best available classifier for the given configuration.
///
/// Uses the remote model when a provider resolves, keyword scoring otherwise.
pub fn create_classifier(config: &RemoteConfig, scorer: ScoringClassifier) -> Arc<dyn Classifier> {
    match config.resolve_provider() {
        Some(target) => match RemoteClassifier::new(target, config, scorer.clone()) {
            Ok(remote) => {
                tracing::info!(
                    "Using remote classifier ({} / {})",
                    remote.target().provider,
                    remote.target().model
                );
                return Arc::new(remote);
            }
            Err(e) => {
                tracing::warn!("Remote classifier unavailable: {}. Using keyword scoring.", e);
            }
        },
        None => {
            tracing::info!("No remote provider configured. Using keyword scoring.");
        }
    }

    Arc::new(scorer)
}
