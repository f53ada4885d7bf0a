//! Process configuration read once at startup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_TIE_BREAK_WORDS: usize = 20;
pub const DEFAULT_MAX_UPLOAD_MB: usize = 16;
pub const DEFAULT_REMOTE_CONFIG_FILE: &str = "remote-config.json";

/// Top-level MailSort configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailSortConfig {
    /// HTTP server port.
    pub port: u16,
    /// Tied keyword counts classify as productive when the text has more
    /// words than this.
    pub tie_break_words: usize,
    /// Request body limit for uploads, in bytes.
    pub max_upload_bytes: usize,
    /// Messages with fewer non-blank characters are rejected.
    pub min_message_chars: usize,
    /// Optional JSON file with remote classifier settings.
    pub remote_config_file: PathBuf,
    /// Directory served for paths no route matches, such as a browser form.
    pub static_dir: Option<PathBuf>,
}

impl Default for MailSortConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            tie_break_words: DEFAULT_TIE_BREAK_WORDS,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_MB * 1024 * 1024,
            min_message_chars: 1,
            remote_config_file: PathBuf::from(DEFAULT_REMOTE_CONFIG_FILE),
            static_dir: None,
        }
    }
}

impl MailSortConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    /// Unparseable values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        let tie_break_words = lookup("MAILSORT_TIE_WORDS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.tie_break_words);

        let max_upload_bytes = lookup("MAILSORT_MAX_UPLOAD_MB")
            .and_then(|v| v.parse::<usize>().ok())
            .and_then(|mb| mb.checked_mul(1024 * 1024))
            .unwrap_or(defaults.max_upload_bytes);

        let min_message_chars = lookup("MAILSORT_MIN_CHARS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.min_message_chars);

        let remote_config_file = lookup("MAILSORT_REMOTE_CONFIG")
            .map(PathBuf::from)
            .unwrap_or(defaults.remote_config_file);

        let static_dir = lookup("MAILSORT_STATIC_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Self {
            port,
            tie_break_words,
            max_upload_bytes,
            min_message_chars,
            remote_config_file,
            static_dir,
        }
    }
}
