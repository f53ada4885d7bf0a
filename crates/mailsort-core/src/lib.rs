//! MailSort Core — shared error type and process configuration.

pub mod config;
pub mod error;

pub use config::MailSortConfig;
pub use error::{Error, Result};
