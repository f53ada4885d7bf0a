//! MailSort Extract — text extraction from uploaded email files.

pub mod file;

pub use file::{extract_text, FileType};
