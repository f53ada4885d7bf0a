//! File text extraction for uploaded emails.

use std::path::Path;

use mailsort_core::{Error, Result};
use tracing::{info, warn};

pub const NO_FILE_SELECTED: &str = "Nenhum arquivo selecionado";
pub const UNSUPPORTED_FORMAT: &str = "Formato de arquivo não suportado. Use .txt ou .pdf";

/// Supported upload types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    PlainText,
    Pdf,
    Unknown,
}

impl FileType {
    /// Detect file type from extension.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "txt" => Self::PlainText,
            "pdf" => Self::Pdf,
            _ => Self::Unknown,
        }
    }

    pub fn from_filename(filename: &str) -> Self {
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        Self::from_extension(ext)
    }
}

/// Extract text from an uploaded file's bytes.
///
/// Failures to read a supported file are returned as [`Error::Extraction`]
/// rather than passed on as message text.
pub fn extract_text(filename: &str, data: &[u8]) -> Result<String> {
    if filename.trim().is_empty() {
        return Err(Error::Input(NO_FILE_SELECTED.into()));
    }

    match FileType::from_filename(filename) {
        FileType::PlainText => String::from_utf8(data.to_vec())
            .map_err(|e| Error::Extraction(format!("O arquivo {} não está em UTF-8: {}", filename, e))),
        FileType::Pdf => extract_pdf_text(filename, data),
        FileType::Unknown => Err(Error::UnsupportedFormat(UNSUPPORTED_FORMAT.into())),
    }
}

fn extract_pdf_text(filename: &str, data: &[u8]) -> Result<String> {
    match pdf_extract::extract_text_from_mem(data) {
        Ok(text) => {
            let cleaned = clean_extracted_text(&text);
            info!("Extracted {} characters from {}", cleaned.len(), filename);
            Ok(cleaned)
        }
        Err(e) => {
            warn!("PDF extraction failed for {}: {}", filename, e);
            Err(Error::Extraction(format!(
                "Erro ao extrair texto do PDF: {}",
                e
            )))
        }
    }
}

/// Trim lines and drop blank ones.
fn clean_extracted_text(text: &str) -> String {
    text.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_type() {
        assert_eq!(FileType::from_filename("email.txt"), FileType::PlainText);
        assert_eq!(FileType::from_filename("EMAIL.PDF"), FileType::Pdf);
        assert_eq!(FileType::from_filename("email.docx"), FileType::Unknown);
        assert_eq!(FileType::from_filename("no_extension"), FileType::Unknown);
    }

    #[test]
    fn test_txt_extraction() {
        let content = "Olá equipe,\nPreciso de suporte.".as_bytes();
        assert_eq!(
            extract_text("email.txt", content).unwrap(),
            "Olá equipe,\nPreciso de suporte."
        );
    }

    #[test]
    fn test_empty_txt_is_empty_string() {
        assert_eq!(extract_text("empty.txt", b"").unwrap(), "");
    }

    #[test]
    fn test_invalid_utf8() {
        let err = extract_text("latin1.txt", &[0x4f, 0x6c, 0xe1]).unwrap_err();
        assert!(matches!(err, Error::Extraction(_)));
    }

    #[test]
    fn test_unsupported_extension() {
        let err = extract_text("email.eml", b"From: a@b.c").unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn test_missing_filename() {
        let err = extract_text("", b"data").unwrap_err();
        assert!(matches!(err, Error::Input(ref m) if m == NO_FILE_SELECTED));
    }

    #[test]
    fn test_corrupt_pdf_is_extraction_error() {
        let err = extract_text("broken.pdf", b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, Error::Extraction(_)));
    }

    #[test]
    fn test_clean_extracted_text() {
        let dirty = "  Linha 1  \n\n  Linha 2  \n   \n  Linha 3  ";
        assert_eq!(clean_extracted_text(dirty), "Linha 1\nLinha 2\nLinha 3");
    }
}
