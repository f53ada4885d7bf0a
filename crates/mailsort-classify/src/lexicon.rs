//! Marker-term lexicons for productive and unproductive mail.

use serde::{Deserialize, Serialize};

/// Terms that signal a request needing action.
pub const PRODUCTIVE_TERMS: &[&str] = &[
    "problema",
    "ajuda",
    "suporte",
    "erro",
    "solicitação",
    "atualização",
    "status",
    "urgente",
    "importante",
    "caso",
    "sistema",
    "tecnico",
    "requisição",
    "dúvida",
    "questão",
    "assistencia",
    "resolver",
    "conserto",
    "manutenção",
];

/// Terms typical of courtesy and social messages.
pub const UNPRODUCTIVE_TERMS: &[&str] = &[
    "obrigado",
    "agradeço",
    "parabéns",
    "feliz",
    "natal",
    "ano novo",
    "cumprimentos",
    "saudações",
    "atenciosamente",
    "felicitações",
    "agradecimentos",
    "cumprimento",
    "saudação",
];

/// A set of lowercase marker terms.
///
/// Matching is a substring presence test: each term contributes at most one
/// hit per text, however often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconSet {
    terms: Vec<String>,
}

impl LexiconSet {
    /// Build a lexicon, lowercasing terms and dropping blanks and duplicates.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<String> = Vec::new();
        for term in terms {
            let term = term.as_ref().trim().to_lowercase();
            if !term.is_empty() && !unique.contains(&term) {
                unique.push(term);
            }
        }
        Self { terms: unique }
    }

    pub fn productive() -> Self {
        Self::new(PRODUCTIVE_TERMS)
    }

    pub fn unproductive() -> Self {
        Self::new(UNPRODUCTIVE_TERMS)
    }

    /// Count distinct terms present in already-lowercased text.
    pub fn hits(&self, text_lower: &str) -> usize {
        self.matches(text_lower).count()
    }

    /// Terms present in already-lowercased text, in lexicon order.
    pub fn matches<'a>(&'a self, text_lower: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.terms
            .iter()
            .map(String::as_str)
            .filter(move |term| text_lower.contains(term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_not_frequency() {
        let lexicon = LexiconSet::productive();
        assert_eq!(lexicon.hits("erro erro erro"), 1);
    }

    #[test]
    fn test_substring_semantics() {
        let lexicon = LexiconSet::unproductive();
        // "cumprimentos" contains "cumprimento": both count.
        assert_eq!(lexicon.hits("meus cumprimentos"), 2);
        // Multi-word term.
        assert_eq!(lexicon.hits("feliz ano novo"), 2);
    }

    #[test]
    fn test_new_dedupes_and_lowercases() {
        let lexicon = LexiconSet::new(["Suporte", "suporte", "  ", "ERRO"]);
        assert_eq!(lexicon.terms, vec!["suporte".to_string(), "erro".to_string()]);
    }

    #[test]
    fn test_default_lexicon_has_no_duplicates() {
        let lexicon = LexiconSet::productive();
        assert_eq!(lexicon.terms.len(), PRODUCTIVE_TERMS.len());
    }

    #[test]
    fn test_accented_terms_miss_normalized_text() {
        let lexicon = LexiconSet::productive();
        let normalized = crate::normalize("Tenho uma dúvida");
        assert_eq!(lexicon.hits(&normalized), 0);
    }

    #[test]
    fn test_matches_lists_present_terms() {
        let lexicon = LexiconSet::productive();
        let found: Vec<&str> = lexicon.matches("erro no sistema").collect();
        assert_eq!(found, vec!["erro", "sistema"]);
    }
}
