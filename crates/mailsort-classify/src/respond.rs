//! Canned reply selection.

use crate::types::{Category, ScoreResult};

/// Upper bounds (exclusive) of the word-count buckets. Anything at or past
/// the last bound uses the last template.
const LENGTH_BUCKETS: [usize; 3] = [50, 100, 200];

const PRODUCTIVE_REPLIES: [&str; 4] = [
    "Agradecemos seu contato. Nossa equipe analisará sua solicitação e retornará em breve.",
    "Recebemos sua solicitação. Estamos trabalhando nela e atualizaremos você em até 24 horas.",
    "Obrigado por reportar. Nossa equipe de suporte já foi notificada e entrará em contato em breve.",
    "Confirmamos o recebimento de sua requisição. Você receberá uma atualização em breve.",
];

const UNPRODUCTIVE_REPLIES: [&str; 4] = [
    "Agradecemos sua mensagem. Estamos sempre à disposição para ajudá-lo quando necessário.",
    "Obrigado pelo contato. Ficamos felizes com sua mensagem e estamos disponíveis para qualquer necessidade.",
    "Agradecemos sua mensagem. Caso precise de assistência, não hesite em nos contatar.",
    "Obrigado por compartilhar. Estamos aqui para ajudar quando precisar.",
];

pub const URGENT_REPLY: &str =
    "Recebemos sua solicitação urgente. Ela foi priorizada e um especialista entrará em contato o mais rápido possível.";

pub const ESCALATION_REPLY: &str =
    "Identificamos várias questões em sua mensagem. Encaminhamos o caso para análise detalhada e retornaremos com um plano de ação.";

pub const SEASONAL_REPLY: &str =
    "Agradecemos suas felicitações! Desejamos o mesmo a você e ficamos à disposição sempre que precisar.";

const URGENT_TERMS: &[&str] = &[
    "urgente",
    "urgência",
    "urgencia",
    "crítico",
    "critico",
    "imediato",
    "emergência",
    "emergencia",
];

const SEASONAL_TERMS: &[&str] = &["natal", "ano novo", "aniversário", "aniversario"];

/// Productive messages with at least this many keyword hits get the
/// escalation reply.
pub const ESCALATION_HITS: usize = 5;

/// Pick the reply for a classified message.
///
/// Urgent and seasonal terms, then hit intensity, are checked before the
/// word-count table.
pub fn respond(category: Category, message_text: &str, stats: &ScoreResult) -> &'static str {
    let text_lower = message_text.to_lowercase();

    match category {
        Category::Productive => {
            if contains_any(&text_lower, URGENT_TERMS) {
                return URGENT_REPLY;
            }
            if stats.productive_hits >= ESCALATION_HITS {
                return ESCALATION_REPLY;
            }
        }
        Category::Unproductive => {
            if contains_any(&text_lower, SEASONAL_TERMS) {
                return SEASONAL_REPLY;
            }
        }
    }

    let templates = match category {
        Category::Productive => &PRODUCTIVE_REPLIES,
        Category::Unproductive => &UNPRODUCTIVE_REPLIES,
    };
    templates[length_bucket(message_text.split_whitespace().count())]
}

/// Index of the length bucket for a word count, always in `0..=3`.
pub fn length_bucket(word_count: usize) -> usize {
    LENGTH_BUCKETS
        .iter()
        .position(|&bound| word_count < bound)
        .unwrap_or(LENGTH_BUCKETS.len())
}

fn contains_any(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| text.contains(t))
}
