//! FAQ knowledge base and best-match scoring.

use serde::Serialize;

use super::normalize;

/// One keyword-to-answer entry of the knowledge base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    keywords: Vec<String>,
    response: Option<String>,
}

impl FaqEntry {
    /// Builds an entry. Keywords are normalized, blank and duplicate ones
    /// dropped (first occurrence kept).
    ///
    /// An entry without a response can never be selected.
    pub fn new<I, S>(keywords: I, response: Option<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = normalize(keyword.as_ref());
            if !keyword.is_empty() && !normalized.contains(&keyword) {
                normalized.push(keyword);
            }
        }
        Self {
            keywords: normalized,
            response,
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn response(&self) -> Option<&str> {
        self.response.as_deref()
    }

    /// Number of keywords contained in an already-normalized message.
    fn score(&self, normalized_message: &str) -> u32 {
        if self.response.is_none() {
            return 0;
        }
        self.keywords
            .iter()
            .filter(|k| normalized_message.contains(k.as_str()))
            .count() as u32
    }
}

/// The winning entry for a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqMatch {
    pub response: String,
    pub score: u32,
}

/// Greedy substring-count matcher over an ordered knowledge base.
///
/// Ties keep the earliest entry: a later entry must score strictly higher
/// to replace the current best.
#[derive(Debug, Clone, Default)]
pub struct FaqMatcher {
    entries: Vec<FaqEntry>,
}

impl FaqMatcher {
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the best-scoring answer, or `None` when nothing scores.
    pub fn best_answer(&self, message: &str) -> Option<FaqMatch> {
        let normalized = normalize(message);
        let mut best: Option<(&FaqEntry, u32)> = None;

        for entry in &self.entries {
            let score = entry.score(&normalized);
            let best_score = best.map(|(_, s)| s).unwrap_or(0);
            if score > best_score {
                best = Some((entry, score));
            }
        }

        best.and_then(|(entry, score)| {
            entry.response().map(|response| FaqMatch {
                response: response.to_string(),
                score,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(keywords: &[&str], response: &str) -> FaqEntry {
        FaqEntry::new(keywords.iter().copied(), Some(response.to_string()))
    }

    #[test]
    fn higher_score_wins_regardless_of_order() {
        let matcher = FaqMatcher::new(vec![
            entry(&["preço", "valor"], "R1"),
            entry(&["preço"], "R2"),
        ]);
        let found = matcher.best_answer("qual o preço e valor?").unwrap();
        assert_eq!(found.response, "R1");
        assert_eq!(found.score, 2);

        let reversed = FaqMatcher::new(vec![
            entry(&["preço"], "R2"),
            entry(&["preço", "valor"], "R1"),
        ]);
        assert_eq!(reversed.best_answer("qual o preço e valor?").unwrap().response, "R1");
    }

    #[test]
    fn equal_scores_keep_first_loaded_entry() {
        let matcher = FaqMatcher::new(vec![
            entry(&["entrega"], "first"),
            entry(&["entrega"], "second"),
        ]);
        let found = matcher.best_answer("vocês fazem entrega?").unwrap();
        assert_eq!(found.response, "first");
        assert_eq!(found.score, 1);
    }

    #[test]
    fn no_keyword_means_no_match() {
        let matcher = FaqMatcher::new(vec![entry(&["horário"], "8h às 22h")]);
        assert_eq!(matcher.best_answer("bom dia"), None);
    }

    #[test]
    fn empty_knowledge_base_never_matches() {
        assert_eq!(FaqMatcher::default().best_answer("horário"), None);
    }

    #[test]
    fn matching_is_case_and_whitespace_insensitive() {
        let matcher = FaqMatcher::new(vec![entry(&["Horário De"], "8h às 22h")]);
        let found = matcher.best_answer("  QUAL O HORÁRIO   de funcionamento");
        assert_eq!(found.map(|m| m.response), Some("8h às 22h".to_string()));
    }

    #[test]
    fn entry_without_response_is_never_selected() {
        let matcher = FaqMatcher::new(vec![
            FaqEntry::new(["receita", "remédio"], None),
            entry(&["receita"], "Trazer receita original"),
        ]);
        let found = matcher.best_answer("preciso de receita para remédio?").unwrap();
        assert_eq!(found.response, "Trazer receita original");
        assert_eq!(found.score, 1);
    }

    #[test]
    fn entry_without_keywords_scores_zero() {
        let matcher = FaqMatcher::new(vec![FaqEntry::new(Vec::<String>::new(), Some("x".into()))]);
        assert_eq!(matcher.best_answer("qualquer coisa"), None);
    }

    #[test]
    fn duplicate_and_blank_keywords_are_dropped() {
        let e = FaqEntry::new(["pix", "PIX", " ", "cartão"], Some("ok".into()));
        assert_eq!(e.keywords(), &["pix".to_string(), "cartão".to_string()]);
    }

    #[test]
    fn keywords_match_as_substrings() {
        let matcher = FaqMatcher::new(vec![entry(&["pag"], "Aceitamos pix")]);
        assert!(matcher.best_answer("formas de pagamento").is_some());
    }
}
