//! Removes extracted keywords from text before it is embedded.
//!
//! Proper nouns and equipment codes otherwise dominate sentence embeddings,
//! so two unrelated ideas about the same plant would look like duplicates.

use regex::Regex;

/// Removes every case-insensitive whole-word occurrence of each keyword.
///
/// A keyword embedded inside a larger token is left untouched. Cleaning an
/// already cleaned text with the same keywords changes nothing.
#[must_use]
pub fn clean_text<S: AsRef<str>>(text: &str, keywords: &[S]) -> String {
    let mut cleaned = text.to_owned();
    for keyword in keywords {
        let keyword = keyword.as_ref();
        if keyword.is_empty() {
            continue;
        }
        match whole_word_regex(keyword) {
            Ok(re) => {
                if re.is_match(&cleaned) {
                    cleaned = re.replace_all(&cleaned, "").into_owned();
                }
            },
            Err(e) => {
                tracing::warn!(keyword, error = %e, "keyword pattern rejected, leaving text as is");
            },
        }
    }
    cleaned
}

/// Batched form of [`clean_text`]; pairs texts with keyword sets by position.
#[must_use]
pub fn clean_texts<S: AsRef<str>>(texts: &[S], keywords: &[Vec<String>]) -> Vec<String> {
    texts
        .iter()
        .zip(keywords.iter())
        .map(|(text, kws)| clean_text(text.as_ref(), kws))
        .collect()
}

fn whole_word_regex(keyword: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(keyword)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_whole_words_case_insensitively() {
        let cleaned = clean_text("Ремонт П-1 и п-1 на ГТС", &["П-1", "ГТС"]);
        assert_eq!(cleaned, "Ремонт  и  на ");
    }

    #[test]
    fn leaves_keyword_inside_larger_token() {
        let cleaned = clean_text("ГТСМ работает", &["ГТС"]);
        assert_eq!(cleaned, "ГТСМ работает");
    }

    #[test]
    fn is_idempotent() {
        let keywords = ["SAP", "ERP", "S/4HANA"];
        let once = clean_text("Перевести SAP ERP на S/4HANA, SAP везде", &keywords);
        let twice = clean_text(&once, &keywords);
        assert_eq!(once, twice);
    }

    #[test]
    fn no_keywords_returns_text_unchanged() {
        let empty: [&str; 0] = [];
        assert_eq!(clean_text("Печь П-1", &empty), "Печь П-1");
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let cleaned = clean_text("Узел S.1 и S11", &["S.1"]);
        assert_eq!(cleaned, "Узел  и S11");
    }

    #[test]
    fn clean_texts_pairs_by_position() {
        let texts = ["Печь П-1", "Узел ГРС-3"];
        let keywords = vec![vec!["П-1".to_owned()], vec!["ГРС-3".to_owned()]];
        assert_eq!(clean_texts(&texts, &keywords), vec!["Печь ", "Узел "]);
    }
}
