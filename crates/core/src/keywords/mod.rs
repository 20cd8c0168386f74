//! Keyword extraction from free-text idea descriptions.
//!
//! Keywords are the tokens that identify *what* an idea is about rather than
//! what it says: full organization names, acronyms and coded identifiers
//! such as equipment tags (`П-1`, `ДКС-2`). Ordinary capitalized prose,
//! numbers, dates, money amounts, tariffs, ranges and unit-suffixed
//! measurements are dropped.

use regex::Regex;
use std::sync::LazyLock;

use crate::dedup_preserving_order;

/// Legal-entity prefix followed by a quoted name, e.g. `ПАО "Газпром"`, `АО «Транснефть»`.
static ORG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:ООО|АО|ПАО|ЗАО|ОАО|ФГБУ|МУП|ГУП|ЧУП|ИП|ГТС ПАО|АВО|СТО)\s*["«][^"»]+?["»]"#)
        .unwrap()
});

static ORG_QUOTES_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"["«»]"#).unwrap());

/// An uppercase abbreviation split from the word that follows it.
static SPLIT_ABBREVIATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\b[А-ЯA-ZЁё]{2,})\s+([А-Яа-яЁё])").unwrap());

/// Candidate token: starts with an uppercase letter or digit, 2+ chars,
/// may embed `- / . " ( )`.
static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\b[А-ЯA-ZЁё0-9][А-Яа-яA-Za-zЁё0-9\-/."()]{1,}\b"#).unwrap());

static DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d{1,2}[./-]\d{1,2}[./-]\d{2,4}|\d{4}[./-]\d{1,2}[./-]\d{1,2})$").unwrap()
});

static RANGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,4}[-/]\d{1,4}$").unwrap());

static TARIFF_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\d{1,9}\s?(?:руб(?:лей|\.)?|р|₽)[/\\][а-яa-z0-9]+$").unwrap()
});

static MONEY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\d{1,9}(?:[ \x{00A0}]\d{3})*\s*(?:руб(?:лей|\.)?|р|₽)\b$").unwrap()
});

static NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:[.,]\d+)?$").unwrap());

/// Punctuation that marks a token as a coded identifier.
const IDENTIFIER_MARKS: [char; 6] = ['-', '/', '(', ')', '.', '"'];

/// Extracts the ordered, deduplicated keyword set of `text`.
///
/// Surviving word tokens come first in text order, followed by full
/// organization mentions. Empty text yields an empty set.
#[must_use]
pub fn extract_keywords(text: &str) -> Vec<String> {
    let organizations = extract_organizations(text);
    let tokens = word_tokens(text)
        .filter(|token| is_keyword_token(token, &organizations))
        .map(str::to_owned)
        .collect::<Vec<_>>();
    dedup_preserving_order(tokens.into_iter().chain(organizations))
}

/// Batched form of [`extract_keywords`], one result per input in the same order.
#[must_use]
pub fn extract_keywords_many<S: AsRef<str>>(texts: &[S]) -> Vec<Vec<String>> {
    texts.iter().map(|t| extract_keywords(t.as_ref())).collect()
}

/// Full organization mentions with quotes stripped and split abbreviations merged.
#[must_use]
pub fn extract_organizations(text: &str) -> Vec<String> {
    ORG_REGEX
        .find_iter(text)
        .map(|m| {
            let unquoted = ORG_QUOTES_REGEX.replace_all(m.as_str(), "");
            SPLIT_ABBREVIATION_REGEX.replace_all(&unquoted, "${1}${2}").into_owned()
        })
        .collect()
}

/// Every candidate word token of `text`, before filtering.
pub fn word_tokens(text: &str) -> impl Iterator<Item = &str> {
    WORD_REGEX.find_iter(text).map(|m| m.as_str())
}

fn is_keyword_token(token: &str, organizations: &[String]) -> bool {
    if organizations.iter().any(|org| org.contains(token)) {
        return false;
    }
    if is_noise_token(token) {
        return false;
    }
    let has_digit = token.chars().any(|c| c.is_ascii_digit());
    if has_digit && token.chars().last().is_some_and(char::is_lowercase) {
        return false;
    }
    if token.chars().count() >= 3 && is_uppercase_word(token) {
        return true;
    }
    has_digit || token.contains(IDENTIFIER_MARKS)
}

/// Dates, ranges, tariffs, money amounts and bare numbers.
fn is_noise_token(token: &str) -> bool {
    DATE_REGEX.is_match(token)
        || RANGE_REGEX.is_match(token)
        || TARIFF_REGEX.is_match(token)
        || MONEY_REGEX.is_match(token)
        || NUMBER_REGEX.is_match(token)
}

/// At least one cased character and no lowercase ones (`П-1`, `ГТС`).
fn is_uppercase_word(token: &str) -> bool {
    let mut has_cased = false;
    for c in token.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}
