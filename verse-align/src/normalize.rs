//! Token canonicalization shared by dictionary lookup and cross-language matching.
//!
//! A token is normalized by:
//! - decomposing it (NFD) so accented letters split into base letter + combining mark
//! - dropping combining diacritical marks in U+0300..=U+036F
//! - lowercasing
//! - deleting a fixed set of ASCII and Spanish punctuation
//!
//! The raw token (punctuation included) is what the reader displays; the
//! normalized form is only ever used for lookups.

use unicode_normalization::UnicodeNormalization;

/// Characters removed from a token after accent stripping and lowercasing.
const PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '?', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`',
    '~', '(', ')', '¿', '¡', '"', '\'', '«', '»',
];

fn is_accent_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

fn remove_accents(s: &str) -> String {
    s.nfd().filter(|c| !is_accent_mark(*c)).collect()
}

/// Canonical lookup form of a single token.
///
/// Never fails; an empty result means there is nothing to look up.
pub fn normalize(raw: &str) -> String {
    remove_accents(raw)
        .to_lowercase()
        .chars()
        .filter(|c| !PUNCTUATION.contains(c))
        .collect()
}

/// Accent- and case-folded form of a name, with surrounding whitespace trimmed.
///
/// Unlike [`normalize`] this keeps punctuation, digits and inner spaces, so
/// `"1 Corintios"` folds to `"1 corintios"`.
pub fn fold_name(text: &str) -> String {
    remove_accents(text).to_lowercase().trim().to_string()
}

/// A word at a fixed position of a space-split sentence.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WordToken {
    pub index: usize,
    pub raw: String,
}

impl WordToken {
    pub fn normalized(&self) -> String {
        normalize(&self.raw)
    }
}

/// Split a sentence on single spaces after trimming its ends.
///
/// Punctuation stays attached to its token. Runs of spaces produce empty
/// tokens, which keep their position so indices line up with what the
/// reader renders.
pub fn tokenize(sentence: &str) -> Vec<WordToken> {
    let trimmed = sentence.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed
        .split(' ')
        .enumerate()
        .map(|(index, raw)| WordToken {
            index,
            raw: raw.to_string(),
        })
        .collect()
}

/// The token with leading and trailing punctuation removed. Case, accents
/// and inner punctuation are kept.
pub fn trim_punctuation(raw: &str) -> &str {
    raw.trim_matches(|c: char| PUNCTUATION.contains(&c))
}

/// True when the word consists only of ASCII digits.
pub(crate) fn is_numeric(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_accents_and_case() {
        assert_eq!(normalize("José"), "jose");
        assert_eq!(normalize("JOSÉ"), "jose");
        assert_eq!(normalize("jose"), "jose");
        assert_eq!(normalize("creó"), "creo");
        assert_eq!(normalize("Ñandú"), "nandu");
    }

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(normalize("Dios,"), "dios");
        assert_eq!(normalize("¿Dios?"), "dios");
        assert_eq!(normalize("¡Aleluya!"), "aleluya");
        assert_eq!(normalize("«luz»"), "luz");
        assert_eq!(normalize("(tierra);"), "tierra");
    }

    #[test]
    fn test_normalize_is_idempotent_on_samples() {
        for raw in ["¿Quién?", "JEHOVÁ,", "«Señor»", "pecado;", "a-b_c"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("¿¡.,;"), "");
    }

    #[test]
    fn test_fold_name_keeps_digits_and_spaces() {
        assert_eq!(fold_name("  1 Corintios "), "1 corintios");
        assert_eq!(fold_name("Éxodo"), "exodo");
    }

    #[test]
    fn test_tokenize_positions() {
        let tokens = tokenize("  En el principio, ");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2].index, 2);
        assert_eq!(tokens[2].raw, "principio,");
        assert_eq!(tokens[2].normalized(), "principio");
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_tokenize_double_space_keeps_position() {
        let tokens = tokenize("a  b");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].raw, "");
        assert_eq!(tokens[2].raw, "b");
    }

    #[test]
    fn test_trim_punctuation_keeps_accents() {
        assert_eq!(trim_punctuation("Zorobabel,"), "Zorobabel");
        assert_eq!(trim_punctuation("¿Cómo?"), "Cómo");
        assert_eq!(trim_punctuation("«maná»;"), "maná");
        assert_eq!(trim_punctuation("sal-y-luz"), "sal-y-luz");
        assert_eq!(trim_punctuation("¡!"), "");
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("316"));
        assert!(!is_numeric("3a"));
        assert!(!is_numeric(""));
    }
}
