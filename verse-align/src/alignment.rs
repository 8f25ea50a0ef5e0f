//! Word-position alignment between a Spanish verse and its English counterpart.
//!
//! Each Spanish token is looked up in the dictionary, every candidate is
//! searched for in the English verse, and the occurrence closest to the
//! token's proportional position wins. Near-ties keep every tied position so
//! the reader highlights several words rather than the wrong one.
//!
//! Alignment never consults the network fallback: it runs synchronously on
//! every hover-enabled verse pair.

use crate::dictionary::Dictionary;
use crate::normalize::{WordToken, normalize, tokenize};
use rustc_hash::FxHashMap;
use std::collections::{BTreeMap, BTreeSet};

/// Two candidates whose distances from the expected position differ by at
/// most this much are treated as equally good.
pub const TIE_EPSILON: f64 = 0.1;

/// Spanish token index → English token indices it most likely corresponds to.
///
/// Keys are valid Spanish indices, every value set is non-empty and holds
/// valid English indices. Spanish words without a confident match have no
/// entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AlignmentMap(BTreeMap<usize, BTreeSet<usize>>);

impl AlignmentMap {
    pub fn get(&self, spanish_index: usize) -> Option<&BTreeSet<usize>> {
        self.0.get(&spanish_index)
    }

    /// English positions for a Spanish position, in ascending order.
    pub fn english_for(&self, spanish_index: usize) -> Vec<usize> {
        self.get(spanish_index)
            .map(|positions| positions.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Spanish positions pointing at an English position, for hovering the
    /// English side.
    pub fn spanish_for(&self, english_index: usize) -> Vec<usize> {
        self.0
            .iter()
            .filter(|(_, english)| english.contains(&english_index))
            .map(|(spanish, _)| *spanish)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &BTreeSet<usize>)> {
        self.0.iter().map(|(spanish, english)| (*spanish, english))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn insert(&mut self, spanish_index: usize, english: BTreeSet<usize>) {
        if !english.is_empty() {
            self.0.insert(spanish_index, english);
        }
    }
}

/// Normalized English tokens plus, for each normalized form, every position
/// it occurs at.
struct EnglishIndex {
    words: Vec<String>,
    positions: FxHashMap<String, Vec<usize>>,
}

impl EnglishIndex {
    fn new(tokens: &[WordToken]) -> Self {
        let words: Vec<String> = tokens.iter().map(WordToken::normalized).collect();
        let mut positions: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        for (position, word) in words.iter().enumerate() {
            if !word.is_empty() {
                positions.entry(word.clone()).or_default().push(position);
            }
        }
        Self { words, positions }
    }

    /// Every place `candidate` occurs, as the run of positions it covers.
    /// Multi-word candidates ("there was") must match consecutive tokens.
    fn occurrences(&self, candidate: &str) -> Vec<Vec<usize>> {
        let parts: Vec<String> = candidate
            .split_whitespace()
            .map(normalize)
            .filter(|part| !part.is_empty())
            .collect();
        let Some(first) = parts.first() else {
            return Vec::new();
        };
        let Some(starts) = self.positions.get(first) else {
            return Vec::new();
        };

        starts
            .iter()
            .filter(|&&start| {
                parts
                    .iter()
                    .enumerate()
                    .all(|(offset, part)| self.words.get(start + offset) == Some(part))
            })
            .map(|&start| (start..start + parts.len()).collect())
            .collect()
    }

    /// The occurrence of `candidate` starting closest to `expected`, with its
    /// distance. Equal distances keep the earlier occurrence.
    fn closest(&self, candidate: &str, expected: f64) -> Option<(Vec<usize>, f64)> {
        let mut best: Option<(Vec<usize>, f64)> = None;
        for run in self.occurrences(candidate) {
            let distance = (run[0] as f64 - expected).abs();
            if best.as_ref().is_none_or(|(_, d)| distance < *d) {
                best = Some((run, distance));
            }
        }
        best
    }
}

/// Aligns `spanish` to `english` word by word.
///
/// Deterministic for a fixed dictionary state. Empty input on either side
/// yields an empty map.
pub fn compute_alignment(dictionary: &Dictionary, spanish: &str, english: &str) -> AlignmentMap {
    let mut alignment = AlignmentMap::default();

    let english_tokens = tokenize(english);
    let spanish_tokens = tokenize(spanish);
    if english_tokens.is_empty() || spanish_tokens.is_empty() {
        return alignment;
    }

    let index = EnglishIndex::new(&english_tokens);
    let spanish_len = spanish_tokens.len() as f64;
    let english_len = english_tokens.len() as f64;

    for token in &spanish_tokens {
        let Some(candidates) = dictionary.candidates_for(&token.raw) else {
            continue;
        };
        // Word order differs between the languages, but gross structure is
        // usually proportional.
        let expected = token.index as f64 / spanish_len * english_len;

        let mut best_distance: Option<f64> = None;
        let mut chosen = BTreeSet::new();
        for candidate in candidates.iter() {
            let Some((run, distance)) = index.closest(candidate, expected) else {
                continue;
            };
            match best_distance {
                None => {
                    best_distance = Some(distance);
                    chosen.extend(run);
                }
                Some(best) if distance < best - TIE_EPSILON => {
                    best_distance = Some(distance);
                    chosen = run.into_iter().collect();
                }
                Some(best) if (distance - best).abs() <= TIE_EPSILON => {
                    best_distance = Some(best.min(distance));
                    chosen.extend(run);
                }
                Some(_) => {}
            }
        }

        alignment.insert(token.index, chosen);
    }

    alignment
}
