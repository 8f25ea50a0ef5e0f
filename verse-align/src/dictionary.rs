use crate::curated::CURATED_ENTRIES;
use crate::normalize::normalize;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use rustc_hash::FxHashMap;

/// Ordered, non-empty list of English renderings for one Spanish key.
///
/// Order is part of the contract: the first candidate is the default sense
/// used whenever context does not pick another one.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Candidates(Vec<String>);

impl Candidates {
    /// Returns `None` when the list would be empty.
    pub fn new(candidates: Vec<String>) -> Option<Self> {
        if candidates.is_empty() {
            None
        } else {
            Some(Self(candidates))
        }
    }

    pub fn single(candidate: impl Into<String>) -> Self {
        Self(vec![candidate.into()])
    }

    pub fn default_sense(&self) -> &str {
        &self.0[0]
    }

    pub fn is_ambiguous(&self) -> bool {
        self.0.len() > 1
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Spanish → English word table.
///
/// Curated entries are fixed at construction. Translations learned at runtime
/// live in a separate concurrent map and can only be added, never replaced,
/// and never shadow a curated key.
#[derive(Debug)]
pub struct Dictionary {
    curated: FxHashMap<&'static str, Candidates>,
    enriched: DashMap<String, Candidates>,
}

impl Dictionary {
    pub fn curated() -> Self {
        Self::from_entries(CURATED_ENTRIES)
    }

    pub fn from_entries(entries: &[(&'static str, &[&str])]) -> Self {
        let curated = entries
            .iter()
            .filter_map(|(key, candidates)| {
                let candidates = candidates.iter().map(|c| c.to_string()).collect();
                Candidates::new(candidates).map(|candidates| (*key, candidates))
            })
            .collect();
        Self {
            curated,
            enriched: DashMap::new(),
        }
    }

    /// Exact-key lookup: curated table first, then runtime enrichments.
    pub fn lookup(&self, key: &str) -> Option<Candidates> {
        if key.is_empty() {
            return None;
        }
        if let Some(candidates) = self.curated.get(key) {
            return Some(candidates.clone());
        }
        self.enriched.get(key).map(|entry| entry.value().clone())
    }

    /// Looks a raw token up by its normalized form, then by its lowercased
    /// form (which is how multi-word phrase keys are stored).
    pub fn candidates_for(&self, raw: &str) -> Option<Candidates> {
        self.lookup(&normalize(raw))
            .or_else(|| self.lookup(&raw.to_lowercase()))
    }

    /// Records a translation learned at runtime.
    ///
    /// The check and the insert happen under one shard lock, so concurrent
    /// callers racing on the same key leave exactly one entry behind. Returns
    /// whether this call inserted.
    pub fn insert_if_absent(&self, key: &str, translation: &str) -> bool {
        let translation = translation.trim();
        if key.is_empty() || translation.is_empty() || self.curated.contains_key(key) {
            return false;
        }
        match self.enriched.entry(key.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(vacant) => {
                log::debug!("learned translation {key:?} -> {translation:?}");
                vacant.insert(Candidates::single(translation));
                true
            }
        }
    }

    /// Total number of keys, curated and learned.
    pub fn len(&self) -> usize {
        self.curated.len() + self.enriched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn enriched_len(&self) -> usize {
        self.enriched.len()
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::curated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_curated_keys_are_normalized() {
        for (key, _) in CURATED_ENTRIES {
            if key.contains(' ') {
                assert_eq!(key.to_lowercase(), *key, "phrase key {key:?} must be lowercase");
            } else {
                assert_eq!(normalize(key), *key, "key {key:?} must be normalized");
            }
        }
    }

    #[test]
    fn test_curated_keys_are_unique() {
        let mut seen = HashSet::new();
        for (key, _) in CURATED_ENTRIES {
            assert!(seen.insert(*key), "duplicate key {key:?}");
        }
    }

    #[test]
    fn test_no_empty_candidates() {
        for (key, candidates) in CURATED_ENTRIES {
            assert!(!candidates.is_empty(), "{key:?} has no candidates");
            assert!(candidates.iter().all(|c| !c.trim().is_empty()));
        }
    }

    #[test]
    fn test_candidates_rejects_empty() {
        assert!(Candidates::new(vec![]).is_none());
        let c = Candidates::new(vec!["like".into(), "as".into()]).unwrap();
        assert_eq!(c.default_sense(), "like");
        assert!(c.is_ambiguous());
    }

    #[test]
    fn test_lookup_normalizes_query() {
        let dict = Dictionary::curated();
        let candidates = dict.candidates_for("¿Dios?").unwrap();
        assert_eq!(candidates.default_sense(), "God");
        assert_eq!(dict.candidates_for("TIERRA,").unwrap().as_slice(), ["earth"]);
    }

    #[test]
    fn test_lookup_phrase_by_lowercase() {
        let dict = Dictionary::curated();
        assert_eq!(
            dict.candidates_for("Por Qué").unwrap().default_sense(),
            "why"
        );
        assert!(dict.candidates_for("").is_none());
    }

    #[test]
    fn test_insert_if_absent_does_not_overwrite() {
        let dict = Dictionary::curated();
        assert!(!dict.insert_if_absent("tierra", "soil"));
        assert_eq!(dict.lookup("tierra").unwrap().as_slice(), ["earth"]);

        assert!(dict.insert_if_absent("xyz", "xyzword"));
        assert!(!dict.insert_if_absent("xyz", "other"));
        assert_eq!(dict.lookup("xyz").unwrap().as_slice(), ["xyzword"]);
        assert_eq!(dict.enriched_len(), 1);
    }

    #[test]
    fn test_insert_rejects_blank() {
        let dict = Dictionary::curated();
        assert!(!dict.insert_if_absent("", "word"));
        assert!(!dict.insert_if_absent("abc", "   "));
        assert_eq!(dict.enriched_len(), 0);
    }

    #[test]
    fn test_concurrent_inserts_leave_one_winner() {
        let dict = Arc::new(Dictionary::curated());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let dict = Arc::clone(&dict);
                std::thread::spawn(move || dict.insert_if_absent("zarza", &format!("bush{i}")))
            })
            .collect();
        let wins = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();
        assert_eq!(wins, 1);
        assert_eq!(dict.lookup("zarza").unwrap().len(), 1);
    }
}
