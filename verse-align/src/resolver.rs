use crate::Language;
use crate::dictionary::{Candidates, Dictionary};
use crate::error::LookupError;
use crate::normalize::{is_numeric, normalize, trim_punctuation};
use chokepoint::ChokePoint;
use futures::future::{BoxFuture, FutureExt};
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

/// How long a word resolved without context stays cached.
pub const ISOLATED_WORD_TTL: Duration = Duration::from_secs(60 * 60);

/// Single-word translation service consulted when the dictionary has no entry.
pub trait WordFallback: Send + Sync {
    /// `Ok(None)` means the service answered but had nothing useful.
    fn translate_word<'a>(
        &'a self,
        word: &'a str,
    ) -> BoxFuture<'a, Result<Option<String>, LookupError>>;
}

/// Fallback that never knows anything. Resolution becomes dictionary-only.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoFallback;

impl WordFallback for NoFallback {
    fn translate_word<'a>(
        &'a self,
        _word: &'a str,
    ) -> BoxFuture<'a, Result<Option<String>, LookupError>> {
        let answer: Result<Option<String>, LookupError> = Ok(None);
        async move { answer }.boxed()
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
struct IsolatedWordKey {
    word: String,
    from: Language,
    to: Language,
}

/// Turns one Spanish token into one English rendering.
///
/// Never fails: an unknown word comes back unchanged.
pub struct WordResolver {
    dictionary: Arc<Dictionary>,
    fallback: Arc<dyn WordFallback>,
    isolated: ChokePoint<IsolatedWordKey, Option<String>, Infallible>,
}

impl WordResolver {
    pub fn new(dictionary: Arc<Dictionary>, fallback: Arc<dyn WordFallback>) -> Self {
        Self {
            dictionary,
            fallback,
            isolated: ChokePoint::with_ttl(ISOLATED_WORD_TTL),
        }
    }

    /// Dictionary-only resolver over the curated table.
    pub fn offline() -> Self {
        Self::new(Arc::new(Dictionary::curated()), Arc::new(NoFallback))
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.isolated = ChokePoint::with_ttl(ttl);
        self
    }

    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    /// Best English rendering of `raw`, disambiguated by `context` when given.
    ///
    /// Surrounding punctuation is ignored, so `"Zorobabel,"` and `"Zorobabel"`
    /// share one resolution. Without context the answer is cached per word for
    /// [`ISOLATED_WORD_TTL`] and concurrent lookups of the same word share one
    /// resolution. With context nothing is read from or written to that cache,
    /// since the right sense depends on the verse.
    pub async fn resolve_word(&self, raw: &str, context: Option<&str>) -> String {
        let word = trim_punctuation(raw);
        if word.is_empty() {
            return raw.to_string();
        }
        let translation = match context.filter(|c| !c.trim().is_empty()) {
            Some(context) => {
                resolve(&self.dictionary, self.fallback.as_ref(), word, Some(context)).await
            }
            None => self.resolve_isolated(word).await,
        };
        translation.unwrap_or_else(|| raw.to_string())
    }

    async fn resolve_isolated(&self, word: &str) -> Option<String> {
        let key = IsolatedWordKey {
            word: word.to_string(),
            from: Language::Spanish,
            to: Language::English,
        };
        let dictionary = Arc::clone(&self.dictionary);
        let fallback = Arc::clone(&self.fallback);
        let word = word.to_string();
        let compute = async move {
            Ok::<_, Infallible>(resolve(&dictionary, fallback.as_ref(), &word, None).await)
        };
        match self.isolated.get(key, compute).await {
            Ok(translation) => translation,
            Err(never) => match never {},
        }
    }

    /// Dictionary-only resolution. Never performs I/O.
    ///
    /// Returns `None` when the dictionary has no entry for the word.
    pub fn resolve_known(&self, raw: &str, context: Option<&str>) -> Option<String> {
        let candidates = self.dictionary.candidates_for(raw)?;
        Some(choose_candidate(&candidates, context).to_string())
    }
}

/// `None` when neither the dictionary nor the fallback knows `word`.
async fn resolve(
    dictionary: &Dictionary,
    fallback: &dyn WordFallback,
    word: &str,
    context: Option<&str>,
) -> Option<String> {
    let candidates = candidates_with_fallback(dictionary, fallback, word).await?;
    Some(choose_candidate(&candidates, context).to_string())
}

async fn candidates_with_fallback(
    dictionary: &Dictionary,
    fallback: &dyn WordFallback,
    word: &str,
) -> Option<Candidates> {
    if let Some(candidates) = dictionary.candidates_for(word) {
        return Some(candidates);
    }
    if !worth_asking_fallback(word) {
        return None;
    }

    match fallback.translate_word(word).await {
        Ok(Some(translation)) if !translation.trim().is_empty() => {
            let translation = translation.trim();
            dictionary.insert_if_absent(&normalize(word), translation);
            Some(Candidates::single(translation))
        }
        Ok(_) => {
            log::debug!("no fallback translation for {word:?}");
            None
        }
        Err(e) => {
            log::debug!("fallback translation for {word:?} failed: {e}");
            None
        }
    }
}

fn worth_asking_fallback(word: &str) -> bool {
    word.chars().count() > 2 && !is_numeric(word)
}

/// Picks one candidate, using the English sentence as evidence.
///
/// In order: the first candidate that occurs in `context` as a whole word;
/// then the first whose stem (one trailing `e` removed) occurs anywhere in
/// `context`, which bridges e.g. "create" and "created"; then the first
/// candidate.
pub fn choose_candidate<'a>(candidates: &'a Candidates, context: Option<&str>) -> &'a str {
    let default = candidates.default_sense();
    let Some(context) = context.filter(|c| !c.trim().is_empty()) else {
        return default;
    };
    if !candidates.is_ambiguous() {
        return default;
    }

    let context = context.to_lowercase();
    candidates
        .iter()
        .find(|candidate| contains_whole_word(&context, candidate))
        .or_else(|| {
            candidates
                .iter()
                .find(|candidate| contains_stem(&context, candidate))
        })
        .unwrap_or(default)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whether `candidate` occurs in `lowercase_context` delimited by word
/// boundaries at both ends.
fn contains_whole_word(lowercase_context: &str, candidate: &str) -> bool {
    let needle = candidate.to_lowercase();
    let (Some(first), Some(last)) = (needle.chars().next(), needle.chars().next_back()) else {
        return false;
    };
    let boundary = |outside: Option<char>, inside: char| {
        outside.is_some_and(is_word_char) != is_word_char(inside)
    };

    let mut from = 0;
    while let Some(offset) = lowercase_context[from..].find(needle.as_str()) {
        let start = from + offset;
        let before = lowercase_context[..start].chars().next_back();
        let after = lowercase_context[start + needle.len()..].chars().next();
        if boundary(before, first) && boundary(after, last) {
            return true;
        }
        from = start + first.len_utf8();
    }
    false
}

// TODO: replace the trailing-e strip with a real English stemmer; it only
// helps regular verbs ("create"/"created") and misfires on short words.
fn contains_stem(lowercase_context: &str, candidate: &str) -> bool {
    let candidate = candidate.to_lowercase();
    let stem = candidate.strip_suffix('e').unwrap_or(&candidate);
    !stem.is_empty() && lowercase_context.contains(stem)
}

/// Whether `translation` says anything beyond the word the reader hovered.
///
/// A resolver that fails open returns its input; the UI shows "no distinct
/// translation" instead of an arrow pointing at the same word.
pub fn is_distinct_translation(raw: &str, translation: &str) -> bool {
    normalize(raw) != normalize(translation)
}
