//! Boundary between the alignment core and the network/UI layers.

use crate::Language;
use crate::alignment::{AlignmentMap, compute_alignment};
use crate::books::english_book_name;
use crate::error::LookupError;
use crate::resolver::WordResolver;
use chokepoint::ChokePoint;
use chrono::{DateTime, Utc};
use futures::future::BoxFuture;
use std::sync::Arc;
use std::time::Duration;

/// How long a fetched English verse is reused.
pub const VERSE_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// A verse addressed by its Spanish book name.
#[derive(Clone, Debug, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VerseReference {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
}

impl VerseReference {
    pub fn new(book: impl Into<String>, chapter: u32, verse: u32) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse,
        }
    }

    /// English book name for the upstream verse provider.
    pub fn english_book(&self) -> Result<&'static str, LookupError> {
        english_book_name(&self.book).ok_or_else(|| LookupError::UnknownBook(self.book.clone()))
    }
}

impl std::fmt::Display for VerseReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EnglishVerse {
    pub reference: String,
    pub text: String,
    pub translation: String,
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
}

/// Where a verse translation came from, so the reader can signal quality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Provenance {
    /// The English (KJV) text of the same verse.
    BibleApi,
    /// Word-by-word reconstruction from the dictionary.
    Dictionary,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub original_text: String,
    pub translated_text: String,
    pub from_language: Language,
    pub to_language: Language,
    pub timestamp: DateTime<Utc>,
    pub source: Provenance,
}

impl TranslationResult {
    fn new(original_text: &str, translated_text: String, source: Provenance) -> Self {
        Self {
            original_text: original_text.to_string(),
            translated_text,
            from_language: Language::Spanish,
            to_language: Language::English,
            timestamp: Utc::now(),
            source,
        }
    }
}

/// Provider of English verse text.
pub trait VerseSource: Send + Sync {
    fn fetch_english_verse<'a>(
        &'a self,
        reference: &'a VerseReference,
    ) -> BoxFuture<'a, Result<EnglishVerse, LookupError>>;
}

pub struct VerseTranslator {
    resolver: Arc<WordResolver>,
    verses: Arc<dyn VerseSource>,
    english_verses: ChokePoint<VerseReference, EnglishVerse, LookupError>,
}

impl VerseTranslator {
    pub fn new(resolver: Arc<WordResolver>, verses: Arc<dyn VerseSource>) -> Self {
        Self {
            resolver,
            verses,
            english_verses: ChokePoint::with_ttl(VERSE_CACHE_TTL),
        }
    }

    pub fn with_verse_cache_ttl(mut self, ttl: Duration) -> Self {
        self.english_verses = ChokePoint::with_ttl(ttl);
        self
    }

    pub fn resolver(&self) -> &Arc<WordResolver> {
        &self.resolver
    }

    /// English text of a verse. Successful fetches are cached; failures are
    /// retried on the next call.
    pub async fn fetch_english_verse(
        &self,
        reference: &VerseReference,
    ) -> Result<EnglishVerse, LookupError> {
        let verses = Arc::clone(&self.verses);
        let owned = reference.clone();
        self.english_verses
            .get(reference.clone(), async move {
                verses.fetch_english_verse(&owned).await
            })
            .await
    }

    /// English rendering of a Spanish verse: the KJV text when the verse
    /// source answers, a dictionary reconstruction otherwise.
    pub async fn translate_verse(
        &self,
        reference: &VerseReference,
        spanish_text: &str,
    ) -> TranslationResult {
        match self.fetch_english_verse(reference).await {
            Ok(verse) => TranslationResult::new(spanish_text, verse.text, Provenance::BibleApi),
            Err(e) => {
                log::warn!("English verse for {reference} unavailable ({e}); using dictionary");
                self.translate_text_with_dictionary(spanish_text).await
            }
        }
    }

    /// Resolves every space-separated token on its own, concurrently, and
    /// joins the results with single spaces.
    pub async fn translate_text_with_dictionary(&self, text: &str) -> TranslationResult {
        let words = futures::future::join_all(
            text.split(' ')
                .map(|word| self.resolver.resolve_word(word, None)),
        )
        .await;
        TranslationResult::new(text, words.join(" "), Provenance::Dictionary)
    }

    pub async fn translate_word(&self, raw: &str, context: Option<&str>) -> String {
        self.resolver.resolve_word(raw, context).await
    }

    pub fn align(&self, spanish: &str, english: &str) -> AlignmentMap {
        compute_alignment(self.resolver.dictionary(), spanish, english)
    }
}
