use futures::FutureExt;
use futures::future::BoxFuture;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use verse_align::{
    EnglishVerse, LookupError, Provenance, VerseReference, VerseSource, VerseTranslator,
    WordResolver,
};

const GENESIS_ES: &str = "En el principio creó Dios los cielos y la tierra.";
const GENESIS_EN: &str = "In the beginning God created the heaven and the earth.";

struct StubVerses {
    online: AtomicBool,
    calls: AtomicUsize,
}

impl StubVerses {
    fn new(online: bool) -> Self {
        Self {
            online: AtomicBool::new(online),
            calls: AtomicUsize::new(0),
        }
    }
}

impl VerseSource for StubVerses {
    fn fetch_english_verse<'a>(
        &'a self,
        reference: &'a VerseReference,
    ) -> BoxFuture<'a, Result<EnglishVerse, LookupError>> {
        async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.online.load(Ordering::SeqCst) {
                return Err(LookupError::Status(503));
            }
            let book = match reference.english_book() {
                Ok(book) => book,
                Err(e) => return Err(e),
            };
            Ok(EnglishVerse {
                reference: format!("{book} {}:{}", reference.chapter, reference.verse),
                text: GENESIS_EN.to_string(),
                translation: "King James Version".to_string(),
                book: book.to_string(),
                chapter: reference.chapter,
                verse: reference.verse,
            })
        }
        .boxed()
    }
}

fn translator(verses: &Arc<StubVerses>) -> VerseTranslator {
    let verses: Arc<dyn VerseSource> = verses.clone();
    VerseTranslator::new(Arc::new(WordResolver::offline()), verses)
}

#[tokio::test]
async fn test_verse_from_source_is_tagged_bible_api() {
    let verses = Arc::new(StubVerses::new(true));
    let translator = translator(&verses);
    let reference = VerseReference::new("Génesis", 1, 1);

    let result = translator.translate_verse(&reference, GENESIS_ES).await;
    assert_eq!(result.source, Provenance::BibleApi);
    assert_eq!(result.original_text, GENESIS_ES);
    assert_eq!(result.translated_text, GENESIS_EN);
}

#[tokio::test]
async fn test_verse_source_failure_falls_back_to_dictionary() {
    let verses = Arc::new(StubVerses::new(false));
    let translator = translator(&verses);
    let reference = VerseReference::new("Génesis", 1, 1);

    let result = translator
        .translate_verse(&reference, "En el principio creó Dios")
        .await;
    assert_eq!(result.source, Provenance::Dictionary);
    assert_eq!(result.translated_text, "in the beginning created God");
}

#[tokio::test]
async fn test_dictionary_reconstruction_keeps_unknown_words() {
    let verses = Arc::new(StubVerses::new(false));
    let translator = translator(&verses);

    let result = translator
        .translate_text_with_dictionary("Zorobabel hijo de Salatiel")
        .await;
    assert_eq!(result.translated_text, "Zorobabel Son of Salatiel");
}

#[tokio::test]
async fn test_english_verses_are_cached_but_failures_are_not() {
    let verses = Arc::new(StubVerses::new(false));
    let translator = translator(&verses);
    let reference = VerseReference::new("Juan", 3, 16);

    assert!(translator.fetch_english_verse(&reference).await.is_err());
    verses.online.store(true, Ordering::SeqCst);
    assert!(translator.fetch_english_verse(&reference).await.is_ok());
    assert!(translator.fetch_english_verse(&reference).await.is_ok());
    assert_eq!(verses.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_translate_word_and_align_pass_through() {
    let verses = Arc::new(StubVerses::new(true));
    let translator = translator(&verses);

    assert_eq!(
        translator.translate_word("creó", Some(GENESIS_EN)).await,
        "created"
    );

    let alignment = translator.align(GENESIS_ES, GENESIS_EN);
    assert_eq!(alignment.english_for(4), vec![3]);
    assert_eq!(alignment.english_for(9), vec![9]);
}

#[test]
fn test_translation_result_json_shape() {
    let json = serde_json::json!({
        "originalText": "luz",
        "translatedText": "light",
        "fromLanguage": "es",
        "toLanguage": "en",
        "timestamp": "2024-01-01T00:00:00Z",
        "source": "dictionary"
    });
    let parsed: verse_align::TranslationResult = serde_json::from_value(json).unwrap();
    assert_eq!(parsed.source, Provenance::Dictionary);
    assert_eq!(parsed.from_language, verse_align::Language::Spanish);
}
