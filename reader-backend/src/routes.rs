use axum::{
    Router,
    extract::{Json, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use verse_align::{
    EnglishVerse, LookupError, TranslationResult, VerseReference, VerseTranslator, books,
    resolver::is_distinct_translation,
};

#[derive(Clone)]
pub struct AppState {
    translator: Arc<VerseTranslator>,
}

impl AppState {
    pub fn new(translator: VerseTranslator) -> Self {
        Self {
            translator: Arc::new(translator),
        }
    }
}

#[derive(Deserialize)]
pub struct WordQuery {
    word: Option<String>,
    context: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordResponse {
    pub word: String,
    pub translation: String,
    /// False when the resolver had nothing better than the word itself.
    pub distinct: bool,
}

async fn translate_word(
    State(state): State<AppState>,
    Query(query): Query<WordQuery>,
) -> Result<Json<WordResponse>, StatusCode> {
    let word = query
        .word
        .as_deref()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .ok_or(StatusCode::BAD_REQUEST)?;

    let translation = state
        .translator
        .translate_word(word, query.context.as_deref())
        .await;
    Ok(Json(WordResponse {
        word: word.to_string(),
        distinct: is_distinct_translation(word, &translation),
        translation,
    }))
}

#[derive(Deserialize)]
pub struct VerseRequest {
    #[serde(flatten)]
    reference: VerseReference,
    text: String,
}

async fn translate_verse(
    State(state): State<AppState>,
    Json(request): Json<VerseRequest>,
) -> Json<TranslationResult> {
    Json(
        state
            .translator
            .translate_verse(&request.reference, &request.text)
            .await,
    )
}

#[derive(Deserialize)]
pub struct AlignRequest {
    spanish: String,
    english: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlignedWord {
    pub spanish: usize,
    pub english: Vec<usize>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlignResponse {
    pub alignments: Vec<AlignedWord>,
}

async fn align(
    State(state): State<AppState>,
    Json(request): Json<AlignRequest>,
) -> Json<AlignResponse> {
    let alignment = state.translator.align(&request.spanish, &request.english);
    let alignments = alignment
        .iter()
        .map(|(spanish, english)| AlignedWord {
            spanish,
            english: english.iter().copied().collect(),
        })
        .collect();
    Json(AlignResponse { alignments })
}

async fn english_verse(
    State(state): State<AppState>,
    Query(reference): Query<VerseReference>,
) -> Result<Json<EnglishVerse>, StatusCode> {
    if let Err(e) = reference.english_book() {
        log::info!("{e}");
        return Err(StatusCode::BAD_REQUEST);
    }
    match state.translator.fetch_english_verse(&reference).await {
        Ok(verse) => Ok(Json(verse)),
        Err(LookupError::UnknownBook(_)) => Err(StatusCode::BAD_REQUEST),
        Err(e) => {
            log::warn!("English verse for {reference} unavailable: {e}");
            Err(StatusCode::BAD_GATEWAY)
        }
    }
}

async fn list_books() -> Json<Vec<&'static str>> {
    Json(books::spanish_book_names().collect())
}

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers(Any);

    Router::new()
        .route("/", get(|| async { "Verse reader backend" }))
        .route("/translate/word", get(translate_word))
        .route("/translate/verse", post(translate_verse))
        .route("/align", post(align))
        .route("/english-verse", get(english_verse))
        .route("/books", get(list_books))
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(cors)
}
