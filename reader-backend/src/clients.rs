//! HTTP collaborators: bible-api.com for English verse text and MyMemory for
//! single-word translations.

use futures::future::{BoxFuture, FutureExt};
use html_escape::decode_html_entities;
use reqwest::Url;
use serde::Deserialize;
use verse_align::{
    EnglishVerse, Language, LookupError, VerseReference, VerseSource, WordFallback,
    language_pair, normalize,
};

fn request_error(e: reqwest::Error) -> LookupError {
    LookupError::Request(e.to_string())
}

fn base_url(base: &str) -> Result<Url, LookupError> {
    Url::parse(base).map_err(|e| LookupError::Request(format!("invalid base url {base:?}: {e}")))
}

pub struct BibleApiClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct BibleApiResponse {
    reference: Option<String>,
    text: Option<String>,
    translation_name: Option<String>,
}

impl BibleApiClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// `{base}/{English Book} {chapter}:{verse}?translation=kjv`, percent-encoded.
    pub fn passage_url(&self, reference: &VerseReference) -> Result<Url, LookupError> {
        let book = reference.english_book()?;
        let mut url = base_url(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|()| LookupError::Request(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .push(&format!("{book} {}:{}", reference.chapter, reference.verse));
        url.query_pairs_mut().append_pair("translation", "kjv");
        Ok(url)
    }

    async fn fetch(&self, reference: &VerseReference) -> Result<EnglishVerse, LookupError> {
        let url = self.passage_url(reference)?;
        log::info!("fetching English verse {url}");

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(request_error)?;
        if !response.status().is_success() {
            return Err(LookupError::Status(response.status().as_u16()));
        }
        let body: BibleApiResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Malformed(e.to_string()))?;
        english_verse_from_response(reference, body)
    }
}

fn english_verse_from_response(
    reference: &VerseReference,
    body: BibleApiResponse,
) -> Result<EnglishVerse, LookupError> {
    let book = reference.english_book()?;
    let text = body
        .text
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| LookupError::Malformed(format!("no verse text for {reference}")))?;

    Ok(EnglishVerse {
        reference: body
            .reference
            .unwrap_or_else(|| format!("{book} {}:{}", reference.chapter, reference.verse)),
        text,
        translation: body
            .translation_name
            .unwrap_or_else(|| "King James Version".to_string()),
        book: book.to_string(),
        chapter: reference.chapter,
        verse: reference.verse,
    })
}

impl VerseSource for BibleApiClient {
    fn fetch_english_verse<'a>(
        &'a self,
        reference: &'a VerseReference,
    ) -> BoxFuture<'a, Result<EnglishVerse, LookupError>> {
        self.fetch(reference).boxed()
    }
}

pub struct MyMemoryClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: Option<MyMemoryData>,
}

#[derive(Deserialize)]
struct MyMemoryData {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

impl MyMemoryClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn word_url(&self, word: &str) -> Result<Url, LookupError> {
        let mut url = base_url(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|()| LookupError::Request(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .push("get");
        url.query_pairs_mut()
            .append_pair("q", word)
            .append_pair("langpair", &language_pair(Language::Spanish, Language::English));
        Ok(url)
    }

    async fn translate(&self, word: &str) -> Result<Option<String>, LookupError> {
        let url = self.word_url(word)?;
        log::debug!("asking MyMemory for {word:?}");

        let response = self.client.get(url).send().await.map_err(request_error)?;
        if !response.status().is_success() {
            return Err(LookupError::Status(response.status().as_u16()));
        }
        let body: MyMemoryResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Malformed(e.to_string()))?;
        Ok(translation_from_response(word, body))
    }
}

/// The translated text, unless it is empty or just the query echoed back.
fn translation_from_response(word: &str, body: MyMemoryResponse) -> Option<String> {
    let text = body.response_data?.translated_text?;
    let text = decode_html_entities(text.trim()).into_owned();
    if text.is_empty() || normalize(&text) == normalize(word) {
        return None;
    }
    Some(text)
}

impl WordFallback for MyMemoryClient {
    fn translate_word<'a>(
        &'a self,
        word: &'a str,
    ) -> BoxFuture<'a, Result<Option<String>, LookupError>> {
        self.translate(word).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bible_api() -> BibleApiClient {
        BibleApiClient::new(reqwest::Client::new(), "https://bible-api.com")
    }

    #[test]
    fn test_passage_url() {
        let url = bible_api()
            .passage_url(&VerseReference::new("1 Corintios", 13, 4))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://bible-api.com/1%20Corinthians%2013:4?translation=kjv"
        );
    }

    #[test]
    fn test_passage_url_unknown_book() {
        assert_eq!(
            bible_api().passage_url(&VerseReference::new("Enoc", 1, 1)),
            Err(LookupError::UnknownBook("Enoc".to_string()))
        );
    }

    #[test]
    fn test_english_verse_from_response() {
        let body: BibleApiResponse = serde_json::from_str(
            r#"{"reference":"John 3:16","text":"For God so loved the world\n","translation_name":"King James Version"}"#,
        )
        .unwrap();
        let verse = english_verse_from_response(&VerseReference::new("Juan", 3, 16), body).unwrap();
        assert_eq!(verse.text, "For God so loved the world");
        assert_eq!(verse.book, "John");
        assert_eq!(verse.reference, "John 3:16");
        assert_eq!((verse.chapter, verse.verse), (3, 16));
    }

    #[test]
    fn test_english_verse_without_text_is_malformed() {
        let body: BibleApiResponse = serde_json::from_str(r#"{"text":"   "}"#).unwrap();
        let err = english_verse_from_response(&VerseReference::new("Juan", 3, 16), body);
        assert!(matches!(err, Err(LookupError::Malformed(_))));
    }

    #[test]
    fn test_word_url() {
        let client = MyMemoryClient::new(reqwest::Client::new(), "https://api.mymemory.translated.net");
        let url = client.word_url("zarza").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.mymemory.translated.net/get?q=zarza&langpair=es%7Cen"
        );
    }

    #[test]
    fn test_translation_from_response() {
        let parse = |json: &str| serde_json::from_str::<MyMemoryResponse>(json).unwrap();

        assert_eq!(
            translation_from_response("zarza", parse(r#"{"responseData":{"translatedText":" bramble "}}"#)),
            Some("bramble".to_string())
        );
        assert_eq!(
            translation_from_response("Jehová", parse(r#"{"responseData":{"translatedText":"JEHOVA"}}"#)),
            None
        );
        assert_eq!(
            translation_from_response("zarza", parse(r#"{"responseData":{"translatedText":""}}"#)),
            None
        );
        assert_eq!(translation_from_response("zarza", parse(r#"{}"#)), None);
        assert_eq!(
            translation_from_response("hoy", parse(r#"{"responseData":{"translatedText":"today&#39;s"}}"#)),
            Some("today's".to_string())
        );
    }
}
