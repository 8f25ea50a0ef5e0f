pub mod alignment;
pub mod books;
mod curated;
pub mod dictionary;
pub mod error;
pub mod normalize;
pub mod orchestrator;
pub mod resolver;

pub use alignment::{AlignmentMap, compute_alignment};
pub use dictionary::{Candidates, Dictionary};
pub use error::LookupError;
pub use normalize::{WordToken, normalize, tokenize};
pub use orchestrator::{
    EnglishVerse, Provenance, TranslationResult, VerseReference, VerseSource, VerseTranslator,
};
pub use resolver::{NoFallback, WordFallback, WordResolver};

#[derive(
    Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, serde::Serialize, serde::Deserialize,
)]
pub enum Language {
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "en")]
    English,
}

impl Language {
    pub fn iso_639_1(&self) -> &'static str {
        match self {
            Language::Spanish => "es",
            Language::English => "en",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Language::Spanish => "Spanish",
            Language::English => "English",
        };
        write!(f, "{name}")
    }
}

/// MyMemory-style language pair, e.g. `es|en`.
pub fn language_pair(from: Language, to: Language) -> String {
    format!("{}|{}", from.iso_639_1(), to.iso_639_1())
}
