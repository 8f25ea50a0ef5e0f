use anyhow::Context;
use std::time::Duration;

/// Service settings, read from the environment (a `.env` file is honored).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: String,
    pub bible_api_url: String,
    pub mymemory_url: String,
    pub http_timeout: Duration,
    pub word_cache_ttl: Duration,
    pub verse_cache_ttl: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string()),
            bible_api_url: lookup("BIBLE_API_URL")
                .unwrap_or_else(|| "https://bible-api.com".to_string()),
            mymemory_url: lookup("MYMEMORY_URL")
                .unwrap_or_else(|| "https://api.mymemory.translated.net".to_string()),
            http_timeout: seconds(&lookup, "HTTP_TIMEOUT_SECS", 15)?,
            word_cache_ttl: seconds(&lookup, "WORD_CACHE_TTL_SECS", 60 * 60)?,
            verse_cache_ttl: seconds(&lookup, "VERSE_CACHE_TTL_SECS", 24 * 60 * 60)?,
        })
    }
}

fn seconds(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: u64,
) -> anyhow::Result<Duration> {
    let Some(value) = lookup(key) else {
        return Ok(Duration::from_secs(default));
    };
    let secs = value
        .trim()
        .parse::<u64>()
        .with_context(|| format!("{key} must be a whole number of seconds, got {value:?}"))?;
    Ok(Duration::from_secs(secs))
}
