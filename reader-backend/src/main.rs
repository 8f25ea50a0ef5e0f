use anyhow::Context;
use reader_backend::{AppState, BibleApiClient, Config, MyMemoryClient, app};
use std::sync::Arc;
use verse_align::{Dictionary, VerseTranslator, WordResolver};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    let http = reqwest::Client::builder()
        .timeout(config.http_timeout)
        .build()
        .context("failed to build HTTP client")?;

    let resolver = WordResolver::new(
        Arc::new(Dictionary::curated()),
        Arc::new(MyMemoryClient::new(http.clone(), &config.mymemory_url)),
    )
    .with_cache_ttl(config.word_cache_ttl);
    let translator = VerseTranslator::new(
        Arc::new(resolver),
        Arc::new(BibleApiClient::new(http, &config.bible_api_url)),
    )
    .with_verse_cache_ttl(config.verse_cache_ttl);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    log::info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app(AppState::new(translator))).await?;
    Ok(())
}
