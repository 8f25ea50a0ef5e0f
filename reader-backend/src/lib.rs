pub mod clients;
pub mod config;
pub mod routes;

pub use clients::{BibleApiClient, MyMemoryClient};
pub use config::Config;
pub use routes::{AppState, app};
