pub mod api;
pub mod client;
pub mod collect;

pub use api::{ApiSpeechRecord, SpeechPage};
pub use client::{FetchError, KokkaiClient};
pub use collect::{collect, collect_terms, CollectConfig, CollectStats, TermStats};
