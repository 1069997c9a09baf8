use std::collections::HashSet;
use std::thread;
use std::time::Duration;

use plenum_core::{DateWindow, SpeechRow};
use tracing::{info, warn};

use crate::api::SpeechPage;
use crate::client::{FetchError, KokkaiClient};

pub const DEFAULT_BASE_URL: &str = "https://kokkai.ndl.go.jp/api/speech";
pub const DEFAULT_TERMS: &[&str] = &["サイバーセキュリティ", "サイバー"];
pub const DEFAULT_PAGE_SIZE: u32 = 100;
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

/// Inputs for one collection run.
#[derive(Debug, Clone)]
pub struct CollectConfig {
    pub base_url: String,
    pub terms: Vec<String>,
    pub window: DateWindow,
    pub page_size: u32,
    /// Politeness pause between successive pages of one term.
    pub delay: Duration,
}

impl CollectConfig {
    /// Defaults matching the production endpoint; only the window is required.
    pub fn new(window: DateWindow) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            terms: DEFAULT_TERMS.iter().map(|t| t.to_string()).collect(),
            window,
            page_size: DEFAULT_PAGE_SIZE,
            delay: DEFAULT_DELAY,
        }
    }
}

/// Pagination outcome for one term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermStats {
    pub term: String,
    /// Server-reported hit count, captured on the term's first page.
    pub total_hits: u64,
    pub pages: u32,
    /// Records consumed from the server, kept or not.
    pub consumed: u64,
    pub kept: usize,
    /// True when a fetch failure cut this term short.
    pub aborted: bool,
}

/// Aggregate outcome of a collection run.
#[derive(Debug, Clone, Default)]
pub struct CollectStats {
    pub terms: Vec<TermStats>,
}

impl CollectStats {
    pub fn kept(&self) -> usize {
        self.terms.iter().map(|t| t.kept).sum()
    }

    pub fn aborted_terms(&self) -> usize {
        self.terms.iter().filter(|t| t.aborted).count()
    }
}

/// Run cursor-based pagination for every configured term.
///
/// `fetch` is called with the term and a 1-based start record and returns one
/// decoded page. Rows accumulate in discovery order with ids deduplicated
/// globally across terms. Pagination for a term stops on an empty page, a
/// missing next-position cursor, or once the consumed count reaches the
/// server-reported total; a fetch failure abandons that term only and the
/// run continues with the next one.
pub fn collect_terms<F>(cfg: &CollectConfig, mut fetch: F) -> (Vec<SpeechRow>, CollectStats)
where
    F: FnMut(&str, u64) -> Result<SpeechPage, FetchError>,
{
    let mut rows: Vec<SpeechRow> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut stats = CollectStats::default();

    for term in &cfg.terms {
        let mut start: u64 = 1;
        let mut total: Option<u64> = None;
        let mut consumed: u64 = 0;
        let mut pages: u32 = 0;
        let mut kept: usize = 0;
        let mut aborted = false;

        loop {
            let page = match fetch(term, start) {
                Ok(page) => page,
                Err(e) => {
                    warn!("term {term:?} start={start} failed: {e}");
                    aborted = true;
                    break;
                }
            };
            pages += 1;

            if total.is_none() {
                total = Some(page.number_of_records);
                info!("term {term:?}: {} hits", page.number_of_records);
            }

            if page.speech_record.is_empty() {
                break;
            }

            for record in &page.speech_record {
                let text = record.speech.trim();
                if record.speech_id.is_empty() || text.is_empty() {
                    continue;
                }
                if !seen.insert(record.speech_id.clone()) {
                    continue;
                }
                rows.push(SpeechRow::new(record.speech_id.clone(), text));
                kept += 1;
            }
            consumed += page.speech_record.len() as u64;

            let next = page.next_record_position.unwrap_or(0);
            if next == 0 || consumed >= total.unwrap_or(0) {
                break;
            }
            start = next;
            if !cfg.delay.is_zero() {
                thread::sleep(cfg.delay);
            }
        }

        stats.terms.push(TermStats {
            term: term.clone(),
            total_hits: total.unwrap_or(0),
            pages,
            consumed,
            kept,
            aborted,
        });
    }

    (rows, stats)
}

/// Collect with the production HTTP client.
pub fn collect(cfg: &CollectConfig) -> (Vec<SpeechRow>, CollectStats) {
    let client = KokkaiClient::new(&cfg.base_url);
    collect_terms(cfg, |term, start| client.fetch_page(cfg, term, start))
}
