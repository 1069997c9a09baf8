use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use plenum_core::{parse_iso_date, table, DateWindow};
use plenum_kokkai::{collect, CollectConfig};
use tracing::info;

pub struct KokkaiParams {
    pub out_prefix: String,
    pub from: String,
    pub until: String,
    pub terms: Vec<String>,
    pub base_url: String,
    pub page_size: u32,
    pub delay_ms: u64,
}

pub fn execute(params: KokkaiParams) -> anyhow::Result<()> {
    let window = DateWindow::new(
        parse_iso_date(&params.from).context("--from must be YYYY-MM-DD")?,
        parse_iso_date(&params.until).context("--until must be YYYY-MM-DD")?,
    );

    let mut cfg = CollectConfig::new(window);
    cfg.base_url = params.base_url;
    cfg.page_size = params.page_size;
    cfg.delay = Duration::from_millis(params.delay_ms);
    if !params.terms.is_empty() {
        cfg.terms = params.terms;
    }

    let (rows, stats) = collect(&cfg);

    for term in &stats.terms {
        info!(
            "term {:?}: kept {} of {} consumed over {} pages{}",
            term.term,
            term.kept,
            term.consumed,
            term.pages,
            if term.aborted { " (aborted)" } else { "" }
        );
    }

    let out_path = PathBuf::from(format!("{}speeches.tsv", params.out_prefix));
    table::write_speeches(&out_path, &rows)?;
    println!("{} speeches -> {}", rows.len(), out_path.display());

    Ok(())
}
