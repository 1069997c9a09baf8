use std::path::{Path, PathBuf};

use anyhow::Context;
use plenum_core::{parse_iso_date, table, DateWindow};
use plenum_hansard::{run_filter, FilterConfig};
use tracing::info;

pub fn execute(xml_root: &Path, start: &str, end: &str, out_prefix: &str) -> anyhow::Result<()> {
    let window = DateWindow::new(
        parse_iso_date(start).context("--start must be YYYY-MM-DD")?,
        parse_iso_date(end).context("--end must be YYYY-MM-DD")?,
    );

    let cfg = FilterConfig::new(xml_root, window);
    let out = run_filter(&cfg)?;

    let stats = out.stats;
    info!(
        "walked {} files ({} outside window or undated, {} failed to parse); kept {} of {} speech units",
        stats.files_walked,
        stats.files_skipped_date,
        stats.files_failed_parse,
        stats.units_kept,
        stats.units_seen
    );

    let speeches_path = PathBuf::from(format!("{out_prefix}speeches.tsv"));
    let metadata_path = PathBuf::from(format!("{out_prefix}metadata.tsv"));
    table::write_speeches(&speeches_path, &out.speeches)?;
    table::write_metadata(&metadata_path, &out.metadata)?;

    println!("{} speeches -> {}", out.speeches.len(), speeches_path.display());
    println!("metadata -> {}", metadata_path.display());

    Ok(())
}
