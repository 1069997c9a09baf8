use std::collections::HashSet;
use std::path::{Path, PathBuf};

use plenum_core::{DateWindow, KeywordMatcher, MetaRow, SpeechRow};
use tracing::{info, warn};

use crate::scan::{date_from_filename, xml_files, Category, CATEGORIES};
use crate::xml::speech_units;

/// Fatal configuration failure: nothing has been scanned yet when this is
/// returned, and the process should exit non-zero.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("corpus root {0:?} not found")]
    MissingRoot(PathBuf),
}

/// Inputs for one filter run.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    pub root: PathBuf,
    pub window: DateWindow,
    pub categories: Vec<Category>,
    pub matcher: KeywordMatcher,
}

impl FilterConfig {
    /// Full category set and the built-in cybersecurity matcher.
    pub fn new(root: impl Into<PathBuf>, window: DateWindow) -> Self {
        Self {
            root: root.into(),
            window,
            categories: CATEGORIES.to_vec(),
            matcher: KeywordMatcher::cyber(),
        }
    }
}

/// Aggregate counts for one filter run. Data-quality skips are counted
/// here, never logged per unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub files_walked: usize,
    pub files_skipped_date: usize,
    pub files_failed_parse: usize,
    pub units_seen: usize,
    pub units_kept: usize,
}

/// Result of a filter run: speech rows and metadata rows are parallel,
/// row `i` of one describes row `i` of the other.
#[derive(Debug, Default)]
pub struct FilterOutput {
    pub speeches: Vec<SpeechRow>,
    pub metadata: Vec<MetaRow>,
    pub stats: FilterStats,
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or_default()
}

/// Walk the configured categories and collect every speech unit that passes
/// the date window, keyword pattern, and global id dedup.
///
/// Per-file parse failures are logged and skipped; only a missing root is
/// fatal. Categories absent under the root are skipped silently.
pub fn run_filter(cfg: &FilterConfig) -> Result<FilterOutput, CorpusError> {
    if !cfg.root.exists() {
        return Err(CorpusError::MissingRoot(cfg.root.clone()));
    }

    let mut out = FilterOutput::default();
    let mut seen: HashSet<String> = HashSet::new();

    for category in &cfg.categories {
        let dir = cfg.root.join(category.subdir);
        if !dir.exists() {
            continue;
        }

        for file in xml_files(&dir) {
            out.stats.files_walked += 1;

            let Some(date) = date_from_filename(&file) else {
                out.stats.files_skipped_date += 1;
                continue;
            };
            if !cfg.window.contains(date) {
                out.stats.files_skipped_date += 1;
                continue;
            }

            let document = match std::fs::read_to_string(&file) {
                Ok(content) => content,
                Err(e) => {
                    warn!("parse failed: {} -> {e}", file.display());
                    out.stats.files_failed_parse += 1;
                    continue;
                }
            };
            let units = match speech_units(&document) {
                Ok(units) => units,
                Err(e) => {
                    warn!("parse failed: {} -> {e}", file.display());
                    out.stats.files_failed_parse += 1;
                    continue;
                }
            };

            let mut found = 0usize;
            for unit in units {
                out.stats.units_seen += 1;

                // The fallback counter is the number of rows retained so far
                // across the whole run, so a later genuine id of the same
                // shape collides with a synthesized one.
                let id = unit
                    .id
                    .clone()
                    .unwrap_or_else(|| format!("{}#{}", file_name(&file), out.speeches.len() + 1));
                if seen.contains(&id) {
                    continue;
                }
                if unit.text.is_empty() || !cfg.matcher.is_match(&unit.text) {
                    continue;
                }

                seen.insert(id.clone());
                out.metadata.push(MetaRow {
                    id: id.clone(),
                    date,
                    house: category.house,
                    member: unit.member.unwrap_or_default(),
                    party: unit.party.unwrap_or_default(),
                    debate_type: category.debate_type,
                    heading: unit.heading.unwrap_or_default(),
                    file: file.clone(),
                });
                out.speeches.push(SpeechRow::new(id, unit.text));
                found += 1;
            }

            if found > 0 {
                info!("{}: {found} speeches matched", file_name(&file));
            }
            out.stats.units_kept += found;
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use plenum_core::parse_iso_date;
    use plenum_core::record::{DebateType, House};
    use std::fs;
    use std::path::Path;

    fn default_window() -> DateWindow {
        DateWindow::new(
            parse_iso_date("2015-01-01").unwrap(),
            parse_iso_date("2025-09-30").unwrap(),
        )
    }

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn missing_root_is_fatal() {
        let cfg = FilterConfig::new("/nonexistent/corpus/root", default_window());
        assert!(matches!(run_filter(&cfg), Err(CorpusError::MissingRoot(_))));
    }

    #[test]
    fn keeps_only_keyword_matches_within_window() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "lords/lords2016-03-04.xml",
            r#"<publicwhip>
                <speech id="uk.l.1" speakername="A Peer"><p>Cyber threats are rising.</p></speech>
                <speech id="uk.l.2"><p>Agriculture subsidies.</p></speech>
                <speech id="uk.l.3"><p>The cyberspace question.</p></speech>
            </publicwhip>"#,
        );
        write(
            dir.path(),
            "lords/lords2014-01-01.xml",
            r#"<publicwhip><speech id="uk.old"><p>cyber before the window</p></speech></publicwhip>"#,
        );

        let out = run_filter(&FilterConfig::new(dir.path(), default_window())).unwrap();
        assert_eq!(out.speeches.len(), 1);
        assert_eq!(out.speeches[0].id, "uk.l.1");
        assert_eq!(out.speeches[0].text, "Cyber threats are rising.");

        assert_eq!(out.metadata.len(), 1);
        let meta = &out.metadata[0];
        assert_eq!(meta.house, House::Lords);
        assert_eq!(meta.debate_type, DebateType::Debate);
        assert_eq!(meta.member, "A Peer");
        assert_eq!(meta.party, "");
        assert_eq!(plenum_core::dates::format_iso_date(meta.date), "2016-03-04");

        assert_eq!(out.stats.files_walked, 2);
        assert_eq!(out.stats.files_skipped_date, 1);
        assert_eq!(out.stats.units_seen, 3);
        assert_eq!(out.stats.units_kept, 1);
    }

    #[test]
    fn categories_map_to_house_and_debate_type() {
        let dir = tempfile::tempdir().unwrap();
        let speech = r#"<publicwhip><speech id="ID"><p>cyber security strategy</p></speech></publicwhip>"#;
        write(
            dir.path(),
            "debates/debates2016-05-01.xml",
            &speech.replace("ID", "uk.c.1"),
        );
        write(
            dir.path(),
            "westminhall/westminhall2016-06-02.xml",
            &speech.replace("ID", "uk.w.1"),
        );

        let out = run_filter(&FilterConfig::new(dir.path(), default_window())).unwrap();
        assert_eq!(out.speeches.len(), 2);
        let commons = out.metadata.iter().find(|m| m.id == "uk.c.1").unwrap();
        assert_eq!(commons.house, House::Commons);
        assert_eq!(commons.debate_type, DebateType::Debate);
        let hall = out.metadata.iter().find(|m| m.id == "uk.w.1").unwrap();
        assert_eq!(hall.house, House::Commons);
        assert_eq!(hall.debate_type, DebateType::WestminsterHall);
    }

    #[test]
    fn parse_failure_skips_file_and_run_continues() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "lords/lords2016-03-04.xml",
            "<publicwhip><speech id=\"a\">broken",
        );
        write(
            dir.path(),
            "lords/lords2016-03-05.xml",
            r#"<publicwhip><speech id="uk.ok"><p>cyber resilience</p></speech></publicwhip>"#,
        );

        let out = run_filter(&FilterConfig::new(dir.path(), default_window())).unwrap();
        assert_eq!(out.stats.files_failed_parse, 1);
        assert_eq!(out.speeches.len(), 1);
        assert_eq!(out.speeches[0].id, "uk.ok");
    }

    #[test]
    fn dedup_is_global_across_files_and_categories() {
        let dir = tempfile::tempdir().unwrap();
        let speech = r#"<publicwhip><speech id="uk.dup"><p>cyber budget line</p></speech></publicwhip>"#;
        write(dir.path(), "debates/debates2016-05-01.xml", speech);
        write(dir.path(), "lords/lords2016-05-02.xml", speech);

        let out = run_filter(&FilterConfig::new(dir.path(), default_window())).unwrap();
        assert_eq!(out.speeches.len(), 1);
        assert_eq!(out.metadata[0].house, House::Commons);
    }

    #[test]
    fn idless_unit_gets_filename_counter_id() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "lords/lords2016-03-04.xml",
            r#"<publicwhip>
                <speech id="uk.1"><p>cyber one</p></speech>
                <speech id="uk.2"><p>cyber two</p></speech>
                <speech><p>cyber three, no id</p></speech>
            </publicwhip>"#,
        );

        let out = run_filter(&FilterConfig::new(dir.path(), default_window())).unwrap();
        assert_eq!(out.speeches.len(), 3);
        // 3rd retained unit of the run: counter is rows-so-far + 1.
        assert_eq!(out.speeches[2].id, "lords2016-03-04.xml#3");
    }

    #[test]
    fn synthesized_id_can_collide_with_later_genuine_id() {
        // Known non-uniqueness edge: the fallback id is derived from the
        // running row count, so an explicit id of the same shape collides
        // and the later unit is dropped as a duplicate.
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "lords/lords2016-03-04.xml",
            r#"<publicwhip>
                <speech><p>cyber first, synthesized id</p></speech>
                <speech id="lords2016-03-04.xml#1"><p>cyber second, genuine id</p></speech>
            </publicwhip>"#,
        );

        let out = run_filter(&FilterConfig::new(dir.path(), default_window())).unwrap();
        assert_eq!(out.speeches.len(), 1);
        assert_eq!(out.speeches[0].id, "lords2016-03-04.xml#1");
        assert_eq!(out.speeches[0].text, "cyber first, synthesized id");
    }

    #[test]
    fn absent_categories_are_skipped_silently() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "lords/lords2016-03-04.xml",
            r#"<publicwhip><speech id="uk.1"><p>cyber only lords present</p></speech></publicwhip>"#,
        );
        let out = run_filter(&FilterConfig::new(dir.path(), default_window())).unwrap();
        assert_eq!(out.speeches.len(), 1);
    }

    #[test]
    fn speeches_and_metadata_stay_parallel() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "debates/debates2016-05-01.xml",
            r#"<publicwhip>
                <speech id="uk.a"><p>cyber a</p></speech>
                <speech id="uk.b"><p>nothing relevant</p></speech>
                <speech id="uk.c"><p>cyber c</p></speech>
            </publicwhip>"#,
        );
        let out = run_filter(&FilterConfig::new(dir.path(), default_window())).unwrap();
        assert_eq!(out.speeches.len(), out.metadata.len());
        for (row, meta) in out.speeches.iter().zip(&out.metadata) {
            assert_eq!(row.id, meta.id);
        }
    }
}
