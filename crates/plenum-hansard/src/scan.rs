use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use plenum_core::dates::calendar_date;
use plenum_core::record::{DebateType, House};
use regex::Regex;
use time::Date;
use walkdir::WalkDir;

/// A transcript subdirectory and the chamber labels it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub subdir: &'static str,
    pub house: House,
    pub debate_type: DebateType,
}

/// The ParlParse categories scanned by default.
pub const CATEGORIES: &[Category] = &[
    Category {
        subdir: "debates",
        house: House::Commons,
        debate_type: DebateType::Debate,
    },
    Category {
        subdir: "lords",
        house: House::Lords,
        debate_type: DebateType::Debate,
    },
    Category {
        subdir: "westminhall",
        house: House::Commons,
        debate_type: DebateType::WestminsterHall,
    },
];

fn filename_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(?:debates|lords|westminhall)(\d{4})-(\d{2})-(\d{2})")
            .expect("filename date pattern always compiles")
    })
}

/// Derive a sitting date from a transcript file name.
///
/// ParlParse names carry the category tag followed by the sitting date, e.g.
/// `lords2016-03-04a.xml`. Returns `None` when the pattern is absent or the
/// digits do not form a real calendar date; such files are skipped unparsed.
pub fn date_from_filename(path: &Path) -> Option<Date> {
    let name = path.file_name()?.to_str()?;
    let caps = filename_date_re().captures(name)?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u8 = caps[2].parse().ok()?;
    let day: u8 = caps[3].parse().ok()?;
    calendar_date(year, month, day).ok()
}

/// Recursively enumerate `.xml` files under `dir`, sorted by path for
/// deterministic run order.
pub fn xml_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
        })
        .collect();
    files.sort();
    files
}
