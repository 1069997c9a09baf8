use anyhow::bail;
use regex::Regex;

/// Default term set for cybersecurity collection runs.
pub const CYBER_TERMS: &[&str] = &["cyber", "cybersecurity", "cyber security"];

/// Case-insensitive, word-bounded matcher over a fixed set of terms.
///
/// Single-word terms match only as standalone words (`cyber` does not match
/// inside `cyberspace`); multi-word terms match as literal phrases with word
/// boundaries at both ends. Terms are alternatives: any one match keeps the
/// text. The pattern is compiled once per run and evaluated per text.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    re: Regex,
}

impl KeywordMatcher {
    pub fn new(terms: &[&str]) -> anyhow::Result<Self> {
        if terms.is_empty() {
            bail!("keyword matcher requires at least one term");
        }
        let alternation = terms
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");
        let re = Regex::new(&format!(r"(?i)\b(?:{alternation})\b"))?;
        Ok(Self { re })
    }

    /// Matcher for the built-in cybersecurity term set.
    pub fn cyber() -> Self {
        Self::new(CYBER_TERMS).expect("built-in terms always compile")
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.re.is_match(text)
    }
}
