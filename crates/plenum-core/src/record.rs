use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use time::Date;

/// One row of a speeches table: DocID plus extracted plain text.
///
/// Invariants: `id` is unique within a single output, `text` is non-empty
/// after trimming. Both pipelines produce this shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpeechRow {
    pub id: String,
    pub text: String,
}

impl SpeechRow {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Chamber a speech was delivered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum House {
    Commons,
    Lords,
}

impl House {
    pub fn as_str(self) -> &'static str {
        match self {
            House::Commons => "Commons",
            House::Lords => "Lords",
        }
    }
}

/// Sitting type a transcript category maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DebateType {
    Debate,
    WestminsterHall,
}

impl DebateType {
    pub fn as_str(self) -> &'static str {
        match self {
            DebateType::Debate => "Debate",
            DebateType::WestminsterHall => "Westminster Hall",
        }
    }
}

/// Speaker and sitting metadata for one kept speech.
///
/// One-to-one with a [`SpeechRow`] by id and position; created in the same
/// filtering pass and never mutated afterward. `member`, `party` and
/// `heading` may be empty when the source element carries no attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaRow {
    pub id: String,
    pub date: Date,
    pub house: House,
    pub member: String,
    pub party: String,
    pub debate_type: DebateType,
    pub heading: String,
    pub file: PathBuf,
}
