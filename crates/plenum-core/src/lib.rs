pub mod dates;
pub mod keyword;
pub mod record;
pub mod table;

pub use dates::{parse_iso_date, DateWindow};
pub use keyword::KeywordMatcher;
pub use record::{DebateType, House, MetaRow, SpeechRow};
