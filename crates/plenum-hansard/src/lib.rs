pub mod filter;
pub mod scan;
pub mod xml;

pub use filter::{run_filter, CorpusError, FilterConfig, FilterOutput, FilterStats};
pub use scan::{date_from_filename, Category, CATEGORIES};
pub use xml::{speech_units, SpeechUnit};
