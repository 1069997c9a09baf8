use serde::Deserialize;

/// One decoded page of the Kokkai speech search response.
///
/// The server omits `speechRecord` entirely on zero-hit pages and sends
/// `nextRecordPosition` as null (or not at all) on the last page, so every
/// field is lenient about absence.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpeechPage {
    #[serde(rename = "numberOfRecords", default)]
    pub number_of_records: u64,
    #[serde(rename = "speechRecord", default)]
    pub speech_record: Vec<ApiSpeechRecord>,
    #[serde(rename = "nextRecordPosition", default)]
    pub next_record_position: Option<u64>,
}

/// One record entry within a page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiSpeechRecord {
    #[serde(rename = "speechID", default)]
    pub speech_id: String,
    #[serde(default)]
    pub speech: String,
}
