use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// One `<speech>` element lifted out of a transcript document.
///
/// Attribute fallbacks follow the ParlParse convention: `id` else `ids`,
/// `speakername` else `speaker`, `speakerparty` else `party`. Empty
/// attribute values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeechUnit {
    pub id: Option<String>,
    pub member: Option<String>,
    pub party: Option<String>,
    pub heading: Option<String>,
    pub text: String,
}

fn attr_value(element: &BytesStart<'_>, name: &[u8]) -> Option<String> {
    element
        .attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == name)
        .and_then(|attr| attr.unescape_value().ok().map(|v| v.into_owned()))
        .filter(|value| !value.is_empty())
}

fn unit_from_attrs(element: &BytesStart<'_>) -> SpeechUnit {
    SpeechUnit {
        id: attr_value(element, b"id").or_else(|| attr_value(element, b"ids")),
        member: attr_value(element, b"speakername").or_else(|| attr_value(element, b"speaker")),
        party: attr_value(element, b"speakerparty").or_else(|| attr_value(element, b"party")),
        heading: attr_value(element, b"heading"),
        text: String::new(),
    }
}

/// Extract every `<speech>` element from an XML document, in document order.
///
/// Text is the whole textual content of the element: each fragment is
/// whitespace-trimmed, empty fragments are dropped, and the rest are joined
/// by single spaces, so inter-element whitespace collapses. Markup nested
/// inside a speech contributes its text to the enclosing unit.
pub fn speech_units(xml: &str) -> Result<Vec<SpeechUnit>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut units = Vec::new();
    let mut current: Option<SpeechUnit> = None;
    let mut words: Vec<String> = Vec::new();
    let mut depth: usize = 0;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if e.local_name().as_ref() == b"speech" {
                    if depth == 0 {
                        current = Some(unit_from_attrs(&e));
                        words.clear();
                    }
                    depth += 1;
                }
            }
            Event::Empty(e) => {
                if e.local_name().as_ref() == b"speech" && depth == 0 {
                    units.push(unit_from_attrs(&e));
                }
            }
            Event::Text(t) => {
                if depth > 0 {
                    if let Ok(text) = t.unescape() {
                        words.extend(text.split_whitespace().map(str::to_owned));
                    }
                }
            }
            Event::CData(t) => {
                if depth > 0 {
                    let text = String::from_utf8_lossy(&t);
                    words.extend(text.split_whitespace().map(str::to_owned));
                }
            }
            Event::End(e) => {
                if e.local_name().as_ref() == b"speech" && depth > 0 {
                    depth -= 1;
                    if depth == 0 {
                        if let Some(mut unit) = current.take() {
                            unit.text = words.join(" ");
                            words.clear();
                            units.push(unit);
                        }
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(units)
}
