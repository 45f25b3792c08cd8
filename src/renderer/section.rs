//! Metadata and section rendering — directive lines become labelled divs
//! or section wrappers.
//!
//! `start_of_X` / `end_of_X` directives delimit nested regions (verse,
//! chorus, bridge, tab). The chorus pair is fully special-cased; every
//! other directive renders as a labelled div, gaining a section wrapper
//! when its name carries a start/end marker.

use crate::model::Metadata;

const OPEN_SECTION_TAG: &str = "<div class=\"chordpro-section\">";
const CLOSE_SECTION_TAG: &str = "</div>";

/// Render one metadata line to HTML.
///
/// Pairing is the caller's problem: each `start_of_chorus` leaves two
/// divs open and trusts a later `end_of_chorus` to close them.
pub(super) fn render_metadata(metadata: &Metadata) -> String {
    match metadata.name.as_str() {
        "start_of_chorus" => {
            let comment = match metadata.value.as_deref() {
                Some(value) => format!("<div class=\"chordpro-chorus-comment\">{value}</div>"),
                None => String::new(),
            };
            format!("{OPEN_SECTION_TAG}{comment}<div class=\"chordpro-chorus\">")
        }
        "end_of_chorus" => format!("</div>{CLOSE_SECTION_TAG}"),
        name => {
            let mut content = String::new();
            if name.contains("start_of_") {
                content.push_str(OPEN_SECTION_TAG);
            }
            let label = metadata.label.as_deref().unwrap_or("");
            let value = metadata.value.as_deref().unwrap_or("");
            content.push_str(&format!(
                "<div class=\"chordpro-{name}\"><span class=\"chordpro-label\">{label}</span>{value}</div>",
            ));
            if name.contains("end_of_") {
                content.push_str(CLOSE_SECTION_TAG);
            }
            content
        }
    }
}
