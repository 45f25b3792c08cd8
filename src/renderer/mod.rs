//! Song renderer — converts a parsed Song into an HTML fragment.
//!
//! The fragment is flat (no document shell): metadata lines become
//! labelled divs or section wrappers, lyric lines become chordpro-verse
//! blocks, and blank source lines become `<br />`. Styling is left to
//! the embedding page's stylesheet.

mod chord;
mod section;

use crate::model::{Line, Song};

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Output controls for [`render_song_to_html`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Suppress all chord markup and emit lyrics only.
    pub no_chords: bool,
    /// Emit French chord names (Do, Ré, Mi…) instead of letter names.
    /// Ignored when `no_chords` is set.
    pub french_chords: bool,
}

/// Render a parsed Song into an HTML fragment.
///
/// Lines render in source order; the output concatenates one piece of
/// markup per line with no separators of its own.
pub fn render_song_to_html(song: &Song, options: RenderOptions) -> String {
    let mut html = String::new();
    for line in &song.lines {
        match line {
            None => html.push_str("<br />"),
            Some(Line::Metadata(metadata)) => html.push_str(&section::render_metadata(metadata)),
            Some(Line::Lyrics(lyrics)) => {
                let rendered = if options.no_chords {
                    chord::render_lyrics_text_only(lyrics)
                } else {
                    chord::render_lyrics(lyrics, options.french_chords)
                };
                html.push_str(&rendered);
            }
        }
    }

    log::debug!("rendered {} lines into {} bytes of html", song.lines.len(), html.len());
    html
}
