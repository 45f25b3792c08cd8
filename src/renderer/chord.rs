//! Chord and lyric block rendering — the chordpro-verse side of the output.
//!
//! Each block of a lyric line becomes a chord span paired with a text
//! span. The chord quality is split around its leading major/minor token
//! so extensions render as superscript, then raw accidental markers are
//! swapped for display glyphs.

use crate::model::{Block, Chord, Lyrics};

// Accidental display glyphs, emitted as numeric character references.
const SHARP_SYMBOL: &str = "&#9839;"; // ♯
const FLAT_SYMBOL: &str = "&#9837;"; // ♭
const NATURAL_SYMBOL: &str = "&#9838;"; // ♮

const OPEN_VERSE_TAG: &str = "<div class=\"chordpro-verse\">";
const CLOSE_VERSE_TAG: &str = "</div>";

// ═══════════════════════════════════════════════════════════════════════
// Quality classification
// ═══════════════════════════════════════════════════════════════════════

/// Where the major/minor token sits in a chord quality string.
///
/// Probed in declaration order; the first match wins, so a quality that
/// could satisfy several rules takes the most specific one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QualitySplit {
    /// `maj` at offset 0 (e.g. "maj7").
    Major,
    /// A single alteration character, then `maj` at offset 1 (e.g. "bmaj7").
    MajorAltered,
    /// `m` at offset 0 (e.g. "m7").
    Minor,
    /// A single alteration character, then `m` at offset 1 (e.g. "#m7").
    MinorAltered,
    /// No leading major/minor token; the whole quality goes superscript.
    Plain,
}

/// Byte offset of the `n`-th character of `s`, or `s.len()` past the end.
///
/// Keeps the fixed-offset slices below on char boundaries even when the
/// quality text contains multi-byte characters.
fn char_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

/// Classify a quality string against the major/minor cascade.
///
/// Comparison is ASCII-case-insensitive; the offsets are character
/// offsets 0 and 1, nothing deeper is searched.
fn classify_quality(quality: &str) -> QualitySplit {
    let c1 = char_offset(quality, 1);
    let c2 = char_offset(quality, 2);
    let c3 = char_offset(quality, 3);
    let c4 = char_offset(quality, 4);

    if quality[..c3].eq_ignore_ascii_case("maj") {
        QualitySplit::Major
    } else if quality[c1..c4].eq_ignore_ascii_case("maj") {
        QualitySplit::MajorAltered
    } else if quality[..c1].eq_ignore_ascii_case("m") {
        QualitySplit::Minor
    } else if quality[c1..c2].eq_ignore_ascii_case("m") {
        QualitySplit::MinorAltered
    } else {
        QualitySplit::Plain
    }
}

/// Decorate one chord pair: baseline root and major/minor token, with the
/// remaining quality text in `<sup>` spans. Slices keep the original
/// casing; only the classification comparison is case-folded. The `<sup>`
/// pair is emitted even when its content is empty.
fn decorate_chord(chord: &Chord) -> String {
    let root = &chord.root;
    let q = chord.quality.as_str();

    match classify_quality(q) {
        QualitySplit::Major => {
            let cut = char_offset(q, 3);
            format!("{root}{}<sup>{}</sup>", &q[..cut], &q[cut..])
        }
        QualitySplit::MajorAltered => {
            let alt = char_offset(q, 1);
            let cut = char_offset(q, 4);
            format!(
                "{root}<sup>{}</sup>{}<sup>{}</sup>",
                &q[..alt],
                &q[alt..cut],
                &q[cut..]
            )
        }
        QualitySplit::Minor => {
            let cut = char_offset(q, 1);
            format!("{root}{}<sup>{}</sup>", &q[..cut], &q[cut..])
        }
        QualitySplit::MinorAltered => {
            let alt = char_offset(q, 1);
            let cut = char_offset(q, 2);
            format!(
                "{root}<sup>{}</sup>{}<sup>{}</sup>",
                &q[..alt],
                &q[alt..cut],
                &q[cut..]
            )
        }
        QualitySplit::Plain => format!("{root}<sup>{q}</sup>"),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Block and verse markup
// ═══════════════════════════════════════════════════════════════════════

/// Build the chord-span content for one block: decorate each pair, join
/// alternatives with `/`, then swap accidental markers for glyphs.
fn block_chord_html(block: &Block, french_chords: bool) -> String {
    let pairs = if french_chords {
        block.french_chord.as_deref()
    } else {
        block.chord.as_deref()
    };

    let decorated: Vec<String> = pairs
        .unwrap_or_default()
        .iter()
        .map(decorate_chord)
        .collect();

    // Marker order matters: the sharp entity itself contains `#`, so the
    // sharp pass must run before the flat/natural entities are inserted.
    decorated
        .join("/")
        .replace('#', SHARP_SYMBOL)
        .replace('b', FLAT_SYMBOL)
        .replace('K', NATURAL_SYMBOL)
}

/// Render a lyric line with chords: one chordpro-elem per block inside a
/// single chordpro-verse container. The template's literal newlines and
/// indentation are part of the output.
pub(super) fn render_lyrics(lyrics: &Lyrics, french_chords: bool) -> String {
    let mut verse = String::from(OPEN_VERSE_TAG);
    for block in &lyrics.blocks {
        let chord = block_chord_html(block, french_chords);
        let text = block.text.as_deref().unwrap_or("").trim();
        verse.push_str(&format!(
            "<span class=\"chordpro-elem\">\n              \
             <span class=\"chordpro-chord\">{chord}</span>\n              \
             <span class=\"chordpro-text\">{text}&nbsp;</span>\n            \
             </span>"
        ));
    }
    verse.push_str(CLOSE_VERSE_TAG);
    verse
}

/// Render a lyric line without any chord markup ("lyrics only" mode).
/// Block text keeps everything but its leading whitespace.
pub(super) fn render_lyrics_text_only(lyrics: &Lyrics) -> String {
    let mut verse = String::from(OPEN_VERSE_TAG);
    for block in &lyrics.blocks {
        verse.push_str(block.text.as_deref().unwrap_or("").trim_start());
    }
    verse.push_str(CLOSE_VERSE_TAG);
    verse
}
