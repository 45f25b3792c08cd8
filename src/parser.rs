//! ChordPro parser — converts ChordPro source text into the Song data model.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::*;

static LINE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r|\n").unwrap());
static DIRECTIVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{\s*([^:}]+?)\s*(?::\s*(.*?)\s*)?\}$").unwrap());
static CHORD_MARKER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]*)\]").unwrap());
static CHORD_ROOT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-G][#bK]?)(.*)$").unwrap());

/// Parse ChordPro source text into a Song.
///
/// The parser is line-based and permissive: a line is a blank marker, a
/// `{directive}` or a lyric line, in that order of preference, and no
/// input is rejected. Blank and directive checks ignore surrounding
/// whitespace; lyric lines keep theirs (the renderer decides what to
/// trim).
pub fn parse_chordpro(source: &str) -> Song {
    let mut song = Song::new();

    for raw_line in LINE_SPLIT_RE.split(source) {
        let line = raw_line.trim();
        if line.is_empty() {
            song.lines.push(None);
            continue;
        }
        match parse_directive(line) {
            Some(metadata) => song.lines.push(Some(Line::Metadata(metadata))),
            None => song.lines.push(Some(Line::Lyrics(parse_lyrics(raw_line)))),
        }
    }

    log::debug!("parsed {} source lines", song.lines.len());
    song
}

// ─── Directives ──────────────────────────────────────────────────────

fn parse_directive(line: &str) -> Option<Metadata> {
    let caps = DIRECTIVE_RE.captures(line)?;
    let raw_name = caps.get(1).map_or("", |m| m.as_str());
    let value = caps.get(2).map(|m| m.as_str().to_string());

    // Lowercase and join internal whitespace so "Start of Chorus" and
    // "start_of_chorus" are the same directive.
    let normalized = raw_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase();
    let (name, label) = directive_identity(&normalized);

    Some(Metadata {
        name: name.to_string(),
        label: label.map(String::from),
        value,
    })
}

/// Canonical name and display label for a normalized directive name.
/// Section markers and unknown directives carry no label.
fn directive_identity(name: &str) -> (&str, Option<&'static str>) {
    match name {
        "t" | "title" => ("title", Some("Title")),
        "st" | "subtitle" => ("subtitle", Some("Subtitle")),
        "artist" => ("artist", Some("Artist")),
        "composer" => ("composer", Some("Composer")),
        "lyricist" => ("lyricist", Some("Lyricist")),
        "album" => ("album", Some("Album")),
        "year" => ("year", Some("Year")),
        "key" => ("key", Some("Key")),
        "capo" => ("capo", Some("Capo")),
        "tempo" => ("tempo", Some("Tempo")),
        "time" => ("time", Some("Time")),
        "duration" => ("duration", Some("Duration")),
        "copyright" => ("copyright", Some("Copyright")),
        "c" | "comment" => ("comment", Some("Comment")),
        "soc" | "start_of_chorus" => ("start_of_chorus", None),
        "eoc" | "end_of_chorus" => ("end_of_chorus", None),
        "sov" | "start_of_verse" => ("start_of_verse", None),
        "eov" | "end_of_verse" => ("end_of_verse", None),
        "sob" | "start_of_bridge" => ("start_of_bridge", None),
        "eob" | "end_of_bridge" => ("end_of_bridge", None),
        "sot" | "start_of_tab" => ("start_of_tab", None),
        "eot" | "end_of_tab" => ("end_of_tab", None),
        other => (other, None),
    }
}

// ─── Lyric lines ─────────────────────────────────────────────────────

fn parse_lyrics(line: &str) -> Lyrics {
    let mut blocks = Vec::new();
    let markers: Vec<regex::Captures> = CHORD_MARKER_RE.captures_iter(line).collect();

    if markers.is_empty() {
        blocks.push(Block {
            text: Some(line.to_string()),
            chord: None,
            french_chord: None,
        });
        return Lyrics { blocks };
    }

    // Text before the first marker sings without a chord.
    if let Some(first) = markers[0].get(0) {
        if first.start() > 0 {
            blocks.push(Block {
                text: Some(line[..first.start()].to_string()),
                chord: None,
                french_chord: None,
            });
        }
    }

    for (i, caps) in markers.iter().enumerate() {
        let marker = match caps.get(0) {
            Some(m) => m,
            None => continue,
        };
        let symbols = caps.get(1).map_or("", |m| m.as_str());
        let text_end = markers
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(line.len(), |next| next.start());

        let (chord, french_chord) = parse_chord_marker(symbols);
        blocks.push(Block {
            text: Some(line[marker.end()..text_end].to_string()),
            chord: Some(chord),
            french_chord: Some(french_chord),
        });
    }

    Lyrics { blocks }
}

// ─── Chord symbols ───────────────────────────────────────────────────

/// Split a marker's content into English and French chord-pair lists.
/// Alternatives are separated with `/`; empty segments are skipped, so
/// `[]` yields empty lists.
fn parse_chord_marker(symbols: &str) -> (Vec<Chord>, Vec<Chord>) {
    let mut chords = Vec::new();
    let mut french_chords = Vec::new();

    for symbol in symbols.split('/') {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            continue;
        }
        let (root, quality) = split_chord_symbol(symbol);
        french_chords.push(Chord {
            root: french_root(&root),
            quality: quality.clone(),
        });
        chords.push(Chord { root, quality });
    }

    (chords, french_chords)
}

// Root is a note letter A..G plus an optional accidental marker (#, b,
// or K for natural); the rest is the quality. A symbol outside that
// grammar degrades to a bare root with empty quality.
fn split_chord_symbol(symbol: &str) -> (String, String) {
    match CHORD_ROOT_RE.captures(symbol) {
        Some(caps) => (
            caps.get(1).map_or("", |m| m.as_str()).to_string(),
            caps.get(2).map_or("", |m| m.as_str()).to_string(),
        ),
        None => (symbol.to_string(), String::new()),
    }
}

// Letter root to solfège name, keeping any accidental marker.
fn french_root(root: &str) -> String {
    let mut chars = root.chars();
    let name = match chars.next() {
        Some('A') => "La",
        Some('B') => "Si",
        Some('C') => "Do",
        Some('D') => "Ré",
        Some('E') => "Mi",
        Some('F') => "Fa",
        Some('G') => "Sol",
        _ => return root.to_string(),
    };
    format!("{name}{}", chars.as_str())
}
