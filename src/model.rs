//! Data model for representing a parsed ChordPro song.
//!
//! These structures capture the line-by-line content of a song sheet —
//! directives, lyric text and the chords sounding over it — in the form
//! the renderer consumes. They are produced once (by this crate's parser,
//! by hand, or by deserializing JSON from an external parser) and are
//! never mutated during rendering.

use serde::{Deserialize, Serialize};

/// A complete song as an ordered sequence of lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Lines in source order; `None` marks a blank line.
    pub lines: Vec<Option<Line>>,
}

/// One line of a song: a directive or lyric content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Line {
    Metadata(Metadata),
    Lyrics(Lyrics),
}

/// A directive line, e.g. `{title: Greensleeves}` or `{start_of_chorus}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Canonical directive name (e.g. "title", "start_of_chorus")
    pub name: String,
    /// Display name for value-bearing directives (e.g. "Title")
    pub label: Option<String>,
    /// Directive argument; absent when the directive carried no `:` part
    pub value: Option<String>,
}

/// A lyric line: an ordered run of chord/text blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lyrics {
    pub blocks: Vec<Block>,
}

/// A unit of lyric text paired with the chord(s) sounding over it.
///
/// `chord` and `french_chord` hold the same chords in letter and solfège
/// spelling; which one is rendered is a global option, not a per-block
/// choice. `None` means the block had no chord marker at all, while an
/// empty list means an empty marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Lyric text for this block (may be empty or absent)
    pub text: Option<String>,
    /// Chord pairs in letter notation (C, F#, Bb, ...)
    pub chord: Option<Vec<Chord>>,
    /// The same pairs with solfège roots (Do, Fa#, Sib, ...)
    pub french_chord: Option<Vec<Chord>>,
}

/// A chord symbol decomposed into root and quality suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord {
    /// Note name, keeping the raw accidental marker: `#` (sharp),
    /// `b` (flat) or `K` (natural)
    pub root: String,
    /// Remaining quality text (e.g. "m7", "maj9", "dim"); may be empty
    pub quality: String,
}

impl Song {
    /// Create a new empty song.
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Value of the first directive with the given canonical name.
    pub fn metadata_value(&self, name: &str) -> Option<&str> {
        self.lines.iter().find_map(|line| match line {
            Some(Line::Metadata(metadata)) if metadata.name == name => {
                metadata.value.as_deref()
            }
            _ => None,
        })
    }

    /// Song title from the `title` directive, if present.
    pub fn title(&self) -> Option<&str> {
        self.metadata_value("title")
    }
}

impl Default for Song {
    fn default() -> Self {
        Self::new()
    }
}

impl Chord {
    /// Create a chord pair from its root and quality parts.
    pub fn new(root: &str, quality: &str) -> Self {
        Self {
            root: root.to_string(),
            quality: quality.to_string(),
        }
    }
}
