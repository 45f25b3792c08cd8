//! Integration tests — parse ChordPro sources and check the Song model.

use chordlib::{parse_chordpro, Block, Line, Song};

const GREENSLEEVES: &str = "\
{title: Greensleeves}
{artist: Traditional}
{key: Am}
{time: 6/8}

[Am]Alas, my [C]love, you [G]do me [Em]wrong
To [Am]cast me [C]off dis[E]courteously[E7]
{soc: Chorus}
[C]Greensleeves was [G]all my joy
{eoc}";

// ─── Full song ──────────────────────────────────────────────────────

#[test]
fn parse_greensleeves() {
    let song = parse_chordpro(GREENSLEEVES);

    assert_song_greensleeves(&song);
}

fn assert_song_greensleeves(song: &Song) {
    // 4 directives, 1 blank, 2 verse lines, chorus open, 1 line, chorus close
    assert_eq!(song.lines.len(), 10);

    // Metadata
    assert_eq!(song.title(), Some("Greensleeves"));
    assert_eq!(song.metadata_value("artist"), Some("Traditional"));
    assert_eq!(song.metadata_value("key"), Some("Am"));
    assert_eq!(song.metadata_value("time"), Some("6/8"));
    assert_eq!(song.metadata_value("capo"), None);

    let title = match &song.lines[0] {
        Some(Line::Metadata(m)) => m,
        other => panic!("Expected title metadata, got {other:?}"),
    };
    assert_eq!(title.name, "title");
    assert_eq!(title.label.as_deref(), Some("Title"));
    assert_eq!(title.value.as_deref(), Some("Greensleeves"));

    // Blank line becomes a None marker
    assert!(song.lines[4].is_none(), "Blank line should parse to None");

    // First verse line: four chorded blocks, no leading chordless block
    let verse = match &song.lines[5] {
        Some(Line::Lyrics(l)) => l,
        other => panic!("Expected lyrics, got {other:?}"),
    };
    assert_eq!(verse.blocks.len(), 4);
    assert_block(&verse.blocks[0], Some("Alas, my "), &[("A", "m")]);
    assert_block(&verse.blocks[1], Some("love, you "), &[("C", "")]);
    assert_block(&verse.blocks[2], Some("do me "), &[("G", "")]);
    assert_block(&verse.blocks[3], Some("wrong"), &[("E", "m")]);

    // Second verse line starts with chordless text; last marker has no text
    let verse = match &song.lines[6] {
        Some(Line::Lyrics(l)) => l,
        other => panic!("Expected lyrics, got {other:?}"),
    };
    assert_eq!(verse.blocks.len(), 5);
    assert_eq!(verse.blocks[0].text.as_deref(), Some("To "));
    assert!(verse.blocks[0].chord.is_none());
    assert!(verse.blocks[0].french_chord.is_none());
    assert_block(&verse.blocks[4], Some(""), &[("E", "7")]);

    // Chorus markers canonicalize from their aliases
    let soc = match &song.lines[7] {
        Some(Line::Metadata(m)) => m,
        other => panic!("Expected chorus start, got {other:?}"),
    };
    assert_eq!(soc.name, "start_of_chorus");
    assert_eq!(soc.label, None);
    assert_eq!(soc.value.as_deref(), Some("Chorus"));

    let eoc = match &song.lines[9] {
        Some(Line::Metadata(m)) => m,
        other => panic!("Expected chorus end, got {other:?}"),
    };
    assert_eq!(eoc.name, "end_of_chorus");
    assert_eq!(eoc.value, None);

    println!("✓ Greensleeves parsed successfully");
    println!("  Title: {:?}", song.title());
    println!("  Lines: {}", song.lines.len());
}

fn assert_block(block: &Block, text: Option<&str>, pairs: &[(&str, &str)]) {
    assert_eq!(block.text.as_deref(), text);
    let chords = block.chord.as_deref().expect("Block should carry chords");
    assert_eq!(chords.len(), pairs.len());
    for (chord, &(root, quality)) in chords.iter().zip(pairs) {
        assert_eq!(chord.root, root);
        assert_eq!(chord.quality, quality);
    }
}

// ─── Directives ─────────────────────────────────────────────────────

#[test]
fn directive_aliases_canonicalize() {
    let song = parse_chordpro("{t: My Song}\n{st: A subtitle}\n{c: play softly}");

    let names: Vec<(&str, Option<&str>, Option<&str>)> = song
        .lines
        .iter()
        .map(|line| match line {
            Some(Line::Metadata(m)) => {
                (m.name.as_str(), m.label.as_deref(), m.value.as_deref())
            }
            other => panic!("Expected metadata, got {other:?}"),
        })
        .collect();

    assert_eq!(
        names,
        vec![
            ("title", Some("Title"), Some("My Song")),
            ("subtitle", Some("Subtitle"), Some("A subtitle")),
            ("comment", Some("Comment"), Some("play softly")),
        ]
    );
}

#[test]
fn directive_names_normalize_case_and_spaces() {
    let song = parse_chordpro("{Start Of Chorus}\n{TITLE: Loud}");

    match &song.lines[0] {
        Some(Line::Metadata(m)) => assert_eq!(m.name, "start_of_chorus"),
        other => panic!("Expected metadata, got {other:?}"),
    }
    match &song.lines[1] {
        Some(Line::Metadata(m)) => {
            assert_eq!(m.name, "title");
            assert_eq!(m.value.as_deref(), Some("Loud"));
        }
        other => panic!("Expected metadata, got {other:?}"),
    }
}

#[test]
fn unknown_directives_pass_through_without_label() {
    let song = parse_chordpro("{x_my_meta: 42}");

    match &song.lines[0] {
        Some(Line::Metadata(m)) => {
            assert_eq!(m.name, "x_my_meta");
            assert_eq!(m.label, None);
            assert_eq!(m.value.as_deref(), Some("42"));
        }
        other => panic!("Expected metadata, got {other:?}"),
    }
}

#[test]
fn directive_value_presence_depends_on_the_colon() {
    let song = parse_chordpro("{soc}\n{soc:}\n{soc: }");

    let values: Vec<Option<&str>> = song
        .lines
        .iter()
        .map(|line| match line {
            Some(Line::Metadata(m)) => m.value.as_deref(),
            other => panic!("Expected metadata, got {other:?}"),
        })
        .collect();

    // No colon → no value; a colon always yields one, possibly empty.
    assert_eq!(values, vec![None, Some(""), Some("")]);
}

#[test]
fn section_markers_all_canonicalize() {
    let source = "{sov}\n{eov}\n{sob}\n{eob}\n{sot}\n{eot}";
    let song = parse_chordpro(source);

    let names: Vec<&str> = song
        .lines
        .iter()
        .map(|line| match line {
            Some(Line::Metadata(m)) => m.name.as_str(),
            other => panic!("Expected metadata, got {other:?}"),
        })
        .collect();

    assert_eq!(
        names,
        vec![
            "start_of_verse",
            "end_of_verse",
            "start_of_bridge",
            "end_of_bridge",
            "start_of_tab",
            "end_of_tab",
        ]
    );
}

// ─── Chord markers ──────────────────────────────────────────────────

#[test]
fn slash_chords_split_into_ordered_pairs() {
    let song = parse_chordpro("[Am7/G]down");

    let block = first_block(&song);
    let chords = block.chord.as_deref().unwrap();
    assert_eq!(chords.len(), 2);
    assert_eq!((chords[0].root.as_str(), chords[0].quality.as_str()), ("A", "m7"));
    assert_eq!((chords[1].root.as_str(), chords[1].quality.as_str()), ("G", ""));
}

#[test]
fn accidental_markers_stay_in_the_root() {
    let song = parse_chordpro("[F#m]x [Bb]y [FK]z");

    let lyrics = match &song.lines[0] {
        Some(Line::Lyrics(l)) => l,
        other => panic!("Expected lyrics, got {other:?}"),
    };
    let roots: Vec<&str> = lyrics
        .blocks
        .iter()
        .filter_map(|b| b.chord.as_deref())
        .flat_map(|chords| chords.iter().map(|c| c.root.as_str()))
        .collect();
    assert_eq!(roots, vec!["F#", "Bb", "FK"]);
}

#[test]
fn french_pairs_translate_the_root_letter() {
    let song = parse_chordpro("[A]1 [B]2 [C]3 [D]4 [E]5 [F]6 [G]7");

    let lyrics = match &song.lines[0] {
        Some(Line::Lyrics(l)) => l,
        other => panic!("Expected lyrics, got {other:?}"),
    };
    let french: Vec<&str> = lyrics
        .blocks
        .iter()
        .filter_map(|b| b.french_chord.as_deref())
        .flat_map(|chords| chords.iter().map(|c| c.root.as_str()))
        .collect();
    assert_eq!(french, vec!["La", "Si", "Do", "Ré", "Mi", "Fa", "Sol"]);
}

#[test]
fn french_pairs_keep_accidental_and_quality() {
    let song = parse_chordpro("[F#m7]");

    let block = first_block(&song);
    let french = block.french_chord.as_deref().unwrap();
    assert_eq!(french[0].root, "Fa#");
    assert_eq!(french[0].quality, "m7");
}

#[test]
fn empty_marker_yields_empty_chord_lists() {
    let song = parse_chordpro("[]instrumental");

    let block = first_block(&song);
    assert_eq!(block.text.as_deref(), Some("instrumental"));
    assert_eq!(block.chord.as_deref(), Some(&[][..]));
    assert_eq!(block.french_chord.as_deref(), Some(&[][..]));
}

#[test]
fn non_note_symbols_degrade_to_bare_roots() {
    let song = parse_chordpro("[N.C.]spoken");

    let block = first_block(&song);
    let chords = block.chord.as_deref().unwrap();
    assert_eq!(chords[0].root, "N.C.");
    assert_eq!(chords[0].quality, "");
}

fn first_block(song: &Song) -> &Block {
    match &song.lines[0] {
        Some(Line::Lyrics(l)) => &l.blocks[0],
        other => panic!("Expected lyrics, got {other:?}"),
    }
}

// ─── Line handling ──────────────────────────────────────────────────

#[test]
fn mixed_line_endings_split_the_same() {
    let song = parse_chordpro("one\r\ntwo\rthree\nfour");

    assert_eq!(song.lines.len(), 4);
    for line in &song.lines {
        assert!(matches!(line, Some(Line::Lyrics(_))));
    }
}

#[test]
fn blank_and_whitespace_lines_become_none() {
    let song = parse_chordpro("a\n\n   \nb");

    assert_eq!(song.lines.len(), 4);
    assert!(song.lines[1].is_none());
    assert!(song.lines[2].is_none());
}

#[test]
fn trailing_newline_yields_a_trailing_blank() {
    let song = parse_chordpro("last line\n");

    assert_eq!(song.lines.len(), 2);
    assert!(song.lines[1].is_none());
}

#[test]
fn directives_tolerate_surrounding_whitespace() {
    let song = parse_chordpro("   { title :  Spaced Out  }   ");

    match &song.lines[0] {
        Some(Line::Metadata(m)) => {
            assert_eq!(m.name, "title");
            assert_eq!(m.value.as_deref(), Some("Spaced Out"));
        }
        other => panic!("Expected metadata, got {other:?}"),
    }
}

#[test]
fn lyric_lines_keep_their_whitespace() {
    let song = parse_chordpro("  indented [C]line  ");

    let lyrics = match &song.lines[0] {
        Some(Line::Lyrics(l)) => l,
        other => panic!("Expected lyrics, got {other:?}"),
    };
    assert_eq!(lyrics.blocks[0].text.as_deref(), Some("  indented "));
    assert_eq!(lyrics.blocks[1].text.as_deref(), Some("line  "));
}

#[test]
fn unmatched_braces_fall_back_to_lyrics() {
    let song = parse_chordpro("{not a directive\nplain {inner} text");

    for line in &song.lines {
        assert!(matches!(line, Some(Line::Lyrics(_))), "got {line:?}");
    }
}

// ─── JSON serialization ─────────────────────────────────────────────

#[test]
fn song_json_roundtrip() {
    let song = parse_chordpro(GREENSLEEVES);
    let json = chordlib::song_to_json(&song).expect("Should serialize to JSON");

    let deserialized = chordlib::song_from_json(&json).expect("Should deserialize from JSON");
    assert_eq!(deserialized, song);
}

#[test]
fn song_from_json_rejects_malformed_input() {
    let err = chordlib::song_from_json("{not json").unwrap_err();
    assert!(err.contains("JSON"), "unexpected error: {err}");
}
