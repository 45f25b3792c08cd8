//! chordlib — ChordPro parser and song-sheet HTML rendering library for SongBook.
//!
//! Parses ChordPro source (`{directive}` lines and `[chord]lyric` lines) into
//! a Song model and renders it as an HTML fragment for display in a web view.
//!
//! # Example
//! ```
//! use chordlib::{parse_chordpro, render_song_to_html, RenderOptions};
//!
//! let song = parse_chordpro("{title: Greensleeves}\n[Am]Alas, my love");
//! println!("Title: {:?}", song.title());
//!
//! let html = render_song_to_html(&song, RenderOptions::default());
//! assert!(html.contains("chordpro-verse"));
//! ```

pub mod model;
pub mod parser;
pub mod renderer;

#[cfg(target_os = "android")]
pub mod android;

pub use model::*;
pub use parser::parse_chordpro;
pub use renderer::{render_song_to_html, RenderOptions};

/// Parse ChordPro source text and render it directly to HTML.
/// Convenience function combining parsing and rendering.
pub fn render_text_to_html(source: &str, options: RenderOptions) -> String {
    let song = parse_chordpro(source);
    render_song_to_html(&song, options)
}

/// Convert a parsed song to a JSON string.
/// Useful for passing data across FFI boundaries.
pub fn song_to_json(song: &Song) -> Result<String, String> {
    serde_json::to_string_pretty(song).map_err(|e| format!("JSON serialization error: {e}"))
}

/// Rebuild a song from its JSON representation.
pub fn song_from_json(json: &str) -> Result<Song, String> {
    serde_json::from_str(json).map_err(|e| format!("JSON deserialization error: {e}"))
}

/// Render a JSON-encoded song model to HTML.
/// Convenience function for callers holding a serialized Song.
pub fn render_json_to_html(json: &str, options: RenderOptions) -> Result<String, String> {
    let song = song_from_json(json)?;
    Ok(render_song_to_html(&song, options))
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Parse ChordPro source and return rendered HTML as a C string.
/// The caller must free the returned string with `chordlib_free_string`.
///
/// # Safety
/// `source` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn chordlib_render_text(
    source: *const c_char,
    no_chords: bool,
    french_chords: bool,
) -> *mut c_char {
    if source.is_null() {
        return std::ptr::null_mut();
    }
    let c_str = unsafe { CStr::from_ptr(source) };
    let text = match c_str.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    let options = RenderOptions {
        no_chords,
        french_chords,
    };
    CString::new(render_text_to_html(text, options))
        .unwrap_or_default()
        .into_raw()
}

/// Parse ChordPro source and return the song model as a JSON C string.
/// The caller must free the returned string with `chordlib_free_string`.
///
/// # Safety
/// `source` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn chordlib_parse_text(source: *const c_char) -> *mut c_char {
    if source.is_null() {
        return std::ptr::null_mut();
    }
    let c_str = unsafe { CStr::from_ptr(source) };
    let text = match c_str.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    match song_to_json(&parse_chordpro(text)) {
        Ok(json) => CString::new(json).unwrap_or_default().into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Render a JSON-encoded song model and return HTML as a C string.
/// The caller must free the returned string with `chordlib_free_string`.
///
/// # Safety
/// `json` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn chordlib_render_song_json(
    json: *const c_char,
    no_chords: bool,
    french_chords: bool,
) -> *mut c_char {
    if json.is_null() {
        return std::ptr::null_mut();
    }
    let c_str = unsafe { CStr::from_ptr(json) };
    let text = match c_str.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    let options = RenderOptions {
        no_chords,
        french_chords,
    };
    match render_json_to_html(text, options) {
        Ok(html) => CString::new(html).unwrap_or_default().into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Free a string previously returned by chordlib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a chordlib function, or null.
#[no_mangle]
pub unsafe extern "C" fn chordlib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
