//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JString};
use jni::sys::{jboolean, jstring};
use jni::JNIEnv;

use crate::{render_json_to_html, render_text_to_html, RenderOptions};

/// Render ChordPro source text to HTML.
///
/// Called from Kotlin as:
///   external fun renderText(source: String, noChords: Boolean, frenchChords: Boolean): String?
#[no_mangle]
pub extern "system" fn Java_com_songbook_app_ChordLib_renderText(
    mut env: JNIEnv,
    _class: JClass,
    source: JString,
    no_chords: jboolean,
    french_chords: jboolean,
) -> jstring {
    let text: String = match env.get_string(&source) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    let options = RenderOptions {
        no_chords: no_chords != 0,
        french_chords: french_chords != 0,
    };

    match env.new_string(render_text_to_html(&text, options)) {
        Ok(js) => js.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Render a JSON-encoded song model to HTML.
///
/// Called from Kotlin as:
///   external fun renderSongJson(json: String, noChords: Boolean, frenchChords: Boolean): String?
#[no_mangle]
pub extern "system" fn Java_com_songbook_app_ChordLib_renderSongJson(
    mut env: JNIEnv,
    _class: JClass,
    json: JString,
    no_chords: jboolean,
    french_chords: jboolean,
) -> jstring {
    let json_str: String = match env.get_string(&json) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    let options = RenderOptions {
        no_chords: no_chords != 0,
        french_chords: french_chords != 0,
    };

    match render_json_to_html(&json_str, options) {
        Ok(html) => match env.new_string(&html) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(_) => std::ptr::null_mut(),
    }
}
