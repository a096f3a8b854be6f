//! Language tag normalization.
//!
//! Container metadata and user filters spell languages in many ways: ISO 639-1
//! codes (`en`), ISO 639-2 codes (`eng`), or English names (`english`). All of
//! them are folded into one display name so filters and tracks can be compared
//! with plain string equality.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Display name for tracks without a usable language tag.
pub const UNDETERMINED: &str = "Undetermined";

/// Tag used by containers for tracks without a language.
pub const UNDETERMINED_TAG: &str = "und";

/// (display name, spellings) pairs. Spellings are lowercase.
const LANGUAGES: &[(&str, &[&str])] = &[
    ("Afrikaans", &["af", "afrikaans"]),
    ("Amharic", &["am", "amh", "amharic"]),
    ("Arabic", &["ar", "ara", "arabic"]),
    ("Azerbaijani", &["az", "aze", "azerbaijani"]),
    ("Belarusian", &["be", "bel", "belarusian"]),
    ("Bulgarian", &["bg", "bul", "bulgarian"]),
    ("Bengali", &["bn", "ben", "bengali"]),
    ("Bosnian", &["bs", "bos", "bosnian"]),
    ("Corsican", &["co", "cos", "corsican"]),
    ("Czech", &["cs", "cze", "czech"]),
    ("Danish", &["da", "dan", "danish"]),
    ("German", &["de", "deu", "german", "deutsch"]),
    ("Greek", &["el", "gre", "greek"]),
    ("English", &["en", "eng", "english"]),
    ("Spanish", &["es", "spa", "spanish"]),
    ("Estonian", &["et", "est", "estonian"]),
    ("Basque", &["eu", "baq", "basque"]),
    ("Persian", &["fa", "per", "persian"]),
    ("Finnish", &["fi", "fin", "finnish"]),
    ("Filipino", &["fil", "filipino"]),
    ("French", &["fr", "fra", "french"]),
    ("Hebrew", &["he", "heb", "hebrew"]),
    ("Hindi", &["hi", "hin", "hindi"]),
    ("Croatian", &["hr", "hrv", "croatian"]),
    ("Hungarian", &["hu", "hun", "hungarian"]),
    ("Armenian", &["hy", "arm", "armenian"]),
    ("Indonesian", &["id", "ind", "indonesian"]),
    ("Italian", &["it", "ita", "italian"]),
    ("Japanese", &["ja", "jpn", "japanese"]),
    ("Korean", &["ko", "kor", "korean"]),
    ("Lithuanian", &["lt", "lit", "lithuanian"]),
    ("Latvian", &["lv", "lav", "latvian"]),
    ("Malay", &["ms", "may", "malay"]),
    ("Dutch", &["nl", "dut", "dutch"]),
    ("Norwegian", &["no", "nor", "norwegian"]),
    ("Chichewa", &["ny", "nya", "chichewa"]),
    ("Polish", &["pl", "pol", "polish"]),
    ("Portuguese", &["pt", "por", "portuguese"]),
    ("Romanian", &["ro", "rum", "romanian"]),
    ("Russian", &["ru", "rus", "russian"]),
    ("Slovak", &["sk", "slo", "slovak"]),
    ("Slovenian", &["sl", "slv", "slovenian"]),
    ("Albanian", &["sq", "alb", "albanian"]),
    ("Serbian", &["sr", "srb", "serbian"]),
    ("Swedish", &["sv", "swe", "swedish"]),
    ("Tamil", &["ta", "tam", "tamil"]),
    ("Thai", &["th", "tha", "thai"]),
    ("Turkish", &["tr", "tur", "turkish"]),
    ("Ukrainian", &["uk", "ukr", "ukrainian"]),
    ("Urdu", &["ur", "urd", "urdu"]),
    ("Vietnamese", &["vi", "vie", "vietnamese"]),
    ("Chinese (Simplified)", &["zh-cn"]),
    ("Chinese (Traditional)", &["zh-tw"]),
    ("Chinese", &["zh", "chi", "chinese"]),
    (UNDETERMINED, &[UNDETERMINED_TAG, "undetermined"]),
];

static LANGUAGE_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    LANGUAGES
        .iter()
        .flat_map(|(name, spellings)| spellings.iter().map(move |s| (*s, *name)))
        .collect()
});

/// Normalize a language token to its display name.
///
/// Known codes and names (case-insensitive, surrounding whitespace ignored)
/// map to a fixed display name. Unknown tokens come back with their first
/// character uppercased and the rest untouched. Empty input yields
/// [`UNDETERMINED`].
///
/// # Examples
///
/// ```
/// use trackstrip_core::normalize_language;
///
/// assert_eq!(normalize_language("eng"), "English");
/// assert_eq!(normalize_language(" RU "), "Russian");
/// assert_eq!(normalize_language("klingon"), "Klingon");
/// assert_eq!(normalize_language(""), "Undetermined");
/// ```
pub fn normalize_language(token: &str) -> String {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return UNDETERMINED.to_string();
    }

    match LANGUAGE_MAP.get(trimmed.to_lowercase().as_str()) {
        Some(name) => (*name).to_string(),
        None => capitalize_first(trimmed),
    }
}

/// Normalize an optional language tag, treating a missing tag as undetermined.
pub fn normalize_tag(tag: Option<&str>) -> String {
    normalize_language(tag.unwrap_or(UNDETERMINED_TAG))
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
