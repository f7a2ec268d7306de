//! User dictionary: full main-stroke keys (particles included) mapped to
//! fixed output text. Ships with a built-in word list; a JSON file of
//! `{"stroke": "text"}` pairs can be overlaid on top, with file entries
//! shadowing the built-ins.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::LookupError;

const BUILTIN: &[(&str, &str)] = &[
    ("A-SKNIA", "あめりか"),
    ("KNUntk-KNU", "ぐーぐる"),
    ("KAUn-TAntk", "こんぴゅーたー"),
    ("SKNIA-SAUtk", "めそっど"),
    ("TNIA-SNI", "でじたる"),
    ("SU-STKNAU", "すまーとふぉん"),
    ("SU-TKAU", "すまほ"),
    ("STKU-STA", "ぷらすちっく"),
    ("KI-TKNAU", "きーぼーど"),
    ("In-STA", "いんふら"),
    ("KAUn-TKNIn", "こんびに"),
    ("SI-KNAUt", "しごと"),
    ("SI-SU", "しすてむ"),
    ("SAU-TKUt", "そふと"),
    ("SAU-SKIA", "そふとうぇあ"),
    ("TKA-SKIA", "はーどうぇあ"),
    ("In-NIAtk", "いんたーねっと"),
    ("In-STKNAU", "いんふぉめーしょん"),
    ("KAU-SKNYU", "こみゅにけーしょん"),
    ("SI-SKNYU", "しみゅれーしょん"),
    ("IU-STU", "ういるす"),
    ("KAU-IU", "ころなういるす"),
    ("SIn-KNAt", "しんがた"),
    ("A-STI", "ありがとう"),
    ("AU-NIA", "おねがい"),
    ("YAU-STAU", "よろしく"),
    ("TA-TAU", "たとえば"),
    ("KNU-TY", "ぐたいてきには"),
    ("TA-SI", "たしかに"),
];

#[derive(Debug, Clone)]
pub struct UserDict {
    entries: HashMap<String, String>,
}

impl Default for UserDict {
    fn default() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        UserDict { entries }
    }
}

impl UserDict {
    /// Built-ins plus the entries of a JSON file, file entries winning.
    pub fn with_file(path: &Path) -> Result<UserDict, LookupError> {
        let mut dict = UserDict::default();
        let data = fs::read_to_string(path)?;
        let overlay: HashMap<String, String> = serde_json::from_str(&data)?;
        let overlay_len = overlay.len();
        dict.entries.extend(overlay);
        debug!(overlay = overlay_len, total = dict.entries.len(), "user dictionary loaded");
        Ok(dict)
    }

    pub fn get(&self, main_stroke: &str) -> Option<&str> {
        self.entries.get(main_stroke).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All strokes mapped to `text`, sorted for stable output.
    pub fn strokes_for(&self, text: &str) -> Vec<String> {
        let mut out: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, v)| v.as_str() == text)
            .map(|(k, _)| k.clone())
            .collect();
        out.sort();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_lookup() {
        let dict = UserDict::default();
        assert_eq!(dict.get("SU-TKAU"), Some("すまほ"));
        assert_eq!(dict.len(), 29);
        assert!(dict.get("ZZ-ZZ").is_none());
    }

    #[test]
    fn file_overlay_adds_and_shadows() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"SU-TKAU": "スマホ", "TIA-SU": "てすと"}}"#
        )
        .unwrap();
        let dict = UserDict::with_file(file.path()).unwrap();
        assert_eq!(dict.get("SU-TKAU"), Some("スマホ"));
        assert_eq!(dict.get("TIA-SU"), Some("てすと"));
        assert_eq!(dict.len(), 30);
    }

    #[test]
    fn malformed_file_is_a_format_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = UserDict::with_file(file.path()).unwrap_err();
        assert!(matches!(err, LookupError::UserDictFormat(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = UserDict::with_file(Path::new("/nonexistent/users.json")).unwrap_err();
        assert!(matches!(err, LookupError::UserDictIo(_)));
    }

    #[test]
    fn reverse_lookup_is_sorted() {
        let dict = UserDict::default();
        assert_eq!(dict.strokes_for("しごと"), vec!["SI-KNAUt".to_string()]);
        assert!(dict.strokes_for("なにもない").is_empty());
    }
}
