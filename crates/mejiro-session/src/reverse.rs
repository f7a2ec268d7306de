//! Reverse lookup: output text back to candidate strokes.
//!
//! Only literal table entries are searched. Text produced by mora
//! synthesis, verb conjugation, or particle assembly has no entry here.

use mejiro_core::abbrev;
use mejiro_core::user_dict::UserDict;

pub fn lookup(users: &UserDict, text: &str) -> Vec<String> {
    let mut strokes = users.strokes_for(text);
    for stroke in abbrev::strokes_for(text) {
        if !strokes.contains(&stroke) {
            strokes.push(stroke);
        }
    }
    strokes
}
