use mejiro_core::stroke::PANIC_STROKE;
use mejiro_core::TypingLayout;

use super::{body, session};

#[test]
fn typing_mode_renders_romaji() {
    let mut s = session();
    body(&mut s, "#n");
    assert_eq!(body(&mut s, "KA-TA"), "kata");
    assert_eq!(body(&mut s, "SI-SYI"), "shishou");
}

#[test]
fn toggle_round_trip_restores_kana() {
    let mut s = session();
    body(&mut s, "#n");
    assert_eq!(body(&mut s, "KA-TA"), "kata");
    body(&mut s, "n#");
    assert_eq!(body(&mut s, "KA-TA"), "かた");
}

#[test]
fn sokuon_carries_across_strokes() {
    let mut s = session();
    body(&mut s, "#n");
    // あっ: trailing sokuon held back.
    assert_eq!(body(&mut s, "Atk-"), "a");
    assert_eq!(body(&mut s, "TA-"), "tta");
}

#[test]
fn panic_preserves_pending_sokuon() {
    let mut s = session();
    body(&mut s, "#n");
    assert_eq!(body(&mut s, "Atk-"), "a");
    assert_eq!(body(&mut s, PANIC_STROKE), "");
    assert_eq!(body(&mut s, "TA-"), "tta");
}

#[test]
fn jis_layout_rendering() {
    let mut s = session();
    s.set_layout(TypingLayout::JisKana);
    body(&mut s, "#n");
    assert_eq!(body(&mut s, "KA-NA"), "tu");
    assert_eq!(body(&mut s, "KNA-KNI"), "t@g@");
}

#[test]
fn particles_render_too() {
    let mut s = session();
    body(&mut s, "#n");
    assert_eq!(body(&mut s, "t-t"), "niha");
}
