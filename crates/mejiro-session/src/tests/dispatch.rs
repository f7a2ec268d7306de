use super::{body, session};
use crate::Rule;

#[test]
fn particle_pair_stroke() {
    let mut s = session();
    let t = s.translate("t-t").unwrap();
    assert_eq!(t.body, "には");
    assert_eq!(t.rule, Rule::Particle);
}

#[test]
fn particle_topic_inversion() {
    let mut s = session();
    assert_eq!(body(&mut s, "t-k"), "のに");
    assert_eq!(body(&mut s, "nt-nk"), "のと、");
}

#[test]
fn particle_phrase_overrides_are_particle_rule() {
    let mut s = session();
    let t = s.translate("n-").unwrap();
    assert_eq!(t.body, "}{#Space}{");
    assert_eq!(t.rule, Rule::Particle);

    let t = s.translate("-n").unwrap();
    assert_eq!(t.body, "}{#Return}{");
}

#[test]
fn asterisk_suppresses_particle_rule() {
    let mut s = session();
    let t = s.translate("t-t*").unwrap();
    assert_ne!(t.rule, Rule::Particle);
}

#[test]
fn left_kana_plus_right_particle() {
    let mut s = session();
    let t = s.translate("KA-t").unwrap();
    assert_eq!(t.body, "かは");
    assert_eq!(t.rule, Rule::LeftPlusParticle);
}

#[test]
fn left_plus_particle_excludes_ntk_n() {
    let mut s = session();
    let t = s.translate("KAntk-n").unwrap();
    assert_eq!(t.rule, Rule::Literal);
    assert_eq!(t.body, "かーん");
}

#[test]
fn bare_right_kana_is_swallowed() {
    let mut s = session();
    let t = s.translate("-KA").unwrap();
    assert_eq!(t.body, "");
    assert_eq!(t.rule, Rule::RightOnly);

    // With a right particle it is literal output instead.
    let t = s.translate("-KAn").unwrap();
    assert_eq!(t.body, "かん");
    assert_eq!(t.rule, Rule::Literal);
}

#[test]
fn abbreviation_stroke() {
    let mut s = session();
    let t = s.translate("KAU-TAU*").unwrap();
    assert_eq!(t.body, "こと");
    assert_eq!(t.rule, Rule::Abbreviation);

    // Partial combination.
    assert_eq!(body(&mut s, "KIAU-TKIAU*"), "このほう");
}

#[test]
fn abbreviation_appends_particles() {
    let mut s = session();
    assert_eq!(body(&mut s, "KAU-TAUk*"), "ことが");
    assert_eq!(body(&mut s, "KAUt-TAUt*"), "ことには");
}

#[test]
fn abbreviation_rewrites_copula_tokens() {
    let mut s = session();
    assert_eq!(body(&mut s, "KAU-TAUn*"), "ことだ");
    assert_eq!(body(&mut s, "KAUn-TAU*"), "ことである");
    assert_eq!(body(&mut s, "KAUn-TAUntk*"), "ことでした");
    assert_eq!(body(&mut s, "KAU-TAUntk*"), "ことです");
}

#[test]
fn user_dictionary_beats_abbreviation() {
    // SI-KNAUt is a user entry; its kana stroke SI-KNAU is also an
    // abbreviation compound.
    let mut s = session();
    let t = s.translate("SI-KNAUt*").unwrap();
    assert_eq!(t.body, "しごと");
    assert_eq!(t.rule, Rule::UserDict);
}
