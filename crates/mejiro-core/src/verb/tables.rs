//! Conjugation rows, irregular paradigms, auxiliary maps, and the
//! registered verb dictionaries.

use super::AuxForm;

/// One conjugation row: ten endings indexed by [`AuxForm`].
pub type ConjRow = [&'static str; 10];

/// Godan endings per romaji row.
pub fn godan_row(row: char) -> Option<&'static ConjRow> {
    let endings: &ConjRow = match row {
        'k' => &["か", "か", "か", "き", "く", "い", "こう", "け", "け", "け"],
        'g' => &["が", "が", "が", "ぎ", "ぐ", "い", "ごう", "げ", "げ", "げ"],
        's' => &["さ", "さ", "さ", "し", "す", "し", "そう", "せ", "せ", "せ"],
        't' => &["た", "た", "た", "ち", "つ", "っ", "とう", "て", "て", "て"],
        'n' => &["な", "な", "な", "に", "ぬ", "ん", "のう", "ね", "ね", "ね"],
        'b' => &["ば", "ば", "ば", "び", "ぶ", "ん", "ぼう", "べ", "べ", "べ"],
        'm' => &["ま", "ま", "ま", "み", "む", "ん", "もう", "め", "め", "め"],
        'r' => &["ら", "ら", "ら", "り", "る", "っ", "ろう", "れ", "れ", "れ"],
        'w' => &["わ", "わ", "わ", "い", "う", "っ", "おう", "え", "え", "え"],
        _ => return None,
    };
    Some(endings)
}

/// Kami-ichidan endings per romaji row.
pub fn kami_row(row: char) -> Option<&'static ConjRow> {
    let endings: &ConjRow = match row {
        'k' => &["き", "きさ", "きら", "き", "きる", "き", "きよう", "きれ", "きれ", "きろ"],
        'g' => &["ぎ", "ぎさ", "ぎら", "ぎ", "ぎる", "ぎ", "ぎよう", "ぎれ", "ぎれ", "ぎろ"],
        'z' => &["じ", "じさ", "じら", "じ", "じる", "じ", "じよう", "じれ", "じれ", "じろ"],
        't' => &["ち", "ちさ", "ちら", "ち", "ちる", "ち", "ちよう", "ちれ", "ちれ", "ちろ"],
        'n' => &["に", "にさ", "にら", "に", "にる", "に", "によう", "にれ", "にれ", "にろ"],
        'b' => &["び", "びさ", "びら", "び", "びる", "び", "びよう", "びれ", "びれ", "びろ"],
        'm' => &["み", "みさ", "みら", "み", "みる", "み", "みよう", "みれ", "みれ", "みろ"],
        'r' => &["り", "りさ", "りら", "り", "りる", "り", "りよう", "りれ", "りれ", "りろ"],
        'w' => &["い", "いさ", "いら", "い", "いる", "い", "いよう", "いれ", "いれ", "いろ"],
        _ => return None,
    };
    Some(endings)
}

/// Shimo-ichidan endings per romaji row.
pub fn simo_row(row: char) -> Option<&'static ConjRow> {
    let endings: &ConjRow = match row {
        'k' => &["け", "けさ", "けら", "け", "ける", "け", "けよう", "けれ", "けれ", "けろ"],
        'g' => &["げ", "げさ", "げら", "げ", "げる", "げ", "げよう", "げれ", "げれ", "げろ"],
        's' => &["せ", "せさ", "せら", "せ", "せる", "せ", "せよう", "せれ", "せれ", "せろ"],
        'z' => &["ぜ", "ぜさ", "ぜら", "ぜ", "ぜる", "ぜ", "ぜよう", "ぜれ", "ぜれ", "ぜろ"],
        't' => &["て", "てさ", "てら", "て", "てる", "て", "てよう", "てれ", "てれ", "てろ"],
        'd' => &["で", "でさ", "でら", "で", "でる", "で", "でよう", "でれ", "でれ", "でろ"],
        'n' => &["ね", "ねさ", "ねら", "ね", "ねる", "ね", "ねよう", "ねれ", "ねれ", "ねろ"],
        'h' => &["へ", "へさ", "へら", "へ", "へる", "へ", "へよう", "へれ", "へれ", "へろ"],
        'b' => &["べ", "べさ", "べら", "べ", "べる", "べ", "べよう", "べれ", "べれ", "べろ"],
        'm' => &["め", "めさ", "めら", "め", "める", "め", "めよう", "めれ", "めれ", "めろ"],
        'r' => &["れ", "れさ", "れら", "れ", "れる", "れ", "れよう", "れれ", "れれ", "れろ"],
        'w' => &["え", "えさ", "えら", "え", "える", "え", "えよう", "えれ", "えれ", "えろ"],
        _ => return None,
    };
    Some(endings)
}

pub const SAHEN: ConjRow = ["し", "さ", "さ", "し", "する", "し", "しよう", "すれ", "でき", "しろ"];
pub const KAHEN: ConjRow = ["こ", "こさ", "こら", "き", "くる", "き", "こよう", "くれ", "これ", "こい"];
pub const IKU: ConjRow = ["いか", "いか", "いか", "いき", "いく", "いっ", "いこう", "いけ", "いけ", "いけ"];
pub const ARU: ConjRow = ["", "あら", "あら", "あり", "ある", "あっ", "あろう", "あれ", "ありえ", "あれ"];
pub const GOZARU: ConjRow = [
    "ござら", "ござら", "ござら", "ござい", "ござる", "ござっ", "ござろう", "ござれ", "ござれ", "ござれ",
];

/// Left-hand auxiliary: (particle code, base form, stem prefix, class, row).
/// The stem conjugates through the named class row at the right-hand form.
pub const AUX_LEFT: &[(&str, AuxForm, &str, super::VerbClass, char)] = &[
    ("n", AuxForm::TaTe, "て", super::VerbClass::Kami, 'w'),
    ("t", AuxForm::Causative, "", super::VerbClass::Simo, 's'),
    ("k", AuxForm::Passive, "", super::VerbClass::Simo, 'r'),
    ("nt", AuxForm::TaTe, "てもら", super::VerbClass::Godan, 'w'),
    ("nk", AuxForm::TaTe, "てしま", super::VerbClass::Godan, 'w'),
];

/// Right-hand auxiliary: (particle code, form, suffix).
pub const AUX_RIGHT: &[(&str, AuxForm, &str)] = &[
    ("", AuxForm::Dictionary, ""),
    ("n", AuxForm::Negative, "ない"),
    ("t", AuxForm::TaTe, "た"),
    ("k", AuxForm::Polite, "ます"),
    ("nt", AuxForm::Negative, "なかった"),
    ("nk", AuxForm::Polite, "ません"),
    ("tk", AuxForm::Polite, "ました"),
    ("ntk", AuxForm::TaTe, "て"),
];

/// Whole-pair auxiliary overrides keyed by `"left-right"`.
pub const AUX_EXCEPTIONS: &[(&str, AuxForm, &str)] = &[
    ("tk-", AuxForm::Potential, "る"),
    ("tk-n", AuxForm::Potential, "ない"),
    ("tk-t", AuxForm::Potential, "た"),
    ("tk-k", AuxForm::Potential, "ます"),
    ("tk-nt", AuxForm::Potential, "なかった"),
    ("tk-nk", AuxForm::Potential, "ません"),
    ("tk-tk", AuxForm::Potential, "ました"),
    ("tk-ntk", AuxForm::Potential, "て"),
    ("ntk-", AuxForm::Polite, ""),
    ("ntk-n", AuxForm::Negative, "ず"),
    ("ntk-t", AuxForm::Conditional, "ば"),
    ("ntk-k", AuxForm::Volitional, ""),
    ("ntk-nt", AuxForm::Negative, "なければ"),
    ("ntk-nk", AuxForm::Negative, "なく"),
    ("ntk-tk", AuxForm::TaTe, "てください"),
    ("ntk-ntk", AuxForm::Imperative, ""),
];

/// Copula forms keyed by the right particle code.
pub const DESU: &[(&str, &str)] = &[
    ("", "です"),
    ("n", "でして"),
    ("t", "でした"),
    ("k", "でしょう"),
    ("nt", "です。"),
    ("nk", "ですが"),
    ("tk", "ですか?"),
    ("ntk", "ですね"),
];

/// Registered godan verbs: (kana stroke, stem, row). First match wins.
pub const REGISTERED_GODAN: &[(&str, &str, char)] = &[
    ("A-STU", "ある", 'k'),
    ("I-TNA", "いただ", 'k'),
    ("U-KNAU", "うご", 'k'),
    ("KA-YA", "かがや", 'k'),
    ("KI-TU", "きがつ", 'k'),
    ("KI-TNU", "きづ", 'k'),
    ("SI-KNAU", "しご", 'k'),
    ("TA-TA", "たた", 'k'),
    ("TN-KU", "つづ", 'k'),
    ("NAU-SNAU", "のぞ", 'k'),
    ("TKA-STA", "はたら", 'k'),
    ("SKNI-KNA", "みが", 'k'),
    ("I-SAU", "いそ", 'g'),
    ("KA-SIA", "かせ", 'g'),
    ("KA-TU", "かつ", 'g'),
    ("SA-SA", "ささ", 'g'),
    ("SA-SKA", "さわ", 'g'),
    ("TU-NA", "つな", 'g'),
    ("TKU-SA", "ふさ", 'g'),
    ("TKU-SIA", "ふせ", 'g'),
    ("A-KA", "あか", 's'),
    ("I-KA", "いか", 's'),
    ("I-TA", "いた", 's'),
    ("AU-TAU", "おと", 's'),
    ("KA-KA", "かか", 's'),
    ("KA-KU", "かく", 's'),
    ("KU-STA", "くら", 's'),
    ("KAU-STAU", "ころ", 's'),
    ("KAU-SKA", "こわ", 's'),
    ("TA-AU", "たお", 's'),
    ("TU-TKNU", "つぶ", 's'),
    ("TIA-STA", "てら", 's'),
    ("NA-AU", "なお", 's'),
    ("NI-KNA", "にが", 's'),
    ("NAU-KAU", "のこ", 's'),
    ("NAU-TKNA", "のば", 's'),
    ("TKA-NA", "はな", 's'),
    ("SKNA-KA", "まか", 's'),
    ("SKNI-NA", "みな", 's'),
    ("YU-STA", "ゆら", 's'),
    ("SKA-TA", "わた", 's'),
    ("U-KNA", "うが", 't'),
    ("SAU-TNA", "そだ", 't'),
    ("TA-SKNAU", "たも", 't'),
    ("SKNIA-TNA", "めだ", 't'),
    ("A-SAU", "あそ", 'b'),
    ("IA-STA", "えら", 'b'),
    ("AU-YAU", "およ", 'b'),
    ("NA-STA", "なら", 'b'),
    ("TKA-KAU", "はこ", 'b'),
    ("TKAU-STAU", "ほろ", 'b'),
    ("SKNA-NA", "まな", 'b'),
    ("SKNU-SU", "むす", 'b'),
    ("YAU-STAU", "よろこ", 'b'),
    ("I-NA", "いな", 'm'),
    ("U-STA", "うらや", 'm'),
    ("KA-KNA", "かが", 'm'),
    ("KA-SU", "かす", 'm'),
    ("SU-SU", "すす", 'm'),
    ("TA-NAU", "たの", 'm'),
    ("TIU-TKNA", "ついば", 'm'),
    ("TU-TU", "つつ", 'm'),
    ("TU-SKNA", "つま", 'm'),
    ("NA-YA", "なや", 'm'),
    ("NU-SU", "ぬす", 'm'),
    ("TKA-SA", "はさ", 'm'),
    ("TKI-KAU", "ひっこ", 'm'),
    ("TKU-KU", "ふく", 'm'),
    ("TKAU-TKAU", "ほほえ", 'm'),
    ("YA-SU", "やす", 'm'),
    ("I-", "い", 'r'),
    ("KA-KNI", "かぎ", 'r'),
    ("KNA-TKNA", "がんば", 'r'),
    ("KNA-", "がんば", 'r'),
    ("KIA-", "け", 'r'),
    ("SYA-TKNIA", "しゃべ", 'r'),
    ("SU-TKNIA", "すべ", 'r'),
    ("T-KA", "たすか", 'r'),
    ("NA-", "な", 'r'),
    ("TKY-", "はい", 'r'),
    ("TKA-TKNA", "はばか", 'r'),
    ("YA-", "や", 'r'),
    ("-YA", "や", 'r'),
    ("SKA-", "わか", 'r'),
    ("-A", "あ", 'w'),
    ("A-STA", "あら", 'w'),
    ("IU-", "い", 'w'),
    ("I-SNA", "いざな", 'w'),
    ("I-SKA", "いわ", 'w'),
    ("U-SI", "うしな", 'w'),
    ("U-TA", "うた", 'w'),
    ("U-YA", "うやま", 'w'),
    ("AU-SKNAU", "おも", 'w'),
    ("AU-", "おも", 'w'),
    ("KA-NA", "かな", 'w'),
    ("KA-SKNA", "かま", 'w'),
    ("KU-STU", "くる", 'w'),
    ("SI-A", "しあ", 'w'),
    ("SI-TA", "したが", 'w'),
    ("SI-SKNA", "しま", 'w'),
    ("SAU-STAU", "そろ", 'w'),
    ("TI-KA", "ちか", 'w'),
    ("TI-KNA", "ちが", 'w'),
    ("TU-KA", "つか", 'w'),
    ("TU-TI", "つちか", 'w'),
    ("TU-TNAU", "つど", 'w'),
    ("TNIA-A", "であ", 'w'),
    ("TAU-NA", "ともな", 'w'),
    ("NI-A", "にあ", 'w'),
    ("NI-SKA", "にぎわ", 'w'),
    ("NIA-KNA", "ねが", 'w'),
    ("NAU-STAU", "のろ", 'w'),
    ("TKI-STAU", "ひろ", 'w'),
    ("SKNA-TAU", "まと", 'w'),
    ("SKNI-A", "みあ", 'w'),
    ("SKNU-KA", "むか", 'w'),
    ("SKNAU-STA", "もら", 'w'),
    ("SKA-STA", "わら", 'w'),
];

/// Registered kami-ichidan verbs.
pub const REGISTERED_KAMI: &[(&str, &str, char)] = &[
    ("TN-KI", "で", 'k'),
    ("IA-SNI", "えん", 'z'),
    ("KA-SNI", "かん", 'z'),
    ("KI-SNI", "きん", 'z'),
    ("SI-SNI", "しん", 'z'),
    ("TNA-SNI", "だん", 'z'),
    ("KA-SKNI", "かんが", 'm'),
];

/// Registered shimo-ichidan verbs.
pub const REGISTERED_SIMO: &[(&str, &str, char)] = &[
    ("T-KIA", "たす", 'k'),
    ("TU-TN", "つづ", 'k'),
    ("TN-KIA", "つづ", 'k'),
    ("K-KNIA", "かか", 'g'),
    ("SKNA-KA", "まか", 's'),
    ("TN-", "", 'd'),
    ("KU-STA", "くら", 'b'),
    ("SA-TNA", "さだ", 'm'),
    ("TKA-SNI", "はじ", 'm'),
    ("SKNAU-TAU", "もと", 'm'),
    ("KAU-STIA", "こわ", 'r'),
    ("SKA-SU", "わす", 'r'),
    ("AU-SA", "おさ", 'w'),
    ("AU-TKNAU", "おぼ", 'w'),
    ("KA-KNA", "かんが", 'w'),
    ("KA-", "かんが", 'w'),
    ("KU-SKA", "くわ", 'w'),
    ("KAU-TA", "こた", 'w'),
    ("SA-SA", "ささ", 'w'),
    ("SKNA-KNA", "まちが", 'w'),
];

pub fn registered(
    table: &'static [(&'static str, &'static str, char)],
    kana_stroke: &str,
) -> Option<(&'static str, char)> {
    table
        .iter()
        .find(|(k, _, _)| *k == kana_stroke)
        .map(|(_, stem, row)| (*stem, *row))
}

pub fn desu_form(right_particle: &str) -> Option<&'static str> {
    DESU.iter().find(|(k, _)| *k == right_particle).map(|(_, v)| *v)
}
