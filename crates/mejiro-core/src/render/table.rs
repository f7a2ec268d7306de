//! Kana-to-keystroke tables for the two typing layouts.

/// Hepburn romaji for a two-character kana cluster (yōon and similar).
pub fn roma_digraph(cluster: &str) -> Option<&'static str> {
    let roma = match cluster {
        "きゃ" => "kya", "きゅ" => "kyu", "きょ" => "kyo", "きぇ" => "kye",
        "ぎゃ" => "gya", "ぎゅ" => "gyu", "ぎょ" => "gyo", "ぎぇ" => "gye",
        "くぁ" => "qa", "くぃ" => "qi", "くぇ" => "qe", "くぉ" => "qo",
        "しゃ" => "sha", "しゅ" => "shu", "しょ" => "sho", "しぇ" => "she",
        "じゃ" => "ja", "じゅ" => "ju", "じょ" => "jo", "じぇ" => "je",
        "ちゃ" => "cha", "ちゅ" => "chu", "ちょ" => "cho", "ちぇ" => "che",
        "ぢゃ" => "dya", "ぢゅ" => "dyu", "ぢょ" => "dyo", "ぢぇ" => "dye",
        "つぁ" => "tsa", "つぃ" => "tsi", "つぇ" => "tse", "つぉ" => "tso",
        "てゃ" => "tha", "てゅ" => "thu", "てょ" => "tho", "てぇ" => "the",
        "でゃ" => "dha", "でゅ" => "dhu", "でょ" => "dho", "でぇ" => "dhe",
        "てぃ" => "thi", "とぅ" => "twu", "でぃ" => "dhi", "どぅ" => "dwu",
        "にゃ" => "nya", "にゅ" => "nyu", "にょ" => "nyo", "にぇ" => "nye",
        "ひゃ" => "hya", "ひゅ" => "hyu", "ひょ" => "hyo", "ひぇ" => "hye",
        "びゃ" => "bya", "びゅ" => "byu", "びょ" => "byo", "びぇ" => "bye",
        "ぴゃ" => "pya", "ぴゅ" => "pyu", "ぴょ" => "pyo", "ぴぇ" => "pye",
        "ふぁ" => "fa", "ふぃ" => "fi", "ふぇ" => "fe", "ふぉ" => "fo",
        "みゃ" => "mya", "みゅ" => "myu", "みょ" => "myo", "みぇ" => "mye",
        "りゃ" => "rya", "りゅ" => "ryu", "りょ" => "ryo", "りぇ" => "rye",
        "うぁ" => "wha", "うぃ" => "wi", "うぇ" => "we", "うぉ" => "who",
        "ゔぁ" => "va", "ゔぃ" => "vi", "ゔぇ" => "ve", "ゔぉ" => "vo",
        _ => return None,
    };
    Some(roma)
}

/// Hepburn romaji for a single kana. The nasal and the sokuon map to the
/// intermediate markers `N` and `Q`, rewritten by the euphonic passes.
pub fn roma_single(kana: char) -> Option<&'static str> {
    let roma = match kana {
        'あ' => "a", 'い' => "i", 'う' => "u", 'え' => "e", 'お' => "o",
        'ぁ' => "la", 'ぃ' => "li", 'ぅ' => "lu", 'ぇ' => "le", 'ぉ' => "lo",
        'か' => "ka", 'き' => "ki", 'く' => "ku", 'け' => "ke", 'こ' => "ko",
        'が' => "ga", 'ぎ' => "gi", 'ぐ' => "gu", 'げ' => "ge", 'ご' => "go",
        'さ' => "sa", 'し' => "shi", 'す' => "su", 'せ' => "se", 'そ' => "so",
        'ざ' => "za", 'じ' => "ji", 'ず' => "zu", 'ぜ' => "ze", 'ぞ' => "zo",
        'た' => "ta", 'ち' => "chi", 'つ' => "tsu", 'て' => "te", 'と' => "to",
        'だ' => "da", 'ぢ' => "di", 'づ' => "du", 'で' => "de", 'ど' => "do",
        'な' => "na", 'に' => "ni", 'ぬ' => "nu", 'ね' => "ne", 'の' => "no",
        'は' => "ha", 'ひ' => "hi", 'ふ' => "fu", 'へ' => "he", 'ほ' => "ho",
        'ば' => "ba", 'び' => "bi", 'ぶ' => "bu", 'べ' => "be", 'ぼ' => "bo",
        'ぱ' => "pa", 'ぴ' => "pi", 'ぷ' => "pu", 'ぺ' => "pe", 'ぽ' => "po",
        'ま' => "ma", 'み' => "mi", 'む' => "mu", 'め' => "me", 'も' => "mo",
        'や' => "ya", 'ゆ' => "yu", 'よ' => "yo",
        'ゃ' => "lya", 'ゅ' => "lyu", 'ょ' => "lyo",
        'ら' => "ra", 'り' => "ri", 'る' => "ru", 'れ' => "re", 'ろ' => "ro",
        'わ' => "wa", 'を' => "wo", 'ん' => "N", 'っ' => "Q", 'ゔ' => "vu",
        '-' => "-", ',' => ",", '.' => ".",
        'ー' => "-", '、' => ",", '。' => ".",
        _ => return None,
    };
    Some(roma)
}

/// JIS kana layout keystrokes for a single kana.
pub fn jis_kana(kana: char) -> Option<&'static str> {
    let keys = match kana {
        'あ' => "3", 'い' => "e", 'う' => "4", 'え' => "5", 'お' => "6",
        'ぁ' => "#", 'ぃ' => "E", 'ぅ' => "$", 'ぇ' => "%", 'ぉ' => "&",
        'か' => "t", 'き' => "g", 'く' => "h", 'け' => ":", 'こ' => "b",
        'が' => "t@", 'ぎ' => "g@", 'ぐ' => "h@", 'げ' => ":@", 'ご' => "b@",
        'さ' => "x", 'し' => "d", 'す' => "r", 'せ' => "p", 'そ' => "c",
        'ざ' => "x@", 'じ' => "d@", 'ず' => "r@", 'ぜ' => "p@", 'ぞ' => "c@",
        'た' => "q", 'ち' => "a", 'つ' => "z", 'て' => "w", 'と' => "s",
        'だ' => "q@", 'ぢ' => "a@", 'づ' => "z@", 'で' => "w@", 'ど' => "s@",
        'な' => "u", 'に' => "i", 'ぬ' => "1", 'ね' => ",", 'の' => "k",
        'は' => "f", 'ひ' => "v", 'ふ' => "2", 'へ' => "^", 'ほ' => "-",
        'ば' => "f@", 'び' => "v@", 'ぶ' => "2@", 'べ' => "^@", 'ぼ' => "-@",
        'ぱ' => "f[", 'ぴ' => "v[", 'ぷ' => "2[", 'ぺ' => "^[", 'ぽ' => "-[",
        'ま' => "j", 'み' => "n", 'む' => "]", 'め' => "/", 'も' => "m",
        'や' => "7", 'ゆ' => "8", 'よ' => "9",
        'ゃ' => "'", 'ゅ' => "(", 'ょ' => ")",
        'ら' => "o", 'り' => "l", 'る' => ".", 'れ' => ";", 'ろ' => "\\",
        'わ' => "0", 'を' => "}{#Shift(0)}{", 'ん' => "y", 'っ' => "Z", 'ゔ' => "4@",
        '-' => "|", ',' => "<", '.' => ">",
        'ー' => "|", '、' => "<", '。' => ">",
        _ => return None,
    };
    Some(keys)
}
