use serde::Deserialize;

const SOKUON: char = 'っ';
const MORAIC_N: char = 'ん';
/// Hiragana and katakana blocks are laid out in the same order, 0x60 apart.
const KATAKANA_OFFSET: u32 = 0x60;
/// "xtsu" and "ltsu" are the longest romaji spellings in the table.
const LONGEST_SYLLABLE: usize = 4;

/// The kana syllabary that romaji input is converted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    #[default]
    Hiragana,
    Katakana,
}

/// A stateless Romaji to kana converter.
///
/// Conversion is greedy and total: every prefix of the input converts to
/// something, and romaji that cannot be resolved yet (a lone `n`, a consonant
/// waiting for its vowel) is echoed back unchanged.
#[derive(Debug, Clone)]
pub struct RomanizationEngine {
    script: Script,
}

impl RomanizationEngine {
    pub fn new(script: Script) -> Self {
        Self { script }
    }

    pub fn script(&self) -> Script {
        self.script
    }

    /// Transliterates a full roman string.
    pub fn transliterate(&self, roman: &str) -> String {
        let chars: Vec<char> = roman.chars().map(|c| c.to_ascii_lowercase()).collect();
        let mut result = String::new();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            let next = chars.get(i + 1).copied();

            if c == 'n' {
                match next {
                    Some('\'') => {
                        result.push(MORAIC_N);
                        i += 2;
                        continue;
                    }
                    Some('n') => {
                        result.push(MORAIC_N);
                        // "nna" is ん + な, while "nnk" is ん + k
                        let starts_syllable = chars
                            .get(i + 2)
                            .map_or(false, |&after| is_vowel(after) || after == 'y');
                        i += if starts_syllable { 1 } else { 2 };
                        continue;
                    }
                    Some(n) if is_consonant(n) && n != 'y' => {
                        result.push(MORAIC_N);
                        i += 1;
                        continue;
                    }
                    _ => {}
                }
            } else if is_consonant(c) && (next == Some(c) || (c == 't' && next == Some('c'))) {
                result.push(SOKUON);
                i += 1;
                continue;
            }

            match self.longest_syllable(&chars[i..]) {
                Some((kana, used)) => {
                    result.push_str(kana);
                    i += used;
                }
                None => {
                    result.push(c);
                    i += 1;
                }
            }
        }

        match self.script {
            Script::Hiragana => result,
            Script::Katakana => result.chars().map(to_katakana).collect(),
        }
    }

    fn longest_syllable(&self, rest: &[char]) -> Option<(&'static str, usize)> {
        let max = rest.len().min(LONGEST_SYLLABLE);
        (1..=max).rev().find_map(|len| {
            let key: String = rest[..len].iter().collect();
            self.get_syllable(&key).map(|kana| (kana, len))
        })
    }

    fn get_syllable(&self, s: &str) -> Option<&'static str> {
        match s {
            "a" => Some("あ"), "i" => Some("い"), "u" => Some("う"), "e" => Some("え"), "o" => Some("お"),
            "ka" => Some("か"), "ki" => Some("き"), "ku" => Some("く"), "ke" => Some("け"), "ko" => Some("こ"),
            "ga" => Some("が"), "gi" => Some("ぎ"), "gu" => Some("ぐ"), "ge" => Some("げ"), "go" => Some("ご"),
            "sa" => Some("さ"), "shi" | "si" => Some("し"), "su" => Some("す"), "se" => Some("せ"), "so" => Some("そ"),
            "za" => Some("ざ"), "ji" | "zi" => Some("じ"), "zu" => Some("ず"), "ze" => Some("ぜ"), "zo" => Some("ぞ"),
            "ta" => Some("た"), "chi" | "ti" => Some("ち"), "tsu" | "tu" => Some("つ"), "te" => Some("て"), "to" => Some("と"),
            "da" => Some("だ"), "di" => Some("ぢ"), "du" => Some("づ"), "de" => Some("で"), "do" => Some("ど"),
            "na" => Some("な"), "ni" => Some("に"), "nu" => Some("ぬ"), "ne" => Some("ね"), "no" => Some("の"),
            "ha" => Some("は"), "hi" => Some("ひ"), "fu" | "hu" => Some("ふ"), "he" => Some("へ"), "ho" => Some("ほ"),
            "ba" => Some("ば"), "bi" => Some("び"), "bu" => Some("ぶ"), "be" => Some("べ"), "bo" => Some("ぼ"),
            "pa" => Some("ぱ"), "pi" => Some("ぴ"), "pu" => Some("ぷ"), "pe" => Some("ぺ"), "po" => Some("ぽ"),
            "ma" => Some("ま"), "mi" => Some("み"), "mu" => Some("む"), "me" => Some("め"), "mo" => Some("も"),
            "ya" => Some("や"), "yu" => Some("ゆ"), "yo" => Some("よ"),
            "ra" => Some("ら"), "ri" => Some("り"), "ru" => Some("る"), "re" => Some("れ"), "ro" => Some("ろ"),
            "wa" => Some("わ"), "wo" => Some("を"), "vu" => Some("ゔ"),

            "kya" => Some("きゃ"), "kyu" => Some("きゅ"), "kyo" => Some("きょ"),
            "gya" => Some("ぎゃ"), "gyu" => Some("ぎゅ"), "gyo" => Some("ぎょ"),
            "sha" | "sya" => Some("しゃ"), "shu" | "syu" => Some("しゅ"), "sho" | "syo" => Some("しょ"), "she" => Some("しぇ"),
            "ja" | "jya" | "zya" => Some("じゃ"), "ju" | "jyu" | "zyu" => Some("じゅ"), "jo" | "jyo" | "zyo" => Some("じょ"), "je" => Some("じぇ"),
            "cha" | "cya" | "tya" => Some("ちゃ"), "chu" | "cyu" | "tyu" => Some("ちゅ"), "cho" | "cyo" | "tyo" => Some("ちょ"), "che" => Some("ちぇ"),
            "nya" => Some("にゃ"), "nyu" => Some("にゅ"), "nyo" => Some("にょ"),
            "hya" => Some("ひゃ"), "hyu" => Some("ひゅ"), "hyo" => Some("ひょ"),
            "bya" => Some("びゃ"), "byu" => Some("びゅ"), "byo" => Some("びょ"),
            "pya" => Some("ぴゃ"), "pyu" => Some("ぴゅ"), "pyo" => Some("ぴょ"),
            "mya" => Some("みゃ"), "myu" => Some("みゅ"), "myo" => Some("みょ"),
            "rya" => Some("りゃ"), "ryu" => Some("りゅ"), "ryo" => Some("りょ"),
            "fa" => Some("ふぁ"), "fi" => Some("ふぃ"), "fe" => Some("ふぇ"), "fo" => Some("ふぉ"),

            "xa" | "la" => Some("ぁ"), "xi" | "li" => Some("ぃ"), "xu" | "lu" => Some("ぅ"),
            "xe" | "le" => Some("ぇ"), "xo" | "lo" => Some("ぉ"),
            "xya" | "lya" => Some("ゃ"), "xyu" | "lyu" => Some("ゅ"), "xyo" | "lyo" => Some("ょ"),
            "xtu" | "ltu" | "xtsu" | "ltsu" => Some("っ"), "xwa" | "lwa" => Some("ゎ"),

            "-" => Some("ー"),
            _ => None,
        }
    }
}

/// Whether `c` is a concrete kana, as opposed to leftover romaji.
pub fn is_kana(c: char) -> bool {
    matches!(c, '\u{3041}'..='\u{309F}' | '\u{30A0}'..='\u{30FF}')
}

fn to_katakana(c: char) -> char {
    if ('\u{3041}'..='\u{3096}').contains(&c) {
        char::from_u32(c as u32 + KATAKANA_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_lowercase() && !is_vowel(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hiragana(roman: &str) -> String {
        RomanizationEngine::new(Script::Hiragana).transliterate(roman)
    }

    #[test]
    fn test_basic_syllables() {
        assert_eq!(hiragana("neko"), "ねこ");
        assert_eq!(hiragana("sushi"), "すし");
        assert_eq!(hiragana("tsukue"), "つくえ");
        assert_eq!(hiragana("NEKO"), "ねこ");
    }

    #[test]
    fn test_incomplete_romaji_is_echoed() {
        assert_eq!(hiragana("n"), "n");
        assert_eq!(hiragana("nek"), "ねk");
        assert_eq!(hiragana("ky"), "ky");
        assert_eq!(hiragana("sh"), "sh");
        assert_eq!(hiragana(""), "");
    }

    #[test]
    fn test_youon() {
        assert_eq!(hiragana("kyou"), "きょう");
        assert_eq!(hiragana("shashin"), "しゃしn");
        assert_eq!(hiragana("ocha"), "おちゃ");
    }

    #[test]
    fn test_moraic_n() {
        assert_eq!(hiragana("nn"), "ん");
        assert_eq!(hiragana("onna"), "おんな");
        assert_eq!(hiragana("kanji"), "かんじ");
        assert_eq!(hiragana("kin'ya"), "きんや");
        assert_eq!(hiragana("kinya"), "きにゃ");
        assert_eq!(hiragana("shinbun"), "しんぶn");
        assert_eq!(hiragana("shinbunn"), "しんぶん");
    }

    #[test]
    fn test_sokuon() {
        assert_eq!(hiragana("kitte"), "きって");
        assert_eq!(hiragana("matcha"), "まっちゃ");
        assert_eq!(hiragana("k"), "k");
        assert_eq!(hiragana("kk"), "っk");
    }

    #[test]
    fn test_small_kana_and_long_vowel() {
        assert_eq!(hiragana("xtsu"), "っ");
        assert_eq!(hiragana("fa"), "ふぁ");
        assert_eq!(hiragana("ra-men"), "らーめn");
    }

    #[test]
    fn test_katakana_output() {
        let engine = RomanizationEngine::new(Script::Katakana);
        assert_eq!(engine.transliterate("neko"), "ネコ");
        assert_eq!(engine.transliterate("ko-hi-"), "コーヒー");
        assert_eq!(engine.transliterate("kyo"), "キョ");
        assert_eq!(engine.transliterate("nek"), "ネk");
    }

    #[test]
    fn test_is_kana() {
        assert!(is_kana('ね'));
        assert!(is_kana('ネ'));
        assert!(is_kana('ー'));
        assert!(!is_kana('n'));
        assert!(!is_kana('猫'));
    }
}
