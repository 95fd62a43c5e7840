//! 글자 → 소리 분류기
//!
//! 출력되는 글자 하나를 보고 어떤 블립 소리를 낼지 분류합니다.
//! 숫자는 한국어 발음의 주 모음, 한글 음절은 중성, 영문은 모음 글자를 기준으로 합니다.

use std::collections::HashMap;
use std::sync::LazyLock;
use unicode_general_category::{get_general_category, GeneralCategory};

use super::unicode::jungseong_index;

/// 모음 계열 소리 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneticClass {
    A,
    E,
    I,
    O,
    U,
    /// 분류 불가 모음 (ㅘ, ㅢ 등)
    Default,
}

/// 구두점 소리 분류 (화자와 무관한 전역 소리)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationClass {
    /// 마침표, 쉼표, 세미콜론, 콜론
    Stop,
    Question,
    Exclamation,
    DefaultPunctuation,
}

/// 글자 분류 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundClass {
    /// 화자의 SoundBank에서 찾는 소리
    Phonetic(PhoneticClass),
    /// 전역 PunctuationSoundTable에서 찾는 소리
    Punctuation(PunctuationClass),
}

/// 숫자 0~9의 한국어 발음 기준 모음
/// 영(ㅕ→O) 일 이 삼 사 오 육 칠 팔 구
pub const DIGIT_CLASSES: [PhoneticClass; 10] = [
    PhoneticClass::O, // 0 영
    PhoneticClass::I, // 1 일
    PhoneticClass::I, // 2 이
    PhoneticClass::A, // 3 삼
    PhoneticClass::A, // 4 사
    PhoneticClass::O, // 5 오
    PhoneticClass::U, // 6 육
    PhoneticClass::I, // 7 칠
    PhoneticClass::A, // 8 팔
    PhoneticClass::U, // 9 구
];

/// 중성 인덱스(0~20) → 소리 분류
#[rustfmt::skip]
pub const JUNGSEONG_CLASSES: [PhoneticClass; 21] = [
    PhoneticClass::A,       // 0  ㅏ
    PhoneticClass::A,       // 1  ㅐ
    PhoneticClass::A,       // 2  ㅑ
    PhoneticClass::A,       // 3  ㅒ
    PhoneticClass::E,       // 4  ㅓ
    PhoneticClass::E,       // 5  ㅔ
    PhoneticClass::E,       // 6  ㅕ
    PhoneticClass::E,       // 7  ㅖ
    PhoneticClass::O,       // 8  ㅗ
    PhoneticClass::Default, // 9  ㅘ
    PhoneticClass::Default, // 10 ㅙ
    PhoneticClass::Default, // 11 ㅚ
    PhoneticClass::O,       // 12 ㅛ
    PhoneticClass::U,       // 13 ㅜ
    PhoneticClass::Default, // 14 ㅝ
    PhoneticClass::Default, // 15 ㅞ
    PhoneticClass::Default, // 16 ㅟ
    PhoneticClass::U,       // 17 ㅠ
    PhoneticClass::U,       // 18 ㅡ
    PhoneticClass::Default, // 19 ㅢ
    PhoneticClass::I,       // 20 ㅣ
];

/// 구두점 → 분류 (여기 없는 구두점은 DefaultPunctuation)
static PUNCTUATION_CLASSES: LazyLock<HashMap<char, PunctuationClass>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for c in ['.', ',', ';', ':', '。', '、', '，'] {
        map.insert(c, PunctuationClass::Stop);
    }
    for c in ['?', '？'] {
        map.insert(c, PunctuationClass::Question);
    }
    for c in ['!', '！'] {
        map.insert(c, PunctuationClass::Exclamation);
    }
    map
});

/// 라틴 문자 블록 (Basic Latin ~ Latin Extended-B, Latin Extended Additional 등)
const LATIN_RANGES: &[(char, char)] = &[
    ('A', 'Z'),
    ('a', 'z'),
    ('\u{00C0}', '\u{024F}'),
    ('\u{1E00}', '\u{1EFF}'),
    ('\u{2C60}', '\u{2C7F}'),
    ('\u{A720}', '\u{A7FF}'),
    ('\u{FF21}', '\u{FF3A}'),
    ('\u{FF41}', '\u{FF5A}'),
];

/// 숫자 분류
pub fn classify_digit(c: char) -> Option<PhoneticClass> {
    c.to_digit(10).map(|d| DIGIT_CLASSES[d as usize])
}

/// 한글 음절 분류 (중성 기준)
pub fn classify_hangul(c: char) -> Option<PhoneticClass> {
    jungseong_index(c).map(|jung| JUNGSEONG_CLASSES[jung as usize])
}

/// 라틴 문자 여부 (×, ÷ 같은 기호 제외)
pub fn is_latin_letter(c: char) -> bool {
    c.is_alphabetic() && LATIN_RANGES.iter().any(|&(lo, hi)| (lo..=hi).contains(&c))
}

/// 영문 분류 - 대소문자 무시, 모음 외 글자는 모두 U
pub fn classify_latin(c: char) -> Option<PhoneticClass> {
    if !is_latin_letter(c) {
        return None;
    }
    let class = match c.to_lowercase().next().unwrap_or(c) {
        'a' | 'ａ' => PhoneticClass::A,
        'e' | 'ｅ' => PhoneticClass::E,
        'i' | 'ｉ' => PhoneticClass::I,
        'o' | 'ｏ' => PhoneticClass::O,
        'u' | 'ｕ' => PhoneticClass::U,
        _ => PhoneticClass::U,
    };
    Some(class)
}

/// 구두점 여부 (유니코드 P* 범주, 물결표 포함)
pub fn is_punctuation(c: char) -> bool {
    if c == '~' {
        return true;
    }
    matches!(
        get_general_category(c),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
    )
}

/// 구두점 분류
pub fn classify_punctuation(c: char) -> Option<PunctuationClass> {
    if !is_punctuation(c) {
        return None;
    }
    Some(
        PUNCTUATION_CLASSES
            .get(&c)
            .copied()
            .unwrap_or(PunctuationClass::DefaultPunctuation),
    )
}

/// 글자 하나를 소리 분류로 변환
/// 반환: 소리를 낼 필요가 없는 글자(공백, 제어 문자, 기타 기호)는 None
pub fn classify(c: char) -> Option<SoundClass> {
    classify_digit(c)
        .or_else(|| classify_hangul(c))
        .or_else(|| classify_latin(c))
        .map(SoundClass::Phonetic)
        .or_else(|| classify_punctuation(c).map(SoundClass::Punctuation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::unicode::compose_syllable;

    fn phonetic(c: char) -> Option<PhoneticClass> {
        match classify(c) {
            Some(SoundClass::Phonetic(class)) => Some(class),
            _ => None,
        }
    }

    fn punctuation(c: char) -> Option<PunctuationClass> {
        match classify(c) {
            Some(SoundClass::Punctuation(class)) => Some(class),
            _ => None,
        }
    }

    #[test]
    fn test_digit_table() {
        let expected = [
            ('0', PhoneticClass::O),
            ('1', PhoneticClass::I),
            ('2', PhoneticClass::I),
            ('3', PhoneticClass::A),
            ('4', PhoneticClass::A),
            ('5', PhoneticClass::O),
            ('6', PhoneticClass::U),
            ('7', PhoneticClass::I),
            ('8', PhoneticClass::A),
            ('9', PhoneticClass::U),
        ];
        for (c, class) in expected {
            assert_eq!(phonetic(c), Some(class), "digit {}", c);
        }
    }

    #[test]
    fn test_hangul_spot_check() {
        assert_eq!(phonetic('가'), Some(PhoneticClass::A)); // ㅏ
        assert_eq!(phonetic('너'), Some(PhoneticClass::E)); // ㅓ
        assert_eq!(phonetic('네'), Some(PhoneticClass::E)); // ㅔ
        assert_eq!(phonetic('모'), Some(PhoneticClass::O)); // ㅗ
        assert_eq!(phonetic('수'), Some(PhoneticClass::U)); // ㅜ
        assert_eq!(phonetic('미'), Some(PhoneticClass::I)); // ㅣ
        assert_eq!(phonetic('요'), Some(PhoneticClass::O)); // ㅛ
        assert_eq!(phonetic('글'), Some(PhoneticClass::U)); // ㅡ + 종성
    }

    #[test]
    fn test_hangul_compound_vowels_use_default() {
        assert_eq!(phonetic('와'), Some(PhoneticClass::Default)); // ㅘ
        assert_eq!(phonetic('워'), Some(PhoneticClass::Default)); // ㅝ
        assert_eq!(phonetic('의'), Some(PhoneticClass::Default)); // ㅢ
        assert_eq!(phonetic('위'), Some(PhoneticClass::Default)); // ㅟ
    }

    #[test]
    fn test_hangul_class_ignores_choseong_and_jongseong() {
        for jung in 0..21 {
            let expected = JUNGSEONG_CLASSES[jung as usize];
            for cho in [0, 9, 18] {
                for jong in [0, 4, 27] {
                    let c = compose_syllable(cho, jung, jong).unwrap();
                    assert_eq!(phonetic(c), Some(expected), "{}", c);
                }
            }
        }
    }

    #[test]
    fn test_latin_vowels_case_insensitive() {
        for (lower, class) in [
            ('a', PhoneticClass::A),
            ('e', PhoneticClass::E),
            ('i', PhoneticClass::I),
            ('o', PhoneticClass::O),
            ('u', PhoneticClass::U),
        ] {
            assert_eq!(phonetic(lower), Some(class));
            assert_eq!(phonetic(lower.to_ascii_uppercase()), Some(class));
        }
    }

    #[test]
    fn test_latin_consonants_map_to_u() {
        for c in ('a'..='z').chain('A'..='Z') {
            if "aeiouAEIOU".contains(c) {
                continue;
            }
            assert_eq!(phonetic(c), Some(PhoneticClass::U), "consonant {}", c);
        }
    }

    #[test]
    fn test_punctuation_table() {
        for c in ['.', ',', ';', ':'] {
            assert_eq!(punctuation(c), Some(PunctuationClass::Stop));
        }
        assert_eq!(punctuation('?'), Some(PunctuationClass::Question));
        assert_eq!(punctuation('!'), Some(PunctuationClass::Exclamation));
        for c in ['~', '-', '"', '\'', '(', ')', '[', ']', '{', '}', '…', '「'] {
            assert_eq!(punctuation(c), Some(PunctuationClass::DefaultPunctuation), "{}", c);
        }
    }

    #[test]
    fn test_unclassified_characters() {
        assert_eq!(classify(' '), None);
        assert_eq!(classify('\n'), None);
        assert_eq!(classify('\t'), None);
        assert_eq!(classify('ㅋ'), None); // 호환용 자모
        assert_eq!(classify('★'), None);
        assert_eq!(classify('Я'), None); // 라틴 문자 아님
    }

    #[test]
    fn test_classify_is_deterministic() {
        for c in "안녕하세요, Tom! 123?".chars() {
            assert_eq!(classify(c), classify(c));
        }
    }

    #[test]
    fn test_non_ascii_latin_letters() {
        for c in ['é', 'É', 'ñ', 'ö', 'ß', 'ç'] {
            assert_eq!(phonetic(c), Some(PhoneticClass::U), "{}", c);
        }
        assert_eq!(phonetic('Ａ'), Some(PhoneticClass::A)); // 전각
        assert_eq!(phonetic('ｏ'), Some(PhoneticClass::O));
        assert_eq!(classify('×'), None);
        assert_eq!(classify('÷'), None);
    }

    #[test]
    fn test_unicode_punctuation_uses_default() {
        for c in ['¿', '¡', '«', '»', '※', '…', '「', '』', '—', '_', '@', '#', '%', '&', '*'] {
            assert_eq!(punctuation(c), Some(PunctuationClass::DefaultPunctuation), "{}", c);
        }
        assert_eq!(punctuation('。'), Some(PunctuationClass::Stop));
        assert_eq!(punctuation('？'), Some(PunctuationClass::Question));
        assert_eq!(punctuation('！'), Some(PunctuationClass::Exclamation));
    }

    #[test]
    fn test_symbols_are_not_punctuation() {
        for c in ['$', '+', '=', '<', '>', '|', '^', '`', '₩', '©'] {
            assert_eq!(classify(c), None, "{}", c);
        }
    }
}
