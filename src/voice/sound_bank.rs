//! 화자별 SoundBank와 전역 구두점 소리 테이블

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::classifier::{PhoneticClass, PunctuationClass};

/// 재생 가능한 오디오 에셋 참조 (실제 에셋은 오디오 서비스가 소유)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SoundHandle(String);

impl SoundHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SoundHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SoundHandle {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// 화자의 모음별 블립 소리
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundBank {
    /// ㅏ, ㅐ 소리
    pub a: Option<SoundHandle>,
    /// ㅓ, ㅔ 소리
    pub e: Option<SoundHandle>,
    /// ㅣ 소리
    pub i: Option<SoundHandle>,
    /// ㅗ, ㅛ 소리
    pub o: Option<SoundHandle>,
    /// ㅜ, ㅠ, ㅡ 소리
    pub u: Option<SoundHandle>,
    /// 기본 소리
    pub default: Option<SoundHandle>,
}

impl SoundBank {
    /// 모든 모음에 같은 소리를 쓰는 뱅크
    pub fn uniform(handle: impl Into<SoundHandle>) -> Self {
        let handle = handle.into();
        Self {
            a: Some(handle.clone()),
            e: Some(handle.clone()),
            i: Some(handle.clone()),
            o: Some(handle.clone()),
            u: Some(handle.clone()),
            default: Some(handle),
        }
    }

    /// 분류에 해당하는 소리 (없으면 기본 소리)
    pub fn resolve(&self, class: PhoneticClass) -> Option<&SoundHandle> {
        let specific = match class {
            PhoneticClass::A => self.a.as_ref(),
            PhoneticClass::E => self.e.as_ref(),
            PhoneticClass::I => self.i.as_ref(),
            PhoneticClass::O => self.o.as_ref(),
            PhoneticClass::U => self.u.as_ref(),
            PhoneticClass::Default => None,
        };
        specific.or(self.default.as_ref())
    }
}

/// 구두점 소리 (고정, 화자와 무관)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PunctuationSoundTable {
    /// 마침표(.), 쉼표(,) 소리
    pub stop: Option<SoundHandle>,
    /// 물음표(?) 소리
    pub question: Option<SoundHandle>,
    /// 느낌표(!) 소리
    pub exclamation: Option<SoundHandle>,
    /// 기타 구두점 소리
    pub default: Option<SoundHandle>,
}

impl PunctuationSoundTable {
    /// 분류에 해당하는 소리 (없으면 기타 구두점 소리)
    pub fn resolve(&self, class: PunctuationClass) -> Option<&SoundHandle> {
        let specific = match class {
            PunctuationClass::Stop => self.stop.as_ref(),
            PunctuationClass::Question => self.question.as_ref(),
            PunctuationClass::Exclamation => self.exclamation.as_ref(),
            PunctuationClass::DefaultPunctuation => None,
        };
        specific.or(self.default.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> SoundBank {
        SoundBank {
            a: Some("a.wav".into()),
            e: Some("e.wav".into()),
            i: None,
            o: Some("o.wav".into()),
            u: Some("u.wav".into()),
            default: Some("default.wav".into()),
        }
    }

    #[test]
    fn test_resolve_specific() {
        let bank = bank();
        assert_eq!(bank.resolve(PhoneticClass::A), Some(&SoundHandle::new("a.wav")));
        assert_eq!(bank.resolve(PhoneticClass::U), Some(&SoundHandle::new("u.wav")));
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let bank = bank();
        assert_eq!(bank.resolve(PhoneticClass::I), Some(&SoundHandle::new("default.wav")));
        assert_eq!(bank.resolve(PhoneticClass::Default), Some(&SoundHandle::new("default.wav")));
    }

    #[test]
    fn test_resolve_without_default_is_silent() {
        let bank = SoundBank {
            a: Some("a.wav".into()),
            ..SoundBank::default()
        };
        assert_eq!(bank.resolve(PhoneticClass::E), None);
        assert_eq!(bank.resolve(PhoneticClass::Default), None);
    }

    #[test]
    fn test_uniform_bank() {
        let bank = SoundBank::uniform("blip.wav");
        assert_eq!(bank.resolve(PhoneticClass::O), Some(&SoundHandle::new("blip.wav")));
        assert_eq!(bank.resolve(PhoneticClass::Default), Some(&SoundHandle::new("blip.wav")));
    }

    #[test]
    fn test_punctuation_resolve() {
        let table = PunctuationSoundTable {
            stop: Some("dot.wav".into()),
            question: None,
            exclamation: Some("bang.wav".into()),
            default: Some("punc.wav".into()),
        };
        assert_eq!(table.resolve(PunctuationClass::Stop), Some(&SoundHandle::new("dot.wav")));
        assert_eq!(table.resolve(PunctuationClass::Question), Some(&SoundHandle::new("punc.wav")));
        assert_eq!(table.resolve(PunctuationClass::Exclamation), Some(&SoundHandle::new("bang.wav")));
        assert_eq!(table.resolve(PunctuationClass::DefaultPunctuation), Some(&SoundHandle::new("punc.wav")));
        assert_eq!(PunctuationSoundTable::default().resolve(PunctuationClass::Stop), None);
    }

    #[test]
    fn test_sound_bank_json_partial() {
        let json = r#"{"a": "a.wav", "default": "d.wav"}"#;
        let bank: SoundBank = serde_json::from_str(json).unwrap();
        assert_eq!(bank.a, Some(SoundHandle::new("a.wav")));
        assert_eq!(bank.e, None);
        assert_eq!(bank.resolve(PhoneticClass::E), Some(&SoundHandle::new("d.wav")));
    }
}
