//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::voice::PunctuationSoundTable;

/// 대화 출력 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DialogueConfig {
    /// 화자 속도가 없을 때 쓰는 기본 타이핑 간격 (초)
    #[serde(default = "default_typing_interval")]
    pub default_typing_interval: f32,
    /// 느린 대사의 고정 타이핑 간격 (초)
    #[serde(default = "default_slow_typing_interval")]
    pub slow_typing_interval: f32,
    /// 구두점 소리 (화자와 무관)
    #[serde(default)]
    pub punctuation: PunctuationSoundTable,
}

fn default_typing_interval() -> f32 {
    0.15
}

fn default_slow_typing_interval() -> f32 {
    0.3
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            default_typing_interval: default_typing_interval(),
            slow_typing_interval: default_slow_typing_interval(),
            punctuation: PunctuationSoundTable::default(),
        }
    }
}

impl DialogueConfig {
    /// 구두점 소리 설정
    pub fn with_punctuation(mut self, punctuation: PunctuationSoundTable) -> Self {
        self.punctuation = punctuation;
        self
    }

    /// 기본 타이핑 간격 설정
    pub fn with_default_typing_interval(mut self, seconds: f32) -> Self {
        self.default_typing_interval = seconds;
        self
    }

    /// 기본 타이핑 간격
    pub fn default_interval(&self) -> Duration {
        seconds_or(self.default_typing_interval, default_typing_interval())
    }

    /// 느린 대사 타이핑 간격
    pub fn slow_interval(&self) -> Duration {
        seconds_or(self.slow_typing_interval, default_slow_typing_interval())
    }
}

/// 초 단위 값을 Duration으로 (음수/NaN/표현 불가능한 큰 값이면 fallback 사용)
pub(crate) fn seconds_or(seconds: f32, fallback: f32) -> Duration {
    let fallback = Duration::try_from_secs_f32(fallback).unwrap_or(Duration::ZERO);
    if seconds > 0.0 {
        Duration::try_from_secs_f32(seconds).unwrap_or(fallback)
    } else {
        fallback
    }
}

/// 설정 파일 경로: ~/.config/soritype/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("soritype").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> DialogueConfig {
    load_config_from(&config_path())
}

/// 지정 경로에서 설정 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config_from(path: &Path) -> DialogueConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패, 기본값 사용: {}", e);
            DialogueConfig::default()
        }),
        Err(_) => DialogueConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &DialogueConfig) -> Result<(), String> {
    save_config_to(config, &config_path())
}

/// 지정 경로에 설정 저장
pub fn save_config_to(config: &DialogueConfig, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voice::SoundHandle;

    #[test]
    fn test_default_config() {
        let config = DialogueConfig::default();
        assert_eq!(config.default_typing_interval, 0.15);
        assert_eq!(config.slow_typing_interval, 0.3);
        assert_eq!(config.punctuation, PunctuationSoundTable::default());
    }

    #[test]
    fn test_backward_compat_missing_field() {
        let json = r#"{"slow_typing_interval": 0.4}"#;
        let config: DialogueConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.default_typing_interval, 0.15);
        assert_eq!(config.slow_typing_interval, 0.4);
    }

    #[test]
    fn test_punctuation_from_json() {
        let json = r#"{"punctuation": {"stop": "dot.wav", "default": "punc.wav"}}"#;
        let config: DialogueConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.punctuation.stop, Some(SoundHandle::new("dot.wav")));
        assert_eq!(config.punctuation.question, None);
    }

    #[test]
    fn test_invalid_intervals_fall_back() {
        let config = DialogueConfig {
            default_typing_interval: -1.0,
            slow_typing_interval: f32::NAN,
            ..DialogueConfig::default()
        };
        assert_eq!(config.default_interval(), Duration::from_secs_f32(0.15));
        assert_eq!(config.slow_interval(), Duration::from_secs_f32(0.3));
    }

    #[test]
    fn test_huge_intervals_fall_back() {
        let config = DialogueConfig::default().with_default_typing_interval(1e30);
        assert_eq!(config.default_interval(), Duration::from_secs_f32(0.15));

        let config = DialogueConfig {
            slow_typing_interval: f32::INFINITY,
            ..DialogueConfig::default()
        };
        assert_eq!(config.slow_interval(), Duration::from_secs_f32(0.3));
    }

    #[test]
    fn test_huge_interval_from_json_does_not_panic() {
        let json = r#"{"default_typing_interval": 1e30, "slow_typing_interval": 1e38}"#;
        let config: DialogueConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.default_interval(), Duration::from_secs_f32(0.15));
        assert_eq!(config.slow_interval(), Duration::from_secs_f32(0.3));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = std::env::temp_dir()
            .join(format!("soritype-config-{}", std::process::id()))
            .join("config.json");
        let config = DialogueConfig::default()
            .with_default_typing_interval(0.1)
            .with_punctuation(PunctuationSoundTable {
                question: Some("q.wav".into()),
                ..PunctuationSoundTable::default()
            });

        save_config_to(&config, &path).unwrap();
        assert_eq!(load_config_from(&path), config);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_missing_or_broken_file_uses_default() {
        let dir = std::env::temp_dir().join(format!("soritype-broken-{}", std::process::id()));
        let path = dir.join("config.json");
        assert_eq!(load_config_from(&path), DialogueConfig::default());

        fs::create_dir_all(&dir).unwrap();
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_config_from(&path), DialogueConfig::default());

        let _ = fs::remove_dir_all(&dir);
    }
}
