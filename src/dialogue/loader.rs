//! JSON 대본 파일 로드
//!
//! 코어는 파일 형식을 정의하지 않습니다. 이 로더는 실행 파일과 테스트에서
//! 대본을 손쉽게 만들기 위한 것입니다.
//!
//! # 파일 형식
//! ```json
//! {
//!   "speakers": [
//!     { "id": "tom", "name": "너굴", "name_color": {"r": 1.0, "g": 0.8, "b": 0.2},
//!       "sounds": {"a": "tom_a.wav", "default": "tom.wav"},
//!       "pitch": 1.2, "volume": 0.8, "typing_interval": 0.1 }
//!   ],
//!   "lines": [ { "speaker": "tom", "message": "안녕하세요!", "slow": false } ],
//!   "loop": false
//! }
//! ```

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use super::script::{DialogueLine, DialogueScript};
use super::speaker::{Color, Speaker};
use crate::voice::SoundBank;

/// 대본 로드 에러
#[derive(Debug)]
pub enum ScriptError {
    /// 파일 읽기 실패
    IoError(std::io::Error),
    /// JSON 파싱 실패
    ParseError(String),
    /// 대본 형식 오류
    FormatError(String),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::IoError(e) => write!(f, "파일 읽기 오류: {}", e),
            ScriptError::ParseError(s) => write!(f, "JSON 파싱 오류: {}", s),
            ScriptError::FormatError(s) => write!(f, "대본 형식 오류: {}", s),
        }
    }
}

impl std::error::Error for ScriptError {}

impl From<std::io::Error> for ScriptError {
    fn from(e: std::io::Error) -> Self {
        ScriptError::IoError(e)
    }
}

#[derive(Deserialize)]
struct ScriptFile {
    #[serde(default)]
    speakers: Vec<SpeakerRecord>,
    #[serde(default)]
    lines: Vec<LineRecord>,
    #[serde(default, rename = "loop")]
    looping: bool,
}

#[derive(Deserialize)]
struct SpeakerRecord {
    id: String,
    name: String,
    #[serde(default)]
    name_color: Color,
    #[serde(default)]
    portrait: Option<String>,
    #[serde(default)]
    sounds: SoundBank,
    #[serde(default = "default_one")]
    pitch: f32,
    #[serde(default = "default_one")]
    volume: f32,
    #[serde(default)]
    typing_interval: f32,
    #[serde(default)]
    description: String,
}

fn default_one() -> f32 {
    1.0
}

#[derive(Deserialize)]
struct LineRecord {
    #[serde(default)]
    speaker: Option<String>,
    message: String,
    #[serde(default)]
    slow: bool,
}

/// 파일에서 대본 로드
pub fn load_script(path: &Path) -> Result<DialogueScript, ScriptError> {
    let content = fs::read_to_string(path)?;
    parse_script(&content)
}

/// JSON 문자열에서 대본 생성
/// 알 수 없는 화자 id를 가진 대사는 화자 없이 로드됨 (실행 시 경고)
pub fn parse_script(json: &str) -> Result<DialogueScript, ScriptError> {
    let file: ScriptFile =
        serde_json::from_str(json).map_err(|e| ScriptError::ParseError(e.to_string()))?;

    let mut speakers: HashMap<String, Arc<Speaker>> = HashMap::new();
    for record in file.speakers {
        if speakers.contains_key(&record.id) {
            return Err(ScriptError::FormatError(format!(
                "중복된 화자 id: {}",
                record.id
            )));
        }
        let id = record.id.clone();
        speakers.insert(id, Arc::new(build_speaker(record)));
    }

    let lines = file
        .lines
        .into_iter()
        .map(|record| {
            let speaker = record.speaker.as_ref().and_then(|id| {
                let found = speakers.get(id).cloned();
                if found.is_none() {
                    log::warn!("알 수 없는 화자 id: {}", id);
                }
                found
            });
            let line = match speaker {
                Some(speaker) => DialogueLine::new(speaker, record.message),
                None => DialogueLine::without_speaker(record.message),
            };
            if record.slow {
                line.slow()
            } else {
                line
            }
        })
        .collect();

    Ok(DialogueScript::new(lines).looping(file.looping))
}

fn build_speaker(record: SpeakerRecord) -> Speaker {
    let mut speaker = Speaker::new(record.name, record.sounds)
        .with_name_color(record.name_color)
        .with_pitch(record.pitch)
        .with_volume(record.volume)
        .with_typing_interval(record.typing_interval)
        .with_description(record.description);
    if let Some(portrait) = record.portrait {
        speaker = speaker.with_portrait(portrait);
    }
    speaker
}
