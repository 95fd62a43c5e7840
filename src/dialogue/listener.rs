//! 외부 협력자(렌더러, 오디오, 초상화)로 나가는 이벤트

use std::fmt;

use super::speaker::{Color, PortraitHandle};
use crate::voice::SoundHandle;

/// 설정 경고 (치명적이지 않음)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogueWarning {
    /// 대사가 없는 대본
    EmptyScript,
    /// 화자가 설정되지 않은 대사
    MissingSpeaker { line_index: usize },
}

impl fmt::Display for DialogueWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialogueWarning::EmptyScript => write!(f, "대화 데이터가 없습니다"),
            DialogueWarning::MissingSpeaker { line_index } => {
                write!(f, "대화 라인 {}에 캐릭터가 설정되지 않았습니다", line_index)
            }
        }
    }
}

/// 대화 진행 이벤트 수신자
///
/// 모든 메서드는 기본 구현이 비어 있으므로 필요한 것만 구현하면 됩니다.
#[allow(unused_variables)]
pub trait DialogueListener {
    /// 새 대사 출력 시작 (이전 텍스트 지우기용)
    fn on_line_started(&mut self, line_index: usize) {}

    /// 글자가 출력될 때마다, 그리고 스킵 시 한 번 호출
    fn on_text_updated(&mut self, line_index: usize, revealed: &str) {}

    fn on_sound_requested(&mut self, sound: &SoundHandle, pitch: f32, volume: f32) {}

    fn on_sound_stop_requested(&mut self) {}

    fn on_speaker_changed(&mut self, name: &str, name_color: Color, portrait: Option<&PortraitHandle>) {}

    fn on_dialogue_finished(&mut self) {}

    fn on_configuration_warning(&mut self, warning: &DialogueWarning) {}
}

/// 아무것도 하지 않는 수신자
impl DialogueListener for () {}

/// 기록된 이벤트
#[derive(Debug, Clone, PartialEq)]
pub enum DialogueEvent {
    LineStarted(usize),
    TextUpdated { line_index: usize, revealed: String },
    SoundRequested { sound: SoundHandle, pitch: f32, volume: f32 },
    SoundStopRequested,
    SpeakerChanged { name: String, name_color: Color, portrait: Option<PortraitHandle> },
    DialogueFinished,
    ConfigurationWarning(DialogueWarning),
}

/// 모든 이벤트를 순서대로 기록하는 수신자 (테스트/디버깅용)
#[derive(Debug, Default)]
pub struct RecordingListener {
    events: Vec<DialogueEvent>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[DialogueEvent] {
        &self.events
    }

    /// 기록 비우기 (기존 기록 반환)
    pub fn take(&mut self) -> Vec<DialogueEvent> {
        std::mem::take(&mut self.events)
    }

    /// 텍스트 갱신 목록
    pub fn texts(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                DialogueEvent::TextUpdated { revealed, .. } => Some(revealed.as_str()),
                _ => None,
            })
            .collect()
    }

    /// 재생 요청된 소리 목록
    pub fn sounds(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                DialogueEvent::SoundRequested { sound, .. } => Some(sound.as_str()),
                _ => None,
            })
            .collect()
    }

    /// 특정 조건을 만족하는 이벤트 개수
    pub fn count(&self, predicate: impl Fn(&DialogueEvent) -> bool) -> usize {
        self.events.iter().filter(|e| predicate(e)).count()
    }

    pub fn warnings(&self) -> Vec<&DialogueWarning> {
        self.events
            .iter()
            .filter_map(|e| match e {
                DialogueEvent::ConfigurationWarning(w) => Some(w),
                _ => None,
            })
            .collect()
    }
}

impl DialogueListener for RecordingListener {
    fn on_line_started(&mut self, line_index: usize) {
        self.events.push(DialogueEvent::LineStarted(line_index));
    }

    fn on_text_updated(&mut self, line_index: usize, revealed: &str) {
        self.events.push(DialogueEvent::TextUpdated {
            line_index,
            revealed: revealed.to_string(),
        });
    }

    fn on_sound_requested(&mut self, sound: &SoundHandle, pitch: f32, volume: f32) {
        self.events.push(DialogueEvent::SoundRequested {
            sound: sound.clone(),
            pitch,
            volume,
        });
    }

    fn on_sound_stop_requested(&mut self) {
        self.events.push(DialogueEvent::SoundStopRequested);
    }

    fn on_speaker_changed(&mut self, name: &str, name_color: Color, portrait: Option<&PortraitHandle>) {
        self.events.push(DialogueEvent::SpeakerChanged {
            name: name.to_string(),
            name_color,
            portrait: portrait.cloned(),
        });
    }

    fn on_dialogue_finished(&mut self) {
        self.events.push(DialogueEvent::DialogueFinished);
    }

    fn on_configuration_warning(&mut self, warning: &DialogueWarning) {
        self.events.push(DialogueEvent::ConfigurationWarning(warning.clone()));
    }
}
