//! 대사 한 줄의 타이핑 상태 기계
//!
//! 외부 타이머가 간격마다 `tick()`을 호출하면 글자를 하나씩 출력하고,
//! 출력한 글자를 분류해 화자 SoundBank 또는 구두점 테이블에서 블립 소리를 고릅니다.
//! 블립은 한 번에 하나만 재생되며, 새 블립 전에는 항상 이전 블립 정지를 요청합니다.

use std::sync::Arc;
use std::time::Duration;

use super::listener::DialogueListener;
use super::speaker::Speaker;
use crate::core::classifier::{classify, SoundClass};
use crate::voice::{PunctuationSoundTable, SoundHandle};

/// 타이핑 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingPhase {
    /// 출력할 대사 없음
    Idle,
    /// 글자 출력 중
    Revealing,
    /// 대사 전체 출력 완료
    LineComplete,
}

/// 타이핑 세션
#[derive(Debug)]
pub struct TypingSession {
    phase: TypingPhase,
    line_index: usize,
    speaker: Option<Arc<Speaker>>,
    chars: Vec<char>,
    /// 출력된 글자 수
    offset: usize,
    revealed: String,
    interval: Duration,
    /// 재생 중인 블립이 있는지
    blip_in_flight: bool,
}

impl TypingSession {
    pub fn new() -> Self {
        Self {
            phase: TypingPhase::Idle,
            line_index: 0,
            speaker: None,
            chars: Vec::new(),
            offset: 0,
            revealed: String::new(),
            interval: Duration::ZERO,
            blip_in_flight: false,
        }
    }

    /// 새 대사 출력 시작
    /// 빈 대사는 바로 LineComplete
    pub fn start(&mut self, line_index: usize, speaker: Arc<Speaker>, message: &str, interval: Duration) {
        self.line_index = line_index;
        self.speaker = Some(speaker);
        self.chars = message.chars().collect();
        self.offset = 0;
        self.revealed = String::with_capacity(message.len());
        self.interval = interval;
        self.phase = if self.chars.is_empty() {
            TypingPhase::LineComplete
        } else {
            TypingPhase::Revealing
        };
    }

    /// 다음 글자 하나 출력
    /// 반환: 글자를 출력했으면 true
    pub fn tick<L: DialogueListener + ?Sized>(
        &mut self,
        punctuation: &PunctuationSoundTable,
        listener: &mut L,
    ) -> bool {
        if self.phase != TypingPhase::Revealing {
            return false;
        }
        // Revealing 상태에서는 항상 offset < len
        let Some(&c) = self.chars.get(self.offset) else {
            self.phase = TypingPhase::LineComplete;
            return false;
        };

        self.offset += 1;
        self.revealed.push(c);
        listener.on_text_updated(self.line_index, &self.revealed);

        self.stop_blip(listener);
        if let Some(speaker) = &self.speaker {
            if let Some(sound) = resolve_sound(c, speaker, punctuation) {
                log::debug!("'{}' 소리 재생: {}", c, sound);
                listener.on_sound_requested(sound, speaker.pitch(), speaker.volume());
                self.blip_in_flight = true;
            }
        }

        if self.offset >= self.chars.len() {
            self.phase = TypingPhase::LineComplete;
        }
        true
    }

    /// 남은 글자를 즉시 모두 출력
    /// 반환: 출력 중이었으면 true (LineComplete/Idle에서는 아무 일도 없음)
    pub fn skip<L: DialogueListener + ?Sized>(&mut self, listener: &mut L) -> bool {
        if self.phase != TypingPhase::Revealing {
            return false;
        }
        self.stop_blip(listener);
        self.revealed = self.chars.iter().collect();
        self.offset = self.chars.len();
        self.phase = TypingPhase::LineComplete;
        listener.on_text_updated(self.line_index, &self.revealed);
        true
    }

    /// 세션 중단 (대본 교체 시)
    /// 재생 중인 블립을 멈추고 Idle로 돌아감
    pub fn cancel<L: DialogueListener + ?Sized>(&mut self, listener: &mut L) {
        self.stop_blip(listener);
        self.phase = TypingPhase::Idle;
        self.speaker = None;
        self.chars.clear();
        self.revealed.clear();
        self.offset = 0;
        self.line_index = 0;
    }

    fn stop_blip<L: DialogueListener + ?Sized>(&mut self, listener: &mut L) {
        if self.blip_in_flight {
            listener.on_sound_stop_requested();
            self.blip_in_flight = false;
        }
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    pub fn is_revealing(&self) -> bool {
        self.phase == TypingPhase::Revealing
    }

    pub fn line_index(&self) -> usize {
        self.line_index
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// 대사 길이 (글자 수)
    pub fn line_len(&self) -> usize {
        self.chars.len()
    }

    pub fn revealed(&self) -> &str {
        &self.revealed
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn speaker(&self) -> Option<&Arc<Speaker>> {
        self.speaker.as_ref()
    }
}

impl Default for TypingSession {
    fn default() -> Self {
        Self::new()
    }
}

/// 글자에 해당하는 소리 선택
fn resolve_sound<'a>(
    c: char,
    speaker: &'a Speaker,
    punctuation: &'a PunctuationSoundTable,
) -> Option<&'a SoundHandle> {
    match classify(c)? {
        SoundClass::Phonetic(class) => speaker.sound_bank().resolve(class),
        SoundClass::Punctuation(class) => punctuation.resolve(class),
    }
}
