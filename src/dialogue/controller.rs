//! 대본 전체 진행 관리
//!
//! 대사 전환, 반복, 대화 종료를 처리하고 외부 입력 명령(advance/skip)을 받습니다.
//! 단일 스레드에서 `&mut self`로만 호출되므로 tick/skip/advance가 겹치지 않습니다.

use std::sync::Arc;
use std::time::Duration;

use super::listener::{DialogueListener, DialogueWarning};
use super::script::{DialogueLine, DialogueScript};
use super::session::{TypingPhase, TypingSession};
use super::speaker::Speaker;
use crate::config::{seconds_or, DialogueConfig};

/// 대화 진행 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialoguePhase {
    NotStarted,
    Playing,
    /// 반복하지 않는 대본의 끝에 도달 (새 대본을 연결하기 전까지 advance 무시)
    Finished,
}

/// 대화 컨트롤러
pub struct DialogueController<L: DialogueListener> {
    config: DialogueConfig,
    listener: L,
    script: Option<Arc<DialogueScript>>,
    session: TypingSession,
    phase: DialoguePhase,
    /// 대기 중인 tick을 무효화할 때마다 증가
    timer_epoch: u64,
}

impl<L: DialogueListener> DialogueController<L> {
    pub fn new(config: DialogueConfig, listener: L) -> Self {
        Self {
            config,
            listener,
            script: None,
            session: TypingSession::new(),
            phase: DialoguePhase::NotStarted,
            timer_epoch: 0,
        }
    }

    /// 대본 교체 후 첫 대사부터 출력 시작
    /// 빈 대본이면 경고만 보내고 상태는 그대로 유지
    pub fn bind_script(&mut self, script: Arc<DialogueScript>) {
        if script.is_empty() {
            self.warn(DialogueWarning::EmptyScript);
            return;
        }

        // 진행 중이던 대사의 타이머와 블립 정리
        self.session.cancel(&mut self.listener);
        self.cancel_pending_tick();

        self.script = Some(script);
        self.phase = DialoguePhase::NotStarted;
        self.display_from(0);
    }

    /// 출력 중이면 스킵, 대사가 끝났으면 다음 대사로
    pub fn advance(&mut self) {
        if self.phase != DialoguePhase::Playing {
            log::debug!("진행 중인 대화 없음, advance 무시 ({:?})", self.phase);
            return;
        }
        match self.session.phase() {
            TypingPhase::Revealing => self.skip(),
            TypingPhase::LineComplete | TypingPhase::Idle => {
                let next = self.session.line_index() + 1;
                self.display_from(next);
            }
        }
    }

    /// 현재 대사를 즉시 완성 (출력 중이 아니면 무시)
    pub fn skip(&mut self) {
        if self.phase != DialoguePhase::Playing {
            return;
        }
        if self.session.skip(&mut self.listener) {
            self.cancel_pending_tick();
        }
    }

    /// 타이머 간격마다 외부에서 호출 (글자 하나 출력)
    pub fn tick(&mut self) {
        if self.phase != DialoguePhase::Playing {
            return;
        }
        self.session.tick(&self.config.punctuation, &mut self.listener);
    }

    /// start 인덱스부터 화자가 있는 첫 대사를 찾아 출력
    /// 화자 없는 대사는 경고 후 건너뜀
    fn display_from(&mut self, start: usize) {
        let Some(script) = self.script.clone() else {
            return;
        };

        let mut index = start;
        let mut skipped = 0;
        loop {
            if index >= script.len() {
                if script.is_looping() {
                    index = 0; // 처음부터 다시
                } else {
                    self.finish();
                    return;
                }
            }
            if skipped >= script.len() {
                log::warn!("화자가 설정된 대사가 없어 대화를 종료합니다");
                self.finish();
                return;
            }

            let Some(line) = script.line(index) else {
                self.finish();
                return;
            };
            match line.speaker() {
                Some(speaker) => {
                    self.start_line(index, line, Arc::clone(speaker));
                    return;
                }
                None => {
                    self.warn(DialogueWarning::MissingSpeaker { line_index: index });
                    skipped += 1;
                    index += 1;
                }
            }
        }
    }

    fn start_line(&mut self, index: usize, line: &DialogueLine, speaker: Arc<Speaker>) {
        self.phase = DialoguePhase::Playing;
        self.cancel_pending_tick();

        self.listener
            .on_speaker_changed(speaker.name(), speaker.name_color(), speaker.portrait());
        log::info!("{}이(가) 말합니다!", speaker.name());

        let interval = self.effective_interval(line, &speaker);
        self.listener.on_line_started(index);
        self.session.start(index, speaker, line.message(), interval);
    }

    /// 느린 대사 > 화자 속도 > 기본 속도
    fn effective_interval(&self, line: &DialogueLine, speaker: &Speaker) -> Duration {
        if line.is_slow() {
            return self.config.slow_interval();
        }
        match speaker.typing_interval() {
            Some(seconds) => seconds_or(seconds, self.config.default_typing_interval),
            None => self.config.default_interval(),
        }
    }

    fn finish(&mut self) {
        self.phase = DialoguePhase::Finished;
        self.cancel_pending_tick();
        log::info!("대화 종료");
        self.listener.on_dialogue_finished();
    }

    fn warn(&mut self, warning: DialogueWarning) {
        log::warn!("{}", warning);
        self.listener.on_configuration_warning(&warning);
    }

    fn cancel_pending_tick(&mut self) {
        self.timer_epoch = self.timer_epoch.wrapping_add(1);
    }

    /// 다음 tick까지 간격 (출력 중일 때만 Some)
    pub fn tick_interval(&self) -> Option<Duration> {
        (self.phase == DialoguePhase::Playing && self.session.is_revealing())
            .then(|| self.session.interval())
    }

    /// 타이머 세대 번호 - 바뀌면 대기 중인 tick은 버려야 함
    pub fn timer_epoch(&self) -> u64 {
        self.timer_epoch
    }

    pub fn phase(&self) -> DialoguePhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == DialoguePhase::Finished
    }

    pub fn session(&self) -> &TypingSession {
        &self.session
    }

    pub fn current_line_index(&self) -> Option<usize> {
        (self.phase != DialoguePhase::NotStarted).then(|| self.session.line_index())
    }

    pub fn script(&self) -> Option<&Arc<DialogueScript>> {
        self.script.as_ref()
    }

    pub fn config(&self) -> &DialogueConfig {
        &self.config
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn into_listener(self) -> L {
        self.listener
    }
}
