//! 터미널 출력용 DialogueListener
//!
//! 이름은 화자 색상(ANSI truecolor)으로, 대사는 같은 줄을 `\r`로 덮어쓰며 출력합니다.
//! 실제 오디오 장치가 없으므로 블립 요청은 debug 로그로만 남깁니다.

use std::fmt;
use std::io::Write;

use crate::dialogue::{Color, DialogueListener, DialogueWarning, PortraitHandle};
use crate::voice::SoundHandle;

/// 터미널 렌더러
pub struct TerminalListener<W: Write> {
    out: W,
    /// 현재 줄에 출력된 내용이 있는지
    line_open: bool,
}

impl<W: Write> TerminalListener<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            line_open: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, args: fmt::Arguments<'_>) {
        let result = self.out.write_fmt(args).and_then(|_| self.out.flush());
        if let Err(e) = result {
            log::debug!("터미널 출력 실패: {}", e);
        }
    }

    fn close_line(&mut self) {
        if self.line_open {
            self.emit(format_args!("\n"));
            self.line_open = false;
        }
    }
}

/// 0.0~1.0 색상 채널을 0~255로
fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl<W: Write> DialogueListener for TerminalListener<W> {
    fn on_line_started(&mut self, _line_index: usize) {
        self.close_line();
    }

    fn on_text_updated(&mut self, _line_index: usize, revealed: &str) {
        self.emit(format_args!("\r{}", revealed));
        self.line_open = true;
    }

    fn on_sound_requested(&mut self, sound: &SoundHandle, pitch: f32, volume: f32) {
        log::debug!("블립 재생: {} (pitch {:.2}, volume {:.2})", sound, pitch, volume);
    }

    fn on_sound_stop_requested(&mut self) {
        log::trace!("블립 정지");
    }

    fn on_speaker_changed(&mut self, name: &str, name_color: Color, portrait: Option<&PortraitHandle>) {
        self.close_line();
        let (r, g, b) = (channel(name_color.r), channel(name_color.g), channel(name_color.b));
        self.emit(format_args!("\n\x1b[1;38;2;{};{};{}m{}\x1b[0m\n", r, g, b, name));
        if let Some(portrait) = portrait {
            log::debug!("초상화 표시: {}", portrait);
        }
    }

    fn on_dialogue_finished(&mut self) {
        self.close_line();
        self.emit(format_args!("\n(대화 종료)\n"));
    }

    fn on_configuration_warning(&mut self, warning: &DialogueWarning) {
        self.close_line();
        self.emit(format_args!("⚠️  {}\n", warning));
    }
}
