//! 대화 대본

use std::sync::Arc;

use super::speaker::Speaker;

/// 대사 한 줄
#[derive(Debug, Clone)]
pub struct DialogueLine {
    speaker: Option<Arc<Speaker>>,
    message: String,
    slow_typing: bool,
}

impl DialogueLine {
    pub fn new(speaker: Arc<Speaker>, message: impl Into<String>) -> Self {
        Self {
            speaker: Some(speaker),
            message: message.into(),
            slow_typing: false,
        }
    }

    /// 화자가 지정되지 않은 대사 (실행 시 설정 경고로 보고됨)
    pub fn without_speaker(message: impl Into<String>) -> Self {
        Self {
            speaker: None,
            message: message.into(),
            slow_typing: false,
        }
    }

    /// 고정 느린 속도로 출력
    pub fn slow(mut self) -> Self {
        self.slow_typing = true;
        self
    }

    pub fn speaker(&self) -> Option<&Arc<Speaker>> {
        self.speaker.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_slow(&self) -> bool {
        self.slow_typing
    }
}

/// 대사 목록과 반복 여부
#[derive(Debug, Clone, Default)]
pub struct DialogueScript {
    lines: Vec<DialogueLine>,
    looping: bool,
}

impl DialogueScript {
    pub fn new(lines: Vec<DialogueLine>) -> Self {
        Self {
            lines,
            looping: false,
        }
    }

    /// 끝에 도달하면 처음부터 다시
    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn lines(&self) -> &[DialogueLine] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&DialogueLine> {
        self.lines.get(index)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }
}
