//! 화자 정보

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::voice::SoundBank;

/// 음성 높낮이 범위
pub const PITCH_RANGE: (f32, f32) = (0.5, 2.0);
/// 음성 크기 범위
pub const VOLUME_RANGE: (f32, f32) = (0.3, 1.0);
/// 화자별 타이핑 간격 범위 (초)
pub const TYPING_INTERVAL_RANGE: (f32, f32) = (0.05, 0.5);

/// 이름 표시 색상 (RGBA, 0.0 ~ 1.0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "default_alpha")]
    pub a: f32,
}

fn default_alpha() -> f32 {
    1.0
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// 초상화 에셋 참조
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortraitHandle(String);

impl PortraitHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PortraitHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 대화 화자
///
/// 생성 후에는 읽기 전용이며, 대사들이 `Arc<Speaker>`로 공유합니다.
/// 높낮이/크기/타이핑 간격은 설정 시 허용 범위로 잘라냅니다.
#[derive(Debug, Clone, PartialEq)]
pub struct Speaker {
    name: String,
    name_color: Color,
    portrait: Option<PortraitHandle>,
    sound_bank: SoundBank,
    pitch: f32,
    volume: f32,
    /// 0이면 컨트롤러 기본 간격 사용
    typing_interval: f32,
    /// 캐릭터 설명 (개발용)
    description: String,
}

impl Speaker {
    /// 기본 음성 특성으로 화자 생성
    pub fn new(name: impl Into<String>, sound_bank: SoundBank) -> Self {
        Self {
            name: name.into(),
            name_color: Color::WHITE,
            portrait: None,
            sound_bank,
            pitch: 1.0,
            volume: 1.0,
            typing_interval: 0.15,
            description: String::new(),
        }
    }

    /// 이름 색상 설정
    pub fn with_name_color(mut self, color: Color) -> Self {
        self.name_color = color;
        self
    }

    /// 초상화 설정
    pub fn with_portrait(mut self, portrait: impl Into<String>) -> Self {
        self.portrait = Some(PortraitHandle::new(portrait));
        self
    }

    /// 음성 높낮이 설정 (0.5 ~ 2.0)
    pub fn with_pitch(mut self, pitch: f32) -> Self {
        self.pitch = clamp_to(pitch, PITCH_RANGE);
        self
    }

    /// 음성 크기 설정 (0.3 ~ 1.0)
    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = clamp_to(volume, VOLUME_RANGE);
        self
    }

    /// 타이핑 간격 설정 (초, 0.05 ~ 0.5)
    /// 0 이하이면 컨트롤러 기본 간격을 사용
    pub fn with_typing_interval(mut self, seconds: f32) -> Self {
        self.typing_interval = if seconds > 0.0 {
            clamp_to(seconds, TYPING_INTERVAL_RANGE)
        } else {
            0.0
        };
        self
    }

    /// 설명 설정
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_color(&self) -> Color {
        self.name_color
    }

    pub fn portrait(&self) -> Option<&PortraitHandle> {
        self.portrait.as_ref()
    }

    pub fn sound_bank(&self) -> &SoundBank {
        &self.sound_bank
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// 선호 타이핑 간격 (설정하지 않았으면 None)
    pub fn typing_interval(&self) -> Option<f32> {
        (self.typing_interval > 0.0).then_some(self.typing_interval)
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

fn clamp_to(value: f32, (min, max): (f32, f32)) -> f32 {
    if value.is_nan() {
        return min;
    }
    value.clamp(min, max)
}
