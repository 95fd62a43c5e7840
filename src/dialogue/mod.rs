//! 타자기식 대화 진행
//!
//! 대본을 한 줄씩, 한 글자씩 출력하면서 글자마다 블립 소리를 요청합니다.
//!
//! # 사용 예시
//!
//! ```
//! use std::sync::Arc;
//! use soritype::config::DialogueConfig;
//! use soritype::dialogue::{DialogueController, DialogueLine, DialogueScript, RecordingListener, Speaker};
//! use soritype::voice::SoundBank;
//!
//! let tom = Arc::new(Speaker::new("너굴", SoundBank::uniform("blip.wav")));
//! let script = DialogueScript::new(vec![DialogueLine::new(tom, "안녕!")]);
//!
//! let mut controller = DialogueController::new(DialogueConfig::default(), RecordingListener::new());
//! controller.bind_script(Arc::new(script));
//! while controller.tick_interval().is_some() {
//!     controller.tick();
//! }
//! assert_eq!(controller.session().revealed(), "안녕!");
//! controller.advance();
//! assert!(controller.is_finished());
//! ```

mod controller;
mod listener;
mod loader;
mod script;
mod session;
mod speaker;
mod timer;

pub use controller::{DialogueController, DialoguePhase};
pub use listener::{DialogueEvent, DialogueListener, DialogueWarning, RecordingListener};
pub use loader::{load_script, parse_script, ScriptError};
pub use script::{DialogueLine, DialogueScript};
pub use session::{TypingPhase, TypingSession};
pub use speaker::{Color, PortraitHandle, Speaker};
pub use timer::TickTimer;
