pub mod config;
pub mod core;
pub mod dialogue;
pub mod ui;
pub mod voice;

pub use crate::core::classifier::{classify, PhoneticClass, PunctuationClass, SoundClass};
pub use dialogue::{DialogueController, DialogueListener, DialogueScript, Speaker};
