//! 블립 소리 매핑

mod sound_bank;

pub use sound_bank::{PunctuationSoundTable, SoundBank, SoundHandle};
