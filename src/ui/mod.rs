pub mod terminal;

pub use terminal::TerminalListener;
