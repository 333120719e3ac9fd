//! Adapters implementing the game's ports.
//!
//! Terminal adapters drive a real game over stdin/stdout. The scripted input
//! and recording display stand in for a player in tests.

pub mod recording;
pub mod scripted;
pub mod terminal;

pub use recording::{Frame, RecordingDisplay};
pub use scripted::ScriptedInput;
pub use terminal::{TerminalDisplay, TerminalInput, parse_action};
