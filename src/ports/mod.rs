//! Ports (trait boundaries) for the game's external collaborators.
//!
//! The game core never reads input or draws anything itself. A session talks
//! to a player through [`MoveInput`] and shows the game through [`Display`];
//! adapters in [`crate::adapters`] implement both for the terminal and for
//! tests.

pub mod display;
pub mod input;

pub use display::Display;
pub use input::{Action, MoveInput};
