//! Display that keeps everything it was asked to show

use crate::{
    Result,
    ports::Display,
    tictactoe::{Board, Status},
};

/// One rendered screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub board: Board,
    pub status: Status,
    pub highlight: Option<[usize; 3]>,
}

/// In-memory display for tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingDisplay {
    frames: Vec<Frame>,
    notices: Vec<String>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }
}

impl Display for RecordingDisplay {
    fn render(
        &mut self,
        board: &Board,
        status: &Status,
        highlight: Option<[usize; 3]>,
    ) -> Result<()> {
        self.frames.push(Frame {
            board: *board,
            status: *status,
            highlight,
        });
        Ok(())
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        self.notices.push(message.to_string());
        Ok(())
    }
}
