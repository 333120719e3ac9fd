//! CLI infrastructure for the noughts binary
//!
//! This module provides the commands for playing in the terminal, analysing
//! a single board and verifying the computer's play.

pub mod commands;
pub mod output;
