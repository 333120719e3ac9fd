//! Exhaustive checks over the full game tree
//!
//! The board is small enough that every reachable position and every line of
//! play can be enumerated, so the search's guarantees are checked by brute
//! force rather than by sampling.

pub mod reachable;
pub mod verification;

pub use reachable::{decision_positions, reachable_positions};
pub use verification::{
    AgreementReport, UnbeatableReport, verify_solver_agreement, verify_unbeatable,
};
