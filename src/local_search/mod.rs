//! Local search on closed tours.
//!
//! - [`two_opt_delta`] — O(1) cost change of a 2-opt move
//! - [`apply_two_opt`] — In-place segment reversal
//! - [`two_opt_improve`] — First-improvement 2-opt hill climbing
//! - [`greedy_two_opt`] — Nearest-neighbor start followed by 2-opt

mod two_opt;

pub use two_opt::{apply_two_opt, greedy_two_opt, is_trivial_move, two_opt_delta, two_opt_improve};
