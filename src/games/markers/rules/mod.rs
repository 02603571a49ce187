//! Move legality for the marker game.
//!
//! Pure predicates over a [`Board`](super::Board) and the turn's anchor.
//! Nothing here mutates state; the engine decides what to do with the
//! answers.

pub mod point;
pub mod range;

pub use point::{check_point_move, is_adjacent, is_legal_point_move};
pub use range::{check_range_move, is_legal_range_move, span};
