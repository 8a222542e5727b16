//! Works out which crate ends up on top of each stack after a
//! rearrangement procedure runs, without ever moving a crate: the move
//! log is walked backwards, tracking where each final top crate came
//! from in the original diagram.

pub mod error;
pub mod parser;
pub mod stacks;
pub mod tracker;

pub use error::Error;
pub use stacks::{Crate, Move, Stacks};
pub use tracker::{final_tops, track_tops, Location, Semantics};
