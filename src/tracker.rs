use crate::error::Error;
use crate::stacks::{Move, Stacks};

/// How the crane moves a block of crates.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Semantics {
    /// One crate at a time, so a moved block lands in reversed order.
    Sequential,
    /// The whole block at once, keeping its order.
    Block,
}

/// Where a tracked crate sits: `depth` crates down from the top of
/// `stack`. Starts out describing a position in the final arrangement
/// and, as moves are unapplied, ends up describing one in the original.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct Location {
    pub stack: usize,
    pub depth: usize,
}

impl Location {
    /// Map a position in the arrangement just after `m` ran to the
    /// position the same crate held just before.
    fn unapply(&mut self, m: &Move, semantics: Semantics) {
        if self.stack == m.to {
            if self.depth >= m.count {
                // Below the crates that landed on top of it.
                self.depth -= m.count;
            } else {
                // One of the moved crates; it came from `m.from`.
                self.stack = m.from;
                if let Semantics::Sequential = semantics {
                    self.depth = m.count - self.depth - 1;
                }
            }
        } else if self.stack == m.from {
            // The removed crates sat above it.
            self.depth += m.count;
        }
    }
}

/// Find where the final top crate of each stack sits in the original
/// arrangement, by folding the move log from last to first. Only the
/// stack count matters here; crate labels are resolved separately.
///
/// Each move costs one O(1) step per stack regardless of its `count`,
/// which is the whole point: nothing scales with how many crates the
/// procedure shuffles around.
pub fn track_tops(stack_count: usize, moves: &[Move], semantics: Semantics) -> Vec<Location> {
    let mut tracked: Vec<Location> = (0..stack_count)
        .map(|stack| Location { stack, depth: 0 })
        .collect();

    for m in moves.iter().rev() {
        for location in tracked.iter_mut() {
            location.unapply(m, semantics);
        }
    }

    tracked
}

/// The top crate of every stack after the whole procedure runs, as a
/// string of labels in stack order.
pub fn final_tops(stacks: &Stacks, moves: &[Move], semantics: Semantics) -> Result<String, Error> {
    for m in moves {
        stacks.check_move(m)?;
    }

    track_tops(stacks.len(), moves, semantics)
        .into_iter()
        .map(|location| {
            stacks
                .crate_at(location.stack, location.depth)
                .map(|krate| krate.0)
        })
        .collect()
}
