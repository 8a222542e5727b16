use crate::error::Error;

/// A single crate label as drawn in the input diagram.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct Crate(pub char);

/// One step of the procedure: take `count` crates off the top of stack
/// `from` and put them on top of stack `to`. Indices are 0-based.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct Move {
    pub count: usize,
    pub from: usize,
    pub to: usize,
}

/// The starting arrangement. Index 0 of each stack is the top crate,
/// higher indices sit deeper. Never mutated once built: the procedure
/// is accounted for by the tracker, not by rearranging storage.
#[derive(Eq, PartialEq, Debug)]
pub struct Stacks {
    stacks: Vec<Vec<Crate>>,
}

impl Stacks {
    pub fn new(stacks: Vec<Vec<Crate>>) -> Stacks {
        Stacks { stacks }
    }

    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// The original contents of one stack, top first.
    pub fn stack(&self, index: usize) -> &[Crate] {
        &self.stacks[index]
    }

    /// Look up the crate at `depth` in the original arrangement of
    /// `stack`. A position outside the stack means the move log and
    /// diagram disagree, which is an error here rather than a panic.
    pub fn crate_at(&self, stack: usize, depth: usize) -> Result<Crate, Error> {
        let len = self
            .stacks
            .get(stack)
            .map(Vec::len)
            .ok_or(Error::StackOutOfRange {
                stack,
                stacks: self.stacks.len(),
            })?;

        self.stacks[stack]
            .get(depth)
            .copied()
            .ok_or(Error::CrateOutOfRange { stack, depth, len })
    }

    pub fn check_move(&self, m: &Move) -> Result<(), Error> {
        for stack in [m.from, m.to] {
            if stack >= self.stacks.len() {
                return Err(Error::StackOutOfRange {
                    stack,
                    stacks: self.stacks.len(),
                });
            }
        }
        Ok(())
    }
}
