use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Parse(nom::error::Error<String>),
    /// A move names a stack that isn't in the diagram.
    StackOutOfRange { stack: usize, stacks: usize },
    /// A tracked crate resolved to a position outside its original
    /// stack. The move log doesn't fit the diagram it came with.
    CrateOutOfRange {
        stack: usize,
        depth: usize,
        len: usize,
    },
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<nom::error::Error<String>> for Error {
    fn from(e: nom::error::Error<String>) -> Error {
        Error::Parse(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "{e}"),
            Error::Parse(e) => write!(f, "invalid input: {e}"),
            Error::StackOutOfRange { stack, stacks } => {
                write!(f, "move names stack {stack} but only {stacks} exist")
            }
            Error::CrateOutOfRange { stack, depth, len } => {
                write!(
                    f,
                    "tracked crate at depth {depth} of stack {stack}, which holds {len}"
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}
