use std::path::PathBuf;

use clap::Parser;

use cratemover::{final_tops, parser, Semantics};

/// Report the crate on top of every stack after the rearrangement
/// procedure runs, under both crane models.
#[derive(Parser)]
struct Args {
    /// Crate diagram, a blank line, then "move N from A to B" lines.
    input: PathBuf,
}

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let text = std::fs::read_to_string(&args.input)?;
    let (stacks, moves) = parser::parse_input(&text)?;

    // The two crane models share the immutable diagram and move log,
    // so nothing stops them running at the same time.
    let (sequential, block) = rayon::join(
        || final_tops(&stacks, &moves, Semantics::Sequential),
        || final_tops(&stacks, &moves, Semantics::Block),
    );

    println!("Sequential: {}", sequential?);
    println!("Block: {}", block?);

    Ok(())
}
