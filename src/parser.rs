use std::str::FromStr;

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{anychar, char, digit1, line_ending, space0, space1};
use nom::combinator::{eof, map_res};
use nom::multi::{many0, many1, separated_list1};
use nom::sequence::{delimited, pair, preceded, separated_pair, terminated, tuple};
use nom::{Finish, IResult, Parser};

use crate::error::Error;
use crate::stacks::{Crate, Move, Stacks};

pub fn base10_numeric<N>(input: &str) -> IResult<&str, N>
where
    N: FromStr,
{
    map_res(digit1, |s| N::from_str(s)).parse(input)
}

fn air(input: &str) -> IResult<&str, Option<Crate>> {
    tag("   ").map(|_| None).parse(input)
}

fn krate(input: &str) -> IResult<&str, Option<Crate>> {
    delimited(char('['), anychar, char(']'))
        .map(|c| Some(Crate(c)))
        .parse(input)
}

fn row(input: &str) -> IResult<&str, Vec<Option<Crate>>> {
    separated_list1(char(' '), alt((air, krate))).parse(input)
}

fn names(input: &str) -> IResult<&str, Vec<usize>> {
    delimited(space0, separated_list1(space1, base10_numeric), space0).parse(input)
}

// Rows arrive top-down, so appending row by row leaves each stack with
// its top crate at index 0. Air cells above a short stack drop out.
fn collate(rows: Vec<Vec<Option<Crate>>>, width: usize) -> Stacks {
    let mut stacks = vec![Vec::new(); width];
    for cells in rows {
        for (stack, cell) in stacks.iter_mut().zip(cells) {
            if let Some(krate) = cell {
                stack.push(krate);
            }
        }
    }
    Stacks::new(stacks)
}

fn diagram(input: &str) -> IResult<&str, Stacks> {
    pair(
        many1(terminated(row, line_ending)),
        terminated(names, line_ending),
    )
    .map(|(rows, names)| collate(rows, names.len()))
    .parse(input)
}

fn a_move(input: &str) -> IResult<&str, Move> {
    map_res(
        tuple((
            preceded(pair(tag("move"), space1), base10_numeric),
            preceded(tuple((space1, tag("from"), space1)), base10_numeric),
            preceded(tuple((space1, tag("to"), space1)), base10_numeric),
        )),
        |(count, from, to): (usize, usize, usize)| {
            // Stack names are 1-based on the wire.
            match (from, to) {
                (0, _) | (_, 0) => Err("stack names start at 1"),
                _ => Ok(Move {
                    count,
                    from: from - 1,
                    to: to - 1,
                }),
            }
        },
    )
    .parse(input)
}

fn moves(input: &str) -> IResult<&str, Vec<Move>> {
    separated_list1(line_ending, a_move).parse(input)
}

fn input_parser(input: &str) -> IResult<&str, (Stacks, Vec<Move>)> {
    terminated(
        separated_pair(diagram, line_ending, moves),
        pair(many0(line_ending), eof),
    )
    .parse(input)
}

/// Parse a whole input: crate diagram, stack name line, blank line,
/// then one move per line.
pub fn parse_input(input: &str) -> Result<(Stacks, Vec<Move>), Error> {
    match input_parser(input).finish() {
        Ok((_rest, parsed)) => Ok(parsed),
        Err(nom::error::Error { input, code }) => Err(Error::Parse(nom::error::Error {
            input: input.to_owned(),
            code,
        })),
    }
}
