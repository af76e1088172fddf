//! Parsing of individual input lines.

use std::fmt;
use std::str::{FromStr, SplitWhitespace};
use thiserror::Error;

use crate::tree::{Layer, RegionError};
use crate::vec3::IVec3D;

/// Result type returned by fallible command routines.
pub type CommandResult<T> = Result<T, CommandError>;

/// Error encountered while parsing or applying a single line of input.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command {0:?}")]
    UnknownKeyword(String),
    #[error("{keyword} takes {expected} arguments, found {found}")]
    WrongArity {
        keyword: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("invalid integer {0:?}")]
    InvalidInteger(String),
    #[error("position {pos} is outside the grid 1..={n}")]
    OutOfRange { pos: IVec3D, n: usize },
    #[error("grid size {n} exceeds the largest supported universe")]
    GridTooLarge { n: usize },
    #[error("query box corners {min} and {max} are out of order")]
    InvertedBox { min: IVec3D, max: IVec3D },
    #[error(transparent)]
    Region(#[from] RegionError),
}

/// Keyword of an update command.
pub const UPDATE: &str = "UPDATE";
/// Keyword of a query command.
pub const QUERY: &str = "QUERY";

/// Single operation on a universe.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command<T> {
    /// `UPDATE x y z v`: set the cell at `pos` to `value`.
    Update {
        /// Cell to write.
        pos: IVec3D,
        /// New value of the cell.
        value: T,
    },
    /// `QUERY x1 y1 z1 x2 y2 z2`: sum every cell in the box.
    Query {
        /// Minimum corner as written.
        min: IVec3D,
        /// Maximum corner as written.
        max: IVec3D,
    },
}

impl<T: fmt::Display> fmt::Display for Command<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::axis::{X, Y, Z};
        match self {
            Command::Update { pos, value } => {
                write!(f, "{} {} {} {} {}", UPDATE, pos[X], pos[Y], pos[Z], value)
            }
            Command::Query { min, max } => write!(
                f,
                "{} {} {} {} {} {} {}",
                QUERY, min[X], min[Y], min[Z], max[X], max[Y], max[Z],
            ),
        }
    }
}

impl<T: FromStr> FromStr for Command<T> {
    type Err = CommandError;

    fn from_str(s: &str) -> CommandResult<Self> {
        let mut tokens = s.split_whitespace();
        let keyword = tokens.next().ok_or(CommandError::Empty)?;
        let arg_count = tokens.clone().count();
        match keyword {
            UPDATE => {
                check_arity(UPDATE, 4, arg_count)?;
                let pos = parse_ivec(&mut tokens)?;
                let value = parse_token(&mut tokens)?;
                Ok(Command::Update { pos, value })
            }
            QUERY => {
                check_arity(QUERY, 6, arg_count)?;
                let min = parse_ivec(&mut tokens)?;
                let max = parse_ivec(&mut tokens)?;
                Ok(Command::Query { min, max })
            }
            other => Err(CommandError::UnknownKeyword(other.to_owned())),
        }
    }
}

/// Sizes of one test case, from a line of the form `N M`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CaseHeader {
    /// Side length of the grid.
    pub n: usize,
    /// Number of commands in the case.
    pub m: usize,
}

impl FromStr for CaseHeader {
    type Err = CommandError;

    fn from_str(s: &str) -> CommandResult<Self> {
        let mut tokens = s.split_whitespace();
        check_arity("case header", 2, tokens.clone().count())?;
        let n = parse_token(&mut tokens)?;
        let m = parse_token(&mut tokens)?;
        if Layer::covering(n) > Layer::MAX {
            return Err(CommandError::GridTooLarge { n });
        }
        Ok(CaseHeader { n, m })
    }
}

fn check_arity(keyword: &'static str, expected: usize, found: usize) -> CommandResult<()> {
    if expected == found {
        Ok(())
    } else {
        Err(CommandError::WrongArity {
            keyword,
            expected,
            found,
        })
    }
}

/// Parses the next token, which must exist.
pub(super) fn parse_token<N: FromStr>(tokens: &mut SplitWhitespace<'_>) -> CommandResult<N> {
    let token = tokens.next().ok_or(CommandError::Empty)?;
    token
        .parse()
        .map_err(|_| CommandError::InvalidInteger(token.to_owned()))
}

fn parse_ivec(tokens: &mut SplitWhitespace<'_>) -> CommandResult<IVec3D> {
    Ok(IVec3D::new(
        parse_token(tokens)?,
        parse_token(tokens)?,
        parse_token(tokens)?,
    ))
}
