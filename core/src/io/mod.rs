//! Line-oriented command loop.
//!
//! Input is a case count `T`, followed by `T` test cases. Each case starts
//! with a line `N M` giving the side length of the grid and the number of
//! commands, followed by `M` lines, each either `UPDATE x y z v` or
//! `QUERY x1 y1 z1 x2 y2 z2`. Every query produces one line of output holding
//! the sum. Blank lines are ignored.

use log::debug;
use std::io::{BufRead, Write};
use thiserror::Error;

mod command;
mod session;

pub use command::{CaseHeader, Command, CommandError, CommandResult, QUERY, UPDATE};
pub use session::Session;

/// Result type returned by the command loop.
pub type IoResult<T> = Result<T, IoError>;

/// Error encountered while running the command loop.
#[allow(missing_docs)]
#[derive(Error, Debug)]
pub enum IoError {
    #[error("I/O error")]
    Io(#[from] std::io::Error),
    #[error("unexpected end of input; expected {expected}")]
    UnexpectedEof { expected: &'static str },
    #[error("line {line}: {source}")]
    Command {
        line: usize,
        #[source]
        source: CommandError,
    },
}

/// Options for the command loop.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Whether to reject coordinates outside the declared grid size, rather
    /// than only those outside the padded universe.
    pub strict_bounds: bool,
}

/// Counts of what the command loop processed.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of test cases.
    pub cases: usize,
    /// Number of `UPDATE` commands.
    pub updates: usize,
    /// Number of `QUERY` commands.
    pub queries: usize,
}

/// Reads test cases from `input` and writes the result of every query to
/// `output`, one per line.
pub fn run(
    input: impl BufRead,
    mut output: impl Write,
    options: &RunOptions,
) -> IoResult<RunSummary> {
    let mut lines = NumberedLines::new(input);
    let mut summary = RunSummary::default();

    let (line, text) = lines.next_line("case count")?;
    let case_count: usize = parse_line(line, &text, |s| {
        let mut tokens = s.split_whitespace();
        let count = command::parse_token(&mut tokens)?;
        match tokens.next() {
            None => Ok(count),
            Some(_) => Err(CommandError::WrongArity {
                keyword: "case count",
                expected: 1,
                found: s.split_whitespace().count(),
            }),
        }
    })?;

    for case in 1..=case_count {
        let (line, text) = lines.next_line("case header")?;
        let header: CaseHeader = parse_line(line, &text, |s| s.parse())?;
        debug!(
            "Case {}/{}: N = {}, M = {}",
            case, case_count, header.n, header.m,
        );
        let mut session = Session::<i64>::new(header.n, options);
        for _ in 0..header.m {
            let (line, text) = lines.next_line("command")?;
            let command: Command<i64> = parse_line(line, &text, |s| s.parse())?;
            let result = session
                .apply(command)
                .map_err(|source| IoError::Command { line, source })?;
            match result {
                Some(sum) => {
                    writeln!(output, "{}", sum)?;
                    summary.queries += 1;
                }
                None => summary.updates += 1,
            }
        }
        debug!(
            "Case {} finished with {} nodes",
            case,
            session.tree().node_count(),
        );
        summary.cases += 1;
    }
    output.flush()?;
    Ok(summary)
}

fn parse_line<T>(
    line: usize,
    text: &str,
    parse: impl FnOnce(&str) -> CommandResult<T>,
) -> IoResult<T> {
    parse(text).map_err(|source| IoError::Command { line, source })
}

/// Non-blank input lines, along with their 1-indexed line numbers.
struct NumberedLines<R> {
    lines: std::iter::Enumerate<std::io::Lines<R>>,
}
impl<R: BufRead> NumberedLines<R> {
    fn new(input: R) -> Self {
        Self {
            lines: input.lines().enumerate(),
        }
    }

    fn next_line(&mut self, expected: &'static str) -> IoResult<(usize, String)> {
        for (i, text) in &mut self.lines {
            let text = text?;
            if !text.trim().is_empty() {
                return Ok((i + 1, text));
            }
        }
        Err(IoError::UnexpectedEof { expected })
    }
}
