//! Command parser
//!
//! Turns one raw input line into a [`Command`]. Parsing never fails the
//! session: every problem comes back as a [`CommandError`] whose text is
//! shown in the history panel.
//!
//! ```text
//! set|s <index> <value>     point assignment
//! add|a <index> <value>     point increment
//! query|q <left> <right>    half-open range aggregate
//! /reset /home /help        special commands
//! quit|exit                 leave the program
//! ```

use std::num::IntErrorKind;

use crate::domain::Value;
use crate::error::CommandError;

/// A parsed, validated instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Set { index: usize, value: Value },
    Add { index: usize, value: Value },
    Query { left: usize, right: usize },
    Reset,
    Home,
    Help,
    Quit,
}

const POINT_SIGNATURE: &str = "<index> <value>";
const RANGE_SIGNATURE: &str = "<left> <right>";

/// Parse `line` against a structure of `len` elements.
///
/// Blank input yields `Ok(None)`; the caller ignores it.
pub fn parse(line: &str, len: usize) -> Result<Option<Command>, CommandError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(first) = parts.first() else {
        return Ok(None);
    };
    let keyword = first.to_lowercase();
    let args = &parts[1..];

    if keyword.starts_with('/') {
        return match keyword.as_str() {
            "/reset" => Ok(Some(Command::Reset)),
            "/home" => Ok(Some(Command::Home)),
            "/help" => Ok(Some(Command::Help)),
            _ => Err(CommandError::UnknownSlashCommand(keyword)),
        };
    }

    let command = match keyword.as_str() {
        "set" | "s" => {
            let (index, value) = point_args(&keyword, args, len)?;
            Command::Set { index, value }
        }
        "add" | "a" => {
            let (index, value) = point_args(&keyword, args, len)?;
            Command::Add { index, value }
        }
        "query" | "q" => {
            let (left, right) = range_args(&keyword, args, len)?;
            Command::Query { left, right }
        }
        "quit" | "exit" => Command::Quit,
        _ => return Err(CommandError::UnknownCommand(keyword)),
    };
    Ok(Some(command))
}

fn point_args(keyword: &str, args: &[&str], len: usize) -> Result<(usize, Value), CommandError> {
    let [index, value] = exact_args(keyword, POINT_SIGNATURE, args)?;
    let index = parse_int(index)?;
    let value = Value::parse_token(value).ok_or_else(|| CommandError::Parse {
        token: value.to_string(),
    })?;
    let index = usize::try_from(index)
        .ok()
        .filter(|i| *i < len)
        .ok_or(CommandError::Index { index, len })?;
    Ok((index, value))
}

fn range_args(keyword: &str, args: &[&str], len: usize) -> Result<(usize, usize), CommandError> {
    let [left, right] = exact_args(keyword, RANGE_SIGNATURE, args)?;
    let (left, right) = (parse_int(left)?, parse_int(right)?);
    let bounds = usize::try_from(left).ok().zip(usize::try_from(right).ok());
    match bounds {
        Some((l, r)) if l < r && r <= len => Ok((l, r)),
        _ => Err(CommandError::Range { left, right, len }),
    }
}

fn exact_args<'a>(
    keyword: &str,
    signature: &'static str,
    args: &[&'a str],
) -> Result<[&'a str; 2], CommandError> {
    match args {
        [a, b] => Ok([*a, *b]),
        _ => Err(CommandError::Usage {
            command: keyword.to_string(),
            signature,
            got: args.len(),
        }),
    }
}

/// Integers too large for `i128` saturate, so they still fail bounds checks
/// instead of reading as malformed.
fn parse_int(token: &str) -> Result<i128, CommandError> {
    token.parse::<i128>().or_else(|err| match err.kind() {
        IntErrorKind::PosOverflow => Ok(i128::MAX),
        IntErrorKind::NegOverflow => Ok(i128::MIN),
        _ => Err(CommandError::Parse {
            token: token.to_string(),
        }),
    })
}
