//! Command handlers for the `stdhl` CLI.
//!
//! Each handler returns the text to print; `main` owns stdout, stderr and
//! the exit status.

use stdhl_numeral::{DigitTable, NumeralError, NumeralFormat};
use stdhl_value::IntegerValue;
use tracing::debug;

use crate::{CodecOptions, OptionsError};

/// A failed command.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Options(#[from] OptionsError),

    #[error(transparent)]
    Numeral(#[from] NumeralError),

    #[error("invalid integer `{text}`: {source}")]
    InvalidInteger { text: String, source: NumeralError },

    #[error("expected a single character, found `{0}`")]
    NotOneCharacter(String),

    #[error("missing {0} argument")]
    MissingArgument(&'static str),

    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),

    #[error("unknown command `{0}`")]
    UnknownCommand(String),
}

impl CommandError {
    /// Errors caused by the shape of the command line rather than its values.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            CommandError::MissingArgument(_) | CommandError::UnexpectedArgument(_)
        )
    }
}

/// One-line usage for a command, if it is known.
pub fn usage(command: &str) -> Option<&'static str> {
    match command {
        "encode" => Some("stdhl encode <integer> [--radix=<n>] [--literal=<name>]"),
        "decode" => Some("stdhl decode <text> [--radix=<n>] [--literal=<name>]"),
        "digit" => Some("stdhl digit <char> [--radix=<n>] [--literal=<name>]"),
        "tables" => Some("stdhl tables"),
        _ => None,
    }
}

/// Dispatch `command` with its arguments on top of `options`.
pub fn run(command: &str, args: &[String], options: CodecOptions) -> Result<String, CommandError> {
    let (options, positional) = options.with_args(args)?;
    debug!(command, ?options, ?positional, "running command");

    match command {
        "encode" => encode(single(&positional, "integer")?, options.format()?),
        "decode" => decode(single(&positional, "text")?, options.format()?),
        "digit" => digit(single(&positional, "character")?, options.format()?),
        "tables" => match positional.first() {
            Some(extra) => Err(CommandError::UnexpectedArgument((*extra).to_string())),
            None => Ok(tables()),
        },
        _ => Err(CommandError::UnknownCommand(command.to_string())),
    }
}

/// Render a native decimal integer (e.g. `-42`) in `format`.
pub fn encode(text: &str, format: NumeralFormat) -> Result<String, CommandError> {
    let integer: IntegerValue = text
        .parse()
        .map_err(|source| CommandError::InvalidInteger {
            text: text.to_string(),
            source,
        })?;
    Ok(integer.encode(format)?)
}

/// Read a literal in `format` and print it as native decimal.
pub fn decode(text: &str, format: NumeralFormat) -> Result<String, CommandError> {
    let integer = IntegerValue::parse(text, format)?;
    Ok(integer.to_string())
}

/// The digit value of a single character in `format`.
pub fn digit(text: &str, format: NumeralFormat) -> Result<String, CommandError> {
    let mut chars = text.chars();
    let (Some(character), None) = (chars.next(), chars.next()) else {
        return Err(CommandError::NotOneCharacter(text.to_string()));
    };
    Ok(format.decode_digit(character)?.to_string())
}

/// The three digit alphabets, one per line.
pub fn tables() -> String {
    DigitTable::ALL
        .iter()
        .map(|table| format!("{:<8} {}", table.name(), table.as_str()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn single<'a>(positional: &[&'a str], name: &'static str) -> Result<&'a str, CommandError> {
    match positional {
        [] => Err(CommandError::MissingArgument(name)),
        [arg] => Ok(*arg),
        [_, extra, ..] => Err(CommandError::UnexpectedArgument((*extra).to_string())),
    }
}
