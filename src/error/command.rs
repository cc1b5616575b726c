//! Shell command error module.
//!
//! These errors never stop the shell. Their `Display` text is exactly what
//! the user sees after the configured error prefix.

use thiserror::Error;

/// Errors reported for a single shell command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command word is unknown, or the line was blank.
    #[error("Not a valid command.")]
    UnknownCommand,

    /// Fewer arguments than the command needs.
    #[error("Not enough arguments.")]
    NotEnoughArguments,

    /// The name argument does not match `[a-z]+`.
    #[error("You need to specify a valid name.")]
    InvalidName,

    /// The points argument is not a 32-bit integer.
    #[error("You need to specify a valid number.")]
    InvalidNumber,

    /// `add` hit a key whose node already exists.
    #[error("Could not be added!")]
    AddRejected,

    /// `change` hit a key without a value.
    #[error("Could not be changed!")]
    ChangeRejected,

    /// `delete` hit a key without a value.
    #[error("Could not be removed!")]
    RemoveRejected,

    /// `points` found no value for the key.
    #[error("Could not get points!")]
    NoPoints,
}
