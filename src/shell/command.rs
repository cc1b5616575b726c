//! Parsing of shell input lines into commands.

use crate::error::CommandError;
use crate::trie::Key;

/// Text printed by the `help` command.
pub const HELP_TEXT: &str = "\
Allowed Commands:
new: empties the Trie.
add <n> <p>: adds a new entry for <n> with value <p>.
change <n> <p>: changes the value for <n> to <p>.
delete <n>: removes the entry for <n> from the trie.
points <n>: prints the value for <n> to the console.
trie: prints the whole trie in a one-line format.
help: shows a dialog containing all valid commands.
quit: stops the program from executing further.
";

/// A parsed and validated shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the trie with an empty one
    New,
    /// Insert a new key
    Add {
        /// Key to insert
        key: Key,
        /// Points to store
        points: i32,
    },
    /// Overwrite the points of an existing key
    Change {
        /// Key to update
        key: Key,
        /// New points
        points: i32,
    },
    /// Remove a key
    Delete {
        /// Key to remove
        key: Key,
    },
    /// Print the points of a key
    Points {
        /// Key to look up
        key: Key,
    },
    /// Print the one-line rendering of the trie
    Trie,
    /// Print the help text
    Help,
    /// Stop the shell
    Quit,
}

impl Command {
    /// Parses one input line.
    ///
    /// Tokens are separated by runs of whitespace and surplus arguments are
    /// ignored. Checks run in a fixed order: argument count, then the name,
    /// then the number.
    ///
    /// # Arguments
    ///
    /// * `line` - Raw input line, with or without its line terminator.
    ///
    /// # Returns
    ///
    /// * `Ok(Command)` - The parsed command.
    /// * `Err(CommandError)` - The message to show the user.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let args: Vec<&str> = line.split_whitespace().collect();
        let Some(&word) = args.first() else {
            return Err(CommandError::UnknownCommand);
        };

        match word {
            "new" => Ok(Self::New),
            "add" => {
                let (key, points) = keyed_points(&args)?;
                Ok(Self::Add { key, points })
            }
            "change" => {
                let (key, points) = keyed_points(&args)?;
                Ok(Self::Change { key, points })
            }
            "delete" => Ok(Self::Delete { key: key_arg(&args)? }),
            "points" => Ok(Self::Points { key: key_arg(&args)? }),
            "trie" => Ok(Self::Trie),
            "help" => Ok(Self::Help),
            "quit" => Ok(Self::Quit),
            _ => Err(CommandError::UnknownCommand),
        }
    }
}

fn require_args(args: &[&str], count: usize) -> Result<(), CommandError> {
    if args.len() >= count {
        Ok(())
    } else {
        Err(CommandError::NotEnoughArguments)
    }
}

fn key_arg(args: &[&str]) -> Result<Key, CommandError> {
    require_args(args, 2)?;
    Key::parse(args[1]).map_err(|_| CommandError::InvalidName)
}

fn keyed_points(args: &[&str]) -> Result<(Key, i32), CommandError> {
    require_args(args, 3)?;
    let key = Key::parse(args[1]).map_err(|_| CommandError::InvalidName)?;
    let points = args[2]
        .parse::<i32>()
        .map_err(|_| CommandError::InvalidNumber)?;
    Ok((key, points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn key(raw: &str) -> Key {
        Key::parse(raw).unwrap()
    }

    #[test_case("new", Command::New ; "new")]
    #[test_case("trie", Command::Trie ; "trie")]
    #[test_case("help", Command::Help ; "help")]
    #[test_case("quit", Command::Quit ; "quit")]
    #[test_case("  quit  \n", Command::Quit ; "surrounding whitespace")]
    #[test_case("new now please", Command::New ; "surplus arguments")]
    fn test_parse_plain(line: &str, expected: Command) {
        assert_eq!(Command::parse(line), Ok(expected));
    }

    #[test]
    fn test_parse_with_arguments() {
        assert_eq!(
            Command::parse("add cat 5"),
            Ok(Command::Add { key: key("cat"), points: 5 })
        );
        assert_eq!(
            Command::parse("change\tcat   -7 extra"),
            Ok(Command::Change { key: key("cat"), points: -7 })
        );
        assert_eq!(
            Command::parse("delete cat"),
            Ok(Command::Delete { key: key("cat") })
        );
        assert_eq!(
            Command::parse("points cat"),
            Ok(Command::Points { key: key("cat") })
        );
        assert_eq!(
            Command::parse("add max +2147483647"),
            Ok(Command::Add { key: key("max"), points: i32::MAX })
        );
    }

    #[test_case("", CommandError::UnknownCommand ; "empty line")]
    #[test_case("   ", CommandError::UnknownCommand ; "blank line")]
    #[test_case("insert cat 5", CommandError::UnknownCommand ; "unknown word")]
    #[test_case("ADD cat 5", CommandError::UnknownCommand ; "uppercase command")]
    #[test_case("add cat", CommandError::NotEnoughArguments ; "add missing points")]
    #[test_case("delete", CommandError::NotEnoughArguments ; "delete missing name")]
    #[test_case("points", CommandError::NotEnoughArguments ; "points missing name")]
    #[test_case("add Cat 5", CommandError::InvalidName ; "uppercase name")]
    #[test_case("change c4t 5", CommandError::InvalidName ; "digit in name")]
    #[test_case("add Cat five", CommandError::InvalidName ; "name checked before number")]
    #[test_case("add cat five", CommandError::InvalidNumber ; "word for number")]
    #[test_case("add cat 1.5", CommandError::InvalidNumber ; "fraction")]
    #[test_case("add cat 2147483648", CommandError::InvalidNumber ; "overflow")]
    fn test_parse_errors(line: &str, expected: CommandError) {
        assert_eq!(Command::parse(line), Err(expected));
    }
}
