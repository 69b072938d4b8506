/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::str::FromStr;
use thiserror::Error;

/***************************************/
/*       Public data structures        */
/***************************************/
/// One line typed at the interactive console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Call(i32),
    Go(i32),
    Cancel(i32),
    Status,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),
    #[error("'{0}' needs a floor number")]
    MissingFloor(String),
    #[error("'{0}' is not a floor number")]
    InvalidNumber(String),
    #[error("unexpected argument '{0}'")]
    TrailingArgument(String),
}

pub const HELP: &str = "\
call <floor>    call the elevator from a floor
go <floor>      select a destination inside the car
cancel <floor>  cancel any request for a floor
status          print the car and pending requests as JSON
help            show this list
quit            stop the elevator and exit";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(CommandError::Empty)?.to_lowercase();

        let command = match verb.as_str() {
            "call" | "c" => Command::Call(parse_floor(&verb, words.next())?),
            "go" | "g" => Command::Go(parse_floor(&verb, words.next())?),
            "cancel" | "x" => Command::Cancel(parse_floor(&verb, words.next())?),
            "status" | "s" => Command::Status,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(verb)),
        };

        match words.next() {
            Some(extra) => Err(CommandError::TrailingArgument(extra.to_string())),
            None => Ok(command),
        }
    }
}

fn parse_floor(verb: &str, word: Option<&str>) -> Result<i32, CommandError> {
    let word = word.ok_or_else(|| CommandError::MissingFloor(verb.to_string()))?;
    word.parse::<i32>()
        .map_err(|_| CommandError::InvalidNumber(word.to_string()))
}
