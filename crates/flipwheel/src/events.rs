use carousel::{EntityId, Face};
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

/// One input from the user, mapped 1:1 onto a controller call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Select(usize),
    SelectId(EntityId),
    Next,
    Prev,
    Flip,
    Face(Face),
    Show,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, StrumDisplay)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
enum Keyword {
    #[strum(to_string = "select", serialize = "s")]
    Select,
    Id,
    #[strum(to_string = "next", serialize = "n", serialize = "down")]
    Next,
    #[strum(to_string = "prev", serialize = "p", serialize = "up")]
    Prev,
    #[strum(to_string = "flip", serialize = "f")]
    Flip,
    Face,
    Show,
    #[strum(to_string = "quit", serialize = "q", serialize = "exit")]
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseEventError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(String),
    #[error("'{0}' takes no argument")]
    UnexpectedArgument(String),
    #[error("Invalid index '{0}'")]
    InvalidIndex(String),
    #[error("Invalid face '{0}' (expected front or back)")]
    InvalidFace(String),
}

impl FromStr for AppEvent {
    type Err = ParseEventError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let word = parts.next().ok_or(ParseEventError::Empty)?;
        let keyword = Keyword::from_str(word)
            .map_err(|_| ParseEventError::UnknownCommand(word.to_string()))?;
        let arg = parts.next();

        if parts.next().is_some() {
            return Err(ParseEventError::UnexpectedArgument(keyword.to_string()));
        }

        let needs_arg = matches!(keyword, Keyword::Select | Keyword::Id | Keyword::Face);
        match (needs_arg, arg) {
            (true, None) => return Err(ParseEventError::MissingArgument(keyword.to_string())),
            (false, Some(_)) => {
                return Err(ParseEventError::UnexpectedArgument(keyword.to_string()));
            }
            _ => {}
        }
        let arg = arg.unwrap_or_default();

        Ok(match keyword {
            Keyword::Select => AppEvent::Select(
                arg.parse::<usize>()
                    .map_err(|_| ParseEventError::InvalidIndex(arg.to_string()))?,
            ),
            Keyword::Id => AppEvent::SelectId(EntityId::new(arg)),
            Keyword::Face => AppEvent::Face(
                Face::from_str(arg).map_err(|_| ParseEventError::InvalidFace(arg.to_string()))?,
            ),
            Keyword::Next => AppEvent::Next,
            Keyword::Prev => AppEvent::Prev,
            Keyword::Flip => AppEvent::Flip,
            Keyword::Show => AppEvent::Show,
            Keyword::Quit => AppEvent::Quit,
        })
    }
}
