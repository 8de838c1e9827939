use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidInput { .. } => "InvalidInput",
            ErrorImpl::FirstLineIndent => "FirstLineIndent",
            ErrorImpl::DedentMismatch { .. } => "DedentMismatch",
            ErrorImpl::MalformedLiteral { .. } => "MalformedLiteral",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidInput { reason } => {
                ErrorTip::Suggestion(format!("Could not read the input source: {}", reason))
            }
            ErrorImpl::FirstLineIndent => ErrorTip::Suggestion(String::from(
                "The first statement of a program cannot be indented",
            )),
            ErrorImpl::DedentMismatch { width } => ErrorTip::Suggestion(format!(
                "Dedent to width {} matches no enclosing block",
                width
            )),
            ErrorImpl::MalformedLiteral { literal } => ErrorTip::Suggestion(format!(
                "Malformed numeric literal: `{}`, is a digit missing?",
                literal
            )),
            ErrorImpl::UnterminatedString => ErrorTip::Suggestion(String::from(
                "The string opened here is never closed",
            )),
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("input source is not readable: {reason:?}")]
    InvalidInput { reason: String },
    #[error("first line of input is indented")]
    FirstLineIndent,
    #[error("dedent to width {width:?} matches no indentation level")]
    DedentMismatch { width: usize },
    #[error("malformed numeric literal: {literal:?}")]
    MalformedLiteral { literal: String },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
}
