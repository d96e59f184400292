use std::fmt::{Display, Formatter};

use diagnostic::ErrorType;
use tokenizer::Token;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    UnexpectedToken { token: Token, expected: String },
    UnexpectedEof { expected: String },
    InvalidLoopVariable { name: String },
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::UnexpectedToken { token, expected } => {
                write!(f, "Unexpected token `{token}`, expected {expected}")
            }
            ParseError::UnexpectedEof { expected } => {
                write!(f, "Unexpected end of file, expected {expected}")
            }
            ParseError::InvalidLoopVariable { name } => {
                write!(
                    f,
                    "Invalid loop variable `{name}`: must be a single letter in `i`..`z`"
                )
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl ErrorType for ParseError {
    fn error_type(&self) -> &'static str {
        "Error"
    }

    fn error_sub_type(&self) -> &'static str {
        "Syntax"
    }
}
