use std::fmt::{Display, Formatter, Result};

use super::token::{Bracket, Comparator, Keyword, LogicOp, MoveCommand, Number, PenCommand, Token};

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Token::Keyword(keyword) => write!(f, "{keyword}"),
            Token::Move(command) => write!(f, "{command}"),
            Token::Pen(command) => write!(f, "{command}"),
            Token::Comparator(comparator) => write!(f, "{comparator}"),
            Token::Logic(op) => write!(f, "{op}"),
            Token::Identifier(name) => write!(f, "{name}"),
            Token::Number(number) => write!(f, "{number}"),
            Token::MalformedNumber(text) => write!(f, "{text}"),
            Token::Bracket(bracket) => write!(f, "{bracket}"),
            Token::Comma => write!(f, ","),
            Token::Whitespace(width) => write!(f, "{}", " ".repeat(*width)),
            Token::Comment(text) => write!(f, "#{text}"),
            Token::NewLine => writeln!(f),
            Token::Unknown(ch) => write!(f, "{ch}"),
        }
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            Keyword::Def => "def",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::For => "for",
            Keyword::In => "in",
            Keyword::Range => "range",
            Keyword::Zip => "zip",
        };
        write!(f, "{s}")
    }
}

impl Display for MoveCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            MoveCommand::Forward => "FD",
            MoveCommand::Backward => "BK",
            MoveCommand::Left => "LT",
            MoveCommand::Right => "RT",
            MoveCommand::Width => "WIDTH",
        };
        write!(f, "{s}")
    }
}

impl Display for PenCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            PenCommand::Up => "PU",
            PenCommand::Down => "PD",
        };
        write!(f, "{s}")
    }
}

impl Display for Comparator {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            Comparator::Eq => "==",
            Comparator::Ne => "!=",
            Comparator::Lt => "<",
            Comparator::Gt => ">",
            Comparator::Le => "<=",
            Comparator::Ge => ">=",
        };
        write!(f, "{s}")
    }
}

impl Display for LogicOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            LogicOp::Not => "!",
            LogicOp::And => "&&",
            LogicOp::Or => "||",
        };
        write!(f, "{s}")
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.raw_value())
    }
}

impl Display for Bracket {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            Bracket::RoundOpen => "(",
            Bracket::RoundClose => ")",
            Bracket::CurlyOpen => "{",
            Bracket::CurlyClose => "}",
        };
        write!(f, "{s}")
    }
}
