use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Keyword {
    Def,
    If,
    Else,
    For,
    In,
    Range,
    Zip,
}

/// Turtle movement vocabulary. Each command takes one operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MoveCommand {
    /// FD
    Forward,
    /// BK
    Backward,
    /// LT
    Left,
    /// RT
    Right,
    /// WIDTH
    Width,
}

/// Pen vocabulary. No operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PenCommand {
    /// PU
    Up,
    /// PD
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Comparator {
    /// ==
    Eq,
    /// !=
    Ne,
    /// <
    Lt,
    /// >
    Gt,
    /// <=
    Le,
    /// >=
    Ge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LogicOp {
    /// !
    Not,
    /// &&
    And,
    /// ||
    Or,
}

/// Numeric literal, raw lexeme preserved verbatim. The translator never
/// reparses or normalizes the value; it is passed through to the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Number {
    Integer(String),
    Float(String),
}

impl Number {
    pub fn raw_value(&self) -> &str {
        match self {
            Self::Integer(value) => value,
            Self::Float(value) => value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Bracket {
    /// (
    RoundOpen,
    /// )
    RoundClose,
    /// {
    CurlyOpen,
    /// }
    CurlyClose,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Keyword(Keyword),
    Move(MoveCommand),
    Pen(PenCommand),
    Comparator(Comparator),
    Logic(LogicOp),
    Identifier(String),
    Number(Number),
    /// A numeric-looking lexeme the number shape rejects, e.g. `1e` or
    /// `1.2.3`; reported by the parser, not the lexer.
    MalformedNumber(String),
    Bracket(Bracket),
    Comma,
    Whitespace(usize),
    Comment(String),
    NewLine,
    /// A character no rule matches; reported by the parser, not the lexer.
    Unknown(char),
}
