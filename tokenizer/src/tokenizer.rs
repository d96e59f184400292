use std::iter::Peekable;

use diagnostic::{LinesTable, Span};

use super::char_offsets::CharOffsets;
use super::token::{Bracket, Comparator, Keyword, LogicOp, MoveCommand, Number, PenCommand, Token};

/// Lex a character stream into `(Token, Span)` pairs.
///
/// Trivia (whitespace, comments, newlines) is emitted as tokens too; the
/// parser filters it. Offsets are byte positions from the start of the
/// stream, and every newline is recorded in the lines table for error spans.
pub fn tokenize<I: Iterator<Item = char>>(chars: I) -> TokenIter<I> {
    TokenIter {
        chars: CharOffsets::new(chars).peekable(),
        accumulated: String::new(),
        lines_table: LinesTable::new(),
    }
}

pub struct TokenIter<I: Iterator<Item = char>> {
    chars: Peekable<CharOffsets<I>>,
    accumulated: String,
    lines_table: LinesTable,
}

impl<I: Iterator<Item = char>> TokenIter<I> {
    pub fn lines_table(&self) -> &LinesTable {
        &self.lines_table
    }

    /// Consume the pending character's lookahead if it equals `expected`.
    fn eat(&mut self, expected: char) -> bool {
        if self.chars.peek().map(|(_, ch)| *ch) == Some(expected) {
            self.chars.next();
            true
        } else {
            false
        }
    }

    fn lex_whitespace(&mut self, start: usize) -> Option<(Token, Span)> {
        while let Some((_, ch)) = self.chars.peek() {
            if ch.is_whitespace() && *ch != '\n' {
                self.accumulated.push(*ch);
                self.chars.next();
            } else {
                break;
            }
        }

        let width = self.accumulated.len();
        self.accumulated.clear();
        Some((Token::Whitespace(width), Span::new(start, start + width)))
    }

    /// Numbers: optional leading `-` (consumed by the caller), digits, an
    /// optional `.` fraction and an optional `e`/`E` exponent with sign. The
    /// raw lexeme is kept verbatim. Lexemes that break the shape, like `1e`
    /// or `1.2.3`, are flagged so the parser rejects them.
    fn lex_number(&mut self, start: usize) -> Option<(Token, Span)> {
        while let Some((_, ch)) = self.chars.peek() {
            let ch = *ch;
            let after_exponent = matches!(self.accumulated.chars().last(), Some('e' | 'E'));
            let take = ch.is_ascii_digit()
                || ch == '.'
                || ch == 'e'
                || ch == 'E'
                || ((ch == '+' || ch == '-') && after_exponent);
            if take {
                self.accumulated.push(ch);
                self.chars.next();
            } else {
                break;
            }
        }

        let lexeme = std::mem::take(&mut self.accumulated);
        let span = Span::new(start, start + lexeme.len());
        if !well_formed_number(&lexeme) {
            return Some((Token::MalformedNumber(lexeme), span));
        }
        let number = if lexeme.contains(['.', 'e', 'E']) {
            Number::Float(lexeme)
        } else {
            Number::Integer(lexeme)
        };
        Some((Token::Number(number), span))
    }

    fn lex_alphanumeric(&mut self, start: usize) -> Option<(Token, Span)> {
        while let Some((_, ch)) = self.chars.peek() {
            if ch.is_alphanumeric() || *ch == '_' {
                self.accumulated.push(*ch);
                self.chars.next();
            } else {
                break;
            }
        }

        let token = match self.accumulated.as_str() {
            "def" => Token::Keyword(Keyword::Def),
            "if" => Token::Keyword(Keyword::If),
            "else" => Token::Keyword(Keyword::Else),
            "for" => Token::Keyword(Keyword::For),
            "in" => Token::Keyword(Keyword::In),
            "range" => Token::Keyword(Keyword::Range),
            "zip" => Token::Keyword(Keyword::Zip),
            "FD" => Token::Move(MoveCommand::Forward),
            "BK" => Token::Move(MoveCommand::Backward),
            "LT" => Token::Move(MoveCommand::Left),
            "RT" => Token::Move(MoveCommand::Right),
            "WIDTH" => Token::Move(MoveCommand::Width),
            "PU" => Token::Pen(PenCommand::Up),
            "PD" => Token::Pen(PenCommand::Down),
            _ => Token::Identifier(self.accumulated.clone()),
        };
        let span = Span::new(start, start + self.accumulated.len());
        self.accumulated.clear();
        Some((token, span))
    }

    /// `#` line comment: runs to the newline, which is left in the stream so
    /// the next token records the line break.
    fn lex_comment(&mut self, start: usize) -> Option<(Token, Span)> {
        while let Some((_, ch)) = self.chars.peek() {
            if *ch == '\n' {
                break;
            }
            self.accumulated.push(*ch);
            self.chars.next();
        }

        let text = std::mem::take(&mut self.accumulated);
        let span = Span::new(start, start + text.len() + 1);
        Some((Token::Comment(text), span))
    }

    fn lex_default(&mut self) -> Option<(Token, Span)> {
        let (i, ch) = self.chars.next()?;
        let single = |token| Some((token, Span::new(i, i + 1)));
        let double = |token| Some((token, Span::new(i, i + 2)));

        match ch {
            '\n' => {
                self.lines_table.add_line(i + 1);
                single(Token::NewLine)
            }
            '#' => self.lex_comment(i),
            '(' => single(Token::Bracket(Bracket::RoundOpen)),
            ')' => single(Token::Bracket(Bracket::RoundClose)),
            '{' => single(Token::Bracket(Bracket::CurlyOpen)),
            '}' => single(Token::Bracket(Bracket::CurlyClose)),
            ',' => single(Token::Comma),
            '=' => {
                if self.eat('=') {
                    double(Token::Comparator(Comparator::Eq))
                } else {
                    single(Token::Unknown('='))
                }
            }
            '!' => {
                if self.eat('=') {
                    double(Token::Comparator(Comparator::Ne))
                } else {
                    single(Token::Logic(LogicOp::Not))
                }
            }
            '<' => {
                if self.eat('=') {
                    double(Token::Comparator(Comparator::Le))
                } else {
                    single(Token::Comparator(Comparator::Lt))
                }
            }
            '>' => {
                if self.eat('=') {
                    double(Token::Comparator(Comparator::Ge))
                } else {
                    single(Token::Comparator(Comparator::Gt))
                }
            }
            '&' => {
                if self.eat('&') {
                    double(Token::Logic(LogicOp::And))
                } else {
                    single(Token::Unknown('&'))
                }
            }
            '|' => {
                if self.eat('|') {
                    double(Token::Logic(LogicOp::Or))
                } else {
                    single(Token::Unknown('|'))
                }
            }
            '-' if matches!(self.chars.peek(), Some((_, ch)) if ch.is_ascii_digit()) => {
                self.accumulated.push('-');
                self.lex_number(i)
            }
            ch if ch.is_whitespace() => {
                self.accumulated.push(ch);
                self.lex_whitespace(i)
            }
            ch if ch.is_ascii_digit() => {
                self.accumulated.push(ch);
                self.lex_number(i)
            }
            ch if ch.is_alphanumeric() || ch == '_' => {
                self.accumulated.push(ch);
                self.lex_alphanumeric(i)
            }
            ch => single(Token::Unknown(ch)),
        }
    }
}

impl<I: Iterator<Item = char>> Iterator for TokenIter<I> {
    type Item = (Token, Span);

    fn next(&mut self) -> Option<Self::Item> {
        self.lex_default()
    }
}

/// `-?digits(.digits)?([eE][+-]?digits)?`, the whole lexeme and nothing more.
fn well_formed_number(lexeme: &str) -> bool {
    let mut chars = lexeme.chars().peekable();
    if chars.peek() == Some(&'-') {
        chars.next();
    }
    if !eat_digits(&mut chars) {
        return false;
    }
    if chars.peek() == Some(&'.') {
        chars.next();
        if !eat_digits(&mut chars) {
            return false;
        }
    }
    if matches!(chars.peek(), Some('e' | 'E')) {
        chars.next();
        if matches!(chars.peek(), Some('+' | '-')) {
            chars.next();
        }
        if !eat_digits(&mut chars) {
            return false;
        }
    }
    chars.next().is_none()
}

fn eat_digits(chars: &mut Peekable<std::str::Chars<'_>>) -> bool {
    let mut any = false;
    while matches!(chars.peek(), Some(ch) if ch.is_ascii_digit()) {
        chars.next();
        any = true;
    }
    any
}
