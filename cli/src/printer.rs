use std::io::{Result, Stderr, Write, stderr};

use anstream::AutoStream;
use anstyle::Reset;

use diagnostic::{ErrorMessage, ErrorType};
use tokenizer::{tokenize, Token};

use super::theme::Theme;
use crate::EnableAnsi;

const LINES_BEFORE: usize = 5;

pub struct Printer {
    theme: Theme,
    stderr: AutoStream<Stderr>,
}

impl Printer {
    pub fn new(enable_ansi: EnableAnsi) -> Self {
        let stderr = match enable_ansi {
            EnableAnsi::Auto => AutoStream::auto(stderr()),
            EnableAnsi::Always => AutoStream::always(stderr()),
            EnableAnsi::Never => AutoStream::never(stderr()),
        };
        Self {
            theme: Theme::DRACULA,
            stderr,
        }
    }

    /// Re-tokenize a code snippet and color it by token class.
    fn paint_code(&self, code: String) -> String {
        tokenize(code.chars())
            .map(|(token, _span)| {
                let style = match token {
                    Token::Keyword(_) | Token::Move(_) | Token::Pen(_) => self.theme.keyword,
                    Token::Bracket(_) => self.theme.bracket,
                    Token::Number(_) | Token::MalformedNumber(_) => self.theme.literal,
                    Token::Comparator(_) | Token::Logic(_) => self.theme.operator,
                    Token::Comment(_) => self.theme.comment,
                    _ => self.theme.code,
                };
                format!("{}{}{}", style.render(), token, Reset.render())
            })
            .collect()
    }

    pub fn error<E: std::error::Error + std::fmt::Display + ErrorType>(
        &mut self,
        msg: ErrorMessage<E>,
    ) -> Result<()> {
        let (code_slice, start_line_num) = msg.extract_code_snippet(LINES_BEFORE)?;

        let code_slice = self.paint_code(code_slice);

        // Print the error type and message
        let err_ty = msg.error.error_type();
        writeln!(
            self.stderr,
            "{err_ty_color}{err_ty}{r}: {bold}{err_sub_ty}{r}: {msg}",
            err_ty = err_ty,
            err_ty_color = self.theme.error.bold().render(),
            err_sub_ty = msg.error.error_sub_type(),
            msg = msg.error,
            bold = anstyle::Style::new().bold().render(),
            r = Reset.render()
        )?;

        // Print the file path and line/column info
        let arrow_body = "-".repeat(err_ty.len() - 1);
        writeln!(
            self.stderr,
            "{arrow_body}>  {color}{}:{}:{}{r}",
            msg.file_path.display(),
            msg.lines_table.line(msg.error.span.start),
            msg.lines_table.column(msg.error.span.start),
            color = self.theme.path.render(),
            r = Reset.render()
        )?;

        // Print the code slice with line numbers
        let num_width = (start_line_num + LINES_BEFORE + 1).to_string().len();
        let code_with_lines = code_slice
            .lines()
            .enumerate()
            .map(|(i, line)| {
                format!(
                    "{color}{:>width$} |{r} {}",
                    i + start_line_num,
                    line,
                    width = num_width,
                    color = self.theme.line_number.render(),
                    r = Reset.render()
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        writeln!(self.stderr, "{code_with_lines}")?;

        // Underline the error span
        let col = msg.lines_table.column(msg.error.span.start);
        let len = (msg.error.span.end - msg.error.span.start).max(1);
        writeln!(
            self.stderr,
            "{:>width$} {:>col$}{color}/{:^<len$}\\{r}",
            "",
            "",
            "",
            width = num_width,
            col = col,
            len = len,
            color = self.theme.error.render(),
            r = Reset.render()
        )?;
        writeln!(self.stderr)
    }
}
