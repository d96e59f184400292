use std::fmt::Display;
use std::io::{Read, Seek, SeekFrom};
use std::path::PathBuf;

use super::lines_table::LinesTable;
use super::span::Spanned;

/// Category labels attached to an error for rendering.
pub trait ErrorType {
    fn error_type(&self) -> &'static str;
    fn error_sub_type(&self) -> &'static str;
}

/// A spanned error together with everything needed to point at the source:
/// the lines table recorded while lexing and the path of the offending file.
pub struct ErrorMessage<E: std::error::Error + Display> {
    pub error: Spanned<E>,
    pub lines_table: LinesTable,
    pub file_path: PathBuf,
}

impl<E: std::error::Error + Display> ErrorMessage<E> {
    pub fn new(error: Spanned<E>, lines_table: LinesTable, file_path: PathBuf) -> Self {
        Self {
            error,
            lines_table,
            file_path,
        }
    }

    /// Re-read the slice of the source surrounding the error span, up to
    /// `lines_before` lines of leading context through the end of the error
    /// line. Returns the slice and the 1-based number of its first line.
    pub fn extract_code_snippet(&self, lines_before: usize) -> std::io::Result<(String, usize)> {
        let mut file = std::fs::File::open(&self.file_path)?;

        let err_line = self.lines_table.line(self.error.span.start);
        let start_offset = self
            .lines_table
            .offset(err_line.saturating_sub(lines_before))
            .unwrap_or(0);
        let fallback_end_offset = file.metadata()?.len() as usize;
        let end_offset = self
            .lines_table
            .offset(err_line + 1)
            .unwrap_or(fallback_end_offset);
        let len = end_offset.saturating_sub(start_offset);

        file.seek(SeekFrom::Start(start_offset as u64))?;
        let mut buf = vec![0u8; len];
        file.read_exact(&mut buf)?;
        let code = String::from_utf8(buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        Ok((code, self.lines_table.line(start_offset)))
    }
}
