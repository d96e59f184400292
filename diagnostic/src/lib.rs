mod error_message;
mod lines_table;
mod span;

pub use error_message::{ErrorMessage, ErrorType};
pub use lines_table::LinesTable;
pub use span::{Span, Spanned};
