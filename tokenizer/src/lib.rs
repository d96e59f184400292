mod char_offsets;
mod token;
mod token_display;
mod tokenizer;

pub use diagnostic::{LinesTable, Span, Spanned};
pub use token::{Bracket, Comparator, Keyword, LogicOp, MoveCommand, Number, PenCommand, Token};
pub use tokenizer::{tokenize, TokenIter};
