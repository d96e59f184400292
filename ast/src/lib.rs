pub mod ast;
mod ast_display;
mod error;
mod parser;

pub use error::ParseError;
pub use parser::ASTParser;
