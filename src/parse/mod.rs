pub mod ast;
mod cursor;
mod error;
mod lexer;
mod parser;

pub use cursor::Cursor;
pub use error::{LexError, ParseError};
pub use lexer::{tokenize, Token};

/// Builds the expression tree for `tokens`.
pub fn parse(tokens: &[Token]) -> Result<ast::Node, ParseError> {
    parser::Parser::new(tokens).parse()
}
