pub mod lexer;
pub mod parser;

use std::io::Cursor;

use crate::error::ParseError;
use lexer::TokenizerConfig;
use parser::Parser;

/// Parses an in-memory source into a fresh parser state.
pub fn parse(source: &str) -> Result<Parser, ParseError> {
    parse_with(source, TokenizerConfig::default())
}

pub fn parse_with(source: &str, config: TokenizerConfig) -> Result<Parser, ParseError> {
    let mut parser = Parser::with_config(config);
    parser.build(Cursor::new(source.as_bytes()))?;
    Ok(parser)
}
