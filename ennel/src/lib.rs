//! Front end of the Ennel language.
//!
//! ```text
//! Source → Tokenizer → Tree Builder → SyntaxTree
//! ```
//!
//! 1. [`parser::lexer`] classifies bytes from any `Read + Seek` stream into
//!    [`parser::lexer::Token`]s, using longest match for symbols and
//!    rewinding the stream whenever an alternative fails.
//! 2. [`parser::parser`] drives the declaration grammar
//!    (`var name : type = expr;`) and folds `+` chains into binary-operation
//!    nodes.
//! 3. [`ir::ast`] holds the first-child/next-sibling [`ir::ast::SyntaxTree`].
//!
//! Errors are returned as [`error::ParseError`]; the caller decides whether
//! to stop or move on to the next stream.

pub mod error;
pub mod ir;
pub mod parser;
pub mod span;

pub use error::{LexError, ParseError, SyntaxError, SyntaxErrorKind};
pub use ir::ast::{SyntaxTree, Walk};
pub use parser::lexer::{Reserved, Spanned, Symbol, Token, Tokenizer, TokenizerConfig};
pub use parser::parser::Parser;
pub use parser::{parse, parse_with};
