use thiserror::Error;

/// Errors raised while classifying bytes into tokens.
#[derive(Error, Debug)]
pub enum LexError {
    #[error("{kind} starting at byte {offset} is longer than the {limit}-byte limit")]
    TokenTooLong {
        kind: &'static str,
        offset: u64,
        limit: usize,
    },

    #[error("unterminated string literal starting at byte {offset}")]
    UnterminatedString { offset: u64 },

    #[error("unterminated block comment starting at byte {offset}")]
    UnterminatedComment { offset: u64 },

    #[error("number literal '{text}' at byte {offset} does not fit in 64 bits")]
    NumberOutOfRange { text: String, offset: u64 },

    #[error("string literal at byte {offset} is not valid UTF-8")]
    InvalidUtf8 { offset: u64 },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl LexError {
    /// Byte offset the error points at, when it has one.
    pub fn offset(&self) -> Option<u64> {
        match self {
            LexError::TokenTooLong { offset, .. }
            | LexError::UnterminatedString { offset }
            | LexError::UnterminatedComment { offset }
            | LexError::NumberOutOfRange { offset, .. }
            | LexError::InvalidUtf8 { offset } => Some(*offset),
            LexError::Io { .. } => None,
        }
    }
}

/// What the tree builder was looking for when it gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// Top-level token that cannot start a statement.
    UnknownTokenType,
    /// Reserved word with no statement grammar attached.
    UnknownReserved,
    ExpectedIdentifier,
    ExpectedColon,
    ExpectedTypeName,
    ExpectedEq,
    ExpectedSemicolon,
    /// An operator without two operands left to combine.
    MissingOperand,
    /// Operands left over once every operator was reduced.
    MissingOperator,
}

impl std::fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use SyntaxErrorKind::*;
        match self {
            UnknownTokenType => write!(f, "unknown token type"),
            UnknownReserved => write!(f, "unknown reserved word"),
            ExpectedIdentifier => write!(f, "expected identifier"),
            ExpectedColon => write!(f, "expected ':' after identifier"),
            ExpectedTypeName => write!(f, "expected identifier after ':'"),
            ExpectedEq => write!(f, "expected '=' after type"),
            ExpectedSemicolon => write!(f, "expected ';' after value"),
            MissingOperand => write!(f, "expected operand for operator"),
            MissingOperator => write!(f, "expected operator between operands"),
        }
    }
}

/// A grammar violation with the offending token's position.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("byte {offset}: {kind}, found {found}")]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub offset: u64,
    pub found: String,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, offset: u64, found: impl Into<String>) -> Self {
        Self {
            kind,
            offset,
            found: found.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Lexer error: {0}")]
    Lex(#[from] LexError),

    #[error("Syntax error at {0}")]
    Syntax(#[from] SyntaxError),
}

impl ParseError {
    pub fn offset(&self) -> Option<u64> {
        match self {
            ParseError::Lex(e) => e.offset(),
            ParseError::Syntax(e) => Some(e.offset),
        }
    }

    pub fn syntax_kind(&self) -> Option<SyntaxErrorKind> {
        match self {
            ParseError::Syntax(e) => Some(e.kind),
            ParseError::Lex(_) => None,
        }
    }
}

impl From<std::io::Error> for ParseError {
    fn from(source: std::io::Error) -> Self {
        ParseError::Lex(LexError::Io { source })
    }
}
