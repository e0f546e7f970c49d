use std::fmt;
use std::io::{self, Cursor, Read, Seek, SeekFrom};

use log::trace;

use crate::error::LexError;
use crate::span::Span;

/// Punctuation and operator symbols. Symbols may touch neighbouring tokens
/// without whitespace in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    // Maths
    Add, AddEq,       // +, +=
    Sub, SubEq,       // -, -=
    Mul, MulEq,       // *, *=
    Div, DivEq,       // /, /=
    Mod, ModEq,       // %, %=
    Pow, PowEq,       // @, @=
    Root, RootEq,     // #, #=
    // Bitwise
    BitNot, BitAnd,   // ~, &
    BitOr, BitXor,    // |, ^
    // Logical
    LogicNot, LogicAnd, // !, &&
    LogicOr, LogicXor,  // ||, ^^
    Less, LessEq,       // <, <=
    Greater, GreaterEq, // >, >=
    // Grouping
    ParenOpen, ParenClose,     // ( )
    BraceOpen, BraceClose,     // { }
    BracketOpen, BracketClose, // [ ]
    // Comments
    LineComment,       // //
    BlockCommentOpen,  // /*
    BlockCommentClose, // */
    // Other
    Eq, Dot, Comma, Colon, Semicolon,
}

/// Candidates tried by longest-match symbol recognition.
pub const SYMBOLS: &[Symbol] = &[
    Symbol::Add, Symbol::AddEq,
    Symbol::Sub, Symbol::SubEq,
    Symbol::Mul, Symbol::MulEq,
    Symbol::Div, Symbol::DivEq,
    Symbol::Mod, Symbol::ModEq,
    Symbol::Pow, Symbol::PowEq,
    Symbol::Root, Symbol::RootEq,
    Symbol::BitNot, Symbol::BitAnd,
    Symbol::BitOr, Symbol::BitXor,
    Symbol::LogicNot, Symbol::LogicAnd,
    Symbol::LogicOr, Symbol::LogicXor,
    Symbol::Less, Symbol::LessEq,
    Symbol::Greater, Symbol::GreaterEq,
    Symbol::ParenOpen, Symbol::ParenClose,
    Symbol::BraceOpen, Symbol::BraceClose,
    Symbol::BracketOpen, Symbol::BracketClose,
    Symbol::LineComment, Symbol::BlockCommentOpen, Symbol::BlockCommentClose,
    Symbol::Eq, Symbol::Dot, Symbol::Comma, Symbol::Colon, Symbol::Semicolon,
];

impl Symbol {
    pub fn literal(self) -> &'static str {
        use Symbol::*;
        match self {
            Add => "+",
            AddEq => "+=",
            Sub => "-",
            SubEq => "-=",
            Mul => "*",
            MulEq => "*=",
            Div => "/",
            DivEq => "/=",
            Mod => "%",
            ModEq => "%=",
            Pow => "@",
            PowEq => "@=",
            Root => "#",
            RootEq => "#=",
            BitNot => "~",
            BitAnd => "&",
            BitOr => "|",
            BitXor => "^",
            LogicNot => "!",
            LogicAnd => "&&",
            LogicOr => "||",
            LogicXor => "^^",
            Less => "<",
            LessEq => "<=",
            Greater => ">",
            GreaterEq => ">=",
            ParenOpen => "(",
            ParenClose => ")",
            BraceOpen => "{",
            BraceClose => "}",
            BracketOpen => "[",
            BracketClose => "]",
            LineComment => "//",
            BlockCommentOpen => "/*",
            BlockCommentClose => "*/",
            Eq => "=",
            Dot => ".",
            Comma => ",",
            Colon => ":",
            Semicolon => ";",
        }
    }
}

/// Words that can never be used as identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reserved {
    // Declarations
    Var,
    Func,
    // Control
    Return,
}

pub const RESERVED: &[Reserved] = &[Reserved::Var, Reserved::Func, Reserved::Return];

impl Reserved {
    pub fn keyword(self) -> &'static str {
        match self {
            Reserved::Var => "var",
            Reserved::Func => "func",
            Reserved::Return => "return",
        }
    }

    /// Exact, case-sensitive lookup. `variable` is not `var`.
    pub fn from_word(word: &str) -> Option<Self> {
        RESERVED.iter().copied().find(|r| r.keyword() == word)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    End,
    Symbol(Symbol),
    Reserved(Reserved),
    Identifier(String),
    StringLiteral(String),
    Number(i64),
    Unknown,
}

impl Token {
    /// The token as it would be written in source.
    pub fn lexeme(&self) -> String {
        match self {
            Token::End => String::new(),
            Token::Symbol(symbol) => symbol.literal().to_string(),
            Token::Reserved(reserved) => reserved.keyword().to_string(),
            Token::Identifier(name) => name.clone(),
            Token::StringLiteral(text) => format!("\"{}\"", text),
            Token::Number(value) => value.to_string(),
            Token::Unknown => "?".to_string(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::End => write!(f, "end of input"),
            Token::Symbol(symbol) => write!(f, "'{}'", symbol.literal()),
            Token::Reserved(reserved) => write!(f, "reserved word '{}'", reserved.keyword()),
            Token::Identifier(name) => write!(f, "identifier '{}'", name),
            Token::StringLiteral(text) => write!(f, "string \"{}\"", text),
            Token::Number(value) => write!(f, "number {}", value),
            Token::Unknown => write!(f, "unknown token"),
        }
    }
}

/// A token together with the bytes it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub span: Span,
}

impl Spanned {
    pub fn new(token: Token, span: Span) -> Self {
        Self { token, span }
    }
}

/// Optional length limits. `None` means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenizerConfig {
    pub max_word_len: Option<usize>,
    pub max_string_len: Option<usize>,
    pub max_number_len: Option<usize>,
}

impl TokenizerConfig {
    pub const LEGACY_WORD_LEN: usize = 256;
    pub const LEGACY_STRING_LEN: usize = 256;
    pub const LEGACY_NUMBER_LEN: usize = 64;

    /// The historical fixed buffer sizes, reported as errors instead of
    /// truncating.
    pub fn legacy() -> Self {
        Self {
            max_word_len: Some(Self::LEGACY_WORD_LEN),
            max_string_len: Some(Self::LEGACY_STRING_LEN),
            max_number_len: Some(Self::LEGACY_NUMBER_LEN),
        }
    }

    pub fn uniform(limit: usize) -> Self {
        Self {
            max_word_len: Some(limit),
            max_string_len: Some(limit),
            max_number_len: Some(limit),
        }
    }
}

/// Pulls one token at a time out of a seekable byte stream.
///
/// The tokenizer keeps no state between calls apart from the stream cursor.
/// Every alternative that fails to match seeks back to where it started, so
/// the next alternative (or the next call) sees the unconsumed input.
pub struct Tokenizer<R> {
    stream: R,
    config: TokenizerConfig,
}

impl<R: Read + Seek> Tokenizer<R> {
    pub fn new(stream: R) -> Self {
        Self::with_config(stream, TokenizerConfig::default())
    }

    pub fn with_config(stream: R, config: TokenizerConfig) -> Self {
        Self { stream, config }
    }

    pub fn into_inner(self) -> R {
        self.stream
    }

    pub fn position(&mut self) -> io::Result<u64> {
        self.stream.stream_position()
    }

    pub fn seek_to(&mut self, position: u64) -> io::Result<()> {
        self.stream.seek(SeekFrom::Start(position))?;
        Ok(())
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        Ok(self.next_spanned()?.token)
    }

    pub fn next_spanned(&mut self) -> Result<Spanned, LexError> {
        if !self.skip_whitespace()? {
            let end = self.position()?;
            trace!("end of input at {}", end);
            return Ok(Spanned::new(Token::End, Span::new(end, end)));
        }

        let start = self.position()?;
        let token = self.classify(start)?;
        let end = self.position()?;
        trace!("{} at {}..{}", token, start, end);

        Ok(Spanned::new(token, Span::new(start, end)))
    }

    /// Like [`Tokenizer::next_spanned`], but consumes comments instead of
    /// returning their markers.
    pub fn next_significant(&mut self) -> Result<Spanned, LexError> {
        loop {
            let spanned = self.next_spanned()?;
            match spanned.token {
                Token::Symbol(Symbol::LineComment) => self.skip_line()?,
                Token::Symbol(Symbol::BlockCommentOpen) => {
                    self.skip_block_comment(spanned.span.start)?
                }
                _ => return Ok(spanned),
            }
        }
    }

    fn classify(&mut self, start: u64) -> Result<Token, LexError> {
        if let Some(symbol) = self.read_symbol()? {
            return Ok(Token::Symbol(symbol));
        }
        if let Some(word) = self.read_word(start)? {
            return Ok(word);
        }
        if let Some(text) = self.read_string(start)? {
            return Ok(Token::StringLiteral(text));
        }
        if let Some(value) = self.read_number(start)? {
            return Ok(Token::Number(value));
        }
        Ok(Token::Unknown)
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.stream.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn unread(&mut self) -> io::Result<()> {
        self.stream.seek(SeekFrom::Current(-1))?;
        Ok(())
    }

    /// Returns `false` when the stream is exhausted.
    fn skip_whitespace(&mut self) -> io::Result<bool> {
        loop {
            match self.read_byte()? {
                Some(b) if is_space(b) => continue,
                Some(_) => {
                    self.unread()?;
                    return Ok(true);
                }
                None => return Ok(false),
            }
        }
    }

    fn read_symbol(&mut self) -> io::Result<Option<Symbol>> {
        let start = self.position()?;
        let mut text = Vec::with_capacity(2);
        let mut winner: Option<Symbol> = None;

        for &candidate in SYMBOLS {
            let literal = candidate.literal().as_bytes();

            text.clear();
            while text.len() < literal.len() {
                match self.read_byte()? {
                    Some(b) => text.push(b),
                    None => break,
                }
            }
            self.seek_to(start)?;

            if text == literal && winner.is_none_or(|w| literal.len() > w.literal().len()) {
                winner = Some(candidate);
            }
        }

        if let Some(symbol) = winner {
            self.stream
                .seek(SeekFrom::Current(symbol.literal().len() as i64))?;
        }
        Ok(winner)
    }

    fn read_word(&mut self, start: u64) -> Result<Option<Token>, LexError> {
        let mut text = String::new();

        match self.read_byte()? {
            Some(b) if b.is_ascii_alphabetic() || b == b'_' => {
                text.push(b as char);
                check_len("word", start, text.len(), self.config.max_word_len)?;
            }
            _ => {
                self.seek_to(start)?;
                return Ok(None);
            }
        }

        loop {
            match self.read_byte()? {
                Some(b) if b.is_ascii_alphanumeric() || b == b'_' => {
                    text.push(b as char);
                    check_len("word", start, text.len(), self.config.max_word_len)?;
                }
                Some(_) => {
                    self.unread()?;
                    break;
                }
                None => break,
            }
        }

        Ok(Some(match Reserved::from_word(&text) {
            Some(reserved) => Token::Reserved(reserved),
            None => Token::Identifier(text),
        }))
    }

    fn read_string(&mut self, start: u64) -> Result<Option<String>, LexError> {
        if self.read_byte()? != Some(b'"') {
            self.seek_to(start)?;
            return Ok(None);
        }

        let mut bytes = Vec::new();
        loop {
            match self.read_byte()? {
                Some(b'"') => break,
                Some(b) => {
                    bytes.push(b);
                    check_len("string", start, bytes.len(), self.config.max_string_len)?;
                }
                None => return Err(LexError::UnterminatedString { offset: start }),
            }
        }

        String::from_utf8(bytes)
            .map(Some)
            .map_err(|_| LexError::InvalidUtf8 { offset: start })
    }

    fn read_number(&mut self, start: u64) -> Result<Option<i64>, LexError> {
        let mut digits = String::new();
        loop {
            match self.read_byte()? {
                Some(b) if b.is_ascii_digit() => {
                    digits.push(b as char);
                    check_len("number", start, digits.len(), self.config.max_number_len)?;
                }
                Some(_) => {
                    self.unread()?;
                    break;
                }
                None => break,
            }
        }

        if digits.is_empty() {
            self.seek_to(start)?;
            return Ok(None);
        }

        digits
            .parse::<i64>()
            .map(Some)
            .map_err(|_| LexError::NumberOutOfRange {
                text: digits,
                offset: start,
            })
    }

    fn skip_line(&mut self) -> io::Result<()> {
        while let Some(b) = self.read_byte()? {
            if b == b'\n' {
                break;
            }
        }
        Ok(())
    }

    fn skip_block_comment(&mut self, start: u64) -> Result<(), LexError> {
        let mut prev = 0u8;
        loop {
            match self.read_byte()? {
                Some(b'/') if prev == b'*' => return Ok(()),
                Some(b) => prev = b,
                None => return Err(LexError::UnterminatedComment { offset: start }),
            }
        }
    }
}

/// The C locale whitespace set. `is_ascii_whitespace` leaves out the vertical
/// tab.
fn is_space(b: u8) -> bool {
    b.is_ascii_whitespace() || b == 0x0b
}

fn check_len(
    kind: &'static str,
    offset: u64,
    len: usize,
    limit: Option<usize>,
) -> Result<(), LexError> {
    match limit {
        Some(limit) if len > limit => Err(LexError::TokenTooLong {
            kind,
            offset,
            limit,
        }),
        _ => Ok(()),
    }
}

/// Collects every significant token of `source`, stopping after `End` or the
/// first `Unknown`.
pub fn tokenize(source: impl AsRef<[u8]>) -> Result<Vec<Spanned>, LexError> {
    tokenize_with(source, TokenizerConfig::default())
}

pub fn tokenize_with(
    source: impl AsRef<[u8]>,
    config: TokenizerConfig,
) -> Result<Vec<Spanned>, LexError> {
    let mut tokenizer = Tokenizer::with_config(Cursor::new(source.as_ref()), config);
    let mut tokens = Vec::new();

    loop {
        let spanned = tokenizer.next_significant()?;
        let last = matches!(spanned.token, Token::End | Token::Unknown);
        tokens.push(spanned);
        if last {
            break;
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer(source: &str) -> Tokenizer<Cursor<&[u8]>> {
        Tokenizer::new(Cursor::new(source.as_bytes()))
    }

    fn tokens(source: &str) -> Vec<Token> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|spanned| spanned.token)
            .collect()
    }

    #[test]
    fn test_empty_input_is_end() {
        assert_eq!(tokens(""), vec![Token::End]);
        assert_eq!(tokens("  \n\t "), vec![Token::End]);
    }

    #[test]
    fn test_simple_declaration() {
        assert_eq!(
            tokens("var x : int = 1;"),
            vec![
                Token::Reserved(Reserved::Var),
                Token::Identifier("x".to_string()),
                Token::Symbol(Symbol::Colon),
                Token::Identifier("int".to_string()),
                Token::Symbol(Symbol::Eq),
                Token::Number(1),
                Token::Symbol(Symbol::Semicolon),
                Token::End,
            ]
        );
    }

    #[test]
    fn test_longest_match_ampersands() {
        assert_eq!(tokens("&"), vec![Token::Symbol(Symbol::BitAnd), Token::End]);
        assert_eq!(tokens("&&"), vec![Token::Symbol(Symbol::LogicAnd), Token::End]);
        assert_eq!(
            tokens("&&&"),
            vec![
                Token::Symbol(Symbol::LogicAnd),
                Token::Symbol(Symbol::BitAnd),
                Token::End,
            ]
        );
    }

    #[test]
    fn test_two_char_operators_not_split() {
        assert_eq!(tokens(">="), vec![Token::Symbol(Symbol::GreaterEq), Token::End]);
        assert_eq!(
            tokens("> ="),
            vec![
                Token::Symbol(Symbol::Greater),
                Token::Symbol(Symbol::Eq),
                Token::End,
            ]
        );
        assert_eq!(
            tokens("+=-=||^^<="),
            vec![
                Token::Symbol(Symbol::AddEq),
                Token::Symbol(Symbol::SubEq),
                Token::Symbol(Symbol::LogicOr),
                Token::Symbol(Symbol::LogicXor),
                Token::Symbol(Symbol::LessEq),
                Token::End,
            ]
        );
    }

    #[test]
    fn test_symbol_literals_are_distinct() {
        for (i, a) in SYMBOLS.iter().enumerate() {
            let len = a.literal().len();
            assert!(len == 1 || len == 2, "{:?}", a);
            for b in &SYMBOLS[i + 1..] {
                assert_ne!(a.literal(), b.literal());
            }
        }
    }

    #[test]
    fn test_reserved_word_exactness() {
        assert_eq!(tokens("var"), vec![Token::Reserved(Reserved::Var), Token::End]);
        assert_eq!(
            tokens("variable"),
            vec![Token::Identifier("variable".to_string()), Token::End]
        );
        assert_eq!(
            tokens("func return Var"),
            vec![
                Token::Reserved(Reserved::Func),
                Token::Reserved(Reserved::Return),
                Token::Identifier("Var".to_string()),
                Token::End,
            ]
        );
    }

    #[test]
    fn test_number_then_word_without_whitespace() {
        assert_eq!(
            tokens("123abc"),
            vec![
                Token::Number(123),
                Token::Identifier("abc".to_string()),
                Token::End,
            ]
        );
    }

    #[test]
    fn test_identifier_with_underscore_and_digits() {
        assert_eq!(
            tokens("_tmp42"),
            vec![Token::Identifier("_tmp42".to_string()), Token::End]
        );
    }

    #[test]
    fn test_string_literal() {
        assert_eq!(
            tokens(r#""hello world"x"#),
            vec![
                Token::StringLiteral("hello world".to_string()),
                Token::Identifier("x".to_string()),
                Token::End,
            ]
        );
        assert_eq!(
            tokens(r#""a\n""#),
            vec![Token::StringLiteral("a\\n".to_string()), Token::End]
        );
    }

    #[test]
    fn test_unterminated_string() {
        let err = tokenize("\"abc").unwrap_err();
        assert!(matches!(err, LexError::UnterminatedString { offset: 0 }));
    }

    #[test]
    fn test_number_out_of_range() {
        let err = tokenize("99999999999999999999").unwrap_err();
        assert!(matches!(err, LexError::NumberOutOfRange { offset: 0, .. }));
        assert_eq!(tokens("9223372036854775807"), vec![Token::Number(i64::MAX), Token::End]);
    }

    #[test]
    fn test_unknown_leaves_cursor_at_failing_byte() {
        let mut t = tokenizer("  $x");
        assert_eq!(t.next_token().unwrap(), Token::Unknown);
        assert_eq!(t.position().unwrap(), 2);
        assert_eq!(t.next_token().unwrap(), Token::Unknown);
        assert_eq!(t.position().unwrap(), 2);
    }

    #[test]
    fn test_failed_alternatives_rewind() {
        let mut t = tokenizer("abc");
        assert_eq!(t.read_symbol().unwrap(), None);
        assert_eq!(t.position().unwrap(), 0);
        assert_eq!(t.read_string(0).unwrap(), None);
        assert_eq!(t.position().unwrap(), 0);
        assert_eq!(t.read_number(0).unwrap(), None);
        assert_eq!(t.position().unwrap(), 0);

        let mut t = tokenizer("123");
        assert_eq!(t.read_word(0).unwrap(), None);
        assert_eq!(t.position().unwrap(), 0);

        let mut t = tokenizer("x");
        t.seek_to(1).unwrap();
        assert_eq!(t.read_symbol().unwrap(), None);
        assert_eq!(t.position().unwrap(), 1);
    }

    #[test]
    fn test_symbol_at_end_of_input() {
        let mut t = tokenizer("a&");
        t.seek_to(1).unwrap();
        assert_eq!(t.read_symbol().unwrap(), Some(Symbol::BitAnd));
        assert_eq!(t.position().unwrap(), 2);
    }

    #[test]
    fn test_spans() {
        let spanned = tokenize("  var xy").unwrap();
        assert_eq!(spanned[0].span, Span::new(2, 5));
        assert_eq!(spanned[1].span, Span::new(6, 8));
        assert_eq!(spanned[2].span, Span::new(8, 8));
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(
            tokens("// leading comment\nvar /* inline */ y"),
            vec![
                Token::Reserved(Reserved::Var),
                Token::Identifier("y".to_string()),
                Token::End,
            ]
        );
    }

    #[test]
    fn test_comment_markers_are_symbols() {
        let mut t = tokenizer("//x");
        assert_eq!(t.next_token().unwrap(), Token::Symbol(Symbol::LineComment));
        let mut t = tokenizer("*/");
        assert_eq!(
            t.next_token().unwrap(),
            Token::Symbol(Symbol::BlockCommentClose)
        );
    }

    #[test]
    fn test_unterminated_block_comment() {
        let err = tokenize("var /* never closed").unwrap_err();
        assert!(matches!(err, LexError::UnterminatedComment { offset: 4 }));
    }

    #[test]
    fn test_legacy_limits_report_too_long() {
        let ok = "a".repeat(TokenizerConfig::LEGACY_WORD_LEN);
        let tokens = tokenize_with(&ok, TokenizerConfig::legacy()).unwrap();
        assert_eq!(tokens[0].token, Token::Identifier(ok.clone()));

        let long = "a".repeat(TokenizerConfig::LEGACY_WORD_LEN + 1);
        let err = tokenize_with(&long, TokenizerConfig::legacy()).unwrap_err();
        assert!(matches!(
            err,
            LexError::TokenTooLong {
                kind: "word",
                limit: 256,
                ..
            }
        ));
    }

    #[test]
    fn test_uniform_limit_applies_to_strings_and_numbers() {
        let config = TokenizerConfig::uniform(3);
        assert!(tokenize_with("\"abc\" 123", config).is_ok());
        assert!(matches!(
            tokenize_with("\"abcd\"", config).unwrap_err(),
            LexError::TokenTooLong { kind: "string", .. }
        ));
        assert!(matches!(
            tokenize_with("1234", config).unwrap_err(),
            LexError::TokenTooLong { kind: "number", .. }
        ));
    }

    #[test]
    fn test_zero_limit_rejects_single_byte_tokens() {
        let config = TokenizerConfig::uniform(0);
        for (source, expected) in [("a", "word"), ("1", "number"), ("\"x\"", "string")] {
            match tokenize_with(source, config).unwrap_err() {
                LexError::TokenTooLong { kind, offset, limit } => {
                    assert_eq!(kind, expected);
                    assert_eq!(offset, 0);
                    assert_eq!(limit, 0);
                }
                other => panic!("unexpected error for {:?}: {:?}", source, other),
            }
        }

        let empty: Vec<_> = tokenize_with("\"\"", config)
            .unwrap()
            .into_iter()
            .map(|spanned| spanned.token)
            .collect();
        assert_eq!(empty, vec![Token::StringLiteral(String::new()), Token::End]);
    }

    #[test]
    fn test_vertical_tab_separates_tokens() {
        assert_eq!(
            tokens("var\x0bx\x0c;"),
            vec![
                Token::Reserved(Reserved::Var),
                Token::Identifier("x".to_string()),
                Token::Symbol(Symbol::Semicolon),
                Token::End,
            ]
        );
    }

    #[test]
    fn test_unbounded_by_default() {
        let long = "b".repeat(10_000);
        assert_eq!(tokens(&long), vec![Token::Identifier(long.clone()), Token::End]);
    }

    #[test]
    fn test_lexeme() {
        assert_eq!(Token::Symbol(Symbol::LogicAnd).lexeme(), "&&");
        assert_eq!(Token::Reserved(Reserved::Return).lexeme(), "return");
        assert_eq!(Token::StringLiteral("hi".to_string()).lexeme(), "\"hi\"");
        assert_eq!(Token::Number(-7).lexeme(), "-7");
    }

    #[test]
    fn test_tokenize_stops_at_unknown() {
        assert_eq!(
            tokens("x $ y"),
            vec![Token::Identifier("x".to_string()), Token::Unknown]
        );
    }
}
