use std::collections::VecDeque;
use std::io::{Read, Seek};

use log::debug;

use super::lexer::{Reserved, Spanned, Symbol, Token, Tokenizer, TokenizerConfig};
use crate::error::{ParseError, SyntaxError, SyntaxErrorKind};
use crate::ir::ast::{self, SyntaxTree};

/// Accumulates the top-level sequence of every stream built into it.
///
/// Each successful [`Parser::build`] appends that stream's declarations
/// followed by one `End` marker node.
#[derive(Debug, Default)]
pub struct Parser {
    root: Option<Box<SyntaxTree>>,
    config: TokenizerConfig,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TokenizerConfig) -> Self {
        Self { root: None, config }
    }

    pub fn config(&self) -> TokenizerConfig {
        self.config
    }

    pub fn root(&self) -> Option<&SyntaxTree> {
        self.root.as_deref()
    }

    pub fn into_root(self) -> Option<Box<SyntaxTree>> {
        self.root
    }

    /// Every accumulated top-level node, `End` markers included.
    pub fn nodes(&self) -> impl Iterator<Item = &SyntaxTree> {
        self.root.iter().flat_map(|root| root.siblings())
    }

    /// Accumulated declarations, without the per-stream `End` markers.
    pub fn declarations(&self) -> impl Iterator<Item = &SyntaxTree> {
        self.nodes().filter(|node| node.token != Token::End)
    }

    /// Parses one stream and appends its statements. On error the
    /// accumulated tree is left exactly as it was.
    pub fn build<R: Read + Seek>(&mut self, stream: R) -> Result<(), ParseError> {
        let mut builder = TreeBuilder::new(Tokenizer::with_config(stream, self.config));
        let sequence = builder.parse_sequence()?;

        match self.root {
            Some(ref mut root) => root.push_sibling(sequence),
            None => self.root = Some(sequence),
        }
        Ok(())
    }
}

enum State {
    Scanning,
    Done(Spanned),
}

/// Drives the declaration grammar over one stream.
pub(crate) struct TreeBuilder<R> {
    tokenizer: Tokenizer<R>,
}

impl<R: Read + Seek> TreeBuilder<R> {
    pub(crate) fn new(tokenizer: Tokenizer<R>) -> Self {
        Self { tokenizer }
    }

    /// Reads statements until `End`. The returned chain always ends with the
    /// `End` marker node.
    pub(crate) fn parse_sequence(&mut self) -> Result<Box<SyntaxTree>, ParseError> {
        let mut statements = Vec::new();
        let mut state = State::Scanning;

        let end = loop {
            match state {
                State::Scanning => {
                    let current = self.tokenizer.next_significant()?;
                    match current.token {
                        Token::Reserved(_) => statements.push(self.parse_reserved(current)?),
                        Token::End => state = State::Done(current),
                        _ => return Err(unexpected(SyntaxErrorKind::UnknownTokenType, &current)),
                    }
                }
                State::Done(end) => break end,
            }
        };
        debug!("end of stream after {} statement(s)", statements.len());

        let mut sequence = SyntaxTree::leaf(end);
        if let Some(mut head) = ast::link(statements) {
            head.push_sibling(sequence);
            sequence = head;
        }
        Ok(sequence)
    }

    fn parse_reserved(&mut self, current: Spanned) -> Result<Box<SyntaxTree>, ParseError> {
        debug!("{} at byte {}", current.token, current.span.start);

        match current.token {
            Token::Reserved(Reserved::Var) => self.parse_var(current),
            _ => Err(unexpected(SyntaxErrorKind::UnknownReserved, &current)),
        }
    }

    /// `var <name> : <type> = <expression> ;`
    fn parse_var(&mut self, var: Spanned) -> Result<Box<SyntaxTree>, ParseError> {
        let name = self.expect_identifier(SyntaxErrorKind::ExpectedIdentifier)?;
        self.expect_symbol(Symbol::Colon, SyntaxErrorKind::ExpectedColon)?;
        let ty = self.expect_identifier(SyntaxErrorKind::ExpectedTypeName)?;
        self.expect_symbol(Symbol::Eq, SyntaxErrorKind::ExpectedEq)?;

        let mut expression = ExpressionParser::new();
        expression.collect(&mut self.tokenizer)?;
        let value = expression.reduce()?;
        debug_assert!(expression.is_drained());

        self.expect_symbol(Symbol::Semicolon, SyntaxErrorKind::ExpectedSemicolon)?;

        debug!("declaration of {} at byte {}", name.token, var.span.start);

        let mut children = vec![SyntaxTree::leaf(name), SyntaxTree::leaf(ty)];
        children.extend(value);
        Ok(SyntaxTree::with_children(var, children))
    }

    fn expect_identifier(&mut self, kind: SyntaxErrorKind) -> Result<Spanned, ParseError> {
        let current = self.tokenizer.next_significant()?;
        match current.token {
            Token::Identifier(_) => Ok(current),
            _ => Err(unexpected(kind, &current)),
        }
    }

    fn expect_symbol(&mut self, symbol: Symbol, kind: SyntaxErrorKind) -> Result<Spanned, ParseError> {
        let current = self.tokenizer.next_significant()?;
        if current.token == Token::Symbol(symbol) {
            Ok(current)
        } else {
            Err(unexpected(kind, &current))
        }
    }
}

/// Operators the expression parser collects. Only addition for now.
const EXPRESSION_OPERATORS: &[Symbol] = &[Symbol::Add];

/// Two-phase expression handling: collect operands into a FIFO queue and
/// operators onto a LIFO stack, then reduce them into binary-operation nodes.
#[derive(Default)]
pub(crate) struct ExpressionParser {
    output: VecDeque<Box<SyntaxTree>>,
    operators: Vec<Spanned>,
    /// The token that stopped collection, left unread in the stream.
    terminator: Option<Spanned>,
}

impl ExpressionParser {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Reads operands and operators until some other token shows up. That
    /// token is left unread for the caller.
    pub(crate) fn collect<R: Read + Seek>(
        &mut self,
        tokenizer: &mut Tokenizer<R>,
    ) -> Result<(), ParseError> {
        loop {
            let position = tokenizer.position()?;
            let current = tokenizer.next_significant()?;

            match current.token {
                Token::Number(_) | Token::StringLiteral(_) => {
                    self.output.push_back(SyntaxTree::leaf(current));
                }
                Token::Symbol(symbol) if EXPRESSION_OPERATORS.contains(&symbol) => {
                    self.operators.push(current);
                }
                _ => {
                    tokenizer.seek_to(position)?;
                    self.terminator = Some(current);
                    return Ok(());
                }
            }
        }
    }

    /// Folds every collected operator. Chains associate to the left, so
    /// `1 + 2 + 3` becomes `(1 + 2) + 3`. Returns `None` for an empty
    /// expression. A missing operand is reported at the token that ended the
    /// expression.
    pub(crate) fn reduce(&mut self) -> Result<Option<Box<SyntaxTree>>, ParseError> {
        while let Some(operator) = self.operators.pop() {
            let (Some(left), Some(right)) = (self.output.pop_front(), self.output.pop_front()) else {
                let found = self.terminator.as_ref().unwrap_or(&operator);
                return Err(unexpected(SyntaxErrorKind::MissingOperand, found));
            };

            debug!("reduced {} {} {}", left.token, operator.token, right.token);
            self.output
                .push_front(SyntaxTree::with_children(operator, vec![left, right]));
        }

        let value = self.output.pop_front();
        if let Some(extra) = self.output.pop_front() {
            self.output.clear();
            return Err(ParseError::Syntax(SyntaxError::new(
                SyntaxErrorKind::MissingOperator,
                extra.span.start,
                extra.token.to_string(),
            )));
        }
        Ok(value)
    }

    pub(crate) fn is_drained(&self) -> bool {
        self.output.is_empty() && self.operators.is_empty()
    }
}

fn unexpected(kind: SyntaxErrorKind, found: &Spanned) -> ParseError {
    ParseError::Syntax(SyntaxError::new(kind, found.span.start, found.token.to_string()))
}
