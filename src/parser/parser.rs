//! Precedence controller turning a token queue into an expression tree.
//!
//! The parser consumes tokens front to back and keeps two bounded stacks:
//! pending operators (bottom-anchored by an `End` sentinel) and finished
//! operands. Literals go straight to the operand stack; operators wait on
//! the operator stack until an operator binding no tighter arrives, a `)`
//! closes their group, or the input ends.
//!
//! Before any stack work each token is checked against what the previous
//! token allows (an operand or an operator), so stray or missing operands
//! are reported where they occur.

use log::trace;

use crate::{
    ast::ast::Expr,
    config::config::Config,
    deque::deque::BoundedDeque,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

use super::{expr::reduce_operator, lookups::binding_power};

/// The parser state: remaining tokens plus the operator and operand stacks.
pub struct Parser {
    /// Tokens not consumed yet
    tokens: BoundedDeque<Token>,
    /// Pending operators and open parentheses
    operators: BoundedDeque<Token>,
    /// Finished sub-expressions
    operands: BoundedDeque<Expr>,
    /// End of the last consumed token
    pos: Position,
    /// Whether the next token has to start an operand
    expect_operand: bool,
    /// Deepest tree a reduction may build
    max_depth: usize,
}

impl Parser {
    /// Creates a parser over `tokens`; both stacks hold at most
    /// `config.capacity` elements, sentinel included.
    pub fn new(tokens: BoundedDeque<Token>, config: &Config) -> Result<Self, Error> {
        let capacity = config.capacity;
        let start = Position(0);
        let sentinel = MK_TOKEN!(TokenKind::End, 0, Span { start, end: start });
        let operators = BoundedDeque::with_sentinel(capacity, sentinel)
            .map_err(|e| Error::new(e.into(), start))?;

        Ok(Parser {
            tokens,
            operators,
            operands: BoundedDeque::new(capacity),
            pos: start,
            expect_operand: true,
            max_depth: config.max_depth,
        })
    }

    /// Returns the kind of the current token without consuming it.
    pub fn current_token_kind(&self) -> Result<TokenKind, Error> {
        self.tokens
            .peek_front()
            .map(|token| token.kind)
            .map_err(|e| Error::new(e.into(), self.pos))
    }

    /// Consumes and returns the current token.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let token = self
            .tokens
            .pop_front()
            .map_err(|e| Error::new(e.into(), self.pos))?;
        self.pos = token.span.end;
        Ok(token)
    }

    /// Checks if there are more tokens before the closing `End`.
    pub fn has_tokens(&self) -> bool {
        matches!(self.current_token_kind(), Ok(kind) if kind != TokenKind::End)
    }

    fn top(&self) -> Result<Token, Error> {
        self.operators
            .peek_back()
            .copied()
            .map_err(|e| Error::new(e.into(), self.pos))
    }

    fn push_operator(&mut self, token: Token) -> Result<(), Error> {
        self.operators
            .push_back(token)
            .map_err(|e| Error::new(e.into(), token.span.start))
    }

    fn push_operand(&mut self, expr: Expr) -> Result<(), Error> {
        let start = expr.get_span().start;
        self.operands
            .push_back(expr)
            .map_err(|e| Error::new(e.into(), start))
    }

    /// Pops the top operator and replaces its operands with the new node.
    fn reduce(&mut self) -> Result<(), Error> {
        let operator = self
            .operators
            .pop_back()
            .map_err(|e| Error::new(e.into(), self.pos))?;
        let node = reduce_operator(operator, &mut self.operands)?;

        if node.depth() > self.max_depth {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: self.max_depth,
                },
                node.get_span().start,
            ));
        }

        trace!("reduced `{}` into {}", operator.kind.symbol(), node);
        self.push_operand(node)
    }

    fn check_adjacency(&mut self, token: &Token) -> Result<(), Error> {
        let wants_operand = matches!(
            token.kind,
            TokenKind::Literal | TokenKind::Open | TokenKind::Neg
        );

        if wants_operand != self.expect_operand {
            let message = match (token.kind, self.expect_operand) {
                (TokenKind::End, true) if self.operands.is_empty() && self.operators.len() == 1 => {
                    String::from("empty expression")
                }
                (TokenKind::End, true) => String::from("expression is incomplete"),
                (TokenKind::Close, true) => String::from("expected an operand before `)`"),
                (_, true) => format!("operator `{}` is missing an operand", token.kind.symbol()),
                (TokenKind::Literal, false) => format!("expected an operator before {}", token.value),
                (_, false) => format!("expected an operator before `{}`", token.kind.symbol()),
            };

            return Err(Error::new(
                ErrorImpl::MalformedExpression { message },
                token.span.start,
            ));
        }

        self.expect_operand = match token.kind {
            TokenKind::Literal | TokenKind::Close => false,
            TokenKind::Open | TokenKind::Neg => true,
            TokenKind::End | TokenKind::Error => self.expect_operand,
            TokenKind::Plus | TokenKind::Minus | TokenKind::Mul | TokenKind::Div => true,
        };

        Ok(())
    }

    /// Applies one token to the stacks.
    fn process_token(&mut self, token: Token) -> Result<(), Error> {
        self.check_adjacency(&token)?;

        match token.kind {
            TokenKind::Literal => self.push_operand(Expr::literal(token.value, token.span)),
            TokenKind::Open => self.push_operator(token),
            TokenKind::Close => self.reduce_until_open(&token),
            // Prefix operators have no left operand, nothing pending can be
            // completed by them.
            TokenKind::Neg => self.push_operator(token),
            TokenKind::Plus | TokenKind::Minus | TokenKind::Mul | TokenKind::Div => {
                while binding_power(token.kind) <= binding_power(self.top()?.kind) {
                    self.reduce()?;
                }
                self.push_operator(token)
            }
            TokenKind::End | TokenKind::Error => Err(Error::new(
                ErrorImpl::MalformedExpression {
                    message: format!("unexpected {}", token),
                },
                token.span.start,
            )),
        }
    }

    fn reduce_until_open(&mut self, close: &Token) -> Result<(), Error> {
        loop {
            let top = self.top()?;
            match top.kind {
                TokenKind::Open => {
                    self.operators
                        .pop_back()
                        .map_err(|e| Error::new(e.into(), close.span.start))?;

                    // The group's span takes in both parentheses.
                    let inner = self
                        .operands
                        .pop_back()
                        .map_err(|e| Error::new(e.into(), close.span.start))?;
                    let span = Span {
                        start: top.span.start,
                        end: close.span.end,
                    };
                    return self.push_operand(inner.grouped(span));
                }
                TokenKind::End => {
                    return Err(Error::new(ErrorImpl::UnmatchedParen, close.span.start));
                }
                _ => self.reduce()?,
            }
        }
    }

    /// Drains the operator stack down to the sentinel and returns the root.
    fn finish(&mut self, end: &Token) -> Result<Expr, Error> {
        self.check_adjacency(end)?;

        loop {
            let top = self.top()?;
            match top.kind {
                TokenKind::End => {
                    self.operators
                        .pop_back()
                        .map_err(|e| Error::new(e.into(), end.span.start))?;
                    break;
                }
                TokenKind::Open => {
                    return Err(Error::new(ErrorImpl::UnmatchedParen, top.span.start));
                }
                _ => self.reduce()?,
            }
        }

        if self.operands.len() != 1 {
            return Err(Error::new(
                ErrorImpl::MalformedExpression {
                    message: format!(
                        "expected a single expression, found {}",
                        self.operands.len()
                    ),
                },
                end.span.start,
            ));
        }

        self.operands
            .pop_back()
            .map_err(|e| Error::new(e.into(), end.span.start))
    }
}

/// Parses a token queue into a single expression tree.
///
/// This is the main entry point for parsing. The queue must end with an
/// `End` token, as produced by the lexer.
pub fn parse(tokens: BoundedDeque<Token>, config: &Config) -> Result<Expr, Error> {
    let mut parser = Parser::new(tokens, config)?;

    while parser.has_tokens() {
        let token = parser.advance()?;
        parser.process_token(token)?;

        trace!(
            "after {}: operators {} operands {}",
            token,
            parser.operators,
            parser.operands
        );
    }

    let end = parser.advance()?;
    if end.kind != TokenKind::End {
        return Err(Error::new(
            ErrorImpl::MalformedExpression {
                message: format!("unexpected {}", end),
            },
            end.span.start,
        ));
    }

    parser.finish(&end)
}
