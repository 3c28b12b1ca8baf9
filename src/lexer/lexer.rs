use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::{
    deque::deque::BoundedDeque,
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

pub type RegexHandler = fn(&mut Lexer, &Regex) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^\\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: literal_handler },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: minus_handler },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Mul, "*") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Div, "/") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Open, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Close, ")") },
    ];
}

pub struct Lexer {
    tokens: BoundedDeque<Token>,
    previous: Option<Token>,
    source: String,
    pos: usize,
}

impl Lexer {
    pub fn new(source: &str, capacity: usize) -> Lexer {
        Lexer {
            tokens: BoundedDeque::new(capacity),
            previous: None,
            source: source.to_string(),
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) -> Result<(), Error> {
        self.tokens
            .push_back(token)
            .map_err(|e| Error::new(e.into(), token.span.start))?;
        self.previous = Some(token);
        Ok(())
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32)
    }

    /// Span covering the next `len` bytes.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position((self.pos + len) as u32),
        }
    }

    /// A `-` negates at the start of the line or after an operator or `(`.
    fn minus_is_unary(&self) -> bool {
        match &self.previous {
            None => true,
            Some(token) => token.expects_operand(),
        }
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let skipped = regex.find(lexer.remainder()).map_or(0, |m| m.end());
    lexer.advance_n(skipped);
    Ok(())
}

fn literal_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let digits = match regex.find(lexer.remainder()) {
        Some(matched) => matched.as_str(),
        None => return Ok(()),
    };

    // No overflow check: long literals wrap like native 64-bit arithmetic.
    let value = digits.bytes().fold(0i64, |acc, digit| {
        acc.wrapping_mul(10).wrapping_add(i64::from(digit - b'0'))
    });
    let len = digits.len();

    let span = lexer.span_of(len);
    lexer.push(MK_TOKEN!(TokenKind::Literal, value, span))?;
    lexer.advance_n(len);
    Ok(())
}

fn minus_handler(lexer: &mut Lexer, _regex: &Regex) -> Result<(), Error> {
    let kind = if lexer.minus_is_unary() {
        TokenKind::Neg
    } else {
        TokenKind::Minus
    };

    let span = lexer.span_of(1);
    lexer.push(MK_TOKEN!(kind, 0, span))?;
    lexer.advance_n(1);
    Ok(())
}

/// Splits a line into a queue of tokens terminated by a single `End` token.
///
/// Fails on the first character no pattern accepts; no partial queue is
/// returned in that case.
pub fn tokenize(source: &str, capacity: usize) -> Result<BoundedDeque<Token>, Error> {
    let mut lex = Lexer::new(source, capacity);

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in PATTERNS.iter() {
            if pattern.regex.is_match(lex.remainder()) {
                (pattern.handler)(&mut lex, &pattern.regex)?;
                matched = true;
                break;
            }
        }

        if !matched {
            let rejected = lex.remainder().chars().next().map(String::from).unwrap_or_default();
            let error_token = MK_TOKEN!(TokenKind::Error, 0, lex.span_of(rejected.len()));
            trace!("tokenizer stopped at {} ({:?})", error_token, rejected);

            return Err(Error::new(
                ErrorImpl::UnrecognisedToken { token: rejected },
                lex.position(),
            ));
        }
    }

    let end = lex.span_of(0);
    lex.push(MK_TOKEN!(TokenKind::End, 0, end))?;

    debug!("tokens: {}", lex.tokens);
    Ok(lex.tokens)
}
