//! Split expression strings into tokens

use crate::{Gate, LexError};
use pest::error::InputLocation;
use pest::{iterators, Parser};
use std::fmt;

#[derive(Parser)]
#[grammar_inline = r####"
tokens = _{ SOI ~ token* ~ EOI }
token  = _{ lparen | rparen | comma | value | ident }
lparen =  { "(" }
rparen =  { ")" }
comma  =  { "," }
value  =  { "0" | "1" }
ident  = @{ ASCII_ALPHA+ }

WHITESPACE = _{ " " | "\t" | "\r" | "\n" }
"####]
struct TokenGrammar;

/// The category of a token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// A fixed value: ```0``` or ```1```
    Value(bool),
    /// Any identifier which is not a gate keyword
    Variable,
    /// A gate keyword
    Gate(Gate),
    LParen,
    RParen,
    Comma,
}

/// A single token, carrying its text and its byte offset in the source string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    literal: String,
    offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, offset: usize) -> Self {
        Self {
            kind,
            literal: literal.into(),
            offset,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    fn from_pair(pair: iterators::Pair<Rule>) -> Option<Self> {
        let kind = match pair.as_rule() {
            Rule::lparen => TokenKind::LParen,
            Rule::rparen => TokenKind::RParen,
            Rule::comma => TokenKind::Comma,
            Rule::value => TokenKind::Value(pair.as_str() == "1"),
            Rule::ident => match Gate::from_keyword(pair.as_str()) {
                Some(gate) => TokenKind::Gate(gate),
                None => TokenKind::Variable,
            },
            // End of input and hidden rules
            _ => return None,
        };
        Some(Self::new(kind, pair.as_str(), pair.as_span().start()))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.literal)
    }
}

/// Split a string into a list of tokens.
///
/// ASCII whitespace is skipped, a run of letters forms a single identifier (a gate keyword or a variable name),
/// while digits, parentheses and commas are single character tokens.
/// Lexing stops with an error on the first character which can not start a token.
///
/// ```
/// use boolcalc::{tokenize, TokenKind, Gate};
/// # use boolcalc::CalcError;
/// # fn main() -> Result<(), CalcError> {
///
/// let tokens = tokenize("and(X, 1)")?;
/// assert_eq!(tokens.len(), 6);
/// assert_eq!(tokens[0].kind(), TokenKind::Gate(Gate::And));
/// assert_eq!(tokens[2].literal(), "X");
///
/// assert!(tokenize("and(X_1)").is_err());
/// # Ok(())
/// # }
/// ```
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexError> {
    let pairs =
        TokenGrammar::parse(Rule::tokens, text).map_err(|e| invalid_character(text, &e))?;
    Ok(pairs.filter_map(Token::from_pair).collect())
}

fn invalid_character(text: &str, err: &pest::error::Error<Rule>) -> LexError {
    let offset = match err.location {
        InputLocation::Pos(pos) => pos,
        InputLocation::Span((start, _)) => start,
    };
    let character = text
        .get(offset..)
        .and_then(|s| s.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    LexError::InvalidCharacter { character, offset }
}
