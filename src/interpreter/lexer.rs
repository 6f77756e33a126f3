use std::ops::Range;

use log::debug;
use logos::Logos;

use crate::{
    error::LexError,
    interpreter::token::{Delimiter, Operator, Token},
};

/// Maximum number of tokens a single expression may produce, including the
/// synthetic outer parentheses and any implicit multiplications.
pub const TOKEN_CAPACITY: usize = 65_536;

/// Represents a raw lexical unit of the expression text.
///
/// A lexeme is what the scanner recognizes before any structural work is
/// done. [`tokenize`] turns lexemes into [`Token`]s, adding the outer
/// delimiters and implicit multiplication operators.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexemeError)]
pub enum Lexeme {
    /// A run of digits and decimal points such as `3`, `.5` or `2.`.
    ///
    /// Exponent notation and signs are not part of a literal.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// Variable or function names; letters only, case-sensitive.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `(`, `)` and `,`.
    #[token("(", |_| Delimiter::Open)]
    #[token(")", |_| Delimiter::Close)]
    #[token(",", |_| Delimiter::Separator)]
    Delimiter(Delimiter),
    /// `+`, `-`, `*`, `/` and `^`.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    #[token("^", |_| Operator::Pow)]
    Operator(Operator),
    /// Spaces, tabs, newlines and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Failure reported by the raw scanner for a single lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexemeError {
    /// No lexeme starts with this character.
    #[default]
    Unrecognized,
    /// A run of `[0-9.]` that is not a decimal number, e.g. `.` or `1.2.3`.
    MalformedNumber,
}

/// Parses a numeric literal from the current lexeme slice.
///
/// # Returns
/// - `Ok(f64)`: The parsed value.
/// - `Err(LexemeError::MalformedNumber)`: If the slice holds no digits or more
///   than one decimal point.
fn parse_number(lex: &mut logos::Lexer<Lexeme>) -> Result<f64, LexemeError> {
    lex.slice().parse().map_err(|_| LexemeError::MalformedNumber)
}

/// Converts a byte offset into `source` into a character index.
fn char_index(source: &str, byte_offset: usize) -> usize {
    source.get(..byte_offset).map_or(byte_offset, |prefix| prefix.chars().count())
}

impl LexemeError {
    /// Attaches position information from the source text.
    fn locate(self, source: &str, span: Range<usize>) -> LexError {
        let index = char_index(source, span.start);
        match self {
            Self::Unrecognized => {
                let character = source.get(span.start..)
                                      .and_then(|rest| rest.chars().next())
                                      .unwrap_or(char::REPLACEMENT_CHARACTER);
                LexError::UnrecognizedCharacter { character, index }
            },
            Self::MalformedNumber => {
                LexError::MalformedNumber { literal: source.get(span).unwrap_or_default().to_string(),
                                            index }
            },
        }
    }
}

/// Appends a token, enforcing the buffer capacity.
fn push(tokens: &mut Vec<Token>, token: Token, capacity: usize) -> Result<(), LexError> {
    if tokens.len() >= capacity {
        return Err(LexError::TooManyTokens { capacity });
    }
    tokens.push(token);
    Ok(())
}

/// Appends an operand, inserting an implicit `*` after a preceding operand.
fn push_operand(tokens: &mut Vec<Token>, token: Token, capacity: usize) -> Result<(), LexError> {
    if tokens.last().is_some_and(Token::ends_operand) {
        push(tokens, Token::Operator(Operator::Mul), capacity)?;
    }
    push(tokens, token, capacity)
}

/// Appends `(`, inserting an implicit `*` after a number or `)`.
///
/// An identifier directly before `(` names a function call, so no
/// multiplication is inserted in that case.
fn push_open(tokens: &mut Vec<Token>, capacity: usize) -> Result<(), LexError> {
    if tokens.last()
             .is_some_and(|t| matches!(t, Token::Number(_) | Token::Delimiter(Delimiter::Close)))
    {
        push(tokens, Token::Operator(Operator::Mul), capacity)?;
    }
    push(tokens, Token::Delimiter(Delimiter::Open), capacity)
}

/// Tokenizes an expression using the default [`TOKEN_CAPACITY`].
///
/// The returned stream is wrapped in a synthetic `(` ... `)` pair so the
/// evaluator always starts on a delimiter.
///
/// # Errors
/// Returns a [`LexError`] for unrecognized characters, malformed numbers,
/// unbalanced parentheses or an oversized expression.
///
/// # Example
/// ```
/// use exprcalc::interpreter::{
///     lexer::tokenize,
///     token::{Delimiter, Operator, Token},
/// };
///
/// let tokens = tokenize("3(4)").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Delimiter(Delimiter::Open),
///                 Token::Number(3.0),
///                 Token::Operator(Operator::Mul),
///                 Token::Delimiter(Delimiter::Open),
///                 Token::Number(4.0),
///                 Token::Delimiter(Delimiter::Close),
///                 Token::Delimiter(Delimiter::Close)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    tokenize_with_capacity(source, TOKEN_CAPACITY)
}

/// Tokenizes an expression into at most `capacity` tokens.
///
/// This is a single left-to-right pass: numbers and identifiers are taken as
/// maximal runs, parenthesis balance is tracked as it goes and an implicit
/// `*` is inserted between adjacent operands. A leading minus is never folded
/// into a literal.
///
/// # Errors
/// See [`tokenize`].
pub fn tokenize_with_capacity(source: &str, capacity: usize) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut open_parens = Vec::new();

    push(&mut tokens, Token::Delimiter(Delimiter::Open), capacity)?;

    let mut lexer = Lexeme::lexer(source);
    while let Some(lexeme) = lexer.next() {
        let span = lexer.span();
        let lexeme = lexeme.map_err(|e| e.locate(source, span.clone()))?;

        match lexeme {
            Lexeme::Number(n) => push_operand(&mut tokens, Token::Number(n), capacity)?,
            Lexeme::Identifier(name) => {
                push_operand(&mut tokens, Token::Identifier(name), capacity)?;
            },
            Lexeme::Delimiter(Delimiter::Open) => {
                open_parens.push(span.start);
                push_open(&mut tokens, capacity)?;
            },
            Lexeme::Delimiter(Delimiter::Close) => {
                if open_parens.pop().is_none() {
                    return Err(LexError::UnmatchedClosingParen { index: char_index(source,
                                                                                   span.start) });
                }
                push(&mut tokens, Token::Delimiter(Delimiter::Close), capacity)?;
            },
            Lexeme::Delimiter(Delimiter::Separator) => {
                push(&mut tokens, Token::Delimiter(Delimiter::Separator), capacity)?;
            },
            Lexeme::Operator(op) => push(&mut tokens, Token::Operator(op), capacity)?,
            Lexeme::Ignored => {},
        }
    }

    if let Some(&start) = open_parens.last() {
        return Err(LexError::UnmatchedOpeningParen { index: char_index(source, start) });
    }

    push(&mut tokens, Token::Delimiter(Delimiter::Close), capacity)?;

    debug!("lexed {} tokens from {} characters", tokens.len(), source.chars().count());
    Ok(tokens)
}
