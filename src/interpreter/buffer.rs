use std::ops::RangeBounds;

use crate::{error::EvalError, interpreter::token::Token};

/// The flat, mutable token sequence the evaluator reduces in place.
///
/// Recursive evaluation never copies sub-spans: every call receives an index
/// into the same buffer, and every deletion it performs shifts the tokens the
/// caller will look at next. All reads are bounds-checked and report
/// [`EvalError::MissingDelimiter`] when they run off the end.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TokenBuffer {
    tokens: Vec<Token>,
}

impl TokenBuffer {
    /// Wraps a lexed token stream.
    #[must_use]
    pub const fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Number of tokens currently in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the buffer holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Read-only view of the remaining tokens.
    #[must_use]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns the token at `index`.
    ///
    /// # Errors
    /// [`EvalError::MissingDelimiter`] if `index` is past the end.
    pub fn get(&self, index: usize) -> Result<&Token, EvalError> {
        self.tokens.get(index).ok_or(EvalError::MissingDelimiter)
    }

    /// Returns the number stored at `index`.
    ///
    /// # Errors
    /// [`EvalError::InvalidTokenOrder`] if the token is not a number,
    /// [`EvalError::MissingDelimiter`] if `index` is past the end.
    pub fn number_at(&self, index: usize) -> Result<f64, EvalError> {
        match self.get(index)? {
            Token::Number(n) => Ok(*n),
            _ => Err(EvalError::InvalidTokenOrder { position: index }),
        }
    }

    /// Overwrites the token at `index`.
    ///
    /// # Errors
    /// [`EvalError::MissingDelimiter`] if `index` is past the end.
    pub fn replace(&mut self, index: usize, token: Token) -> Result<(), EvalError> {
        let slot = self.tokens.get_mut(index).ok_or(EvalError::MissingDelimiter)?;
        *slot = token;
        Ok(())
    }

    /// Splices `range` out of the buffer, shifting everything after it down.
    ///
    /// # Errors
    /// [`EvalError::MissingDelimiter`] if the range reaches past the end.
    pub fn delete<R>(&mut self, range: R) -> Result<(), EvalError>
        where R: RangeBounds<usize>
    {
        let range = (range.start_bound().cloned(), range.end_bound().cloned());
        if self.tokens.get(range).is_none() {
            return Err(EvalError::MissingDelimiter);
        }
        self.tokens.drain(range);
        Ok(())
    }

    /// Finds the first delimiter at or after `from`.
    ///
    /// Inside a fully reduced span this is the delimiter that closes it.
    ///
    /// # Errors
    /// [`EvalError::MissingDelimiter`] if no delimiter follows `from`.
    pub fn find_boundary(&self, from: usize) -> Result<usize, EvalError> {
        self.tokens
            .get(from..)
            .and_then(|rest| rest.iter().position(Token::is_delimiter))
            .map(|offset| from + offset)
            .ok_or(EvalError::MissingDelimiter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::token::{Delimiter, Operator};

    fn sample() -> TokenBuffer {
        TokenBuffer::new(vec![Token::Delimiter(Delimiter::Open),
                              Token::Number(1.0),
                              Token::Operator(Operator::Add),
                              Token::Number(2.0),
                              Token::Delimiter(Delimiter::Close)])
    }

    #[test]
    fn reads_are_bounds_checked() {
        let buffer = sample();
        assert_eq!(buffer.get(1), Ok(&Token::Number(1.0)));
        assert_eq!(buffer.get(5), Err(EvalError::MissingDelimiter));
        assert_eq!(buffer.number_at(3), Ok(2.0));
        assert_eq!(buffer.number_at(2), Err(EvalError::InvalidTokenOrder { position: 2 }));
    }

    #[test]
    fn delete_shifts_following_tokens() {
        let mut buffer = sample();
        buffer.delete(1..3).unwrap();
        assert_eq!(buffer.as_slice(),
                   &[Token::Delimiter(Delimiter::Open),
                     Token::Number(2.0),
                     Token::Delimiter(Delimiter::Close)]);
        assert_eq!(buffer.delete(2..=3), Err(EvalError::MissingDelimiter));
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn replace_overwrites_in_place() {
        let mut buffer = sample();
        buffer.replace(2, Token::Operator(Operator::Mul)).unwrap();
        assert_eq!(buffer.get(2), Ok(&Token::Operator(Operator::Mul)));
        assert_eq!(buffer.replace(9, Token::Number(0.0)), Err(EvalError::MissingDelimiter));
    }

    #[test]
    fn find_boundary_skips_operators() {
        let buffer = sample();
        assert_eq!(buffer.find_boundary(1), Ok(4));
        assert_eq!(buffer.find_boundary(0), Ok(0));
        assert_eq!(buffer.find_boundary(5), Err(EvalError::MissingDelimiter));
        assert_eq!(TokenBuffer::default().find_boundary(0), Err(EvalError::MissingDelimiter));
    }

    #[test]
    fn reports_emptiness() {
        assert!(TokenBuffer::default().is_empty());
        assert!(!sample().is_empty());
    }
}
