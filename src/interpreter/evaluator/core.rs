use std::collections::HashMap;

use log::{debug, trace};

use crate::{
    error::EvalError,
    interpreter::{
        buffer::TokenBuffer,
        evaluator::function::core::FunctionTable,
        token::{Associativity, Delimiter, Token},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// How deeply groups, call arguments and unary minus factors may nest.
///
/// Each level is a recursive call, so the limit keeps deep input from
/// exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Variables every new context starts with.
pub const DEFAULT_VARIABLES: &[(&str, f64)] =
    &[("pi", std::f64::consts::PI), ("e", std::f64::consts::E)];

/// Stores the evaluation context.
///
/// This struct holds the variable table and the function table that
/// identifiers are resolved against.
///
/// ## Usage
///
/// A `Context` is created once, optionally adjusted with
/// [`set_variable`](Self::set_variable) and
/// [`unset_variable`](Self::unset_variable), and then only read while an
/// expression is evaluated.
#[derive(Clone, Debug)]
pub struct Context {
    variables: HashMap<String, f64>,
    functions: FunctionTable,
}

/// The operator, operand and look-ahead operator around the cursor.
struct Frame {
    precedence:      u8,
    associativity:   Associativity,
    value:           f64,
    next_precedence: u8,
}

impl Context {
    /// Creates a context with `pi`, `e` and the builtin functions.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: DEFAULT_VARIABLES.iter()
                                           .map(|(name, value)| ((*name).to_string(), *value))
                                           .collect(),
               functions: FunctionTable::builtins(), }
    }

    /// Defines or overwrites a variable, returning the previous value.
    pub fn set_variable(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.variables.insert(name.into(), value)
    }

    /// Removes a variable, returning its value if it was defined.
    pub fn unset_variable(&mut self, name: &str) -> Option<f64> {
        self.variables.remove(name)
    }

    /// Looks up a variable by exact name.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// The function table identifiers followed by `(` are resolved against.
    #[must_use]
    pub const fn functions(&self) -> &FunctionTable {
        &self.functions
    }

    /// Evaluates a complete lexed token stream.
    ///
    /// The stream must start with the synthetic outer `(` produced by the
    /// lexer. After reduction the outer span has to be closed by `)`; a
    /// stray `,` at the top level is rejected.
    ///
    /// # Errors
    /// Any [`EvalError`] raised while reducing the buffer.
    ///
    /// # Example
    /// ```
    /// use exprcalc::interpreter::{evaluator::core::Context, lexer::tokenize};
    ///
    /// let context = Context::new();
    /// let tokens = tokenize("2^3^2").unwrap();
    /// assert_eq!(context.evaluate_expression(tokens).unwrap(), 512.0);
    /// ```
    pub fn evaluate_expression(&self, tokens: Vec<Token>) -> EvalResult<f64> {
        let mut buffer = TokenBuffer::new(tokens);
        let value = self.evaluate(&mut buffer, 0)?;
        Self::expect_close(&buffer, 2)?;
        debug!("evaluated to {value}");
        Ok(value)
    }

    /// Reduces the span starting at `start` to a single number.
    ///
    /// `start` must hold a delimiter (`(` or `,`). The loop collapses the
    /// token after the cursor to a number, then compares the operator at the
    /// cursor with the one two positions ahead:
    /// - both delimiters: the span is done and the number is returned;
    /// - the next one binds tighter: the cursor moves right by two;
    /// - otherwise the operator at the cursor is applied to its neighbours,
    ///   the left operand and operator are spliced out and the cursor moves
    ///   left by two.
    ///
    /// The buffer is modified in place. On return the span has shrunk to
    /// `start`, the result, and the delimiter that ended it.
    ///
    /// # Errors
    /// - `ExpectedDelimiter` if `start` is not a delimiter.
    /// - `InvalidTokenOrder` if the tokens at the cursor are not
    ///   `operator, number, operator` after collapsing.
    /// - `NestingTooDeep` if groups, calls or unary minus factors nest more
    ///   than [`MAX_NESTING_DEPTH`] levels.
    /// - Anything raised while collapsing identifiers or groups.
    pub fn evaluate(&self, buffer: &mut TokenBuffer, start: usize) -> EvalResult<f64> {
        self.evaluate_nested(buffer, start, 0)
    }

    /// [`evaluate`](Self::evaluate) for a span `depth` levels below the
    /// outermost one.
    pub(crate) fn evaluate_nested(&self,
                                  buffer: &mut TokenBuffer,
                                  start: usize,
                                  depth: usize)
                                  -> EvalResult<f64> {
        if !buffer.get(start)?.is_delimiter() {
            return Err(EvalError::ExpectedDelimiter { position: start });
        }

        let mut cursor = start;
        loop {
            self.collapse(buffer, cursor, depth)?;

            let frame = Self::frame(buffer, cursor)?;

            if frame.precedence == 0 && frame.next_precedence == 0 {
                return Ok(frame.value);
            }

            if frame.next_precedence > frame.precedence
               || (frame.next_precedence == frame.precedence
                   && frame.associativity == Associativity::Right)
            {
                cursor += 2;
            } else {
                cursor = Self::reduce(buffer, cursor, frame.value)?;
            }
        }
    }

    /// Reads the `[operator, number, operator]` triple at the cursor.
    fn frame(buffer: &TokenBuffer, cursor: usize) -> EvalResult<Frame> {
        let invalid = || EvalError::InvalidTokenOrder { position: cursor };

        let current = buffer.get(cursor)?;
        let Token::Number(value) = *buffer.get(cursor + 1)? else {
            return Err(invalid());
        };
        let next = buffer.get(cursor + 2)?;

        match (current.precedence(), current.associativity(), next.precedence()) {
            (Some(precedence), Some(associativity), Some(next_precedence)) => {
                Ok(Frame { precedence,
                           associativity,
                           value,
                           next_precedence })
            },
            _ => Err(invalid()),
        }
    }

    /// Applies the operator at `cursor` to the numbers on either side.
    ///
    /// The result replaces the right operand; the left operand and the
    /// operator are deleted. Returns the new cursor, the operator that
    /// preceded the left operand.
    fn reduce(buffer: &mut TokenBuffer, cursor: usize, rhs: f64) -> EvalResult<usize> {
        let invalid = EvalError::InvalidTokenOrder { position: cursor };

        let Token::Operator(op) = *buffer.get(cursor)? else {
            return Err(invalid);
        };
        let lhs_at = cursor.checked_sub(1).ok_or_else(|| invalid.clone())?;
        let previous = lhs_at.checked_sub(1).ok_or(invalid)?;

        let lhs = buffer.number_at(lhs_at)?;
        let result = op.apply(lhs, rhs);
        trace!("{lhs} {} {rhs} = {result}", op.symbol());

        buffer.replace(cursor + 1, Token::Number(result))?;
        buffer.delete(lhs_at..=cursor)?;

        Ok(previous)
    }

    /// Returns the depth one level below `depth`, failing past the limit.
    pub(crate) const fn descend(depth: usize) -> EvalResult<usize> {
        if depth >= MAX_NESTING_DEPTH {
            return Err(EvalError::NestingTooDeep { limit: MAX_NESTING_DEPTH });
        }
        Ok(depth + 1)
    }

    /// Requires the delimiter ending a reduced group to be `)`.
    pub(crate) fn expect_close(buffer: &TokenBuffer, position: usize) -> EvalResult<()> {
        match buffer.get(position)? {
            Token::Delimiter(Delimiter::Close) => Ok(()),
            Token::Delimiter(Delimiter::Separator) => {
                Err(EvalError::UnexpectedSeparator { position })
            },
            _ => Err(EvalError::InvalidTokenOrder { position }),
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
