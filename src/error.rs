/// Lexing errors.
///
/// Defines all error types that can occur while turning the raw expression
/// text into tokens: unrecognized characters, malformed numeric literals,
/// unbalanced parentheses and an overflowing token buffer.
pub mod lex_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while reducing the token
/// buffer: malformed token order, missing delimiters, unknown variables or
/// functions and argument count mismatches.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;

#[derive(Debug, Clone, PartialEq)]
/// Any error produced while evaluating an expression from source text.
///
/// Lexing and evaluation each have their own error type; this enum lets the
/// top-level entry point propagate either with `?`.
pub enum Error {
    /// The expression could not be tokenized.
    Lex(LexError),
    /// The token stream could not be reduced to a number.
    Eval(EvalError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}
