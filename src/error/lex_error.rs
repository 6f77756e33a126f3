#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing.
///
/// Every variant carries the character index into the original expression
/// where the problem was detected.
pub enum LexError {
    /// Found a character that does not start any token.
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Character index of the offending character.
        index:     usize,
    },
    /// A run of digits and decimal points is not a valid number.
    MalformedNumber {
        /// The literal as written.
        literal: String,
        /// Character index of the first character of the literal.
        index:   usize,
    },
    /// A closing parenthesis `)` has no matching opening parenthesis.
    UnmatchedClosingParen {
        /// Character index of the closing parenthesis.
        index: usize,
    },
    /// An opening parenthesis `(` was never closed.
    UnmatchedOpeningParen {
        /// Character index of the innermost unclosed parenthesis.
        index: usize,
    },
    /// The expression produces more tokens than the buffer can hold.
    TooManyTokens {
        /// The maximum number of tokens, synthetic delimiters included.
        capacity: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { character, index } => {
                write!(f, "Error: unrecognized token at {index}: '{character}'")
            },
            Self::MalformedNumber { literal, index } => {
                write!(f, "Error: malformed number at {index}: '{literal}'")
            },
            Self::UnmatchedClosingParen { index } => {
                write!(f, "Error: unmatched ')' at {index}")
            },
            Self::UnmatchedOpeningParen { index } => {
                write!(f, "Error: unmatched '(' at {index}")
            },
            Self::TooManyTokens { capacity } => write!(f,
                                                       "Error: expression exceeds the token buffer capacity of {capacity}"),
        }
    }
}

impl std::error::Error for LexError {}
