#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reducing the token buffer.
pub enum EvalError {
    /// A span did not start on a delimiter.
    ExpectedDelimiter {
        /// Buffer index where the delimiter was expected.
        position: usize,
    },
    /// The tokens around the cursor are not `operator, number, operator`.
    InvalidTokenOrder {
        /// Buffer index of the cursor.
        position: usize,
    },
    /// A unary minus was not followed by anything that collapses to a number.
    DanglingMinus {
        /// Buffer index of the minus operator.
        position: usize,
    },
    /// The buffer ended before a closing delimiter was found.
    MissingDelimiter,
    /// An argument separator `,` appeared outside a function call.
    UnexpectedSeparator {
        /// Buffer index of the separator.
        position: usize,
    },
    /// Groups, calls or unary minus factors nest too deeply.
    NestingTooDeep {
        /// The maximum nesting depth.
        limit: usize,
    },
    /// Tried to use an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called an unknown function.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The registered arity.
        expected: usize,
        /// The number of arguments in the call.
        found:    usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedDelimiter { position } => write!(f,
                                                           "Error: expected delimiter at beginning of expression (token {position})"),
            Self::InvalidTokenOrder { position } => {
                write!(f, "Error: invalid token order at token {position}")
            },
            Self::DanglingMinus { position } => write!(f,
                                                       "Error: uncollapsable expression after minus factor at token {position}"),
            Self::MissingDelimiter => write!(f, "Error: unexpected end of token stream"),
            Self::UnexpectedSeparator { position } => {
                write!(f, "Error: unexpected ',' outside a function call at token {position}")
            },
            Self::NestingTooDeep { limit } => {
                write!(f, "Error: expression nests deeper than {limit} levels")
            },
            Self::UnknownVariable { name } => write!(f, "Error: unknown variable: {name}"),
            Self::UnknownFunction { name } => write!(f, "Error: unknown function: {name}()"),
            Self::ArgumentCountMismatch { name, expected, found } => {
                let plural = if *expected == 1 { "" } else { "s" };
                write!(f,
                       "Error: function {name}() requires exactly {expected} argument{plural}, got {found}")
            },
        }
    }
}

impl std::error::Error for EvalError {}
