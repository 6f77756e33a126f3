use std::fmt;

/// Zero-precedence tokens that bound a reduction span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `(`
    Open,
    /// `)`
    Close,
    /// `,`
    Separator,
}

/// Binary arithmetic operators.
///
/// `-` doubles as unary negation; the evaluator tells the two apart purely
/// by position in the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

/// The direction in which operators of equal precedence group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` is `a ^ (b ^ c)`.
    Right,
}

/// A single entry of the token buffer.
///
/// Delimiters and operators carry no payload beyond their kind. Numbers are
/// IEEE doubles. Identifiers stay names until the evaluator resolves them to
/// a variable value or a function call.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// `(`, `)` or `,`.
    Delimiter(Delimiter),
    /// `+`, `-`, `*`, `/` or `^`.
    Operator(Operator),
    /// A numeric literal or an already reduced sub-expression.
    Number(f64),
    /// A variable or function name.
    Identifier(String),
}

impl Delimiter {
    /// Returns the source character of the delimiter.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Open => '(',
            Self::Close => ')',
            Self::Separator => ',',
        }
    }
}

impl Operator {
    /// Binding strength: `+ -` is 1, `* /` is 2 and `^` is 3.
    ///
    /// Precedence 0 is reserved for delimiters.
    ///
    /// # Example
    /// ```
    /// use exprcalc::interpreter::token::Operator;
    ///
    /// assert!(Operator::Pow.precedence() > Operator::Mul.precedence());
    /// assert_eq!(Operator::Add.precedence(), Operator::Sub.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
        }
    }

    /// Every operator groups to the left except `^`.
    #[must_use]
    pub const fn associativity(self) -> Associativity {
        match self {
            Self::Pow => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    /// Returns the source character of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    /// Applies the operator to two operands.
    ///
    /// Division by zero and other domain problems follow IEEE semantics and
    /// yield infinities or NaN.
    ///
    /// # Example
    /// ```
    /// use exprcalc::interpreter::token::Operator;
    ///
    /// assert_eq!(Operator::Sub.apply(2.0, 5.0), -3.0);
    /// assert_eq!(Operator::Pow.apply(2.0, 10.0), 1024.0);
    /// assert!(Operator::Div.apply(1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            Self::Pow => lhs.powf(rhs),
        }
    }
}

impl Token {
    /// Precedence of a delimiter or operator token, `None` for operands.
    #[must_use]
    pub const fn precedence(&self) -> Option<u8> {
        match self {
            Self::Delimiter(_) => Some(0),
            Self::Operator(op) => Some(op.precedence()),
            Self::Number(_) | Self::Identifier(_) => None,
        }
    }

    /// Associativity of a delimiter or operator token, `None` for operands.
    ///
    /// Delimiters group to the left.
    #[must_use]
    pub const fn associativity(&self) -> Option<Associativity> {
        match self {
            Self::Delimiter(_) => Some(Associativity::Left),
            Self::Operator(op) => Some(op.associativity()),
            Self::Number(_) | Self::Identifier(_) => None,
        }
    }

    /// Returns `true` for `(`, `)` and `,`.
    #[must_use]
    pub const fn is_delimiter(&self) -> bool {
        matches!(self, Self::Delimiter(_))
    }

    /// Returns `true` if this token is the given delimiter.
    #[must_use]
    pub fn is(&self, delimiter: Delimiter) -> bool {
        matches!(self, Self::Delimiter(d) if *d == delimiter)
    }

    /// Returns `true` for tokens that can end an operand: numbers,
    /// identifiers and `)`.
    ///
    /// The lexer inserts an implicit `*` when such a token is followed by
    /// another operand.
    #[must_use]
    pub const fn ends_operand(&self) -> bool {
        matches!(self,
                 Self::Number(_) | Self::Identifier(_) | Self::Delimiter(Delimiter::Close))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delimiter(d) => write!(f, "{}", d.symbol()),
            Self::Operator(op) => write!(f, "{}", op.symbol()),
            Self::Number(n) => write!(f, "{n:.2}"),
            Self::Identifier(name) => write!(f, "{name}"),
        }
    }
}

/// Renders a token stream as space-separated tokens.
///
/// Numbers are shown with two decimal places.
///
/// # Example
/// ```
/// use exprcalc::interpreter::{lexer::tokenize, token::render_tokens};
///
/// let tokens = tokenize("2x").unwrap();
/// assert_eq!(render_tokens(&tokens), "( 2.00 * x )");
/// ```
#[must_use]
pub fn render_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_orders_delimiters_below_operators() {
        assert_eq!(Token::Delimiter(Delimiter::Separator).precedence(), Some(0));
        assert_eq!(Token::Operator(Operator::Add).precedence(), Some(1));
        assert_eq!(Token::Operator(Operator::Div).precedence(), Some(2));
        assert_eq!(Token::Operator(Operator::Pow).precedence(), Some(3));
        assert_eq!(Token::Number(1.0).precedence(), None);
        assert_eq!(Token::Identifier("pi".into()).precedence(), None);
    }

    #[test]
    fn only_power_is_right_associative() {
        for op in [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div] {
            assert_eq!(op.associativity(), Associativity::Left);
        }
        assert_eq!(Operator::Pow.associativity(), Associativity::Right);
    }

    #[test]
    fn operators_do_not_commute_operands() {
        assert_eq!(Operator::Sub.apply(10.0, 4.0), 6.0);
        assert_eq!(Operator::Div.apply(10.0, 4.0), 2.5);
        assert_eq!(Operator::Pow.apply(3.0, 2.0), 9.0);
    }

    #[test]
    fn ends_operand_matches_implicit_multiplication_triggers() {
        assert!(Token::Number(2.0).ends_operand());
        assert!(Token::Identifier("x".into()).ends_operand());
        assert!(Token::Delimiter(Delimiter::Close).ends_operand());
        assert!(!Token::Delimiter(Delimiter::Open).ends_operand());
        assert!(!Token::Operator(Operator::Mul).ends_operand());
    }

    #[test]
    fn display_uses_two_decimals_for_numbers() {
        let tokens = vec![Token::Delimiter(Delimiter::Open),
                          Token::Number(3.14159),
                          Token::Operator(Operator::Pow),
                          Token::Identifier("e".into()),
                          Token::Delimiter(Delimiter::Close)];
        assert_eq!(render_tokens(&tokens), "( 3.14 ^ e )");
    }
}
