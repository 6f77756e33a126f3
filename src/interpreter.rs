/// The buffer module holds the flat token sequence the evaluator rewrites.
///
/// Recursive evaluation works on index positions in one shared buffer. This
/// module provides bounds-checked reads, in-place replacement, range
/// deletion and the scan for the delimiter that closes a span.
pub mod buffer;
/// The evaluator module reduces the token buffer to a number.
///
/// The evaluator runs precedence climbing directly over the buffer: it
/// collapses groups, unary minus factors and identifiers to numbers, then
/// applies operators in place until a span is a single value.
///
/// # Responsibilities
/// - Resolves variables and calls builtin functions.
/// - Applies binary operators by precedence and associativity.
/// - Reports errors such as malformed token order or unknown names.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// The lexer reads the raw expression and produces the token stream the
/// evaluator consumes, wrapped in synthetic outer parentheses.
///
/// # Responsibilities
/// - Reads numbers, identifiers, operators and delimiters.
/// - Inserts implicit multiplication between adjacent operands.
/// - Reports unrecognized characters and unbalanced parentheses with their
///   position.
pub mod lexer;
/// The token module defines the token model.
///
/// Declares delimiters, operators, numbers and identifiers together with
/// operator precedence, associativity and display formatting.
pub mod token;
