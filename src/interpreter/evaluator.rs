/// Core evaluation logic and context management.
///
/// Contains the evaluation context (variable and function tables) and the
/// precedence-climbing reduction loop that runs over the token buffer.
pub mod core;

/// Collapsing of non-number tokens at the cursor.
///
/// Turns a unary minus factor, a parenthesised group or an identifier into a
/// single number token before precedences are compared.
pub mod collapse;

/// Function evaluation.
///
/// Handles the builtin function table, argument count checking and
/// invocation.
pub mod function;
