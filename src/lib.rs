//! # exprcalc
//!
//! exprcalc evaluates a single arithmetic expression. It supports `+ - * /`,
//! right-associative `^`, parentheses, unary minus, implicit multiplication
//! (`2x`, `3(4+5)`), variables such as `pi` and `e`, and the builtin
//! functions `sqrt`, `pow`, `mod`, `round`, `floor`, `ceil`, `sin` and `cos`.
//!
//! Evaluation does not build a syntax tree. The lexed tokens are reduced in
//! place by precedence climbing over one flat buffer.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{evaluator::core::Context, lexer::tokenize, token::Token},
};

/// Provides the error types for lexing and evaluation.
///
/// Every failure carries enough detail to print a one-line diagnostic: the
/// offending character and its index for lexing errors, the identifier or
/// buffer position for evaluation errors.
///
/// # Responsibilities
/// - Defines one error enum per phase plus a crate-level wrapper.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Lexer, token buffer and evaluator.
///
/// This module ties together the phases that turn expression text into a
/// number.
pub mod interpreter;

/// The outcome of evaluating one expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The token stream as produced by the lexer, before any reduction.
    pub tokens: Vec<Token>,
    /// The value of the expression.
    pub result: f64,
}

/// Lexes and evaluates `source` against `context`.
///
/// The returned [`Evaluation`] keeps a copy of the lexed tokens, since
/// evaluation consumes the buffer it reduces.
///
/// # Errors
/// Returns the first lexing or evaluation error encountered.
///
/// # Examples
/// ```
/// use exprcalc::{get_result, interpreter::evaluator::core::Context};
///
/// let context = Context::new();
/// let evaluation = get_result("2(3+4)", &context).unwrap();
/// assert_eq!(evaluation.result, 14.0);
///
/// // 'x' is not defined.
/// assert!(get_result("x + 1", &context).is_err());
/// ```
pub fn get_result(source: &str, context: &Context) -> Result<Evaluation, Error> {
    let tokens = tokenize(source)?;
    let result = context.evaluate_expression(tokens.clone())?;
    Ok(Evaluation { tokens, result })
}

/// Formats a result line with six decimal places.
///
/// NaN is printed as `nan` and infinities as `inf` or `-inf`.
///
/// # Examples
/// ```
/// use exprcalc::format_result;
///
/// assert_eq!(format_result(1.5), "Result: 1.500000");
/// assert_eq!(format_result(f64::NAN), "Result: nan");
/// assert_eq!(format_result(f64::NEG_INFINITY), "Result: -inf");
/// ```
#[must_use]
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        "Result: nan".to_string()
    } else {
        format!("Result: {value:.6}")
    }
}
