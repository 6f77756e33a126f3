/// Built-in numeric transforms.
///
/// Holds the implementations that are not a single `f64` method, such as the
/// C-style remainder used by `mod`.
pub mod builtin;

/// The function table and call dispatch.
///
/// Declares the fixed registry of built-in functions, their arities, and the
/// argument count check applied on every call.
pub mod core;
