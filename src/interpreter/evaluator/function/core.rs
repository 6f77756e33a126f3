use std::collections::HashMap;

use log::trace;

use crate::{
    error::EvalError,
    interpreter::evaluator::{core::EvalResult, function::builtin},
};

/// A pure numeric transform with a fixed number of ordered arguments.
///
/// The variant determines the arity, so a transform can never be invoked
/// with the wrong number of values.
#[derive(Clone, Copy, Debug)]
pub enum Transform {
    /// Takes exactly one argument.
    Unary(fn(f64) -> f64),
    /// Takes exactly two arguments.
    Binary(fn(f64, f64) -> f64),
}

impl Transform {
    /// The number of arguments the transform expects.
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Unary(_) => 1,
            Self::Binary(_) => 2,
        }
    }

    /// Invokes the transform on already evaluated arguments.
    ///
    /// # Errors
    /// `ArgumentCountMismatch` if `args` does not match [`Self::arity`].
    ///
    /// # Example
    /// ```
    /// use exprcalc::interpreter::evaluator::function::core::Transform;
    ///
    /// let sqrt = Transform::Unary(f64::sqrt);
    /// assert_eq!(sqrt.call("sqrt", &[16.0]).unwrap(), 4.0);
    /// assert!(sqrt.call("sqrt", &[1.0, 2.0]).is_err());
    /// ```
    pub fn call(&self, name: &str, args: &[f64]) -> EvalResult<f64> {
        match (self, args) {
            (Self::Unary(f), [x]) => Ok(f(*x)),
            (Self::Binary(f), [lhs, rhs]) => Ok(f(*lhs, *rhs)),
            _ => Err(EvalError::ArgumentCountMismatch { name:     name.to_string(),
                                                        expected: self.arity(),
                                                        found:    args.len(), }),
        }
    }
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides a string name and the transform implementing it.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table the registry is seeded from),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $transform:expr
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[(&str, Transform)] = &[
            $(
                ($name, $transform),
            )*
        ];
        /// Names of every function available by default.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sqrt"  => Transform::Unary(f64::sqrt),
    "pow"   => Transform::Binary(f64::powf),
    "mod"   => Transform::Binary(builtin::modulo),
    "round" => Transform::Unary(builtin::round),
    "floor" => Transform::Unary(f64::floor),
    "ceil"  => Transform::Unary(f64::ceil),
    "sin"   => Transform::Unary(f64::sin),
    "cos"   => Transform::Unary(f64::cos),
}

/// Maps function names to their transforms.
///
/// The table is built once when a [`Context`](crate::interpreter::evaluator::core::Context)
/// is created and is only read during evaluation.
#[derive(Clone, Debug)]
pub struct FunctionTable {
    functions: HashMap<&'static str, Transform>,
}

impl FunctionTable {
    /// A table holding exactly the builtin functions.
    #[must_use]
    pub fn builtins() -> Self {
        Self { functions: BUILTIN_TABLE.iter().copied().collect() }
    }

    /// Looks a function up by exact, case-sensitive name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Transform> {
        self.functions.get(name)
    }

    /// Calls `name` with the given arguments.
    ///
    /// # Errors
    /// - `UnknownFunction` if no function has that name.
    /// - `ArgumentCountMismatch` if the argument count differs from the arity.
    pub fn call(&self, name: &str, args: &[f64]) -> EvalResult<f64> {
        let transform =
            self.get(name).ok_or_else(|| EvalError::UnknownFunction { name: name.to_string() })?;
        let result = transform.call(name, args)?;
        trace!("{name}{args:?} = {result}");
        Ok(result)
    }
}

impl Default for FunctionTable {
    fn default() -> Self {
        Self::builtins()
    }
}
