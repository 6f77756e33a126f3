use log::trace;

use crate::{
    error::EvalError,
    interpreter::{
        buffer::TokenBuffer,
        evaluator::core::{Context, EvalResult},
        token::{Delimiter, Operator, Token},
    },
};

impl Context {
    /// Collapses the token right after `cursor` into a number.
    ///
    /// Three rewrites run in order, each on the token at `cursor + 1`:
    /// 1. a `-` there is unary; the factor after it is collapsed and negated;
    /// 2. a `(` starts a group, which is evaluated and replaced by its value;
    /// 3. an identifier becomes a function result if `(` follows it, otherwise
    ///    the value of the variable with that name.
    ///
    /// Anything else is left alone for the caller to validate.
    ///
    /// # Errors
    /// Any error raised while evaluating a group, resolving an identifier or
    /// calling a function. `depth` is the nesting level of the span the
    /// cursor is in; every rewrite that recurses goes one level deeper.
    pub(crate) fn collapse(&self,
                           buffer: &mut TokenBuffer,
                           cursor: usize,
                           depth: usize)
                           -> EvalResult<()> {
        let at = cursor + 1;

        if matches!(buffer.get(at)?, Token::Operator(Operator::Sub)) {
            self.collapse_factor(buffer, at, depth)?;
        }

        if buffer.get(at)?.is(Delimiter::Open) {
            self.collapse_parenthesis(buffer, at, depth)?;
        }

        let identifier = match buffer.get(at)? {
            Token::Identifier(name) => Some(name.clone()),
            _ => None,
        };
        if let Some(name) = identifier {
            self.collapse_identifier(buffer, at, &name, depth)?;
        }

        Ok(())
    }

    /// Negates the factor after the unary minus at `minus` and removes the
    /// minus.
    fn collapse_factor(&self,
                       buffer: &mut TokenBuffer,
                       minus: usize,
                       depth: usize)
                       -> EvalResult<()> {
        self.collapse(buffer, minus, Self::descend(depth)?)?;

        let Token::Number(value) = *buffer.get(minus + 1)? else {
            return Err(EvalError::DanglingMinus { position: minus });
        };
        trace!("negating {value} at {minus}");

        buffer.replace(minus + 1, Token::Number(-value))?;
        buffer.delete(minus..=minus)
    }

    /// Replaces the group opened at `open` with its value.
    fn collapse_parenthesis(&self,
                            buffer: &mut TokenBuffer,
                            open: usize,
                            depth: usize)
                            -> EvalResult<()> {
        let value = self.evaluate_nested(buffer, open, Self::descend(depth)?)?;

        let close = buffer.find_boundary(open + 1)?;
        Self::expect_close(buffer, close)?;
        trace!("group at {open} = {value}");

        buffer.delete(open + 1..=close)?;
        buffer.replace(open, Token::Number(value))
    }

    /// Replaces the identifier at `at` with a function result or variable
    /// value.
    fn collapse_identifier(&self,
                           buffer: &mut TokenBuffer,
                           at: usize,
                           name: &str,
                           depth: usize)
                           -> EvalResult<()> {
        let value = if buffer.get(at + 1).is_ok_and(|t| t.is(Delimiter::Open)) {
            self.collapse_call(buffer, at + 1, name, depth)?
        } else {
            let value =
                self.variable(name)
                    .ok_or_else(|| EvalError::UnknownVariable { name: name.to_string() })?;
            trace!("variable {name} = {value}");
            value
        };

        buffer.replace(at, Token::Number(value))
    }

    /// Evaluates the argument list opened at `open` and calls `name`.
    ///
    /// Each comma-separated argument is reduced in place and then deleted
    /// along with the delimiter before it, so the next argument always starts
    /// at `open`. The final `)` is consumed with the last argument.
    fn collapse_call(&self,
                     buffer: &mut TokenBuffer,
                     open: usize,
                     name: &str,
                     depth: usize)
                     -> EvalResult<f64> {
        let depth = Self::descend(depth)?;
        let mut args = Vec::new();

        loop {
            args.push(self.evaluate_nested(buffer, open, depth)?);

            let boundary = buffer.find_boundary(open + 1)?;
            match buffer.get(boundary)? {
                Token::Delimiter(Delimiter::Separator) => buffer.delete(open..boundary)?,
                Token::Delimiter(Delimiter::Close) => {
                    buffer.delete(open..=boundary)?;
                    break;
                },
                _ => return Err(EvalError::InvalidTokenOrder { position: boundary }),
            }
        }

        self.functions().call(name, &args)
    }
}
