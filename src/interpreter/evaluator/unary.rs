use crate::{
    ast::Kind,
    error::EvaluationError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            utils::domain_checked,
        },
        value::core::Value,
    },
    util::num::{f64_to_char_checked, snap_exact_root},
};

impl Evaluator<'_> {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation, booleans are coerced to `1` or `0` first.
    /// - `Not`: boolean negation, numbers are true when non-zero.
    /// - `Log10`: base 10 logarithm of a positive number.
    /// - `Sqrt` and `Cbrt`: square root of a non-negative number and cube root
    ///   of any number.
    pub(crate) fn eval_unary(kind: Kind, value: Value) -> EvalResult<Value> {
        match kind {
            Kind::Negate => Ok(Value::Number(-value.as_number())),
            Kind::Not => Ok(Value::Bool(!value.as_bool())),
            Kind::Log10 => {
                let x = value.as_number();
                if x <= 0.0 {
                    return Err(EvaluationError::Domain { function: "log10",
                                                         argument: x, });
                }
                Ok(Value::Number(x.log10()))
            },
            Kind::Sqrt => {
                let x = value.as_number();
                domain_checked("sqrt", x, x.sqrt()).map(Value::Number)
            },
            Kind::Cbrt => {
                let x = value.as_number();
                Ok(Value::Number(snap_exact_root(x.cbrt(), 3.0, x)))
            },
            _ => unreachable!("eval_unary used with {kind}"),
        }
    }

    /// Emits the character whose code point is the truncated value, then
    /// returns the value itself.
    ///
    /// # Errors
    /// - `InvalidCodePoint` if the truncated value is not a Unicode scalar.
    /// - `Output` if the sink fails.
    pub(crate) fn eval_output(&mut self, value: Value) -> EvalResult<Value> {
        let number = value.as_number();
        let ch = f64_to_char_checked(number)?;

        log::trace!("output {ch:?}");
        self.emit(ch)?;
        Ok(Value::Number(number))
    }
}
