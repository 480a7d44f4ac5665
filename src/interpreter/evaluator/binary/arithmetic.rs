use crate::{
    ast::Kind,
    error::EvaluationError,
    interpreter::evaluator::{
        core::{EvalResult, Evaluator},
        utils::domain_checked_pair,
    },
};

impl Evaluator<'_> {
    /// Evaluates `+`, `-`, `*`, `/` and `%`.
    ///
    /// Division and modulo by zero are reported instead of producing an
    /// infinity or NaN. Modulo keeps the sign of the dividend. Infinite
    /// operands that cancel out, as in `inf - inf` or `0 * inf`, are a
    /// `Domain` error.
    pub(crate) fn eval_arithmetic(kind: Kind, left: f64, right: f64) -> EvalResult<f64> {
        let result = match kind {
            Kind::Add => left + right,
            Kind::Sub => left - right,
            Kind::Mul => left * right,
            Kind::Div | Kind::Mod if right == 0.0 => {
                return Err(EvaluationError::DivisionByZero { operator: kind.symbol() });
            },
            Kind::Div => left / right,
            Kind::Mod => left % right,
            _ => unreachable!("eval_arithmetic used with {kind}"),
        };
        domain_checked_pair(kind.symbol(), left, right, result)
    }
}
