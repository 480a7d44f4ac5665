use crate::{
    ast::Kind,
    error::EvaluationError,
    interpreter::evaluator::{
        core::{EvalResult, Evaluator},
        utils::domain_checked_pair,
    },
    util::num::{is_odd_integer, snap_exact_root},
};

impl Evaluator<'_> {
    /// Evaluates `a ^ b`, `a v b` and `a l b`.
    ///
    /// - `a ^ b` raises `a` to the power `b`.
    /// - `a v b` is the `a`-th root of `b`. An odd integer root of a negative
    ///   number is the negative real root, so `3 v -8` is `-2`. Roots that
    ///   are whole numbers come out exact.
    /// - `a l b` is the logarithm of `b` in base `a`. Both must be positive.
    ///
    /// # Errors
    /// - `DivisionByZero` for a zeroth root or a logarithm in base 1.
    /// - `Domain` for results that are not real numbers.
    #[allow(clippy::float_cmp)]
    pub(crate) fn eval_exponent(kind: Kind, left: f64, right: f64) -> EvalResult<f64> {
        match kind {
            Kind::Pow => domain_checked_pair("power", left, right, left.powf(right)),

            Kind::Root => {
                if left == 0.0 {
                    return Err(EvaluationError::DivisionByZero { operator: kind.symbol() });
                }
                if left == 2.0 {
                    return domain_checked_pair("root", left, right, right.sqrt());
                }
                if left == 3.0 {
                    return Ok(snap_exact_root(right.cbrt(), 3.0, right));
                }

                let root = if right < 0.0 && is_odd_integer(left) {
                    -(-right).powf(left.recip())
                } else {
                    right.powf(left.recip())
                };
                domain_checked_pair("root", left, right, snap_exact_root(root, left, right))
            },

            Kind::Log => {
                if left <= 0.0 {
                    return Err(EvaluationError::Domain { function: "logarithm base",
                                                         argument: left, });
                }
                if right <= 0.0 {
                    return Err(EvaluationError::Domain { function: "logarithm",
                                                         argument: right, });
                }
                if left == 1.0 {
                    return Err(EvaluationError::DivisionByZero { operator: kind.symbol() });
                }
                if left == 2.0 {
                    return Ok(right.log2());
                }
                if left == 10.0 {
                    return Ok(right.log10());
                }
                domain_checked_pair("logarithm", left, right, right.ln() / left.ln())
            },

            _ => unreachable!("eval_exponent used with {kind}"),
        }
    }
}
