use crate::{
    ast::Kind,
    interpreter::evaluator::core::Evaluator,
};

impl Evaluator<'_> {
    /// Evaluates a comparison of two numbers.
    ///
    /// Equality is exact; booleans reach this point already coerced to `1.0`
    /// and `0.0`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub(crate) fn eval_comparison(kind: Kind, left: f64, right: f64) -> bool {
        match kind {
            Kind::Equal => left == right,
            Kind::Greater => left > right,
            Kind::Less => left < right,
            Kind::GreaterEqual => left >= right,
            Kind::LessEqual => left <= right,
            _ => unreachable!("eval_comparison used with {kind}"),
        }
    }
}
