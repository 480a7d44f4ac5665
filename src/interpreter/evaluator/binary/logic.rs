use crate::{
    ast::Kind,
    interpreter::{evaluator::core::Evaluator, value::core::Value},
};

impl Evaluator<'_> {
    /// Evaluates a logical operation between two values.
    ///
    /// Both operands have already been evaluated, so output inside either of
    /// them always happens. Numbers count as true when non-zero.
    #[must_use]
    pub(crate) fn eval_logic(kind: Kind, left: Value, right: Value) -> bool {
        match kind {
            Kind::And => left.as_bool() && right.as_bool(),
            Kind::Or => left.as_bool() || right.as_bool(),
            _ => unreachable!("eval_logic used with {kind}"),
        }
    }
}
