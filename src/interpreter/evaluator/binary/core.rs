use crate::{
    ast::Kind,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// Routes the operation to the specialized handler for its family:
    /// `eval_arithmetic` for `+ - * / %`, `eval_exponent` for `^ v l`,
    /// `eval_comparison` for `= > < ≥ ≤` and `eval_logic` for `& |`.
    ///
    /// # Parameters
    /// - `kind`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    pub(crate) fn eval_binary(kind: Kind, left: Value, right: Value) -> EvalResult<Value> {
        match kind {
            Kind::Add | Kind::Sub | Kind::Mul | Kind::Div | Kind::Mod => {
                Self::eval_arithmetic(kind, left.as_number(), right.as_number()).map(Value::Number)
            },

            Kind::Pow | Kind::Root | Kind::Log => {
                Self::eval_exponent(kind, left.as_number(), right.as_number()).map(Value::Number)
            },

            Kind::Equal | Kind::Greater | Kind::Less | Kind::GreaterEqual | Kind::LessEqual => {
                Ok(Value::Bool(Self::eval_comparison(kind, left.as_number(), right.as_number())))
            },

            Kind::And | Kind::Or => Ok(Value::Bool(Self::eval_logic(kind, left, right))),

            _ => unreachable!("eval_binary used with non binary operator {kind}"),
        }
    }
}
