use crate::{
    ast::{Kind, Node},
    error::EvaluationError,
    interpreter::{evaluator::utils::operand, io::OutputSink, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvaluationError` describing the failure.
pub type EvalResult<T> = Result<T, EvaluationError>;

/// Walks an expression tree and computes its value.
///
/// The only state is the sink receiving characters from the output operator,
/// so evaluation without side effects is a matter of passing a
/// [`crate::interpreter::io::NullSink`].
///
/// # Example
/// ```
/// use treecalc::{
///     interpreter::{evaluator::core::Evaluator, io::StringSink, value::core::Value},
///     parse,
/// };
///
/// let tree = parse("o72 + o105").unwrap();
/// let mut sink = StringSink::default();
///
/// let value = Evaluator::new(&mut sink).eval(&tree).unwrap();
/// assert_eq!(value, Value::Number(177.0));
/// assert_eq!(sink.as_str(), "Hi");
/// ```
pub struct Evaluator<'a> {
    sink: &'a mut dyn OutputSink,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator that emits output characters to `sink`.
    pub fn new(sink: &'a mut dyn OutputSink) -> Self {
        Self { sink }
    }

    /// Evaluates a node and returns the resulting value.
    ///
    /// This is the main entry point for evaluation. Operands are evaluated
    /// left to right before their operator is applied, except for the
    /// conditional, which evaluates only the branch it selects.
    ///
    /// # Errors
    /// Any [`EvaluationError`] raised by the node or one of its descendants.
    pub fn eval(&mut self, node: &Node) -> EvalResult<Value> {
        log::trace!("evaluating {}", node.kind);

        match node.kind {
            Kind::Number(n) => Ok(Value::Number(n)),

            Kind::Add
            | Kind::Sub
            | Kind::Mul
            | Kind::Div
            | Kind::Mod
            | Kind::Pow
            | Kind::Root
            | Kind::Log
            | Kind::And
            | Kind::Or
            | Kind::Equal
            | Kind::Greater
            | Kind::Less
            | Kind::GreaterEqual
            | Kind::LessEqual => {
                let left = self.eval(operand(node, 0)?)?;
                let right = self.eval(operand(node, 1)?)?;
                Self::eval_binary(node.kind, left, right)
            },

            Kind::Negate | Kind::Not | Kind::Log10 | Kind::Sqrt | Kind::Cbrt => {
                let value = self.eval(operand(node, 0)?)?;
                Self::eval_unary(node.kind, value)
            },

            Kind::Output => {
                let value = self.eval(operand(node, 0)?)?;
                self.eval_output(value)
            },

            Kind::Sin
            | Kind::Cos
            | Kind::Tan
            | Kind::Asin
            | Kind::Acos
            | Kind::Atan
            | Kind::Sinh
            | Kind::Cosh
            | Kind::Tanh
            | Kind::Asinh
            | Kind::Acosh
            | Kind::Atanh => {
                let value = self.eval(operand(node, 0)?)?;
                Self::eval_trig(node.kind, value.as_number(), node.angle_unit).map(Value::Number)
            },

            Kind::Conditional => self.eval_conditional(node),
        }
    }

    /// Evaluates `condition ? then : else`.
    ///
    /// Only the selected branch is evaluated, so output in the other branch
    /// never happens.
    fn eval_conditional(&mut self, node: &Node) -> EvalResult<Value> {
        let condition = self.eval(operand(node, 0)?)?;

        if condition.as_bool() {
            self.eval(operand(node, 1)?)
        } else {
            self.eval(operand(node, 2)?)
        }
    }

    pub(in crate::interpreter::evaluator) fn emit(&mut self, ch: char) -> EvalResult<()> {
        self.sink.emit(ch)?;
        Ok(())
    }
}
