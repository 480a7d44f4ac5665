use crate::{
    ast::Node,
    error::EvaluationError,
    interpreter::evaluator::core::EvalResult,
};

/// Returns the operand at `index`, or `MissingOperand` if the node has fewer
/// children.
///
/// Trees built by the parser only lack an operand when an operator ended the
/// input, as in `2+`.
///
/// # Example
/// ```
/// use treecalc::{
///     ast::{Kind, Node},
///     interpreter::evaluator::utils::operand,
/// };
///
/// let node = Node::new(Kind::Add, vec![Node::number(2.0)]);
/// assert!(operand(&node, 0).is_ok());
/// assert!(operand(&node, 1).is_err());
/// ```
pub fn operand(node: &Node, index: usize) -> EvalResult<&Node> {
    node.children
        .get(index)
        .ok_or(EvaluationError::MissingOperand { operator: node.kind.symbol(),
                                                 index })
}

/// Rejects a NaN result computed from a non-NaN argument.
///
/// NaN only appears from a valid argument when the function is undefined
/// there, such as `asin 2` or `(-8) ^ 0.5`.
///
/// # Example
/// ```
/// use treecalc::interpreter::evaluator::utils::domain_checked;
///
/// assert_eq!(domain_checked("asin", 1.0, 1f64.asin()).unwrap(), 1f64.asin());
/// assert!(domain_checked("asin", 2.0, 2f64.asin()).is_err());
/// ```
pub fn domain_checked(function: &'static str, argument: f64, result: f64) -> EvalResult<f64> {
    if result.is_nan() && !argument.is_nan() {
        return Err(EvaluationError::Domain { function, argument });
    }
    Ok(result)
}

/// Rejects a NaN result computed from two non-NaN operands.
///
/// Infinite operands can cancel out, as in `inf - inf`, `0 * inf` or
/// `inf % 2`. The reported argument is the infinite operand if there is one.
///
/// # Example
/// ```
/// use treecalc::interpreter::evaluator::utils::domain_checked_pair;
///
/// let inf = f64::INFINITY;
/// assert!(domain_checked_pair("-", inf, inf, inf - inf).is_err());
/// assert!(domain_checked_pair("+", f64::NAN, 1.0, f64::NAN).unwrap().is_nan());
/// ```
pub fn domain_checked_pair(function: &'static str,
                           left: f64,
                           right: f64,
                           result: f64)
                           -> EvalResult<f64> {
    if result.is_nan() && !left.is_nan() && !right.is_nan() {
        let argument = if left.is_finite() { right } else { left };
        return Err(EvaluationError::Domain { function, argument });
    }
    Ok(result)
}
