use std::io;

#[derive(Debug, thiserror::Error)]
/// Represents all errors that can occur while evaluating an expression tree.
pub enum EvaluationError {
    /// Attempted division (or modulo, or a zero-index root) by zero.
    #[error("Division by zero in '{operator}'.")]
    DivisionByZero {
        /// Symbol of the operator that divided by zero.
        operator: &'static str,
    },
    /// A function was applied outside of its domain.
    #[error("Argument {argument} is outside the domain of {function}.")]
    Domain {
        /// Name of the function.
        function: &'static str,
        /// The offending argument.
        argument: f64,
    },
    /// A node has fewer children than its operator needs.
    #[error("Operator '{operator}' is missing operand {index}.")]
    MissingOperand {
        /// Symbol of the operator.
        operator: &'static str,
        /// Zero based index of the missing operand.
        index:    usize,
    },
    /// The output operator was given a value that is not a character.
    #[error("Value {value} is not a valid character code.")]
    InvalidCodePoint {
        /// The value that was to be printed.
        value: f64,
    },
    /// Writing to the output sink failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}
