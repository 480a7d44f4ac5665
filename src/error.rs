/// Parsing errors.
///
/// Defines all error types that can occur while translating, lexing and
/// building the expression tree. Parse errors include unknown characters,
/// malformed numeric literals, unbalanced brackets, malformed conditionals and
/// failures of the interactive input source.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while computing the value of an
/// expression tree, such as division by zero, out-of-domain arguments to
/// transcendental functions, or a tree with a missing operand.
pub mod evaluation_error;

pub use evaluation_error::EvaluationError;
pub use parse_error::ParseError;

/// Any failure of the full parse-then-evaluate pipeline.
///
/// Returned by [`crate::calculate`], which runs both phases and lets the
/// caller decide whether to report the error and continue or abort.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source text could not be turned into an expression tree.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression tree could not be evaluated.
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}
