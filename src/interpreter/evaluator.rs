/// Binary operator evaluation logic.
///
/// Handles arithmetic, exponent, comparison and logical operators, all of
/// which evaluate both of their operands.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements negation, logical not, the base 10 logarithm, square and cube
/// roots and the output operator.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the [`core::Evaluator`], dispatch over node kinds and the
/// conditional operator.
pub mod core;

/// Trigonometric and hyperbolic functions and their inverses.
pub mod trig;

/// Utility functions for evaluation.
///
/// Operand access and domain checking shared by all operators.
pub mod utils;

#[cfg(test)]
mod tests;
