/// Core parsing logic.
///
/// Contains the [`core::Parser`], root selection over a token slice and the
/// dispatch that turns the chosen root into a tree node.
pub mod core;

/// Precedence ranking of tokens.
///
/// Assigns every token the level used to decide which one becomes the root of
/// a sub-expression.
pub mod precedence;

/// Utility functions for the parser.
///
/// Bracket span computation and conditional marker matching.
pub mod utils;
