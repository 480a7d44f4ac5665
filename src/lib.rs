//! # treecalc
//!
//! treecalc is an infix expression interpreter written in Rust.
//! It translates, tokenizes, parses and evaluates arithmetic, comparison,
//! boolean, trigonometric and conditional expressions, with implicit
//! multiplication, unary minus and interactive input.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::{AngleUnit, Node},
    error::{Error, ParseError},
    interpreter::{
        io::{LineSource, OutputSink, StdinLines},
        parser::core::Parser,
        value::core::Value,
    },
};

/// Defines the expression tree.
///
/// This module declares the `Node` struct, the closed `Kind` enum of operators
/// and the `AngleUnit` used by trigonometric nodes. Trees are built by the
/// parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines every operator kind with its fixed arity.
/// - Carries the angle unit of each node.
/// - Exposes the evaluation entry points on `Node`.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while translating,
/// lexing, parsing or evaluating an expression.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Wraps both phases in a single `Error` for callers running the full
///   pipeline.
pub mod error;
/// Orchestrates the translator, lexer, parser and evaluator.
///
/// This module ties together every stage of turning source text into a value,
/// the runtime value type, and the input and output collaborators.
///
/// # Responsibilities
/// - Coordinates all core components: translator, lexer, parser, evaluator.
/// - Provides the line source and output sink abstractions.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General numeric helpers.
///
/// Safe conversions from floating-point values to characters and integer
/// tests used by the evaluator.
pub mod util;

/// Parses `source` into an expression tree, reading standard input for input
/// tokens.
///
/// # Errors
/// Returns a [`ParseError`] for unknown characters, invalid literals,
/// unbalanced brackets, malformed conditionals or a closed input stream.
///
/// # Examples
/// ```
/// use treecalc::{interpreter::value::core::Value, parse};
///
/// let tree = parse("(2+3)*4").unwrap();
/// assert_eq!(tree.evaluate().unwrap(), Value::Number(20.0));
///
/// assert!(parse("(2+3").is_err());
/// ```
pub fn parse(source: &str) -> Result<Node, ParseError> {
    let mut input = StdinLines::default();
    Parser::new(&mut input).parse(source)
}

/// Parses and evaluates `source` in one go.
///
/// Trigonometric nodes use `angle_unit`, characters from the output operator
/// go to `sink` and input tokens read standard input.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use treecalc::{
///     ast::AngleUnit,
///     calculate,
///     interpreter::{io::NullSink, value::core::Value},
/// };
///
/// let value = calculate("1 ? 2 : 3", AngleUnit::Radians, &mut NullSink).unwrap();
/// assert_eq!(value, Value::Number(2.0));
///
/// // Division by zero is reported, not turned into infinity.
/// assert!(calculate("1/0", AngleUnit::Radians, &mut NullSink).is_err());
/// ```
pub fn calculate(source: &str,
                 angle_unit: AngleUnit,
                 sink: &mut dyn OutputSink)
                 -> Result<Value, Error> {
    calculate_with(source, angle_unit, &mut StdinLines::default(), sink)
}

/// Like [`calculate`], but reads input tokens from `input`.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use treecalc::{
///     ast::AngleUnit,
///     calculate_with,
///     interpreter::{
///         io::{ScriptedLines, StringSink},
///         value::core::Value,
///     },
/// };
///
/// let mut input = ScriptedLines::new(["72"]);
/// let mut sink = StringSink::default();
///
/// let value = calculate_with("o i", AngleUnit::Radians, &mut input, &mut sink).unwrap();
/// assert_eq!(value, Value::Number(72.0));
/// assert_eq!(sink.as_str(), "H");
/// ```
pub fn calculate_with(source: &str,
                      angle_unit: AngleUnit,
                      input: &mut dyn LineSource,
                      sink: &mut dyn OutputSink)
                      -> Result<Value, Error> {
    let tree = Parser::new(input).with_angle_unit(angle_unit).parse(source)?;

    Ok(tree.evaluate_with(sink)?)
}
