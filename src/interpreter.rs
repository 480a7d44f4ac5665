/// The evaluator module computes the value of expression trees.
///
/// The evaluator walks a tree bottom-up, applies arithmetic, comparison,
/// logical, trigonometric and conditional operators, and emits characters for
/// the output operator through an explicit sink.
///
/// # Responsibilities
/// - Evaluates every node kind with exhaustive matching.
/// - Applies the number/boolean coercion rules.
/// - Reports division by zero, domain errors and malformed trees.
pub mod evaluator;
/// Line sources and output sinks used by the input and output operators.
pub mod io;
/// The lexer module tokenizes canonical text.
///
/// The lexer reads the translated text and produces a flat sequence of tokens:
/// numeric literals, constants and single-symbol operators. It also inserts
/// implicit multiplications and marks unary minus signs.
///
/// # Responsibilities
/// - Converts the canonical character stream into tokens.
/// - Applies the decimal point, implicit multiplication and negation rules.
/// - Reports unknown characters and malformed literals.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser repeatedly finds the loosest binding operator outside of any
/// bracket group and splits the token sequence around it.
///
/// # Responsibilities
/// - Ranks tokens by precedence and finds the root of every sub-sequence.
/// - Validates bracket nesting and conditional markers.
/// - Reads additional input when the input token is reached.
pub mod parser;
/// Rewrites human-friendly spellings into the canonical operator alphabet.
pub mod translator;
/// The value module defines the runtime values produced by evaluation.
///
/// Values are numbers or booleans, and each converts into the other following
/// a fixed coercion table.
pub mod value;
