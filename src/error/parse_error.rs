use std::io;

#[derive(Debug, thiserror::Error)]
/// Represents all errors that can occur during translation, lexing or parsing.
pub enum ParseError {
    /// Found a character that is not part of the canonical alphabet.
    #[error("Error at offset {position}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The offending source text.
        token:    String,
        /// Byte offset of the token in the translated text.
        position: usize,
    },
    /// A run of digits and decimal points did not form a number.
    #[error("Error at offset {position}: Invalid numeric literal '{literal}'.")]
    InvalidLiteral {
        /// The literal as written.
        literal:  String,
        /// Byte offset of the literal in the translated text.
        position: usize,
    },
    /// Brackets do not pair up.
    #[error("Unbalanced brackets: every '(' needs a matching ')'.")]
    UnbalancedBrackets,
    /// A `?` without its matching `:` or a `:` without a preceding `?`.
    #[error("Malformed conditional: expected 'condition ? value : value'.")]
    MalformedTernary,
    /// An operand or the whole expression is empty.
    #[error("Expected a value but found nothing.")]
    EmptyExpression,
    /// Tokens were left over around an expression that should stand alone.
    #[error("Unexpected tokens around '{token}'.")]
    UnexpectedTrailingTokens {
        /// The token the expression was rooted at.
        token: String,
    },
    /// Sub-expressions are nested deeper than the parser allows.
    #[error("Expression is nested more than {limit} levels deep.")]
    TooDeep {
        /// The deepest nesting accepted.
        limit: usize,
    },
    /// The interactive input stream ended while a line was requested.
    #[error("Input requested but the input stream is closed.")]
    InputClosed,
    /// Reading from the interactive input stream failed.
    #[error("Failed to read input: {0}")]
    Input(#[from] io::Error),
}
