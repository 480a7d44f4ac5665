use crate::interpreter::lexer::Token;

/// How loosely a token binds, loosest first.
///
/// The root of a token sequence is the loosest binding token outside of any
/// bracket group, so it is the operator evaluated last. Brackets and literals
/// rank near the top so that they are only picked when nothing else is
/// available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// `?` and `:`
    Ternary,
    /// `&` and `|`
    Logical,
    /// `=`, `>`, `<`, `≥` and `≤`
    Comparison,
    /// `+` and `-`
    Additive,
    /// `*`, `/` and `%`
    Multiplicative,
    /// `^`, `v` and `l`
    Exponent,
    /// Negation, not, log10, roots, output and the trigonometric functions.
    Unary,
    /// `(` and `)`
    Bracket,
    /// Numbers and constants.
    Literal,
    /// The input token.
    Input,
}

impl Token {
    /// Returns the precedence level of the token.
    ///
    /// # Example
    /// ```
    /// use treecalc::interpreter::{lexer::Token, parser::precedence::Precedence};
    ///
    /// assert!(Token::Plus.precedence() < Token::Star.precedence());
    /// assert!(Token::If.precedence() < Token::Or.precedence());
    /// assert_eq!(Token::Sin.precedence(), Precedence::Unary);
    /// ```
    #[must_use]
    pub const fn precedence(self) -> Precedence {
        match self {
            Self::If | Self::Else => Precedence::Ternary,
            Self::And | Self::Or => Precedence::Logical,
            Self::Equal | Self::Greater | Self::Less | Self::GreaterEqual | Self::LessEqual => {
                Precedence::Comparison
            },
            Self::Plus | Self::Minus => Precedence::Additive,
            Self::Star | Self::Slash | Self::Percent => Precedence::Multiplicative,
            Self::Caret | Self::Root | Self::Log => Precedence::Exponent,
            Self::Not
            | Self::Negate
            | Self::Log10
            | Self::Sqrt
            | Self::Cbrt
            | Self::Output
            | Self::Sin
            | Self::Cos
            | Self::Tan
            | Self::Asin
            | Self::Acos
            | Self::Atan
            | Self::Sinh
            | Self::Cosh
            | Self::Tanh
            | Self::Asinh
            | Self::Acosh
            | Self::Atanh => Precedence::Unary,
            Self::LParen | Self::RParen => Precedence::Bracket,
            Self::Number(_) | Self::E | Self::Pi | Self::Ignored => Precedence::Literal,
            Self::Input => Precedence::Input,
        }
    }
}
