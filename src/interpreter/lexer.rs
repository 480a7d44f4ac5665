use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::parser::{core::ParseResult, precedence::Precedence},
};

/// Represents a lexical token of the canonical alphabet.
///
/// Every operator is a single symbol; the translator has already rewritten
/// longer spellings such as `sin` or `<=`.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `.5` or `2.`.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// Euler's number.
    #[token("e")]
    E,
    /// `π`
    #[token("π")]
    Pi,
    /// `?`
    #[token("?")]
    If,
    /// `:`
    #[token(":")]
    Else,
    /// `&`
    #[token("&")]
    And,
    /// `|`
    #[token("|")]
    Or,
    /// `!`
    #[token("!")]
    Not,
    /// `=`
    #[token("=")]
    Equal,
    /// `>`
    #[token(">")]
    Greater,
    /// `<`
    #[token("<")]
    Less,
    /// `≥`
    #[token("≥")]
    GreaterEqual,
    /// `≤`
    #[token("≤")]
    LessEqual,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `v`
    #[token("v")]
    Root,
    /// `l`
    #[token("l")]
    Log,
    /// `L`
    #[token("L")]
    Log10,
    /// `√`
    #[token("√")]
    Sqrt,
    /// `∛`
    #[token("∛")]
    Cbrt,
    /// `n`, also produced from a `-` that has no left operand.
    #[token("n")]
    Negate,
    /// `s`
    #[token("s")]
    Sin,
    /// `c`
    #[token("c")]
    Cos,
    /// `t`
    #[token("t")]
    Tan,
    /// `S`
    #[token("S")]
    Asin,
    /// `C`
    #[token("C")]
    Acos,
    /// `T`
    #[token("T")]
    Atan,
    /// `ś`
    #[token("ś")]
    Sinh,
    /// `ć`
    #[token("ć")]
    Cosh,
    /// `t́`
    #[token("t\u{301}")]
    Tanh,
    /// `Ś`
    #[token("Ś")]
    Asinh,
    /// `Ć`
    #[token("Ć")]
    Acosh,
    /// `T́`
    #[token("T\u{301}")]
    Atanh,
    /// `o`
    #[token("o")]
    Output,
    /// `i`, replaced by a line of interactive input.
    #[token("i")]
    Input,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns `true` if the token finishes a value, so that a following
    /// value would need an operator in between.
    #[must_use]
    pub const fn ends_value(self) -> bool {
        matches!(self,
                 Self::Number(_) | Self::E | Self::Pi | Self::RParen | Self::Input)
    }

    /// Returns `true` if the token can begin a value.
    #[must_use]
    pub fn starts_value(self) -> bool {
        matches!(self,
                 Self::Number(_) | Self::E | Self::Pi | Self::LParen | Self::Input)
        || self.precedence() == Precedence::Unary
    }
}

/// Parses a numeric literal from the current token slice.
///
/// The first decimal point is kept; any later ones are dropped while the
/// digits around them keep accumulating.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice holds no digit at all.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    normalize_literal(lex.slice()).parse().ok()
}

/// Drops every decimal point after the first one.
///
/// # Example
/// ```
/// use treecalc::interpreter::lexer::normalize_literal;
///
/// assert_eq!(normalize_literal("1.2.3"), "1.23");
/// assert_eq!(normalize_literal("42"), "42");
/// ```
#[must_use]
pub fn normalize_literal(literal: &str) -> String {
    let mut seen_point = false;
    literal.chars()
           .filter(|&ch| {
               if ch != '.' {
                   return true;
               }
               !std::mem::replace(&mut seen_point, true)
           })
           .collect()
}

/// Scans canonical text into a token sequence.
///
/// On top of the raw scan this inserts a `*` between two adjacent values,
/// turns a `-` without a left operand into [`Token::Negate`], and strips one
/// pair of brackets that encloses the whole sequence.
///
/// # Errors
/// - `InvalidLiteral` for a run of decimal points without digits.
/// - `UnexpectedToken` for any character outside the canonical alphabet.
///
/// # Example
/// ```
/// use treecalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2s-1").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(2.0), Token::Star, Token::Sin, Token::Negate, Token::Number(1.0)]);
/// ```
pub fn tokenize(text: &str) -> ParseResult<Vec<Token>> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut lexer = Token::lexer(text);

    while let Some(token) = lexer.next() {
        let Ok(token) = token else {
            let slice = lexer.slice();
            let position = lexer.span().start;
            if slice.chars().all(|ch| ch.is_ascii_digit() || ch == '.') {
                return Err(ParseError::InvalidLiteral { literal: slice.to_string(),
                                                        position });
            }
            return Err(ParseError::UnexpectedToken { token: slice.to_string(),
                                                     position });
        };

        let previous_ends_value = tokens.last().is_some_and(|prev| prev.ends_value());

        let token = match token {
            Token::Minus if !previous_ends_value => Token::Negate,
            other => other,
        };

        if previous_ends_value && token.starts_value() {
            tokens.push(Token::Star);
        }
        tokens.push(token);
    }

    strip_enclosing_brackets(&mut tokens);

    log::trace!("tokens for {text:?}: {tokens:?}");
    Ok(tokens)
}

/// Removes the first and last token if they are a matching bracket pair.
fn strip_enclosing_brackets(tokens: &mut Vec<Token>) {
    if tokens.first() != Some(&Token::LParen) || tokens.last() != Some(&Token::RParen) {
        return;
    }

    let mut depth = 0usize;
    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => {
                depth = depth.saturating_sub(1);
                if depth == 0 && i != tokens.len() - 1 {
                    return;
                }
            },
            _ => {},
        }
    }

    if depth == 0 {
        tokens.pop();
        tokens.remove(0);
    }
}
