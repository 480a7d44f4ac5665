use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// An outermost bracket pair, as the indices of its `(` and its `)`.
pub type BracketSpan = (usize, usize);

/// Returns the spans of all outermost bracket pairs, left to right.
///
/// A pair closes when the nesting depth returns to zero.
///
/// # Errors
/// `UnbalancedBrackets` if a `)` has no opening partner or a `(` is never
/// closed.
///
/// # Example
/// ```
/// use treecalc::interpreter::{lexer::tokenize, parser::utils::outer_brackets};
///
/// // `(1)+((2))` keeps its brackets because they do not enclose everything.
/// let tokens = tokenize("(1)+((2))").unwrap();
/// assert_eq!(outer_brackets(&tokens).unwrap(), vec![(0, 2), (4, 8)]);
/// ```
pub fn outer_brackets(tokens: &[Token]) -> ParseResult<Vec<BracketSpan>> {
    let mut spans = Vec::new();
    let mut depth = 0usize;
    let mut open = 0;

    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::LParen => {
                if depth == 0 {
                    open = i;
                }
                depth += 1;
            },
            Token::RParen => {
                depth = depth.checked_sub(1).ok_or(ParseError::UnbalancedBrackets)?;
                if depth == 0 {
                    spans.push((open, i));
                }
            },
            _ => {},
        }
    }

    if depth != 0 {
        return Err(ParseError::UnbalancedBrackets);
    }
    Ok(spans)
}

/// Returns `true` if `index` lies strictly between the brackets of any span.
#[must_use]
pub fn is_enclosed(spans: &[BracketSpan], index: usize) -> bool {
    spans.iter().any(|&(open, close)| open < index && index < close)
}

/// Locates the markers of a top-level conditional.
///
/// The `if` marker is the earliest `?` outside of brackets. Its `else` marker
/// is the `:` that balances it, counting nested `?`/`:` pairs in between, so
/// that `a ? b ? c : d : e` and `a ? b : c ? d : e` both nest the inner
/// conditional correctly.
///
/// # Errors
/// `MalformedTernary` if there is no top-level `?` or it has no matching `:`.
///
/// # Example
/// ```
/// use treecalc::interpreter::{lexer::tokenize, parser::utils::ternary_markers};
///
/// let tokens = tokenize("1?2:3?4:5").unwrap();
/// assert_eq!(ternary_markers(&tokens, &[]).unwrap(), (1, 3));
/// ```
pub fn ternary_markers(tokens: &[Token], spans: &[BracketSpan]) -> ParseResult<(usize, usize)> {
    let top_level = |&(i, _): &(usize, &Token)| !is_enclosed(spans, i);

    let if_index = tokens.iter()
                         .enumerate()
                         .filter(top_level)
                         .find(|(_, token)| **token == Token::If)
                         .map(|(i, _)| i)
                         .ok_or(ParseError::MalformedTernary)?;

    let mut pending = 0usize;
    for (i, token) in tokens.iter().enumerate().skip(if_index + 1).filter(top_level) {
        match token {
            Token::If => pending += 1,
            Token::Else if pending == 0 => return Ok((if_index, i)),
            Token::Else => pending -= 1,
            _ => {},
        }
    }

    Err(ParseError::MalformedTernary)
}
