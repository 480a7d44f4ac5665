/// Substitutions applied by [`translate`], in order.
///
/// A pattern must come before every shorter pattern it contains, otherwise the
/// shorter one would consume part of it first (`asinh` before `sinh` and
/// `asin`, `sin-1` before `sin`).
pub const SUBSTITUTIONS: &[(&str, &str)] = &[
    // Inverse hyperbolic.
    ("arcsinh", "Ś"),
    ("arsinh", "Ś"),
    ("asinh", "Ś"),
    ("sinh-1", "Ś"),
    ("arccosh", "Ć"),
    ("arcosh", "Ć"),
    ("acosh", "Ć"),
    ("cosh-1", "Ć"),
    ("arctanh", "T\u{301}"),
    ("artanh", "T\u{301}"),
    ("atanh", "T\u{301}"),
    ("tanh-1", "T\u{301}"),
    // Hyperbolic.
    ("sinh", "ś"),
    ("cosh", "ć"),
    ("tanh", "t\u{301}"),
    // Inverse circular.
    ("arcsin", "S"),
    ("asin", "S"),
    ("sin-1", "S"),
    ("arccos", "C"),
    ("acos", "C"),
    ("cos-1", "C"),
    ("arctan", "T"),
    ("atan", "T"),
    ("tan-1", "T"),
    // Circular.
    ("sin", "s"),
    ("cos", "c"),
    ("tan", "t"),
    // Words.
    ("sqrt", "√"),
    ("cbrt", "∛"),
    ("input", "i"),
    ("print", "o"),
    ("log", "L"),
    ("ln", "el"),
    ("mod", "%"),
    ("and", "&"),
    ("not", "!"),
    ("or", "|"),
    ("pi", "π"),
    // Symbols.
    ("<=", "≤"),
    (">=", "≥"),
    ("==", "="),
    ("&&", "&"),
    ("||", "|"),
    ("**", "^"),
    ("×", "*"),
    ("÷", "/"),
];

/// Rewrites human-friendly notation into the canonical operator alphabet.
///
/// Every entry of [`SUBSTITUTIONS`] is applied in turn as a literal,
/// case-sensitive find-and-replace over the whole text. Characters that are
/// already canonical pass through untouched.
///
/// # Example
/// ```
/// use treecalc::interpreter::translator::translate;
///
/// assert_eq!(translate("sin-1(1) + sin(pi)"), "S(1) + s(π)");
/// assert_eq!(translate("2 <= 3 and not 0"), "2 ≤ 3 & ! 0");
/// assert_eq!(translate("sqrt 9 + cbrt 8"), "√ 9 + ∛ 8");
/// ```
#[must_use]
pub fn translate(source: &str) -> String {
    let translated = SUBSTITUTIONS.iter()
                                  .fold(source.to_string(), |text, (pattern, replacement)| {
                                      if text.contains(pattern) {
                                          text.replace(pattern, replacement)
                                      } else {
                                          text
                                      }
                                  });

    log::debug!("translated {source:?} to {translated:?}");
    translated
}
