use crate::{error::EvaluationError, interpreter::evaluator::core::EvalResult};

/// Converts a value to the character whose code point is its integer part.
///
/// The value is truncated toward zero first, so `65.9` gives `'A'`.
///
/// ## Errors
/// Returns `InvalidCodePoint` for non-finite or negative values, values above
/// `char::MAX` and surrogate code points.
///
/// ## Example
/// ```
/// use treecalc::{error::EvaluationError, util::num::f64_to_char_checked};
///
/// assert_eq!(f64_to_char_checked(65.9).unwrap(), 'A');
///
/// let err = f64_to_char_checked(-1.0).unwrap_err();
/// assert!(matches!(err, EvaluationError::InvalidCodePoint { .. }));
///
/// // Surrogates are not characters.
/// assert!(f64_to_char_checked(55296.0).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_char_checked(value: f64) -> EvalResult<char> {
    let truncated = value.trunc();
    if !truncated.is_finite() || truncated < 0.0 || truncated > f64::from(u32::from(char::MAX)) {
        return Err(EvaluationError::InvalidCodePoint { value });
    }

    char::from_u32(truncated as u32).ok_or(EvaluationError::InvalidCodePoint { value })
}

/// Returns `true` if the value is an odd integer.
///
/// ## Example
/// ```
/// use treecalc::util::num::is_odd_integer;
///
/// assert!(is_odd_integer(3.0));
/// assert!(is_odd_integer(-5.0));
/// assert!(!is_odd_integer(4.0));
/// assert!(!is_odd_integer(2.5));
/// ```
#[must_use]
pub fn is_odd_integer(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0 && value.rem_euclid(2.0) == 1.0
}

/// Replaces a computed root with the nearest whole number when that number
/// is the exact root.
///
/// `cbrt` and `powf` can land one ulp off a whole root, so `∛27` gives
/// `3.0000000000000004`. If raising the rounded root to `index` gives back
/// `radicand` exactly, the rounded root is returned instead.
///
/// ## Example
/// ```
/// use treecalc::util::num::snap_exact_root;
///
/// assert_eq!(snap_exact_root(27f64.cbrt(), 3.0, 27.0), 3.0);
/// assert_eq!(snap_exact_root((-27f64).cbrt(), 3.0, -27.0), -3.0);
/// assert_eq!(snap_exact_root(2f64.sqrt(), 2.0, 2.0), 2f64.sqrt());
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
#[allow(clippy::cast_possible_truncation)]
pub fn snap_exact_root(root: f64, index: f64, radicand: f64) -> f64 {
    if !root.is_finite() || index.fract() != 0.0 || index.abs() > 64.0 {
        return root;
    }

    let candidate = root.round();
    if candidate.powi(index as i32) == radicand {
        candidate
    } else {
        root
    }
}
