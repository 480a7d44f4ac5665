use std::fmt;

/// Represents a runtime value in the interpreter.
///
/// Arithmetic produces numbers, comparisons and logical operators produce
/// booleans. Either kind is accepted everywhere; the conversions are
/// [`Value::as_number`] and [`Value::as_bool`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A double precision floating-point number.
    Number(f64),
    /// A boolean, produced by comparisons and logical operators.
    Bool(bool),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl Value {
    /// Converts the value to a number.
    ///
    /// `true` becomes `1.0` and `false` becomes `0.0`.
    ///
    /// # Example
    /// ```
    /// use treecalc::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Number(2.5).as_number(), 2.5);
    /// assert_eq!(Value::Bool(true).as_number(), 1.0);
    /// ```
    #[must_use]
    pub const fn as_number(self) -> f64 {
        match self {
            Self::Number(n) => n,
            Self::Bool(true) => 1.0,
            Self::Bool(false) => 0.0,
        }
    }

    /// Converts the value to a boolean.
    ///
    /// A number is true when it is neither zero nor NaN.
    ///
    /// # Example
    /// ```
    /// use treecalc::interpreter::value::core::Value;
    ///
    /// assert!(Value::Number(-3.0).as_bool());
    /// assert!(!Value::Number(0.0).as_bool());
    /// assert!(!Value::Number(f64::NAN).as_bool());
    /// ```
    #[must_use]
    pub fn as_bool(self) -> bool {
        match self {
            Self::Number(n) => n != 0.0 && !n.is_nan(),
            Self::Bool(b) => b,
        }
    }

    /// Rounds numbers to `digits` decimal places; booleans are unchanged.
    ///
    /// # Example
    /// ```
    /// use treecalc::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Number(0.123_456_7).rounded(5), Value::Number(0.12346));
    /// ```
    #[must_use]
    pub fn rounded(self, digits: u8) -> Self {
        match self {
            Self::Number(n) if n.is_finite() => {
                let factor = 10f64.powi(i32::from(digits));
                let rounded = (n * factor).round() / factor;
                if rounded.is_finite() {
                    Self::Number(rounded)
                } else {
                    self
                }
            },
            _ => self,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) if *n == 0.0 => write!(f, "0"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}
