/// Numeric conversion helpers.
///
/// This module provides safe functions for turning floating-point values into
/// integers and characters without silent wrap-around, and integer tests on
/// floating-point values.
///
/// Fallible conversions return a `Result` that is `Ok` if the conversion is
/// valid and an evaluation error otherwise.
pub mod num;
