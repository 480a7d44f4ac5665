use crate::{
    ast::{AngleUnit, Kind},
    interpreter::evaluator::{
        core::{EvalResult, Evaluator},
        utils::domain_checked,
    },
};

impl Evaluator<'_> {
    /// Evaluates a trigonometric or hyperbolic function.
    ///
    /// Direct circular functions read their argument in `unit`; inverse
    /// circular functions return their result in `unit`. Hyperbolic functions
    /// and their inverses ignore `unit`.
    ///
    /// # Errors
    /// `Domain` when a function is given an argument outside its domain, such
    /// as `asin 2`, `acosh 0` or an infinite angle.
    pub(crate) fn eval_trig(kind: Kind, x: f64, unit: AngleUnit) -> EvalResult<f64> {
        match kind {
            Kind::Sin => domain_checked("sin", x, unit.to_radians(x).sin()),
            Kind::Cos => domain_checked("cos", x, unit.to_radians(x).cos()),
            Kind::Tan => domain_checked("tan", x, unit.to_radians(x).tan()),
            Kind::Asin => domain_checked("asin", x, x.asin()).map(|r| unit.from_radians(r)),
            Kind::Acos => domain_checked("acos", x, x.acos()).map(|r| unit.from_radians(r)),
            Kind::Atan => Ok(unit.from_radians(x.atan())),
            Kind::Sinh => Ok(x.sinh()),
            Kind::Cosh => Ok(x.cosh()),
            Kind::Tanh => Ok(x.tanh()),
            Kind::Asinh => Ok(x.asinh()),
            Kind::Acosh => domain_checked("acosh", x, x.acosh()),
            Kind::Atanh => domain_checked("atanh", x, x.atanh()),
            _ => unreachable!("eval_trig used with {kind}"),
        }
    }
}
