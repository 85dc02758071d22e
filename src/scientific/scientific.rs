use crate::{Calculator, CalculatorError, HistoryList, Operation};
use tracing::debug;

/// A [`Calculator`] with power, roots, logarithms and trigonometry.
///
/// The basic operations are delegated to the wrapped calculator and share its
/// history. The scientific operations are never recorded.
#[derive(Debug, Clone, Default)]
pub struct ScientificCalculator {
    basic: Calculator,
    /// Trigonometric functions take degrees instead of radians.
    use_degrees: bool,
}

impl ScientificCalculator {
    pub fn new() -> Self {
        Self {
            basic: Calculator::new(),
            use_degrees: false,
        }
    }

    pub fn set_use_degrees(&mut self, use_degrees: bool) {
        self.use_degrees = use_degrees;
    }

    pub fn uses_degrees(&self) -> bool {
        self.use_degrees
    }

    /// `base` raised to `exponent` with IEEE-754 semantics, so a negative
    /// base with a fractional exponent yields NaN.
    pub fn power(&self, base: f64, exponent: f64) -> f64 {
        let value = base.powf(exponent);
        debug!(base, exponent, value, "computing power");
        value
    }

    /// # Errors
    ///
    /// Returns [`CalculatorError::NegativeRadicand`] when `value < 0.0`.
    pub fn square_root(&self, value: f64) -> Result<f64, CalculatorError> {
        if value < 0.0 {
            debug!(value, "rejecting negative radicand");
            return Err(CalculatorError::NegativeRadicand(value));
        }
        Ok(value.sqrt())
    }

    /// Natural logarithm.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::NonPositiveLogarithm`] when `x <= 0.0`.
    pub fn ln(&self, x: f64) -> Result<f64, CalculatorError> {
        if x <= 0.0 {
            debug!(x, "rejecting non-positive logarithm");
            return Err(CalculatorError::NonPositiveLogarithm(x));
        }
        Ok(x.ln())
    }

    pub fn sin(&self, angle: f64) -> f64 {
        self.radians(angle).sin()
    }

    pub fn cos(&self, angle: f64) -> f64 {
        self.radians(angle).cos()
    }

    fn radians(&self, angle: f64) -> f64 {
        if self.use_degrees {
            angle.to_radians()
        } else {
            angle
        }
    }

    pub fn basic(&self) -> &Calculator {
        &self.basic
    }

    pub fn basic_mut(&mut self) -> &mut Calculator {
        &mut self.basic
    }

    pub fn add(&mut self, a: f64, b: f64) -> f64 {
        self.basic.add(a, b)
    }

    pub fn subtract(&mut self, a: f64, b: f64) -> f64 {
        self.basic.subtract(a, b)
    }

    pub fn multiply(&mut self, a: f64, b: f64) -> f64 {
        self.basic.multiply(a, b)
    }

    pub fn divide(&mut self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        self.basic.divide(a, b)
    }

    pub fn calculate(&mut self, a: f64, b: f64, op: Operation) -> Result<f64, CalculatorError> {
        self.basic.calculate(a, b, op)
    }

    pub fn history(&self) -> HistoryList {
        self.basic.history()
    }

    pub fn clear_history(&mut self) {
        self.basic.clear_history();
    }

    pub fn operation_count(&self) -> usize {
        self.basic.operation_count()
    }
}

impl From<Calculator> for ScientificCalculator {
    fn from(basic: Calculator) -> Self {
        Self {
            basic,
            use_degrees: false,
        }
    }
}

impl AsRef<Calculator> for ScientificCalculator {
    fn as_ref(&self) -> &Calculator {
        &self.basic
    }
}

impl AsMut<Calculator> for ScientificCalculator {
    fn as_mut(&mut self) -> &mut Calculator {
        &mut self.basic
    }
}
