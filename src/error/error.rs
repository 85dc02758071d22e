use thiserror::Error;

/// Every variant is an invalid-argument error: the operand lies outside the
/// operation's domain and nothing was recorded.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("Division by zero is not allowed")]
    DivisionByZero,

    #[error("Cannot calculate square root of negative number: {0}")]
    NegativeRadicand(f64),

    #[error("Cannot calculate logarithm of non-positive number: {0}")]
    NonPositiveLogarithm(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            CalculatorError::DivisionByZero.to_string(),
            "Division by zero is not allowed"
        );
        assert_eq!(
            CalculatorError::NegativeRadicand(-4.0).to_string(),
            "Cannot calculate square root of negative number: -4"
        );
        assert_eq!(
            CalculatorError::NonPositiveLogarithm(0.0).to_string(),
            "Cannot calculate logarithm of non-positive number: 0"
        );
    }
}
