use crate::{CalculatorError, History, HistoryList, Operation, OperationResult};
use tracing::debug;

/// Performs the four basic operations and records each successful result.
///
/// ```
/// use calculator::Calculator;
///
/// let mut calc = Calculator::new();
/// assert_eq!(calc.add(5.0, 3.0), 8.0);
/// assert_eq!(calc.operation_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    history: History,
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            history: History::new(),
        }
    }

    pub fn add(&mut self, a: f64, b: f64) -> f64 {
        self.apply(a, b, Operation::Add)
    }

    pub fn subtract(&mut self, a: f64, b: f64) -> f64 {
        self.apply(a, b, Operation::Subtract)
    }

    pub fn multiply(&mut self, a: f64, b: f64) -> f64 {
        self.apply(a, b, Operation::Multiply)
    }

    /// Divides `a` by `b`.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::DivisionByZero`] when `b` is zero (of either
    /// sign). Nothing is recorded in that case.
    pub fn divide(&mut self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        if b == 0.0 {
            debug!(a, b, "rejecting division by zero");
            return Err(CalculatorError::DivisionByZero);
        }
        Ok(self.apply(a, b, Operation::Divide))
    }

    /// Runs `op` on the operands, with the same recording rules as the
    /// dedicated methods.
    pub fn calculate(&mut self, a: f64, b: f64, op: Operation) -> Result<f64, CalculatorError> {
        match op {
            Operation::Divide => self.divide(a, b),
            _ => Ok(self.apply(a, b, op)),
        }
    }

    /// Returns a copy of the history; later operations do not affect it.
    pub fn history(&self) -> HistoryList {
        self.history.snapshot()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn operation_count(&self) -> usize {
        self.history.len()
    }

    fn apply(&mut self, a: f64, b: f64, op: Operation) -> f64 {
        let value = op.apply(a, b);
        debug!(a, b, %op, value, "performing operation");
        self.record_operation(OperationResult::new(a, b, value, op));
        value
    }

    fn record_operation(&mut self, result: OperationResult) {
        self.history.push(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_HISTORY_SIZE;

    #[test]
    fn test_add() {
        let mut calc = Calculator::new();
        assert_eq!(calc.add(2.0, 3.0), 5.0);
        assert_eq!(calc.add(-5.0, 3.0), -2.0);
    }

    #[test]
    fn test_subtract() {
        let mut calc = Calculator::new();
        assert_eq!(calc.subtract(10.0, 4.0), 6.0);
    }

    #[test]
    fn test_multiply() {
        let mut calc = Calculator::new();
        assert_eq!(calc.multiply(3.0, 4.0), 12.0);
        assert_eq!(calc.multiply(0.1, 3.0), 0.1 * 3.0);
    }

    #[test]
    fn test_divide() {
        let mut calc = Calculator::new();
        assert_eq!(calc.divide(10.0, 2.0).unwrap(), 5.0);
        assert_eq!(calc.divide(1.0, 3.0).unwrap(), 1.0 / 3.0);
    }

    #[test]
    fn test_divide_by_zero() {
        let mut calc = Calculator::new();
        calc.add(1.0, 1.0);

        assert_eq!(calc.divide(10.0, 0.0), Err(CalculatorError::DivisionByZero));
        assert_eq!(calc.divide(10.0, -0.0), Err(CalculatorError::DivisionByZero));
        assert_eq!(calc.operation_count(), 1);
    }

    #[test]
    fn test_history_records_each_operation() {
        let mut calc = Calculator::new();
        calc.add(1.0, 2.0);
        calc.subtract(5.0, 3.0);
        calc.multiply(2.0, 2.0);
        calc.divide(8.0, 2.0).unwrap();

        let history = calc.history();
        let summary: Vec<(f64, Operation, &str)> = history
            .iter()
            .map(|r| (r.value(), r.operation(), r.description()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (3.0, Operation::Add, "Addition"),
                (2.0, Operation::Subtract, "Subtraction"),
                (4.0, Operation::Multiply, "Multiplication"),
                (4.0, Operation::Divide, "Division"),
            ]
        );
    }

    #[test]
    fn test_history_is_a_snapshot() {
        let mut calc = Calculator::new();
        calc.add(1.0, 2.0);
        let snapshot = calc.history();
        calc.add(3.0, 4.0);
        calc.clear_history();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].value(), 3.0);
        assert_eq!(snapshot[0].to_string(), "1 + 2 = 3");
    }

    #[test]
    fn test_history_cap() {
        let mut calc = Calculator::new();
        for i in 0..MAX_HISTORY_SIZE + 10 {
            calc.add(i as f64, 1.0);
        }
        assert_eq!(calc.operation_count(), MAX_HISTORY_SIZE);
        assert_eq!(calc.add(1.0, 1.0), 2.0);
        assert_eq!(calc.operation_count(), MAX_HISTORY_SIZE);
    }

    #[test]
    fn test_clear_history() {
        let mut calc = Calculator::new();
        calc.add(1.0, 2.0);
        calc.clear_history();
        assert_eq!(calc.operation_count(), 0);
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_calculate() {
        let mut calc = Calculator::new();
        assert_eq!(calc.calculate(6.0, 3.0, Operation::Add), Ok(9.0));
        assert_eq!(calc.calculate(6.0, 3.0, Operation::Subtract), Ok(3.0));
        assert_eq!(calc.calculate(6.0, 3.0, Operation::Multiply), Ok(18.0));
        assert_eq!(calc.calculate(6.0, 3.0, Operation::Divide), Ok(2.0));
        assert_eq!(
            calc.calculate(6.0, 0.0, Operation::Divide),
            Err(CalculatorError::DivisionByZero)
        );
        assert_eq!(calc.operation_count(), 4);
    }
}
