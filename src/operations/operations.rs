use std::fmt;
use strum_macros::{Display, EnumIter};

/// The arithmetic performed by a recorded operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Operation {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Subtract,
    #[strum(serialize = "*")]
    Multiply,
    #[strum(serialize = "/")]
    Divide,
}

impl Operation {
    pub fn description(&self) -> &'static str {
        match self {
            Operation::Add => "Addition",
            Operation::Subtract => "Subtraction",
            Operation::Multiply => "Multiplication",
            Operation::Divide => "Division",
        }
    }

    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            Operation::Add => a + b,
            Operation::Subtract => a - b,
            Operation::Multiply => a * b,
            Operation::Divide => a / b,
        }
    }
}

/// A single history entry. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationResult {
    operand_a: f64,
    operand_b: f64,
    value: f64,
    operation: Operation,
    description: String,
}

impl OperationResult {
    pub fn new(operand_a: f64, operand_b: f64, value: f64, operation: Operation) -> Self {
        Self {
            operand_a,
            operand_b,
            value,
            operation,
            description: operation.description().to_string(),
        }
    }

    pub fn operand_a(&self) -> f64 {
        self.operand_a
    }

    pub fn operand_b(&self) -> f64 {
        self.operand_b
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for OperationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.operand_a, self.operation, self.operand_b, self.value
        )
    }
}
