//! Basic and scientific calculators with a bounded operation history.
//!
//! ```
//! use calculator::{CalculatorError, ScientificCalculator, format_number};
//!
//! let mut calc = ScientificCalculator::new();
//! assert_eq!(calc.add(2.0, 3.0), 5.0);
//! assert_eq!(calc.divide(1.0, 0.0), Err(CalculatorError::DivisionByZero));
//! assert_eq!(calc.power(2.0, 10.0), 1024.0);
//! assert_eq!(calc.operation_count(), 1);
//! assert_eq!(format_number(3.14159, 2), "3.14");
//! ```

mod operations {
    mod operations;
    pub use operations::*;
}

mod history {
    mod history;
    pub use history::*;
}

mod error {
    mod error;
    pub use error::*;
}

mod calculator {
    mod calculator;
    pub use calculator::*;
}

mod scientific {
    mod scientific;
    pub use scientific::*;
}

mod format {
    mod format;
    pub use format::*;
}

mod config {
    mod config;
    pub use config::*;
}

mod parser {
    mod parser;
    pub use parser::*;
}

mod commands {
    mod commands;
    pub use commands::*;
}

mod completer {
    mod completer;
    pub use completer::*;
}

mod output {
    mod output;
    pub use output::*;
}

pub use calculator::Calculator;
pub use commands::{CommandKind, Flow, command_names, execute_command};
pub use completer::CalcCompleter;
pub use config::{DEFAULT_PROMPT, PRECISION_VAR, PROMPT_VAR, ReplConfig};
pub use error::CalculatorError;
pub use format::{DEFAULT_PRECISION, format_default, format_number};
pub use history::{History, HistoryList, MAX_HISTORY_SIZE};
pub use operations::{Operation, OperationResult};
pub use output::{BufferOutput, Output, OutputStreams, StdErrOutput, StdOutput};
pub use parser::{Command, parse_command, tokenize};
pub use scientific::ScientificCalculator;
