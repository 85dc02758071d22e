use crate::{Command, Output, ReplConfig, ScientificCalculator, format_number};
use anyhow::Result;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString};

#[derive(Debug, Clone, Copy, EnumString, EnumIter, PartialEq)]
#[strum(ascii_case_insensitive)]
pub enum CommandKind {
    #[strum(serialize = "add")]
    Add,
    #[strum(serialize = "sub", serialize = "subtract")]
    Sub,
    #[strum(serialize = "mul", serialize = "multiply")]
    Mul,
    #[strum(serialize = "div", serialize = "divide")]
    Div,
    #[strum(serialize = "pow", serialize = "power")]
    Pow,
    #[strum(serialize = "sqrt")]
    Sqrt,
    #[strum(serialize = "ln")]
    Ln,
    #[strum(serialize = "sin")]
    Sin,
    #[strum(serialize = "cos")]
    Cos,
    #[strum(serialize = "mode")]
    Mode,
    #[strum(serialize = "history")]
    History,
    #[strum(serialize = "count")]
    Count,
    #[strum(serialize = "clear")]
    Clear,
    #[strum(serialize = "help")]
    Help,
    #[strum(serialize = "exit", serialize = "quit")]
    Exit,
}

impl CommandKind {
    pub fn name(&self) -> String {
        format!("{:?}", self).to_lowercase()
    }

    fn usage(&self) -> &'static str {
        match self {
            CommandKind::Add => "add <a> <b>          a + b",
            CommandKind::Sub => "sub <a> <b>          a - b",
            CommandKind::Mul => "mul <a> <b>          a * b",
            CommandKind::Div => "div <a> <b>          a / b",
            CommandKind::Pow => "pow <base> <exp>     base ^ exp (not recorded)",
            CommandKind::Sqrt => "sqrt <x>             square root (not recorded)",
            CommandKind::Ln => "ln <x>               natural logarithm (not recorded)",
            CommandKind::Sin => "sin <angle>          sine (not recorded)",
            CommandKind::Cos => "cos <angle>          cosine (not recorded)",
            CommandKind::Mode => "mode deg|rad         angle unit for sin and cos",
            CommandKind::History => "history              list recorded results",
            CommandKind::Count => "count                number of recorded results",
            CommandKind::Clear => "clear                forget all recorded results",
            CommandKind::Help => "help                 show this list",
            CommandKind::Exit => "exit                 leave the calculator",
        }
    }
}

pub fn command_names() -> Vec<String> {
    CommandKind::iter().map(|k| k.name()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub fn execute_command(
    calc: &mut ScientificCalculator,
    command: Command,
    config: &ReplConfig,
    out: &mut dyn Output,
) -> Result<Flow> {
    let fmt = |value: f64| format_number(value, config.precision);

    match command {
        Command::Basic { op, a, b } => out.print(&fmt(calc.calculate(a, b, op)?)),
        Command::Power { base, exponent } => out.print(&fmt(calc.power(base, exponent))),
        Command::Sqrt(value) => out.print(&fmt(calc.square_root(value)?)),
        Command::Ln(value) => out.print(&fmt(calc.ln(value)?)),
        Command::Sin(angle) => out.print(&fmt(calc.sin(angle))),
        Command::Cos(angle) => out.print(&fmt(calc.cos(angle))),
        Command::Mode(use_degrees) => calc.set_use_degrees(use_degrees),
        Command::History => {
            for (i, entry) in calc.history().iter().enumerate() {
                out.print(&format!(
                    "{}: {} = {}",
                    i + 1,
                    entry.description(),
                    fmt(entry.value())
                ));
            }
        }
        Command::Count => out.print(&calc.operation_count().to_string()),
        Command::Clear => calc.clear_history(),
        Command::Help => {
            for kind in CommandKind::iter() {
                out.print(kind.usage());
            }
        }
        Command::Exit => return Ok(Flow::Exit),
    }

    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BufferOutput, CalculatorError, parse_command};

    fn run(calc: &mut ScientificCalculator, line: &str) -> Result<(Flow, Vec<String>)> {
        let mut out = BufferOutput::new();
        let flow = execute_command(calc, parse_command(line)?, &ReplConfig::default(), &mut out)?;
        Ok((flow, out.lines))
    }

    #[test]
    fn test_command_names() {
        assert_eq!(
            command_names(),
            vec![
                "add", "sub", "mul", "div", "pow", "sqrt", "ln", "sin", "cos", "mode",
                "history", "count", "clear", "help", "exit"
            ]
        );
    }

    #[test]
    fn test_parse_kind_aliases() {
        assert_eq!("Multiply".parse::<CommandKind>().unwrap(), CommandKind::Mul);
        assert_eq!("QUIT".parse::<CommandKind>().unwrap(), CommandKind::Exit);
        assert!("mod".parse::<CommandKind>().is_err());
    }

    #[test]
    fn test_basic_is_printed_and_recorded() {
        let mut calc = ScientificCalculator::new();
        let (flow, lines) = run(&mut calc, "add 1.5 2").unwrap();
        assert_eq!(flow, Flow::Continue);
        assert_eq!(lines, vec!["3.50"]);
        assert_eq!(calc.operation_count(), 1);
    }

    #[test]
    fn test_scientific_is_not_recorded() {
        let mut calc = ScientificCalculator::new();
        assert_eq!(run(&mut calc, "pow 2 10").unwrap().1, vec!["1024.00"]);
        assert_eq!(run(&mut calc, "sqrt 2").unwrap().1, vec!["1.41"]);
        assert_eq!(calc.operation_count(), 0);
    }

    #[test]
    fn test_trig_follows_mode() {
        let mut calc = ScientificCalculator::new();
        assert_eq!(run(&mut calc, "cos 0").unwrap().1, vec!["1.00"]);

        assert!(run(&mut calc, "mode deg").unwrap().1.is_empty());
        assert!(calc.uses_degrees());
        assert_eq!(run(&mut calc, "sin 90").unwrap().1, vec!["1.00"]);
        assert_eq!(run(&mut calc, "cos 180").unwrap().1, vec!["-1.00"]);
        assert_eq!(run(&mut calc, "ln 1").unwrap().1, vec!["0.00"]);
        assert_eq!(calc.operation_count(), 0);
    }

    #[test]
    fn test_errors_are_propagated() {
        let mut calc = ScientificCalculator::new();

        let err = run(&mut calc, "div 1 0").unwrap_err();
        assert_eq!(
            err.downcast_ref::<CalculatorError>(),
            Some(&CalculatorError::DivisionByZero)
        );

        let err = run(&mut calc, "sqrt -9").unwrap_err();
        assert_eq!(
            err.downcast_ref::<CalculatorError>(),
            Some(&CalculatorError::NegativeRadicand(-9.0))
        );

        let err = run(&mut calc, "ln 0").unwrap_err();
        assert_eq!(
            err.downcast_ref::<CalculatorError>(),
            Some(&CalculatorError::NonPositiveLogarithm(0.0))
        );
        assert_eq!(calc.operation_count(), 0);
    }

    #[test]
    fn test_history_count_clear() {
        let mut calc = ScientificCalculator::new();
        run(&mut calc, "add 1 2").unwrap();
        run(&mut calc, "mul 2 4").unwrap();

        let (_, lines) = run(&mut calc, "history").unwrap();
        assert_eq!(lines, vec!["1: Addition = 3.00", "2: Multiplication = 8.00"]);
        assert_eq!(run(&mut calc, "count").unwrap().1, vec!["2"]);

        assert!(run(&mut calc, "clear").unwrap().1.is_empty());
        assert_eq!(run(&mut calc, "count").unwrap().1, vec!["0"]);
    }

    #[test]
    fn test_precision_from_config() {
        let mut calc = ScientificCalculator::new();
        let config = ReplConfig {
            precision: 0,
            ..ReplConfig::default()
        };
        let mut out = BufferOutput::new();
        execute_command(&mut calc, Command::Sqrt(16.0), &config, &mut out).unwrap();
        assert_eq!(out.lines, vec!["4"]);
    }

    #[test]
    fn test_help_lists_every_command() {
        let mut calc = ScientificCalculator::new();
        let (_, lines) = run(&mut calc, "help").unwrap();
        assert_eq!(lines.len(), command_names().len());
        assert!(lines[0].starts_with("add"));
    }

    #[test]
    fn test_exit() {
        let mut calc = ScientificCalculator::new();
        assert_eq!(run(&mut calc, "exit").unwrap().0, Flow::Exit);
    }
}
