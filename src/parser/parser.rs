use crate::{CommandKind, Operation};
use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Basic { op: Operation, a: f64, b: f64 },
    Power { base: f64, exponent: f64 },
    Sqrt(f64),
    Ln(f64),
    Sin(f64),
    Cos(f64),
    /// `true` switches trigonometry to degrees.
    Mode(bool),
    History,
    Count,
    Clear,
    Help,
    Exit,
}

enum Quote {
    Unquoted,
    SingleQuoted,
    DoubleQuoted,
}

/// Splits a line into whitespace-separated words, honouring quotes and
/// backslash escapes.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    let mut buffer = String::new();
    let mut quote = Quote::Unquoted;

    let push = |buffer: &mut String, tokens: &mut Vec<String>| {
        if !buffer.is_empty() {
            tokens.push(buffer.to_string());
        }
        buffer.clear();
    };

    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        match quote {
            Quote::Unquoted => match c {
                c if c.is_whitespace() => push(&mut buffer, &mut tokens),
                '\'' => quote = Quote::SingleQuoted,
                '"' => quote = Quote::DoubleQuoted,
                '\\' => {
                    if let Some(next) = chars.next() {
                        buffer.push(next)
                    }
                }
                _ => buffer.push(c),
            },
            Quote::SingleQuoted => match c {
                '\'' => quote = Quote::Unquoted,
                _ => buffer.push(c),
            },
            Quote::DoubleQuoted => match c {
                '"' => quote = Quote::Unquoted,
                _ => buffer.push(c),
            },
        }
    }
    push(&mut buffer, &mut tokens);

    tokens
}

pub fn parse_command(line: &str) -> Result<Command> {
    let tokens = tokenize(line);
    let (name, args) = tokens
        .split_first()
        .ok_or_else(|| anyhow!("Empty command"))?;

    let kind = name
        .parse::<CommandKind>()
        .map_err(|_| anyhow!("{name}: unknown command"))?;

    let command = match kind {
        CommandKind::Add => binary(kind, args, Operation::Add)?,
        CommandKind::Sub => binary(kind, args, Operation::Subtract)?,
        CommandKind::Mul => binary(kind, args, Operation::Multiply)?,
        CommandKind::Div => binary(kind, args, Operation::Divide)?,
        CommandKind::Pow => {
            let [base, exponent] = numbers::<2>(kind, args)?;
            Command::Power { base, exponent }
        }
        CommandKind::Sqrt => {
            let [value] = numbers::<1>(kind, args)?;
            Command::Sqrt(value)
        }
        CommandKind::Ln => Command::Ln(unary(kind, args)?),
        CommandKind::Sin => Command::Sin(unary(kind, args)?),
        CommandKind::Cos => Command::Cos(unary(kind, args)?),
        CommandKind::Mode => Command::Mode(angle_mode(kind, args)?),
        CommandKind::History => nullary(kind, args, Command::History)?,
        CommandKind::Count => nullary(kind, args, Command::Count)?,
        CommandKind::Clear => nullary(kind, args, Command::Clear)?,
        CommandKind::Help => nullary(kind, args, Command::Help)?,
        CommandKind::Exit => nullary(kind, args, Command::Exit)?,
    };

    Ok(command)
}

fn binary(kind: CommandKind, args: &[String], op: Operation) -> Result<Command> {
    let [a, b] = numbers::<2>(kind, args)?;
    Ok(Command::Basic { op, a, b })
}

fn unary(kind: CommandKind, args: &[String]) -> Result<f64> {
    let [value] = numbers::<1>(kind, args)?;
    Ok(value)
}

fn angle_mode(kind: CommandKind, args: &[String]) -> Result<bool> {
    match args {
        [mode] => match mode.to_ascii_lowercase().as_str() {
            "deg" | "degrees" => Ok(true),
            "rad" | "radians" => Ok(false),
            _ => Err(anyhow!("{}: expected 'deg' or 'rad', got '{mode}'", kind.name())),
        },
        _ => Err(anyhow!(
            "{}: expected 1 argument(s), got {}",
            kind.name(),
            args.len()
        )),
    }
}

fn nullary(kind: CommandKind, args: &[String], command: Command) -> Result<Command> {
    numbers::<0>(kind, args)?;
    Ok(command)
}

fn numbers<const N: usize>(kind: CommandKind, args: &[String]) -> Result<[f64; N]> {
    if args.len() != N {
        return Err(anyhow!(
            "{}: expected {} argument(s), got {}",
            kind.name(),
            N,
            args.len()
        ));
    }

    let mut values = [0.0; N];
    for (slot, arg) in values.iter_mut().zip(args) {
        *slot = arg
            .parse()
            .with_context(|| format!("{}: invalid number '{arg}'", kind.name()))?;
    }
    Ok(values)
}
