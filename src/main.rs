use anyhow::Result;
use calculator::{
    CalcCompleter, Flow, OutputStreams, ReplConfig, ScientificCalculator, execute_command,
    parse_command,
};
use rustyline::{Editor, error::ReadlineError, history::DefaultHistory};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = ReplConfig::from_env()?;
    let mut rl: Editor<CalcCompleter, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(CalcCompleter::new()));

    let mut calc = ScientificCalculator::new();
    let mut streams = OutputStreams::default();

    loop {
        match rl.readline(&config.prompt) {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(input);

                let outcome = parse_command(input).and_then(|command| {
                    execute_command(&mut calc, command, &config, streams.stdout.as_mut())
                });
                match outcome {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Exit) => break,
                    Err(e) => streams.stderr.print(&format!("{e:#}")),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
