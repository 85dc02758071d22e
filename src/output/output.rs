/// A line-oriented sink for REPL results and diagnostics.
pub trait Output {
    fn print(&mut self, text: &str);
}

#[derive(Debug, Default)]
pub struct StdOutput;

impl Output for StdOutput {
    fn print(&mut self, text: &str) {
        println!("{text}");
    }
}

#[derive(Debug, Default)]
pub struct StdErrOutput;

impl Output for StdErrOutput {
    fn print(&mut self, text: &str) {
        eprintln!("{text}");
    }
}

/// Collects printed lines in memory.
#[derive(Debug, Default)]
pub struct BufferOutput {
    pub lines: Vec<String>,
}

impl BufferOutput {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Output for BufferOutput {
    fn print(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}

/// Results go to `stdout`, errors to `stderr`.
pub struct OutputStreams {
    pub stdout: Box<dyn Output>,
    pub stderr: Box<dyn Output>,
}

impl Default for OutputStreams {
    fn default() -> Self {
        Self {
            stdout: Box::new(StdOutput),
            stderr: Box::new(StdErrOutput),
        }
    }
}
