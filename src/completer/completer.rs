use rustyline::{
    Helper, completion::{Completer, Pair}, highlight::Highlighter, hint::Hinter, validate::Validator
};

use crate::command_names;

/// Completes and hints command names in the first word of the line.
pub struct CalcCompleter {
    names: Vec<String>,
}

impl CalcCompleter {
    pub fn new() -> Self {
        Self {
            names: command_names(),
        }
    }

    /// Returns the start of the word under the cursor and the names matching
    /// it. Arguments are numbers, so nothing is offered past the first word.
    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<String>) {
        let head = &line[..pos];
        let word_start = head.rfind(char::is_whitespace).map(|i| i + 1).unwrap_or(0);
        if !head[..word_start].trim().is_empty() {
            return (word_start, Vec::new());
        }

        let word = head[word_start..].to_ascii_lowercase();
        let matches = self
            .names
            .iter()
            .filter(|name| name.starts_with(&word))
            .cloned()
            .collect();
        (word_start, matches)
    }

    fn hint_for(&self, line: &str, pos: usize) -> Option<String> {
        if pos < line.len() {
            return None;
        }

        let (word_start, matches) = self.candidates(line, pos);
        let word = &line[word_start..pos];
        if word.is_empty() {
            return None;
        }

        matches
            .into_iter()
            .find(|name| name.len() > word.len())
            .map(|name| name[word.len()..].to_string())
    }
}

impl Default for CalcCompleter {
    fn default() -> Self {
        Self::new()
    }
}

impl Completer for CalcCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (word_start, matches) = self.candidates(line, pos);
        let pairs = matches
            .into_iter()
            .map(|name| Pair {
                display: name.clone(),
                replacement: name,
            })
            .collect();

        Ok((word_start, pairs))
    }
}

impl Hinter for CalcCompleter {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<Self::Hint> {
        self.hint_for(line, pos)
    }
}

impl Highlighter for CalcCompleter {}
impl Validator for CalcCompleter {}
impl Helper for CalcCompleter {}
