use crate::DEFAULT_PRECISION;
use anyhow::{Context, Result};
use std::env;

pub const PRECISION_VAR: &str = "CALC_PRECISION";
pub const PROMPT_VAR: &str = "CALC_PROMPT";
pub const DEFAULT_PROMPT: &str = "calc> ";

#[derive(Debug, Clone, PartialEq)]
pub struct ReplConfig {
    pub precision: u16,
    pub prompt: String,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl ReplConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(PRECISION_VAR) {
            config.precision = raw
                .trim()
                .parse()
                .with_context(|| {
                    format!("{PRECISION_VAR}: invalid precision '{raw}' (0..={})", u16::MAX)
                })?;
        }
        if let Some(prompt) = lookup(PROMPT_VAR) {
            config.prompt = prompt;
        }

        Ok(config)
    }
}
