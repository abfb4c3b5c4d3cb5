//! CLI runtime configuration.
//!
//! Resolved once at startup from command line flags, falling back to environment variables
//! (optionally loaded from `.env`). Nothing downstream reads the environment.

use anyhow::{anyhow, Result};
use clap::ValueEnum;

/// Environment variable selecting the output format.
pub const FORMAT_ENV: &str = "VSPHERE_NODE_ID_FORMAT";

/// Environment variable enabling strict UUID validation.
pub const STRICT_ENV: &str = "VSPHERE_NODE_ID_STRICT";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "VSPHERE_NODE_ID_LOG";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Print the bare result
    #[default]
    Text,
    /// Print a JSON object with the command, input and result
    Json,
}

/// Configuration resolved at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub format: OutputFormat,
    pub strict: bool,
}

impl CliConfig {
    /// Resolve configuration from flags and the process environment.
    pub fn resolve(format: Option<OutputFormat>, strict: bool) -> Result<Self> {
        Self::resolve_with(format, strict, |key| std::env::var(key).ok())
    }

    /// Resolve configuration from flags and an arbitrary variable lookup.
    ///
    /// Flags win over variables. Unrecognised variable values are errors rather than being
    /// silently ignored.
    pub fn resolve_with<F>(format: Option<OutputFormat>, strict: bool, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = match format {
            Some(format) => format,
            None => match lookup(FORMAT_ENV) {
                Some(value) => OutputFormat::from_str(value.trim(), true)
                    .map_err(|_| anyhow!("{FORMAT_ENV} must be 'text' or 'json', got '{value}'"))?,
                None => OutputFormat::default(),
            },
        };

        let strict = strict
            || match lookup(STRICT_ENV) {
                Some(value) => parse_bool(&value)
                    .ok_or_else(|| anyhow!("{STRICT_ENV} must be a boolean, got '{value}'"))?,
                None => false,
            };

        Ok(Self { format, strict })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_flags_or_env() {
        let config = CliConfig::resolve_with(None, false, lookup_from(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_env_values_are_used() {
        let config = CliConfig::resolve_with(
            None,
            false,
            lookup_from(&[(FORMAT_ENV, "JSON"), (STRICT_ENV, "1")]),
        )
        .unwrap();

        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.strict);
    }

    #[test]
    fn test_flags_override_env() {
        let config = CliConfig::resolve_with(
            Some(OutputFormat::Text),
            true,
            lookup_from(&[(FORMAT_ENV, "json"), (STRICT_ENV, "false")]),
        )
        .unwrap();

        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.strict);
    }

    #[test]
    fn test_invalid_env_values_are_errors() {
        let err = CliConfig::resolve_with(None, false, lookup_from(&[(FORMAT_ENV, "yaml")]))
            .unwrap_err();
        assert!(err.to_string().contains(FORMAT_ENV));

        let err = CliConfig::resolve_with(None, false, lookup_from(&[(STRICT_ENV, "maybe")]))
            .unwrap_err();
        assert!(err.to_string().contains(STRICT_ENV));
    }
}
