//! Driver defaults and environment overrides.
//!
//! Precedence is command line, then environment, then the built-in default.
//! Environment values that fail to parse (or are zero where zero makes no
//! sense) are ignored rather than treated as errors.

use std::env;
use std::time::Duration;

/// Budget the search starts from: a completely filled 9x9 grid
pub const DEFAULT_INITIAL_GIVENS: i64 = 81;
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_GENERATOR: &str = "sudoku-generator";

pub const GENERATOR_ENV: &str = "MINIMIZER_GENERATOR";
pub const TIMEOUT_ENV: &str = "MINIMIZER_TIMEOUT_SECS";

/// How to reach the generator and how long it may take per attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverSettings {
    pub generator: String,
    pub timeout_secs: u64,
}

impl DriverSettings {
    pub fn from_env(cli_generator: Option<String>, cli_timeout_secs: Option<u64>) -> Self {
        Self::resolve(cli_generator, cli_timeout_secs, |name| env::var(name).ok())
    }

    pub fn resolve<F>(
        cli_generator: Option<String>,
        cli_timeout_secs: Option<u64>,
        lookup: F,
    ) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let generator = cli_generator
            .or_else(|| read_env_string(&lookup, GENERATOR_ENV))
            .unwrap_or_else(|| DEFAULT_GENERATOR.to_string());
        let timeout_secs = cli_timeout_secs
            .filter(|secs| *secs > 0)
            .unwrap_or_else(|| read_env_u64(&lookup, TIMEOUT_ENV, DEFAULT_TIMEOUT_SECS));

        Self {
            generator,
            timeout_secs,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn read_env_string<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn read_env_u64<F>(lookup: &F, name: &str, default: u64) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = DriverSettings::resolve(None, None, env_of(&[]));
        assert_eq!(settings.generator, DEFAULT_GENERATOR);
        assert_eq!(settings.timeout_secs, 5);
        assert_eq!(settings.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let env = env_of(&[(GENERATOR_ENV, "/opt/gen"), (TIMEOUT_ENV, "30")]);
        let settings = DriverSettings::resolve(None, None, env);
        assert_eq!(settings.generator, "/opt/gen");
        assert_eq!(settings.timeout_secs, 30);
    }

    #[test]
    fn test_command_line_wins_over_environment() {
        let env = env_of(&[(GENERATOR_ENV, "/opt/gen"), (TIMEOUT_ENV, "30")]);
        let settings = DriverSettings::resolve(Some("./gen".to_string()), Some(9), env);
        assert_eq!(settings.generator, "./gen");
        assert_eq!(settings.timeout_secs, 9);
    }

    #[test]
    fn test_bad_environment_values_fall_back() {
        let env = env_of(&[(GENERATOR_ENV, "   "), (TIMEOUT_ENV, "0")]);
        let settings = DriverSettings::resolve(None, None, env);
        assert_eq!(settings.generator, DEFAULT_GENERATOR);
        assert_eq!(settings.timeout_secs, DEFAULT_TIMEOUT_SECS);

        let env = env_of(&[(TIMEOUT_ENV, "soon")]);
        assert_eq!(
            DriverSettings::resolve(None, None, env).timeout_secs,
            DEFAULT_TIMEOUT_SECS
        );
    }
}
