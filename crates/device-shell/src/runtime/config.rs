use device_core::{ConsoleConfig, DiagFormat};
use std::str::FromStr;
use thiserror::Error;

pub const HELP: &str = r#"device-shell - Adapter, Bridge and Visitor demos over simulated hardware

USAGE:
    device-shell [OPTIONS]

OPTIONS:
    --demo <NAME>           Demo to run (visitor|adapter|bridge) [default: visitor]
    --seed <N>              Seed the measurement generator for reproducible readings
    --diag-format <FMT>     Diagnostic output format (text|json) [default: text]
    --json-logs             Output logs in JSON format
    -v, --verbose           Debug logging for device crates
    -h, --help              Print this help message

COMMANDS (visitor demo, read from stdin):
    start                   Start every device
    stop                    Stop every device
    diag                    Take a fresh reading from every device and print it
    exit                    Leave the loop

ENVIRONMENT VARIABLES:
    RUST_LOG                Set log filter (e.g., RUST_LOG=debug); logs go to stderr

EXAMPLES:
    # Interactive session with reproducible readings
    device-shell --seed 42

    # Scripted session with JSON diagnostics
    printf 'start\ndiag\nexit\n' | device-shell --diag-format json
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Demo {
    /// Interactive command loop driving the motor and sensor.
    #[default]
    Visitor,
    /// Display panels behind a common interface.
    Adapter,
    /// Motors driven over interchangeable buses.
    Bridge,
}

impl FromStr for Demo {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "visitor" => Ok(Self::Visitor),
            "adapter" => Ok(Self::Adapter),
            "bridge" => Ok(Self::Bridge),
            other => Err(ConfigError::InvalidValue {
                option: "--demo",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown option: {0}")]
    UnknownOption(String),
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {option}: {value}")]
    InvalidValue { option: &'static str, value: String },
}

#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    pub show_help: bool,
    pub demo: Demo,
    pub seed: Option<u64>,
    pub diag_format: DiagFormat,
    pub json_logs: bool,
    pub verbose: bool,
}

impl RuntimeConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let args: Vec<String> = std::env::args().collect();
        Self::from_args(&args)
    }

    pub fn from_args(args: &[String]) -> Result<Self, ConfigError> {
        let mut cfg = RuntimeConfig::default();
        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--demo" => {
                    cfg.demo = value_of(args, &mut i, "--demo")?.parse()?;
                }
                "--seed" => {
                    let raw = value_of(args, &mut i, "--seed")?;
                    cfg.seed = Some(raw.parse().map_err(|_| ConfigError::InvalidValue {
                        option: "--seed",
                        value: raw.to_string(),
                    })?);
                }
                "--diag-format" => {
                    let raw = value_of(args, &mut i, "--diag-format")?;
                    cfg.diag_format = raw.parse().map_err(|value| ConfigError::InvalidValue {
                        option: "--diag-format",
                        value,
                    })?;
                }
                "--json-logs" => {
                    cfg.json_logs = true;
                }
                "--verbose" | "-v" => {
                    cfg.verbose = true;
                }
                "--help" | "-h" => {
                    cfg.show_help = true;
                    break;
                }
                other => return Err(ConfigError::UnknownOption(other.to_string())),
            }
            i += 1;
        }
        Ok(cfg)
    }

    pub fn console_config(&self) -> ConsoleConfig {
        ConsoleConfig {
            seed: self.seed,
            diag_format: self.diag_format,
        }
    }

    pub fn print_help() {
        print!("{HELP}");
    }
}

fn value_of<'a>(
    args: &'a [String],
    i: &mut usize,
    option: &'static str,
) -> Result<&'a str, ConfigError> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or(ConfigError::MissingValue(option))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("device-shell")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn defaults_to_interactive_visitor() {
        let cfg = RuntimeConfig::from_args(&args(&[])).unwrap();
        assert_eq!(cfg.demo, Demo::Visitor);
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.diag_format, DiagFormat::Text);
        assert!(!cfg.show_help);
    }

    #[test]
    fn parses_all_options() {
        let cfg = RuntimeConfig::from_args(&args(&[
            "--demo",
            "bridge",
            "--seed",
            "9",
            "--diag-format",
            "json",
            "--json-logs",
            "-v",
        ]))
        .unwrap();
        assert_eq!(cfg.demo, Demo::Bridge);
        assert_eq!(cfg.seed, Some(9));
        assert_eq!(cfg.console_config().diag_format, DiagFormat::Json);
        assert!(cfg.json_logs && cfg.verbose);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            RuntimeConfig::from_args(&args(&["--seed"])).unwrap_err(),
            ConfigError::MissingValue("--seed")
        );
        assert_eq!(
            RuntimeConfig::from_args(&args(&["--seed", "x"])).unwrap_err(),
            ConfigError::InvalidValue {
                option: "--seed",
                value: "x".into()
            }
        );
        assert_eq!(
            RuntimeConfig::from_args(&args(&["--frobnicate"])).unwrap_err(),
            ConfigError::UnknownOption("--frobnicate".into())
        );
        assert!(RuntimeConfig::from_args(&args(&["--demo", "facade"])).is_err());
    }

    #[test]
    fn help_lists_every_option() {
        for option in ["--demo", "--seed", "--diag-format", "--json-logs", "--verbose", "--help"] {
            assert!(HELP.contains(option), "help text is missing {option}");
        }
    }

    #[test]
    fn help_stops_parsing() {
        let cfg = RuntimeConfig::from_args(&args(&["--help", "--frobnicate"])).unwrap();
        assert!(cfg.show_help);
    }
}
