//! Command-line argument parsing.
//!
//! This module handles parsing command-line arguments and determining
//! which mode to run in.

use crate::startup::Config;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage help
    Help,
    /// Run the stats endpoint server
    Serve,
    /// Run the TUI dashboard (default)
    Monitor,
}

/// Parse command-line arguments into a command and a config.
///
/// Flags with values (`--endpoint`, `--interval-ms`, `--listen`) override
/// the corresponding fields of `base`, which normally comes from
/// [`Config::from_env`]. Unknown flags are ignored.
///
/// # Examples
///
/// ```
/// use pidash::cli::{parse_args, CliCommand};
/// use pidash::startup::Config;
///
/// let args = vec!["pidash".to_string(), "--version".to_string()];
/// let (cmd, _config) = parse_args(args.into_iter(), Config::default());
/// assert_eq!(cmd, CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I, base: Config) -> (CliCommand, Config)
where
    I: Iterator<Item = String>,
{
    let mut command = CliCommand::Monitor;
    let mut config = base;

    let mut args = args.skip(1); // Skip the program name
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return (CliCommand::Version, config),
            "--help" | "-h" => return (CliCommand::Help, config),
            "--serve" => command = CliCommand::Serve,
            "--endpoint" => {
                if let Some(value) = args.next() {
                    config = config.with_endpoint(value);
                }
            }
            "--interval-ms" => {
                if let Some(value) = args.next() {
                    if let Ok(ms) = value.parse::<u64>() {
                        config = config.with_interval_ms(ms);
                    }
                }
            }
            "--listen" => {
                if let Some(value) = args.next() {
                    config = config.with_listen_addr(value);
                }
            }
            _ => {}
        }
    }

    (command, config)
}

/// Usage text for `--help`.
pub fn usage() -> String {
    [
        "pidash - terminal dashboard for home-server system stats",
        "",
        "USAGE:",
        "    pidash [OPTIONS]",
        "",
        "OPTIONS:",
        "    --serve              Run the stats endpoint instead of the dashboard",
        "    --endpoint <url>     Stats endpoint base URL (default http://127.0.0.1:5000)",
        "    --interval-ms <n>    Poll interval in milliseconds (default 5000)",
        "    --listen <addr>      Serve-mode listen address (default 0.0.0.0:5000)",
        "    -V, --version        Show version",
        "    -h, --help           Show this help",
    ]
    .join("\n")
}
