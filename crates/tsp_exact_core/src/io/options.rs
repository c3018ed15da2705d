use std::{env, fmt};

use log::LevelFilter;

use super::{parse_bool, require_value, split_arg};
use crate::{Error, Result};

/// Runtime switches for a solver run.
#[derive(Clone, Debug)]
pub struct SolverOptions {
    /// Use the brute-force search instead of Held-Karp.
    pub brute_force: bool,
    /// Structured logging level.
    pub log_level: LogLevel,
    /// Logging output format.
    pub log_format: LogFormat,
    /// Include millisecond timestamps in log lines.
    pub log_timestamp: bool,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            brute_force: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Compact,
            log_timestamp: false,
        }
    }
}

impl SolverOptions {
    pub fn from_args() -> Result<Self> {
        Self::parse_cli_args(env::args().skip(1))
    }

    fn parse_cli_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        let mut args = args
            .into_iter()
            .map(|arg| arg.as_ref().to_owned())
            .peekable();

        while let Some(arg) = args.next() {
            if arg == "--help" || arg == "-h" {
                return Err(Error::invalid_input(Self::usage()));
            }
            let Some(raw_name) = arg.strip_prefix("--") else {
                return Err(Error::invalid_input(format!(
                    "Unexpected argument: {arg}\n\n{}",
                    Self::usage()
                )));
            };

            let (name, value) = split_arg(raw_name, &mut args);
            match name.as_str() {
                "brute-force" => {
                    options.brute_force = match value {
                        Some(value) => parse_bool(&name, &value)?,
                        None => true,
                    };
                }
                "log-level" => {
                    options.log_level = LogLevel::parse(&require_value(&name, value)?)?;
                }
                "log-format" => {
                    options.log_format = LogFormat::parse(&require_value(&name, value)?)?;
                }
                "log-timestamp" => {
                    options.log_timestamp = match value {
                        Some(value) => parse_bool(&name, &value)?,
                        None => true,
                    };
                }
                // Handled by SolverInput::from_args; accepted here to allow
                // both layers to scan the same argument list.
                "file" => {
                    require_value(&name, value)?;
                }
                _ => {
                    return Err(Error::invalid_input(format!(
                        "Unknown option: --{name}\n\n{}",
                        Self::usage()
                    )));
                }
            }
        }

        Ok(options)
    }

    pub fn usage() -> &'static str {
        concat!(
            "Usage:\n",
            "  tsp-exact [options]\n",
            "\n",
            "Options:\n",
            "  --file <path>             Site CSV file (default: msg_standorte_deutschland.csv)\n",
            "  --brute-force[=<bool>]    Use brute force instead of Held-Karp\n",
            "  --log-level <level>       error|warn|info|debug|trace|off (default: info)\n",
            "  --log-format <format>     compact|pretty (default: compact)\n",
            "  --log-timestamp[=<bool>]  Include timestamps in log lines\n",
            "  --help\n",
            "\n",
            "Examples:\n",
            "  tsp-exact --file sites.csv\n",
            "  tsp-exact --brute-force --log-level debug\n",
        )
    }
}

impl fmt::Display for SolverOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "brute_force={} log_level={:?} log_format={:?} log_timestamp={}",
            self.brute_force, self.log_level, self.log_format, self.log_timestamp
        )
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    pub fn to_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
            Self::Off => LevelFilter::Off,
        }
    }

    fn parse(raw: &str) -> Result<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            "off" => Ok(Self::Off),
            _ => Err(Error::invalid_input(format!(
                "Invalid value for --log-level: {raw}"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogFormat {
    Compact,
    Pretty,
}

impl LogFormat {
    fn parse(raw: &str) -> Result<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            _ => Err(Error::invalid_input(format!(
                "Invalid value for --log-format: {raw}"
            ))),
        }
    }
}
