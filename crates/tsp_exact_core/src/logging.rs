use env_logger::{Builder, Target};

use crate::{Error, LogFormat, Result, SolverOptions};

/// Configures the process-wide logger from CLI options. Logs always go to
/// stderr; stdout is reserved for the report.
pub fn init_logger(options: &SolverOptions) -> Result<()> {
    let mut builder = Builder::new();
    builder
        .filter_level(options.log_level.to_filter())
        .target(Target::Stderr);

    if options.log_timestamp {
        builder.format_timestamp_millis();
    } else {
        builder.format_timestamp(None);
    }

    builder.format_target(matches!(options.log_format, LogFormat::Pretty));

    builder
        .try_init()
        .map_err(|err| Error::invalid_input(format!("logger already initialized: {err}")))
}
