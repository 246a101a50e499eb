use crate::config::{self, get_config_element};
use crate::error::{self, Result};
use snafu::ResultExt;
use tracing::Subscriber;
use tracing_subscriber::{EnvFilter, Layer, layer::Filter, prelude::*, registry::LookupSpan};

/// Installs the global tracing subscriber according to the `logging` settings.
///
/// Logs go to `STDERR`, so that `STDOUT` only carries command output.
pub fn init_logging() -> Result<()> {
    let logging_config: config::Logging = get_config_element()?;

    // create a filter for the log message level in console output
    let console_filter =
        EnvFilter::try_new(&logging_config.log_spec).context(error::InvalidLogSpecSnafu)?;

    tracing_subscriber::registry()
        .with(console_layer_with_filter(console_filter))
        .try_init()
        .context(error::LogSubscriberSnafu)
}

fn console_layer_with_filter<S, F: Filter<S> + 'static>(filter: F) -> impl Layer<S>
where
    S: Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    tracing_subscriber::fmt::layer()
        .with_file(false)
        .with_target(true)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .with_filter(filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::set_config;
    use serial_test::serial;

    #[test]
    #[serial]
    fn it_rejects_invalid_log_specs() {
        set_config("logging.log_spec", "geoaxis=notalevel").unwrap();

        let result = init_logging();

        set_config("logging.log_spec", "warn").unwrap();

        assert!(matches!(result, Err(error::Error::InvalidLogSpec { .. })));
    }
}
