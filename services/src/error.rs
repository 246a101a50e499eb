use snafu::Snafu;
use std::path::PathBuf;
use strum::IntoStaticStr;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu, IntoStaticStr)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("{source}"))]
    DataType {
        source: geoaxis_datatypes::error::Error,
    },

    #[snafu(display("Unable to read `{}`: {}", path.display(), source))]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[snafu(display("Invalid axis input: {source}"))]
    SerdeJson {
        source: serde_json::Error,
    },

    #[snafu(display("Config error: {source}"))]
    Config {
        source: config::ConfigError,
    },

    ConfigLockFailed,

    MissingWorkingDirectory {
        source: std::io::Error,
    },

    MissingSettingsDirectory,

    #[snafu(display("Invalid log spec: {source}"))]
    InvalidLogSpec {
        source: tracing_subscriber::filter::ParseError,
    },

    #[snafu(display("Unable to install the log subscriber: {source}"))]
    LogSubscriber {
        source: tracing_subscriber::util::TryInitError,
    },
}

impl From<geoaxis_datatypes::error::Error> for Error {
    fn from(source: geoaxis_datatypes::error::Error) -> Self {
        Error::DataType { source }
    }
}
