use snafu::prelude::*;

/// Errors surfaced by navigation operations.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Invalid argument `{name}`: {reason}"))]
    InvalidArgument {
        name: &'static str,
        reason: &'static str,
    },

    #[snafu(display("Failed to create route `{kind}`: {source}"))]
    RouteCreationFailed {
        kind: &'static str,
        source: FactoryError,
    },
}

impl Error {
    /// The factory failure behind a `RouteCreationFailed`, exactly as the factory produced it.
    pub fn factory_error(&self) -> Option<&FactoryError> {
        match self {
            Error::RouteCreationFailed { source, .. } => Some(source),
            Error::InvalidArgument { .. } => None,
        }
    }
}

/// Errors produced by a route factory.
///
/// The context selectors are public so hand-written factories can build
/// these with `snafu` the same way the registry does.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum FactoryError {
    #[snafu(display("factory returned no route"))]
    NoRoute,

    #[snafu(display("missing parameter #{index} (got {len})"))]
    MissingParameter { index: usize, len: usize },

    #[snafu(display("parameter #{index} is not a `{expected}`"))]
    ParameterType {
        index: usize,
        expected: &'static str,
    },

    #[snafu(display("{message}"))]
    Build { message: String },

    #[snafu(display("{source}"))]
    Custom {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
