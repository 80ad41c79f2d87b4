use derive_more::Display;
use refgraph_config::ConfigError;
use refgraph_schema::catalog::CatalogError;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Debug, Deserialize, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }
}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        let kind = match &err {
            CatalogError::UnknownEntityType(_) => ErrorKind::NotFound,
            CatalogError::Load { .. } => ErrorKind::Io,
            CatalogError::Parse { .. } => ErrorKind::Parse,
            CatalogError::UnsupportedFormat(_) => ErrorKind::Unsupported,
            CatalogError::Validation(_) => ErrorKind::Invalid,
        };

        Self::new(kind, ErrorOrigin::Catalog, err.to_string())
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        let kind = match &err {
            ConfigError::Io { .. } => ErrorKind::Io,
            ConfigError::Parse(_) => ErrorKind::Parse,
            ConfigError::Invalid(_) => ErrorKind::Invalid,
        };

        Self::new(kind, ErrorOrigin::Config, err.to_string())
    }
}

impl From<refgraph_core::Error> for Error {
    fn from(err: refgraph_core::Error) -> Self {
        match err {
            refgraph_core::Error::Catalog(err) => {
                let mut out = Self::from(err);
                out.origin = ErrorOrigin::Generator;
                out
            }
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        let kind = if err.is_io() {
            ErrorKind::Io
        } else {
            ErrorKind::Parse
        };

        Self::new(kind, ErrorOrigin::Serialize, err.to_string())
    }
}

///
/// ErrorKind
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    /// A referenced entity type is not registered.
    NotFound,

    /// Reading an input file failed.
    Io,

    /// An input document is malformed.
    Parse,

    /// An input document parsed but failed validation.
    Invalid,

    Unsupported,
}

///
/// ErrorOrigin
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Catalog,
    Config,
    Generator,
    Input,
    Serialize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use refgraph_schema::error::ErrorTree;

    #[test]
    fn generator_errors_keep_kind_and_move_origin() {
        let err: Error =
            refgraph_core::Error::Catalog(CatalogError::UnknownEntityType("tag".into())).into();

        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.origin, ErrorOrigin::Generator);
        assert_eq!(err.to_string(), "entity type 'tag' is not registered");
    }

    #[test]
    fn validation_errors_are_invalid() {
        let err: Error = CatalogError::Validation(ErrorTree::from("bad")).into();

        assert_eq!(err.kind, ErrorKind::Invalid);
        assert_eq!(err.origin, ErrorOrigin::Catalog);
        assert_eq!(err.to_string(), "catalog validation failed: bad");
    }

    #[test]
    fn json_write_failures_are_io() {
        struct Closed;

        impl std::io::Write for Closed {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let err: Error = serde_json::to_writer(Closed, &["tag"]).unwrap_err().into();
        assert_eq!(
            (err.kind, err.origin),
            (ErrorKind::Io, ErrorOrigin::Serialize)
        );

        let err: Error = serde_json::from_str::<Vec<String>>("[1]").unwrap_err().into();
        assert_eq!(err.kind, ErrorKind::Parse);
    }
}
