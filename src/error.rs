//! Error type shared by the dictionary core and the word-frequency pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong when building, growing or querying a dictionary.
#[derive(Debug, Error)]
pub enum Error {
    /// An absent key or value was handed to an insertion.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A table of `requested` slots would exceed the hard ceiling.
    #[error("table size {requested} exceeds maximum capacity {max}")]
    CapacityExceeded { requested: usize, max: usize },

    /// The operation is part of the dictionary contract but is not offered.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    /// A key iterator was advanced past its last key.
    #[error("key iterator exhausted")]
    ExhaustedIterator,

    /// The corpus could not be read.
    #[error("failed to read corpus {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_limit() {
        let err = Error::CapacityExceeded {
            requested: 10007,
            max: 10000,
        };
        assert_eq!(
            err.to_string(),
            "table size 10007 exceeds maximum capacity 10000"
        );
    }

    #[test]
    fn io_error_keeps_source() {
        use std::error::Error as _;

        let err = Error::Io {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().starts_with("failed to read corpus missing.txt"));
        assert!(err.source().is_some());
    }
}
