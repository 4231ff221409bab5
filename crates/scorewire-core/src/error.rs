//! Error types for scorewire-core.

use thiserror::Error;

/// Main error type for scorewire operations.
///
/// The scoreboard state machine itself is total over its inputs; errors only
/// arise at the collaborator surface (packet delivery, frame codec, logging
/// setup). The sender treats delivery errors as fire-and-forget: they are
/// logged and counted, never propagated to callers.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from underlying system calls.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Codec error during packet encoding/decoding.
    #[error("codec error: {message}")]
    Codec { message: String },

    /// Transport layer error reported by a session sink.
    #[error("transport error: {message}")]
    Transport { message: String },
}

/// Convenience result type for scorewire operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_codec() {
        let err = Error::Codec {
            message: "frame too short".into(),
        };
        assert_eq!(err.to_string(), "codec error: frame too short");
    }

    #[test]
    fn error_display_transport() {
        let err = Error::Transport {
            message: "session closed".into(),
        };
        assert_eq!(err.to_string(), "transport error: session closed");
    }

    #[test]
    fn io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
