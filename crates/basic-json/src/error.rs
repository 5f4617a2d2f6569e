use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A constructor or builder was handed an argument it cannot represent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// `wrap` met a native kind with no mapping onto the value model.
    #[error("cannot encode type: {type_name}")]
    UnsupportedType { type_name: String },

    #[error("output buffer overflow: {needed} bytes needed, {remaining} remaining")]
    Overflow { needed: usize, remaining: usize },

    #[error("{0}")]
    Message(String),
}

impl Error {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }

    pub(crate) fn unsupported(type_name: impl Into<String>) -> Self {
        let type_name = type_name.into();
        #[cfg(feature = "tracing")]
        tracing::debug!(type_name = %type_name, "wrap rejected unsupported type");
        Error::UnsupportedType { type_name }
    }
}

#[cfg(feature = "serde")]
impl serde::ser::Error for Error {
    fn custom<T: core::fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = core::result::Result<T, Error>;
