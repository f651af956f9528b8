use std::net::SocketAddr;

use thiserror::Error;

/// Invalid startup configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid bind address '{value}': expected host:port")]
    InvalidBindAddress { value: String },

    #[error("invalid provider url '{value}': {reason}")]
    InvalidProviderUrl { value: String, reason: String },
}

/// Server-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ServerError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            Self::Bind { .. } => 3,
            Self::Io(_) => 10,
        }
    }
}
