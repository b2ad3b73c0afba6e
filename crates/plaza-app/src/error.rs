//! Host-side errors.

use thiserror::Error;

use plaza_core::config::ConfigError;

/// Errors surfaced by the host operations in `ipc`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("scene already running")]
    AlreadyRunning,

    #[error("scene not started")]
    NotRunning,

    #[error("scene loop has stopped receiving commands")]
    ChannelClosed,

    #[error("scene loop thread panicked")]
    LoopPanicked,

    #[error("shared state lock poisoned")]
    LockPoisoned,

    #[error("invalid scene config: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to spawn scene loop: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("malformed command: {0}")]
    BadCommand(#[from] serde_json::Error),
}
