use thiserror::Error;
use vigo_buffer::error::BufferError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Buffer operation failed")]
    Buffer(#[from] BufferError),
    #[error("File operation failed")]
    FileOperationFailed(#[from] std::io::Error),
    #[error("Terminal not initialized")]
    TerminalNotInitialized,
}
