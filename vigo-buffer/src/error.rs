use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum BufferError {
    #[error("Range start {start} is behind range end {end}")]
    InvalidRange { start: usize, end: usize },
    #[error("Offset {offset} exceeds buffer length {length}")]
    OutOfRange { offset: usize, length: usize },
    #[error("Position ({x}, {y}) is outside of the buffer")]
    PositionOutOfRange { x: usize, y: usize },
}
