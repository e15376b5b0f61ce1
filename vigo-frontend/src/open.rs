use std::{
    fs,
    io::{self, IsTerminal, Read},
    path::Path,
};

use vigo_buffer::model::TextBuffer;

use crate::error::AppError;

/// Resolves the startup buffer. Without a path, piped standard input is read
/// instead of starting with an empty buffer.
pub fn load(path: Option<&Path>) -> Result<TextBuffer, AppError> {
    match path {
        Some(path) => from_file(path),
        None if !io::stdin().is_terminal() => {
            let mut bytes = Vec::new();
            io::stdin().read_to_end(&mut bytes)?;

            tracing::debug!("read {} bytes from stdin", bytes.len());

            Ok(from_bytes(&bytes))
        }
        None => Ok(TextBuffer::default()),
    }
}

pub fn from_file(path: &Path) -> Result<TextBuffer, AppError> {
    match fs::read(path) {
        Ok(bytes) => {
            tracing::debug!("loaded {} bytes from {:?}", bytes.len(), path);
            Ok(from_bytes(&bytes).with_path(path))
        }
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("opening new file {:?}", path);
            Ok(TextBuffer::default().with_path(path))
        }
        Err(error) => Err(AppError::from(error)),
    }
}

pub fn from_bytes(bytes: &[u8]) -> TextBuffer {
    let content = String::from_utf8_lossy(bytes).replace("\r\n", "\n");
    let content = content.strip_suffix('\n').unwrap_or(&content);

    TextBuffer::from_content(content)
}
