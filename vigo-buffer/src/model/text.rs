use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::error::BufferError;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BufferLine {
    pub content: String,
}

impl BufferLine {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, index: usize) -> usize {
        self.content
            .char_indices()
            .nth(index)
            .map_or(self.content.len(), |(byte, _)| byte)
    }
}

/// Line oriented document model. Offsets address chars of the document where
/// every line break counts as a single char.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TextBuffer {
    pub lines: Vec<BufferLine>,
    pub modified: bool,
    pub path: Option<PathBuf>,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self {
            lines: vec![BufferLine::default()],
            modified: false,
            path: None,
        }
    }
}

impl TextBuffer {
    pub fn from_content(content: &str) -> Self {
        Self {
            lines: content.split('\n').map(BufferLine::new).collect(),
            ..Default::default()
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn name(&self) -> String {
        match &self.path {
            Some(path) => path.to_string_lossy().to_string(),
            None => String::new(),
        }
    }

    pub fn content(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    pub fn len(&self) -> usize {
        let chars: usize = self.lines.iter().map(BufferLine::len).sum();
        chars + self.lines.len() - 1
    }

    pub fn offset_to_position(&self, offset: usize) -> Result<(usize, usize), BufferError> {
        let mut remaining = offset;
        for (index, line) in self.lines.iter().enumerate() {
            let length = line.len();
            if remaining <= length {
                return Ok((remaining, index));
            }
            remaining -= length + 1;
        }

        Err(BufferError::OutOfRange {
            offset,
            length: self.len(),
        })
    }

    pub fn position_to_offset(&self, x: usize, y: usize) -> Result<usize, BufferError> {
        match self.lines.get(y) {
            Some(line) if x <= line.len() => {
                let start: usize = self.lines[..y].iter().map(|line| line.len() + 1).sum();
                Ok(start + x)
            }
            _ => Err(BufferError::PositionOutOfRange { x, y }),
        }
    }

    pub fn insert(&mut self, offset: usize, text: &str) -> Result<(), BufferError> {
        let (x, y) = self.offset_to_position(offset)?;
        if text.is_empty() {
            return Ok(());
        }

        let line = &mut self.lines[y];
        let index = line.byte_index(x);
        let suffix = line.content.split_off(index);

        let mut segments = text.split('\n');
        if let Some(first) = segments.next() {
            line.content.push_str(first);
        }

        let mut added: Vec<BufferLine> = segments.map(BufferLine::new).collect();
        let last = match added.last_mut() {
            Some(last) => last,
            None => &mut self.lines[y],
        };
        last.content.push_str(&suffix);

        self.lines.splice(y + 1..y + 1, added);
        self.modified = true;

        Ok(())
    }

    /// Removes the half open char range `[start, end)`. Removing a line break
    /// joins the surrounding lines.
    pub fn remove(&mut self, start: usize, end: usize) -> Result<(), BufferError> {
        if start > end {
            return Err(BufferError::InvalidRange { start, end });
        }

        let (start_x, start_y) = self.offset_to_position(start)?;
        let (end_x, end_y) = self.offset_to_position(end)?;
        if start == end {
            return Ok(());
        }

        let end_line = &self.lines[end_y];
        let tail = end_line.content[end_line.byte_index(end_x)..].to_string();

        let line = &mut self.lines[start_y];
        let index = line.byte_index(start_x);
        line.content.truncate(index);
        line.content.push_str(&tail);

        self.lines.drain(start_y + 1..=end_y);
        self.modified = true;

        Ok(())
    }

    pub fn save(&mut self, path: &Path) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        for line in &self.lines {
            writeln!(writer, "{}", line.content)?;
        }
        writer.flush()?;

        tracing::debug!("saved {} lines to {:?}", self.lines.len(), path);

        self.modified = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::error::BufferError;

    use super::TextBuffer;

    fn lines(buffer: &TextBuffer) -> Vec<&str> {
        buffer.lines.iter().map(|l| l.content.as_str()).collect()
    }

    #[test]
    fn from_content_keeps_empty_document_non_empty() {
        let buffer = TextBuffer::from_content("");
        assert_eq!(vec![""], lines(&buffer));
        assert_eq!(0, buffer.len());
        assert!(buffer.is_empty());
    }

    #[test]
    fn len_counts_line_breaks() {
        let buffer = TextBuffer::from_content("abc\nde");
        assert_eq!(6, buffer.len());
    }

    #[test]
    fn offset_to_position_maps_line_break_to_line_end() {
        let buffer = TextBuffer::from_content("abc\nde");
        assert_eq!(Ok((0, 0)), buffer.offset_to_position(0));
        assert_eq!(Ok((3, 0)), buffer.offset_to_position(3));
        assert_eq!(Ok((0, 1)), buffer.offset_to_position(4));
        assert_eq!(Ok((2, 1)), buffer.offset_to_position(6));
        assert_eq!(
            Err(BufferError::OutOfRange {
                offset: 7,
                length: 6
            }),
            buffer.offset_to_position(7)
        );
    }

    #[test]
    fn offset_position_round_trip() {
        let buffer = TextBuffer::from_content("first\n\nthird line\nä\tö\n");
        for offset in 0..=buffer.len() {
            let (x, y) = buffer.offset_to_position(offset).unwrap();
            assert_eq!(Ok(offset), buffer.position_to_offset(x, y));
        }
    }

    #[test]
    fn position_to_offset_rejects_columns_past_line_end() {
        let buffer = TextBuffer::from_content("abc\nde");
        assert_eq!(Ok(6), buffer.position_to_offset(2, 1));
        assert_eq!(
            Err(BufferError::PositionOutOfRange { x: 3, y: 1 }),
            buffer.position_to_offset(3, 1)
        );
        assert_eq!(
            Err(BufferError::PositionOutOfRange { x: 0, y: 2 }),
            buffer.position_to_offset(0, 2)
        );
    }

    #[test]
    fn insert_without_line_break_splices_into_line() {
        let mut buffer = TextBuffer::from_content("held\nx");
        buffer.insert(3, "lo wor").unwrap();
        assert_eq!(vec!["hello word", "x"], lines(&buffer));
        assert!(buffer.modified);
    }

    #[test]
    fn insert_line_break_at_line_end_appends_empty_line() {
        let mut buffer = TextBuffer::from_content("hello");
        buffer.insert(5, "\n").unwrap();
        assert_eq!(vec!["hello", ""], lines(&buffer));
    }

    #[test]
    fn insert_multiple_lines_splits_line() {
        let mut buffer = TextBuffer::from_content("ab\ncd");
        buffer.insert(1, "1\n2\n3").unwrap();
        assert_eq!(vec!["a1", "2", "3b", "cd"], lines(&buffer));
    }

    #[test]
    fn insert_handles_multibyte_chars() {
        let mut buffer = TextBuffer::from_content("äöü");
        buffer.insert(2, "ß").unwrap();
        assert_eq!(vec!["äößü"], lines(&buffer));
    }

    #[test]
    fn insert_out_of_range_fails() {
        let mut buffer = TextBuffer::from_content("abc");
        assert_eq!(
            Err(BufferError::OutOfRange {
                offset: 4,
                length: 3
            }),
            buffer.insert(4, "x")
        );
        assert!(!buffer.modified);
    }

    #[test]
    fn remove_within_line() {
        let mut buffer = TextBuffer::from_content("hello\nworld");
        buffer.remove(1, 3).unwrap();
        assert_eq!(vec!["hlo", "world"], lines(&buffer));
    }

    #[test]
    fn remove_line_break_joins_lines() {
        let mut buffer = TextBuffer::from_content("hello\nworld");
        buffer.remove(5, 6).unwrap();
        assert_eq!(vec!["helloworld"], lines(&buffer));
    }

    #[test]
    fn remove_across_multiple_lines() {
        let mut buffer = TextBuffer::from_content("abc\ndef\nghi\njkl");
        buffer.remove(2, 9).unwrap();
        assert_eq!(vec!["abhi", "jkl"], lines(&buffer));
    }

    #[test]
    fn remove_everything_leaves_one_empty_line() {
        let mut buffer = TextBuffer::from_content("abc\ndef");
        let length = buffer.len();
        buffer.remove(0, length).unwrap();
        assert_eq!(vec![""], lines(&buffer));
    }

    #[test]
    fn remove_rejects_inverted_range() {
        let mut buffer = TextBuffer::from_content("abc");
        assert_eq!(
            Err(BufferError::InvalidRange { start: 2, end: 1 }),
            buffer.remove(2, 1)
        );
    }

    #[test]
    fn remove_after_insert_restores_lines() {
        let original = TextBuffer::from_content("one\ntwo\nthree");
        for text in ["x", "\n", "a\nb", "\n\nzz\n"] {
            for offset in 0..=original.len() {
                let mut buffer = original.clone();
                buffer.insert(offset, text).unwrap();
                buffer
                    .remove(offset, offset + text.chars().count())
                    .unwrap();
                assert_eq!(original.lines, buffer.lines, "{:?} at {}", text, offset);
            }
        }
    }

    #[test]
    fn save_writes_lines_with_trailing_line_break() {
        let path = std::env::temp_dir().join(format!("vigo-buffer-save-{}", std::process::id()));

        let mut buffer = TextBuffer::from_content("abc\n\nde");
        buffer.modified = true;
        buffer.save(&path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!("abc\n\nde\n", written);
        assert!(!buffer.modified);
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let path = std::env::temp_dir()
            .join("vigo-missing-directory")
            .join("file.txt");

        let mut buffer = TextBuffer::from_content("abc");
        buffer.modified = true;

        assert!(buffer.save(&path).is_err());
        assert!(buffer.modified);
    }
}
