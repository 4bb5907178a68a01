//! Line index over stripped note content.
//!
//! Computed once per conversion and shared by image classification and
//! featured-line removal, so both steps agree on what "the first content
//! line" means.

/// Byte-offset line index.
pub(crate) struct LineIndex {
    /// Byte offset of the start of each line.
    starts: Vec<usize>,
    /// Index of the first line whose trimmed form is non-empty.
    first_content_line: Option<usize>,
}

impl LineIndex {
    /// Build the index for `content`.
    ///
    /// Lines are split on `\n`; stray `\r` is tolerated when deciding
    /// whether a line is blank.
    pub(crate) fn new(content: &str) -> Self {
        let mut starts = vec![0];
        for (i, byte) in content.bytes().enumerate() {
            if byte == b'\n' {
                starts.push(i + 1);
            }
        }

        let first_content_line = starts
            .iter()
            .enumerate()
            .find(|&(line, &start)| {
                let end = starts.get(line + 1).map_or(content.len(), |&next| next);
                !content[start..end].trim().is_empty()
            })
            .map(|(line, _)| line);

        Self {
            starts,
            first_content_line,
        }
    }

    /// 0-based line number containing the byte `offset`.
    pub(crate) fn line_of(&self, offset: usize) -> usize {
        match self.starts.binary_search(&offset) {
            Ok(line) => line,
            Err(insert) => insert - 1,
        }
    }

    /// Index of the first non-blank line, if any.
    pub(crate) fn first_content_line(&self) -> Option<usize> {
        self.first_content_line
    }

    /// Byte range of a line, including its trailing newline.
    ///
    /// Returns `None` for out-of-range line numbers.
    pub(crate) fn line_span(&self, line: usize, content_len: usize) -> Option<(usize, usize)> {
        let start = *self.starts.get(line)?;
        let end = self.starts.get(line + 1).map_or(content_len, |&next| next);
        Some((start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_of_offsets() {
        let index = LineIndex::new("abc\ndef\nghi");
        assert_eq!(index.line_of(0), 0);
        assert_eq!(index.line_of(3), 0);
        assert_eq!(index.line_of(4), 1);
        assert_eq!(index.line_of(8), 2);
        assert_eq!(index.line_of(10), 2);
    }

    #[test]
    fn test_first_content_line_skips_blanks() {
        let index = LineIndex::new("\n   \n\t\nhello\nworld");
        assert_eq!(index.first_content_line(), Some(3));
    }

    #[test]
    fn test_first_content_line_at_start() {
        let index = LineIndex::new("hello");
        assert_eq!(index.first_content_line(), Some(0));
    }

    #[test]
    fn test_first_content_line_all_blank() {
        let index = LineIndex::new("\n\n   \n");
        assert_eq!(index.first_content_line(), None);
    }

    #[test]
    fn test_first_content_line_empty_input() {
        let index = LineIndex::new("");
        assert_eq!(index.first_content_line(), None);
    }

    #[test]
    fn test_first_content_line_tolerates_carriage_return() {
        let index = LineIndex::new("\r\n\r\ntext\r\n");
        assert_eq!(index.first_content_line(), Some(2));
    }

    #[test]
    fn test_line_span_includes_newline() {
        let content = "abc\ndef\nghi";
        let index = LineIndex::new(content);
        assert_eq!(index.line_span(0, content.len()), Some((0, 4)));
        assert_eq!(index.line_span(1, content.len()), Some((4, 8)));
        assert_eq!(index.line_span(2, content.len()), Some((8, 11)));
        assert_eq!(index.line_span(3, content.len()), None);
    }
}
