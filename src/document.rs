//! Document representation - an ordered, editable sequence of lines
//!
//! Every mutation reports the [`LineChange`] it caused so the highlighter
//! can recompute exactly the lines that need it.

use std::path::Path;

use crate::error::Result;
use crate::line::Line;

/// Lines whose content changed, as indices into the document after the edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineChange {
    /// First changed line (inclusive)
    pub first: usize,
    /// Last changed line (inclusive)
    pub last: usize,
}

impl LineChange {
    /// A change to a single line
    pub fn single(line: usize) -> Self {
        Self {
            first: line,
            last: line,
        }
    }

    /// A change covering `first..=last`
    pub fn range(first: usize, last: usize) -> Self {
        Self { first, last }
    }
}

/// A document containing lines of text
#[derive(Debug, Clone)]
pub struct Document {
    /// Lines of text
    lines: Vec<Line>,
}

impl Document {
    /// Create a new document with a single empty line
    pub fn new() -> Self {
        Self {
            lines: vec![Line::new()], // Always have at least one line
        }
    }

    /// Create a document from text, splitting on `\n` (a trailing `\r` is dropped)
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: split_lines(text),
        }
    }

    /// Create a document from file contents
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_text(&content))
    }

    /// Get number of lines
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Get a line by index
    pub fn line(&self, idx: usize) -> Option<&Line> {
        self.lines.get(idx)
    }

    /// Text of a line, empty if out of range
    pub fn line_text(&self, idx: usize) -> &str {
        self.lines.get(idx).map(Line::text).unwrap_or("")
    }

    /// Get all lines
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Replace the whole content (reload)
    pub fn set_text(&mut self, text: &str) -> LineChange {
        self.lines = split_lines(text);
        LineChange::range(0, self.lines.len() - 1)
    }

    /// Replace the content of one line
    pub fn replace_line(&mut self, line_idx: usize, text: &str) -> Option<LineChange> {
        let line = self.lines.get_mut(line_idx)?;
        if text.contains('\n') {
            let len = line.len();
            line.delete_range(0, len);
            return self.insert_str(line_idx, 0, text);
        }
        line.set_text(text);
        Some(LineChange::single(line_idx))
    }

    /// Insert a character at position; `'\n'` splits the line
    pub fn insert_char(&mut self, line_idx: usize, byte_pos: usize, ch: char) -> Option<LineChange> {
        if ch == '\n' {
            return self.insert_newline(line_idx, byte_pos);
        }
        let line = self.lines.get_mut(line_idx)?;
        if !line.text().is_char_boundary(byte_pos) {
            return None;
        }
        line.insert_char(byte_pos, ch);
        Some(LineChange::single(line_idx))
    }

    /// Insert text at position; embedded newlines create new lines
    pub fn insert_str(&mut self, line_idx: usize, byte_pos: usize, s: &str) -> Option<LineChange> {
        let line = self.lines.get_mut(line_idx)?;
        if !line.text().is_char_boundary(byte_pos) {
            return None;
        }

        let mut pieces = s.split('\n');
        let tail = line.split_off(byte_pos);
        line.insert_str(byte_pos, pieces.next().unwrap_or(""));

        let mut idx = line_idx;
        for piece in pieces {
            idx += 1;
            self.lines.insert(idx, Line::from(piece));
        }
        self.lines[idx].append(tail);

        Some(LineChange::range(line_idx, idx))
    }

    /// Insert a newline, splitting the current line
    pub fn insert_newline(&mut self, line_idx: usize, byte_pos: usize) -> Option<LineChange> {
        let line = self.lines.get_mut(line_idx)?;
        if !line.text().is_char_boundary(byte_pos) {
            return None;
        }
        let new_line = line.split_off(byte_pos);
        self.lines.insert(line_idx + 1, new_line);
        Some(LineChange::range(line_idx, line_idx + 1))
    }

    /// Delete the character at position
    ///
    /// At the end of a line this deletes the line break instead.
    pub fn delete_char(&mut self, line_idx: usize, byte_pos: usize) -> Option<LineChange> {
        let line = self.lines.get_mut(line_idx)?;
        let text = line.text();
        if byte_pos < text.len() {
            if !text.is_char_boundary(byte_pos) {
                return None;
            }
            let ch = text[byte_pos..].chars().next()?;
            line.delete_range(byte_pos, byte_pos + ch.len_utf8());
            return Some(LineChange::single(line_idx));
        }
        if byte_pos == text.len() {
            return self.join_line(line_idx);
        }
        None
    }

    /// Delete a byte range within one line
    pub fn delete_range(&mut self, line_idx: usize, start: usize, end: usize) -> Option<LineChange> {
        let line = self.lines.get_mut(line_idx)?;
        let text = line.text();
        if start > end || end > text.len() || !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            return None;
        }
        line.delete_range(start, end);
        Some(LineChange::single(line_idx))
    }

    /// Join line with the next line (delete newline at end of line)
    pub fn join_line(&mut self, line_idx: usize) -> Option<LineChange> {
        if line_idx + 1 >= self.lines.len() {
            return None;
        }
        let next_line = self.lines.remove(line_idx + 1);
        self.lines[line_idx].append(next_line);
        Some(LineChange::single(line_idx))
    }

    /// Delete a line by index; the last remaining line is only cleared
    pub fn delete_line(&mut self, line_idx: usize) -> Option<LineChange> {
        if line_idx >= self.lines.len() {
            return None;
        }
        if self.lines.len() == 1 {
            self.lines[0] = Line::new();
            return Some(LineChange::single(0));
        }
        self.lines.remove(line_idx);
        Some(LineChange::single(line_idx.min(self.lines.len() - 1)))
    }

    /// The whole content, lines joined with `\n`
    pub fn to_text(&self) -> String {
        self.lines.iter().map(Line::text).collect::<Vec<_>>().join("\n")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

fn split_lines(text: &str) -> Vec<Line> {
    text.split('\n')
        .map(|l| Line::from(l.strip_suffix('\r').unwrap_or(l)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(doc: &Document) -> Vec<&str> {
        doc.lines().iter().map(Line::text).collect()
    }

    #[test]
    fn test_from_text() {
        let doc = Document::from_text("a\r\nb\n");
        assert_eq!(texts(&doc), ["a", "b", ""]);
        assert_eq!(Document::from_text("").line_count(), 1);
    }

    #[test]
    fn test_insert_char_reports_single_line() {
        let mut doc = Document::from_text("ab\ncd");
        assert_eq!(doc.insert_char(1, 1, 'x'), Some(LineChange::single(1)));
        assert_eq!(texts(&doc), ["ab", "cxd"]);
    }

    #[test]
    fn test_insert_newline_splits() {
        let mut doc = Document::from_text("hello world");
        assert_eq!(doc.insert_char(0, 5, '\n'), Some(LineChange::range(0, 1)));
        assert_eq!(texts(&doc), ["hello", " world"]);
    }

    #[test]
    fn test_insert_str_with_newlines() {
        let mut doc = Document::from_text("int x;\nint y;");
        let change = doc.insert_str(0, 3, " /* a\nb\nc */");
        assert_eq!(change, Some(LineChange::range(0, 2)));
        assert_eq!(texts(&doc), ["int /* a", "b", "c */ x;", "int y;"]);
    }

    #[test]
    fn test_delete_char_at_end_joins() {
        let mut doc = Document::from_text("ab\ncd");
        assert_eq!(doc.delete_char(0, 2), Some(LineChange::single(0)));
        assert_eq!(texts(&doc), ["abcd"]);
        assert_eq!(doc.delete_char(0, 4), None);
    }

    #[test]
    fn test_invalid_positions_are_rejected() {
        let mut doc = Document::from_text("é");
        assert_eq!(doc.insert_char(0, 1, 'x'), None);
        assert_eq!(doc.delete_range(0, 0, 1), None);
        assert_eq!(doc.insert_char(5, 0, 'x'), None);
    }

    #[test]
    fn test_delete_line() {
        let mut doc = Document::from_text("a\nb\nc");
        assert_eq!(doc.delete_line(2), Some(LineChange::single(1)));
        assert_eq!(doc.delete_line(0), Some(LineChange::single(0)));
        assert_eq!(texts(&doc), ["b"]);
        assert_eq!(doc.delete_line(0), Some(LineChange::single(0)));
        assert_eq!(texts(&doc), [""]);
    }

    #[test]
    fn test_replace_and_reload() {
        let mut doc = Document::from_text("a\nb");
        assert_eq!(doc.replace_line(1, "c"), Some(LineChange::single(1)));
        assert_eq!(doc.to_text(), "a\nc");
        assert_eq!(doc.set_text("x\ny\nz"), LineChange::range(0, 2));
        assert_eq!(doc.line_text(2), "z");
        assert_eq!(doc.line_text(9), "");
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("linelight-doc-{}.py", std::process::id()));
        std::fs::write(&path, "x = 1\ny = 2\n").unwrap();

        let doc = Document::from_file(&path).unwrap();
        assert_eq!(texts(&doc), ["x = 1", "y = 2", ""]);

        std::fs::remove_file(&path).unwrap();
        assert!(Document::from_file(&path).is_err());
    }
}
