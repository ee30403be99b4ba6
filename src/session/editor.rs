/// Minimal multi-line text editor backing the writing area. Lines are stored
/// separately; the cursor column is a char index so multi-byte input works.
pub struct TextEditor {
    lines: Vec<String>,
    row: usize,
    col: usize,
}

impl TextEditor {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            row: 0,
            col: 0,
        }
    }

    pub fn from_content(content: &str) -> Self {
        let lines: Vec<String> = if content.is_empty() {
            vec![String::new()]
        } else {
            content.split('\n').map(|l| l.to_string()).collect()
        };
        let row = lines.len() - 1;
        let col = lines[row].chars().count();
        Self { lines, row, col }
    }

    pub fn content(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    fn char_to_byte(line: &str, char_idx: usize) -> usize {
        line.char_indices()
            .nth(char_idx)
            .map(|(b, _)| b)
            .unwrap_or(line.len())
    }

    fn line_len(&self) -> usize {
        self.lines[self.row].chars().count()
    }

    pub fn insert_char(&mut self, ch: char) {
        let byte = Self::char_to_byte(&self.lines[self.row], self.col);
        self.lines[self.row].insert(byte, ch);
        self.col += 1;
    }

    pub fn insert_newline(&mut self) {
        let byte = Self::char_to_byte(&self.lines[self.row], self.col);
        let rest = self.lines[self.row].split_off(byte);
        self.lines.insert(self.row + 1, rest);
        self.row += 1;
        self.col = 0;
    }

    /// Backspace joins lines at column zero, matching textarea behavior.
    pub fn backspace(&mut self) {
        if self.col > 0 {
            let byte = Self::char_to_byte(&self.lines[self.row], self.col - 1);
            let ch = self.lines[self.row][byte..].chars().next().unwrap_or(' ');
            self.lines[self.row].replace_range(byte..byte + ch.len_utf8(), "");
            self.col -= 1;
        } else if self.row > 0 {
            let removed = self.lines.remove(self.row);
            self.row -= 1;
            self.col = self.lines[self.row].chars().count();
            self.lines[self.row].push_str(&removed);
        }
    }

    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = self.line_len();
        }
    }

    pub fn move_right(&mut self) {
        if self.col < self.line_len() {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(self.line_len());
        }
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = self.col.min(self.line_len());
        }
    }

    pub fn move_home(&mut self) {
        self.col = 0;
    }

    pub fn move_end(&mut self) {
        self.col = self.line_len();
    }

    pub fn word_count(&self) -> usize {
        word_count(&self.content())
    }
}

impl Default for TextEditor {
    fn default() -> Self {
        Self::new()
    }
}

/// Whitespace-delimited non-empty token count. Derived on demand, never
/// stored.
pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_basic() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("  a  b "), 2);
        assert_eq!(word_count("one"), 1);
        assert_eq!(word_count("line one\nline two\n"), 4);
        assert_eq!(word_count("\t \n "), 0);
    }

    #[test]
    fn test_insert_and_content() {
        let mut ed = TextEditor::new();
        for ch in "hello".chars() {
            ed.insert_char(ch);
        }
        ed.insert_newline();
        for ch in "world".chars() {
            ed.insert_char(ch);
        }
        assert_eq!(ed.content(), "hello\nworld");
        assert_eq!(ed.word_count(), 2);
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut ed = TextEditor::from_content("ab\ncd");
        ed.move_up();
        ed.move_down();
        ed.move_home();
        ed.backspace();
        assert_eq!(ed.content(), "abcd");
        assert_eq!(ed.cursor(), (0, 2));
    }

    #[test]
    fn test_backspace_on_empty_is_noop() {
        let mut ed = TextEditor::new();
        ed.backspace();
        assert_eq!(ed.content(), "");
        assert_eq!(ed.cursor(), (0, 0));
    }

    #[test]
    fn test_newline_splits_line_at_cursor() {
        let mut ed = TextEditor::from_content("hello");
        ed.move_home();
        ed.move_right();
        ed.move_right();
        ed.insert_newline();
        assert_eq!(ed.content(), "he\nllo");
        assert_eq!(ed.cursor(), (1, 0));
    }

    #[test]
    fn test_cursor_clamps_on_vertical_move() {
        let mut ed = TextEditor::from_content("long line here\nab");
        // Cursor starts at end of "ab" (col 2); moving up clamps stays at 2
        ed.move_up();
        assert_eq!(ed.cursor(), (0, 2));
        // Move to end of long line then down clamps to short line length
        ed.move_end();
        ed.move_down();
        assert_eq!(ed.cursor(), (1, 2));
    }

    #[test]
    fn test_left_right_cross_line_boundaries() {
        let mut ed = TextEditor::from_content("a\nb");
        // Cursor at (1,1); two lefts cross to end of first line
        ed.move_left();
        assert_eq!(ed.cursor(), (1, 0));
        ed.move_left();
        assert_eq!(ed.cursor(), (0, 1));
        ed.move_right();
        assert_eq!(ed.cursor(), (1, 0));
    }

    #[test]
    fn test_from_content_round_trip() {
        let text = "first\n\nthird line";
        let ed = TextEditor::from_content(text);
        assert_eq!(ed.content(), text);
        assert_eq!(ed.cursor(), (2, 10));
    }

    #[test]
    fn test_multibyte_chars() {
        let mut ed = TextEditor::from_content("caf\u{e9}");
        ed.backspace();
        assert_eq!(ed.content(), "caf");
        ed.insert_char('\u{e9}');
        assert_eq!(ed.content(), "caf\u{e9}");
    }
}
