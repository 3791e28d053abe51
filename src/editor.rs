/// One trimmed, non-empty name per line, in order.
pub fn parse_names(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Raw text buffer plus the participant list derived from it.
///
/// The buffer keeps whatever the user typed, blank lines included; `names`
/// is recomputed from it after every edit and is what the controller sees.
#[derive(Debug, Default)]
pub struct ListEditor {
    raw: String,
    names: Vec<String>,
}

impl ListEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn set_text(&mut self, text: &str) {
        self.raw = text.to_string();
        self.derive();
    }

    pub fn insert_char(&mut self, c: char) {
        self.raw.push(c);
        self.derive();
    }

    /// Pasted text; carriage returns are folded into plain line breaks.
    pub fn insert_str(&mut self, text: &str) {
        self.raw.push_str(&text.replace("\r\n", "\n").replace('\r', "\n"));
        self.derive();
    }

    pub fn newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn backspace(&mut self) {
        if self.raw.pop().is_some() {
            self.derive();
        }
    }

    pub fn clear(&mut self) {
        self.raw.clear();
        self.names.clear();
    }

    /// Writes `names` back into the buffer, one per line. Used whenever the
    /// list changed outside the editor.
    pub fn populate(&mut self, names: &[String]) {
        self.raw = names.join("\n");
        self.names = names.to_vec();
    }

    /// Re-seeds the buffer only if it no longer derives to `names`.
    pub fn sync_from(&mut self, names: &[String]) -> bool {
        if self.names == names {
            return false;
        }
        self.populate(names);
        true
    }

    fn derive(&mut self) {
        self.names = parse_names(&self.raw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_drops_blank_and_trims() {
        assert_eq!(
            parse_names("Alice\n\nBob \n  \nCarol"),
            vec!["Alice", "Bob", "Carol"]
        );
        assert_eq!(parse_names("  x\r\ny  \r\n"), vec!["x", "y"]);
        assert!(parse_names("").is_empty());
        assert!(parse_names("\n \n\t\n").is_empty());
    }

    #[test]
    fn test_parse_keeps_duplicates_in_order() {
        assert_eq!(parse_names("b\na\nb"), vec!["b", "a", "b"]);
    }

    #[test]
    fn test_typing_blank_lines_survives() {
        let mut editor = ListEditor::new();
        for c in "Alice".chars() {
            editor.insert_char(c);
        }
        editor.newline();
        editor.newline();
        assert_eq!(editor.raw(), "Alice\n\n");
        assert_eq!(editor.names(), ["Alice"]);

        // Controller still agrees, so the buffer is left alone
        assert!(!editor.sync_from(&["Alice".to_string()]));
        assert_eq!(editor.raw(), "Alice\n\n");

        for c in "Bob".chars() {
            editor.insert_char(c);
        }
        assert_eq!(editor.names(), ["Alice", "Bob"]);
    }

    #[test]
    fn test_backspace() {
        let mut editor = ListEditor::new();
        editor.set_text("Al\nB");
        editor.backspace();
        assert_eq!(editor.names(), ["Al"]);
        editor.backspace();
        editor.backspace();
        editor.backspace();
        editor.backspace();
        assert_eq!(editor.raw(), "");
        assert_eq!(editor.len(), 0);
    }

    #[test]
    fn test_paste_normalizes_line_breaks() {
        let mut editor = ListEditor::new();
        editor.insert_str("Ann\r\nBen\rCid");
        assert_eq!(editor.raw(), "Ann\nBen\nCid");
        assert_eq!(editor.len(), 3);
    }

    #[test]
    fn test_clear() {
        let mut editor = ListEditor::new();
        editor.set_text("a\nb\nc");
        editor.clear();
        assert_eq!(editor.raw(), "");
        assert!(editor.names().is_empty());
        assert_eq!(editor.len(), 0);
    }

    #[test]
    fn test_sync_reseeds_after_outside_change() {
        let mut editor = ListEditor::new();
        editor.set_text("a\n\nb\nc\n");
        let shuffled = vec!["c".to_string(), "a".to_string(), "b".to_string()];
        assert!(editor.sync_from(&shuffled));
        assert_eq!(editor.raw(), "c\na\nb");
        assert_eq!(editor.names(), shuffled);
    }

    #[test]
    fn test_names_file_text_kept_verbatim() {
        let mut editor = ListEditor::new();
        let file = "Ana\r\n\r\n  Bo \r\nCy\r\n";
        editor.set_text(file);
        assert_eq!(editor.names(), ["Ana", "Bo", "Cy"]);
        assert_eq!(editor.len(), 3);

        // A controller seeded from the same list leaves the buffer alone
        let seeded = editor.names().to_vec();
        assert!(!editor.sync_from(&seeded));
        assert_eq!(editor.raw(), file);
    }
}
