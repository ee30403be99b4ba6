use crate::essay::compare::comparison_feedback;
use crate::essay::example::{Example, ExampleProvider, Level};

/// Browsing state for the example-essay screen: the loaded set for one text
/// type, the current selection, and the optional comparison pane.
pub struct ExampleBrowser {
    pub examples: Vec<Example>,
    pub selected: usize,
    pub level: Level,
    /// Index into the selected example's annotation list; the highlighted
    /// annotation's note is shown in the detail pane.
    pub annotation_cursor: usize,
    pub comparison: Option<Vec<String>>,
    pub scroll: usize,
}

impl ExampleBrowser {
    pub fn new(provider: &dyn ExampleProvider, text_type: &str) -> Self {
        let examples = provider.examples_for(text_type);
        let level = Level::Intermediate;
        // Default to the first example of the default level, falling back to
        // the first example loaded
        let selected = examples
            .iter()
            .position(|e| e.level == level)
            .unwrap_or(0);
        Self {
            examples,
            selected,
            level,
            annotation_cursor: 0,
            comparison: None,
            scroll: 0,
        }
    }

    pub fn selected_example(&self) -> Option<&Example> {
        self.examples.get(self.selected)
    }

    /// Re-select the first example matching `level`. When no example of that
    /// level exists, the previous selection is retained unchanged.
    pub fn select_level(&mut self, level: Level) {
        self.level = level;
        self.comparison = None;
        if let Some(idx) = self.examples.iter().position(|e| e.level == level) {
            self.selected = idx;
            self.annotation_cursor = 0;
            self.scroll = 0;
        }
    }

    pub fn next_annotation(&mut self) {
        if let Some(ex) = self.selected_example() {
            if !ex.annotations.is_empty() {
                self.annotation_cursor = (self.annotation_cursor + 1) % ex.annotations.len();
            }
        }
    }

    pub fn prev_annotation(&mut self) {
        if let Some(ex) = self.selected_example() {
            let count = ex.annotations.len();
            if count > 0 {
                self.annotation_cursor = (self.annotation_cursor + count - 1) % count;
            }
        }
    }

    /// Run the mocked comparison against the user's draft content.
    pub fn compare_with(&mut self, user_content: &str) {
        self.comparison = Some(
            comparison_feedback(user_content)
                .iter()
                .map(|s| s.to_string())
                .collect(),
        );
    }

    pub fn close_comparison(&mut self) {
        self.comparison = None;
    }
}
