use std::path::Path;

const UNTITLED: &str = "untitled";

/// Per-view state captured from the host at gather time, so the formatting
/// rules never have to call back into the editor.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ViewState {
    pub is_current: bool,
    pub is_dirty: bool,
    pub is_read_only: bool,
    /// 0-based layout group index as reported by the host.
    pub group: usize,
}

/// Snapshot of one open document, built fresh per picker invocation and
/// mutated in place by the formatting-rule pipeline.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tab {
    title: String,
    subtitle: String,
    is_file: bool,
    path: Option<String>,
    captions: Vec<String>,
    state: ViewState,
}

impl Tab {
    /// Builds a tab for a document backed by a file on disk. The directory
    /// split is a string operation only; nothing is checked against the
    /// filesystem here.
    pub fn from_file(file_path: &str, state: ViewState) -> Self {
        let path = Path::new(file_path);
        let dir = path
            .parent()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();
        let title = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| UNTITLED.to_string());
        let subtitle = if file_path.is_empty() {
            UNTITLED.to_string()
        } else {
            file_path.to_string()
        };

        Self {
            title,
            subtitle,
            is_file: true,
            path: Some(dir),
            captions: Vec::new(),
            state,
        }
    }

    /// Builds a tab for an unsaved buffer. An empty buffer name falls back to
    /// `"untitled"`.
    pub fn from_buffer(name: &str, state: ViewState) -> Self {
        let name = if name.is_empty() { UNTITLED } else { name };

        Self {
            title: name.to_string(),
            subtitle: name.to_string(),
            is_file: false,
            path: None,
            captions: Vec::new(),
            state,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn set_subtitle(&mut self, subtitle: String) {
        self.subtitle = subtitle;
    }

    pub fn is_file(&self) -> bool {
        self.is_file
    }

    /// Directory containing the file, or `None` for buffer tabs.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn captions(&self) -> &[String] {
        &self.captions
    }

    /// Appends a caption, coercing non-string values to their display form.
    pub fn add_caption(&mut self, caption: impl ToString) {
        self.captions.push(caption.to_string());
    }

    /// Projects the tab into the row shape handed to the quick panel: always
    /// `[title, subtitle]`, plus a joined captions column iff any caption was
    /// actually added.
    pub fn details(&self) -> Vec<String> {
        let mut details = vec![self.title.clone(), self.subtitle.clone()];

        if !self.captions.is_empty() {
            details.push(self.captions.join(", "));
        }

        details
    }
}
