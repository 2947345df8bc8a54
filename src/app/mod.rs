use crate::domain::{RuleContext, Tab, ViewState, format_tabs};
use crate::infra::{EditorWindow, GatherScope, Settings};
use log::{debug, trace};

/// Where the controller is in its lifecycle. Gathering and formatting run
/// synchronously inside `run`, so only the quiescent phases are observable.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Idle,
    AwaitingSelection,
}

/// What the host quick panel should display. `preview` is the single source
/// of truth for whether the host wires up the highlight callback.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PanelRequest {
    /// One row per open view, each `[title, subtitle]` or
    /// `[title, subtitle, captions]`.
    pub rows: Vec<Vec<String>>,
    /// Row to pre-highlight when previewing; `None` otherwise.
    pub selected_index: Option<usize>,
    /// Live focus-follows-highlight, honored only in single-group windows.
    pub preview: bool,
}

/// Drives one picker invocation: gather open views, format them through the
/// rule pipeline, hand rows to the host, then resolve the user's outcome back
/// to a focus command.
pub struct TabSwitcher<W: EditorWindow> {
    window: W,
    phase: Phase,
    views: Vec<W::View>,
    current_index: Option<usize>,
}

impl<W: EditorWindow> TabSwitcher<W> {
    pub fn new(window: W) -> Self {
        Self {
            window,
            phase: Phase::Idle,
            views: Vec::new(),
            current_index: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut W {
        &mut self.window
    }

    /// Gathers and formats the open views, returning the rows for the host
    /// quick panel. The controller then awaits exactly one terminal callback
    /// (`on_confirm`) and, in preview mode, any number of `on_highlight`
    /// calls before it.
    pub fn run(&mut self, settings: &Settings, scope: GatherScope) -> PanelRequest {
        let active = self.window.active_view();
        let handles = self.window.views(scope);

        let mut tabs = Vec::with_capacity(handles.len());
        let mut current_index = None;
        for (idx, view) in handles.iter().enumerate() {
            let is_current = active
                .as_ref()
                .is_some_and(|active| self.window.same_view(active, view));
            if is_current {
                current_index = Some(idx);
            }
            tabs.push(self.make_tab(view, is_current));
        }
        debug!(
            "gathered {} open views (current: {:?})",
            tabs.len(),
            current_index
        );

        let group_count = self.window.group_count();
        let ctx = RuleContext {
            show_captions: settings.show_captions,
            include_path: settings.include_path,
            show_group_caption: settings.show_group_caption,
            group_count,
        };
        let tabs = format_tabs(tabs, &ctx);
        let rows: Vec<Vec<String>> = tabs.iter().map(Tab::details).collect();
        for row in &rows {
            trace!("row: {row:?}");
        }

        // Previewing jumps focus on every highlight; with more than one group
        // that jump could land the view in an unexpected group, so preview is
        // only honored in single-group windows.
        let preview = settings.preview_tab && group_count == 1;

        self.views = handles;
        self.current_index = current_index;
        self.phase = Phase::AwaitingSelection;

        PanelRequest {
            rows,
            selected_index: if preview { current_index } else { None },
            preview,
        }
    }

    fn make_tab(&self, view: &W::View, is_current: bool) -> Tab {
        let state = ViewState {
            is_current,
            is_dirty: self.window.is_dirty(view),
            is_read_only: self.window.is_read_only(view),
            group: self.window.group_index(view),
        };

        match self.window.file_path(view) {
            Some(path) => Tab::from_file(&path, state),
            None => Tab::from_buffer(&self.window.buffer_name(view), state),
        }
    }

    /// Terminal callback from the host panel. `-1` means the selection was
    /// quit, in which case focus returns to the view that was active when the
    /// picker opened (undoing any preview side effects). Out-of-range indices
    /// are a defensive no-op.
    pub fn on_confirm(&mut self, index: isize) {
        if index == -1 {
            if let Some(current) = self.current_index
                && let Some(view) = self.views.get(current).cloned()
            {
                debug!("selection cancelled, restoring focus to row {current}");
                self.window.focus_view(&view);
            }
        } else if index >= 0 {
            if let Some(view) = self.views.get(index as usize).cloned() {
                debug!("selection confirmed: row {index}");
                self.window.focus_view(&view);
            }
        }

        self.views.clear();
        self.current_index = None;
        self.phase = Phase::Idle;
    }

    /// Intermediate callback in preview mode: focus follows the highlighted
    /// row. Out-of-range indices (including the `-1` sentinel) are ignored.
    pub fn on_highlight(&mut self, index: isize) {
        if index < 0 {
            return;
        }
        if let Some(view) = self.views.get(index as usize).cloned() {
            trace!("preview highlight: row {index}");
            self.window.focus_view(&view);
        }
    }
}
