/// Which layout groups to enumerate when gathering open documents.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GatherScope {
    AllGroups,
    ActiveGroup,
}

/// The editor boundary. The host window hands out opaque view handles and
/// answers per-handle queries; the core never inspects handles itself.
///
/// Handle identity is host-defined: implementations must compare views via
/// `same_view`, never rely on any ambient notion of equality.
pub trait EditorWindow {
    type View: Clone;

    /// Open views in the window's tab order, scoped to one or all groups.
    fn views(&self, scope: GatherScope) -> Vec<Self::View>;

    /// The view that currently has focus, if any (an empty window has none).
    fn active_view(&self) -> Option<Self::View>;

    fn same_view(&self, a: &Self::View, b: &Self::View) -> bool;

    /// Absolute path of the backing file, or `None` for an unsaved buffer.
    fn file_path(&self, view: &Self::View) -> Option<String>;

    /// The buffer's display name; may be empty.
    fn buffer_name(&self, view: &Self::View) -> String;

    fn is_dirty(&self, view: &Self::View) -> bool;

    fn is_read_only(&self, view: &Self::View) -> bool;

    /// 0-based index of the layout group containing the view.
    fn group_index(&self, view: &Self::View) -> usize;

    /// Number of layout groups in the window, at least 1.
    fn group_count(&self) -> usize;

    /// Brings the view to focus. Used for the final selection as well as
    /// preview and cancellation restore.
    fn focus_view(&mut self, view: &Self::View);
}
