use crate::domain::prefix::{common_prefix, trim_to_existing_dir};
use crate::domain::tab::Tab;

/// Plain-flag view of the configuration plus window topology, so the rule
/// pipeline never touches the settings store or the host directly.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RuleContext {
    pub show_captions: bool,
    pub include_path: bool,
    pub show_group_caption: bool,
    pub group_count: usize,
}

/// The formatting rules, in their fixed pipeline order. The order is
/// load-bearing: `IncludePath` copies the subtitle after `CommonPrefix` has
/// elided it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormatRule {
    CommonPrefix,
    GroupCaption,
    ShowCaptions,
    IncludePath,
}

pub const PIPELINE: [FormatRule; 4] = [
    FormatRule::CommonPrefix,
    FormatRule::GroupCaption,
    FormatRule::ShowCaptions,
    FormatRule::IncludePath,
];

impl FormatRule {
    pub fn is_enabled(self, ctx: &RuleContext) -> bool {
        match self {
            Self::CommonPrefix => true,
            Self::GroupCaption => ctx.show_group_caption && ctx.group_count > 1,
            Self::ShowCaptions => ctx.show_captions,
            Self::IncludePath => ctx.include_path,
        }
    }

    /// Applies the rule, mutating tabs in place. A disabled rule passes the
    /// list through untouched.
    pub fn apply(self, tabs: Vec<Tab>, ctx: &RuleContext) -> Vec<Tab> {
        if !self.is_enabled(ctx) {
            return tabs;
        }

        match self {
            Self::CommonPrefix => apply_common_prefix(tabs),
            Self::GroupCaption => apply_group_caption(tabs),
            Self::ShowCaptions => apply_show_captions(tabs),
            Self::IncludePath => apply_include_path(tabs),
        }
    }
}

/// Runs the full pipeline over the gathered tabs, each rule receiving the
/// previous rule's output.
pub fn format_tabs(mut tabs: Vec<Tab>, ctx: &RuleContext) -> Vec<Tab> {
    for rule in PIPELINE {
        tabs = rule.apply(tabs, ctx);
    }
    tabs
}

fn apply_common_prefix(mut tabs: Vec<Tab>) -> Vec<Tab> {
    let paths: Vec<&str> = tabs
        .iter()
        .filter(|tab| tab.is_file())
        .filter_map(Tab::path)
        .collect();
    let prefix = trim_to_existing_dir(&common_prefix(&paths));
    if prefix.is_empty() {
        return tabs;
    }

    for tab in &mut tabs {
        if !tab.is_file() {
            continue;
        }
        // strip_prefix keeps the rule idempotent: an already-elided subtitle
        // no longer starts with the directory prefix and is left alone.
        let Some(tail) = tab.subtitle().strip_prefix(&prefix) else {
            continue;
        };
        let short = format!("...{tail}");
        tab.set_subtitle(short);
    }

    tabs
}

fn apply_group_caption(mut tabs: Vec<Tab>) -> Vec<Tab> {
    for tab in &mut tabs {
        // Host group indices are 0-based; the caption is always 1-based.
        tab.add_caption(format!("Group: {}", tab.state().group + 1));
    }
    tabs
}

fn apply_show_captions(mut tabs: Vec<Tab>) -> Vec<Tab> {
    for tab in &mut tabs {
        let state = tab.state();
        if state.is_current {
            tab.add_caption("Current File");
        }
        if !tab.is_file() {
            tab.add_caption("Unsaved File");
        } else if state.is_dirty {
            tab.add_caption("Unsaved Changes");
        }
        if state.is_read_only {
            tab.add_caption("Read Only");
        }
    }
    tabs
}

fn apply_include_path(mut tabs: Vec<Tab>) -> Vec<Tab> {
    for tab in &mut tabs {
        if tab.is_file() {
            let subtitle = tab.subtitle().to_string();
            tab.set_title(subtitle);
        }
    }
    tabs
}
