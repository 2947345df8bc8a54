//! Host-independent core for an editor tab switcher: formats the set of open
//! documents into quick-panel rows and resolves the user's pick back to a
//! focus command. The host editor plugs in through [`infra::EditorWindow`].

pub mod app;
pub mod domain;
pub mod infra;

pub use app::{PanelRequest, Phase, TabSwitcher};
pub use domain::{FormatRule, PIPELINE, RuleContext, Tab, ViewState, format_tabs};
pub use infra::{
    EditorWindow, GatherScope, LoadSettingsError, ResolveStateDirError, SaveSettingsError,
    Settings, load_settings, resolve_tabpick_state_dir, save_settings,
};
