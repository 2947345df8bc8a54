mod host;
mod settings;

pub use host::*;
pub use settings::*;
