mod prefix;
mod rules;
mod tab;

pub use prefix::*;
pub use rules::*;
pub use tab::*;
