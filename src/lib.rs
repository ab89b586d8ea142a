pub mod args;
pub mod gui;
pub mod recolor;
pub mod template_matching;

pub use recolor::{RecolorConfig, RecolorError, RecolorResult, run_session};
