// GUI hooks module
pub mod request_loop;
pub mod types;

pub use request_loop::use_request_loop;
pub use types::{Stage, StageSignals};
