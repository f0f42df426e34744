pub mod omr_runner;
pub mod virtual_display;

pub use omr_runner::{build_command_line, run_omr, RunOutcome};
pub use virtual_display::VirtualDisplay;
