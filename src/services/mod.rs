pub mod diagnostics;
pub mod error_archive;
pub mod result_extractor;
pub mod stager;

pub use error_archive::ErrorArchiver;
pub use result_extractor::{RESULTS_END_MARKER, RESULTS_START_MARKER};
