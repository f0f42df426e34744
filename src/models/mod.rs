pub mod format;
pub mod job;

pub use format::SheetFormat;
pub use job::{Job, JOB_LOG_FILE_NAME, RESULTS_DIR_NAME, TEMPLATE_FILE_NAME};
