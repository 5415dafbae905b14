pub mod batch;
pub mod formats;
pub mod report;
pub mod sample;
pub mod validator;

pub use batch::{run_batch, BatchOptions, BatchReport};
pub use report::{validate_file, validate_source, FileReport, ValidationStatus};
pub use validator::{check_document, parse_document, Issue};
