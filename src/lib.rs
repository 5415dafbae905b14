pub mod config;
pub mod core;
pub mod domain;
pub mod output;
pub mod utils;

pub use self::core::{
    run_batch, validate_file, validate_source, BatchOptions, BatchReport, FileReport,
    ValidationStatus,
};
pub use self::domain::{DublinCore, DublinCoreDocument};
pub use self::utils::error::{DcError, Result};
