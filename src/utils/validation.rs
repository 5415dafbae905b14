use crate::utils::error::{DcError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_existing_file(field_name: &str, path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(DcError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    if !path.is_file() {
        return Err(DcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.display().to_string(),
            reason: "Path is not a file".to_string(),
        });
    }
    Ok(())
}

pub fn validate_existing_directory(field_name: &str, path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(DcError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    if !path.is_dir() {
        return Err(DcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.display().to_string(),
            reason: "Path is not a directory".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_existing_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(validate_existing_file("file", file.path()).is_ok());
        assert!(validate_existing_file("file", Path::new("/nonexistent/x.yaml")).is_err());
    }

    #[test]
    fn test_validate_existing_directory_rejects_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(validate_existing_directory("directory", file.path()).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("pattern", "*.yaml").is_ok());
        assert!(validate_non_empty_string("pattern", "   ").is_err());
    }
}
