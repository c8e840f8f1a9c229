use crate::utils::error::{ReportError, Result};
use std::path::{Path, PathBuf};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn valid_files(paths: &[String]) -> Vec<PathBuf> {
    let mut valid = Vec::new();
    for path in paths {
        let abs_path =
            std::path::absolute(Path::new(path)).unwrap_or_else(|_| PathBuf::from(path));
        if abs_path.is_file() {
            valid.push(abs_path);
        } else {
            tracing::warn!("File not found or not a regular file: {}", path);
        }
    }
    valid
}

pub fn validate_non_empty_list(field_name: &str, values: &[String]) -> Result<()> {
    if values.is_empty() {
        return Err(ReportError::ValidationError {
            message: format!("{} must contain at least one entry", field_name),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(ReportError::ValidationError {
        message: format!(
            "Invalid value '{}' for {}. Allowed values: {}",
            value,
            field_name,
            allowed.join(", ")
        ),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ReportError::ValidationError {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}
