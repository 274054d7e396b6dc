use crate::utils::error::{EtlError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(EtlError::Config {
            message: format!("{}: path cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::Config {
            message: format!("{}: path contains null bytes", field_name),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input_path", "input").is_ok());
        assert!(validate_path("input_path", "./data/listings").is_ok());
        assert!(validate_path("input_path", "").is_err());
        assert!(validate_path("input_path", "   ").is_err());
        assert!(validate_path("output_path", "out\0dir").is_err());
    }
}
