use crate::utils::error::{ImageError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ImageError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ImageError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_module_name(field_name: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ImageError::InvalidConfigValue {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Module name cannot be empty".to_string(),
        });
    }

    if name.contains(char::is_whitespace) {
        return Err(ImageError::InvalidConfigValue {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Module name cannot contain whitespace".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path_rejects_empty() {
        assert!(validate_path("output", "").is_err());
        assert!(validate_path("output", "./out").is_ok());
    }

    #[test]
    fn test_validate_module_name() {
        assert!(validate_module_name("tiers.boot", "java.base").is_ok());
        assert!(validate_module_name("tiers.boot", "").is_err());
        assert!(validate_module_name("tiers.boot", "java base").is_err());
    }
}
