use crate::utils::error::{Result, SumError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SumError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SumError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(SumError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| SumError::ConfigError {
        message: format!("{} is required", field_name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input.file", "data.json").is_ok());
        assert!(validate_path("input.file", "").is_err());
        assert!(validate_path("input.file", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("max_depth", 4, 1).is_ok());
        assert!(validate_positive_number("max_depth", 0, 1).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        assert_eq!(*validate_required_field("max_depth", &Some(3)).unwrap(), 3);
        let missing: Option<usize> = None;
        assert!(validate_required_field("max_depth", &missing).is_err());
    }
}
