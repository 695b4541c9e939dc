use crate::core::error::ApiError;

/// Local input contract checked before any request leaves the process.
pub trait Validate {
    fn validate(&self) -> Result<(), ApiError>;
}

pub fn check_range<T>(field: &str, value: T, min: T, max: T) -> Result<(), ApiError>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if value < min || value > max {
        return Err(ApiError::InvalidInput(format!(
            "{field} must be between {min} and {max}, got {value}"
        )));
    }
    Ok(())
}

pub fn check_min<T>(field: &str, value: T, min: T) -> Result<(), ApiError>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if value < min {
        return Err(ApiError::InvalidInput(format!(
            "{field} must be at least {min}, got {value}"
        )));
    }
    Ok(())
}

/// Length in characters, not bytes.
pub fn check_len(field: &str, value: &str, min: usize, max: usize) -> Result<(), ApiError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ApiError::InvalidInput(format!(
            "{field} length must be between {min} and {max} characters, got {len}"
        )));
    }
    Ok(())
}

pub fn check_not_blank(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidInput(format!("{field} must not be empty")));
    }
    Ok(())
}
