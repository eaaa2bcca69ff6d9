use crate::utils::error::{CrunchError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if value.is_nan() {
        return Err(CrunchError::InvalidValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be NaN".to_string(),
        });
    }

    if value.is_infinite() {
        return Err(CrunchError::InvalidValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be finite".to_string(),
        });
    }

    Ok(())
}
