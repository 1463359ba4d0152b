//! Field-level range checks shared by the request schemas.

use crate::{BridgeError, Result};

pub(crate) fn finite(field: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(BridgeError::validation(format!("{field} must be a finite number")))
    }
}

pub(crate) fn unit_interval(field: &str, value: f64) -> Result<()> {
    finite(field, value)?;
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(BridgeError::validation(format!(
            "{field} must be between 0 and 1, got {value}"
        )))
    }
}

pub(crate) fn positive(field: &str, value: f64) -> Result<()> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(BridgeError::validation(format!(
            "{field} must be greater than 0, got {value}"
        )))
    }
}

pub(crate) fn non_negative(field: &str, value: f64) -> Result<()> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(BridgeError::validation(format!(
            "{field} must not be negative, got {value}"
        )))
    }
}

pub(crate) fn within(field: &str, value: u32, min: u32, max: u32) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(BridgeError::validation(format!(
            "{field} must be between {min} and {max}, got {value}"
        )))
    }
}

pub(crate) fn name(kind: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(BridgeError::validation(format!("{kind} name must not be empty")))
    } else {
        Ok(())
    }
}

pub(crate) fn color(r: f64, g: f64, b: f64) -> Result<()> {
    unit_interval("color_r", r)?;
    unit_interval("color_g", g)?;
    unit_interval("color_b", b)
}
