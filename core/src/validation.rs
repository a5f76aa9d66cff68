use crate::{
    error::{Result, TodoError},
    protocol::{DEFAULT_PAGE_SIZE, DEFAULT_PREV_ID},
};

/// Validation rules applied before a request reaches the service
pub struct TodoValidator;

impl TodoValidator {
    /// Validate a TODO subject
    ///
    /// # Returns
    /// * `Ok(())` - If the subject is non-empty
    /// * `Err(TodoError::Validation)` - If the subject is empty
    pub fn validate_subject(subject: &str) -> Result<()> {
        if subject.is_empty() {
            return Err(TodoError::empty_field("subject"));
        }
        Ok(())
    }

    /// Validate the fields of an update request
    ///
    /// Both a non-empty subject and a non-zero id are required.
    pub fn validate_update(id: i64, subject: &str) -> Result<()> {
        Self::validate_subject(subject)?;
        if id == 0 {
            return Err(TodoError::empty_field("id"));
        }
        Ok(())
    }

    /// Parse the raw `prev_id` and `size` query values.
    ///
    /// Absent or empty values fall back to the defaults (`0` and `5`).
    /// Values that are not integers, or are negative, are rejected.
    ///
    /// # Returns
    /// * `Ok((prev_id, size))` - Parsed page request
    /// * `Err(TodoError::Validation)` - If either value is malformed
    pub fn parse_page(prev_id: Option<&str>, size: Option<&str>) -> Result<(i64, i64)> {
        let prev_id = Self::parse_non_negative("prev_id", prev_id, DEFAULT_PREV_ID)?;
        let size = Self::parse_non_negative("size", size, DEFAULT_PAGE_SIZE)?;
        Ok((prev_id, size))
    }

    fn parse_non_negative(field: &str, raw: Option<&str>, default: i64) -> Result<i64> {
        let raw = match raw {
            Some(value) if !value.is_empty() => value,
            _ => return Ok(default),
        };

        let value: i64 = raw
            .parse()
            .map_err(|_| TodoError::invalid_field(field, raw))?;
        if value < 0 {
            return Err(TodoError::invalid_field(field, value));
        }
        Ok(value)
    }
}
