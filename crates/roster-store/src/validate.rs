use roster_types::Record;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name is required")]
    MissingName,
    #[error("email is required")]
    MissingEmail,
}

/// Presence check only. `RecordService::add_record` never calls this.
pub fn validate_record(record: &Record) -> Result<(), ValidationError> {
    if record.name.is_empty() {
        return Err(ValidationError::MissingName);
    }
    if record.email.is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_record() {
        assert_eq!(validate_record(&Record::new("Alice", "a@example.com", 0)), Ok(()));
        assert_eq!(
            validate_record(&Record::new("", "a@example.com", 0)),
            Err(ValidationError::MissingName)
        );
        assert_eq!(
            validate_record(&Record::new("Alice", "", -1)),
            Err(ValidationError::MissingEmail)
        );
    }
}
