use serde::{Deserialize, Serialize};

/// A user-like entry held by a record service.
///
/// No field is validated: empty names, duplicate names and negative ages are
/// all accepted as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub age: i64,
}

impl Record {
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age,
        }
    }

    /// The fallback record shipped with the component. Never inserted anywhere.
    pub fn placeholder() -> Self {
        Self::new("default", "default@example.com", 0)
    }

    pub fn display_name(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }

    /// Checks if the record is for an adult (18 or older).
    pub fn is_adult(&self) -> bool {
        self.age >= 18
    }
}

/// Builds a [`Record`] from a name and email, with an optional age (default 0).
#[macro_export]
macro_rules! record {
    ($name:expr, $email:expr) => {
        $crate::Record::new($name, $email, 0)
    };
    ($name:expr, $email:expr, $age:expr) => {
        $crate::Record::new($name, $email, $age)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macro_defaults_age_to_zero() {
        let record = record!("Alice", "alice@example.com");
        assert_eq!(record, Record::new("Alice", "alice@example.com", 0));
        assert_eq!(record!("Bob", "bob@example.com", 41).age, 41);
    }

    #[test]
    fn test_display_name() {
        let record = Record::new("John Doe", "john@example.com", 30);
        assert_eq!(record.display_name(), "John Doe <john@example.com>");
        assert!(record.is_adult());
        assert!(!Record::new("Kid", "", 17).is_adult());
    }

    #[test]
    fn test_no_field_constraints() {
        let record = Record::new("", "", -5);
        assert_eq!(record.name, "");
        assert_eq!(record.age, -5);
        assert_eq!(Record::default(), Record::new("", "", 0));
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let record: Record = serde_json::from_str(r#"{"name": "Alice"}"#).unwrap();
        assert_eq!(record, Record::new("Alice", "", 0));
    }

    #[test]
    fn test_placeholder() {
        let placeholder = Record::placeholder();
        assert_eq!(placeholder.display_name(), "default <default@example.com>");
        assert_eq!(placeholder.age, 0);
    }
}
