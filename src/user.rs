//! The user record and its text rendering.

use std::fmt;

use serde::Deserialize;
use serde::de::{self, Deserializer};

/// A single name/age record.
///
/// Names are not required to be unique and neither field is validated:
/// whatever the input holds is passed through. Keys match exactly
/// (`name`, `age`); missing fields decode as their zero value. Decode
/// errors name the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "name_field")]
    pub name: String,
    #[serde(deserialize_with = "age_field")]
    pub age: i64,
}

/// Decode a field value, prefixing any error with the field name.
fn named_field<'de, D, T>(field: &'static str, deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map_err(|e| de::Error::custom(format!("field `{field}`: {e}")))
}

fn name_field<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    named_field("name", deserializer)
}

fn age_field<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    named_field("age", deserializer)
}

impl User {
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

/// Renders as `{Name Age}`.
impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.name, self.age)
    }
}

/// Render a sequence of users as `[{A 1} {B 2}]`.
pub fn format_users(users: &[User]) -> String {
    let items: Vec<String> = users.iter().map(User::to_string).collect();
    format!("[{}]", items.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new("Alice", 19);
        assert_eq!(user.name, "Alice");
        assert_eq!(user.age, 19);
    }

    #[test]
    fn test_display() {
        assert_eq!(User::new("Bob", 35).to_string(), "{Bob 35}");
    }

    #[test]
    fn test_format_users() {
        let users = vec![User::new("Bob", 35), User::new("Charlie", 40)];
        assert_eq!(format_users(&users), "[{Bob 35} {Charlie 40}]");
        assert_eq!(format_users(&[]), "[]");
    }
}
