//! Decoding of the JSON input into user records.
//!
//! Input format:
//! ```text
//! [{"name": "Lays", "age": 30}, {"name": "Alice", "age": 19}]
//! ```
//!
//! - The top level must be an array; order is preserved
//! - `name` must be a string, `age` an integer
//! - Keys are matched exactly; unknown ones (including `Name`, `AGE`) are
//!   ignored and missing ones default to `""` / `0`
//! - A top-level `null` is rejected like any other non-array

use tracing::debug;

use crate::error::ParseError;
use crate::user::User;

/// Parse a JSON array of `{name, age}` objects.
///
/// On failure nothing is returned but the error; there is no partial list.
pub fn load_users(data: &str) -> Result<Vec<User>, ParseError> {
    match serde_json::from_str::<Vec<User>>(data) {
        Ok(users) => {
            debug!(count = users.len(), "loaded users");
            Ok(users)
        }
        Err(e) => {
            debug!(line = e.line(), column = e.column(), "failed to decode users");
            Err(ParseError::from(e))
        }
    }
}
