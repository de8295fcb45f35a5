//! # user-records
//!
//! Small set of collection operations over name/age user records.
//!
//! Records are decoded once from a JSON array and then handed to
//! independent operations:
//! - **Filter**: users strictly older than a threshold
//! - **Sort**: users ordered by name, in place
//! - **Group**: users partitioned into `<20`, `20-29`, `30-39`, `40+`
//! - **Update**: copies of the users with ages incremented
//! - **Count**: number of users strictly older than a threshold
//!
//! ## Example
//!
//! ```
//! use user_records::{count_users_above_age, filter_users_above_age, load_users};
//!
//! let users = load_users(r#"[{"name": "Bob", "age": 35}, {"name": "Diana", "age": 20}]"#)
//!     .unwrap();
//!
//! let older = filter_users_above_age(&users, 30);
//! assert_eq!(older.len(), 1);
//! assert_eq!(older[0].name, "Bob");
//! assert_eq!(count_users_above_age(&users, 30), 1);
//! ```

pub mod error;
pub mod ops;
pub mod parser;
pub mod report;
pub mod user;

pub use error::ParseError;
pub use ops::{
    AgeBucket, count_users_above_age, filter_users_above_age, format_groups, group_users_by_age,
    sort_users_by_name, update_users_age,
};
pub use parser::load_users;
pub use report::{Operation, ReportLine, run_report};
pub use user::{User, format_users};
