//! Report runner: applies a list of operations to one parsed input.
//!
//! Every operation gets its own copy of the input, so the in-place sort
//! never changes what the following operations see. One [`ReportLine`] is
//! produced per operation, in the order given.

use std::fmt;

use tracing::debug;

use crate::ops::{
    count_users_above_age, filter_users_above_age, format_groups, group_users_by_age,
    sort_users_by_name, update_users_age,
};
use crate::user::{User, format_users};

/// One operation in a report, with its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Keep users strictly older than `threshold`
    FilterAboveAge { threshold: i64 },
    /// Order users by name
    SortByName,
    /// Partition users into age buckets
    GroupByAge,
    /// Add `increment` to every age
    UpdateAge { increment: i64 },
    /// Count users strictly older than `threshold`
    CountAboveAge { threshold: i64 },
}

impl Operation {
    /// The standard report: filter, sort, group, update, count.
    pub fn default_sequence(threshold: i64, increment: i64) -> Vec<Operation> {
        vec![
            Operation::FilterAboveAge { threshold },
            Operation::SortByName,
            Operation::GroupByAge,
            Operation::UpdateAge { increment },
            Operation::CountAboveAge { threshold },
        ]
    }

    /// Short operation name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::FilterAboveAge { .. } => "FILTER",
            Operation::SortByName => "SORT",
            Operation::GroupByAge => "GROUP",
            Operation::UpdateAge { .. } => "UPDATE",
            Operation::CountAboveAge { .. } => "COUNT",
        }
    }

    /// Heading printed in front of the operation's result.
    pub fn describe(&self) -> String {
        match self {
            Operation::FilterAboveAge { threshold } => {
                format!("Filtered users older than {threshold}")
            }
            Operation::SortByName => "Users sorted by name".to_string(),
            Operation::GroupByAge => "Users grouped by age".to_string(),
            Operation::UpdateAge { increment } => {
                format!("Users after incrementing age by {increment}")
            }
            Operation::CountAboveAge { threshold } => {
                format!("Count of users older than {threshold}")
            }
        }
    }

    /// Run this operation against `users` and render the result.
    fn apply(&self, users: &[User]) -> String {
        match self {
            Operation::FilterAboveAge { threshold } => {
                format_users(&filter_users_above_age(users, *threshold))
            }
            Operation::SortByName => {
                let mut copy = users.to_vec();
                format_users(sort_users_by_name(&mut copy))
            }
            Operation::GroupByAge => format_groups(&group_users_by_age(users)),
            Operation::UpdateAge { increment } => {
                format_users(&update_users_age(users, *increment))
            }
            Operation::CountAboveAge { threshold } => {
                count_users_above_age(users, *threshold).to_string()
            }
        }
    }
}

/// The rendered result of one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub operation: Operation,
    pub text: String,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.operation.describe(), self.text)
    }
}

/// Apply each operation to `users` independently.
pub fn run_report(users: &[User], operations: &[Operation]) -> Vec<ReportLine> {
    operations
        .iter()
        .map(|op| {
            debug!(operation = op.name(), input = users.len(), "running operation");
            ReportLine {
                operation: op.clone(),
                text: op.apply(users),
            }
        })
        .collect()
}
