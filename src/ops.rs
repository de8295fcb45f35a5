//! Collection operations over user records.
//!
//! All operations are single passes over a slice. Only
//! [`sort_users_by_name`] touches its input, and it does so in place;
//! everything else returns new values and leaves the input alone.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::user::{User, format_users};

/// Fixed, non-overlapping age ranges used for grouping.
///
/// Ordered youngest first so grouped output is rendered deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AgeBucket {
    /// age < 20
    Under20,
    /// 20 <= age < 30
    Twenties,
    /// 30 <= age < 40
    Thirties,
    /// age >= 40
    FortyPlus,
}

impl AgeBucket {
    /// Classify an age into its bucket.
    pub fn for_age(age: i64) -> Self {
        if age < 20 {
            AgeBucket::Under20
        } else if age < 30 {
            AgeBucket::Twenties
        } else if age < 40 {
            AgeBucket::Thirties
        } else {
            AgeBucket::FortyPlus
        }
    }

    /// Bucket label as shown in output.
    pub fn label(&self) -> &'static str {
        match self {
            AgeBucket::Under20 => "<20",
            AgeBucket::Twenties => "20-29",
            AgeBucket::Thirties => "30-39",
            AgeBucket::FortyPlus => "40+",
        }
    }
}

impl fmt::Display for AgeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Keep users strictly older than `threshold`, in original order.
pub fn filter_users_above_age(users: &[User], threshold: i64) -> Vec<User> {
    let filtered: Vec<User> = users
        .iter()
        .filter(|u| u.age > threshold)
        .cloned()
        .collect();
    debug!(
        input = users.len(),
        output = filtered.len(),
        threshold,
        "filtered users"
    );
    filtered
}

/// Sort users by name (byte order, case-sensitive) in place.
///
/// Returns the same slice so calls can be chained. The sort is stable.
pub fn sort_users_by_name(users: &mut [User]) -> &mut [User] {
    users.sort_by(|a, b| a.name.cmp(&b.name));
    debug!(count = users.len(), "sorted users by name");
    users
}

/// Partition users into age buckets.
///
/// Buckets without members are absent from the map; within a bucket the
/// input order is kept.
pub fn group_users_by_age(users: &[User]) -> BTreeMap<AgeBucket, Vec<User>> {
    let mut grouped: BTreeMap<AgeBucket, Vec<User>> = BTreeMap::new();
    for user in users {
        grouped
            .entry(AgeBucket::for_age(user.age))
            .or_default()
            .push(user.clone());
    }
    debug!(
        input = users.len(),
        buckets = grouped.len(),
        "grouped users by age"
    );
    grouped
}

/// Return copies of `users` with every age raised by `increment`.
///
/// Each output record starts from a full copy of its source record, so the
/// name and base age carry over. The addition wraps on `i64` overflow.
pub fn update_users_age(users: &[User], increment: i64) -> Vec<User> {
    let updated: Vec<User> = users
        .iter()
        .map(|u| User {
            age: u.age.wrapping_add(increment),
            ..u.clone()
        })
        .collect();
    debug!(count = updated.len(), increment, "updated user ages");
    updated
}

/// Count users strictly older than `threshold`.
pub fn count_users_above_age(users: &[User], threshold: i64) -> usize {
    users.iter().filter(|u| u.age > threshold).count()
}

/// Render a grouping as `map[<20:[...] 20-29:[...]]`, youngest bucket first.
pub fn format_groups(groups: &BTreeMap<AgeBucket, Vec<User>>) -> String {
    let items: Vec<String> = groups
        .iter()
        .map(|(bucket, users)| format!("{}:{}", bucket, format_users(users)))
        .collect();
    format!("map[{}]", items.join(" "))
}
