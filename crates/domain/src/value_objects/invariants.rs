//! Reusable invariant checks shared by value objects and aggregates.

use std::collections::HashSet;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::RangeInclusive;

use crate::error::{DomainError, DomainResult};

/// Reject a mutation whose new value equals the current one.
pub fn ensure_changed<T>(current: &T, new: &T, field: &str) -> DomainResult<()>
where
    T: PartialEq + Debug + ?Sized,
{
    if current == new {
        return Err(DomainError::idempotent(format!(
            "{} is already {:?}",
            field, current
        )));
    }
    Ok(())
}

/// Reject a list mutation whose new list holds the same elements as the current one.
///
/// Order is not significant.
pub fn ensure_list_changed<T>(current: &[T], new: &[T], field: &str) -> DomainResult<()>
where
    T: Eq + Hash,
{
    if same_elements(current, new) {
        return Err(DomainError::idempotent(format!(
            "{} already holds these entries",
            field
        )));
    }
    Ok(())
}

/// Reject lists that contain the same element more than once.
///
/// An empty list is trivially distinct.
pub fn ensure_distinct<T>(items: &[T], field: &str) -> DomainResult<()>
where
    T: Eq + Hash,
{
    let unique: HashSet<&T> = items.iter().collect();
    if unique.len() != items.len() {
        return Err(duplicates(field));
    }
    Ok(())
}

/// Reject lists where two elements share the same key.
pub fn ensure_distinct_by<T, K, F>(items: &[T], key: F, field: &str) -> DomainResult<()>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let unique: HashSet<K> = items.iter().map(key).collect();
    if unique.len() != items.len() {
        return Err(duplicates(field));
    }
    Ok(())
}

fn duplicates(field: &str) -> DomainError {
    DomainError::invalid_data(format!("{} cannot contain duplicates", field))
}

/// Reject values outside an inclusive range.
pub fn ensure_in_range<T>(value: T, range: RangeInclusive<T>, field: &str) -> DomainResult<()>
where
    T: PartialOrd + Display,
{
    if !range.contains(&value) {
        return Err(DomainError::invalid_data(format!(
            "{} must be between {} and {}, got {}",
            field,
            range.start(),
            range.end(),
            value
        )));
    }
    Ok(())
}

/// Reject a value present without its paired description, or the reverse.
pub fn ensure_paired(has_value: bool, has_description: bool, field: &str) -> DomainResult<()> {
    match (has_value, has_description) {
        (true, false) => Err(DomainError::invalid_data(format!(
            "{} requires {}_description",
            field, field
        ))),
        (false, true) => Err(DomainError::invalid_data(format!(
            "{}_description requires {}",
            field, field
        ))),
        _ => Ok(()),
    }
}

/// Set-equality over two lists (duplicates and order ignored).
pub fn same_elements<T: Eq + Hash>(a: &[T], b: &[T]) -> bool {
    let left: HashSet<&T> = a.iter().collect();
    let right: HashSet<&T> = b.iter().collect();
    left == right
}
