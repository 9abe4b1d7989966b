//! Helpers for selecting cities by their initials.

use std::collections::HashSet;

use crate::error::{Result, TableError};

/// Leading character of a city name.
pub fn initial_of(name: &str) -> Option<char> {
    name.chars().next()
}

/// Returns the first name in `names` whose leading character is `initial`.
///
/// # Examples
///
/// ```
/// use u_citydist::models::get_city;
///
/// let names = ["Braga", "Beja", "Lisboa"];
/// assert_eq!(get_city(&names, 'B').unwrap(), "Braga");
/// assert!(get_city(&names, 'Z').is_err());
/// ```
pub fn get_city<S: AsRef<str>>(names: &[S], initial: char) -> Result<&str> {
    names
        .iter()
        .map(|name| name.as_ref())
        .find(|name| initial_of(name) == Some(initial))
        .ok_or(TableError::InitialNotFound(initial))
}

/// Concatenates the leading character of every name, in order.
///
/// # Examples
///
/// ```
/// use u_citydist::models::get_initials;
///
/// assert_eq!(get_initials(&["Alpha", "Boston"]), "AB");
/// ```
pub fn get_initials<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .filter_map(|name| initial_of(name.as_ref()))
        .collect()
}

/// Resolves each character of `filter` to a city, preserving filter order.
///
/// A repeated initial is rejected with [`TableError::DuplicateInitial`]
/// before any lookup; an unmatched one with [`TableError::InitialNotFound`].
pub fn select_by_initials<S: AsRef<str>>(names: &[S], filter: &str) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    if let Some(dup) = filter.chars().find(|&ch| !seen.insert(ch)) {
        return Err(TableError::DuplicateInitial(dup));
    }

    filter
        .chars()
        .map(|initial| get_city(names, initial).map(str::to_owned))
        .collect()
}
