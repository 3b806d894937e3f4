//! Slice helpers

use std::fmt::Display;

/// Concatenates slices into one vector.
pub fn concat<T: Clone>(parts: &[&[T]]) -> Vec<T> {
    let mut out = Vec::with_capacity(parts.iter().map(|p| p.len()).sum());
    for part in parts {
        out.extend_from_slice(part);
    }
    out
}

/// Renders every element and joins them with `separator`.
pub fn join<T: Display>(separator: &str, items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}
