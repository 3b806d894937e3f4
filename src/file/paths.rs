//! String-level path helpers
//!
//! These work on `&str` rather than `Path` so that both `/` and `\` are
//! treated as separators on every platform.

use std::path::MAIN_SEPARATOR;

/// Platform separator used when joining
pub const SEP: char = MAIN_SEPARATOR;

fn is_sep(c: char) -> bool {
    c == '/' || c == '\\' || c == SEP
}

/// Joins segments with [`SEP`].
///
/// Empty segments are skipped. One leading and one trailing separator is
/// stripped from each segment, and a separator follows every segment except
/// the last one.
pub fn join(segments: &[&str]) -> String {
    let mut path = String::new();
    let last = segments.len().saturating_sub(1);

    for (i, seg) in segments.iter().enumerate() {
        if seg.is_empty() {
            continue;
        }
        let mut trimmed = *seg;
        if let Some(c) = trimmed.chars().next().filter(|c| is_sep(*c)) {
            trimmed = &trimmed[c.len_utf8()..];
        }
        if let Some(c) = trimmed.chars().next_back().filter(|c| is_sep(*c)) {
            trimmed = &trimmed[..trimmed.len() - c.len_utf8()];
        }
        path.push_str(trimmed);
        if i != last {
            path.push(SEP);
        }
    }
    path
}

/// Directory part of `path`, trailing separator included.
///
/// A single trailing separator on the input is ignored, so `a/b/` gives `a/`.
pub fn dirname(path: &str) -> &str {
    let mut path = path;
    if let Some(c) = path.chars().next_back().filter(|c| is_sep(*c)) {
        path = &path[..path.len() - c.len_utf8()];
    }
    match path.rfind(is_sep) {
        Some(idx) => &path[..=idx],
        None => "",
    }
}

/// File-name part of `path`: everything after the last separator.
pub fn basename(path: &str) -> &str {
    match path.rfind(is_sep) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sep(s: &str) -> String {
        s.replace('/', &SEP.to_string())
    }

    #[test]
    fn test_join() {
        assert_eq!(join(&[]), "");
        assert_eq!(join(&["a", "b", "c.txt"]), sep("a/b/c.txt"));
        assert_eq!(join(&["a/", "/b/", "c"]), sep("a/b/c"));
        assert_eq!(join(&["a", "", "c"]), sep("a/c"));
        assert_eq!(join(&["a\\", "b"]), sep("a/b"));
    }

    #[test]
    fn test_dirname() {
        assert_eq!(dirname(""), "");
        assert_eq!(dirname("c.txt"), "");
        assert_eq!(dirname("a/b/c.txt"), "a/b/");
        assert_eq!(dirname("a/b/"), "a/");
        assert_eq!(dirname("/a"), "/");
        assert_eq!(dirname("a\\b"), "a\\");
    }

    #[test]
    fn test_basename() {
        assert_eq!(basename("a/b/c.txt"), "c.txt");
        assert_eq!(basename("c.txt"), "c.txt");
        assert_eq!(basename("a\\b"), "b");
        assert_eq!(basename("a/b/"), "");
    }
}
