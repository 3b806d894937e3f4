//! Path predicates for the tree walker

use std::path::Path;

use regex::Regex;

use crate::error::Result;

/// Boxed predicate deciding whether a path is accepted.
pub type PathFilter = Box<dyn Fn(&Path) -> bool + Send + Sync>;

pub fn accept_all() -> PathFilter {
    Box::new(|_| true)
}

pub fn reject_all() -> PathFilter {
    Box::new(|_| false)
}

/// Accepts paths whose extension matches one of `extensions`, ignoring case.
/// A leading dot in an extension is ignored.
pub fn suffix_filter<S: AsRef<str>>(extensions: &[S]) -> PathFilter {
    let allowed: Vec<String> = extensions
        .iter()
        .map(|e| e.as_ref().trim_start_matches('.').to_ascii_lowercase())
        .collect();

    Box::new(move |path| match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => allowed.iter().any(|a| ext.eq_ignore_ascii_case(a)),
        None => false,
    })
}

/// Accepts paths whose file name matches `pattern`.
pub fn regex_filter(pattern: &str) -> Result<PathFilter> {
    let re = Regex::new(pattern)?;
    Ok(Box::new(move |path| {
        path.file_name()
            .and_then(|n| n.to_str())
            .map(|n| re.is_match(n))
            .unwrap_or(false)
    }))
}

/// Dot-entries such as `.git` pass only when `accept_hidden` is set; every
/// other path passes.
pub fn hidden_filter(accept_hidden: bool) -> PathFilter {
    if accept_hidden {
        return accept_all();
    }
    Box::new(|path| !is_hidden(path))
}

pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}

/// Accepts a path only when both predicates accept it.
pub fn and(first: PathFilter, second: PathFilter) -> PathFilter {
    Box::new(move |path| first(path) && second(path))
}
