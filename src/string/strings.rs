//! General string helpers: placeholder formatting, slicing, padding, stripping

use std::collections::HashMap;
use std::fmt::Display;

/// Replaces `{key}` placeholders with values from `lookup`.
///
/// Placeholders the lookup does not know are left as they are. `\{` produces
/// a literal `{` and is never substituted.
pub fn format_with<F>(template: &str, mut lookup: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(|c: char| c == '{' || c == '\\') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if let Some(after) = tail.strip_prefix("\\{") {
            out.push('{');
            rest = after;
        } else if let Some(after) = tail.strip_prefix('\\') {
            out.push('\\');
            rest = after;
        } else {
            match tail.find('}') {
                Some(close) => {
                    match lookup(&tail[1..close]) {
                        Some(value) => out.push_str(&value),
                        None => out.push_str(&tail[..=close]),
                    }
                    rest = &tail[close + 1..];
                }
                None => {
                    out.push_str(tail);
                    rest = "";
                }
            }
        }
    }
    out.push_str(rest);
    out
}

/// `format_map("My name is {name}", &values)`
pub fn format_map<V: Display>(template: &str, values: &HashMap<String, V>) -> String {
    format_with(template, |key| values.get(key).map(|v| v.to_string()))
}

/// `format_indexed("{0} and {1}", &[&"tom", &42])`
pub fn format_indexed(template: &str, args: &[&dyn Display]) -> String {
    format_with(template, |key| {
        key.parse::<usize>()
            .ok()
            .and_then(|i| args.get(i))
            .map(|v| v.to_string())
    })
}

/// Substring by character positions. Negative positions count from the end
/// and out-of-range positions are clamped, so this never panics.
pub fn slice(text: &str, start: isize, end: isize) -> String {
    let len = text.chars().count();
    let start = clamp_index(start, len);
    let end = clamp_index(end, len);
    if start >= end {
        return String::new();
    }
    text.chars().skip(start).take(end - start).collect()
}

/// [`slice`] up to the end of `text`.
pub fn slice_from(text: &str, start: isize) -> String {
    slice(text, start, isize::MAX)
}

fn clamp_index(index: isize, len: usize) -> usize {
    if index < 0 {
        len.saturating_sub(index.unsigned_abs())
    } else {
        (index as usize).min(len)
    }
}

/// Non-overlapping occurrences of `sub`; zero for an empty `sub`.
pub fn count(text: &str, sub: &str) -> usize {
    if sub.is_empty() {
        return 0;
    }
    text.matches(sub).count()
}

pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

/// Left-pads `text` with `pad` to at least `min_len` characters.
pub fn pad_start(text: &str, min_len: usize, pad: char) -> String {
    let missing = min_len.saturating_sub(text.chars().count());
    let mut out: String = std::iter::repeat(pad).take(missing).collect();
    out.push_str(text);
    out
}

/// Right-pads `text` with `pad` to at least `min_len` characters.
pub fn pad_end(text: &str, min_len: usize, pad: char) -> String {
    let missing = min_len.saturating_sub(text.chars().count());
    let mut out = String::from(text);
    out.extend(std::iter::repeat(pad).take(missing));
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripMode {
    Start,
    End,
    All,
}

/// Strips whitespace, or any of `chars` when given, from the chosen ends.
pub fn strip<'a>(text: &'a str, mode: StripMode, chars: Option<&str>) -> &'a str {
    let strip_start = matches!(mode, StripMode::Start | StripMode::All);
    let strip_end = matches!(mode, StripMode::End | StripMode::All);

    match chars {
        None => {
            let text = if strip_start { text.trim_start() } else { text };
            if strip_end {
                text.trim_end()
            } else {
                text
            }
        }
        Some(set) => {
            let hit = |c: char| set.contains(c);
            let text = if strip_start { text.trim_start_matches(hit) } else { text };
            if strip_end {
                text.trim_end_matches(hit)
            } else {
                text
            }
        }
    }
}

/// Longest shared prefix, as a slice of `a`.
pub fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let end = a
        .char_indices()
        .zip(b.chars())
        .find(|((_, ca), cb)| ca != cb)
        .map(|((i, _), _)| i)
        .unwrap_or_else(|| a.len().min(b.len()));
    &a[..end]
}

/// Longest shared suffix, as a slice of `a`.
pub fn common_suffix<'a>(a: &'a str, b: &str) -> &'a str {
    let mut start = a.len();
    for ((i, ca), cb) in a.char_indices().rev().zip(b.chars().rev()) {
        if ca != cb {
            break;
        }
        start = i;
    }
    &a[start..]
}
