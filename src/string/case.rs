//! Identifier case styles and word capitalisation

use heck::{ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Naming conventions for identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseFormat {
    /// `lowerCamel`
    LowerCamel,
    /// `UpperCamel`
    UpperCamel,
    /// `lower_underscore`
    LowerUnderscore,
    /// `UPPER_UNDERSCORE`
    UpperUnderscore,
    /// `lower-hyphen`
    LowerHyphen,
}

impl CaseFormat {
    /// Formats already-split words in this style.
    fn render(self, words: &[String]) -> String {
        match self {
            CaseFormat::LowerCamel => words.join("_").to_lower_camel_case(),
            CaseFormat::UpperCamel => words.join("_").to_upper_camel_case(),
            CaseFormat::LowerUnderscore => words.join("_").to_snake_case(),
            CaseFormat::UpperUnderscore => words.join("_").to_shouty_snake_case(),
            CaseFormat::LowerHyphen => words.join("_").to_kebab_case(),
        }
    }

    /// Splits `text` into words according to this style.
    fn split(self, text: &str) -> Vec<String> {
        match self {
            CaseFormat::LowerUnderscore | CaseFormat::UpperUnderscore => {
                split_on(text, '_')
            }
            CaseFormat::LowerHyphen => split_on(text, '-'),
            CaseFormat::LowerCamel | CaseFormat::UpperCamel => split_camel(text),
        }
    }
}

impl std::str::FromStr for CaseFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lower_camel" | "camel" => Ok(CaseFormat::LowerCamel),
            "upper_camel" | "pascal" => Ok(CaseFormat::UpperCamel),
            "lower_underscore" | "snake" => Ok(CaseFormat::LowerUnderscore),
            "upper_underscore" | "shouty_snake" => Ok(CaseFormat::UpperUnderscore),
            "lower_hyphen" | "kebab" => Ok(CaseFormat::LowerHyphen),
            other => Err(Error::invalid(format!("Unknown case format: {}", other))),
        }
    }
}

fn split_on(text: &str, sep: char) -> Vec<String> {
    text.split(sep)
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

// A new word starts at every uppercase letter.
fn split_camel(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    for c in text.chars() {
        if c.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.extend(c.to_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Converts `text` from one naming style to another, e.g. `get_name`
/// (`LowerUnderscore`) to `getName` (`LowerCamel`).
///
/// Word boundaries come from `from`: separators for the underscore and hyphen
/// styles, uppercase letters for the camel styles.
pub fn convert_named_style(text: &str, from: CaseFormat, to: CaseFormat) -> String {
    if from == to {
        return text.to_string();
    }
    to.render(&from.split(text))
}

/// Uppercases the first letter of every whitespace-separated word.
pub fn capitalize(text: &str) -> String {
    map_word_starts(text, |c, out| out.extend(c.to_uppercase()))
}

/// Lowercases the first letter of every whitespace-separated word.
pub fn uncapitalize(text: &str) -> String {
    map_word_starts(text, |c, out| out.extend(c.to_lowercase()))
}

fn map_word_starts<F>(text: &str, mut f: F) -> String
where
    F: FnMut(char, &mut String),
{
    let mut out = String::with_capacity(text.len());
    let mut at_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            at_start = true;
            out.push(c);
        } else if at_start {
            at_start = false;
            f(c, &mut out);
        } else {
            out.push(c);
        }
    }
    out
}

/// Escapes quotes, backslashes and control characters as Rust string
/// escapes (`\n`, `\"`, `\u{1b}`, …). Other characters are kept as they are.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            c if c.is_control() => out.extend(c.escape_unicode()),
            c => out.push(c),
        }
    }
    out
}

/// Reverses [`escape`]. Unknown or truncated escapes are an `InvalidArgument`.
pub fn unescape(text: &str) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let decoded = match chars.next() {
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('0') => '\0',
            Some('\\') => '\\',
            Some('"') => '"',
            Some('\'') => '\'',
            Some('u') => unescape_unicode(&mut chars)?,
            Some(other) => {
                return Err(Error::invalid(format!("Unknown escape: \\{}", other)))
            }
            None => return Err(Error::invalid("Trailing backslash")),
        };
        out.push(decoded);
    }
    Ok(out)
}

fn unescape_unicode(chars: &mut std::str::Chars<'_>) -> Result<char> {
    let bad = || Error::invalid("Malformed unicode escape");
    if chars.next() != Some('{') {
        return Err(bad());
    }
    let mut digits = String::new();
    loop {
        match chars.next() {
            Some('}') => break,
            Some(d) if d.is_ascii_hexdigit() && digits.len() < 6 => digits.push(d),
            _ => return Err(bad()),
        }
    }
    u32::from_str_radix(&digits, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(bad)
}
