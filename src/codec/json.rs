//! JSON helpers over serde

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::error::Result;

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T> {
    Ok(serde_json::from_str(text)?)
}

/// Converts any serializable value into a generic JSON tree.
pub fn to_value<T: Serialize>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Point {
        x: i32,
        label: Option<String>,
    }

    #[test]
    fn test_json_helpers() {
        let p = Point { x: 3, label: Some("p".into()) };
        let text = to_json(&p).unwrap();
        assert_eq!(text, r#"{"x":3,"label":"p"}"#);
        assert!(to_pretty_json(&p).unwrap().contains('\n'));
        assert_eq!(to_value(&p).unwrap()["x"], 3);

        let parsed: Point = from_json(r#"{"x":-1,"label":null}"#).unwrap();
        assert_eq!(parsed, Point { x: -1, label: None });
    }

    #[test]
    fn test_bad_json() {
        let err = from_json::<Point>("{").unwrap_err();
        assert!(matches!(err, Error::JsonError(_)));
    }
}
