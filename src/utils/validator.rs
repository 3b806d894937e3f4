//! Argument checks shared by the public helpers

use crate::error::{Error, Result};

/// Fails with `InvalidArgument` carrying `msg` when `cond` does not hold.
pub fn check_argument(cond: bool, msg: &str) -> Result<()> {
    if cond {
        Ok(())
    } else {
        Err(Error::invalid(msg))
    }
}

/// Unwraps a required optional argument, failing with `MissingArgument`.
pub fn require<T>(value: Option<T>, name: &str) -> Result<T> {
    value.ok_or_else(|| Error::missing(format!("Parameter '{}' is required", name)))
}

/// Log levels accepted by the logging configuration
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub fn is_valid_log_level(level: &str) -> bool {
    LOG_LEVELS.iter().any(|l| l.eq_ignore_ascii_case(level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_argument() {
        assert!(check_argument(true, "unused").is_ok());
        let err = check_argument(false, "size must be non-negative").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(ref m) if m == "size must be non-negative"));
    }

    #[test]
    fn test_require() {
        assert_eq!(require(Some(3), "x").unwrap(), 3);
        assert!(matches!(require::<u8>(None, "x"), Err(Error::MissingArgument(_))));
    }

    #[test]
    fn test_log_levels() {
        assert!(is_valid_log_level("INFO"));
        assert!(!is_valid_log_level("verbose"));
    }
}
