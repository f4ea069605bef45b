use thiserror::Error;

/// Failures surfaced at the controller's platform seams.
///
/// None of these are shown to the visitor: callers log them and fall back to
/// a default (session-only theme, zero percent, randomized rating).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FolioError {
    #[error("preference storage is unavailable")]
    StorageUnavailable,
    #[error("preference storage rejected write of `{key}`: {reason}")]
    StorageWrite { key: String, reason: String },
    #[error("invalid value `{value}` for `{name}`")]
    InvalidAttribute { name: String, value: String },
}

pub type Result<T> = std::result::Result<T, FolioError>;

/// Parse an optional attribute value, distinguishing "absent" from "malformed".
pub fn parse_attr<T: std::str::FromStr>(name: &str, raw: Option<&str>) -> Result<Option<T>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<T>()
            .map(Some)
            .map_err(|_| FolioError::InvalidAttribute {
                name: name.to_string(),
                value: s.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_attr_separates_missing_from_malformed() {
        assert_eq!(parse_attr::<u32>("data-percent", None), Ok(None));
        assert_eq!(parse_attr::<u32>("data-percent", Some("  ")), Ok(None));
        assert_eq!(parse_attr::<u32>("data-percent", Some(" 42 ")), Ok(Some(42)));
        let err = parse_attr::<u32>("data-percent", Some("lots")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value `lots` for `data-percent`"
        );
    }
}
