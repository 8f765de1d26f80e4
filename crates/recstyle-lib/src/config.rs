//! Linter configuration, read from JSON.
//!
//! ```json
//! { "style": "index-signature" }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::rule::Style;

/// File name picked up from the working directory when no config is given.
pub const CONFIG_FILE_NAME: &str = "recstyle.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct Config {
    pub style: Style,
}

impl Config {
    pub fn new(style: Style) -> Self {
        Self { style }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_is_record() {
        assert_eq!(Config::from_json("{}").unwrap().style, Style::Record);
        assert_eq!(Config::default().style, Style::Record);
    }

    #[test]
    fn style_is_kebab_case() {
        let config = Config::from_json(r#"{ "style": "index-signature" }"#).unwrap();
        assert_eq!(config.style, Style::IndexSignature);
        assert_eq!(
            serde_json::to_string(&config).unwrap(),
            r#"{"style":"index-signature"}"#
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = Config::from_json(r#"{ "stlye": "record" }"#).unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
        assert!(err.to_string().starts_with("invalid configuration: unknown field `stlye`"));
    }

    #[test]
    fn unknown_style_is_rejected() {
        let err = Config::from_json(r#"{ "style": "map" }"#).unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Config::load(Path::new("/nonexistent/recstyle.json")).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }

    #[test]
    fn style_from_str() {
        assert_eq!("record".parse::<Style>().unwrap(), Style::Record);
        assert_eq!(
            "index-signature".parse::<Style>().unwrap(),
            Style::IndexSignature
        );
        insta::assert_snapshot!(
            "Record".parse::<Style>().unwrap_err().to_string(),
            @"unknown style `Record`, expected `record` or `index-signature`"
        );
    }
}
