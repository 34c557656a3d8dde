//! Presentation configuration.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Slide aspect ratio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "16:9")]
    Widescreen,
    #[serde(rename = "4:3")]
    Standard,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Standard => "4:3",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file format the renderer can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Html,
    Pdf,
    Pptx,
}

impl OutputFormat {
    /// File extension for output of this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Pdf => "pdf",
            OutputFormat::Pptx => "pptx",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "pdf" => Ok(Self::Pdf),
            "pptx" => Ok(Self::Pptx),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Settings that shape the generated deck.
///
/// Loaded once and never modified by analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PresentationConfig {
    /// Marp theme name.
    pub theme: String,

    pub aspect_ratio: AspectRatio,

    /// Show page numbers on slides.
    pub page_numbers: bool,

    /// Footer text for every slide.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,

    /// Directory generated files are written to.
    pub output_dir: PathBuf,

    /// Formats to compile the deck into.
    pub formats: Vec<OutputFormat>,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            aspect_ratio: AspectRatio::default(),
            page_numbers: true,
            footer: None,
            output_dir: PathBuf::from("./output"),
            formats: vec![OutputFormat::Html],
        }
    }
}

impl PresentationConfig {
    /// Load a configuration from a JSON file. Missing keys take defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::from_io(path, e))?;
        Self::from_json(&content)
    }

    /// Parse a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    /// Set the theme.
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Set the footer text.
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PresentationConfig::default();
        assert_eq!(config.theme, "default");
        assert_eq!(config.aspect_ratio, AspectRatio::Widescreen);
        assert!(config.page_numbers);
        assert_eq!(config.footer, None);
        assert_eq!(config.formats, vec![OutputFormat::Html]);
    }

    #[test]
    fn test_from_json_partial() {
        let config =
            PresentationConfig::from_json(r#"{"theme": "gaia", "aspectRatio": "4:3", "footer": "ACME"}"#)
                .unwrap();
        assert_eq!(config.theme, "gaia");
        assert_eq!(config.aspect_ratio, AspectRatio::Standard);
        assert_eq!(config.footer.as_deref(), Some("ACME"));
        assert!(config.page_numbers);
    }

    #[test]
    fn test_from_json_ignores_unknown_keys() {
        let config = PresentationConfig::from_json(r#"{"transition": "fade", "pageNumbers": false}"#)
            .unwrap();
        assert!(!config.page_numbers);
    }

    #[test]
    fn test_from_json_invalid() {
        let err = PresentationConfig::from_json(r#"{"aspectRatio": "21:9"}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_from_json_file_missing() {
        let err = PresentationConfig::from_json_file(Path::new("/nonexistent/slides.json"))
            .unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("html".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert_eq!("PDF".parse::<OutputFormat>().unwrap(), OutputFormat::Pdf);
        assert_eq!("pptx".parse::<OutputFormat>().unwrap(), OutputFormat::Pptx);
        assert!(matches!(
            "docx".parse::<OutputFormat>(),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_aspect_ratio_display() {
        assert_eq!(AspectRatio::Widescreen.to_string(), "16:9");
        assert_eq!(AspectRatio::Standard.to_string(), "4:3");
    }
}
