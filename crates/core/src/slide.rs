//! Typed slides consumed by the markup generator.
//!
//! Each variant carries only the fields its slide type uses.

use crate::types::SlideType;
use serde::{Deserialize, Serialize};

/// A slide ready to be turned into markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Slide {
    Title(TitleSlide),
    Content(ContentSlide),
    Section(SectionSlide),
    Code(CodeSlide),
    Diagram(DiagramSlide),
}

impl Slide {
    /// The type tag of this slide.
    pub fn slide_type(&self) -> SlideType {
        match self {
            Slide::Title(_) => SlideType::Title,
            Slide::Content(_) => SlideType::Content,
            Slide::Section(_) => SlideType::Section,
            Slide::Code(_) => SlideType::Code,
            Slide::Diagram(_) => SlideType::Diagram,
        }
    }
}

/// Opening slide of a deck.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleSlide {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl TitleSlide {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

/// Layout variants for content slides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentLayout {
    #[default]
    Default,
    TwoColumn,
    Center,
}

impl ContentLayout {
    /// Marp class name for the layout.
    pub fn class_name(&self) -> &'static str {
        match self {
            ContentLayout::Default => "default",
            ContentLayout::TwoColumn => "two-column",
            ContentLayout::Center => "center",
        }
    }
}

/// Standard slide with bullets or free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSlide {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,

    /// Bullet items. Take precedence over `content` when non-empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bullets: Vec<String>,

    /// Free-form markdown body.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content: String,

    #[serde(default)]
    pub layout: ContentLayout,
}

/// Divider between major parts of a deck.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSlide {
    pub title: String,

    /// Background color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

/// Syntax-highlighted code listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSlide {
    #[serde(default)]
    pub language: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
}

/// Mermaid diagram.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramSlide {
    /// Mermaid source.
    pub diagram: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_type_tag() {
        assert_eq!(Slide::Title(TitleSlide::new("T")).slide_type(), SlideType::Title);
        assert_eq!(
            Slide::Diagram(DiagramSlide::default()).slide_type(),
            SlideType::Diagram
        );
    }

    #[test]
    fn test_deserialize_tagged() {
        let json = r#"[
            {"type": "title", "title": "Deck", "subtitle": "Sub"},
            {"type": "content", "heading": "Points", "bullets": ["a", "b"], "layout": "two-column"},
            {"type": "code", "language": "rust", "code": "fn main() {}"}
        ]"#;
        let slides: Vec<Slide> = serde_json::from_str(json).unwrap();

        assert_eq!(
            slides[0],
            Slide::Title(TitleSlide::new("Deck").with_subtitle("Sub"))
        );
        match &slides[1] {
            Slide::Content(content) => {
                assert_eq!(content.bullets, vec!["a", "b"]);
                assert_eq!(content.layout, ContentLayout::TwoColumn);
            }
            other => panic!("expected content slide, got {:?}", other),
        }
        assert_eq!(slides[2].slide_type(), SlideType::Code);
    }

    #[test]
    fn test_serialize_tagged() {
        let slide = Slide::Section(SectionSlide {
            title: "Part".to_string(),
            background: None,
        });
        let value = serde_json::to_value(&slide).unwrap();
        assert_eq!(value, serde_json::json!({"type": "section", "title": "Part"}));
    }
}
