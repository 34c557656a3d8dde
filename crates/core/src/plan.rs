//! Slide plans: the typed input of the markup generator.
//!
//! Plans usually come from an external planning stage as JSON. A simple
//! planner that maps each analyzed slide onto its classified type is
//! included so the pipeline can run on its own.

use crate::classify::classify;
use crate::config::PresentationConfig;
use crate::error::{Error, Result};
use crate::extract::{extract_code_blocks, extract_diagrams};
use crate::markdown::extract_headings;
use crate::slide::{CodeSlide, ContentSlide, DiagramSlide, SectionSlide, Slide, TitleSlide};
use crate::types::{ContentAnalysis, Document, SlideType};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Deck-level information carried alongside the slides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PresentationMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub total_slides: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Ordered slides plus the configuration used to render them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlidePlan {
    pub slides: Vec<Slide>,
    #[serde(default)]
    pub config: PresentationConfig,
    #[serde(default)]
    pub metadata: PresentationMetadata,
}

impl SlidePlan {
    /// Load a plan from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::from_io(path, e))?;
        serde_json::from_str(&content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Plan one typed slide per analyzed slide, in analysis order.
    pub fn from_analysis(analysis: &ContentAnalysis, config: PresentationConfig) -> Self {
        let slides: Vec<Slide> = analysis
            .files
            .iter()
            .flat_map(|file| {
                file.slides
                    .iter()
                    .enumerate()
                    .map(move |(index, slide)| plan_slide(file, index, &slide.content))
            })
            .collect();

        let mut metadata = PresentationMetadata {
            title: first_frontmatter(analysis, "title"),
            author: first_frontmatter(analysis, "author"),
            date: first_frontmatter(analysis, "date"),
            total_slides: analysis.total_slides,
            estimated_duration: Some(analysis.suggested_structure.estimated_duration),
            tags: first_tags(analysis),
        };
        if metadata.title.is_none() {
            metadata.title = slides.iter().find_map(|slide| match slide {
                Slide::Title(title) => Some(title.title.clone()),
                _ => None,
            });
        }

        log::debug!("Planned {} slides", slides.len());
        Self {
            slides,
            config,
            metadata,
        }
    }
}

/// Map one parsed slide onto the typed variant its classification names.
fn plan_slide(file: &Document, index: usize, content: &str) -> Slide {
    let headings = extract_headings(content);
    let first_heading = headings.first().cloned();

    match classify(content) {
        SlideType::Title => Slide::Title(TitleSlide {
            title: first_heading.unwrap_or_default(),
            subtitle: headings.get(1).cloned(),
            author: file.frontmatter_str("author").map(str::to_string),
            date: file.frontmatter_str("date").map(str::to_string),
        }),
        SlideType::Section => Slide::Section(SectionSlide {
            title: first_heading.unwrap_or_default(),
            background: None,
        }),
        SlideType::Code => match extract_code_blocks(content, index).into_iter().next() {
            Some(block) => Slide::Code(CodeSlide {
                language: block.language,
                code: block.code,
                heading: first_heading,
            }),
            None => plan_content(content),
        },
        SlideType::Diagram => match extract_diagrams(content, index).into_iter().next() {
            Some(diagram) => Slide::Diagram(DiagramSlide {
                diagram: diagram.content,
                heading: first_heading,
            }),
            None => plan_content(content),
        },
        SlideType::Content => plan_content(content),
    }
}

/// A leading H1 or H2 becomes the heading; the rest is kept verbatim.
fn plan_content(content: &str) -> Slide {
    let trimmed = content.trim();
    let (first, rest) = trimmed.split_once('\n').unwrap_or((trimmed, ""));

    let heading = ["## ", "# "]
        .iter()
        .find_map(|marker| first.strip_prefix(marker))
        .map(|text| text.trim().to_string());

    let slide = match heading {
        Some(heading) => ContentSlide {
            heading: Some(heading),
            content: rest.trim().to_string(),
            ..ContentSlide::default()
        },
        None => ContentSlide {
            content: trimmed.to_string(),
            ..ContentSlide::default()
        },
    };
    Slide::Content(slide)
}

fn first_frontmatter(analysis: &ContentAnalysis, key: &str) -> Option<String> {
    analysis
        .files
        .iter()
        .find_map(|file| file.frontmatter_str(key))
        .map(str::to_string)
}

fn first_tags(analysis: &ContentAnalysis) -> Vec<String> {
    analysis
        .files
        .iter()
        .filter_map(|file| file.frontmatter.as_ref()?.get("tags")?.as_array())
        .next()
        .map(|tags| {
            tags.iter()
                .filter_map(|tag| tag.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::ContentAnalyzer;
    use crate::types::{Frontmatter, ParsedSlide};
    use std::path::PathBuf;

    fn document(frontmatter: Option<Frontmatter>, slides: &[&str]) -> Document {
        Document {
            path: PathBuf::from("deck.md"),
            raw_content: String::new(),
            frontmatter,
            slides: slides
                .iter()
                .enumerate()
                .map(|(i, s)| ParsedSlide::new(*s, i + 1))
                .collect(),
        }
    }

    fn frontmatter(pairs: serde_json::Value) -> Frontmatter {
        pairs.as_object().unwrap().clone()
    }

    #[test]
    fn test_plan_maps_each_type() {
        let doc = document(
            Some(frontmatter(serde_json::json!({"author": "Ana", "date": "May"}))),
            &[
                "# Deck\n## Subtitle",
                "# Part One",
                "## Example\n\n```rust\nfn main() {}\n```",
                "```mermaid\ngraph TD\n```",
                "## Agenda\n\n- one\n- two",
            ],
        );
        let analysis = ContentAnalyzer::new().aggregate(vec![doc]);
        let plan = SlidePlan::from_analysis(&analysis, PresentationConfig::default());

        assert_eq!(
            plan.slides[0],
            Slide::Title(
                TitleSlide::new("Deck")
                    .with_subtitle("Subtitle")
                    .with_author("Ana")
                    .with_date("May")
            )
        );
        assert_eq!(
            plan.slides[1],
            Slide::Section(SectionSlide {
                title: "Part One".to_string(),
                background: None,
            })
        );
        assert_eq!(
            plan.slides[2],
            Slide::Code(CodeSlide {
                language: "rust".to_string(),
                code: "fn main() {}".to_string(),
                heading: Some("Example".to_string()),
            })
        );
        assert_eq!(
            plan.slides[3],
            Slide::Diagram(DiagramSlide {
                diagram: "graph TD".to_string(),
                heading: None,
            })
        );
        assert_eq!(
            plan.slides[4],
            Slide::Content(ContentSlide {
                heading: Some("Agenda".to_string()),
                content: "- one\n- two".to_string(),
                ..ContentSlide::default()
            })
        );
    }

    #[test]
    fn test_plan_metadata() {
        let doc = document(
            Some(frontmatter(serde_json::json!({"title": "From FM", "tags": ["rust", 3, "talk"]}))),
            &["# Other Title\n## Sub", "text"],
        );
        let analysis = ContentAnalyzer::new().aggregate(vec![doc]);
        let plan = SlidePlan::from_analysis(&analysis, PresentationConfig::default());

        assert_eq!(plan.metadata.title.as_deref(), Some("From FM"));
        assert_eq!(plan.metadata.tags, vec!["rust", "talk"]);
        assert_eq!(plan.metadata.total_slides, 2);
        assert_eq!(plan.metadata.estimated_duration, Some(3));
    }

    #[test]
    fn test_plan_title_falls_back_to_title_slide() {
        let doc = document(None, &["# Deck\n## Sub"]);
        let analysis = ContentAnalyzer::new().aggregate(vec![doc]);
        let plan = SlidePlan::from_analysis(&analysis, PresentationConfig::default());

        assert_eq!(plan.metadata.title.as_deref(), Some("Deck"));
        assert_eq!(plan.metadata.author, None);
    }

    #[test]
    fn test_plan_unclosed_fence_falls_back_to_content() {
        let doc = document(None, &["```rust\nfn main() {}"]);
        let analysis = ContentAnalyzer::new().aggregate(vec![doc]);
        let plan = SlidePlan::from_analysis(&analysis, PresentationConfig::default());

        assert_eq!(plan.slides[0].slide_type(), SlideType::Content);
    }

    #[test]
    fn test_plan_content_without_heading() {
        match plan_content("Plain words\nand more") {
            Slide::Content(slide) => {
                assert_eq!(slide.heading, None);
                assert_eq!(slide.content, "Plain words\nand more");
            }
            other => panic!("expected content slide, got {:?}", other),
        }
    }

    #[test]
    fn test_plan_from_json() {
        let json = r#"{
            "slides": [{"type": "section", "title": "Intro"}],
            "config": {"theme": "uncover"}
        }"#;
        let plan: SlidePlan = serde_json::from_str(json).unwrap();

        assert_eq!(plan.slides.len(), 1);
        assert_eq!(plan.config.theme, "uncover");
        assert_eq!(plan.metadata, PresentationMetadata::default());
    }
}
