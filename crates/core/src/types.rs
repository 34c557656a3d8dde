//! Domain types produced by content analysis.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Key/value metadata parsed from a frontmatter block.
pub type Frontmatter = serde_json::Map<String, serde_json::Value>;

/// The kind of slide a block of markdown represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideType {
    Title,
    Content,
    Section,
    Code,
    Diagram,
}

impl SlideType {
    /// All slide types, in declaration order.
    pub const ALL: [SlideType; 5] = [
        SlideType::Title,
        SlideType::Content,
        SlideType::Section,
        SlideType::Code,
        SlideType::Diagram,
    ];

    /// The lowercase tag for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            SlideType::Title => "title",
            SlideType::Content => "content",
            SlideType::Section => "section",
            SlideType::Code => "code",
            SlideType::Diagram => "diagram",
        }
    }
}

impl fmt::Display for SlideType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single slide cut out of a markdown file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedSlide {
    /// Slide markdown.
    pub content: String,

    /// 1-based line in the source file where the slide text starts.
    pub line_number: usize,

    /// Slide-level metadata. The segmenter never fills this in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frontmatter: Option<Frontmatter>,
}

impl ParsedSlide {
    /// Create a slide starting at the given line.
    pub fn new(content: impl Into<String>, line_number: usize) -> Self {
        Self {
            content: content.into(),
            line_number,
            frontmatter: None,
        }
    }
}

/// An analyzed markdown file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Path the file was read from.
    pub path: PathBuf,

    /// The file contents exactly as read, frontmatter included.
    pub raw_content: String,

    /// File-level frontmatter. `None` when absent or empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frontmatter: Option<Frontmatter>,

    /// Slides in file order.
    pub slides: Vec<ParsedSlide>,
}

impl Document {
    /// Look up a string-valued frontmatter key.
    pub fn frontmatter_str(&self, key: &str) -> Option<&str> {
        self.frontmatter
            .as_ref()
            .and_then(|fm| fm.get(key))
            .and_then(|v| v.as_str())
    }
}

/// A fenced code block found on a slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeBlock {
    /// Index of the slide within its own file.
    pub slide_index: usize,

    /// Language tag of the fence, empty when absent.
    pub language: String,

    /// Trimmed body of the fence.
    pub code: String,

    /// Whether the block should be shown with line numbers.
    pub line_numbers: bool,
}

/// A diagram that the renderer has to draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramRequirement {
    /// Index of the slide within its own file.
    pub slide_index: usize,

    /// Diagram language. Always `mermaid`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Trimmed diagram source.
    pub content: String,
}

/// A coarse grouping of slides used in the structure summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub title: String,
    pub slide_count: usize,
    pub types: Vec<SlideType>,
}

/// Suggested shape of the presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideStructure {
    /// Whether any slide classified as a title slide.
    pub has_title: bool,

    /// Section dividers in presentation order.
    pub sections: Vec<Section>,

    /// Estimated talk length in minutes.
    pub estimated_duration: usize,
}

/// Aggregate result of analyzing a content directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentAnalysis {
    /// Analyzed files in directory listing order.
    pub files: Vec<Document>,

    /// Number of slides across all files.
    pub total_slides: usize,

    pub suggested_structure: SlideStructure,

    /// Code blocks from all files. `slide_index` is local to each file.
    pub code_blocks: Vec<CodeBlock>,

    /// Diagrams from all files. `slide_index` is local to each file.
    pub diagrams: Vec<DiagramRequirement>,
}

/// Minutes of talk time for a number of slides, at 1.5 minutes per slide.
pub fn estimate_duration(total_slides: usize) -> usize {
    (total_slides * 3).div_ceil(2)
}
