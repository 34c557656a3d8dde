//! Core analysis and generation for markdown slide decks.
//!
//! Splits markdown into slides, classifies and extracts their content, and
//! generates Marp markdown from typed slide plans.

pub mod analyzer;
pub mod classify;
pub mod compile;
pub mod config;
pub mod error;
pub mod extract;
pub mod frontmatter;
pub mod generator;
pub mod markdown;
pub mod plan;
pub mod slide;
pub mod types;

pub use analyzer::{AnalysisObserver, ContentAnalyzer};
pub use classify::classify;
pub use compile::{Renderer, SlideCompiler};
pub use config::{AspectRatio, OutputFormat, PresentationConfig};
pub use error::{Error, Result};
pub use extract::{extract_code_blocks, extract_diagrams};
pub use generator::{MarkupGenerator, SlideMarkup};
pub use markdown::{count_words, extract_headings, segment};
pub use plan::{PresentationMetadata, SlidePlan};
pub use slide::{
    CodeSlide, ContentLayout, ContentSlide, DiagramSlide, SectionSlide, Slide, TitleSlide,
};
pub use types::{
    CodeBlock, ContentAnalysis, DiagramRequirement, Document, Frontmatter, ParsedSlide, Section,
    SlideStructure, SlideType,
};
