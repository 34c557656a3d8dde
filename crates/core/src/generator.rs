//! Marp markdown generation.
//!
//! Turns a slide plan back into a single markdown document: a fixed-key
//! frontmatter block followed by every slide, separated by `---` lines.
//! Layout hints are written as HTML comment directives.

use crate::config::PresentationConfig;
use crate::plan::SlidePlan;
use crate::slide::{
    CodeSlide, ContentLayout, ContentSlide, DiagramSlide, SectionSlide, Slide, TitleSlide,
};

/// Separator placed between generated slides.
pub const GENERATED_SEPARATOR: &str = "\n\n---\n\n";

const LEAD_CLASS: &str = "<!-- _class: lead -->";
const NO_PAGINATION: &str = "<!-- _paginate: false -->";

/// Renders one kind of slide as markdown.
pub trait SlideMarkup {
    fn to_markup(&self) -> String;
}

/// Generator for Marp-compatible markdown.
#[derive(Debug, Clone, Default)]
pub struct MarkupGenerator;

impl MarkupGenerator {
    /// Create a new generator.
    pub fn new() -> Self {
        Self
    }

    /// Build the deck frontmatter from configuration.
    ///
    /// # Example output
    /// ```text
    /// ---
    /// marp: true
    /// theme: default
    /// size: 16:9
    /// paginate: true
    /// footer: "ACME \"Inc\""
    /// ---
    /// ```
    pub fn generate_frontmatter(&self, config: &PresentationConfig) -> String {
        let mut parts = vec![
            "---".to_string(),
            "marp: true".to_string(),
            format!("theme: {}", config.theme),
            format!("size: {}", config.aspect_ratio),
            format!("paginate: {}", config.page_numbers),
        ];

        if let Some(footer) = non_empty(&config.footer) {
            parts.push(format!("footer: \"{}\"", footer.replace('"', "\\\"")));
        }

        parts.push("---".to_string());
        parts.join("\n")
    }

    /// Generate markup for a single slide.
    pub fn generate_slide(&self, slide: &Slide) -> String {
        match slide {
            Slide::Title(s) => s.to_markup(),
            Slide::Content(s) => s.to_markup(),
            Slide::Section(s) => s.to_markup(),
            Slide::Code(s) => s.to_markup(),
            Slide::Diagram(s) => s.to_markup(),
        }
    }

    /// Generate the complete deck. No separator follows the last slide.
    pub fn generate(&self, plan: &SlidePlan) -> String {
        let slides: Vec<String> = plan
            .slides
            .iter()
            .map(|slide| self.generate_slide(slide))
            .collect();

        format!(
            "{}\n\n{}",
            self.generate_frontmatter(&plan.config),
            slides.join(GENERATED_SEPARATOR)
        )
    }
}

impl SlideMarkup for TitleSlide {
    fn to_markup(&self) -> String {
        let mut parts = vec![LEAD_CLASS.to_string(), String::new(), format!("# {}", self.title)];

        if let Some(subtitle) = non_empty(&self.subtitle) {
            parts.push(String::new());
            parts.push(format!("## {}", subtitle));
        }
        for line in [non_empty(&self.author), non_empty(&self.date)]
            .into_iter()
            .flatten()
        {
            parts.push(String::new());
            parts.push(line.to_string());
        }

        parts.join("\n")
    }
}

impl SlideMarkup for ContentSlide {
    fn to_markup(&self) -> String {
        let mut parts = Vec::new();

        if self.layout != ContentLayout::Default {
            parts.push(format!("<!-- _class: {} -->", self.layout.class_name()));
            parts.push(String::new());
        }
        push_heading(&mut parts, &self.heading);

        if !self.bullets.is_empty() {
            parts.extend(self.bullets.iter().map(|bullet| format!("- {}", bullet)));
        } else if !self.content.is_empty() {
            parts.push(self.content.clone());
        }

        parts.join("\n")
    }
}

impl SlideMarkup for SectionSlide {
    fn to_markup(&self) -> String {
        let mut parts = vec![NO_PAGINATION.to_string(), LEAD_CLASS.to_string()];

        if let Some(background) = non_empty(&self.background) {
            parts.push(format!("<!-- _backgroundColor: {} -->", background));
        }
        parts.push(String::new());
        parts.push(format!("# {}", self.title));

        parts.join("\n")
    }
}

impl SlideMarkup for CodeSlide {
    fn to_markup(&self) -> String {
        let mut parts = Vec::new();
        push_heading(&mut parts, &self.heading);
        push_fence(&mut parts, &self.language, &self.code);
        parts.join("\n")
    }
}

impl SlideMarkup for DiagramSlide {
    fn to_markup(&self) -> String {
        let mut parts = Vec::new();
        push_heading(&mut parts, &self.heading);
        push_fence(&mut parts, crate::extract::MERMAID, &self.diagram);
        parts.join("\n")
    }
}

/// Treat empty strings like missing values.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn push_heading(parts: &mut Vec<String>, heading: &Option<String>) {
    if let Some(heading) = non_empty(heading) {
        parts.push(format!("## {}", heading));
        parts.push(String::new());
    }
}

fn push_fence(parts: &mut Vec<String>, language: &str, body: &str) {
    parts.push(format!("```{}", language));
    parts.push(body.to_string());
    parts.push("```".to_string());
}
