//! Slide type detection.
//!
//! Classification is an ordered list of rules. The first rule whose
//! predicate matches decides the type; a slide no rule claims is a plain
//! content slide.

use crate::markdown::{count_words, extract_headings};
use crate::types::SlideType;
use regex::Regex;
use std::sync::LazyLock;

/// A section slide must have fewer words than this.
pub const SECTION_WORD_LIMIT: usize = 15;

/// Opening fence tagged `mermaid`, any case.
static DIAGRAM_FENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)```mermaid\b").unwrap());

/// Opening fence with an optional language tag.
static CODE_FENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"```\w*\n").unwrap());

static BULLET_LIST_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*[-*+]\s").unwrap());

static NUMBERED_LIST_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*\d+\.\s").unwrap());

/// One step of the classification cascade.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationRule {
    /// Short name used in logs and tests.
    pub name: &'static str,

    /// Type assigned when the predicate matches.
    pub slide_type: SlideType,

    predicate: fn(&str) -> bool,
}

impl ClassificationRule {
    /// Whether this rule claims the given slide.
    pub fn matches(&self, content: &str) -> bool {
        (self.predicate)(content)
    }
}

/// The cascade, most specific first.
pub static RULES: [ClassificationRule; 5] = [
    ClassificationRule {
        name: "diagram-fence",
        slide_type: SlideType::Diagram,
        predicate: has_diagram_fence,
    },
    ClassificationRule {
        name: "code-fence",
        slide_type: SlideType::Code,
        predicate: has_code_fence,
    },
    ClassificationRule {
        name: "title-headings",
        slide_type: SlideType::Title,
        predicate: is_title,
    },
    ClassificationRule {
        name: "section-heading",
        slide_type: SlideType::Section,
        predicate: is_section,
    },
    ClassificationRule {
        name: "list",
        slide_type: SlideType::Content,
        predicate: has_list,
    },
];

/// Detect the type of a slide from its markdown.
pub fn classify(content: &str) -> SlideType {
    match RULES.iter().find(|rule| rule.matches(content)) {
        Some(rule) => {
            log::trace!("slide matched rule '{}'", rule.name);
            rule.slide_type
        }
        None => SlideType::Content,
    }
}

fn has_diagram_fence(content: &str) -> bool {
    DIAGRAM_FENCE_REGEX.is_match(content.trim())
}

fn has_code_fence(content: &str) -> bool {
    CODE_FENCE_REGEX.is_match(content.trim())
}

/// First two lines are an H1 followed by an H2.
fn is_title(content: &str) -> bool {
    if extract_headings(content).len() < 2 {
        return false;
    }

    let mut lines = layout_lines(content);
    matches!(
        (lines.next(), lines.next()),
        (Some(first), Some(second)) if heading_level(first) == Some(1) && heading_level(second) == Some(2)
    )
}

/// A lone H1 with little else on the slide.
fn is_section(content: &str) -> bool {
    extract_headings(content).len() == 1
        && layout_lines(content).next().and_then(heading_level) == Some(1)
        && count_words(content) < SECTION_WORD_LIMIT
}

fn has_list(content: &str) -> bool {
    BULLET_LIST_REGEX.is_match(content) || NUMBERED_LIST_REGEX.is_match(content)
}

/// Non-blank lines, skipping `<!-- ... -->` renderer directives.
fn layout_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .trim()
        .lines()
        .filter(|line| !line.trim().is_empty() && !is_directive(line))
}

fn is_directive(line: &str) -> bool {
    let line = line.trim();
    line.starts_with("<!--") && line.ends_with("-->")
}

/// Level of an ATX heading line, if it is one.
fn heading_level(line: &str) -> Option<usize> {
    let level = line.chars().take_while(|&c| c == '#').count();
    let rest = &line[level..];
    if (1..=6).contains(&level) && rest.starts_with(char::is_whitespace) {
        Some(level)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_diagram() {
        assert_eq!(classify("```mermaid\ngraph TD\nA-->B\n```"), SlideType::Diagram);
        assert_eq!(classify("## Flow\n\n```Mermaid\ngraph LR\n```"), SlideType::Diagram);
    }

    #[test]
    fn test_detect_code() {
        assert_eq!(classify("```js\nconst x=1\n```"), SlideType::Code);
        assert_eq!(classify("```\nplain\n```"), SlideType::Code);
    }

    #[test]
    fn test_diagram_wins_over_code() {
        let content = "```rust\nfn main() {}\n```\n\n```mermaid\ngraph TD\n```";
        assert_eq!(classify(content), SlideType::Diagram);
    }

    #[test]
    fn test_detect_title() {
        assert_eq!(classify("# Main Title\n## Subtitle"), SlideType::Title);
        assert_eq!(classify("\n\n# Main Title\n\n## Subtitle\n\nJane Doe"), SlideType::Title);
    }

    #[test]
    fn test_title_needs_h1_then_h2() {
        assert_eq!(classify("## Subtitle\n# Main Title"), SlideType::Content);
        assert_eq!(classify("# One\n# Two"), SlideType::Content);
        assert_eq!(classify("# One\nintro\n## Two"), SlideType::Content);
    }

    #[test]
    fn test_detect_section() {
        assert_eq!(classify("# Section Title"), SlideType::Section);
        assert_eq!(classify("# Part Two\n\nA short teaser."), SlideType::Section);
    }

    #[test]
    fn test_section_word_limit() {
        // 14 words including the heading
        let short = "# Intro\nOne two three four five six seven eight nine ten eleven twelve thirteen";
        assert_eq!(classify(short), SlideType::Section);

        let long = "# Intro\nOne two three four five six seven eight nine ten eleven twelve thirteen fourteen";
        assert_eq!(classify(long), SlideType::Content);
    }

    #[test]
    fn test_section_requires_h1() {
        assert_eq!(classify("## Heading"), SlideType::Content);
    }

    #[test]
    fn test_detect_content() {
        assert_eq!(classify("## Heading\n\n- Point 1\n- Point 2"), SlideType::Content);
        assert_eq!(classify("1. first\n2. second"), SlideType::Content);
        assert_eq!(classify("Just some plain text"), SlideType::Content);
        assert_eq!(classify(""), SlideType::Content);
    }

    #[test]
    fn test_directives_do_not_count_as_lines() {
        let title = "<!-- _class: lead -->\n\n# T\n\n## S";
        assert_eq!(classify(title), SlideType::Title);

        let section = "<!-- _paginate: false -->\n<!-- _class: lead -->\n\n# Part";
        assert_eq!(classify(section), SlideType::Section);
    }

    #[test]
    fn test_rules_in_precedence_order() {
        let order: Vec<SlideType> = RULES.iter().map(|r| r.slide_type).collect();
        assert_eq!(
            order,
            vec![
                SlideType::Diagram,
                SlideType::Code,
                SlideType::Title,
                SlideType::Section,
                SlideType::Content,
            ]
        );
    }

    #[test]
    fn test_individual_rules() {
        let rule = |name: &str| RULES.iter().find(|r| r.name == name).unwrap();

        assert!(rule("diagram-fence").matches("```mermaid\nx\n```"));
        assert!(!rule("diagram-fence").matches("```mermaidx\nx\n```"));
        // A mermaid fence is also a code fence; precedence keeps it a diagram.
        assert!(rule("code-fence").matches("```mermaid\nx\n```"));
        assert!(!rule("code-fence").matches("inline ``` ticks"));
        assert!(rule("list").matches("text\n  * nested"));
        assert!(!rule("list").matches("-not a list"));
    }

    #[test]
    fn test_classify_is_deterministic() {
        let inputs = ["", "# A\n## B", "```py\nx\n```", "- a", "# Only"];
        for input in inputs {
            assert_eq!(classify(input), classify(input));
        }
    }

    #[test]
    fn test_heading_level() {
        assert_eq!(heading_level("# One"), Some(1));
        assert_eq!(heading_level("### Three"), Some(3));
        assert_eq!(heading_level("#nospace"), None);
        assert_eq!(heading_level("####### seven"), None);
        assert_eq!(heading_level("plain"), None);
    }
}
