//! Code block and diagram extraction.
//!
//! Both extractors walk the same fenced blocks. Mermaid fences go to the
//! diagram list, every other fence to the code list.

use crate::types::{CodeBlock, DiagramRequirement};
use regex::Regex;
use std::sync::LazyLock;

/// Diagram language recognised in fence tags.
pub const MERMAID: &str = "mermaid";

/// Regex for a complete fence: optional tag, newline, body, closing fence.
static FENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(\w*)\n([\s\S]*?)```").unwrap());

/// A fenced block as found in the text.
struct Fence<'a> {
    tag: &'a str,
    body: &'a str,
}

impl Fence<'_> {
    fn is_mermaid(&self) -> bool {
        self.tag.eq_ignore_ascii_case(MERMAID)
    }
}

fn fences(content: &str) -> impl Iterator<Item = Fence<'_>> {
    FENCE_REGEX.captures_iter(content).map(|caps| Fence {
        tag: caps.get(1).map_or("", |m| m.as_str()),
        body: caps.get(2).map_or("", |m| m.as_str()),
    })
}

/// Extract every non-mermaid fenced block, in document order.
pub fn extract_code_blocks(content: &str, slide_index: usize) -> Vec<CodeBlock> {
    fences(content)
        .filter(|fence| !fence.is_mermaid())
        .map(|fence| CodeBlock {
            slide_index,
            language: fence.tag.to_string(),
            code: fence.body.trim().to_string(),
            line_numbers: true,
        })
        .collect()
}

/// Extract every mermaid fenced block, in document order.
pub fn extract_diagrams(content: &str, slide_index: usize) -> Vec<DiagramRequirement> {
    fences(content)
        .filter(|fence| fence.is_mermaid())
        .map(|fence| DiagramRequirement {
            slide_index,
            kind: MERMAID.to_string(),
            content: fence.body.trim().to_string(),
        })
        .collect()
}
