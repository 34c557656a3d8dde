//! Text utilities for slide markdown.
//!
//! Splits a document into slides, pulls out headings, and counts the words
//! a reader would actually see once markdown syntax is stripped.

use crate::types::ParsedSlide;
use regex::Regex;
use std::sync::LazyLock;

/// A `---` line between two slides, newlines included.
pub const SLIDE_SEPARATOR: &str = "\n---\n";

/// Regex matching a fenced code block, shortest body first.
static FENCED_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```[\s\S]*?```").unwrap());

/// Regex matching an ATX heading on its own line, capturing its text.
static HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,6}\s+(.+)$").unwrap());

static INLINE_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`[^`]+`").unwrap());

static LINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap());

static IMAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\([^)]+\)").unwrap());

/// Emphasis markers, strongest first so `**` is not read as two `*`.
static EMPHASIS_REGEXES: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        Regex::new(r"\*\*(.*?)\*\*").unwrap(),
        Regex::new(r"__(.*?)__").unwrap(),
        Regex::new(r"\*(.*?)\*").unwrap(),
        Regex::new(r"_(.*?)_").unwrap(),
    ]
});

static HEADING_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,6}\s+").unwrap());

static BULLET_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*[-*+]\s+").unwrap());

static NUMBERED_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*\d+\.\s+").unwrap());

/// Split markdown into slide texts.
///
/// A document without any separator comes back untouched as a single
/// slide, even when empty. Otherwise each piece is trimmed and empty
/// pieces are dropped.
///
/// Separator lines inside fenced code blocks still split the slide.
pub fn segment(content: &str) -> Vec<String> {
    parse_slides(content, 1)
        .into_iter()
        .map(|slide| slide.content)
        .collect()
}

/// Split markdown into slides, recording where each one starts.
///
/// `first_line` is the source line the content begins on, so callers that
/// stripped a frontmatter block can report lines of the original file.
/// A slide's line number points at its first non-blank line.
pub fn parse_slides(content: &str, first_line: usize) -> Vec<ParsedSlide> {
    if !content.contains(SLIDE_SEPARATOR) {
        return vec![ParsedSlide::new(content, first_line)];
    }

    let mut slides = Vec::new();
    let mut line = first_line;

    for piece in content.split(SLIDE_SEPARATOR) {
        let trimmed = piece.trim();
        if !trimmed.is_empty() {
            let leading = &piece[..piece.len() - piece.trim_start().len()];
            let skipped_lines = leading.matches('\n').count();
            slides.push(ParsedSlide::new(trimmed, line + skipped_lines));
        }

        // The piece's own lines, then the `---` line itself.
        line += piece.matches('\n').count() + 2;
    }

    slides
}

/// Collect the text of every heading outside fenced code blocks.
pub fn extract_headings(content: &str) -> Vec<String> {
    let without_code = FENCED_BLOCK_REGEX.replace_all(content, "");

    HEADING_REGEX
        .captures_iter(&without_code)
        .map(|caps| caps[1].trim().to_string())
        .collect()
}

/// Count the visible words in markdown text.
///
/// Code, link targets, images and formatting markers are stripped first.
/// A token only counts when it contains a letter, digit or underscore.
pub fn count_words(content: &str) -> usize {
    if content.trim().is_empty() {
        return 0;
    }

    let mut text = FENCED_BLOCK_REGEX.replace_all(content, "").into_owned();
    text = INLINE_CODE_REGEX.replace_all(&text, "").into_owned();
    text = LINK_REGEX.replace_all(&text, "$1").into_owned();
    text = IMAGE_REGEX.replace_all(&text, "").into_owned();
    for regex in EMPHASIS_REGEXES.iter() {
        text = regex.replace_all(&text, "$1").into_owned();
    }
    text = HEADING_MARKER_REGEX.replace_all(&text, "").into_owned();
    text = BULLET_MARKER_REGEX.replace_all(&text, "").into_owned();
    text = NUMBERED_MARKER_REGEX.replace_all(&text, "").into_owned();

    text.split_whitespace()
        .filter(|word| word.chars().any(|c| c.is_alphanumeric() || c == '_'))
        .count()
}
