//! Frontmatter splitting.
//!
//! A file may open with a YAML block fenced by `---` lines. The block is
//! cut off before slide segmentation so its delimiters are never mistaken
//! for slide separators.

use crate::types::Frontmatter;

const DELIMITER: &str = "---";

/// A file split into its frontmatter block and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontmatterSplit<'a> {
    /// YAML between the delimiters, `None` when the file has no block.
    pub yaml: Option<&'a str>,

    /// Everything after the closing delimiter line.
    pub body: &'a str,

    /// 1-based source line on which the body starts.
    pub body_line: usize,
}

/// Separate a leading frontmatter block from the rest of the file.
///
/// The first line must be exactly `---` and a later line must close the
/// block; otherwise the whole input is body.
pub fn split_frontmatter(raw: &str) -> FrontmatterSplit<'_> {
    let no_block = FrontmatterSplit {
        yaml: None,
        body: raw,
        body_line: 1,
    };

    let mut lines = raw.split_inclusive('\n');
    let yaml_start = match lines.next() {
        Some(first) if strip_eol(first) == DELIMITER && first.ends_with('\n') => first.len(),
        _ => return no_block,
    };

    let mut offset = yaml_start;
    let mut line_count = 1;

    for line in lines {
        line_count += 1;
        if strip_eol(line) == DELIMITER {
            return FrontmatterSplit {
                yaml: Some(&raw[yaml_start..offset]),
                body: &raw[offset + line.len()..],
                body_line: line_count + 1,
            };
        }
        offset += line.len();
    }

    no_block
}

/// Parse a frontmatter block into a key/value map.
///
/// Blank blocks and empty mappings yield `None`, so callers cannot tell
/// them apart from a missing block.
pub fn parse_frontmatter(yaml: &str) -> Result<Option<Frontmatter>, serde_saphyr::Error> {
    if yaml.trim().is_empty() {
        return Ok(None);
    }

    let map: Frontmatter = serde_saphyr::from_str(yaml)?;
    Ok(if map.is_empty() { None } else { Some(map) })
}

fn strip_eol(line: &str) -> &str {
    line.trim_end_matches(|c| c == '\n' || c == '\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_with_frontmatter() {
        let raw = "---\ntitle: Deck\nauthor: Ana\n---\n# Slide 1\n";
        let split = split_frontmatter(raw);

        assert_eq!(split.yaml, Some("title: Deck\nauthor: Ana\n"));
        assert_eq!(split.body, "# Slide 1\n");
        assert_eq!(split.body_line, 5);
    }

    #[test]
    fn test_split_without_frontmatter() {
        let raw = "# Slide 1\n---\n# Slide 2";
        let split = split_frontmatter(raw);

        assert_eq!(split.yaml, None);
        assert_eq!(split.body, raw);
        assert_eq!(split.body_line, 1);
    }

    #[test]
    fn test_split_unterminated_block_is_body() {
        let raw = "---\ntitle: Deck\n# Slide";
        let split = split_frontmatter(raw);

        assert_eq!(split.yaml, None);
        assert_eq!(split.body, raw);
    }

    #[test]
    fn test_split_empty_block() {
        let split = split_frontmatter("---\n---\nBody");
        assert_eq!(split.yaml, Some(""));
        assert_eq!(split.body, "Body");
        assert_eq!(split.body_line, 3);
    }

    #[test]
    fn test_split_crlf() {
        let split = split_frontmatter("---\r\ntitle: Deck\r\n---\r\nBody");
        assert_eq!(split.yaml, Some("title: Deck\r\n"));
        assert_eq!(split.body, "Body");
    }

    #[test]
    fn test_split_requires_exact_delimiter() {
        assert_eq!(split_frontmatter("----\na: 1\n----\nBody").yaml, None);
        assert_eq!(split_frontmatter("").yaml, None);
    }

    #[test]
    fn test_parse_frontmatter() {
        let map = parse_frontmatter("title: Test Presentation\nauthor: Test Author\n")
            .unwrap()
            .unwrap();
        assert_eq!(map["title"], "Test Presentation");
        assert_eq!(map["author"], "Test Author");
    }

    #[test]
    fn test_parse_frontmatter_keeps_key_order() {
        let map = parse_frontmatter("title: Deck\ndate: 2024-05-01\ncount: 3\n")
            .unwrap()
            .unwrap();
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["title", "date", "count"]);
    }

    #[test]
    fn test_parse_empty_frontmatter() {
        assert_eq!(parse_frontmatter("").unwrap(), None);
        assert_eq!(parse_frontmatter("  \n").unwrap(), None);
        assert_eq!(parse_frontmatter("{}").unwrap(), None);
    }

    #[test]
    fn test_parse_non_mapping_is_error() {
        assert!(parse_frontmatter("- just\n- a list\n").is_err());
    }
}
