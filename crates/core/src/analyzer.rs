//! Content analysis of markdown files and directories.

use crate::classify::classify;
use crate::error::{Error, Result};
use crate::extract::{extract_code_blocks, extract_diagrams};
use crate::frontmatter::{parse_frontmatter, split_frontmatter};
use crate::markdown::{extract_headings, parse_slides};
use crate::types::{
    estimate_duration, ContentAnalysis, Document, Section, SlideStructure, SlideType,
};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Extension of the files picked up from a content directory.
pub const MARKDOWN_EXTENSION: &str = "md";

/// Receives progress notifications during analysis.
///
/// Every method has an empty default. File notifications may arrive from
/// several threads at once and in any order.
pub trait AnalysisObserver: Send + Sync {
    /// A file has been read and segmented.
    fn file_analyzed(&self, _document: &Document) {}

    /// A slide has been classified during aggregation.
    fn slide_classified(&self, _path: &Path, _slide_index: usize, _slide_type: SlideType) {}
}

/// Analyzes markdown files into slides and a presentation summary.
#[derive(Clone, Default)]
pub struct ContentAnalyzer {
    observer: Option<Arc<dyn AnalysisObserver>>,
}

impl ContentAnalyzer {
    /// Create an analyzer with no observer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report progress to the given observer.
    pub fn with_observer(mut self, observer: Arc<dyn AnalysisObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Read and segment a single markdown file.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD.
    pub fn analyze_file(&self, path: &Path) -> Result<Document> {
        let bytes = fs::read(path).map_err(|e| Error::from_io(path, e))?;
        let raw_content = decode(path, bytes);
        let document = analyze_source(path, raw_content);

        log::debug!(
            "Analyzed {}: {} slides",
            document.path.display(),
            document.slides.len()
        );
        if let Some(observer) = &self.observer {
            observer.file_analyzed(&document);
        }

        Ok(document)
    }

    /// Analyze every `.md` file directly inside `dir`.
    ///
    /// Subdirectories are not descended into. Files are read in parallel,
    /// but results keep file-name order. Any failing file aborts the run.
    pub fn analyze_directory(&self, dir: &Path) -> Result<ContentAnalysis> {
        let paths = markdown_files(dir)?;
        log::debug!("Found {} markdown files in {}", paths.len(), dir.display());

        let files = paths
            .par_iter()
            .map(|path| self.analyze_file(path))
            .collect::<Result<Vec<_>>>()?;

        Ok(self.aggregate(files))
    }

    /// Fold analyzed files into the presentation-level summary.
    pub fn aggregate(&self, files: Vec<Document>) -> ContentAnalysis {
        let mut analysis = ContentAnalysis::default();
        let mut structure = SlideStructure::default();

        for file in &files {
            for (index, slide) in file.slides.iter().enumerate() {
                analysis.total_slides += 1;
                analysis
                    .code_blocks
                    .extend(extract_code_blocks(&slide.content, index));
                analysis
                    .diagrams
                    .extend(extract_diagrams(&slide.content, index));

                let slide_type = classify(&slide.content);
                if let Some(observer) = &self.observer {
                    observer.slide_classified(&file.path, index, slide_type);
                }

                match slide_type {
                    SlideType::Title => structure.has_title = true,
                    SlideType::Section => {
                        // Each divider is its own one-slide section.
                        if let Some(title) = extract_headings(&slide.content).into_iter().next() {
                            structure.sections.push(Section {
                                title,
                                slide_count: 1,
                                types: vec![slide_type],
                            });
                        }
                    }
                    _ => {}
                }
            }
        }

        structure.estimated_duration = estimate_duration(analysis.total_slides);
        analysis.suggested_structure = structure;
        analysis.files = files;
        analysis
    }
}

fn decode(path: &Path, bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            log::warn!(
                "{} is not valid UTF-8 (at byte {}), decoding lossily",
                path.display(),
                e.utf8_error().valid_up_to()
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

/// Build a document from already-read file contents.
fn analyze_source(path: &Path, raw_content: String) -> Document {
    let split = split_frontmatter(&raw_content);

    let frontmatter = split.yaml.and_then(|yaml| match parse_frontmatter(yaml) {
        Ok(map) => map,
        Err(e) => {
            log::warn!("Ignoring malformed frontmatter in {}: {}", path.display(), e);
            None
        }
    });
    let slides = parse_slides(split.body, split.body_line);

    Document {
        path: path.to_path_buf(),
        raw_content,
        frontmatter,
        slides,
    }
}

/// List the markdown files directly inside `dir`, sorted by file name.
///
/// Symlinks are followed; a dangling link is kept and fails when read.
fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_error = |source: std::io::Error| Error::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        let path = entry.path();
        let is_markdown = path.extension().and_then(|e| e.to_str()) == Some(MARKDOWN_EXTENSION);

        if is_markdown && !path.is_dir() {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}
