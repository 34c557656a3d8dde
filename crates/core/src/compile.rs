//! Compilation of generated markdown through an external renderer.

use crate::config::{OutputFormat, PresentationConfig};
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// An external program that turns slide markdown into a finished file.
pub trait Renderer {
    /// Render `markdown_path` into `output_path`, returning the exit code.
    fn render(
        &self,
        markdown_path: &Path,
        output_path: &Path,
        format: OutputFormat,
        config: &PresentationConfig,
    ) -> Result<i32>;
}

/// Validates compile requests before handing them to a renderer.
#[derive(Debug, Clone)]
pub struct SlideCompiler<R> {
    renderer: R,
}

impl<R: Renderer> SlideCompiler<R> {
    /// Create a compiler backed by the given renderer.
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// Access the underlying renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Compile a markdown file into `format`, returning the output path.
    ///
    /// PPTX is refused before anything else happens. Renderer failures are
    /// reported with their exit code and never retried.
    pub fn compile(
        &self,
        markdown_path: &Path,
        output_path: &Path,
        format: OutputFormat,
        config: &PresentationConfig,
    ) -> Result<PathBuf> {
        if format == OutputFormat::Pptx {
            return Err(Error::UnsupportedFormat(format.to_string()));
        }

        if !markdown_path.exists() {
            return Err(Error::FileNotFound(markdown_path.to_path_buf()));
        }

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        log::debug!(
            "Compiling {} to {} ({})",
            markdown_path.display(),
            output_path.display(),
            format
        );
        let code = self
            .renderer
            .render(markdown_path, output_path, format, config)?;
        if code != 0 {
            return Err(Error::RenderFailed(code));
        }

        Ok(output_path.to_path_buf())
    }
}
