//! Marp CLI renderer implementation.

use slides_core::{OutputFormat, PresentationConfig, Renderer, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Program name looked up on `PATH` by default.
pub const DEFAULT_PROGRAM: &str = "marp";

/// Renderer that shells out to the Marp CLI.
#[derive(Debug, Clone)]
pub struct MarpRenderer {
    program: PathBuf,
}

impl MarpRenderer {
    /// Create a renderer using `marp` from `PATH`.
    pub fn new() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_PROGRAM),
        }
    }

    /// Use a specific Marp executable.
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// The executable this renderer runs.
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for MarpRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for MarpRenderer {
    fn render(
        &self,
        markdown_path: &Path,
        output_path: &Path,
        format: OutputFormat,
        _config: &PresentationConfig,
    ) -> Result<i32> {
        let args = marp_args(markdown_path, output_path, format);
        log::debug!("Running {} {:?}", self.program.display(), args);

        let status = Command::new(&self.program).args(&args).status()?;

        // Killed by a signal: no exit code to report.
        Ok(status.code().unwrap_or(-1))
    }
}

/// Build the Marp command line for one output file.
fn marp_args(markdown_path: &Path, output_path: &Path, format: OutputFormat) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![markdown_path.into(), "--html".into()];

    if format == OutputFormat::Pdf {
        args.push("--pdf".into());
    }

    args.push("--output".into());
    args.push(output_path.into());
    args.push("--allow-local-files".into());
    args
}
