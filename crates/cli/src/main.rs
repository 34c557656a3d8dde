//! CLI tool for turning a directory of markdown files into a slide deck.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use slides_core::{
    AnalysisObserver, ContentAnalysis, ContentAnalyzer, Document, MarkupGenerator, OutputFormat,
    PresentationConfig, SlideCompiler, SlidePlan, SlideType,
};
use slides_marp::MarpRenderer;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Name of the generated markdown file inside the output directory.
const GENERATED_MARKDOWN: &str = "slides.md";

/// Generate slide decks from markdown.
#[derive(Parser, Debug)]
#[command(name = "slides-gen")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a directory of markdown files and print its structure
    Analyze {
        /// Directory containing .md files
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Print the full analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate Marp markdown and compile it
    Generate {
        /// Directory containing .md files
        #[arg(default_value = ".")]
        path: PathBuf,

        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// JSON slide plan to use instead of planning from the analysis
        #[arg(long)]
        plan: Option<PathBuf>,

        /// Output directory (default: from config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format(s): html, pdf
        #[arg(short, long = "format")]
        formats: Vec<OutputFormat>,

        /// Print the generated markdown to stdout instead of compiling
        #[arg(short, long)]
        print: bool,

        /// Marp executable
        #[arg(long, default_value = slides_marp::renderer::DEFAULT_PROGRAM)]
        marp: PathBuf,
    },
}

/// Logs analysis progress.
struct LogObserver;

impl AnalysisObserver for LogObserver {
    fn file_analyzed(&self, document: &Document) {
        log::info!(
            "Analyzed {} ({} slides)",
            document.path.display(),
            document.slides.len()
        );
    }

    fn slide_classified(&self, path: &Path, slide_index: usize, slide_type: SlideType) {
        log::debug!("  {} slide {}: {}", path.display(), slide_index + 1, slide_type);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let analyzer = ContentAnalyzer::new().with_observer(Arc::new(LogObserver));

    match args.command {
        Command::Analyze { path, json } => {
            let analysis = analyze(&analyzer, &path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                print_summary(&analysis);
            }
        }
        Command::Generate {
            path,
            config,
            plan,
            output,
            formats,
            print,
            marp,
        } => {
            let config_file = config
                .map(|file| {
                    PresentationConfig::from_json_file(&file)
                        .with_context(|| format!("Failed to load config {}", file.display()))
                })
                .transpose()?;

            let plan = match plan {
                Some(file) => {
                    let mut plan = SlidePlan::from_json_file(&file)
                        .with_context(|| format!("Failed to load plan {}", file.display()))?;
                    plan.config = resolve_config(config_file, plan.config, output, formats);
                    plan
                }
                None => {
                    let config =
                        resolve_config(config_file, PresentationConfig::default(), output, formats);
                    SlidePlan::from_analysis(&analyze(&analyzer, &path)?, config)
                }
            };
            let config = &plan.config;

            let markdown = MarkupGenerator::new().generate(&plan);
            if print {
                print!("{}", markdown);
                return Ok(());
            }

            let markdown_path = write_markdown(&config.output_dir, &markdown)?;
            let compiler = SlideCompiler::new(MarpRenderer::new().with_program(marp));

            for format in &config.formats {
                let output_path = markdown_path.with_extension(format.extension());
                let written = compiler
                    .compile(&markdown_path, &output_path, *format, config)
                    .with_context(|| format!("Failed to compile {}", format))?;
                eprintln!("Written to: {}", written.display());
            }
        }
    }

    Ok(())
}

/// Pick the base configuration and apply command-line overrides.
///
/// A `--config` file replaces `fallback` (the plan's own config, or the
/// defaults). `-o` and `-f` override single fields when given.
fn resolve_config(
    config_file: Option<PresentationConfig>,
    fallback: PresentationConfig,
    output: Option<PathBuf>,
    formats: Vec<OutputFormat>,
) -> PresentationConfig {
    let mut config = config_file.unwrap_or(fallback);
    if let Some(dir) = output {
        config.output_dir = dir;
    }
    if !formats.is_empty() {
        config.formats = formats;
    }
    config
}

/// Analyze a content directory.
fn analyze(analyzer: &ContentAnalyzer, path: &Path) -> Result<ContentAnalysis> {
    analyzer
        .analyze_directory(path)
        .with_context(|| format!("Failed to analyze {}", path.display()))
}

/// Print a human-readable structure summary.
fn print_summary(analysis: &ContentAnalysis) {
    let structure = &analysis.suggested_structure;

    println!("Files:              {}", analysis.files.len());
    println!("Slides:             {}", analysis.total_slides);
    println!("Title slide:        {}", if structure.has_title { "yes" } else { "no" });
    println!("Code blocks:        {}", analysis.code_blocks.len());
    println!("Diagrams:           {}", analysis.diagrams.len());
    println!("Estimated duration: {} min", structure.estimated_duration);

    if !structure.sections.is_empty() {
        println!("Sections:");
        for section in &structure.sections {
            println!("  - {}", section.title);
        }
    }
}

/// Write the generated markdown into the output directory.
fn write_markdown(output_dir: &Path, markdown: &str) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).with_context(|| {
        format!("Failed to create output directory: {}", output_dir.display())
    })?;

    let path = output_dir.join(GENERATED_MARKDOWN);
    fs::write(&path, markdown).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}
