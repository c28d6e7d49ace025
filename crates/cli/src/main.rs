//! CLI tool for building and adjusting slide carousels.

use anyhow::{Context, Result};
use carousel_core::{
    is_readable, readability_score, BackgroundSource, EngineConfig, Error, FixedBackground,
    OutlineSummarizer, Project, RandomBackgrounds, SlideEngine, Summarizer, SummaryBundle,
    MIN_CONTRAST_RATIO,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Turn summaries into character-budgeted slide carousels.
#[derive(Parser, Debug)]
#[command(name = "carousel")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Engine configuration file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Maximum characters per slide (overrides the config file)
    #[arg(short, long, global = true)]
    limit: Option<usize>,

    /// Write output to this file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a project with one slide per key idea
    Split {
        /// Summary input file
        input: PathBuf,

        /// Maximum number of slides
        #[arg(short = 'n', long, default_value = "6")]
        count: usize,

        /// How to read the input file
        #[arg(short, long, value_enum, default_value = "outline")]
        format: InputFormat,

        /// Give every slide the same background instead of a random one
        #[arg(long)]
        fixed_background: bool,
    },

    /// Carry overflowing text forward into later slides
    Reflow {
        /// Project file (JSON)
        project: PathBuf,
    },

    /// Spread all slide text evenly across the slides
    Balance {
        /// Project file (JSON)
        project: PathBuf,
    },

    /// Print the contrast ratio between two hex colors
    Contrast {
        /// Text color, e.g. "#ffffff"
        text_color: String,

        /// Background accent color, e.g. "#111322"
        background_color: String,
    },

    /// Report slides over the limit and blocks with low contrast
    Check {
        /// Project file (JSON)
        project: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum InputFormat {
    /// "Slide N: ..." outline, falling back to one idea per line
    Outline,
    /// One key idea per non-empty line
    Lines,
    /// Summary bundle JSON
    Bundle,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let engine = build_engine(args.config.as_deref(), args.limit)?;

    let output = match &args.command {
        Command::Split {
            input,
            count,
            format,
            fixed_background,
        } => {
            let mut backgrounds: Box<dyn BackgroundSource> = if *fixed_background {
                Box::new(FixedBackground::default())
            } else {
                Box::new(RandomBackgrounds::new())
            };
            let project = split_file(input, *count, *format, &engine, backgrounds.as_mut())?;
            if args.verbose {
                eprintln!("  Created {} slides", project.slides.len());
            }
            project.to_json()?
        }
        Command::Reflow { project } => {
            let mut project = load_project(project)?;
            project.reflow(&engine);
            project.to_json()?
        }
        Command::Balance { project } => {
            let mut project = load_project(project)?;
            project.balance(&engine);
            project.to_json()?
        }
        Command::Contrast {
            text_color,
            background_color,
        } => contrast_report(text_color, background_color)?,
        Command::Check { project } => check_report(&load_project(project)?, engine.limit())?,
    };

    match &args.output {
        Some(path) => {
            write_output(path, &output)?;
            if args.verbose {
                eprintln!("Written to: {}", path.display());
            }
        }
        None => println!("{}", output),
    }

    Ok(())
}

/// Build the engine from an optional config file and limit override.
fn build_engine(config: Option<&Path>, limit: Option<usize>) -> Result<SlideEngine> {
    let config = match config {
        Some(path) => EngineConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };

    let mut engine = SlideEngine::from_config(config)?;
    if let Some(limit) = limit {
        engine = engine.with_limit(limit)?;
    }

    log::debug!("Using a limit of {} characters per slide", engine.limit());
    Ok(engine)
}

/// Read a summary from disk in the given format.
fn read_bundle(
    path: &Path,
    format: InputFormat,
    count: usize,
    limit: usize,
) -> Result<(String, SummaryBundle)> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let bundle = match format {
        InputFormat::Outline => OutlineSummarizer::new(limit).summarize(&text, count)?,
        InputFormat::Lines => SummaryBundle::from_lines(&text),
        InputFormat::Bundle => serde_json::from_str(&text)
            .with_context(|| format!("Invalid summary bundle in {}", path.display()))?,
    };

    Ok((text, bundle))
}

/// Create a project seeded from a summary file.
fn split_file(
    input: &Path,
    count: usize,
    format: InputFormat,
    engine: &SlideEngine,
    backgrounds: &mut dyn BackgroundSource,
) -> Result<Project> {
    let (text, bundle) = read_bundle(input, format, count, engine.limit())?;
    log::debug!("Loaded {} key ideas", bundle.key_ideas.len());

    let mut project = Project::new(engine.style(), backgrounds);
    if format != InputFormat::Bundle {
        project.input_text = text;
    }
    project.slide_count = count;
    project.apply_summary(bundle, engine, backgrounds)?;

    Ok(project)
}

fn load_project(path: &Path) -> Result<Project> {
    Project::load(path).with_context(|| format!("Failed to load project {}", path.display()))
}

fn contrast_report(text_color: &str, background_color: &str) -> Result<String> {
    let ratio = readability_score(text_color, background_color)?;
    let mut report = format!("{:.2}:1", ratio);
    if !is_readable(ratio) {
        log::warn!("Contrast {:.2}:1 is below {}:1", ratio, MIN_CONTRAST_RATIO);
        report.push_str(&format!(
            "\nLow contrast: below {}:1, adjust the color or shadow",
            MIN_CONTRAST_RATIO
        ));
    }
    Ok(report)
}

/// List readability problems, one per line.
fn check_report(project: &Project, limit: usize) -> Result<String> {
    let mut lines = Vec::new();

    for index in project.slides_over_limit(limit) {
        let count = project.slides[index].primary_text().chars().count();
        lines.push(format!(
            "Slide {}: {} characters exceeds the limit of {}",
            index + 1,
            count,
            limit
        ));
    }

    for (index, slide) in project.slides.iter().enumerate() {
        for block in &slide.text_blocks {
            match project.readability(&slide.id, &block.id) {
                Ok(ratio) if !is_readable(ratio) => lines.push(format!(
                    "Slide {}: contrast {:.2}:1 for block {}",
                    index + 1,
                    ratio,
                    block.id
                )),
                Ok(_) => {}
                Err(Error::InvalidColor(color)) => lines.push(format!(
                    "Slide {}: unreadable color {:?} for block {}",
                    index + 1,
                    color,
                    block.id
                )),
                Err(e) => return Err(e.into()),
            }
        }
    }

    if lines.is_empty() {
        lines.push("No issues found".to_string());
    }
    Ok(lines.join("\n"))
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}
