// ABOUTME: Main entry point for the slide-forge program.
// ABOUTME: Provides CLI interface and executes commands from the library.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a PPTX deck from a JSON array of slides
    Render(RenderArgs),

    /// Normalize a raw AI outline response into a JSON array of slides
    Outline(OutlineArgs),
}

#[derive(Args)]
struct RenderArgs {
    /// Path to the slides JSON file
    #[arg(short, long)]
    input: PathBuf,

    /// Path to output PPTX file
    #[arg(short, long)]
    output: PathBuf,

    /// Path to a design JSON file
    #[arg(short, long)]
    design: Option<PathBuf>,

    /// Presentation title stored in the document properties
    #[arg(long)]
    title: Option<String>,

    /// Skip image resolution even if the design enables it
    #[arg(long)]
    no_images: bool,
}

#[derive(Args)]
struct OutlineArgs {
    /// Path to the raw outline response
    #[arg(short, long)]
    input: PathBuf,

    /// Path to output slides JSON file
    #[arg(short, long)]
    output: PathBuf,
}

fn run_render(args: &RenderArgs) -> anyhow::Result<()> {
    let slides = slide_forge::utils::load_slides(&args.input)?;
    let mut design = match &args.design {
        Some(path) => slide_forge::utils::load_design(path)?,
        None => slide_forge::DesignConfig::default(),
    };
    if args.no_images {
        design.include_images = false;
    }

    let mut config = slide_forge::Config::from_env();
    if let Some(title) = &args.title {
        config.deck_title = title.clone();
    }
    config.validate()?;

    let assembler = config.assembler()?;
    let deck = assembler
        .assemble(&slides, &design)
        .context("Failed to generate deck")?;
    slide_forge::utils::write_deck_to_file(&deck.bytes, &args.output)?;

    println!(
        "PPTX generated successfully: {:?} ({} slides, {})",
        args.output,
        deck.slide_count,
        deck.aspect_ratio.label()
    );
    Ok(())
}

fn run_outline(args: &OutlineArgs) -> anyhow::Result<()> {
    slide_forge::utils::validate_file_exists(&args.input)?;
    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {:?}", args.input))?;
    let slides = slide_forge::parse_outline(&raw)?;
    let json = serde_json::to_string_pretty(&slides)?;
    slide_forge::utils::ensure_parent_directory_exists(&args.output)?;
    fs::write(&args.output, json)
        .with_context(|| format!("Failed to write output file {:?}", args.output))?;

    println!("Outline normalized: {} slides -> {:?}", slides.len(), args.output);
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match &cli.command {
        Some(Commands::Render(args)) => run_render(args),
        Some(Commands::Outline(args)) => run_outline(args),
        None => {
            println!("No command specified. Use --help for usage information.");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
