use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "trifield", version)]
struct Cli {
    /// More log output (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the animation and contour plot of every variant.
    Run(RunArgs),
    /// Print the built-in configuration as JSON.
    Config,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Run configuration JSON; the built-in variants are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Do not render the rotating surface animations.
    #[arg(long)]
    skip_animation: bool,

    /// Do not render the final-state contour plots.
    #[arg(long)]
    skip_contour: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Run(args) => cmd_run(args),
        Command::Config => cmd_config(),
    }
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => trifield::RunConfig::from_json_path(path)?,
        None => trifield::RunConfig::builtin(),
    };
    config.validate()?;

    let annotator = trifield::Annotator::with_system_fonts();
    if annotator.font_faces() == 0 {
        tracing::warn!("no system fonts found; titles and labels will be omitted");
    }

    let options = trifield::RunOptions {
        skip_animation: args.skip_animation,
        skip_contour: args.skip_contour,
    };
    let report = trifield::Orchestrator::new(config, annotator, options).run();

    println!("{report}");
    Ok(())
}

fn cmd_config() -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&trifield::RunConfig::builtin())?;
    println!("{json}");
    Ok(())
}
