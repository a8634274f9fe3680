//! bettergovicon - asset pipeline for Philippine government agency icons.

mod catalog;
mod cli;
mod config;
mod error;
mod generate;
mod icon;
mod logger;
mod svg;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::IconsConfig;
use owo_colors::OwoColorize;

fn main() {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{} {e:#}", "error:".bright_red().bold());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = IconsConfig::load(&cli.config)?;

    match &cli.command {
        Commands::Add { svg_path, args } => cli::add::add_icon(svg_path, args, &config),
        Commands::Process { svg_path, args } => cli::process::process_icon(svg_path, args, &config),
        Commands::Validate { svg_path, verbose } => {
            cli::validate::validate_icon(svg_path, *verbose)
        }
        Commands::List { args } => cli::list::list_icons(args, &config),
        Commands::Generate { force } => cli::generate::generate_all(*force, &config),
        Commands::Remove { name, args } => cli::remove::remove_icon(name, args, &config),
        Commands::Init => cli::init::init_project(&config),
        Commands::Catalog => catalog::build_catalog(&config),
    }
}
