mod commands;
mod core;
mod release;
mod render;
mod situation;

use crate::commands::household::HouseholdCommands;
use crate::core::error::{RelError, print_error};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Fragment-based changelog assembly, version bumping, and release content tools
#[derive(Parser)]
#[command(name = "relkit")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct RelkitCli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Bump the manifest version from pending changelog fragments
  Bump {
    /// Fragment directory (default from relkit.toml)
    #[arg(long)]
    fragments_dir: Option<PathBuf>,
    /// Manifest path (default from relkit.toml)
    #[arg(long)]
    manifest: Option<PathBuf>,
    /// Show the computed bump without writing the manifest
    #[arg(long)]
    dry_run: bool,
  },

  /// Build a changelog section from fragments and clear the store
  Changelog {
    /// Fragment directory (default from relkit.toml)
    #[arg(long)]
    fragments_dir: Option<PathBuf>,
    /// Manifest path (default from relkit.toml)
    #[arg(long)]
    manifest: Option<PathBuf>,
    /// Changelog path (default from relkit.toml)
    #[arg(long)]
    changelog: Option<PathBuf>,
    /// Print the new section without writing or deleting anything
    #[arg(long)]
    dry_run: bool,
  },

  /// Render a social image from an HTML template
  Render {
    /// Path to the HTML template
    #[arg(long)]
    template: PathBuf,
    /// Output image path
    #[arg(long)]
    output: PathBuf,
    /// JSON file with template variables
    #[arg(long)]
    vars: Option<PathBuf>,
    /// Variable in key=value form (repeatable, overrides --vars entries)
    #[arg(long = "var")]
    var: Vec<String>,
    /// Image width
    #[arg(long, default_value_t = 1200)]
    width: u32,
    /// Image height
    #[arg(long, default_value_t = 630)]
    height: u32,
  },

  /// Build household situation JSON for the simulation engine
  #[command(subcommand)]
  Household(HouseholdCommands),
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = RelkitCli::parse();

  let result = match cli.command {
    Commands::Bump {
      fragments_dir,
      manifest,
      dry_run,
    } => commands::run_bump(fragments_dir, manifest, dry_run),
    Commands::Changelog {
      fragments_dir,
      manifest,
      changelog,
      dry_run,
    } => commands::run_changelog(fragments_dir, manifest, changelog, dry_run),
    Commands::Render {
      template,
      output,
      vars,
      var,
      width,
      height,
    } => commands::run_render(template, output, vars, var, width, height),
    Commands::Household(household) => commands::run_household(household),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: RelError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
