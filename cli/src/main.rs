use clap::{Parser, Subcommand};
use std::path::PathBuf;

use localisation::process::add_localisation;
use spritegfx::process::{add_focus_sprites, add_idea_sprites};
use states::process::scale_manpower;

#[derive(Parser)]
#[command(name = "hoi4-modtools")]
#[command(about = "CLI utilities for HoI4 mod text files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add missing goals/goals_shine sprite entries for a focus icon
    FocusGfx {
        /// Focus icon sprite name without the leading GFX_ prefix
        icon_name: String,
        /// Directory containing the goals/goals_shine files
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,
        /// Name of the goals .gfx file
        #[arg(long, default_value = "goals.gfx")]
        goals: String,
        /// Name of the goals_shine .gfx file
        #[arg(long, default_value = "goals_shine.gfx")]
        goals_shine: String,
    },
    /// Add missing sprite entries for every picture in an ideas file
    IdeaGfx {
        /// Ideas file to scan
        idea_file: PathBuf,
        /// GFX file to write sprite entries into (created if missing)
        gfx_file: PathBuf,
        /// Subdirectory in gfx/interface/ideas that stores the icons
        #[arg(long, default_value = "")]
        icon_directory: String,
        /// Image extension (without dot) for idea icons
        #[arg(long, default_value = "dds")]
        icon_format: String,
        /// Do not prepend 'idea_' to icon filenames
        #[arg(short, long)]
        no_prefix: bool,
    },
    /// Append missing localisation keys from a focus/event/ideas/decisions file
    Localisation {
        /// Script file to parse
        input: PathBuf,
        /// Localisation file to append to (created if missing)
        output: PathBuf,
        /// Prefix every generated entry with #TODO (rather than once)
        #[arg(short, long)]
        todo: bool,
    },
    /// Multiply manpower values in state history files
    Manpower {
        /// State history file or directory containing state files
        input: PathBuf,
        /// Multiplier applied to each manpower value
        multiplier: f64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::FocusGfx {
            icon_name,
            directory,
            goals,
            goals_shine,
        } => add_focus_sprites(directory, icon_name, goals, goals_shine)?,
        Commands::IdeaGfx {
            idea_file,
            gfx_file,
            icon_directory,
            icon_format,
            no_prefix,
        } => add_idea_sprites(idea_file, gfx_file, icon_directory, icon_format, *no_prefix)?,
        Commands::Localisation {
            input,
            output,
            todo,
        } => add_localisation(input, output, *todo)?,
        Commands::Manpower { input, multiplier } => scale_manpower(input, *multiplier)?,
    }

    Ok(())
}
