//! Command-line interface definitions

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "partyxp",
    about = "Award experience points to tabletop party members",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// World snapshot to read and update
    #[arg(long, global = true)]
    pub world: Option<PathBuf>,

    /// Award settings (RON)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Award XP to every member of a party
    Award(AwardArgs),
    /// Award XP for a finished encounter
    Encounter(EncounterArgs),
    /// List actors with their level and XP
    Show,
    /// Write the default config file
    ExportConfig,
}

#[derive(Args)]
pub struct AwardArgs {
    /// Party id; skips the dialog when given
    #[arg(long)]
    pub party: Option<String>,

    /// Preset key (trivial, low, moderate, severe, extreme)
    #[arg(long, default_value = "trivial", requires = "party")]
    pub preset: String,

    /// Custom XP per character; overrides the preset when > 0
    #[arg(long, default_value = "", allow_hyphen_values = true, requires = "party")]
    pub custom: String,
}

#[derive(Args)]
pub struct EncounterArgs {
    /// XP computed for the encounter, per character
    #[arg(long, allow_hyphen_values = true)]
    pub xp: f64,

    /// Actor ids that took part
    #[arg(long = "recipient", required = true)]
    pub recipients: Vec<String>,

    /// Confirm without showing the dialog
    #[arg(short, long)]
    pub yes: bool,

    /// XP to enter in the confirmation instead of the computed value
    #[arg(long, allow_hyphen_values = true, requires = "yes")]
    pub input: Option<String>,
}
