//! PartyXp - Entry Point
//!
//! Loads the actor world, runs the requested award and saves the world back.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use clap::Parser;

use partyxp::actors::{ActorId, RecordStore};
use partyxp::award::{
    award_party, on_encounter_ended, AwardHost, AwardOutcome, AwardPrompt, EncounterAward,
    EncounterEnded, Session,
};
use partyxp::data::{config_path, export_default_config, AwardConfig};
use partyxp::save::{load_world, save_world, world_path, TranscriptFile};
use partyxp::ui::{ConsoleNotifier, ScriptedPrompt, TerminalPrompt};

mod cli;

use cli::{Cli, Command};

fn main() -> Result<()> {
    // Log to file so the dialog is not disturbed
    let log_target: Box<dyn std::io::Write + Send> = match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("partyxp.log")
    {
        Ok(file) => Box::new(file),
        Err(_) => Box::new(std::io::sink()),
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(log_target))
        .init();

    log::info!("Starting PartyXp v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let result = run(cli);

    if let Err(ref e) = result {
        log::error!("PartyXp exited with error: {:#}", e);
    }
    result
}

fn run(cli: Cli) -> Result<()> {
    let world_file = cli.world.clone().unwrap_or_else(world_path);

    match cli.command {
        Command::ExportConfig => {
            let path = cli.config.clone().unwrap_or_else(config_path);
            export_default_config(&path).map_err(anyhow::Error::msg)?;
            println!("Wrote {}", path.display());
            Ok(())
        }
        Command::Show => {
            let world = load_world(&world_file)
                .with_context(|| format!("loading {}", world_file.display()))?;
            for actor in world.actors() {
                match (actor.level, actor.xp) {
                    (None, None) => println!("{:<12} {:<24} {}", actor.id, actor.name, actor.kind.name()),
                    _ => {
                        let progress = actor.progress();
                        println!(
                            "{:<12} {:<24} {:<10} level {:>3}  {:>3} XP",
                            actor.id, actor.name, actor.kind.name(), progress.level, progress.xp
                        );
                    }
                }
            }
            Ok(())
        }
        Command::Award(args) => {
            let config = AwardConfig::load(cli.config.as_deref());
            let mut prompt: Box<dyn AwardPrompt> = match args.party {
                Some(party) => Box::new(ScriptedPrompt::award(ActorId::new(party), &args.preset, &args.custom)),
                None => Box::new(TerminalPrompt::new()),
            };
            apply(&world_file, &mut *prompt, |host| award_party(host, &config))
        }
        Command::Encounter(args) => {
            let config = AwardConfig::load(cli.config.as_deref());
            let mut prompt: Box<dyn AwardPrompt> = if args.yes {
                Box::new(ScriptedPrompt::confirm(args.input.as_deref().unwrap_or("")))
            } else {
                Box::new(TerminalPrompt::new())
            };
            let event = EncounterEnded {
                award: Some(EncounterAward {
                    xp: args.xp,
                    recipients: args.recipients.into_iter().map(ActorId::new).collect(),
                }),
            };
            apply(&world_file, &mut *prompt, |host| {
                on_encounter_ended(host, &config, Session::game_master(), &event)
            })
        }
    }
}

/// Run one award flow against the world file and save it if anything was awarded
fn apply<F>(world_file: &std::path::Path, prompt: &mut dyn AwardPrompt, flow: F) -> Result<()>
where
    F: FnOnce(&mut AwardHost<'_>) -> Result<AwardOutcome, partyxp::award::AwardError>,
{
    let mut world = load_world(world_file)
        .with_context(|| format!("loading {}", world_file.display()))?;
    let mut notifier = ConsoleNotifier::stdout();
    let mut transcript = TranscriptFile::beside(world_file);

    let result = {
        let mut host = AwardHost {
            store: &mut world,
            prompt,
            notifier: &mut notifier,
            transcript: &mut transcript,
        };
        flow(&mut host)
    };

    // Writes before a failure stay applied, so save either way
    let wrote = world.write_count() > 0;
    if wrote {
        save_world(&world, world_file)
            .with_context(|| format!("saving {}", world_file.display()))?;
    }

    let outcome = result?;
    log::info!("Award finished: awarded={}, writes={}", outcome.is_awarded(), world.write_count());
    Ok(())
}
