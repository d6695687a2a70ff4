use clap::Parser;
use georank::config::cli::{Args, Command};
use georank::config::Config;
use georank::domain::{RawEntry, SpecialOutcome, Submission};
use georank::infrastructure::FileSystemStore;
use georank::services::{special_game, validate_input, ResultsService};
use georank::{Result, ScoreError};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn, Level};

fn main() -> Result<()> {
    let args = Args::parse();
    let level: Level = args
        .log_level
        .parse()
        .map_err(|_| ScoreError::Parse(format!("unknown log level {}", args.log_level)))?;
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = Config::from_args(args)?;

    match &config.args.command {
        Command::Special {
            game,
            guesses,
            distance,
        } => {
            let definition = special_game(&config.scoring.games, game)
                .map_err(|err| ScoreError::Rejected(vec![err.to_string()]))?;

            let outcome = match (guesses, distance) {
                (Some(guesses), _) => SpecialOutcome::Solved { guesses: *guesses },
                (None, Some(distance)) => SpecialOutcome::Failed {
                    distance: *distance,
                },
                (None, None) => {
                    return Err(ScoreError::Parse(
                        "either --guesses or --distance is required".to_string(),
                    ))
                }
            };
            outcome
                .validate(&definition.name)
                .map_err(|err| ScoreError::Rejected(vec![err.to_string()]))?;
            println!("{:.2}", outcome.raw_score());
            return Ok(());
        }
        Command::Validate { game, value } => {
            let entry = RawEntry::from(serde_json::Value::String(value.clone()));
            validate_input(&config.scoring.games, game, &entry)
                .map_err(|err| ScoreError::Rejected(vec![err.to_string()]))?;
            println!("{} is a valid {} score", entry, game);
            return Ok(());
        }
        _ => {}
    }

    config.ensure_directories()?;
    let store = Arc::new(FileSystemStore::new(&config.args.data_dir));
    let service = ResultsService::new(config.scoring.clone(), store);

    match &config.args.command {
        Command::Submit { file, dry_run } => submit(&service, file, *dry_run)?,
        Command::Show { date } => {
            let record = service.load(*date)?;
            println!("{} (recorded {})", record.date, record.recorded_at.to_rfc3339());
            println!("{}", record.result);
        }
        Command::History => {
            for record in service.history()? {
                println!("{}: {}", record.date, record.result.headline());
            }
        }
        Command::Delete { date } => service.delete(*date)?,
        Command::Special { .. } | Command::Validate { .. } => {}
    }

    Ok(())
}

fn submit(service: &ResultsService, file: &Path, dry_run: bool) -> Result<()> {
    let submission: Submission = serde_json::from_str(&std::fs::read_to_string(file)?)?;

    if dry_run {
        let result = service.score(&submission)?;
        println!("{}", result);
        return Ok(());
    }

    if service.exists(submission.date)? {
        warn!(
            "Results for {} already exist and will be replaced",
            submission.date
        );
    }

    let record = service.submit(&submission)?;
    println!("{}", record.result);
    info!("Submission for {} completed", record.date);
    Ok(())
}
