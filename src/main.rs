mod config;
mod display;
mod error;
mod form;
mod parser;
mod schedule;
mod session;
mod web;

use clap::Parser;
use tracing::info;

use config::{CliArgs, Command, ScheduleArgs};
use display::{print_schedule, write_schedule_to_file};
use error::AppError;
use form::export_schedule_to_csv;
use schedule::generate_schedule;
use session::Session;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    match args.command {
        Command::Serve(serve) => {
            info!("Starting court rotation API on {}:{}", serve.bind, serve.port);
            web::start_server(&serve.bind, serve.port, Session::default()).await?;
        }
        Command::Schedule(schedule_args) => run_schedule(&schedule_args)?,
    }

    Ok(())
}

fn run_schedule(args: &ScheduleArgs) -> Result<(), AppError> {
    let players = args.resolve_players()?;
    let seed = args.resolve_seed();
    let (courts, rounds) = args.resolve_courts_and_rounds()?;

    let result = generate_schedule(&players, courts, rounds, seed, args.format)?;
    info!(
        "Generated {} rounds for {} players (seed {}, spread {})",
        result.rounds.len(),
        players.len(),
        result.seed,
        result.max_played_minus_min_played
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_schedule(&result);
    }

    if let Some(path) = &args.out {
        write_schedule_to_file(&result, path)?;
        info!("Schedule written to {}", path.display());
    }
    if let Some(path) = &args.csv {
        export_schedule_to_csv(&result, path)?;
        info!("Schedule exported to {}", path.display());
    }

    Ok(())
}
