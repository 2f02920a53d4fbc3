mod annotate;
mod data_loader;
mod error;
mod report;
mod standings;

use std::collections::HashMap;
use std::env;
use std::process;

use annotate::annotate_matches;
use data_loader::{load_flags, load_matches};
use error::LeagueError;
use report::{print_schedule, print_standings, write_standings_csv};
use standings::compute_standings;

/*
    Reads a match feed (JSON), ranks it and prints the standings table plus
    the annotated schedule. Set RUST_LOG=debug for aggregation chatter.

    league_standings [feed.json] [--flags flags.json] [--csv out.csv]
*/

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), LeagueError> {
    let (feed_path, flags_path, csv_path) = parse_args();

    let matches = load_matches(&feed_path)?;

    let flags = match flags_path {
        Some(path) => load_flags(&path)?,
        None => HashMap::new(),
    };

    let standings = compute_standings(&matches)?;
    print_standings(&standings);

    println!();
    print_schedule(&annotate_matches(&matches, &flags));

    if let Some(path) = csv_path {
        write_standings_csv(&standings, &path)?;
    }

    Ok(())
}

fn parse_args() -> (String, Option<String>, Option<String>) {
    let mut feed_path = "./data/matches_sample.json".to_string();
    let mut flags_path = None;
    let mut csv_path = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--flags" => flags_path = args.next(),
            "--csv" => csv_path = args.next(),
            _ => feed_path = arg,
        }
    }

    (feed_path, flags_path, csv_path)
}
