use log::info;

use crate::annotate::AnnotatedMatch;
use crate::error::LeagueError;
use crate::standings::TeamStanding;

pub fn print_standings(standings: &[TeamStanding]) {
    println!(
        "{0:>3} | {1:24} | {2:>3} | {3:>3} | {4:>3} | {5:>4} | {6:>3}",
        "#", "Team", "MP", "GF", "GA", "GD", "Pts"
    );

    for (i, s) in standings.iter().enumerate() {
        println!(
            "{0:>3} | {1:24} | {2:>3} | {3:>3} | {4:>3} | {5:>4} | {6:>3}",
            i + 1,
            s.team_name,
            s.matches_played,
            s.goals_for,
            s.goals_against,
            s.goal_difference(),
            s.points,
        )
    }
}

pub fn print_schedule(schedule: &[AnnotatedMatch]) {
    for row in schedule {
        println!(
            "{0:16} | {1:20} | {2:>24} {3:^9} {4:24}",
            row.formatted_date, row.stadium, row.home_team, row.score, row.away_team,
        )
    }
}

// Ranked table as CSV, one row per team in final order.
pub fn write_standings_csv(standings: &[TeamStanding], path: &str) -> Result<(), LeagueError> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| LeagueError::CsvWrite {
        path: path.to_owned(),
        source: e,
    })?;

    for s in standings {
        writer.serialize(s).map_err(|e| LeagueError::CsvWrite {
            path: path.to_owned(),
            source: e,
        })?;
    }

    writer.flush().map_err(|e| LeagueError::CsvWrite {
        path: path.to_owned(),
        source: csv::Error::from(e),
    })?;

    info!("wrote standings for {} teams to {}", standings.len(), path);

    Ok(())
}
