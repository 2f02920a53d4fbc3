use thiserror::Error;

// Every fallible step in the pipeline reports through this enum. The pure
// computation fails whole rather than producing a partially-correct table.
#[derive(Debug, Error)]
pub enum LeagueError {
    #[error("failed to read {path}: {source}")]
    FeedRead {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    FeedParse {
        path: String,
        source: serde_json::Error,
    },

    #[error("match at {stadium} is missing a team name")]
    MissingTeamName { stadium: String },

    #[error("match at {stadium} lists {team} on both sides")]
    SameTeam { stadium: String, team: String },

    #[error("played match {home} vs {away} has no recorded score")]
    MissingScore { home: String, away: String },

    #[error("failed to write standings to {path}: {source}")]
    CsvWrite { path: String, source: csv::Error },
}
