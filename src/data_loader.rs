use serde::*;
use std::collections::HashMap;
use std::fs;

use log::info;
use serde_aux::field_attributes::{
    deserialize_number_from_string, deserialize_option_number_from_string,
};

use crate::error::LeagueError;

// Loads the match feed from a JSON file. The feed arrives wrapped as
// { "matches": [ ... ] }, the same shape the scores provider returns, so the
// wrapper never leaves this module.
pub fn load_matches(path: &str) -> Result<Vec<MatchRecord>, LeagueError> {
    let data = fs::read_to_string(path).map_err(|e| LeagueError::FeedRead {
        path: path.to_owned(),
        source: e,
    })?;

    let feed: MatchFeed = serde_json::from_str(&data).map_err(|e| LeagueError::FeedParse {
        path: path.to_owned(),
        source: e,
    })?;

    info!("loaded {} matches from {}", feed.matches.len(), path);

    Ok(feed.matches)
}

// Optional team name -> crest URL mapping, a plain JSON object. The display
// layer resolves badges with it; teams may be missing.
pub fn load_flags(path: &str) -> Result<HashMap<String, String>, LeagueError> {
    let data = fs::read_to_string(path).map_err(|e| LeagueError::FeedRead {
        path: path.to_owned(),
        source: e,
    })?;

    let flags: HashMap<String, String> =
        serde_json::from_str(&data).map_err(|e| LeagueError::FeedParse {
            path: path.to_owned(),
            source: e,
        })?;

    Ok(flags)
}

#[derive(Deserialize, Debug)]
struct MatchFeed {
    pub matches: Vec<MatchRecord>,
}

// One fixture as delivered upstream. Scores stay optional here: future
// fixtures carry none, and whether a missing score on a played match is
// acceptable is the aggregation step's call, not the loader's.
// Numeric fields accept both numbers and numeric strings, since providers
// disagree on which they send.
#[derive(Deserialize, Debug, Clone)]
pub struct MatchRecord {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    #[serde(rename(deserialize = "matchDate"))]
    pub match_date: i64,
    #[serde(default = "unknown_stadium")]
    pub stadium: String,
    #[serde(rename(deserialize = "homeTeam"))]
    pub home_team: String,
    #[serde(rename(deserialize = "awayTeam"))]
    pub away_team: String,
    #[serde(rename(deserialize = "matchPlayed"))]
    pub match_played: bool,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    #[serde(rename(deserialize = "homeTeamScore"))]
    pub home_team_score: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    #[serde(rename(deserialize = "awayTeamScore"))]
    pub away_team_score: Option<u32>,
}

impl MatchRecord {
    pub fn involves(&self, team: &str) -> bool {
        self.home_team == team || self.away_team == team
    }

    pub fn is_between(&self, a: &str, b: &str) -> bool {
        (self.home_team == a && self.away_team == b)
            || (self.home_team == b && self.away_team == a)
    }

    // 3-1-0 points from this match alone, seen from `team`'s side. None when
    // the match is unplayed, a score is missing, or `team` did not take part.
    pub fn points_for(&self, team: &str) -> Option<u32> {
        if !self.match_played || !self.involves(team) {
            return None;
        }

        let (home, away) = (self.home_team_score?, self.away_team_score?);
        let (own, other) = if self.home_team == team { (home, away) } else { (away, home) };

        Some(match own.cmp(&other) {
            std::cmp::Ordering::Greater => 3,
            std::cmp::Ordering::Equal => 1,
            std::cmp::Ordering::Less => 0,
        })
    }
}

fn unknown_stadium() -> String { "Unknown".to_string() }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_feed_with_string_scores_and_missing_stadium() {
        let raw = r#"{
            "matches": [
                {
                    "matchDate": 1672531200000,
                    "stadium": "Anfield",
                    "homeTeam": "Liverpool",
                    "awayTeam": "Everton",
                    "matchPlayed": true,
                    "homeTeamScore": "2",
                    "awayTeamScore": 1
                },
                {
                    "matchDate": "1675209600000",
                    "homeTeam": "Everton",
                    "awayTeam": "Liverpool",
                    "matchPlayed": false,
                    "homeTeamScore": null,
                    "awayTeamScore": null
                }
            ]
        }"#;

        let feed: MatchFeed = serde_json::from_str(raw).unwrap();
        assert_eq!(feed.matches.len(), 2);

        let played = &feed.matches[0];
        assert_eq!(played.home_team_score, Some(2));
        assert_eq!(played.away_team_score, Some(1));
        assert_eq!(played.match_date, 1672531200000);

        let fixture = &feed.matches[1];
        assert_eq!(fixture.stadium, "Unknown");
        assert_eq!(fixture.match_date, 1675209600000);
        assert!(fixture.home_team_score.is_none());
        assert!(!fixture.match_played);
    }

    #[test]
    fn points_for_scores_each_side_of_a_single_match() {
        let m = MatchRecord {
            match_date: 0,
            stadium: "Unknown".to_string(),
            home_team: "Ajax".to_string(),
            away_team: "PSV".to_string(),
            match_played: true,
            home_team_score: Some(3),
            away_team_score: Some(3),
        };

        assert_eq!(m.points_for("Ajax"), Some(1));
        assert_eq!(m.points_for("PSV"), Some(1));
        assert_eq!(m.points_for("Feyenoord"), None);
        assert!(m.is_between("PSV", "Ajax"));
        assert!(!m.is_between("Ajax", "Feyenoord"));

        let decided = MatchRecord { home_team_score: Some(0), away_team_score: Some(2), ..m.clone() };
        assert_eq!(decided.points_for("Ajax"), Some(0));
        assert_eq!(decided.points_for("PSV"), Some(3));

        let unplayed = MatchRecord { match_played: false, ..m };
        assert_eq!(unplayed.points_for("Ajax"), None);
    }
}
