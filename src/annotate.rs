use std::collections::HashMap;

use chrono::{Local, TimeZone};
use serde::Serialize;

use crate::data_loader::MatchRecord;

// One row of the schedule view: dates and scores already rendered, crest URLs
// resolved. Pure presentation; the standings engine never reads this.
#[derive(Serialize, Debug, Clone)]
pub struct AnnotatedMatch {
    pub formatted_date: String,
    pub stadium: String,
    pub home_team: String,
    pub away_team: String,
    pub score: String,
    pub home_flag: Option<String>,
    pub away_flag: Option<String>,
}

pub fn annotate_matches(
    matches: &[MatchRecord],
    flag_lookup: &HashMap<String, String>,
) -> Vec<AnnotatedMatch> {
    matches
        .iter()
        .map(|m| AnnotatedMatch {
            formatted_date: format_match_date(m.match_date),
            stadium: m.stadium.clone(),
            home_team: m.home_team.clone(),
            away_team: m.away_team.clone(),
            score: format!(
                "{} - {}",
                score_display(m.home_team_score),
                score_display(m.away_team_score)
            ),
            home_flag: flag_lookup.get(&m.home_team).cloned(),
            away_flag: flag_lookup.get(&m.away_team).cloned(),
        })
        .collect()
}

// DD.MM.YYYY HH:MM in the viewer's local time zone.
fn format_match_date(epoch_millis: i64) -> String {
    match Local.timestamp_millis_opt(epoch_millis).single() {
        Some(date) => date.format("%d.%m.%Y %H:%M").to_string(),
        None => String::new(),
    }
}

// A side with no recorded score renders as "?". This fallback lives here on
// purpose; the aggregation core treats a missing score as an error instead.
fn score_display(score: Option<u32>) -> String {
    match score {
        Some(s) => s.to_string(),
        None => "?".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(home: &str, away: &str) -> MatchRecord {
        MatchRecord {
            match_date: 1_672_574_400_000,
            stadium: "Camp Nou".to_string(),
            home_team: home.to_string(),
            away_team: away.to_string(),
            match_played: true,
            home_team_score: Some(2),
            away_team_score: None,
        }
    }

    #[test]
    fn renders_scores_with_question_mark_fallback() {
        let flags = HashMap::new();
        let rows = annotate_matches(&[record("Barcelona", "Getafe")], &flags);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].score, "2 - ?");
        assert_eq!(rows[0].stadium, "Camp Nou");
    }

    #[test]
    fn resolves_flags_and_defaults_to_none() {
        let mut flags = HashMap::new();
        flags.insert(
            "Barcelona".to_string(),
            "https://crests.football-data.org/81.png".to_string(),
        );

        let rows = annotate_matches(&[record("Barcelona", "Getafe")], &flags);

        assert_eq!(
            rows[0].home_flag.as_deref(),
            Some("https://crests.football-data.org/81.png")
        );
        assert_eq!(rows[0].away_flag, None);
    }

    #[test]
    fn formats_dates_in_local_time() {
        let millis = 1_672_574_400_000;
        let formatted = format_match_date(millis);

        // Computed through the same local-zone conversion the formatter uses,
        // so the test holds in any time zone.
        let expected = Local
            .timestamp_millis_opt(millis)
            .single()
            .unwrap()
            .format("%d.%m.%Y %H:%M")
            .to_string();

        assert_eq!(formatted, expected);
        assert_eq!(formatted.len(), 16);
        assert_eq!(&formatted[2..3], ".");
        assert_eq!(&formatted[5..6], ".");
        assert_eq!(&formatted[10..11], " ");
        assert_eq!(&formatted[13..14], ":");
    }
}
