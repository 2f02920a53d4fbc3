use std::cmp::Ordering;

use log::debug;
use serde::Serialize;

use crate::data_loader::MatchRecord;
use crate::error::LeagueError;

// One row of the leaderboard. goal_difference is derived, never stored.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TeamStanding {
    pub team_name: String,
    pub matches_played: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub points: u32,
}

impl TeamStanding {
    pub fn new(team_name: String) -> Self {
        Self {
            team_name,
            matches_played: 0,
            goals_for: 0,
            goals_against: 0,
            points: 0,
        }
    }

    pub fn goal_difference(&self) -> i64 {
        self.goals_for as i64 - self.goals_against as i64
    }
}

// The full aggregate-then-rank pipeline. The table is rebuilt from scratch on
// every call and the input is never mutated, so independent snapshots can be
// ranked concurrently.
pub fn compute_standings(matches: &[MatchRecord]) -> Result<Vec<TeamStanding>, LeagueError> {
    let mut standings = aggregate(matches)?;

    // Validation already ran in aggregate, so the comparator only ever sees
    // complete records.
    standings.sort_by(|a, b| compare_standings(a, b, matches));

    Ok(standings)
}

// Folds the match list into per-team cumulative stats. Rejects the whole
// computation on the first malformed record rather than leaving counts for
// the remaining teams half-updated.
fn aggregate(matches: &[MatchRecord]) -> Result<Vec<TeamStanding>, LeagueError> {
    let mut standings: Vec<TeamStanding> = Vec::new();

    for m in matches {
        if m.home_team.is_empty() || m.away_team.is_empty() {
            return Err(LeagueError::MissingTeamName { stadium: m.stadium.clone() });
        }
        if m.home_team == m.away_team {
            return Err(LeagueError::SameTeam {
                stadium: m.stadium.clone(),
                team: m.home_team.clone(),
            });
        }

        // Both sides enter the table even for future fixtures, home side first
        let home_idx = insert_team(&mut standings, &m.home_team);
        let away_idx = insert_team(&mut standings, &m.away_team);

        if !m.match_played {
            continue;
        }

        // A played match without a full score is a data-integrity fault, not
        // a 0-0
        let (home_score, away_score) = match (m.home_team_score, m.away_team_score) {
            (Some(h), Some(a)) => (h, a),
            _ => {
                return Err(LeagueError::MissingScore {
                    home: m.home_team.clone(),
                    away: m.away_team.clone(),
                })
            }
        };

        standings[home_idx].matches_played += 1;
        standings[away_idx].matches_played += 1;

        standings[home_idx].goals_for += home_score;
        standings[home_idx].goals_against += away_score;
        standings[away_idx].goals_for += away_score;
        standings[away_idx].goals_against += home_score;

        if home_score > away_score {
            standings[home_idx].points += 3;
        } else if home_score < away_score {
            standings[away_idx].points += 3;
        } else {
            standings[home_idx].points += 1;
            standings[away_idx].points += 1;
        }
    }

    debug!("aggregated {} teams from {} matches", standings.len(), matches.len());

    Ok(standings)
}

// Returns the team's index in the table, adding a zero-stat entry the first
// time a name is seen. Linear scan keeps first-encounter order; fine at
// league sizes.
fn insert_team(standings: &mut Vec<TeamStanding>, team_name: &str) -> usize {
    for (idx, s) in standings.iter().enumerate() {
        if s.team_name == team_name {
            return idx;
        }
    }

    standings.push(TeamStanding::new(team_name.to_owned()));
    standings.len() - 1
}

// Tie-break chain, first decisive rung wins: points, head-to-head, goal
// difference, goals scored, name. Names are unique within the table, so the
// final rung makes the order total.
fn compare_standings(a: &TeamStanding, b: &TeamStanding, matches: &[MatchRecord]) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| {
            // Positive differential means `a` took more points off `b` than
            // the other way around
            let h2h = head_to_head_diff(&a.team_name, &b.team_name, matches);
            h2h.cmp(&0).reverse()
        })
        .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| a.team_name.cmp(&b.team_name))
}

// Net points between the pair, counting only their direct meetings. Each
// meeting is rescored 3-1-0 in isolation and summed per side. Teams that
// never met come out at 0 and fall through to the next tie-break.
// Recomputed per comparison instead of cached; a full sort stays well under
// a millisecond at tens of teams and hundreds of matches.
pub fn head_to_head_diff(a: &str, b: &str, matches: &[MatchRecord]) -> i64 {
    let mut diff: i64 = 0;

    for m in matches {
        if !m.is_between(a, b) {
            continue;
        }

        let (Some(a_pts), Some(b_pts)) = (m.points_for(a), m.points_for(b)) else {
            continue;
        };

        diff += a_pts as i64 - b_pts as i64;
    }

    diff
}
