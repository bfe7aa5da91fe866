//! Leader / runner-up extraction over a share table.

use serde::Serialize;

use super::{round2, ShareRow};

/// Standings derived from an ordered share table.
///
/// With a single candidate, `second` is `None`, `second_pct` is 0 and the
/// margin equals the leader's score — never a fault.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Standings {
    pub leader: String,
    #[serde(rename = "leaderPct")]
    pub leader_pct: f64,
    pub second: Option<String>,
    #[serde(rename = "secondPct")]
    pub second_pct: f64,
    pub margin: f64,
}

/// Rank an already-ordered share table. Empty input yields `None`.
///
/// The margin is computed over the rounded percentages, matching the
/// displayed tables (66.67 vs 33.33 gives a 33.34-point margin).
pub fn rank(rows: &[ShareRow]) -> Option<Standings> {
    let first = rows.first()?;
    let runner_up = rows.get(1);
    let second_pct = runner_up.map_or(0.0, |r| r.pct);

    Some(Standings {
        leader: first.candidate.clone(),
        leader_pct: first.pct,
        second: runner_up.map(|r| r.candidate.clone()),
        second_pct,
        margin: round2(first.pct - second_pct),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(candidate: &str, count: u64, pct: f64) -> ShareRow {
        ShareRow {
            candidate: candidate.to_string(),
            count,
            pct,
        }
    }

    #[test]
    fn two_candidate_margin() {
        let standings = rank(&[row("A", 2, 66.67), row("B", 1, 33.33)]).unwrap();
        assert_eq!(standings.leader, "A");
        assert_eq!(standings.second.as_deref(), Some("B"));
        assert_eq!(standings.margin, 33.34);
    }

    #[test]
    fn single_candidate_margin_is_leader_score() {
        let standings = rank(&[row("A", 4, 100.0)]).unwrap();
        assert_eq!(standings.second, None);
        assert_eq!(standings.second_pct, 0.0);
        assert_eq!(standings.margin, 100.0);
    }

    #[test]
    fn empty_table_has_no_standings() {
        assert_eq!(rank(&[]), None);
    }
}
