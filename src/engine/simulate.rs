//! What-if redistribution: every undecided respondent commits to one
//! chosen candidate.

use super::aggregate::{self, UndecidedMatcher};
use super::{round2, EngineError, EngineResult, ShareRow};
use crate::model::RespondentSet;

/// Fold the full undecided count into `target`'s tally and renormalize.
///
/// All other candidates keep their base counts; the new denominator is the
/// old non-null candidate total plus the undecided count. A `target` that
/// is not among the base candidates is rejected with
/// [`EngineError::UnknownCandidate`] rather than silently ignored.
pub fn simulate(
    set: &RespondentSet,
    target: &str,
    matcher: &UndecidedMatcher,
) -> EngineResult<Vec<ShareRow>> {
    let mut counts = aggregate::candidate_counts(set);

    let slot = counts
        .iter_mut()
        .find(|(candidate, _)| candidate == target)
        .ok_or_else(|| EngineError::UnknownCandidate(target.to_string()))?;

    slot.1 += aggregate::undecided_count(set, matcher) as u64;

    let total: u64 = counts.iter().map(|(_, n)| n).sum();
    let mut rows: Vec<ShareRow> = counts
        .into_iter()
        .map(|(candidate, count)| ShareRow {
            candidate,
            count,
            pct: round2(count as f64 / total as f64 * 100.0),
        })
        .collect();

    rows.sort_by(|a, b| b.count.cmp(&a.count));
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Respondent;

    fn voter(candidate: Option<&str>, status: &str) -> Respondent {
        Respondent {
            candidate: candidate.map(|s| s.to_string()),
            decision_status: Some(status.to_string()),
            ..Respondent::default()
        }
    }

    fn base_set() -> RespondentSet {
        RespondentSet::new(vec![
            voter(Some("A"), "Décidé"),
            voter(Some("A"), "Décidé"),
            voter(Some("B"), "Décidé"),
            voter(None, "Peut changer"),
        ])
    }

    #[test]
    fn undecided_fold_into_target() {
        let matcher = UndecidedMatcher::default();
        let rows = simulate(&base_set(), "A", &matcher).unwrap();

        assert_eq!(rows[0], ShareRow { candidate: "A".to_string(), count: 3, pct: 75.0 });
        assert_eq!(rows[1], ShareRow { candidate: "B".to_string(), count: 1, pct: 25.0 });
    }

    #[test]
    fn simulated_total_is_base_plus_undecided() {
        let matcher = UndecidedMatcher::default();
        let set = base_set();

        let base_total: u64 = aggregate::candidate_counts(&set).iter().map(|(_, n)| n).sum();
        let undecided = aggregate::undecided_count(&set, &matcher) as u64;

        let simulated: u64 = simulate(&set, "B", &matcher)
            .unwrap()
            .iter()
            .map(|r| r.count)
            .sum();
        assert_eq!(simulated, base_total + undecided);
    }

    #[test]
    fn unknown_target_is_rejected() {
        let matcher = UndecidedMatcher::default();
        let err = simulate(&base_set(), "C", &matcher).unwrap_err();
        assert!(matches!(err, EngineError::UnknownCandidate(name) if name == "C"));
    }

    #[test]
    fn empty_set_has_no_valid_target() {
        let matcher = UndecidedMatcher::default();
        assert!(simulate(&RespondentSet::new(vec![]), "A", &matcher).is_err());
    }
}
