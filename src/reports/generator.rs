//! Assemble the full strategic report from engine outputs.

use std::fs;
use std::path::Path;

use chrono::Utc;

use super::{PriorityCount, ReportResult, RiskSummary, SurveyReport};
use crate::engine::aggregate::{self, UndecidedMatcher};
use crate::engine::{ranking, risk, zones};
use crate::model::{Field, RespondentSet, SurveyFilter};

/// Run the whole pipeline over the filtered set and collect the results
/// into one serializable document.
pub fn build_report(
    set: &RespondentSet,
    filter: &SurveyFilter,
    matcher: &UndecidedMatcher,
) -> SurveyReport {
    let shares = aggregate::share_of(set);
    let standings = ranking::rank(&shares);
    let undecided_pct = aggregate::undecided_rate(set, matcher);

    let margin = standings.as_ref().map_or(0.0, |s| s.margin);
    let score = risk::risk_index(undecided_pct, margin);

    let zone_table = zones::analyze_zones(set, matcher);
    let recommendation = zones::recommendation(&zone_table);

    let priorities = aggregate::explode_multi_value(set, Field::StatedPriority, ",")
        .into_iter()
        .map(|(priority, count)| PriorityCount { priority, count })
        .collect();

    SurveyReport {
        generated_at: Utc::now(),
        filter: filter.clone(),
        total_respondents: set.len(),
        shares,
        standings,
        undecided_pct,
        risk: RiskSummary {
            score,
            tier: risk::classify_risk(score),
        },
        zones: zone_table,
        recommendation,
        priorities,
    }
}

/// Write the report as pretty-printed JSON.
pub fn write_report(report: &SurveyReport, path: &Path) -> ReportResult<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::risk::RiskTier;
    use crate::model::Respondent;

    fn voter(candidate: Option<&str>, zone: &str, status: &str) -> Respondent {
        Respondent {
            candidate: candidate.map(|s| s.to_string()),
            quarter: Some(zone.to_string()),
            decision_status: Some(status.to_string()),
            ..Respondent::default()
        }
    }

    #[test]
    fn report_covers_the_whole_pipeline() {
        let set = RespondentSet::new(vec![
            voter(Some("A"), "Tonghor", "Décidé"),
            voter(Some("A"), "Tonghor", "Décidé"),
            voter(Some("A"), "Tonghor", "Décidé"),
            voter(Some("B"), "Tonghor", "Décidé"),
            voter(Some("B"), "Tonghor", "Peut changer"),
        ]);
        let matcher = UndecidedMatcher::default();
        let report = build_report(&set, &SurveyFilter::default(), &matcher);

        assert_eq!(report.total_respondents, 5);
        assert_eq!(report.shares.len(), 2);
        assert_eq!(report.standings.as_ref().unwrap().leader, "A");
        assert_eq!(report.undecided_pct, 20.0);
        assert_eq!(report.zones.len(), 1);
        assert!(report.recommendation.is_some());
    }

    #[test]
    fn empty_set_report_uses_sentinels() {
        let set = RespondentSet::new(vec![]);
        let matcher = UndecidedMatcher::default();
        let report = build_report(&set, &SurveyFilter::default(), &matcher);

        assert_eq!(report.total_respondents, 0);
        assert!(report.shares.is_empty());
        assert!(report.standings.is_none());
        assert_eq!(report.undecided_pct, 0.0);
        assert!(report.zones.is_empty());
        assert!(report.recommendation.is_none());
        // 0 undecided, 0 margin: raw score 30, right on the competitive edge.
        assert_eq!(report.risk.score, 30.0);
        assert_eq!(report.risk.tier, RiskTier::Competitive);
    }

    #[test]
    fn report_serializes_to_json() {
        let set = RespondentSet::new(vec![voter(Some("A"), "Tonghor", "Décidé")]);
        let matcher = UndecidedMatcher::default();
        let report = build_report(&set, &SurveyFilter::default(), &matcher);

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"totalRespondents\":1"));
        assert!(json.contains("\"leaderPct\":100.0"));
    }
}
