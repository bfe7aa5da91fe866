//! Per-quarter strategic analysis: the full share → margin → risk pipeline
//! applied zone by zone.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::Serialize;

use super::aggregate::{self, UndecidedMatcher};
use super::ranking;
use super::risk::{self, ZoneLevel};
use crate::model::RespondentSet;

/// Zones with fewer respondents than this are excluded outright.
pub const MIN_ZONE_SAMPLE: usize = 5;

/// Derived metrics for one qualifying zone.
#[derive(Debug, Clone, Serialize)]
pub struct ZoneMetrics {
    pub zone: String,
    pub total: usize,
    #[serde(rename = "undecidedPct")]
    pub undecided_pct: f64,
    pub margin: f64,
    pub score: f64,
    pub level: ZoneLevel,
}

/// Top-priority call derived from the highest-scored zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub zone: String,
    pub level: ZoneLevel,
}

impl Recommendation {
    /// Campaign-facing message keyed off the zone's level.
    pub fn message(&self) -> String {
        match self.level {
            ZoneLevel::Red => format!("Action urgente recommandée dans : {}", self.zone),
            ZoneLevel::Orange => format!("Zone à surveiller de près : {}", self.zone),
            ZoneLevel::Green => format!("Zone stable : {}", self.zone),
        }
    }
}

/// Analyze every distinct non-null zone of the filtered set.
///
/// Zones with fewer than [`MIN_ZONE_SAMPLE`] respondents or fewer than two
/// distinct candidates are skipped entirely, never zero-filled. The result
/// is sorted by score descending; ties keep zone-discovery order.
pub fn analyze_zones(set: &RespondentSet, matcher: &UndecidedMatcher) -> Vec<ZoneMetrics> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut zones: Vec<ZoneMetrics> = Vec::new();

    for respondent in set.iter() {
        let zone = match respondent.quarter.as_deref() {
            Some(z) => z,
            None => continue,
        };
        if !seen.insert(zone) {
            continue;
        }

        let subset = set.subset(|r| r.quarter.as_deref() == Some(zone));
        if subset.len() < MIN_ZONE_SAMPLE {
            continue;
        }

        let shares = aggregate::share_of(&subset);
        if shares.len() < 2 {
            continue;
        }

        // shares has at least two rows, so standings always exist here.
        let standings = match ranking::rank(&shares) {
            Some(s) => s,
            None => continue,
        };

        let undecided_pct = aggregate::undecided_rate(&subset, matcher);
        let score = risk::risk_index(undecided_pct, standings.margin);

        zones.push(ZoneMetrics {
            zone: zone.to_string(),
            total: subset.len(),
            undecided_pct,
            margin: standings.margin,
            score,
            level: risk::classify_zone_priority(score),
        });
    }

    // Stable sort; NaN cannot occur since the score is clamped.
    zones.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    zones
}

/// The strategic recommendation for the highest-scored zone, if any zone
/// qualified at all.
pub fn recommendation(zones: &[ZoneMetrics]) -> Option<Recommendation> {
    zones.first().map(|top| Recommendation {
        zone: top.zone.clone(),
        level: top.level,
    })
}
