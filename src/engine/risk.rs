//! Composite instability scoring and its two classification ladders.
//!
//! The score formula is an empirical weighting inherited from the field
//! campaign, not a statistical model; it is a fixed contract.

use serde::Serialize;

/// Race-volatility tier over the composite risk index (30 / 60 cutoffs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskTier {
    Stable,
    Competitive,
    Unstable,
}

impl RiskTier {
    /// Operator-facing label, as shown on the risk page.
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Stable => "Situation stable",
            RiskTier::Competitive => "Situation compétitive",
            RiskTier::Unstable => "Situation instable - risque élevé",
        }
    }
}

/// Per-zone action level. Deliberately thresholded at 35 / 60, not the
/// 30 / 60 of [`RiskTier`]; the two ladders are not interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ZoneLevel {
    #[serde(rename = "VERT")]
    Green,
    #[serde(rename = "ORANGE")]
    Orange,
    #[serde(rename = "ROUGE")]
    Red,
}

impl ZoneLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ZoneLevel::Green => "🟢 VERT",
            ZoneLevel::Orange => "🟡 ORANGE",
            ZoneLevel::Red => "🟥 ROUGE",
        }
    }
}

/// Composite instability index, clamped to [0, 100].
///
/// `raw = undecided_pct * 0.5 + (10 - margin) * 3`; a comfortable margin
/// drives the raw value negative, which floors to 0.
pub fn risk_index(undecided_pct: f64, margin: f64) -> f64 {
    let raw = undecided_pct * 0.5 + (10.0 - margin) * 3.0;
    raw.max(0.0).min(100.0)
}

/// Half-open tiers: `[0, 30)` stable, `[30, 60)` competitive, `[60, _]`
/// unstable.
pub fn classify_risk(score: f64) -> RiskTier {
    if score < 30.0 {
        RiskTier::Stable
    } else if score < 60.0 {
        RiskTier::Competitive
    } else {
        RiskTier::Unstable
    }
}

/// Half-open zone ladder: `[0, 35)` green, `[35, 60)` orange, `[60, _]` red.
pub fn classify_zone_priority(score: f64) -> ZoneLevel {
    if score < 35.0 {
        ZoneLevel::Green
    } else if score < 60.0 {
        ZoneLevel::Orange
    } else {
        ZoneLevel::Red
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_clamped_low() {
        // The worked scenario: 25% undecided, 33.34-point margin.
        assert_eq!(risk_index(25.0, 33.34), 0.0);
    }

    #[test]
    fn index_is_clamped_high() {
        assert_eq!(risk_index(100.0, -100.0), 100.0);
    }

    #[test]
    fn index_stays_bounded() {
        for undecided in [0.0, 10.0, 50.0, 100.0] {
            for margin in [-100.0, -5.0, 0.0, 10.0, 100.0] {
                let score = risk_index(undecided, margin);
                assert!((0.0..=100.0).contains(&score), "score {} out of range", score);
            }
        }
    }

    #[test]
    fn risk_tier_boundaries() {
        assert_eq!(classify_risk(29.999), RiskTier::Stable);
        assert_eq!(classify_risk(30.0), RiskTier::Competitive);
        assert_eq!(classify_risk(59.999), RiskTier::Competitive);
        assert_eq!(classify_risk(60.0), RiskTier::Unstable);
    }

    #[test]
    fn zone_level_boundaries() {
        assert_eq!(classify_zone_priority(34.999), ZoneLevel::Green);
        assert_eq!(classify_zone_priority(35.0), ZoneLevel::Orange);
        assert_eq!(classify_zone_priority(60.0), ZoneLevel::Red);
    }

    #[test]
    fn the_two_ladders_disagree_between_30_and_35() {
        assert_eq!(classify_risk(32.0), RiskTier::Competitive);
        assert_eq!(classify_zone_priority(32.0), ZoneLevel::Green);
    }
}
