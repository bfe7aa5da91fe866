use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::engine::ranking::Standings;
use crate::engine::risk::RiskTier;
use crate::engine::zones::{Recommendation, ZoneMetrics};
use crate::engine::ShareRow;
use crate::model::SurveyFilter;

pub mod generator;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type ReportResult<T> = std::result::Result<T, ReportError>;

/// The full strategic report, serialized as JSON for the campaign's
/// formatting collaborators (tables, charts, document layout).
#[derive(Debug, Serialize)]
pub struct SurveyReport {
    #[serde(rename = "generatedAt")]
    pub generated_at: DateTime<Utc>,
    pub filter: SurveyFilter,
    #[serde(rename = "totalRespondents")]
    pub total_respondents: usize,
    pub shares: Vec<ShareRow>,
    pub standings: Option<Standings>,
    #[serde(rename = "undecidedPct")]
    pub undecided_pct: f64,
    pub risk: RiskSummary,
    pub zones: Vec<ZoneMetrics>,
    pub recommendation: Option<Recommendation>,
    pub priorities: Vec<PriorityCount>,
}

/// Whole-set instability summary.
#[derive(Debug, Serialize)]
pub struct RiskSummary {
    pub score: f64,
    pub tier: RiskTier,
}

#[derive(Debug, Serialize)]
pub struct PriorityCount {
    pub priority: String,
    pub count: u64,
}
