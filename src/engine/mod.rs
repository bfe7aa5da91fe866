//! The analytics engine: pure transforms from a filtered respondent set to
//! shares, standings, risk scores, zone classifications and simulations.
//!
//! Nothing in this module performs I/O or holds shared state; every function
//! reads only its arguments and is safe to call repeatedly.

use serde::{Deserialize, Serialize};

pub mod aggregate;
pub mod ranking;
pub mod risk;
pub mod simulate;
pub mod zones;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("unknown candidate: {0}")]
    UnknownCandidate(String),
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;

/// One line of a candidate share table.
///
/// `pct` is rounded to 2 decimals over the non-null candidate total. Rows
/// are ordered by count descending; equal counts keep first-encounter
/// order, which makes the table deterministic for a given input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareRow {
    pub candidate: String,
    pub count: u64,
    pub pct: f64,
}

/// Round to 2 decimals, the precision of every displayed percentage.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::round2;

    #[test]
    fn round2_is_two_decimals() {
        assert_eq!(round2(66.66666), 66.67);
        assert_eq!(round2(33.333333), 33.33);
        assert_eq!(round2(50.0), 50.0);
    }
}
