//! Frequency and percentage breakdowns over the respondent set.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use super::{round2, ShareRow};
use crate::model::{Field, RespondentSet};

lazy_static! {
    // The questionnaire marks undecided answers with «Peut changer».
    static ref DEFAULT_UNDECIDED: Regex = Regex::new("Peut").unwrap();
}

/// Predicate deciding whether a decision status marks an undecided
/// respondent.
///
/// The default matches the literal `Peut` anywhere in the status,
/// case-sensitively, and a missing status never matches — that is the
/// questionnaire's historical behavior and is kept as the documented
/// default rather than "fixed".
#[derive(Debug, Clone)]
pub struct UndecidedMatcher {
    pattern: Regex,
}

impl UndecidedMatcher {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    pub fn matches(&self, status: Option<&str>) -> bool {
        match status {
            Some(s) => self.pattern.is_match(s),
            None => false,
        }
    }
}

impl Default for UndecidedMatcher {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_UNDECIDED.clone(),
        }
    }
}

/// Count distinct values in first-encounter order.
pub(crate) fn value_counts<'a, I>(values: I) -> Vec<(String, u64)>
where
    I: Iterator<Item = &'a str>,
{
    let mut counts: Vec<(String, u64)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for value in values {
        match index.get(value) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                index.insert(value.to_string(), counts.len());
                counts.push((value.to_string(), 1));
            }
        }
    }

    counts
}

/// Candidate counts in first-encounter order, null answers dropped.
pub(crate) fn candidate_counts(set: &RespondentSet) -> Vec<(String, u64)> {
    value_counts(set.iter().filter_map(|r| r.get(Field::Candidate)))
}

/// Candidate share table. The denominator is the number of non-null
/// candidate answers, not the set size; an empty or all-null set yields an
/// empty table rather than dividing by zero.
pub fn share_of(set: &RespondentSet) -> Vec<ShareRow> {
    share_of_field(set, Field::Candidate)
}

/// Share table over any attribute, with the same null and ordering rules
/// as [`share_of`].
pub fn share_of_field(set: &RespondentSet, field: Field) -> Vec<ShareRow> {
    let counts = value_counts(set.iter().filter_map(|r| r.get(field)));
    let total: u64 = counts.iter().map(|(_, n)| n).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut rows: Vec<ShareRow> = counts
        .into_iter()
        .map(|(candidate, count)| ShareRow {
            candidate,
            count,
            pct: round2(count as f64 / total as f64 * 100.0),
        })
        .collect();

    // Stable: equal counts keep first-encounter order.
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

/// Number of undecided respondents in the set.
pub fn undecided_count(set: &RespondentSet, matcher: &UndecidedMatcher) -> usize {
    set.iter()
        .filter(|r| matcher.matches(r.decision_status.as_deref()))
        .count()
}

/// Undecided share of the whole set, in percent.
///
/// The denominator is the full set size (null statuses count in the
/// denominator, never in the numerator). An empty set yields 0.0, the
/// documented sentinel for "no data".
pub fn undecided_rate(set: &RespondentSet, matcher: &UndecidedMatcher) -> f64 {
    if set.is_empty() {
        return 0.0;
    }
    undecided_count(set, matcher) as f64 / set.len() as f64 * 100.0
}

/// Group respondents by a tuple of attributes, in group-discovery order.
///
/// Unlike [`share_of`], missing values are legal group keys here: a
/// respondent without a candidate still lands in an (age, None) bucket.
pub fn cross_tab(set: &RespondentSet, fields: &[Field]) -> Vec<(Vec<Option<String>>, usize)> {
    let mut groups: Vec<(Vec<Option<String>>, usize)> = Vec::new();
    let mut index: HashMap<Vec<Option<String>>, usize> = HashMap::new();

    for respondent in set.iter() {
        let key: Vec<Option<String>> = fields
            .iter()
            .map(|f| respondent.get(*f).map(|v| v.to_string()))
            .collect();

        match index.get(&key) {
            Some(&pos) => groups[pos].1 += 1,
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, 1));
            }
        }
    }

    groups
}

/// [`cross_tab`], ordered by count descending for display (stable).
pub fn cross_tab_sorted(set: &RespondentSet, fields: &[Field]) -> Vec<(Vec<Option<String>>, usize)> {
    let mut groups = cross_tab(set, fields);
    groups.sort_by(|a, b| b.1.cmp(&a.1));
    groups
}

/// Token frequencies of a delimited multi-value field, count descending.
///
/// One respondent can contribute to several buckets. Null answers are
/// dropped before splitting; tokens are trimmed and empty tokens ignored.
pub fn explode_multi_value(set: &RespondentSet, field: Field, delimiter: &str) -> Vec<(String, u64)> {
    let mut counts = value_counts(
        set.iter()
            .filter_map(|r| r.get(field))
            .flat_map(|value| value.split(delimiter))
            .map(|token| token.trim())
            .filter(|token| !token.is_empty()),
    );
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
