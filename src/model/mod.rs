use serde::{Deserialize, Serialize};

/// One survey response, as delivered by the loader.
///
/// Every field is already trimmed; a missing answer is `None`, never an
/// empty string, so aggregation code can rely on `Option` alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Respondent {
    pub candidate: Option<String>,
    pub age_bracket: Option<String>,
    pub sex: Option<String>,
    pub quarter: Option<String>,
    pub voting_place: Option<String>,
    pub stated_problem: Option<String>,
    pub stated_priority: Option<String>,
    pub decision_status: Option<String>,
}

/// Attribute selector for the generic aggregation operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Candidate,
    AgeBracket,
    Sex,
    Quarter,
    VotingPlace,
    StatedProblem,
    StatedPriority,
    DecisionStatus,
}

impl Field {
    /// Display label, matching the questionnaire's short column names.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Candidate => "candidat",
            Field::AgeBracket => "age",
            Field::Sex => "sexe",
            Field::Quarter => "quartier",
            Field::VotingPlace => "lieu",
            Field::StatedProblem => "probleme",
            Field::StatedPriority => "priorite",
            Field::DecisionStatus => "choix_statut",
        }
    }
}

impl Respondent {
    /// Borrow the value of one attribute, if answered.
    pub fn get(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Candidate => &self.candidate,
            Field::AgeBracket => &self.age_bracket,
            Field::Sex => &self.sex,
            Field::Quarter => &self.quarter,
            Field::VotingPlace => &self.voting_place,
            Field::StatedProblem => &self.stated_problem,
            Field::StatedPriority => &self.stated_priority,
            Field::DecisionStatus => &self.decision_status,
        };
        value.as_deref()
    }
}

/// Multi-select filter over the three sidebar dimensions.
///
/// Within a dimension the selected values are OR-ed; across dimensions the
/// constraints are AND-ed. An empty selection leaves that dimension
/// unconstrained.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SurveyFilter {
    pub quarters: Vec<String>,
    pub voting_places: Vec<String>,
    pub sexes: Vec<String>,
}

impl SurveyFilter {
    pub fn is_empty(&self) -> bool {
        self.quarters.is_empty() && self.voting_places.is_empty() && self.sexes.is_empty()
    }

    fn matches(&self, respondent: &Respondent) -> bool {
        dimension_matches(&self.quarters, respondent.quarter.as_deref())
            && dimension_matches(&self.voting_places, respondent.voting_place.as_deref())
            && dimension_matches(&self.sexes, respondent.sex.as_deref())
    }
}

fn dimension_matches(selected: &[String], value: Option<&str>) -> bool {
    if selected.is_empty() {
        return true;
    }
    match value {
        Some(v) => selected.iter().any(|s| s == v),
        None => false,
    }
}

/// Ordered, filterable collection of respondents.
///
/// Derived views are always fresh collections; nothing here is mutated
/// after construction.
#[derive(Debug, Clone, Default)]
pub struct RespondentSet {
    respondents: Vec<Respondent>,
}

impl RespondentSet {
    pub fn new(respondents: Vec<Respondent>) -> Self {
        Self { respondents }
    }

    pub fn len(&self) -> usize {
        self.respondents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.respondents.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Respondent> {
        self.respondents.iter()
    }

    /// Apply the sidebar filter, returning a fresh set in original order.
    pub fn filter(&self, filter: &SurveyFilter) -> RespondentSet {
        self.subset(|r| filter.matches(r))
    }

    /// Generic subset in original order (zone slices, undecided slices).
    pub fn subset<F>(&self, predicate: F) -> RespondentSet
    where
        F: Fn(&Respondent) -> bool,
    {
        RespondentSet {
            respondents: self
                .respondents
                .iter()
                .filter(|r| predicate(r))
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn respondent(quarter: &str, place: &str, sex: &str) -> Respondent {
        Respondent {
            quarter: Some(quarter.to_string()),
            voting_place: Some(place.to_string()),
            sex: Some(sex.to_string()),
            ..Respondent::default()
        }
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let set = RespondentSet::new(vec![
            respondent("Ndénatte", "Ecole 1", "Homme"),
            respondent("Tonghor", "Ecole 2", "Femme"),
        ]);
        assert_eq!(set.filter(&SurveyFilter::default()).len(), 2);
    }

    #[test]
    fn filter_is_or_within_and_across_dimensions() {
        let set = RespondentSet::new(vec![
            respondent("Ndénatte", "Ecole 1", "Homme"),
            respondent("Tonghor", "Ecole 1", "Femme"),
            respondent("Ndénatte", "Ecole 2", "Femme"),
        ]);

        let filter = SurveyFilter {
            quarters: vec!["Ndénatte".to_string(), "Tonghor".to_string()],
            voting_places: vec!["Ecole 1".to_string()],
            sexes: vec![],
        };

        let filtered = set.filter(&filter);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.voting_place.as_deref() == Some("Ecole 1")));
    }

    #[test]
    fn missing_value_never_matches_an_active_dimension() {
        let mut anonymous = respondent("Ndénatte", "Ecole 1", "Homme");
        anonymous.sex = None;
        let set = RespondentSet::new(vec![anonymous]);

        let filter = SurveyFilter {
            sexes: vec!["Homme".to_string()],
            ..SurveyFilter::default()
        };
        assert!(set.filter(&filter).is_empty());
    }

    #[test]
    fn subset_preserves_order() {
        let set = RespondentSet::new(vec![
            respondent("A", "p", "s"),
            respondent("B", "p", "s"),
            respondent("A", "p", "s"),
        ]);
        let a = set.subset(|r| r.quarter.as_deref() == Some("A"));
        assert_eq!(a.len(), 2);
    }
}
