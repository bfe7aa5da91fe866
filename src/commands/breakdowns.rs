//! Demographic and thematic breakdown views over the filtered set.

use colored::*;
use itertools::Itertools;

use crate::engine::aggregate::{self, UndecidedMatcher};
use crate::model::{Field, RespondentSet};

fn key_label(key: &[Option<String>]) -> String {
    key.iter()
        .map(|v| v.as_deref().unwrap_or("Non renseigné"))
        .collect::<Vec<_>>()
        .join(" / ")
}

fn print_cross_tab(set: &RespondentSet, fields: &[Field], limit: Option<usize>) {
    let groups = aggregate::cross_tab_sorted(set, fields);
    if groups.is_empty() {
        println!("{}", "Aucune donnée pour ce filtre".bright_yellow());
        return;
    }
    let header = fields.iter().map(|f| f.label()).join(" × ");
    println!("  {:<42} {:>5}", header.bold(), "n".bold());
    let shown = limit.unwrap_or(groups.len());
    for (key, count) in groups.iter().take(shown) {
        println!("  {:<42} {:>5}", key_label(key), count);
    }
}

/// Candidate support by age bracket, plus the dominant voter profiles.
pub fn profiles(set: &RespondentSet) {
    println!("{}", "👥 Analyse par Tranche d'Âge".bright_cyan().bold());
    print_cross_tab(set, &[Field::AgeBracket, Field::Candidate], None);

    println!();
    println!("{}", "🧠 Profils dominants détectés".bold());
    print_cross_tab(
        set,
        &[Field::AgeBracket, Field::Sex, Field::Candidate],
        Some(10),
    );
}

/// Stated priorities, one respondent possibly contributing several.
pub fn priorities(set: &RespondentSet) {
    println!("{}", "🧾 Priorités des répondants".bright_cyan().bold());
    let tokens = aggregate::explode_multi_value(set, Field::StatedPriority, ",");
    if tokens.is_empty() {
        println!("{}", "Aucune priorité exprimée".bright_yellow());
        return;
    }
    for (priority, count) in &tokens {
        println!("  {:<42} {:>5}", priority, count);
    }

    println!();
    println!("{}", "Principaux problèmes cités".bold());
    for row in aggregate::share_of_field(set, Field::StatedProblem) {
        println!("  {:<42} {:>6.2} %", row.candidate, row.pct);
    }
}

/// Results by voting place.
pub fn places(set: &RespondentSet) {
    println!("{}", "📍 Résultats par Bureau de Vote".bright_cyan().bold());
    print_cross_tab(set, &[Field::VotingPlace, Field::Candidate], None);
}

/// Who the undecided respondents are.
pub fn undecided(set: &RespondentSet, matcher: &UndecidedMatcher) {
    println!("{}", "🗳️  Analyse des Indécis".bright_cyan().bold());

    let undecided_set = set.subset(|r| matcher.matches(r.decision_status.as_deref()));
    println!(
        "Nombre d'indécis : {}",
        undecided_set.len().to_string().bright_white().bold()
    );

    if !undecided_set.is_empty() {
        println!();
        print_cross_tab(&undecided_set, &[Field::AgeBracket, Field::Sex], None);
    }

    println!();
    println!("{}", "Répartition des statuts de choix".bold());
    for row in aggregate::share_of_field(set, Field::DecisionStatus) {
        println!("  {:<42} {:>6.2} %", row.candidate, row.pct);
    }
}
