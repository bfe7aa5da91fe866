//! Per-quarter strategic table, overall risk index and recommendation.

use colored::*;

use crate::engine::aggregate::{self, UndecidedMatcher};
use crate::engine::{ranking, risk, zones as zone_engine};
use crate::model::RespondentSet;

pub fn zones(set: &RespondentSet, matcher: &UndecidedMatcher) {
    println!("{}", "⚠️  Indice de Risque Électoral".bright_cyan().bold());

    let shares = aggregate::share_of(set);
    let undecided_pct = aggregate::undecided_rate(set, matcher);
    let margin = ranking::rank(&shares).map_or(0.0, |s| s.margin);
    let score = risk::risk_index(undecided_pct, margin);
    let tier = risk::classify_risk(score);

    println!("Indice de risque : {:.1} %", score);
    println!("{}", tier.label().bold());

    println!();
    println!("{}", "🔥 Zones Prioritaires d'Action".bright_cyan().bold());

    let table = zone_engine::analyze_zones(set, matcher);
    if table.is_empty() {
        println!("{}", "Aucun quartier avec un échantillon suffisant".bright_yellow());
        return;
    }

    println!(
        "  {:<20} {:>6} {:>10} {:>9} {:>7}  {}",
        "Quartier", "Total", "% Indécis", "Écart", "Score", "Niveau"
    );
    for z in &table {
        println!(
            "  {:<20} {:>6} {:>10.1} {:>9.1} {:>7.1}  {}",
            z.zone, z.total, z.undecided_pct, z.margin, z.score, z.level.label()
        );
    }

    if let Some(rec) = zone_engine::recommendation(&table) {
        println!();
        println!("{}", "🎯 Recommandation Stratégique".bold());
        println!("{}", rec.message().bright_white().bold());
    }
}
