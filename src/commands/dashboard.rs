//! Global results view: ranking, leader metrics, undecided share.

use colored::*;

use crate::engine::aggregate::{self, UndecidedMatcher};
use crate::engine::ranking;
use crate::model::RespondentSet;

pub fn dashboard(set: &RespondentSet, matcher: &UndecidedMatcher) {
    println!("{}", "📊 Résultats Globaux".bright_cyan().bold());
    println!("{}", "=".repeat(50).bright_cyan());

    let shares = aggregate::share_of(set);
    let undecided = aggregate::undecided_rate(set, matcher);

    println!(
        "Répondants : {}",
        set.len().to_string().bright_white().bold()
    );
    println!("Indécis    : {:.1} %", undecided);

    match ranking::rank(&shares) {
        Some(standings) => {
            println!(
                "Leader     : {} ({:.2} %)",
                standings.leader.bright_green().bold(),
                standings.leader_pct
            );
            if let Some(second) = &standings.second {
                println!("Second     : {} ({:.2} %)", second, standings.second_pct);
            }
            println!("Écart      : {:.2} points", standings.margin);

            println!();
            if standings.leader_pct > 50.0 {
                println!("{}", "✅ Position dominante".bright_green());
            } else if standings.margin < 5.0 {
                println!("{}", "⚠️  Course très serrée".bright_yellow());
            } else {
                println!("{}", "ℹ️  Avantage modéré".bright_blue());
            }
        }
        None => println!("{}", "Aucune intention de vote exprimée".bright_yellow()),
    }

    if !shares.is_empty() {
        println!();
        println!("{}", "🏆 Classement des candidats".bold());
        for row in &shares {
            println!("  {:<28} {:>6.2} %  ({} voix)", row.candidate, row.pct, row.count);
        }
    }
}
