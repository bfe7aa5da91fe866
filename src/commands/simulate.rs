//! What-if view: all undecided respondents rally to one candidate.

use colored::*;

use crate::engine::aggregate::{self, UndecidedMatcher};
use crate::engine::{simulate as sim, EngineResult};
use crate::model::RespondentSet;

pub fn simulate(set: &RespondentSet, target: &str, matcher: &UndecidedMatcher) -> EngineResult<()> {
    println!("{}", "📊 Simulation de Report des Indécis".bright_cyan().bold());

    let undecided = aggregate::undecided_count(set, matcher);
    let rows = sim::simulate(set, target, matcher)?;

    println!(
        "Report de {} indécis vers {}",
        undecided.to_string().bright_white().bold(),
        target.bright_green().bold()
    );
    println!();
    for row in &rows {
        println!("  {:<28} {:>6.2} %  ({} voix)", row.candidate, row.pct, row.count);
    }

    Ok(())
}
