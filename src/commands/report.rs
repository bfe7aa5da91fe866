//! Full JSON report export.

use std::path::Path;

use colored::*;

use crate::engine::aggregate::UndecidedMatcher;
use crate::model::{RespondentSet, SurveyFilter};
use crate::reports::generator::{build_report, write_report};
use crate::reports::ReportResult;

pub fn report(
    set: &RespondentSet,
    filter: &SurveyFilter,
    matcher: &UndecidedMatcher,
    out: &Path,
) -> ReportResult<()> {
    let report = build_report(set, filter, matcher);
    write_report(&report, out)?;

    if !filter.is_empty() {
        println!("{}", "ℹ️  Rapport calculé sur un sous-ensemble filtré".bright_blue());
    }
    println!(
        "✅ Rapport écrit : {} ({} répondants)",
        out.display().to_string().bright_green(),
        report.total_respondents.to_string().bright_white().bold()
    );
    Ok(())
}
