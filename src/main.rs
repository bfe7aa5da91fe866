mod auth;
mod commands;
mod engine;
mod formats;
mod model;
mod reports;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::*;

use crate::engine::aggregate::UndecidedMatcher;
use crate::model::SurveyFilter;

#[derive(Parser)]
struct Opts {
    /// Survey CSV export.
    #[clap(long, default_value = "data/sondage.csv")]
    data: PathBuf,
    /// Username for the private results gate.
    #[clap(long)]
    username: Option<String>,
    /// Password for the private results gate.
    #[clap(long)]
    password: Option<String>,
    /// Restrict to one or more quarters (repeatable).
    #[clap(long = "quartier")]
    quarters: Vec<String>,
    /// Restrict to one or more voting places (repeatable).
    #[clap(long = "lieu")]
    voting_places: Vec<String>,
    /// Restrict to one or more sexes (repeatable).
    #[clap(long = "sexe")]
    sexes: Vec<String>,
    /// Override the undecided-status pattern (default "Peut", case-sensitive).
    #[clap(long)]
    undecided_pattern: Option<String>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Global results: ranking, leader metrics, undecided share.
    Dashboard,
    /// Candidate support by age bracket and dominant voter profiles.
    Profiles,
    /// Stated priorities of the respondents.
    Priorities,
    /// Results by voting place.
    Places,
    /// Who the undecided respondents are.
    Undecided,
    /// Per-quarter strategic table and recommendation.
    Zones,
    /// Reassign all undecided respondents to one candidate.
    Simulate {
        /// Candidate receiving the undecided votes.
        #[clap(long)]
        target: String,
    },
    /// Write the full strategic report as JSON.
    Report {
        /// Output path.
        #[clap(long, default_value = "rapport_sondage.json")]
        out: PathBuf,
    },
}

fn main() {
    let opts = Opts::parse();
    if let Err(e) = run(opts) {
        eprintln!("{} {}", "❌ Erreur :".bright_red().bold(), e);
        std::process::exit(1);
    }
}

fn run(opts: Opts) -> Result<(), Box<dyn std::error::Error>> {
    // Gate checked once here; the engine never sees credentials.
    let _session = auth::authenticate(opts.username.as_deref(), opts.password.as_deref())?;

    let matcher = match &opts.undecided_pattern {
        Some(pattern) => UndecidedMatcher::new(pattern)?,
        None => UndecidedMatcher::default(),
    };

    let survey = formats::sondage_csv::read_survey_csv(&opts.data)?;
    let filter = SurveyFilter {
        quarters: opts.quarters,
        voting_places: opts.voting_places,
        sexes: opts.sexes,
    };
    let set = survey.filter(&filter);

    match opts.command {
        Command::Dashboard => commands::dashboard(&set, &matcher),
        Command::Profiles => commands::profiles(&set),
        Command::Priorities => commands::priorities(&set),
        Command::Places => commands::places(&set),
        Command::Undecided => commands::undecided(&set, &matcher),
        Command::Zones => commands::zones(&set, &matcher),
        Command::Simulate { target } => commands::simulate(&set, &target, &matcher)?,
        Command::Report { out } => commands::report(&set, &filter, &matcher, &out)?,
    }

    Ok(())
}
