//! Loader for the field survey CSV export.
//!
//! This is the boundary collaborator in front of the engine: it maps the
//! questionnaire's long French headers to short column names, trims every
//! cell and normalizes blank cells to `None`. The engine itself never
//! touches a file.

use std::fs::File;
use std::io::Cursor;
use std::path::Path;

use itertools::izip;
use polars::frame::DataFrame;
use polars::prelude::{CsvReadOptions, PolarsError, SerReader};

use crate::model::{Respondent, RespondentSet};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to open survey file {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to read survey CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("missing survey column: {0}")]
    MissingColumn(&'static str),
}

pub type LoadResult<T> = std::result::Result<T, LoadError>;

/// Canonical short name and accepted questionnaire headers, per column.
const COLUMNS: [(&str, &str); 8] = [
    (
        "candidat",
        "Si l’élection avait lieu aujourd’hui, pour qui voteriez-vous ?",
    ),
    ("age", "Tranche d’âge"),
    ("sexe", "Sexe"),
    ("quartier", "Quartier"),
    ("lieu", "Lieu de vote"),
    (
        "probleme",
        "Quel est le principal problème à Yoff selon vous ?",
    ),
    ("priorite", "Qu’attendez-vous en priorité d’un candidat ?"),
    ("choix_statut", "Votre choix est-il :"),
];

/// Read the survey export from disk.
pub fn read_survey_csv(path: &Path) -> LoadResult<RespondentSet> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.display().to_string(),
        source,
    })?;
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0)) // every survey column is text
        .into_reader_with_file_handle(file)
        .finish()?;
    respondents_from_frame(df)
}

/// Read a survey from an in-memory CSV string.
pub fn read_survey_csv_str(csv: &str) -> LoadResult<RespondentSet> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(csv.as_bytes()))
        .finish()?;
    respondents_from_frame(df)
}

fn respondents_from_frame(df: DataFrame) -> LoadResult<RespondentSet> {
    let candidate = string_values(&df, COLUMNS[0])?;
    let age_bracket = string_values(&df, COLUMNS[1])?;
    let sex = string_values(&df, COLUMNS[2])?;
    let quarter = string_values(&df, COLUMNS[3])?;
    let voting_place = string_values(&df, COLUMNS[4])?;
    let stated_problem = string_values(&df, COLUMNS[5])?;
    let stated_priority = string_values(&df, COLUMNS[6])?;
    let decision_status = string_values(&df, COLUMNS[7])?;

    let respondents = izip!(
        candidate,
        age_bracket,
        sex,
        quarter,
        voting_place,
        stated_problem,
        stated_priority,
        decision_status
    )
    .map(
        |(
            candidate,
            age_bracket,
            sex,
            quarter,
            voting_place,
            stated_problem,
            stated_priority,
            decision_status,
        )| Respondent {
            candidate,
            age_bracket,
            sex,
            quarter,
            voting_place,
            stated_problem,
            stated_priority,
            decision_status,
        },
    )
    .collect();

    Ok(RespondentSet::new(respondents))
}

/// Extract one column as trimmed optional strings, accepting either the
/// short name or the full questionnaire header (headers themselves may
/// carry stray whitespace in the export).
fn string_values(df: &DataFrame, (short, header): (&'static str, &str)) -> LoadResult<Vec<Option<String>>> {
    let name = df
        .get_column_names()
        .into_iter()
        .find(|n| {
            let trimmed = n.trim();
            trimmed == short || trimmed == header
        })
        .ok_or(LoadError::MissingColumn(short))?
        .to_string();

    let column = df.column(&name)?;
    let values = column.str()?.into_iter().map(clean).collect();
    Ok(values)
}

/// Trim a cell; blank or missing becomes `None`.
fn clean(cell: Option<&str>) -> Option<String> {
    match cell {
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        None => None,
    }
}
