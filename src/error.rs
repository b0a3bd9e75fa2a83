use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Failure to turn a value into a number, a date, or an aggregate.
#[derive(Debug, Error, Diagnostic)]
pub enum ValueError {
    #[error("Not a number: `{0}`")]
    #[diagnostic(code(forecast::not_numeric))]
    NotNumeric(String),
    #[error("Number out of range: `{0}`")]
    #[diagnostic(code(forecast::out_of_range))]
    OutOfRange(String),
    #[error("Empty sequence")]
    #[diagnostic(
        code(forecast::empty_sequence),
        help("at least one value is needed to compute an aggregate")
    )]
    EmptySequence,
    #[error("Invalid ISO-8601 date: `{input}`")]
    #[diagnostic(code(forecast::invalid_date), help("expected something like `2021-07-06`"))]
    InvalidDate {
        input: String,
        #[source]
        source: time::error::Parse,
    },
}

#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("Could not read `{}`", path.display())]
    #[diagnostic(code(forecast::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not read the header line")]
    #[diagnostic(code(forecast::io))]
    Read(#[source] std::io::Error),
    #[error("Missing header line")]
    #[diagnostic(
        code(forecast::missing_header),
        help("the first line should be `date,min,max`")
    )]
    MissingHeader,
    #[error(transparent)]
    #[diagnostic(code(forecast::csv))]
    Csv(#[from] csv::Error),
    #[error("Line {line}: missing `{column}` column")]
    #[diagnostic(code(forecast::missing_column), help("rows are `date,min,max`"))]
    MissingColumn { line: u64, column: &'static str },
    #[error("Line {line}: bad `{column}` temperature")]
    #[diagnostic(code(forecast::bad_temperature))]
    Temperature {
        line: u64,
        column: &'static str,
        #[source]
        source: ValueError,
    },
}
