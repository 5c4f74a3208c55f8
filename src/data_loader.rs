use crate::error::AppError;
use crate::events::{BattedBall, DateRange, EventTable};
use chrono::{Datelike, NaiveDate};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

pub const DATE_COLUMN: &str = "Date";
pub const TEAM_COLUMN: &str = "PitcherTeam";
pub const PITCHER_COLUMN: &str = "Pitcher";
pub const BATTER_SIDE_COLUMN: &str = "BatterSide";
pub const PLAY_RESULT_COLUMN: &str = "PlayResult";
pub const BEARING_COLUMN: &str = "Bearing";
pub const DISTANCE_COLUMN: &str = "Distance";

/// Accepted date layouts, tried in order. Two-digit years go before
/// four-digit ones so `9/6/24` is not read as year 24.
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%m/%d/%y", "%m/%d/%Y", "%Y/%m/%d", "%m-%d-%Y"];

/// Days between 0001-01-01 and 1970-01-01, the epoch polars dates count from.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Loads a CSV file into a Polars DataFrame.
///
/// A path that does not exist is reported as `AppError::MissingInputFile`,
/// everything else surfaces as the underlying I/O or Polars error.
pub fn load_dataframe(path: &Path) -> Result<DataFrame, AppError> {
    if !path.exists() {
        return Err(AppError::MissingInputFile(path.to_path_buf()));
    }

    // Every column is read as text so a late decimal in a column of whole
    // numbers cannot fail the read. Typed columns are cast on extraction.
    let file = File::open(path)?;
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(file)
        .finish()
        .map_err(AppError::from)?;
    log::debug!(
        "read {} rows x {} cols from {}",
        df.height(),
        df.width(),
        path.display()
    );
    Ok(df)
}

/// Turns a raw frame into the team's events plus the file-wide date range.
///
/// The date range is taken over every row before the team filter, so all
/// pages of one report share the same season span.
pub fn load_events(mut df: DataFrame, team: &str) -> Result<EventTable, AppError> {
    let date_range = coerce_date_column(&mut df)?;

    let total_rows = df.height();
    let team_df = filter_team(df, team)?;
    log::info!(
        "{} of {} rows belong to team '{}'",
        team_df.height(),
        total_rows,
        team
    );

    let events = extract_events(&team_df)?;
    Ok(EventTable { events, date_range })
}

/// Parses one date cell. Anything after a space or `T` (a time component)
/// is ignored; unparseable values yield `None`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let token = raw.trim().split([' ', 'T']).next()?;
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(token, format).ok())
}

/// Replaces the `Date` column with a Date-typed column, coercing bad values
/// to null, and returns the min/max of the valid dates.
fn coerce_date_column(df: &mut DataFrame) -> Result<DateRange, AppError> {
    let parsed: Vec<Option<NaiveDate>> = string_values(df, DATE_COLUMN)?
        .iter()
        .map(|raw| raw.as_deref().and_then(parse_date))
        .collect();

    let invalid = parsed.iter().filter(|d| d.is_none()).count();
    if invalid > 0 {
        log::debug!("{} date values could not be parsed and were set to null", invalid);
    }

    let first = parsed.iter().flatten().min().copied();
    let last = parsed.iter().flatten().max().copied();
    let (Some(first), Some(last)) = (first, last) else {
        return Err(AppError::NoValidDates);
    };

    let days: Vec<Option<i32>> = parsed
        .iter()
        .map(|d| d.map(|d| d.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE))
        .collect();
    let dates = Series::new(DATE_COLUMN, days).cast(&DataType::Date)?;
    df.replace(DATE_COLUMN, dates)?;

    Ok(DateRange { first, last })
}

/// Keeps the rows whose `PitcherTeam` equals `team`.
fn filter_team(df: DataFrame, team: &str) -> Result<DataFrame, AppError> {
    require_column(&df, TEAM_COLUMN)?;
    let filtered = df
        .lazy()
        .filter(col(TEAM_COLUMN).cast(DataType::String).eq(lit(team)))
        .collect()?;
    Ok(filtered)
}

fn extract_events(df: &DataFrame) -> Result<Vec<BattedBall>, AppError> {
    let dates = date_values(df)?;
    let pitchers = string_values(df, PITCHER_COLUMN)?;
    let teams = string_values(df, TEAM_COLUMN)?;
    let sides = string_values(df, BATTER_SIDE_COLUMN)?;
    let results = string_values(df, PLAY_RESULT_COLUMN)?;
    let bearings = float_values(df, BEARING_COLUMN)?;
    let distances = float_values(df, DISTANCE_COLUMN)?;

    let events = (0..df.height())
        .map(|i| BattedBall {
            date: dates[i],
            pitcher: pitchers[i].clone(),
            pitcher_team: teams[i].clone(),
            batter_side: sides[i].as_deref().and_then(|s| s.parse().ok()),
            play_result: results[i].as_deref().and_then(|s| s.parse().ok()),
            bearing: bearings[i],
            distance: distances[i],
        })
        .collect();
    Ok(events)
}

fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Series, AppError> {
    df.column(name)
        .map_err(|_| AppError::ColumnNotFound(name.to_string()))
}

/// Reads a column as strings, kept exactly as written; empty cells become
/// `None`.
fn string_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>, AppError> {
    let series = require_column(df, name)?.cast(&DataType::String)?;
    let values = series
        .str()?
        .into_iter()
        .map(|v| v.filter(|s| !s.is_empty()).map(str::to_string))
        .collect();
    Ok(values)
}

/// Reads a column as `f64`, non-numeric and non-finite cells become `None`.
fn float_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>, AppError> {
    let series = require_column(df, name)?.cast(&DataType::Float64)?;
    let values = series
        .f64()?
        .into_iter()
        .map(|v| v.filter(|x| x.is_finite()))
        .collect();
    Ok(values)
}

fn date_values(df: &DataFrame) -> Result<Vec<Option<NaiveDate>>, AppError> {
    let series = require_column(df, DATE_COLUMN)?.cast(&DataType::Int32)?;
    let values = series
        .i32()?
        .into_iter()
        .map(|days| {
            days.and_then(|d| NaiveDate::from_num_days_from_ce_opt(d + UNIX_EPOCH_DAYS_FROM_CE))
        })
        .collect();
    Ok(values)
}
