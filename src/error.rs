use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("File {} not found. Please check the file name and try again.", .0.display())]
    MissingInputFile(PathBuf),

    #[error("Column '{0}' not found in the data")]
    ColumnNotFound(String),

    #[error("No parseable dates found in the 'Date' column")]
    NoValidDates,

    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("Data processing error (Polars)")]
    Polars(#[from] polars::prelude::PolarsError),

    #[error("Image decoding or encoding error")]
    Image(#[from] image::ImageError),
}
