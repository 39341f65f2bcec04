//! Error types for fretmap

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FretmapError {
    #[error("Unknown pitch class: {0}")]
    UnknownPitch(String),
    #[error("Invalid fret range: {start}..={end}")]
    InvalidFretRange { start: u8, end: u8 },
}

pub type Result<T> = std::result::Result<T, FretmapError>;
