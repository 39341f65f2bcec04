//! Fret ranges and the derived note grid

use crate::error::{FretmapError, Result};
use crate::pitch::PitchClass;
use crate::tuning::{Tuning, STRING_COUNT};

/// Highest fret the model accepts
pub const MAX_FRET: u8 = 24;

/// Inclusive fret span displayed on the neck.
///
/// Validated at construction; everything downstream assumes a valid
/// range and does not re-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FretRange {
    start: u8,
    end: u8,
}

impl FretRange {
    pub fn new(start: u8, end: u8) -> Result<Self> {
        if start >= end || end > MAX_FRET {
            return Err(FretmapError::InvalidFretRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u8 {
        self.start
    }

    pub fn end(&self) -> u8 {
        self.end
    }

    /// Number of frets in the range, endpoints included
    pub fn span(&self) -> usize {
        (self.end - self.start + 1) as usize
    }

    pub fn frets(&self) -> impl Iterator<Item = u8> {
        self.start..=self.end
    }

    pub fn contains(&self, fret: u8) -> bool {
        fret >= self.start && fret <= self.end
    }
}

/// Pitch class of every (string, fret) cell in a range.
///
/// Rows follow the tuning's canonical low-to-high order. The grid is
/// a pure derivation of (tuning, range); callers rebuild it on every
/// parameter change rather than mutating it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteGrid {
    range: FretRange,
    rows: Vec<Vec<PitchClass>>,
}

impl NoteGrid {
    pub fn generate(tuning: &Tuning, range: FretRange) -> Self {
        let rows = tuning
            .strings()
            .iter()
            .map(|open| range.frets().map(|fret| open.at_fret(fret)).collect())
            .collect();
        Self { range, rows }
    }

    pub fn range(&self) -> FretRange {
        self.range
    }

    /// Rows of pitch classes, low string first
    pub fn rows(&self) -> &[Vec<PitchClass>] {
        &self.rows
    }

    /// Pitch class at a string index (0 = low string) and absolute fret
    pub fn note_at(&self, string: usize, fret: u8) -> Option<PitchClass> {
        if string >= STRING_COUNT || !self.range.contains(fret) {
            return None;
        }
        Some(self.rows[string][(fret - self.range.start) as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::PitchClass::*;

    #[test]
    fn test_range_validation() {
        assert!(FretRange::new(0, 12).is_ok());
        assert!(FretRange::new(5, 5).is_err());
        assert!(FretRange::new(7, 3).is_err());
        assert!(FretRange::new(0, 25).is_err());
    }

    #[test]
    fn test_grid_dimensions() {
        let range = FretRange::new(3, 9).unwrap();
        let grid = NoteGrid::generate(Tuning::standard(), range);
        assert_eq!(grid.rows().len(), STRING_COUNT);
        for row in grid.rows() {
            assert_eq!(row.len(), range.span());
        }
    }

    #[test]
    fn test_low_e_string_first_octave() {
        let range = FretRange::new(0, 12).unwrap();
        let grid = NoteGrid::generate(Tuning::standard(), range);
        assert_eq!(
            grid.rows()[0],
            vec![E, F, FSharp, G, GSharp, A, ASharp, B, C, CSharp, D, DSharp, E]
        );
    }

    #[test]
    fn test_note_at_offsets_into_range() {
        let range = FretRange::new(5, 10).unwrap();
        let grid = NoteGrid::generate(Tuning::standard(), range);
        assert_eq!(grid.note_at(0, 5), Some(A)); // low E, 5th fret
        assert_eq!(grid.note_at(0, 4), None); // before range
        assert_eq!(grid.note_at(6, 5), None); // no such string
    }
}
