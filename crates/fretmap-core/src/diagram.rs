//! Per-cell highlight state handed to the rendering layer

use serde::{Deserialize, Serialize};

use crate::fretboard::{FretRange, NoteGrid};
use crate::pitch::{interval_label, PitchClass};
use crate::scale::NoteSet;
use crate::tuning::Tuning;

/// Frets that carry inlay dots on a typical neck
pub const INLAY_FRETS: [u8; 10] = [3, 5, 7, 9, 12, 15, 17, 19, 21, 24];

/// What to print on each highlighted cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelMode {
    Note,
    Interval,
    None,
}

/// A highlighted cell of the diagram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramCell {
    /// String index, 0 = low string
    pub string: usize,
    /// Absolute fret number
    pub fret: u8,
    pub pitch: PitchClass,
    /// Whether this cell's pitch class equals the set root
    pub is_root: bool,
    /// Text drawn on the marker; empty under `LabelMode::None`
    pub label: String,
}

/// Everything the rendering layer needs for one fretboard.
///
/// Rebuilt from scratch whenever any selection changes. A missing or
/// empty note set yields a diagram with no marked cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    grid: NoteGrid,
    marked: Vec<DiagramCell>,
    title: String,
}

impl Diagram {
    pub fn build(
        tuning: &Tuning,
        range: FretRange,
        set: Option<&NoteSet>,
        label_mode: LabelMode,
    ) -> Self {
        let grid = NoteGrid::generate(tuning, range);
        let mut marked = Vec::new();

        if let Some(set) = set {
            for (string, row) in grid.rows().iter().enumerate() {
                for (offset, &pitch) in row.iter().enumerate() {
                    if !set.contains(pitch) {
                        continue;
                    }
                    let label = match label_mode {
                        LabelMode::Note => pitch.name().to_string(),
                        LabelMode::Interval => interval_label(set.root(), pitch).to_string(),
                        LabelMode::None => String::new(),
                    };
                    marked.push(DiagramCell {
                        string,
                        fret: range.start() + offset as u8,
                        pitch,
                        is_root: pitch == set.root(),
                        label,
                    });
                }
            }
        }

        Self {
            grid,
            marked,
            title: set.map(|s| s.name().to_string()).unwrap_or_default(),
        }
    }

    pub fn grid(&self) -> &NoteGrid {
        &self.grid
    }

    /// Highlighted cells, in (string, fret) order
    pub fn marked(&self) -> &[DiagramCell] {
        &self.marked
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Inlay-dot frets that fall inside the displayed range
    pub fn inlays(&self) -> impl Iterator<Item = u8> + '_ {
        let range = self.grid.range();
        INLAY_FRETS.into_iter().filter(move |&f| range.contains(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::PitchClass::*;
    use crate::scale::{ChordQuality, ScaleKind};

    fn cell<'a>(diagram: &'a Diagram, string: usize, fret: u8) -> Option<&'a DiagramCell> {
        diagram
            .marked()
            .iter()
            .find(|c| c.string == string && c.fret == fret)
    }

    #[test]
    fn test_c_major_on_standard_tuning() {
        let set = NoteSet::scale(C, ScaleKind::Major);
        let range = FretRange::new(0, 12).unwrap();
        let diagram = Diagram::build(Tuning::standard(), range, Some(&set), LabelMode::Note);

        // Open low E is in the set but is not the root
        let open_e = cell(&diagram, 0, 0).unwrap();
        assert!(!open_e.is_root);
        assert_eq!(open_e.label, "E");

        // Fret 3 on the low string is G, in the set
        assert!(cell(&diagram, 0, 3).is_some());
        // F (fret 1) is in C Major; F# (fret 2) is not
        assert!(cell(&diagram, 0, 1).is_some());
        assert!(cell(&diagram, 0, 2).is_none());

        // Fret 8 on the low string is the root C
        assert!(cell(&diagram, 0, 8).unwrap().is_root);
        assert_eq!(diagram.title(), "C Major");
    }

    #[test]
    fn test_interval_labels_relative_to_root() {
        let set = NoteSet::scale(A, ScaleKind::Minor);
        let range = FretRange::new(0, 5).unwrap();
        let diagram = Diagram::build(Tuning::standard(), range, Some(&set), LabelMode::Interval);

        // Open A string is the root
        let open_a = cell(&diagram, 1, 0).unwrap();
        assert!(open_a.is_root);
        assert_eq!(open_a.label, "1");

        // C on the A string (3rd fret) is a minor third from A
        assert_eq!(cell(&diagram, 1, 3).unwrap().label, "b3");
    }

    #[test]
    fn test_label_mode_none_is_blank() {
        let set = NoteSet::chord(E, ChordQuality::Minor);
        let range = FretRange::new(0, 4).unwrap();
        let diagram = Diagram::build(Tuning::standard(), range, Some(&set), LabelMode::None);
        assert!(!diagram.marked().is_empty());
        assert!(diagram.marked().iter().all(|c| c.label.is_empty()));
    }

    #[test]
    fn test_empty_set_marks_nothing() {
        let set = NoteSet::custom(C, &[]);
        let range = FretRange::new(0, 12).unwrap();
        let diagram = Diagram::build(Tuning::standard(), range, Some(&set), LabelMode::Note);
        assert!(diagram.marked().is_empty());

        let no_set = Diagram::build(Tuning::standard(), range, None, LabelMode::Note);
        assert!(no_set.marked().is_empty());
    }

    #[test]
    fn test_inlays_clip_to_range() {
        let range = FretRange::new(4, 10).unwrap();
        let diagram = Diagram::build(Tuning::standard(), range, None, LabelMode::None);
        assert_eq!(diagram.inlays().collect::<Vec<_>>(), vec![5, 7, 9]);
    }
}
