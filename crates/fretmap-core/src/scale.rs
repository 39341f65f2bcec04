//! Named scales, chords, and note sets

use serde::{Deserialize, Serialize};

use crate::pitch::PitchClass;

/// Scale/mode types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleKind {
    Major,
    Minor,
    HarmonicMinor,
    MelodicMinor,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Locrian,
    MajorPentatonic,
    MinorPentatonic,
    Blues,
}

/// All scale kinds, in menu order
pub const SCALE_KINDS: [ScaleKind; 12] = [
    ScaleKind::Major,
    ScaleKind::Minor,
    ScaleKind::HarmonicMinor,
    ScaleKind::MelodicMinor,
    ScaleKind::Dorian,
    ScaleKind::Phrygian,
    ScaleKind::Lydian,
    ScaleKind::Mixolydian,
    ScaleKind::Locrian,
    ScaleKind::MajorPentatonic,
    ScaleKind::MinorPentatonic,
    ScaleKind::Blues,
];

impl ScaleKind {
    /// Get scale intervals (semitones from root)
    pub fn intervals(&self) -> &'static [u8] {
        match self {
            Self::Major => &[0, 2, 4, 5, 7, 9, 11],
            Self::Minor => &[0, 2, 3, 5, 7, 8, 10],
            Self::HarmonicMinor => &[0, 2, 3, 5, 7, 8, 11],
            Self::MelodicMinor => &[0, 2, 3, 5, 7, 9, 11],
            Self::Dorian => &[0, 2, 3, 5, 7, 9, 10],
            Self::Phrygian => &[0, 1, 3, 5, 7, 8, 10],
            Self::Lydian => &[0, 2, 4, 6, 7, 9, 11],
            Self::Mixolydian => &[0, 2, 4, 5, 7, 9, 10],
            Self::Locrian => &[0, 1, 3, 5, 6, 8, 10],
            Self::MajorPentatonic => &[0, 2, 4, 7, 9],
            Self::MinorPentatonic => &[0, 3, 5, 7, 10],
            Self::Blues => &[0, 3, 5, 6, 7, 10],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Major => "Major",
            Self::Minor => "Minor",
            Self::HarmonicMinor => "Harmonic Minor",
            Self::MelodicMinor => "Melodic Minor",
            Self::Dorian => "Dorian",
            Self::Phrygian => "Phrygian",
            Self::Lydian => "Lydian",
            Self::Mixolydian => "Mixolydian",
            Self::Locrian => "Locrian",
            Self::MajorPentatonic => "Major Pentatonic",
            Self::MinorPentatonic => "Minor Pentatonic",
            Self::Blues => "Blues",
        }
    }
}

/// Chord quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
    Major7,
    Minor7,
    Dominant7,
    Sus2,
    Sus4,
}

/// All chord qualities, in menu order
pub const CHORD_QUALITIES: [ChordQuality; 9] = [
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Diminished,
    ChordQuality::Augmented,
    ChordQuality::Major7,
    ChordQuality::Minor7,
    ChordQuality::Dominant7,
    ChordQuality::Sus2,
    ChordQuality::Sus4,
];

impl ChordQuality {
    /// Get chord intervals from root
    pub fn intervals(&self) -> &'static [u8] {
        match self {
            Self::Major => &[0, 4, 7],
            Self::Minor => &[0, 3, 7],
            Self::Diminished => &[0, 3, 6],
            Self::Augmented => &[0, 4, 8],
            Self::Major7 => &[0, 4, 7, 11],
            Self::Minor7 => &[0, 3, 7, 10],
            Self::Dominant7 => &[0, 4, 7, 10],
            Self::Sus2 => &[0, 2, 7],
            Self::Sus4 => &[0, 5, 7],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Major => "Major",
            Self::Minor => "Minor",
            Self::Diminished => "Dim",
            Self::Augmented => "Aug",
            Self::Major7 => "Maj7",
            Self::Minor7 => "Min7",
            Self::Dominant7 => "Dom7",
            Self::Sus2 => "Sus2",
            Self::Sus4 => "Sus4",
        }
    }
}

/// An ordered set of pitch classes with an explicit root.
///
/// The root is a field, never inferred from element order, so sets
/// built from multiselect widgets (which do not preserve click order)
/// label intervals correctly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSet {
    name: String,
    root: PitchClass,
    notes: Vec<PitchClass>,
}

impl NoteSet {
    /// Scale built from a root and an interval pattern
    pub fn scale(root: PitchClass, kind: ScaleKind) -> Self {
        Self {
            name: format!("{} {}", root, kind.name()),
            root,
            notes: kind.intervals().iter().map(|&i| root.at_fret(i)).collect(),
        }
    }

    /// Chord built from a root and a quality
    pub fn chord(root: PitchClass, quality: ChordQuality) -> Self {
        Self {
            name: format!("{} {}", root, quality.name()),
            root,
            notes: quality.intervals().iter().map(|&i| root.at_fret(i)).collect(),
        }
    }

    /// Arbitrary user-chosen set. Duplicates are dropped, first
    /// occurrence wins. May be empty; that is a no-op display, not
    /// an error.
    pub fn custom(root: PitchClass, notes: &[PitchClass]) -> Self {
        let mut deduped = Vec::with_capacity(notes.len());
        for &pc in notes {
            if !deduped.contains(&pc) {
                deduped.push(pc);
            }
        }
        Self {
            name: format!("Custom ({})", root),
            root,
            notes: deduped,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> PitchClass {
        self.root
    }

    pub fn notes(&self) -> &[PitchClass] {
        &self.notes
    }

    pub fn contains(&self, pc: PitchClass) -> bool {
        self.notes.contains(&pc)
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::PitchClass::*;

    #[test]
    fn test_c_major_scale() {
        let set = NoteSet::scale(C, ScaleKind::Major);
        assert_eq!(set.notes(), &[C, D, E, F, G, A, B]);
        assert_eq!(set.root(), C);
        assert_eq!(set.name(), "C Major");
    }

    #[test]
    fn test_g_major_has_f_sharp() {
        let set = NoteSet::scale(G, ScaleKind::Major);
        assert_eq!(set.notes(), &[G, A, B, C, D, E, FSharp]);
    }

    #[test]
    fn test_a_minor_chord() {
        let set = NoteSet::chord(A, ChordQuality::Minor);
        assert_eq!(set.notes(), &[A, C, E]);
    }

    #[test]
    fn test_custom_dedup_keeps_order() {
        let set = NoteSet::custom(D, &[D, FSharp, A, D]);
        assert_eq!(set.notes(), &[D, FSharp, A]);
        assert_eq!(set.root(), D);
    }

    #[test]
    fn test_empty_custom_set() {
        let set = NoteSet::custom(C, &[]);
        assert!(set.is_empty());
        assert!(!set.contains(C));
    }
}
