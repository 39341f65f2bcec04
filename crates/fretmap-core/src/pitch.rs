//! Pitch classes and interval arithmetic

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FretmapError, Result};

/// One of the 12 pitch classes, in chromatic order starting at C.
///
/// All pitch arithmetic is taken modulo 12; the discriminant of each
/// variant is its index in the chromatic cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

/// The 12 pitch classes in chromatic order.
pub const CHROMATIC: [PitchClass; 12] = [
    PitchClass::C,
    PitchClass::CSharp,
    PitchClass::D,
    PitchClass::DSharp,
    PitchClass::E,
    PitchClass::F,
    PitchClass::FSharp,
    PitchClass::G,
    PitchClass::GSharp,
    PitchClass::A,
    PitchClass::ASharp,
    PitchClass::B,
];

/// Interval names indexed by semitone distance from the root.
pub const INTERVAL_NAMES: [&str; 12] = [
    "1", "b2", "2", "b3", "3", "4", "b5", "5", "#5", "6", "b7", "7",
];

impl PitchClass {
    /// Index in the chromatic cycle (C = 0, B = 11)
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::C => "C",
            Self::CSharp => "C#",
            Self::D => "D",
            Self::DSharp => "D#",
            Self::E => "E",
            Self::F => "F",
            Self::FSharp => "F#",
            Self::G => "G",
            Self::GSharp => "G#",
            Self::A => "A",
            Self::ASharp => "A#",
            Self::B => "B",
        }
    }

    /// Parse a pitch-class symbol ("C", "F#", ...).
    ///
    /// Fails fast on anything outside the 12-symbol cycle; an unknown
    /// symbol is a config error, not a condition to recover from.
    pub fn from_name(name: &str) -> Result<Self> {
        CHROMATIC
            .iter()
            .copied()
            .find(|pc| pc.name() == name)
            .ok_or_else(|| FretmapError::UnknownPitch(name.to_string()))
    }

    /// Pitch class sounding at `fret` semitones above this open string.
    ///
    /// Pure and periodic with period 12 in the fret offset.
    pub fn at_fret(self, fret: u8) -> Self {
        CHROMATIC[(self.index() + fret as usize) % 12]
    }

    /// Semitone distance from this pitch class up to `other`, mod 12
    pub fn semitones_to(self, other: Self) -> u8 {
        ((other.index() + 12 - self.index()) % 12) as u8
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Interval label ("1", "b3", "5", ...) of `candidate` relative to `root`.
///
/// Total over all pitch-class pairs; `root` against itself is "1".
pub fn interval_label(root: PitchClass, candidate: PitchClass) -> &'static str {
    INTERVAL_NAMES[root.semitones_to(candidate) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_fret_identity_and_periodicity() {
        for pc in CHROMATIC {
            assert_eq!(pc.at_fret(0), pc);
            for fret in 0..24 {
                assert_eq!(pc.at_fret(fret), pc.at_fret(fret + 12));
            }
        }
    }

    #[test]
    fn test_at_fret_walks_the_cycle() {
        assert_eq!(PitchClass::E.at_fret(1), PitchClass::F);
        assert_eq!(PitchClass::E.at_fret(3), PitchClass::G);
        assert_eq!(PitchClass::B.at_fret(1), PitchClass::C); // wraps past B
        assert_eq!(PitchClass::A.at_fret(12), PitchClass::A);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(PitchClass::from_name("F#").unwrap(), PitchClass::FSharp);
        assert_eq!(PitchClass::from_name("C").unwrap(), PitchClass::C);
        assert!(PitchClass::from_name("H").is_err());
        assert!(PitchClass::from_name("c").is_err());
    }

    #[test]
    fn test_interval_label() {
        // A -> C is a minor third
        assert_eq!(interval_label(PitchClass::A, PitchClass::C), "b3");
        assert_eq!(interval_label(PitchClass::C, PitchClass::G), "5");
        for root in CHROMATIC {
            assert_eq!(interval_label(root, root), "1");
            for candidate in CHROMATIC {
                let label = interval_label(root, candidate);
                assert!(INTERVAL_NAMES.contains(&label));
            }
        }
    }
}
