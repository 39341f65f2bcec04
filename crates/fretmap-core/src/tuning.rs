//! String tunings

use crate::pitch::PitchClass;

/// Number of strings on the modeled instrument
pub const STRING_COUNT: usize = 6;

/// Open-string pitch classes for a 6-string instrument.
///
/// Strings are always stored low-to-high; anything that wants the
/// high string first reverses at the presentation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tuning {
    name: &'static str,
    strings: [PitchClass; STRING_COUNT],
}

use crate::pitch::PitchClass::*;

const PRESETS: [Tuning; 5] = [
    Tuning { name: "Standard (E A D G B E)", strings: [E, A, D, G, B, E] },
    Tuning { name: "Drop D", strings: [D, A, D, G, B, E] },
    Tuning { name: "DADGAD", strings: [D, A, D, G, A, D] },
    Tuning { name: "Open G", strings: [D, G, D, G, B, D] },
    Tuning { name: "Half-Step Down", strings: [DSharp, GSharp, CSharp, FSharp, ASharp, DSharp] },
];

impl Tuning {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Open-string pitch classes, low string first
    pub fn strings(&self) -> &[PitchClass; STRING_COUNT] {
        &self.strings
    }

    /// All built-in tunings
    pub fn presets() -> &'static [Tuning] {
        &PRESETS
    }

    /// Look up a built-in tuning by name
    pub fn preset(name: &str) -> Option<&'static Tuning> {
        PRESETS.iter().find(|t| t.name == name)
    }

    /// Standard tuning, the default everywhere
    pub fn standard() -> &'static Tuning {
        &PRESETS[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_is_low_to_high() {
        let strings = Tuning::standard().strings();
        assert_eq!(strings[0], PitchClass::E); // low E
        assert_eq!(strings[5], PitchClass::E); // high E
        assert_eq!(strings[1], PitchClass::A);
    }

    #[test]
    fn test_preset_lookup() {
        assert!(Tuning::preset("Drop D").is_some());
        assert!(Tuning::preset("Nashville").is_none());
    }
}
