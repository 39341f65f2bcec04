//! fretmap-core: Fretboard note model for fretmap

mod diagram;
mod error;
mod fretboard;
mod pitch;
mod scale;
mod tuning;

pub use diagram::{Diagram, DiagramCell, LabelMode, INLAY_FRETS};
pub use error::{FretmapError, Result};
pub use fretboard::{FretRange, NoteGrid, MAX_FRET};
pub use pitch::{interval_label, PitchClass, CHROMATIC, INTERVAL_NAMES};
pub use scale::{ChordQuality, NoteSet, ScaleKind, CHORD_QUALITIES, SCALE_KINDS};
pub use tuning::{Tuning, STRING_COUNT};
