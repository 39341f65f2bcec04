//! Form controls for one fretboard side

use egui::{ComboBox, Slider, Ui};
use fretmap_core::{
    ChordQuality, LabelMode, NoteSet, PitchClass, ScaleKind, Tuning, CHORD_QUALITIES, CHROMATIC,
    MAX_FRET, SCALE_KINDS,
};
use serde::{Deserialize, Serialize};

/// How the highlighted note set is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetMode {
    Scale,
    Chord,
    Custom,
}

/// Current selections for one fretboard
pub struct SideState {
    pub tuning: Tuning,
    pub mode: SetMode,
    pub root: PitchClass,
    pub scale: ScaleKind,
    pub chord: ChordQuality,
    pub custom: Vec<PitchClass>,
    pub start_fret: u8,
    pub end_fret: u8,
    pub label_mode: LabelMode,
}

impl SideState {
    pub fn new(root: PitchClass, scale: ScaleKind) -> Self {
        Self {
            tuning: *Tuning::standard(),
            mode: SetMode::Scale,
            root,
            scale,
            chord: ChordQuality::Major,
            custom: Vec::new(),
            start_fret: 0,
            end_fret: 12,
            label_mode: LabelMode::Note,
        }
    }

    /// Active note set per the current mode
    pub fn note_set(&self) -> NoteSet {
        match self.mode {
            SetMode::Scale => NoteSet::scale(self.root, self.scale),
            SetMode::Chord => NoteSet::chord(self.root, self.chord),
            SetMode::Custom => NoteSet::custom(self.root, &self.custom),
        }
    }

    /// Clamp fret bounds back to a valid range. The sliders keep them
    /// valid; a hand-edited config file may not.
    pub fn sanitize(&mut self) {
        self.start_fret = self.start_fret.min(MAX_FRET - 1);
        self.end_fret = self.end_fret.clamp(self.start_fret + 1, MAX_FRET);
    }
}

pub struct ControlsPanel;

impl ControlsPanel {
    pub fn ui(&mut self, ui: &mut Ui, side: &mut SideState, id: &str) {
        ui.horizontal(|ui| {
            ui.label("Tuning:");
            ComboBox::from_id_salt((id, "tuning"))
                .selected_text(side.tuning.name())
                .show_ui(ui, |ui| {
                    for preset in Tuning::presets() {
                        ui.selectable_value(&mut side.tuning, *preset, preset.name());
                    }
                });
        });

        ui.horizontal(|ui| {
            ui.selectable_value(&mut side.mode, SetMode::Scale, "Scale");
            ui.selectable_value(&mut side.mode, SetMode::Chord, "Chord");
            ui.selectable_value(&mut side.mode, SetMode::Custom, "Custom");
        });

        match side.mode {
            SetMode::Scale => {
                ui.horizontal(|ui| {
                    ui.label("Root:");
                    Self::root_combo(ui, id, &mut side.root, &CHROMATIC);
                    ComboBox::from_id_salt((id, "scale"))
                        .selected_text(side.scale.name())
                        .show_ui(ui, |ui| {
                            for kind in SCALE_KINDS {
                                ui.selectable_value(&mut side.scale, kind, kind.name());
                            }
                        });
                });
            }
            SetMode::Chord => {
                ui.horizontal(|ui| {
                    ui.label("Root:");
                    Self::root_combo(ui, id, &mut side.root, &CHROMATIC);
                    ComboBox::from_id_salt((id, "chord"))
                        .selected_text(side.chord.name())
                        .show_ui(ui, |ui| {
                            for quality in CHORD_QUALITIES {
                                ui.selectable_value(&mut side.chord, quality, quality.name());
                            }
                        });
                });
            }
            SetMode::Custom => {
                ui.horizontal_wrapped(|ui| {
                    for pc in CHROMATIC {
                        let selected = side.custom.contains(&pc);
                        if ui.selectable_label(selected, pc.name()).clicked() {
                            if selected {
                                side.custom.retain(|&n| n != pc);
                            } else {
                                side.custom.push(pc);
                            }
                        }
                    }
                });

                // The root is always an explicit choice among the
                // selected notes, never inferred from click order
                if !side.custom.contains(&side.root) {
                    if let Some(&first) = side.custom.first() {
                        side.root = first;
                    }
                }
                if !side.custom.is_empty() {
                    ui.horizontal(|ui| {
                        ui.label("Root:");
                        Self::root_combo(ui, id, &mut side.root, &side.custom);
                    });
                }
            }
        }

        ui.add(Slider::new(&mut side.start_fret, 0..=MAX_FRET - 1).text("Start fret"));
        side.end_fret = side.end_fret.clamp(side.start_fret + 1, MAX_FRET);
        ui.add(Slider::new(&mut side.end_fret, side.start_fret + 1..=MAX_FRET).text("End fret"));

        ui.horizontal(|ui| {
            ui.label("Labels:");
            ui.radio_value(&mut side.label_mode, LabelMode::Note, "Note");
            ui.radio_value(&mut side.label_mode, LabelMode::Interval, "Interval");
            ui.radio_value(&mut side.label_mode, LabelMode::None, "None");
        });
    }

    fn root_combo(ui: &mut Ui, id: &str, root: &mut PitchClass, choices: &[PitchClass]) {
        ComboBox::from_id_salt((id, "root"))
            .selected_text(root.name())
            .width(56.0)
            .show_ui(ui, |ui| {
                for &pc in choices {
                    ui.selectable_value(root, pc, pc.name());
                }
            });
    }
}
