//! Main application state

use std::path::PathBuf;

use eframe::CreationContext;
use egui::{Context, Rect, RichText};
use fretmap_core::{ChordQuality, Diagram, FretRange, LabelMode, PitchClass, ScaleKind, Tuning};

use crate::export;
use crate::panels::{ControlsPanel, DiagramPanel, SetMode, SideState};

// ── App config persistence ──────────────────────────────────────────

#[derive(serde::Serialize, serde::Deserialize)]
struct AppConfig {
    #[serde(default = "SideConfig::default_left")]
    left: SideConfig,
    #[serde(default = "SideConfig::default_right")]
    right: SideConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            left: SideConfig::default_left(),
            right: SideConfig::default_right(),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
struct SideConfig {
    tuning: String,
    mode: SetMode,
    root: PitchClass,
    scale: ScaleKind,
    chord: ChordQuality,
    custom: Vec<PitchClass>,
    start_fret: u8,
    end_fret: u8,
    label_mode: LabelMode,
}

impl SideConfig {
    fn default_left() -> Self {
        Self::from_state(&SideState::new(PitchClass::C, ScaleKind::Major))
    }

    fn default_right() -> Self {
        Self::from_state(&SideState::new(PitchClass::A, ScaleKind::Minor))
    }

    fn from_state(state: &SideState) -> Self {
        Self {
            tuning: state.tuning.name().to_string(),
            mode: state.mode,
            root: state.root,
            scale: state.scale,
            chord: state.chord,
            custom: state.custom.clone(),
            start_fret: state.start_fret,
            end_fret: state.end_fret,
            label_mode: state.label_mode,
        }
    }

    fn into_state(self) -> SideState {
        let mut state = SideState::new(self.root, self.scale);
        if let Some(tuning) = Tuning::preset(&self.tuning) {
            state.tuning = *tuning;
        }
        state.mode = self.mode;
        state.chord = self.chord;
        state.custom = self.custom;
        state.start_fret = self.start_fret;
        state.end_fret = self.end_fret;
        state.label_mode = self.label_mode;
        state.sanitize();
        state
    }
}

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fretmap")
        .join("config.toml")
}

fn load_config() -> AppConfig {
    let path = config_path();
    std::fs::read_to_string(&path)
        .ok()
        .and_then(|s| toml::from_str(&s).ok())
        .unwrap_or_default()
}

fn save_config(config: &AppConfig) {
    let path = config_path();
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let Ok(s) = toml::to_string_pretty(config) else { return };
    let _ = std::fs::write(&path, s);
}

pub struct FretmapApp {
    left: SideState,
    right: SideState,
    controls: ControlsPanel,
    diagram_panel: DiagramPanel,

    // Export state: the rect to crop to and the chosen destination
    export_rect: Option<Rect>,
    pending_export: Option<PathBuf>,
}

impl FretmapApp {
    pub fn new(_cc: &CreationContext<'_>) -> Self {
        let config = load_config();
        Self {
            left: config.left.into_state(),
            right: config.right.into_state(),
            controls: ControlsPanel,
            diagram_panel: DiagramPanel::new(),
            export_rect: None,
            pending_export: None,
        }
    }

    fn start_export(&mut self, ctx: &Context) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG image", &["png"])
            .set_file_name("fretboard.png")
            .save_file()
        else {
            return;
        };
        self.pending_export = Some(path);
        ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(Default::default()));
    }

    fn handle_screenshot(&mut self, ctx: &Context) {
        let screenshot = ctx.input(|i| {
            i.events.iter().find_map(|e| match e {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        let Some(image) = screenshot else { return };
        let Some(path) = self.pending_export.take() else { return };

        match export::save_png(&image, self.export_rect, ctx.pixels_per_point(), &path) {
            Ok(()) => tracing::info!("Exported diagram to {}", path.display()),
            Err(e) => tracing::error!("Failed to export diagram: {e:#}"),
        }
    }
}

/// One column: controls on top, diagram below
fn side_ui(
    ui: &mut egui::Ui,
    controls: &mut ControlsPanel,
    panel: &DiagramPanel,
    side: &mut SideState,
    id: &str,
    title: &str,
) -> Rect {
    ui.strong(title);
    controls.ui(ui, side, id);
    ui.add_space(6.0);

    let set = side.note_set();
    if set.is_empty() {
        ui.label(RichText::new("Select at least one note to highlight").italics());
    }

    let Ok(range) = FretRange::new(side.start_fret, side.end_fret) else {
        // The sliders keep the range valid; reset whatever a stale
        // config smuggled past them
        side.start_fret = 0;
        side.end_fret = 12;
        return ui.min_rect();
    };

    let diagram = Diagram::build(&side.tuning, range, Some(&set), side.label_mode);
    panel.ui(ui, &diagram, &side.tuning)
}

impl eframe::App for FretmapApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_screenshot(ctx);

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Fretboard Comparison View");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Export PNG").clicked() {
                        self.start_export(ctx);
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |cols| {
                let left_rect = side_ui(
                    &mut cols[0],
                    &mut self.controls,
                    &self.diagram_panel,
                    &mut self.left,
                    "left",
                    "Left Fretboard",
                );
                let right_rect = side_ui(
                    &mut cols[1],
                    &mut self.controls,
                    &self.diagram_panel,
                    &mut self.right,
                    "right",
                    "Right Fretboard",
                );
                self.export_rect = Some(left_rect.union(right_rect));
            });
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        save_config(&AppConfig {
            left: SideConfig::from_state(&self.left),
            right: SideConfig::from_state(&self.right),
        });
    }
}
