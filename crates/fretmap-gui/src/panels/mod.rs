//! GUI panels

mod controls;
mod diagram;

pub use controls::{ControlsPanel, SetMode, SideState};
pub use diagram::DiagramPanel;
