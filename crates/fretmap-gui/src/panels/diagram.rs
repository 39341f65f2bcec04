//! Fretboard diagram rendering

use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2};
use fretmap_core::{Diagram, Tuning, STRING_COUNT};

const BOARD_BG: Color32 = Color32::from_rgb(0xf1, 0xe2, 0xc6);
const ROOT_COLOR: Color32 = Color32::from_rgb(139, 0, 0); // darkred
const MARKER_COLOR: Color32 = Color32::from_rgb(139, 69, 19); // saddlebrown

pub struct DiagramPanel {
    /// Height of the painted board area
    board_height: f32,
}

impl Default for DiagramPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagramPanel {
    pub fn new() -> Self {
        Self { board_height: 190.0 }
    }

    /// Draw one fretboard. Returns the painted rect so the app can
    /// crop exports to it.
    pub fn ui(&self, ui: &mut Ui, diagram: &Diagram, tuning: &Tuning) -> Rect {
        let width = ui.available_width();
        let height = self.board_height + 48.0;
        let (response, painter) = ui.allocate_painter(Vec2::new(width, height), Sense::hover());
        let full = response.rect;

        let name_gutter = 30.0;
        let title_h = 22.0;
        let inlay_h = 16.0;
        let board = Rect::from_min_max(
            Pos2::new(full.left() + name_gutter, full.top() + title_h),
            Pos2::new(full.right() - 8.0, full.bottom() - inlay_h - 8.0),
        );

        painter.rect_filled(full, 4.0, BOARD_BG);

        painter.text(
            Pos2::new(full.center().x, full.top() + 4.0),
            Align2::CENTER_TOP,
            diagram.title(),
            FontId::proportional(14.0),
            Color32::BLACK,
        );

        let range = diagram.grid().range();
        let span = range.span();
        let cell_w = board.width() / span as f32;
        let string_gap = board.height() / STRING_COUNT as f32;

        // Low string at the bottom, matching how players read charts
        let string_y = |string: usize| board.bottom() - (string as f32 + 0.5) * string_gap;
        let fret_x = |fret: u8| board.left() + ((fret - range.start()) as f32 + 0.5) * cell_w;

        // Fret separators
        for i in 0..=span {
            let x = board.left() + i as f32 * cell_w;
            painter.extend(Shape::dashed_line(
                &[Pos2::new(x, board.top()), Pos2::new(x, board.bottom())],
                Stroke::new(1.0, Color32::GRAY),
                4.0,
                4.0,
            ));
        }

        // Strings
        for s in 0..STRING_COUNT {
            let y = string_y(s);
            painter.line_segment(
                [Pos2::new(board.left(), y), Pos2::new(board.right(), y)],
                Stroke::new(1.5, Color32::BLACK),
            );
        }

        // Open-string names in the left gutter
        for (s, open) in tuning.strings().iter().enumerate() {
            painter.text(
                Pos2::new(board.left() - 6.0, string_y(s)),
                Align2::RIGHT_CENTER,
                open.name(),
                FontId::proportional(11.0),
                Color32::BLACK,
            );
        }

        // Inlay dots under the board
        for fret in diagram.inlays() {
            painter.circle_filled(
                Pos2::new(fret_x(fret), board.bottom() + inlay_h * 0.5),
                2.5,
                Color32::DARK_GRAY,
            );
        }

        // Note markers
        let marker_r = (string_gap * 0.38).min(cell_w * 0.4).min(11.0);
        for cell in diagram.marked() {
            let center = Pos2::new(fret_x(cell.fret), string_y(cell.string));
            let color = if cell.is_root { ROOT_COLOR } else { MARKER_COLOR };
            painter.circle_filled(center, marker_r, color);
            if !cell.label.is_empty() {
                painter.text(
                    center,
                    Align2::CENTER_CENTER,
                    &cell.label,
                    FontId::proportional(9.5),
                    Color32::WHITE,
                );
            }
        }

        full
    }
}
