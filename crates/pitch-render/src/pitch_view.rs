// Central panel: the pitch scene drawn with the egui painter.

use pitch_core::constants::{CANVAS_HEIGHT, CANVAS_WIDTH, PITCH_LENGTH, PITCH_WIDTH};
use pitch_core::scene::{Rgba, Scene, Shape};

fn to_color32(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

/// Draw the scene in the central panel, mapping field coordinates
/// [0, 105] × [0, 68] onto the canvas. Field y points up, screen y points
/// down, so the projection flips the vertical axis.
pub fn draw_pitch(ctx: &egui::Context, scene: &Scene) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(&scene.title);

        // Fit the conceptual 800×520 canvas into the available space,
        // keeping its aspect ratio.
        let available = ui.available_size();
        let aspect = CANVAS_WIDTH / CANVAS_HEIGHT;
        let canvas = if available.x / available.y > aspect {
            egui::vec2(available.y * aspect, available.y)
        } else {
            egui::vec2(available.x, available.x / aspect)
        };

        let (response, painter) = ui.allocate_painter(canvas, egui::Sense::hover());
        let rect = response.rect;

        let padding = 20.0;
        let scale = ((rect.width() - 2.0 * padding) / PITCH_LENGTH as f32)
            .min((rect.height() - 2.0 * padding) / PITCH_WIDTH as f32);
        if scale <= 0.0 {
            return;
        }
        // Screen position of the field origin (bottom-left corner flag).
        let origin = egui::pos2(
            rect.center().x - scale * PITCH_LENGTH as f32 / 2.0,
            rect.center().y + scale * PITCH_WIDTH as f32 / 2.0,
        );
        let project =
            |x: f64, y: f64| egui::pos2(origin.x + x as f32 * scale, origin.y - y as f32 * scale);

        for shape in &scene.shapes {
            match shape {
                Shape::Rect {
                    x0,
                    y0,
                    x1,
                    y1,
                    stroke,
                    fill,
                } => {
                    let screen_rect =
                        egui::Rect::from_two_pos(project(*x0, *y0), project(*x1, *y1));
                    if let Some(fill) = fill {
                        painter.rect_filled(screen_rect, 0.0, to_color32(*fill));
                    }
                    painter.rect_stroke(
                        screen_rect,
                        0.0,
                        egui::Stroke::new(1.5, to_color32(*stroke)),
                        egui::StrokeKind::Outside,
                    );
                }
                Shape::Line {
                    x0,
                    y0,
                    x1,
                    y1,
                    stroke,
                } => {
                    painter.line_segment(
                        [project(*x0, *y0), project(*x1, *y1)],
                        egui::Stroke::new(1.5, to_color32(*stroke)),
                    );
                }
                Shape::Circle {
                    cx,
                    cy,
                    radius,
                    stroke,
                } => {
                    painter.circle_stroke(
                        project(*cx, *cy),
                        *radius as f32 * scale,
                        egui::Stroke::new(1.5, to_color32(*stroke)),
                    );
                }
                Shape::Label {
                    x,
                    y,
                    text,
                    rotated,
                } => {
                    draw_label(&painter, project(*x, *y), text, *rotated);
                }
            }
        }
    });
}

/// White label on a black backing, centred at `center`. Rotated labels are
/// turned 90° counter-clockwise so they read bottom-up.
fn draw_label(painter: &egui::Painter, center: egui::Pos2, text: &str, rotated: bool) {
    let galley = painter.layout_no_wrap(
        text.to_string(),
        egui::FontId::proportional(14.0),
        egui::Color32::WHITE,
    );
    let size = galley.size();

    if rotated {
        let backing = egui::Rect::from_center_size(center, egui::vec2(size.y, size.x));
        painter.rect_filled(backing.expand(2.0), 2.0, egui::Color32::BLACK);
        // Rotation by -π/2 is about the galley origin; offset the anchor so
        // the rotated text stays centred.
        let anchor = egui::pos2(center.x - size.y / 2.0, center.y + size.x / 2.0);
        painter.add(
            egui::epaint::TextShape::new(anchor, galley, egui::Color32::WHITE)
                .with_angle(-std::f32::consts::FRAC_PI_2),
        );
    } else {
        let backing = egui::Rect::from_center_size(center, size);
        painter.rect_filled(backing.expand(2.0), 2.0, egui::Color32::BLACK);
        painter.galley(backing.min, galley, egui::Color32::WHITE);
    }
}
