// egui sidebar: the four numeric inputs, readouts, and energy bars.

use egui_plot::{Bar, BarChart, Plot, PlotPoint, Text};
use pitch_core::scene::EnergyBar;
use pitch_core::{ExerciseInput, SessionReport};

/// Current widget values. Always concrete here — the core's Option-based
/// snapshot exists for hosts that can hand over cleared fields.
pub struct PanelState {
    pub team_a: u32,
    pub team_b: u32,
    pub length_m: f64,
    pub width_m: f64,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            team_a: 5,
            team_b: 5,
            length_m: 40.0,
            width_m: 30.0,
        }
    }
}

impl PanelState {
    /// Snapshot of the widgets for the core pipeline.
    pub fn snapshot(&self) -> ExerciseInput {
        ExerciseInput {
            team_a: Some(self.team_a),
            team_b: Some(self.team_b),
            length_m: Some(self.length_m),
            width_m: Some(self.width_m),
        }
    }

    /// Write the clamped dimensions back into the widgets, so a typed 500
    /// redisplays as 105 after the next evaluation.
    pub fn apply_clamped(&mut self, report: &SessionReport) {
        self.length_m = report.geometry.exercise_length;
        self.width_m = report.geometry.exercise_width;
    }
}

/// Draw the left parameter panel. Returns `true` if any of the four
/// inputs changed (meaning the report must be re-evaluated).
pub fn draw_panel(ctx: &egui::Context, state: &mut PanelState, report: &SessionReport) -> bool {
    let mut changed = false;

    egui::SidePanel::left("parameters")
        .min_width(300.0)
        .show(ctx, |ui| {
            ui.heading("Parametros");
            ui.separator();

            ui.label(egui::RichText::new(&report.area_text).strong());
            ui.label(egui::RichText::new(&report.density_text).strong());
            ui.separator();

            // Team sizes. The 1..=11 range is a UI hint; the core accepts
            // anything.
            ui.label("N jugadores Equipo A:");
            if ui
                .add(egui::Slider::new(&mut state.team_a, 1..=11))
                .changed()
            {
                changed = true;
            }

            ui.label("N jugadores Equipo B:");
            if ui
                .add(egui::Slider::new(&mut state.team_b, 1..=11))
                .changed()
            {
                changed = true;
            }

            // Geometry. Open-ended above 5 m; the resolver caps at the
            // full pitch and the capped value is written back.
            ui.label("Largo (m):");
            if ui
                .add(
                    egui::DragValue::new(&mut state.length_m)
                        .range(5.0..=f64::INFINITY)
                        .speed(1.0)
                        .suffix(" m"),
                )
                .changed()
            {
                changed = true;
            }

            ui.label("Ancho (m):");
            if ui
                .add(
                    egui::DragValue::new(&mut state.width_m)
                        .range(5.0..=f64::INFINITY)
                        .speed(1.0)
                        .suffix(" m"),
                )
                .changed()
            {
                changed = true;
            }

            ui.separator();

            for bar in &report.bars {
                draw_energy_bar(ui, bar);
            }
        });

    changed
}

/// One horizontal mini bar chart on the fixed 0..=5 axis, with the metric
/// name repeated inside the plot.
fn draw_energy_bar(ui: &mut egui::Ui, bar: &EnergyBar) {
    let chart = BarChart::new(vec![Bar::new(0.0, f64::from(bar.level)).width(2.0)])
        .horizontal()
        .color(egui::Color32::ORANGE)
        .name(&bar.label);

    Plot::new(format!("energy_bar_{}", bar.label))
        .height(60.0)
        .include_x(0.0)
        .include_x(f64::from(bar.max_level))
        .show_axes([true, false])
        .show_grid(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
            plot_ui.text(Text::new(
                PlotPoint::new(f64::from(bar.max_level) / 2.0, 0.0),
                bar.label.clone(),
            ));
        });
}
