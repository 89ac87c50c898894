pub mod constants;
pub mod energy;
pub mod geometry;
pub mod scene;

use serde::{Deserialize, Serialize};

use energy::{DensityMetrics, EnergyLevels};
use geometry::PitchGeometry;
use scene::{EnergyBar, Scene};

// ---------------------------------------------------------------------------
// Shared interface types — the presentation layer builds against these
// ---------------------------------------------------------------------------

/// Snapshot of the four user inputs. Recreated from current widget state
/// on every change; `None` models a cleared input field. Carries no
/// identity beyond its current values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExerciseInput {
    /// Players in team A.
    pub team_a: Option<u32>,
    /// Players in team B.
    pub team_b: Option<u32>,
    /// Requested exercise length in metres.
    pub length_m: Option<f64>,
    /// Requested exercise width in metres.
    pub width_m: Option<f64>,
}

impl Default for ExerciseInput {
    fn default() -> Self {
        // Starting session: 5 vs 5 on a 40×30 area.
        Self {
            team_a: Some(5),
            team_b: Some(5),
            length_m: Some(40.0),
            width_m: Some(30.0),
        }
    }
}

/// Everything derived from one input snapshot — consumed by the UI for
/// drawing and readouts, or shipped as data to an external client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    /// Clamped, authoritative exercise dimensions (redisplayed by the UI).
    pub geometry: PitchGeometry,
    /// Area, player count, and density at full precision.
    pub metrics: DensityMetrics,
    /// The four demand indicators derived from density.
    pub levels: EnergyLevels,
    /// Pre-formatted sidebar readout for the total area.
    pub area_text: String,
    /// Pre-formatted sidebar readout for the density.
    pub density_text: String,
    /// Bar descriptors in presentation order.
    pub bars: [EnergyBar; 4],
    /// Ordered shape list for the pitch view.
    pub scene: Scene,
}

/// Run the full pipeline: resolve geometry, derive density and energy
/// levels, compose the scene and bars. Pure and total — any input state,
/// however degenerate, yields a valid report.
pub fn evaluate(input: &ExerciseInput) -> SessionReport {
    let geometry = geometry::resolve(input.length_m, input.width_m);
    let metrics = DensityMetrics::compute(&geometry, input.team_a, input.team_b);
    let levels = EnergyLevels::from_density(metrics.density_per_player);

    SessionReport {
        geometry,
        area_text: metrics.area_text(),
        density_text: metrics.density_text(),
        bars: scene::energy_bars(&levels),
        scene: scene::compose_pitch(&geometry),
        metrics,
        levels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_report() {
        let report = evaluate(&ExerciseInput::default());
        assert_eq!(report.geometry.exercise_length, 40.0);
        assert_eq!(report.geometry.exercise_width, 30.0);
        assert_eq!(report.metrics.density_per_player, 120.0);
        assert_eq!(report.levels.as_array(), [3, 2, 1, 5]);
        assert_eq!(report.area_text, "Area Total: 1200 m²");
        assert_eq!(report.density_text, "Densidad por jugador: 120 m²");
    }

    #[test]
    fn test_empty_snapshot_still_yields_a_report() {
        let input = ExerciseInput {
            team_a: None,
            team_b: None,
            length_m: None,
            width_m: None,
        };
        let report = evaluate(&input);
        // Fallback geometry, zero players, bottom energy band.
        assert_eq!(report.geometry.exercise_length, 50.0);
        assert_eq!(report.geometry.exercise_width, 30.0);
        assert_eq!(report.metrics.density_per_player, 0.0);
        assert_eq!(report.levels.as_array(), [1, 0, 0, 4]);
        assert!(!report.scene.shapes.is_empty());
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let input = ExerciseInput {
            team_a: Some(3),
            team_b: Some(8),
            length_m: Some(77.0),
            width_m: Some(41.0),
        };
        assert_eq!(evaluate(&input), evaluate(&input));
    }

    #[test]
    fn test_report_serializes_as_structured_data() {
        let report = evaluate(&ExerciseInput::default());
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&report).unwrap()).unwrap();
        assert_eq!(json["geometry"]["exercise_length"], 40.0);
        assert_eq!(json["metrics"]["total_players"], 10);
        assert_eq!(json["levels"]["accel_decel"], 5);
        assert_eq!(json["bars"][0]["label"], "Distancia total");
        assert_eq!(json["scene"]["title"], "Dimensiones y Densidad");
    }
}
